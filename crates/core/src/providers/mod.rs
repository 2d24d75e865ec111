pub mod registry;
pub mod traits;
