pub mod local;
pub mod password;
pub mod remote;
pub mod session;
pub mod traits;
