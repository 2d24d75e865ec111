pub mod analytics;
pub mod format;
pub mod news;
pub mod order;
pub mod portfolio;
pub mod quote;
pub mod settings;
pub mod trade;
pub mod tutorial;
pub mod user;
