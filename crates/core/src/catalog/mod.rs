//! Built-in demo data: the market snapshot, a sample portfolio, recent
//! orders, news and tutorials.

pub mod market;
pub mod news;
pub mod orders;
pub mod portfolio;
pub mod tutorials;
