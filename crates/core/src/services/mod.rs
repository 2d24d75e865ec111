pub mod market_service;
pub mod news_service;
pub mod order_service;
pub mod portfolio_service;
pub mod tutorial_service;
