pub mod auth;
pub mod catalog;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::sync::Arc;

use auth::{
    local::LocalAuthBackend, remote::RemoteAuthBackend, session::SessionManager,
    traits::AuthBackend,
};
use log::info;
use models::{
    analytics::{AllocationSlice, PortfolioSummary, PositionQuery, PositionValuation},
    news::{NewsItem, NewsQuery},
    order::{OrderRequest, OrderSummary},
    portfolio::Portfolio,
    quote::{MarketQuery, MarketStats, Quote, StockProfile},
    settings::Settings,
    trade::Trade,
    tutorial::{Tutorial, TutorialQuery},
    user::User,
};
use providers::registry::QuoteRegistry;
use services::{
    market_service::MarketService, news_service::NewsService, order_service::OrderService,
    portfolio_service::PortfolioService, tutorial_service::TutorialService,
};
use storage::{memory_store::MemoryStore, traits::KeyValueStore};

use errors::CoreError;

/// Number of positions shown in the allocation breakdown.
pub const ALLOCATION_TOP_N: usize = 5;

/// Main entry point for the paper trading core library.
/// Holds the session, the market snapshot, the holdings and all services
/// that work on them.
#[must_use]
pub struct PaperTrader {
    settings: Settings,
    quotes: QuoteRegistry,
    session: SessionManager,
    portfolio: Portfolio,
    news: Vec<NewsItem>,
    tutorials: Vec<Tutorial>,
    recent_orders: Vec<Trade>,
    portfolio_service: PortfolioService,
    order_service: OrderService,
    market_service: MarketService,
    news_service: NewsService,
    tutorial_service: TutorialService,
}

impl std::fmt::Debug for PaperTrader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperTrader")
            .field("settings", &self.settings)
            .field("quotes", &self.quotes.len())
            .field("holdings", &self.portfolio.holdings.len())
            .field("session", &self.session)
            .finish()
    }
}

impl PaperTrader {
    /// Build with the auth backend the settings select: the remote API when
    /// `api_base_url` is set, the local fake user store in `store` otherwise.
    pub fn new(settings: Settings, store: Arc<dyn KeyValueStore>) -> Result<Self, CoreError> {
        settings.validate()?;
        let backend: Box<dyn AuthBackend> = match &settings.api_base_url {
            Some(url) => Box::new(RemoteAuthBackend::new(url.clone())),
            None => Box::new(LocalAuthBackend::new(
                store.clone(),
                settings.starting_balance,
                settings.simulated_delay(),
                settings.kdf,
            )),
        };
        Self::with_backend(settings, store, backend)
    }

    /// Build with an explicit auth backend.
    pub fn with_backend(
        settings: Settings,
        store: Arc<dyn KeyValueStore>,
        backend: Box<dyn AuthBackend>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        info!("starting with {} auth", backend.name());
        Ok(Self {
            order_service: OrderService::new(settings.simulated_delay()),
            session: SessionManager::new(backend, store),
            quotes: QuoteRegistry::new_with_defaults(),
            portfolio: catalog::portfolio::demo_portfolio(),
            news: catalog::news::articles(),
            tutorials: catalog::tutorials::tutorials(),
            recent_orders: catalog::orders::recent_orders(),
            portfolio_service: PortfolioService::new(),
            market_service: MarketService::new(),
            news_service: NewsService::new(),
            tutorial_service: TutorialService::new(),
            settings,
        })
    }

    /// Everything kept in memory; nothing survives the process.
    pub fn in_memory(settings: Settings) -> Result<Self, CoreError> {
        Self::new(settings, Arc::new(MemoryStore::new()))
    }

    /// Keep the session and local accounts in a JSON file (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(settings: Settings, store_path: &str) -> Result<Self, CoreError> {
        let store = storage::file_store::FileStore::open(store_path)?;
        Self::new(settings, Arc::new(store))
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Format an amount in the configured display currency.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        models::format::format_currency(value, &self.settings.currency)
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Restore the stored session, if any. Call once at startup.
    pub async fn init(&mut self) -> Result<Option<&User>, CoreError> {
        self.session.init().await
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, CoreError> {
        self.session.login(email, password).await
    }

    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<&User, CoreError> {
        self.session.register(email, password, name).await
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Virtual cash of the signed-in user, 0 when signed out.
    #[must_use]
    pub fn available_balance(&self) -> f64 {
        self.session.user().map_or(0.0, |u| u.virtual_balance)
    }

    /// Credit the configured top-up amount to the virtual balance.
    ///
    /// Fails with `Unsupported` on the remote backend, which has no way to
    /// persist a balance.
    pub async fn top_up(&mut self) -> Result<&User, CoreError> {
        let amount = self.settings.top_up_amount;
        self.session.top_up(amount).await
    }

    // ── Market ──────────────────────────────────────────────────────

    #[must_use]
    pub fn quote(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.get(symbol)
    }

    #[must_use]
    pub fn market_listing(&self, query: &MarketQuery) -> Vec<&Quote> {
        self.market_service.search(self.quotes.quotes(), query)
    }

    #[must_use]
    pub fn market_stats(&self) -> MarketStats {
        self.market_service.stats(self.quotes.quotes())
    }

    /// Detail record for the stock page; unknown symbols get a placeholder.
    #[must_use]
    pub fn stock_profile(&self, symbol: &str) -> StockProfile {
        self.quotes.profile(symbol)
    }

    /// Swap in a new market snapshot.
    pub fn replace_quotes(&mut self, quotes: Vec<Quote>) {
        self.quotes.replace_all(quotes);
    }

    // ── Portfolio ───────────────────────────────────────────────────

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn set_portfolio(&mut self, portfolio: Portfolio) {
        self.portfolio = portfolio;
    }

    /// Value all holdings at current quotes.
    pub fn portfolio_summary(&self) -> Result<PortfolioSummary, CoreError> {
        self.portfolio_service
            .summarize(&self.portfolio.holdings, &self.quotes)
    }

    /// Holdings table rows after search, filter and sort.
    pub fn portfolio_view(&self, query: &PositionQuery) -> Result<Vec<PositionValuation>, CoreError> {
        let summary = self.portfolio_summary()?;
        Ok(self
            .portfolio_service
            .filter_positions(&summary, query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Largest positions as a share of portfolio value.
    pub fn allocation(&self) -> Result<Vec<AllocationSlice>, CoreError> {
        let summary = self.portfolio_summary()?;
        Ok(self.portfolio_service.allocation(&summary, ALLOCATION_TOP_N))
    }

    // ── Orders ──────────────────────────────────────────────────────

    /// Validate and price an order against the signed-in user's balance
    /// and holdings. Changes nothing.
    pub fn evaluate_order(&self, request: &OrderRequest) -> Result<OrderSummary, CoreError> {
        self.order_service.evaluate(
            request,
            &self.quotes,
            self.available_balance(),
            &self.portfolio,
        )
    }

    /// Validate an order and simulate submitting it. Requires a session.
    /// The returned receipt is pending and nothing is settled.
    pub async fn submit_order(&self, request: &OrderRequest) -> Result<Trade, CoreError> {
        let user = self.session.user().ok_or(CoreError::NotAuthenticated)?;
        let summary = self.evaluate_order(request)?;
        Ok(self.order_service.submit(&user.id, &summary).await)
    }

    #[must_use]
    pub fn recent_orders(&self) -> &[Trade] {
        &self.recent_orders
    }

    // ── News & Tutorials ────────────────────────────────────────────

    #[must_use]
    pub fn news(&self, query: &NewsQuery) -> Vec<&NewsItem> {
        self.news_service.search(&self.news, query)
    }

    #[must_use]
    pub fn news_for_symbol(&self, symbol: &str) -> Vec<&NewsItem> {
        self.news_service.related_to(&self.news, symbol)
    }

    #[must_use]
    pub fn tutorials(&self, query: &TutorialQuery) -> Vec<&Tutorial> {
        self.tutorial_service.filter(&self.tutorials, query)
    }

    /// Completed lessons across all tutorials, in percent.
    #[must_use]
    pub fn tutorial_progress(&self) -> f64 {
        self.tutorial_service.overall_progress(&self.tutorials)
    }
}
