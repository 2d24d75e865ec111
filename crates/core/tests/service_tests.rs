// ═══════════════════════════════════════════════════════════════════
// Service Tests: PortfolioService, OrderService, MarketService,
// NewsService, TutorialService
// ═══════════════════════════════════════════════════════════════════

use std::time::Duration;

use papertrade_core::catalog;
use papertrade_core::errors::CoreError;
use papertrade_core::models::analytics::{PositionFilter, PositionQuery, PositionSort};
use papertrade_core::models::order::{OrderRequest, OrderSide, OrderSummary, OrderType};
use papertrade_core::models::portfolio::{Holding, Portfolio};
use papertrade_core::models::quote::{MarketFilter, MarketQuery, MarketSort, Quote};
use papertrade_core::providers::registry::QuoteRegistry;
use papertrade_core::services::market_service::MarketService;
use papertrade_core::services::news_service::NewsService;
use papertrade_core::services::order_service::OrderService;
use papertrade_core::services::portfolio_service::PortfolioService;
use papertrade_core::services::tutorial_service::TutorialService;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn registry() -> QuoteRegistry {
    QuoteRegistry::new_with_defaults()
}

// ═══════════════════════════════════════════════════════════════════
//  PortfolioService
// ═══════════════════════════════════════════════════════════════════

mod portfolio_service {
    use super::*;

    #[test]
    fn values_single_position() {
        let svc = PortfolioService::new();
        let holding = Holding::new("AAPL", "Apple Inc.", 25, 165.5);
        let quote = Quote::new("AAPL", "Apple Inc.", 175.43, 2.15, 1.24, 1);
        let v = svc.value_position(&holding, &quote);
        assert!(approx(v.total_value, 4385.75));
        assert!(approx(v.unrealized_pl, 248.25));
        let pct = v.unrealized_pl_percent.unwrap();
        assert_eq!((pct * 10.0).round() / 10.0, 6.0);
    }

    #[test]
    fn zero_cost_position_has_no_percent() {
        let svc = PortfolioService::new();
        let holding = Holding::new("AAPL", "Apple Inc.", 10, 0.0);
        let quote = Quote::new("AAPL", "Apple Inc.", 100.0, 0.0, 0.0, 1);
        let v = svc.value_position(&holding, &quote);
        assert!(approx(v.unrealized_pl, 1000.0));
        assert_eq!(v.unrealized_pl_percent, None);
    }

    #[test]
    fn demo_portfolio_totals() {
        let svc = PortfolioService::new();
        let portfolio = catalog::portfolio::demo_portfolio();
        let summary = svc.summarize(&portfolio.holdings, &registry()).unwrap();

        assert_eq!(summary.positions.len(), 4);
        assert_eq!(summary.positions[0].symbol, "AAPL");
        assert!(approx(summary.total_value, 32968.89));
        assert!(approx(summary.total_unrealized_pl, -85.71));
        let pct = summary.total_unrealized_pl_percent.unwrap();
        assert!((pct - (-0.2593)).abs() < 1e-3);
    }

    #[test]
    fn totals_are_sums_of_positions() {
        let svc = PortfolioService::new();
        let portfolio = catalog::portfolio::demo_portfolio();
        let summary = svc.summarize(&portfolio.holdings, &registry()).unwrap();
        let value: f64 = summary.positions.iter().map(|p| p.total_value).sum();
        let pl: f64 = summary.positions.iter().map(|p| p.unrealized_pl).sum();
        assert!(approx(summary.total_value, value));
        assert!(approx(summary.total_unrealized_pl, pl));
        assert!(approx(summary.total_cost(), value - pl));
    }

    #[test]
    fn empty_portfolio_has_no_percent() {
        let svc = PortfolioService::new();
        let summary = svc.summarize(&[], &registry()).unwrap();
        assert!(summary.positions.is_empty());
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.total_unrealized_pl, 0.0);
        assert_eq!(summary.total_unrealized_pl_percent, None);
    }

    #[test]
    fn missing_quote_is_unknown_symbol() {
        let svc = PortfolioService::new();
        let holdings = vec![Holding::new("XYZ", "Nothing Corp", 1, 10.0)];
        let err = svc.summarize(&holdings, &registry()).unwrap_err();
        assert!(matches!(err, CoreError::UnknownSymbol(ref s) if s == "XYZ"));
    }

    #[test]
    fn filter_gains_and_losses() {
        let svc = PortfolioService::new();
        let portfolio = catalog::portfolio::demo_portfolio();
        let summary = svc.summarize(&portfolio.holdings, &registry()).unwrap();

        let gains = svc.filter_positions(
            &summary,
            &PositionQuery {
                filter: PositionFilter::Gains,
                ..Default::default()
            },
        );
        assert!(gains.iter().all(|p| p.unrealized_pl > 0.0));
        let gain_symbols: Vec<&str> = gains.iter().map(|p| p.symbol.as_str()).collect();
        assert!(gain_symbols.contains(&"AAPL"));
        assert!(gain_symbols.contains(&"MSFT"));

        let losses = svc.filter_positions(
            &summary,
            &PositionQuery {
                filter: PositionFilter::Losses,
                ..Default::default()
            },
        );
        let loss_symbols: Vec<&str> = losses.iter().map(|p| p.symbol.as_str()).collect();
        assert!(loss_symbols.contains(&"GOOGL"));
        assert!(loss_symbols.contains(&"TSLA"));
        assert_eq!(gains.len() + losses.len(), 4);
    }

    #[test]
    fn search_and_sort() {
        let svc = PortfolioService::new();
        let portfolio = catalog::portfolio::demo_portfolio();
        let summary = svc.summarize(&portfolio.holdings, &registry()).unwrap();

        let found = svc.filter_positions(
            &summary,
            &PositionQuery {
                search: "tesla".into(),
                ..Default::default()
            },
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].symbol, "TSLA");

        let by_symbol = svc.filter_positions(
            &summary,
            &PositionQuery {
                sort: PositionSort::Symbol,
                ..Default::default()
            },
        );
        let symbols: Vec<&str> = by_symbol.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL", "MSFT", "TSLA"]);

        let by_value = svc.filter_positions(&summary, &PositionQuery::default());
        assert!(by_value
            .windows(2)
            .all(|w| w[0].total_value >= w[1].total_value));
    }

    #[test]
    fn allocation_shares() {
        let svc = PortfolioService::new();
        let portfolio = catalog::portfolio::demo_portfolio();
        let summary = svc.summarize(&portfolio.holdings, &registry()).unwrap();

        let slices = svc.allocation(&summary, 2);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].symbol, "GOOGL");
        assert_eq!(slices[1].symbol, "MSFT");
        assert!(slices[0].percent >= slices[1].percent);

        let all = svc.allocation(&summary, 10);
        let total: f64 = all.iter().map(|s| s.percent).sum();
        assert!(approx(total, 100.0));
    }

    #[test]
    fn allocation_of_empty_portfolio() {
        let svc = PortfolioService::new();
        let summary = svc.summarize(&[], &registry()).unwrap();
        assert!(svc.allocation(&summary, 5).is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  OrderService
// ═══════════════════════════════════════════════════════════════════

mod order_service {
    use super::*;

    fn holdings() -> Portfolio {
        catalog::portfolio::demo_portfolio()
    }

    fn evaluate(request: &OrderRequest, balance: f64) -> Result<OrderSummary, CoreError> {
        OrderService::default().evaluate(request, &registry(), balance, &holdings())
    }

    #[test]
    fn market_buy_uses_quote_price() {
        let req = OrderRequest::market(OrderSide::Buy, "AAPL", 10);
        let summary = evaluate(&req, 100_000.0).unwrap();
        assert_eq!(summary.symbol, "AAPL");
        assert_eq!(summary.quantity, 10);
        assert!(approx(summary.effective_price, 175.43));
        assert!(approx(summary.total_amount, 1754.3));
    }

    #[test]
    fn lowercase_symbol_is_normalized() {
        let req = OrderRequest::market(OrderSide::Buy, " aapl ", 1);
        assert_eq!(evaluate(&req, 1_000.0).unwrap().symbol, "AAPL");
    }

    #[test]
    fn limit_buy_uses_limit_price() {
        let req = OrderRequest::limit(OrderSide::Buy, "AAPL", 1000, 100.0);
        let summary = evaluate(&req, 100_000.0).unwrap();
        assert_eq!(summary.order_type, OrderType::Limit);
        assert!(approx(summary.effective_price, 100.0));
        assert!(approx(summary.total_amount, 100_000.0));
    }

    #[test]
    fn buy_over_balance_is_insufficient_funds() {
        let req = OrderRequest::market(OrderSide::Buy, "AAPL", 10);
        match evaluate(&req, 1_000.0).unwrap_err() {
            CoreError::InsufficientFunds {
                required,
                available,
            } => {
                assert!(approx(required, 1754.3));
                assert!(approx(available, 1_000.0));
            }
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
    }

    #[test]
    fn sell_over_holdings_is_insufficient_holdings() {
        let req = OrderRequest::market(OrderSide::Sell, "TSLA", 30);
        match evaluate(&req, 0.0).unwrap_err() {
            CoreError::InsufficientHoldings {
                symbol,
                requested,
                held,
            } => {
                assert_eq!(symbol, "TSLA");
                assert_eq!(requested, 30);
                assert_eq!(held, 12);
            }
            other => panic!("expected InsufficientHoldings, got {other:?}"),
        }
    }

    #[test]
    fn sell_ignores_balance() {
        let req = OrderRequest::market(OrderSide::Sell, "TSLA", 12);
        let summary = evaluate(&req, 0.0).unwrap();
        assert_eq!(summary.side, OrderSide::Sell);
        assert_eq!(summary.quantity, 12);
    }

    #[test]
    fn sell_of_unheld_symbol() {
        let req = OrderRequest::market(OrderSide::Sell, "NVDA", 1);
        assert!(matches!(
            evaluate(&req, 0.0).unwrap_err(),
            CoreError::InsufficientHoldings { held: 0, .. }
        ));
    }

    #[test]
    fn missing_fields() {
        let no_symbol = OrderRequest::market(OrderSide::Buy, "  ", 1);
        let mut no_qty = OrderRequest::market(OrderSide::Buy, "AAPL", 1);
        no_qty.quantity = None;
        for req in [no_symbol, no_qty] {
            match evaluate(&req, 100_000.0).unwrap_err() {
                CoreError::ValidationError(msg) => {
                    assert_eq!(msg, "Please fill in all required fields")
                }
                other => panic!("expected ValidationError, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_symbol() {
        let req = OrderRequest::market(OrderSide::Buy, "XYZ", 1);
        assert!(matches!(
            evaluate(&req, 100_000.0).unwrap_err(),
            CoreError::ValidationError(msg) if msg == "Invalid stock symbol"
        ));
    }

    #[test]
    fn non_positive_quantity() {
        for qty in [0, -5] {
            let req = OrderRequest::market(OrderSide::Buy, "AAPL", qty);
            match evaluate(&req, 100_000.0).unwrap_err() {
                CoreError::ValidationError(msg) => assert_eq!(msg, "Quantity must be greater than 0"),
                other => panic!("expected ValidationError, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_limit_price() {
        let mut missing = OrderRequest::limit(OrderSide::Buy, "AAPL", 1, 1.0);
        missing.limit_price = None;
        let zero = OrderRequest::limit(OrderSide::Buy, "AAPL", 1, 0.0);
        let nan = OrderRequest::limit(OrderSide::Buy, "AAPL", 1, f64::NAN);
        for req in [missing, zero, nan] {
            match evaluate(&req, 100_000.0).unwrap_err() {
                CoreError::ValidationError(msg) => assert_eq!(msg, "Please enter a valid limit price"),
                other => panic!("expected ValidationError, got {other:?}"),
            }
        }
    }

    #[test]
    fn market_order_ignores_limit_price() {
        let mut req = OrderRequest::market(OrderSide::Buy, "AAPL", 1);
        req.limit_price = Some(-1.0);
        assert!(approx(evaluate(&req, 1_000.0).unwrap().effective_price, 175.43));
    }

    #[test]
    fn shortfall() {
        let svc = OrderService::default();
        let summary = svc
            .evaluate(
                &OrderRequest::market(OrderSide::Buy, "AAPL", 10),
                &registry(),
                100_000.0,
                &holdings(),
            )
            .unwrap();
        assert!(approx(svc.shortfall(&summary, 1_000.0), 754.3));
        assert_eq!(svc.shortfall(&summary, 5_000.0), 0.0);
    }

    #[tokio::test]
    async fn submit_returns_pending_receipt() {
        use papertrade_core::models::trade::TradeStatus;

        let svc = OrderService::new(Duration::from_millis(5));
        let summary = svc
            .evaluate(
                &OrderRequest::market(OrderSide::Buy, "MSFT", 2),
                &registry(),
                100_000.0,
                &holdings(),
            )
            .unwrap();
        let a = svc.submit("user-1", &summary).await;
        let b = svc.submit("user-1", &summary).await;
        assert_eq!(a.status, TradeStatus::Pending);
        assert_eq!(a.user_id, "user-1");
        assert_eq!(a.symbol, "MSFT");
        assert_eq!(a.quantity, 2);
        assert!(approx(a.total_amount, summary.total_amount));
        assert_ne!(a.id, b.id);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MarketService
// ═══════════════════════════════════════════════════════════════════

mod market_service {
    use super::*;

    #[test]
    fn default_sort_is_market_cap_desc() {
        let quotes = catalog::market::quotes();
        let listed = MarketService::new().search(&quotes, &MarketQuery::default());
        assert_eq!(listed.len(), 12);
        assert_eq!(listed[0].symbol, "MSFT");
        assert_eq!(listed[1].symbol, "AAPL");
    }

    #[test]
    fn search_matches_symbol_or_name() {
        let quotes = catalog::market::quotes();
        let svc = MarketService::new();
        let by_name = svc.search(
            &quotes,
            &MarketQuery {
                search: "netflix".into(),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].symbol, "NFLX");

        let by_symbol = svc.search(
            &quotes,
            &MarketQuery {
                search: "goog".into(),
                ..Default::default()
            },
        );
        assert_eq!(by_symbol[0].symbol, "GOOGL");
    }

    #[test]
    fn gainers_and_losers() {
        let quotes = catalog::market::quotes();
        let svc = MarketService::new();
        let gainers = svc.search(
            &quotes,
            &MarketQuery {
                filter: MarketFilter::Gainers,
                ..Default::default()
            },
        );
        assert!(gainers.iter().all(|q| q.change > 0.0));
        let losers = svc.search(
            &quotes,
            &MarketQuery {
                filter: MarketFilter::Losers,
                ..Default::default()
            },
        );
        assert!(losers.iter().all(|q| q.change < 0.0));

        let stats = svc.stats(&quotes);
        assert_eq!(stats.gainers, gainers.len());
        assert_eq!(stats.losers, losers.len());
        assert_eq!(stats.gainers, 7);
        assert_eq!(stats.losers, 5);
        assert_eq!(stats.unchanged, 0);
    }

    #[test]
    fn sort_by_symbol_and_price() {
        let quotes = catalog::market::quotes();
        let svc = MarketService::new();
        let by_symbol = svc.search(
            &quotes,
            &MarketQuery {
                sort: MarketSort::Symbol,
                ..Default::default()
            },
        );
        assert_eq!(by_symbol[0].symbol, "AAPL");
        assert_eq!(by_symbol[11].symbol, "ZOOM");

        let by_price = svc.search(
            &quotes,
            &MarketQuery {
                sort: MarketSort::Price,
                ..Default::default()
            },
        );
        assert_eq!(by_price[0].symbol, "AMZN");
        assert!(by_price.windows(2).all(|w| w[0].price >= w[1].price));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NewsService / TutorialService
// ═══════════════════════════════════════════════════════════════════

mod content_services {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};
    use papertrade_core::models::news::{NewsCategory, NewsQuery, NewsSort};
    use papertrade_core::models::tutorial::{TutorialCategory, TutorialLevel, TutorialQuery};

    #[test]
    fn news_newest_first_by_default() {
        let articles = catalog::news::articles();
        let feed = NewsService::new().search(&articles, &NewsQuery::default());
        assert_eq!(feed.len(), 8);
        assert_eq!(feed[0].id, "1");
        assert_eq!(feed[7].id, "8");

        let oldest = NewsService::new().search(
            &articles,
            &NewsQuery {
                sort: NewsSort::Oldest,
                ..Default::default()
            },
        );
        assert_eq!(oldest[0].id, "8");
    }

    #[test]
    fn news_category_and_search() {
        let articles = catalog::news::articles();
        let svc = NewsService::new();
        let tech = svc.search(
            &articles,
            &NewsQuery {
                category: NewsCategory::Technology,
                ..Default::default()
            },
        );
        let ids: Vec<&str> = tech.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "6"]);

        let fed = svc.search(
            &articles,
            &NewsQuery {
                search: "federal reserve".into(),
                ..Default::default()
            },
        );
        assert_eq!(fed.len(), 1);
        assert_eq!(fed[0].source, "Reuters");
    }

    #[test]
    fn news_for_symbol() {
        let articles = catalog::news::articles();
        let svc = NewsService::new();
        let aapl = svc.related_to(&articles, "aapl");
        assert_eq!(aapl.len(), 1);
        assert_eq!(aapl[0].id, "1");
        assert!(svc.related_to(&articles, "ZOOM").is_empty());
        assert_eq!(svc.with_related_symbols(&articles), 5);
    }

    #[test]
    fn relative_age() {
        let svc = NewsService::new();
        let now = Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap();
        assert_eq!(svc.relative_age(now - ChronoDuration::minutes(30), now), "Just now");
        assert_eq!(svc.relative_age(now - ChronoDuration::hours(3), now), "3h ago");
        assert_eq!(svc.relative_age(now - ChronoDuration::hours(50), now), "2d ago");
        assert_eq!(svc.relative_age(now + ChronoDuration::hours(2), now), "Just now");
    }

    #[test]
    fn tutorial_filters() {
        let tutorials = catalog::tutorials::tutorials();
        let svc = TutorialService::new();
        assert_eq!(svc.filter(&tutorials, &TutorialQuery::default()).len(), 6);

        let analysis = svc.filter(
            &tutorials,
            &TutorialQuery {
                category: Some(TutorialCategory::Analysis),
                level: None,
            },
        );
        assert_eq!(analysis.len(), 2);

        let advanced_analysis = svc.filter(
            &tutorials,
            &TutorialQuery {
                category: Some(TutorialCategory::Analysis),
                level: Some(TutorialLevel::Advanced),
            },
        );
        assert_eq!(advanced_analysis.len(), 1);
    }

    #[test]
    fn tutorial_progress() {
        let mut tutorials = catalog::tutorials::tutorials();
        let svc = TutorialService::new();
        assert_eq!(svc.overall_progress(&tutorials), 0.0);
        assert_eq!(svc.overall_progress(&[]), 0.0);

        let total = svc.total_lessons(&tutorials);
        assert!(total > 0);
        for t in &mut tutorials {
            t.completed = t.lessons;
        }
        assert!(approx(svc.overall_progress(&tutorials), 100.0));
    }
}
