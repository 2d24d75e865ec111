use crate::models::tutorial::{Tutorial, TutorialCategory, TutorialLevel};

#[allow(clippy::too_many_arguments)]
fn tutorial(
    id: &str,
    title: &str,
    description: &str,
    level: TutorialLevel,
    category: TutorialCategory,
    duration: &str,
    rating: f64,
    students: u32,
    topics: &[&str],
) -> Tutorial {
    Tutorial {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        level,
        category,
        duration: duration.to_string(),
        lessons: topics.len() as u32,
        completed: 0,
        rating,
        students,
        topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

/// Courses on the tutorials page. One lesson per topic.
pub fn tutorials() -> Vec<Tutorial> {
    use TutorialCategory as C;
    use TutorialLevel as L;

    vec![
        tutorial(
            "1",
            "Stock Market Basics",
            "Learn the fundamentals of stock trading, market terminology, and how the stock market works.",
            L::Beginner,
            C::Basics,
            "30 min",
            4.8,
            1250,
            &[
                "What are stocks?",
                "How markets work",
                "Types of orders",
                "Reading stock quotes",
                "Market hours",
                "Getting started",
            ],
        ),
        tutorial(
            "2",
            "Technical Analysis Fundamentals",
            "Master chart reading, technical indicators, and pattern recognition for better trading decisions.",
            L::Intermediate,
            C::Analysis,
            "45 min",
            4.7,
            890,
            &[
                "Chart types",
                "Support & resistance",
                "Moving averages",
                "RSI & MACD",
                "Candlestick patterns",
                "Volume analysis",
                "Trend lines",
                "Entry/exit signals",
            ],
        ),
        tutorial(
            "3",
            "Risk Management Strategies",
            "Learn how to protect your capital and manage risk effectively in your trading portfolio.",
            L::Intermediate,
            C::Risk,
            "35 min",
            4.9,
            675,
            &[
                "Position sizing",
                "Stop losses",
                "Risk-reward ratios",
                "Diversification",
                "Portfolio allocation",
                "Emotional control",
                "Common mistakes",
            ],
        ),
        tutorial(
            "4",
            "Fundamental Analysis",
            "Understand how to evaluate companies using financial statements and economic indicators.",
            L::Advanced,
            C::Analysis,
            "60 min",
            4.6,
            445,
            &[
                "Financial statements",
                "P/E ratios",
                "Revenue analysis",
                "Debt ratios",
                "Industry comparison",
                "Economic indicators",
                "Valuation methods",
                "Earnings reports",
                "Cash flow",
                "Growth metrics",
            ],
        ),
        tutorial(
            "5",
            "Options Trading Basics",
            "Introduction to options contracts, strategies, and how to use options in your trading.",
            L::Advanced,
            C::Advanced,
            "50 min",
            4.5,
            320,
            &[
                "Call & put options",
                "Strike prices",
                "Expiration dates",
                "Option pricing",
                "Basic strategies",
                "Greeks",
                "Covered calls",
                "Protective puts",
                "Risk considerations",
            ],
        ),
        tutorial(
            "6",
            "Building Your First Portfolio",
            "Step-by-step guide to creating a diversified investment portfolio that matches your goals.",
            L::Beginner,
            C::Portfolio,
            "40 min",
            4.8,
            980,
            &[
                "Setting goals",
                "Asset allocation",
                "Stock selection",
                "Sector diversification",
                "Rebalancing",
                "Monitoring performance",
                "Tax considerations",
                "Long-term strategy",
            ],
        ),
    ]
}
