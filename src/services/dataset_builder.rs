//! Golden dataset construction.
//!
//! The dataset is hand-curated per category and rebuilt from code on every
//! call, so regenerating the artifact without source changes yields the same
//! bytes.

use std::path::Path;

use tracing::info;

use crate::domain::errors::HarnessResult;
use crate::domain::models::{Category, Difficulty, QaItem};
use crate::infrastructure::dataset::write_dataset;

/// Companies the numeric questions are drawn from.
pub const TICKERS: [&str; 10] = [
    "AAPL", "AMD", "AMZN", "AVGO", "CRM", "GOOGL", "META", "MSFT", "NVDA", "ORCL",
];

const GET_FINANCIAL_METRICS: &str = "get_financial_metrics";
const COMPUTE_GROWTH_RATE: &str = "compute_growth_rate";
const GET_MULTI_QUARTER_METRICS: &str = "get_multi_quarter_metrics";
const SEARCH_EARNINGS_TRANSCRIPT: &str = "search_earnings_transcript";
const LIST_AVAILABLE_DATA: &str = "list_available_data";

/// Build the golden dataset, in category order.
pub fn build() -> Vec<QaItem> {
    let mut items = Vec::new();

    items.extend(single_metric());
    items.extend(growth_rate());
    items.extend(trend());
    items.extend(comparison());
    items.extend(qualitative());
    items.extend(hybrid());
    items.extend(edge_cases());

    items
}

/// Build the dataset and overwrite the artifact at `path`.
///
/// Returns the number of items written.
pub fn generate(path: &Path) -> HarnessResult<usize> {
    let items = build();
    write_dataset(path, &items)?;
    info!(path = %path.display(), items = items.len(), "golden dataset written");
    Ok(items.len())
}

fn single_metric() -> Vec<QaItem> {
    vec![
        QaItem::new(
            "single_metric_1",
            "What was NVDA's revenue in Q3 FY2024?",
            Category::SingleMetric,
        )
        .with_ticker("NVDA")
        .with_tools([GET_FINANCIAL_METRICS]),
        QaItem::new(
            "single_metric_2",
            "What was Apple's EPS in Q1 FY2024?",
            Category::SingleMetric,
        )
        .with_ticker("AAPL")
        .with_tools([GET_FINANCIAL_METRICS]),
    ]
}

fn growth_rate() -> Vec<QaItem> {
    vec![
        QaItem::new(
            "growth_1",
            "What was AMD's YoY revenue growth in Q2 FY2024?",
            Category::GrowthRate,
        )
        .with_ticker("AMD")
        .with_tools([COMPUTE_GROWTH_RATE]),
        QaItem::new(
            "growth_2",
            "What was Microsoft\u{2019}s QoQ net income change from Q3 to Q4 FY2024?",
            Category::GrowthRate,
        )
        .with_ticker("MSFT")
        .with_tools([COMPUTE_GROWTH_RATE]),
    ]
}

fn trend() -> Vec<QaItem> {
    vec![
        QaItem::new(
            "trend_1",
            "Show Apple\u{2019}s operating margin trend over the last 4 quarters.",
            Category::Trend,
        )
        .with_ticker("AAPL")
        .with_tools([GET_MULTI_QUARTER_METRICS]),
        QaItem::new(
            "trend_2",
            "Plot Meta's free cash flow over the last 3 quarters.",
            Category::Trend,
        )
        .with_ticker("META")
        .with_tools([GET_MULTI_QUARTER_METRICS]),
    ]
}

fn comparison() -> Vec<QaItem> {
    // Spans AMZN and MSFT segments, so no single ticker.
    vec![QaItem::new(
        "comparison_1",
        "Compare AWS and Azure revenue growth over the last two quarters.",
        Category::Comparison,
    )
    .with_tools([GET_MULTI_QUARTER_METRICS, COMPUTE_GROWTH_RATE])
    .with_difficulty(Difficulty::Hard)]
}

fn qualitative() -> Vec<QaItem> {
    vec![
        QaItem::new(
            "qual_1",
            "What did Jensen Huang say about AI demand?",
            Category::Qualitative,
        )
        .with_ticker("NVDA")
        .with_tools([SEARCH_EARNINGS_TRANSCRIPT]),
        QaItem::new(
            "qual_2",
            "What did Tim Cook say about services growth?",
            Category::Qualitative,
        )
        .with_ticker("AAPL")
        .with_tools([SEARCH_EARNINGS_TRANSCRIPT]),
    ]
}

fn hybrid() -> Vec<QaItem> {
    vec![QaItem::new(
        "hybrid_1",
        "What was NVDA's data center revenue and what drove the growth?",
        Category::Hybrid,
    )
    .with_ticker("NVDA")
    .with_tools([GET_FINANCIAL_METRICS, SEARCH_EARNINGS_TRANSCRIPT])
    .with_difficulty(Difficulty::Hard)]
}

fn edge_cases() -> Vec<QaItem> {
    // TSLA is outside the roster; the service should say so.
    vec![QaItem::new(
        "edge_1",
        "What was Tesla's revenue in Q1 2024?",
        Category::EdgeCases,
    )
    .with_ticker("TSLA")
    .with_tools([LIST_AVAILABLE_DATA])]
}
