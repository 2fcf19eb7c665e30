//! Golden dataset item model.
//!
//! A [`QaItem`] is one evaluation question together with the labels a scorer
//! needs later on: its answer category, the tools the service is expected to
//! call, and a reference answer when one has been authored.

use serde::{Deserialize, Serialize};

/// Closed set of answer categories covered by the golden dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A single reported figure for one period
    SingleMetric,
    /// Period-over-period change of a metric
    GrowthRate,
    /// A metric across several consecutive periods
    Trend,
    /// Metrics of several companies or segments side by side
    Comparison,
    /// Earnings-call transcript content
    Qualitative,
    /// Numbers plus transcript context
    Hybrid,
    /// Questions the service should decline or qualify
    EdgeCases,
}

impl Category {
    /// Every category, in dataset order.
    pub const ALL: [Category; 7] = [
        Category::SingleMetric,
        Category::GrowthRate,
        Category::Trend,
        Category::Comparison,
        Category::Qualitative,
        Category::Hybrid,
        Category::EdgeCases,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleMetric => "single_metric",
            Self::GrowthRate => "growth_rate",
            Self::Trend => "trend",
            Self::Comparison => "comparison",
            Self::Qualitative => "qualitative",
            Self::Hybrid => "hybrid",
            Self::EdgeCases => "edge_cases",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(Category::as_str).collect();
                format!("unknown category '{s}'. Valid: {}", valid.join(", "))
            })
    }
}

/// How hard a question is expected to be for the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// One immutable evaluation question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaItem {
    /// Stable identifier, correlates records across strategies and runs
    pub id: String,

    /// Natural-language question sent to the service
    pub question: String,

    /// Reference answer; empty until authored
    #[serde(default)]
    pub ground_truth: String,

    /// Tools the service should invoke, in order
    #[serde(default)]
    pub expected_tool: Vec<String>,

    pub category: Category,

    /// `None` when the question spans several tickers or none
    #[serde(default)]
    pub ticker: Option<String>,

    #[serde(default)]
    pub difficulty: Difficulty,
}

impl QaItem {
    /// Start an item with an empty ground truth and `medium` difficulty.
    pub fn new(id: impl Into<String>, question: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            ground_truth: String::new(),
            expected_tool: Vec::new(),
            category,
            ticker: None,
            difficulty: Difficulty::default(),
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_tool = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}
