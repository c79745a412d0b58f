//! Trend aggregation models and the `analyze_trends` result.

use serde::{Deserialize, Serialize};

use super::DataSource;

/// Papers published in one year bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 4-digit year, or `"N/A"` for undated papers.
    pub year: String,
    /// Papers in the bucket (always ≥ 1).
    pub paper_count: usize,
}

/// Occurrences of one subject category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// arXiv category (e.g., "cs.LG").
    pub category: String,
    /// Papers listing the category (always ≥ 1).
    pub count: usize,
}

/// Papers credited to one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    /// Author name as listed in the feed.
    pub author: String,
    /// Papers listing the author (always ≥ 1).
    pub count: usize,
}

/// Output of the trend aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendAggregate {
    /// Year buckets, ascending, `"N/A"` last.
    pub trends: Vec<TrendPoint>,
    /// Up to ten categories, most frequent first.
    pub top_categories: Vec<CategoryCount>,
    /// Up to ten named authors, most frequent first.
    pub top_authors: Vec<AuthorCount>,
}

/// A model-identified emerging topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergingTopic {
    /// Topic name.
    pub topic: String,
    /// Why the model considers it emerging.
    #[serde(default)]
    pub reason: String,
}

/// Model interpretation of an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Short narrative summary.
    pub analysis_summary: String,
    /// Emerging topics with reasons.
    pub emerging_topics: Vec<EmergingTopic>,
}

impl TrendAnalysis {
    /// Summary used when the model output had none.
    pub const PLACEHOLDER_SUMMARY: &'static str = "Unable to generate analysis summary.";
}

impl Default for TrendAnalysis {
    fn default() -> Self {
        Self {
            analysis_summary: Self::PLACEHOLDER_SUMMARY.to_string(),
            emerging_topics: Vec::new(),
        }
    }
}

/// Successful trend analysis payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Analyzed topic.
    pub topic: String,
    /// Requested period label (advisory).
    pub time_range: String,
    /// Papers aggregated.
    pub total_papers_analyzed: usize,
    /// Whether the papers were live or fallback data.
    pub data_source: DataSource,
    /// Model summary.
    pub analysis_summary: String,
    /// Papers per year.
    pub trends_by_year: Vec<TrendPoint>,
    /// Most frequent categories.
    pub top_categories: Vec<CategoryCount>,
    /// Most frequent authors.
    pub top_authors: Vec<AuthorCount>,
    /// Model-identified emerging topics.
    pub emerging_topics: Vec<EmergingTopic>,
}

/// Result of the `analyze_trends` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TrendsResponse {
    /// Analysis completed.
    Success(TrendReport),
    /// Analysis failed.
    Error {
        /// Stringified failure.
        message: String,
    },
}

impl TrendsResponse {
    /// Build an error result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    /// The report, if the analysis succeeded.
    #[must_use]
    pub const fn report(&self) -> Option<&TrendReport> {
        match self {
            Self::Success(report) => Some(report),
            Self::Error { .. } => None,
        }
    }
}
