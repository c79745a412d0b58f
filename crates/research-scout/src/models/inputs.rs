//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use super::{ResponseFormat, SortBy, SortOrder};
use crate::config::limits;

/// Input for research idea generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateIdeasInput {
    /// Research topic (e.g., "quantum error correction").
    pub topic: String,

    /// Optional angle to steer the ideas toward.
    #[serde(default)]
    pub focus_area: Option<String>,

    /// Papers to fetch as grounding (clamped to 1..=50).
    #[serde(default = "default_ideas_papers")]
    pub num_papers: u32,

    /// Restrict grounding papers to these arXiv categories.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_ideas_papers() -> u32 {
    limits::IDEAS_DEFAULT
}

impl GenerateIdeasInput {
    /// Focus area, ignoring blank strings sent by form inputs.
    #[must_use]
    pub fn focus_area(&self) -> Option<&str> {
        self.focus_area.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Paper count after clamping.
    #[must_use]
    pub fn paper_limit(&self) -> u32 {
        limits::clamp(self.num_papers, limits::IDEAS_MAX)
    }
}

/// Input for publication trend analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeTrendsInput {
    /// Research topic to analyze.
    pub topic: String,

    /// Period label. Advisory only: echoed back, never used as a filter.
    #[serde(default = "default_time_range")]
    pub time_range: String,

    /// Papers to aggregate (clamped to 1..=500).
    #[serde(default = "default_trend_papers")]
    pub num_papers: u32,

    /// Restrict papers to these arXiv categories.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_time_range() -> String {
    "past_3_years".to_string()
}

fn default_trend_papers() -> u32 {
    limits::TRENDS_DEFAULT
}

impl AnalyzeTrendsInput {
    /// Paper count after clamping.
    #[must_use]
    pub fn paper_limit(&self) -> u32 {
        limits::clamp(self.num_papers, limits::TRENDS_MAX)
    }
}

/// Input for raw paper search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPapersInput {
    /// Free-text query.
    pub query: String,

    /// Author name to AND into the query.
    #[serde(default)]
    pub authors: Option<String>,

    /// Sort key.
    #[serde(default)]
    pub sort_by: SortBy,

    /// Sort direction.
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Maximum papers to return (clamped to 1..=50).
    #[serde(default = "default_search_limit")]
    pub limit: u32,

    /// Restrict results to these arXiv categories.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_search_limit() -> u32 {
    limits::SEARCH_DEFAULT
}

impl SearchPapersInput {
    /// Result count after clamping.
    #[must_use]
    pub fn result_limit(&self) -> u32 {
        limits::clamp(self.limit, limits::SEARCH_MAX)
    }

    /// Author filter, ignoring blank strings.
    #[must_use]
    pub fn authors(&self) -> Option<&str> {
        self.authors.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_generate_ideas_defaults() {
        let input: GenerateIdeasInput =
            serde_json::from_value(json!({"topic": "robotics"})).unwrap();
        assert_eq!(input.num_papers, 10);
        assert!(input.focus_area().is_none());
        assert!(input.categories.is_empty());
        assert_eq!(input.response_format, ResponseFormat::Json);
    }

    #[test]
    fn test_generate_ideas_clamps_and_blank_focus() {
        let input: GenerateIdeasInput = serde_json::from_value(
            json!({"topic": "robotics", "num_papers": 400, "focus_area": "   "}),
        )
        .unwrap();
        assert_eq!(input.paper_limit(), 50);
        assert!(input.focus_area().is_none());
    }

    #[test]
    fn test_analyze_trends_defaults() {
        let input: AnalyzeTrendsInput =
            serde_json::from_value(json!({"topic": "llm agents"})).unwrap();
        assert_eq!(input.time_range, "past_3_years");
        assert_eq!(input.paper_limit(), 300);
    }

    #[test]
    fn test_search_defaults() {
        let input: SearchPapersInput =
            serde_json::from_value(json!({"query": "topology", "sort_by": "lastUpdatedDate"}))
                .unwrap();
        assert_eq!(input.result_limit(), 20);
        assert_eq!(input.sort_by, SortBy::LastUpdatedDate);
        assert_eq!(input.sort_order, SortOrder::Descending);
        assert!(input.authors().is_none());
    }

    #[test]
    fn test_missing_required_field() {
        let result: Result<SearchPapersInput, _> = serde_json::from_value(json!({"limit": 5}));
        assert!(result.is_err());
    }
}
