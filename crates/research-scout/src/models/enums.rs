//! Enumeration types for tool parameters and results.

use serde::{Deserialize, Serialize};

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Machine-readable JSON matching the operation contract.
    #[default]
    Json,
    /// Human-readable Markdown format.
    Markdown,
}

impl ResponseFormat {
    /// Check if this is markdown format.
    #[must_use]
    pub const fn is_markdown(self) -> bool {
        matches!(self, Self::Markdown)
    }
}

/// Where the papers behind a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Parsed from a live arXiv response.
    Live,
    /// Synthetic sample papers substituted after a failed or empty fetch.
    Fallback,
}

impl DataSource {
    /// Check if fallback papers were used.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// arXiv `sortBy` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Relevance to the query.
    #[default]
    Relevance,
    /// Last revision date.
    LastUpdatedDate,
    /// First submission date.
    SubmittedDate,
}

impl SortBy {
    /// Query-string value.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::LastUpdatedDate => "lastUpdatedDate",
            Self::SubmittedDate => "submittedDate",
        }
    }
}

/// arXiv `sortOrder` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest or least relevant first.
    Ascending,
    /// Newest or most relevant first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Query-string value.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}
