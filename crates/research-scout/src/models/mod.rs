//! Data models for papers, tool inputs and tool results.
//!
//! Wire names are snake_case, matching the operation contracts consumed by
//! the web client. Optional output fields are skipped when absent.

mod enums;
mod idea;
mod inputs;
mod paper;
mod trend;

pub use enums::{DataSource, ResponseFormat, SortBy, SortOrder};
pub use idea::{IdeasResponse, ResearchIdea};
pub use inputs::*;
pub use paper::{
    BibEntry, DEFAULT_AUTHORS, DEFAULT_CATEGORY, PaperRecord, SearchResponse, UNKNOWN_DATE,
    truncate_chars,
};
pub use trend::{
    AuthorCount, CategoryCount, EmergingTopic, TrendAggregate, TrendAnalysis, TrendPoint, TrendReport,
    TrendsResponse,
};
