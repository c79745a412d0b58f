//! Canonical paper record produced by the Atom parser.

use serde::{Deserialize, Serialize};

/// Date sentinel for entries whose publication date is missing or unparseable.
pub const UNKNOWN_DATE: &str = "N/A";

/// Category used when an entry carries none.
pub const DEFAULT_CATEGORY: &str = "cs.AI";

/// Author string used when an entry lists no author names.
pub const DEFAULT_AUTHORS: &str = "arXiv Authors";

/// A normalized paper.
///
/// `title` and `abstract` are never empty. `date` is `YYYY-MM-DD` or
/// [`UNKNOWN_DATE`], which must be treated as unknown rather than sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title, whitespace collapsed.
    pub title: String,

    /// Paper abstract, whitespace collapsed.
    pub r#abstract: String,

    /// Publication date (`YYYY-MM-DD`) or `"N/A"`.
    pub date: String,

    /// Canonical arXiv URL, empty when the entry had no id.
    pub url: String,

    /// Subject categories, primary first. Never empty.
    pub categories: Vec<String>,

    /// Primary subject category.
    pub primary_category: String,

    /// Comma-separated author names.
    pub authors: String,

    /// Individual author names behind `authors`; empty when the entry named none.
    #[serde(skip)]
    pub author_names: Vec<String>,
}

impl PaperRecord {
    /// Year bucket: the 4-digit year prefix of `date`, or `"N/A"`.
    #[must_use]
    pub fn year_bucket(&self) -> &str {
        match self.date.get(..4) {
            Some(year) if year.bytes().all(|b| b.is_ascii_digit()) => year,
            _ => UNKNOWN_DATE,
        }
    }

    /// Citation entry with the abstract cut to `abstract_chars` characters.
    #[must_use]
    pub fn to_bib_entry(&self, abstract_chars: usize) -> BibEntry {
        BibEntry {
            title: self.title.clone(),
            authors: self.authors.clone(),
            date: self.date.clone(),
            url: self.url.clone(),
            r#abstract: truncate_chars(&self.r#abstract, abstract_chars).to_string(),
        }
    }
}

/// A bibliography entry attached to generated ideas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Paper title.
    pub title: String,
    /// Author string.
    pub authors: String,
    /// Publication date or `"N/A"`.
    pub date: String,
    /// Paper URL.
    pub url: String,
    /// Truncated abstract.
    pub r#abstract: String,
}

/// Result of the `search_papers` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResponse {
    /// Papers were fetched (possibly none).
    Success {
        /// Papers parsed before truncation.
        total_results: usize,
        /// Papers actually returned.
        returned_count: usize,
        /// The returned papers.
        papers: Vec<PaperRecord>,
    },
    /// The fetch failed; `papers` is always empty.
    Error {
        /// Stringified failure.
        message: String,
        /// Always empty.
        papers: Vec<PaperRecord>,
    },
}

impl SearchResponse {
    /// Build an error result with an empty paper list.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into(), papers: Vec::new() }
    }

    /// Papers carried by this result.
    #[must_use]
    pub fn papers(&self) -> &[PaperRecord] {
        match self {
            Self::Success { papers, .. } | Self::Error { papers, .. } => papers,
        }
    }
}

/// Prefix of `text` holding at most `max_chars` characters.
///
/// Cuts on a character boundary so multi-byte titles never split.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
