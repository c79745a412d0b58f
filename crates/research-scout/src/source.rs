//! Paper retrieval with a deterministic fallback for grounding flows.

use crate::client::{ArxivClient, ArxivQuery};
use crate::error::ClientResult;
use crate::models::{DataSource, PaperRecord};

/// Papers plus where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grounding {
    /// Grounding papers (never empty).
    pub papers: Vec<PaperRecord>,
    /// Live arXiv results or the synthetic fallback set.
    pub data_source: DataSource,
}

/// Fetches bounded sets of paper records from arXiv.
#[derive(Debug, Clone)]
pub struct PaperSource {
    client: ArxivClient,
}

impl PaperSource {
    /// Wrap an arXiv client.
    #[must_use]
    pub const fn new(client: ArxivClient) -> Self {
        Self { client }
    }

    /// Fetch up to `limit` papers. Errors propagate; an empty list is a valid result.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or any non-2xx status.
    pub async fn search(&self, query: &ArxivQuery, limit: u32) -> ClientResult<Vec<PaperRecord>> {
        self.client.search(query, limit).await
    }

    /// Fetch up to `limit` papers for idea or trend grounding.
    ///
    /// A failed or empty fetch is replaced by [`fallback_papers`], so the
    /// result always carries at least one paper.
    pub async fn fetch_grounding(&self, query: &ArxivQuery, limit: u32) -> Grounding {
        match self.client.search(query, limit).await {
            Ok(papers) if !papers.is_empty() => {
                Grounding { papers, data_source: DataSource::Live }
            }
            Ok(_) => {
                tracing::warn!(query = %query.terms, "arXiv returned no papers, using fallback set");
                fallback_grounding(query, limit)
            }
            Err(e) => {
                tracing::warn!(query = %query.terms, error = %e, "arXiv fetch failed, using fallback set");
                fallback_grounding(query, limit)
            }
        }
    }
}

fn fallback_grounding(query: &ArxivQuery, limit: u32) -> Grounding {
    let mut papers = fallback_papers(&query.terms);
    papers.truncate(limit.max(1) as usize);
    Grounding { papers, data_source: DataSource::Fallback }
}

/// Two synthetic papers parameterized by the query.
#[must_use]
pub fn fallback_papers(query: &str) -> Vec<PaperRecord> {
    vec![
        PaperRecord {
            title: format!("Deep Learning Approaches for {query}: A Comprehensive Survey"),
            r#abstract: format!(
                "This paper provides a comprehensive survey of deep learning methods in {query}. \
                 It compares various techniques and clarifies their advantages and limitations..."
            ),
            date: "2024-01-15".to_string(),
            url: "https://arxiv.org/abs/2401.12345".to_string(),
            categories: vec!["cs.LG".to_string(), "cs.AI".to_string()],
            primary_category: "cs.LG".to_string(),
            authors: "Smith, J., Johnson, A., Williams, B.".to_string(),
            author_names: names(&["Smith, J.", "Johnson, A.", "Williams, B."]),
        },
        PaperRecord {
            title: format!("Ethical Considerations in {query} Systems"),
            r#abstract: format!(
                "This paper examines ethical considerations in {query} systems. \
                 It analyzes important issues such as privacy, transparency, and accountability..."
            ),
            date: "2024-02-20".to_string(),
            url: "https://arxiv.org/abs/2402.67890".to_string(),
            categories: vec!["cs.CY".to_string(), "cs.AI".to_string()],
            primary_category: "cs.CY".to_string(),
            authors: "Brown, C., Davis, E., Miller, F.".to_string(),
            author_names: names(&["Brown, C.", "Davis, E.", "Miller, F."]),
        },
    ]
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| (*n).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_papers_mention_query() {
        let papers = fallback_papers("quantum computing");
        assert_eq!(papers.len(), 2);
        assert_eq!(
            papers[0].title,
            "Deep Learning Approaches for quantum computing: A Comprehensive Survey"
        );
        assert!(papers[1].r#abstract.contains("quantum computing systems"));
        assert_eq!(papers[1].primary_category, "cs.CY");
    }

    #[test]
    fn test_fallback_respects_limit() {
        let grounding = fallback_grounding(&ArxivQuery::topic("x"), 1);
        assert_eq!(grounding.papers.len(), 1);
        assert!(grounding.data_source.is_fallback());
    }
}
