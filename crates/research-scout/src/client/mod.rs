//! arXiv API client.
//!
//! Issues a single GET per call against the Atom query endpoint and hands
//! the body to the [`atom`] parser. There is no retry, cache or rate
//! limiter: a failed request is reported to the caller as-is.

pub mod atom;

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{PaperRecord, SortBy, SortOrder};

/// Search parameters for one arXiv request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArxivQuery {
    /// Free-text terms, matched as a phrase against all fields.
    pub terms: String,

    /// Author name AND-ed into the query.
    pub author: Option<String>,

    /// Categories OR-ed together and AND-ed into the query.
    pub categories: Vec<String>,

    /// Sort key.
    pub sort_by: SortBy,

    /// Sort direction.
    pub sort_order: SortOrder,
}

impl ArxivQuery {
    /// Topic search sorted by relevance, descending.
    #[must_use]
    pub fn topic(terms: impl Into<String>) -> Self {
        Self { terms: terms.into(), ..Self::default() }
    }

    /// Add an author filter; blank names are ignored.
    #[must_use]
    pub fn with_author(mut self, author: Option<&str>) -> Self {
        self.author = author.map(str::trim).filter(|a| !a.is_empty()).map(str::to_string);
        self
    }

    /// Add a category filter; blank entries are ignored.
    #[must_use]
    pub fn with_categories(mut self, categories: &[String]) -> Self {
        self.categories = categories
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    /// Override the sort.
    #[must_use]
    pub const fn sorted(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// The unencoded `search_query` value.
    ///
    /// `all:"<terms>"`, then ` AND au:"<author>"`, then
    /// ` AND (cat:a OR cat:b)`. Double quotes inside values are dropped so the
    /// phrases stay balanced.
    #[must_use]
    pub fn search_query(&self) -> String {
        let mut query = format!("all:\"{}\"", strip_quotes(&self.terms));

        if let Some(author) = &self.author {
            query.push_str(&format!(" AND au:\"{}\"", strip_quotes(author)));
        }

        if !self.categories.is_empty() {
            let cats = self
                .categories
                .iter()
                .map(|c| format!("cat:{}", strip_quotes(c)))
                .collect::<Vec<_>>()
                .join(" OR ");
            query.push_str(&format!(" AND ({cats})"));
        }

        query
    }
}

impl From<&str> for ArxivQuery {
    fn from(terms: &str) -> Self {
        Self::topic(terms)
    }
}

fn strip_quotes(value: &str) -> String {
    value.replace('"', "").trim().to_string()
}

/// arXiv Atom API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Query endpoint.
    api_url: Url,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is not a URL or the HTTP client cannot be built.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api_url = Url::parse(&config.arxiv_api_url)?;

        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_url })
    }

    /// Full request URL for a query, percent-encoded.
    #[must_use]
    pub fn request_url(&self, query: &ArxivQuery, max_results: u32) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("search_query", &query.search_query())
            .append_pair("start", "0")
            .append_pair("max_results", &max_results.to_string())
            .append_pair("sortBy", query.sort_by.as_param())
            .append_pair("sortOrder", query.sort_order.as_param());
        url
    }

    /// Fetch the raw Atom markup for a query.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or any non-2xx status.
    pub async fn fetch_markup(&self, query: &ArxivQuery, max_results: u32) -> ClientResult<String> {
        let url = self.request_url(query, max_results);
        tracing::debug!(url = %url, "Querying arXiv");

        let response = self.client.get(url).send().await?;
        let response = handle_response(response).await?;

        Ok(response.text().await?)
    }

    /// Fetch and parse papers for a query.
    ///
    /// An empty list is a valid result.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or any non-2xx status.
    pub async fn search(
        &self,
        query: &ArxivQuery,
        max_results: u32,
    ) -> ClientResult<Vec<PaperRecord>> {
        let markup = self.fetch_markup(query, max_results).await?;
        let papers = atom::parse_feed(&markup);

        tracing::debug!(parsed = papers.len(), requested = max_results, "Parsed arXiv feed");
        Ok(papers)
    }
}

/// Map non-2xx statuses to errors.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    match status.as_u16() {
        500..=599 => Err(ClientError::server(status.as_u16(), text)),
        code => Err(ClientError::unexpected_status(code, text)),
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient").field("api_url", &self.api_url.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_query() {
        let query = ArxivQuery::topic("quantum computing");
        assert_eq!(query.search_query(), "all:\"quantum computing\"");
    }

    #[test]
    fn test_author_and_categories() {
        let query = ArxivQuery::topic("graph \"neural\" nets")
            .with_author(Some("Hinton"))
            .with_categories(&["cs.LG".to_string(), " ".to_string(), "stat.ML".to_string()]);

        assert_eq!(
            query.search_query(),
            "all:\"graph neural nets\" AND au:\"Hinton\" AND (cat:cs.LG OR cat:stat.ML)"
        );
    }

    #[test]
    fn test_blank_author_ignored() {
        let query = ArxivQuery::topic("x").with_author(Some("  "));
        assert!(query.author.is_none());
    }

    #[test]
    fn test_request_url_encodes_query() {
        let client = ArxivClient::new(&Config::default()).unwrap();
        let query = ArxivQuery::topic("a b").sorted(SortBy::SubmittedDate, SortOrder::Ascending);
        let url = client.request_url(&query, 7);

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("search_query".to_string(), "all:\"a b\"".to_string())));
        assert!(pairs.contains(&("max_results".to_string(), "7".to_string())));
        assert!(pairs.contains(&("sortBy".to_string(), "submittedDate".to_string())));
        assert!(pairs.contains(&("sortOrder".to_string(), "ascending".to_string())));
        assert!(!url.as_str().contains(' '));
    }
}
