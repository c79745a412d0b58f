//! Configuration for the Research Scout server.

use std::time::Duration;

/// Outbound API constants.
pub mod api {
    use std::time::Duration;

    /// arXiv Atom query endpoint.
    pub const ARXIV_API: &str = "https://export.arxiv.org/api/query";

    /// OpenAI-compatible API root (`/chat/completions` is appended).
    pub const LLM_API: &str = "https://api.openai.com/v1";

    /// Default chat model.
    pub const LLM_MODEL: &str = "gpt-4o-mini";

    /// Default sampling temperature.
    pub const LLM_TEMPERATURE: f32 = 0.7;

    /// Request timeout. Model calls for three detailed ideas can be slow.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// User agent sent to arXiv.
    pub const USER_AGENT: &str = concat!("research-scout/", env!("CARGO_PKG_VERSION"));
}

/// Per-operation paper limits.
///
/// Each call site clamps its own `limit` before it reaches the paper source.
pub mod limits {
    /// Default papers fetched for idea generation.
    pub const IDEAS_DEFAULT: u32 = 10;
    /// Upper bound for idea generation.
    pub const IDEAS_MAX: u32 = 50;

    /// Default papers fetched for trend analysis.
    pub const TRENDS_DEFAULT: u32 = 300;
    /// Upper bound for trend analysis.
    pub const TRENDS_MAX: u32 = 500;

    /// Default result count for paper search.
    pub const SEARCH_DEFAULT: u32 = 20;
    /// Upper bound for paper search.
    pub const SEARCH_MAX: u32 = 50;

    /// Papers shown to the model and attached as bibliography.
    pub const CONTEXT_PAPERS: usize = 5;
    /// Ideas kept from one model response.
    pub const MAX_IDEAS: usize = 3;
    /// Categories reported by trend analysis.
    pub const TOP_CATEGORIES: usize = 10;
    /// Authors reported by trend analysis.
    pub const TOP_AUTHORS: usize = 10;

    /// Abstract prefix length in the model context.
    pub const CONTEXT_ABSTRACT_CHARS: usize = 200;
    /// Abstract prefix length in bibliography entries.
    pub const BIBLIOGRAPHY_ABSTRACT_CHARS: usize = 150;

    /// Clamp a requested count into `1..=max`.
    #[must_use]
    pub fn clamp(requested: u32, max: u32) -> u32 {
        requested.clamp(1, max)
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// arXiv query endpoint (overridable for mock servers).
    pub arxiv_api_url: String,

    /// OpenAI-compatible API root.
    pub llm_api_url: String,

    /// Bearer token for the model API (optional for local endpoints).
    pub llm_api_key: Option<String>,

    /// Chat model name.
    pub llm_model: String,

    /// Sampling temperature.
    pub llm_temperature: f32,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration against the public endpoints.
    #[must_use]
    pub fn new(llm_api_key: Option<String>) -> Self {
        Self {
            arxiv_api_url: api::ARXIV_API.to_string(),
            llm_api_url: api::LLM_API.to_string(),
            llm_api_key,
            llm_model: api::LLM_MODEL.to_string(),
            llm_temperature: api::LLM_TEMPERATURE,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with both services behind one mock server.
    ///
    /// arXiv is served at `{base_url}/api/query` and the model at
    /// `{base_url}/v1/chat/completions`.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            arxiv_api_url: format!("{}/api/query", base_url),
            llm_api_url: format!("{}/v1", base_url),
            llm_api_key: Some("test-key".to_string()),
            llm_model: "test-model".to_string(),
            llm_temperature: 0.0,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ARXIV_API_URL`, `LLM_API_URL`, `LLM_API_KEY`, `LLM_MODEL` and
    /// `LLM_TEMPERATURE`; unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if `LLM_TEMPERATURE` is not a number.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new(std::env::var("LLM_API_KEY").ok());

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.arxiv_api_url = url;
        }
        if let Ok(url) = std::env::var("LLM_API_URL") {
            config.llm_api_url = url;
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            config.llm_model = model;
        }
        if let Ok(temperature) = std::env::var("LLM_TEMPERATURE") {
            config.llm_temperature = temperature
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("LLM_TEMPERATURE must be a number: {e}"))?;
        }

        Ok(config)
    }

    /// Check if a model API key is configured.
    #[must_use]
    pub const fn has_llm_api_key(&self) -> bool {
        self.llm_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.llm_api_key.is_none());
        assert!(!config.has_llm_api_key());
        assert_eq!(config.arxiv_api_url, api::ARXIV_API);
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.arxiv_api_url, "http://127.0.0.1:9999/api/query");
        assert_eq!(config.llm_api_url, "http://127.0.0.1:9999/v1");
        assert!(config.has_llm_api_key());
    }

    #[test]
    fn test_clamp() {
        assert_eq!(limits::clamp(0, limits::IDEAS_MAX), 1);
        assert_eq!(limits::clamp(10, limits::IDEAS_MAX), 10);
        assert_eq!(limits::clamp(900, limits::TRENDS_MAX), 500);
        assert_eq!(limits::clamp(51, limits::SEARCH_MAX), 50);
    }
}
