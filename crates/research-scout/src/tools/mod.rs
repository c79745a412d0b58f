//! MCP tool implementations.
//!
//! Each tool module provides:
//! 1. An operation function returning the typed result (used by the HTTP
//!    research routes and by tests)
//! 2. An [`McpTool`] wrapper that parses arguments and renders the result
//!    as JSON or Markdown

mod ideas;
mod search;
mod trends;

pub use ideas::*;
pub use search::*;
pub use trends::*;

use std::sync::Arc;

use crate::client::ArxivClient;
use crate::config::Config;
use crate::error::{ToolError, ToolResult};
use crate::llm::{LanguageModel, OpenAiCompatModel};
use crate::source::PaperSource;

/// Tool execution context.
///
/// Holds only immutable clients; every call is independent.
#[derive(Clone)]
pub struct ToolContext {
    /// arXiv paper source.
    pub source: PaperSource,

    /// Generative model.
    pub model: Arc<dyn LanguageModel>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(source: PaperSource, model: Arc<dyn LanguageModel>) -> Self {
        Self { source, model }
    }

    /// Build the arXiv and model clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if either HTTP client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let source = PaperSource::new(ArxivClient::new(config)?);
        let model = Arc::new(OpenAiCompatModel::new(config)?);
        Ok(Self::new(source, model))
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("source", &self.source)
            .field("model", &self.model.model_name())
            .finish()
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "generate_ideas").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(ideas::GenerateIdeasTool),
        Box::new(trends::AnalyzeTrendsTool),
        Box::new(search::SearchPapersTool),
    ]
}

/// Reject blank required text fields.
fn require_text(field: &str, value: &str) -> ToolResult<()> {
    if value.trim().is_empty() {
        return Err(ToolError::validation(field, "cannot be empty"));
    }
    Ok(())
}

/// Schema fragment shared by every tool.
fn response_format_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "enum": ["json", "markdown"],
        "default": "json"
    })
}

/// Schema fragment for the arXiv category filter.
fn categories_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": {"type": "string"},
        "description": "Restrict to arXiv categories (e.g., [\"cs.LG\", \"stat.ML\"])"
    })
}
