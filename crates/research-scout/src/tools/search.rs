//! Paper search tool: search_papers.

use serde_json::json;

use super::{McpTool, ToolContext, categories_schema, require_text, response_format_schema};
use crate::client::ArxivQuery;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{SearchPapersInput, SearchResponse};

/// Search arXiv and return the parsed papers as-is.
///
/// No fallback: a failed fetch is reported as an error result.
pub async fn search_papers(ctx: &ToolContext, input: &SearchPapersInput) -> SearchResponse {
    if let Err(e) = require_text("query", &input.query) {
        return SearchResponse::error(e.to_user_message());
    }

    let limit = input.result_limit();
    tracing::info!(
        query = %input.query.trim(),
        authors = ?input.authors(),
        sort_by = input.sort_by.as_param(),
        limit,
        "Searching papers"
    );

    let query = ArxivQuery::topic(input.query.trim())
        .with_author(input.authors())
        .with_categories(&input.categories)
        .sorted(input.sort_by, input.sort_order);

    match ctx.source.search(&query, limit).await {
        Ok(mut papers) => {
            let total_results = papers.len();
            papers.truncate(limit as usize);
            SearchResponse::Success { total_results, returned_count: papers.len(), papers }
        }
        Err(e) => {
            tracing::error!(error = %e, "Paper search failed");
            SearchResponse::error(ToolError::from(e).to_user_message())
        }
    }
}

/// Paper search tool.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl McpTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Search arXiv by free-text query, optionally filtered by author and \
         category. Returns normalized paper records."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text search query"
                },
                "authors": {
                    "type": "string",
                    "description": "Author name to require"
                },
                "sort_by": {
                    "type": "string",
                    "enum": ["relevance", "lastUpdatedDate", "submittedDate"],
                    "default": "relevance"
                },
                "sort_order": {
                    "type": "string",
                    "enum": ["ascending", "descending"],
                    "default": "descending"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 50,
                    "default": 20
                },
                "categories": categories_schema(),
                "response_format": response_format_schema()
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPapersInput = serde_json::from_value(input)?;
        let response = search_papers(ctx, &params).await;

        if params.response_format.is_markdown() {
            Ok(formatters::format_search_markdown(params.query.trim(), &response))
        } else {
            Ok(serde_json::to_string(&response)?)
        }
    }
}
