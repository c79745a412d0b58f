//! Research idea generation tool: generate_ideas.

use serde_json::json;

use super::{McpTool, ToolContext, categories_schema, require_text, response_format_schema};
use crate::client::ArxivQuery;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{GenerateIdeasInput, IdeasResponse};
use crate::synthesis::IdeaSynthesizer;

/// Generate literature-grounded research ideas.
///
/// Fetches grounding papers (falling back to sample papers when arXiv fails
/// or returns nothing), then asks the model for up to three ideas.
pub async fn generate_ideas(ctx: &ToolContext, input: &GenerateIdeasInput) -> IdeasResponse {
    if let Err(e) = require_text("topic", &input.topic) {
        return IdeasResponse::failure(e.to_user_message());
    }

    let topic = input.topic.trim();
    tracing::info!(
        topic = %topic,
        focus_area = ?input.focus_area(),
        num_papers = input.paper_limit(),
        "Generating research ideas"
    );

    let query = ArxivQuery::topic(topic).with_categories(&input.categories);
    let grounding = ctx.source.fetch_grounding(&query, input.paper_limit()).await;

    let response = IdeaSynthesizer::new(ctx.model.as_ref())
        .synthesize(topic, input.focus_area(), &grounding.papers)
        .await;

    if response.success {
        response.with_data_source(grounding.data_source)
    } else {
        response
    }
}

/// Research idea generation tool.
pub struct GenerateIdeasTool;

#[async_trait::async_trait]
impl McpTool for GenerateIdeasTool {
    fn name(&self) -> &'static str {
        "generate_ideas"
    }

    fn description(&self) -> &'static str {
        "Generate three novel research ideas grounded in recent arXiv papers. \
         Each idea has an overview, methodology and feasibility assessment, \
         plus a bibliography of the papers it builds on."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Research topic (e.g., 'quantum error correction')"
                },
                "focus_area": {
                    "type": "string",
                    "description": "Optional angle to steer the ideas toward"
                },
                "num_papers": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 50,
                    "default": 10,
                    "description": "Papers to fetch as grounding"
                },
                "categories": categories_schema(),
                "response_format": response_format_schema()
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GenerateIdeasInput = serde_json::from_value(input)?;
        let response = generate_ideas(ctx, &params).await;

        if params.response_format.is_markdown() {
            Ok(formatters::format_ideas_markdown(params.topic.trim(), &response))
        } else {
            Ok(serde_json::to_string(&response)?)
        }
    }
}
