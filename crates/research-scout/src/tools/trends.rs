//! Publication trend analysis tool: analyze_trends.

use serde_json::json;

use super::{McpTool, ToolContext, categories_schema, require_text, response_format_schema};
use crate::client::ArxivQuery;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{AnalyzeTrendsInput, TrendReport, TrendsResponse};
use crate::synthesis::{TrendSynthesizer, aggregate};

/// Analyze publication trends for a topic.
///
/// `time_range` is echoed back but does not filter the papers.
pub async fn analyze_trends(ctx: &ToolContext, input: &AnalyzeTrendsInput) -> TrendsResponse {
    if let Err(e) = require_text("topic", &input.topic) {
        return TrendsResponse::error(e.to_user_message());
    }

    let topic = input.topic.trim();
    tracing::info!(
        topic = %topic,
        time_range = %input.time_range,
        num_papers = input.paper_limit(),
        "Analyzing research trends"
    );

    let query = ArxivQuery::topic(topic).with_categories(&input.categories);
    let grounding = ctx.source.fetch_grounding(&query, input.paper_limit()).await;

    let aggregate = aggregate(&grounding.papers);
    let analysis = match TrendSynthesizer::new(ctx.model.as_ref()).synthesize(topic, &aggregate).await
    {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::error!(topic = %topic, error = %e, "Trend analysis call failed");
            return TrendsResponse::error(e.to_string());
        }
    };

    TrendsResponse::Success(TrendReport {
        topic: topic.to_string(),
        time_range: input.time_range.clone(),
        total_papers_analyzed: grounding.papers.len(),
        data_source: grounding.data_source,
        analysis_summary: analysis.analysis_summary,
        trends_by_year: aggregate.trends,
        top_categories: aggregate.top_categories,
        top_authors: aggregate.top_authors,
        emerging_topics: analysis.emerging_topics,
    })
}

/// Research trend analysis tool.
pub struct AnalyzeTrendsTool;

#[async_trait::async_trait]
impl McpTool for AnalyzeTrendsTool {
    fn name(&self) -> &'static str {
        "analyze_trends"
    }

    fn description(&self) -> &'static str {
        "Analyze publication trends for a research topic on arXiv. \
         Counts papers per year, ranks subject categories and asks the model \
         for a summary and emerging topics."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Research topic to analyze"
                },
                "time_range": {
                    "type": "string",
                    "default": "past_3_years",
                    "description": "Period label, echoed in the result"
                },
                "num_papers": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 500,
                    "default": 300
                },
                "categories": categories_schema(),
                "response_format": response_format_schema()
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AnalyzeTrendsInput = serde_json::from_value(input)?;
        let response = analyze_trends(ctx, &params).await;

        if params.response_format.is_markdown() {
            Ok(formatters::format_trends_markdown(&response))
        } else {
            Ok(serde_json::to_string(&response)?)
        }
    }
}
