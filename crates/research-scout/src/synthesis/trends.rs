//! Model interpretation of trend aggregates.

use serde_json::{Map, Value};

use crate::error::ClientResult;
use crate::extract::extract_json_object;
use crate::llm::{ChatMessage, LanguageModel};
use crate::models::{EmergingTopic, TrendAggregate, TrendAnalysis};

const SYSTEM_PROMPT: &str =
    "You are a research trend analyst. Always respond with valid JSON only.";

/// Asks the model for a summary and emerging topics over an aggregate.
pub struct TrendSynthesizer<'a> {
    model: &'a dyn LanguageModel,
}

impl<'a> TrendSynthesizer<'a> {
    /// Bind the synthesizer to a model.
    #[must_use]
    pub fn new(model: &'a dyn LanguageModel) -> Self {
        Self { model }
    }

    /// Interpret `aggregate` for `topic`.
    ///
    /// Unparseable replies degrade to [`TrendAnalysis::default`].
    ///
    /// # Errors
    ///
    /// Returns error only when the model call itself fails.
    pub async fn synthesize(
        &self,
        topic: &str,
        aggregate: &TrendAggregate,
    ) -> ClientResult<TrendAnalysis> {
        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(topic, aggregate)?),
        ];

        let reply = self.model.invoke(&messages).await?;
        let analysis = extract_json_object(&reply).map(parse_analysis).unwrap_or_else(|| {
            tracing::warn!(reply_chars = reply.len(), "No JSON object in trend reply");
            TrendAnalysis::default()
        });

        Ok(analysis)
    }
}

/// User prompt embedding the serialized aggregate.
///
/// # Errors
///
/// Returns error if the aggregate cannot be serialized.
pub fn build_prompt(topic: &str, aggregate: &TrendAggregate) -> ClientResult<String> {
    let trends = serde_json::to_string(&aggregate.trends)?;
    let categories = serde_json::to_string(&aggregate.top_categories)?;

    Ok(format!(
        r#"Analyze the following research trends for "{topic}" and identify emerging topics:

Papers by Year: {trends}
Top Categories: {categories}

Provide:
1. A brief analysis summary (2-3 sentences)
2. 3-5 emerging topics with reasons

Format as JSON:
{{
  "analysis_summary": "...",
  "emerging_topics": [
    {{"topic": "...", "reason": "..."}}
  ]
}}"#
    ))
}

/// Lenient read of the model's object; bad pieces fall back individually.
fn parse_analysis(mut object: Map<String, Value>) -> TrendAnalysis {
    let analysis_summary = match object.remove("analysis_summary") {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        _ => TrendAnalysis::PLACEHOLDER_SUMMARY.to_string(),
    };

    let emerging_topics = match object.remove("emerging_topics") {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<EmergingTopic>(item).ok())
            .collect(),
        _ => Vec::new(),
    };

    TrendAnalysis { analysis_summary, emerging_topics }
}
