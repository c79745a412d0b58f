//! Research idea model and the `generate_ideas` result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{BibEntry, DataSource};

/// One model-generated research idea.
///
/// The nested sections are free-form objects; fields the model adds beyond
/// the requested schema are kept in `extra` and serialized inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchIdea {
    /// Idea title.
    #[serde(default)]
    pub title: String,

    /// Background, hypothesis, significance, novelty.
    #[serde(default = "empty_object")]
    pub overview: Value,

    /// Research design and data collection.
    #[serde(default = "empty_object")]
    pub methodology: Value,

    /// Feasibility assessment.
    #[serde(default = "empty_object")]
    pub feasibility: Value,

    /// Any other fields the model returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Papers the idea is grounded in. Set after generation, never by the model.
    #[serde(skip_deserializing)]
    pub bibliography: Vec<BibEntry>,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl ResearchIdea {
    /// Parse one element of the model's idea array; non-objects are rejected.
    #[must_use]
    pub fn from_model_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Attach the shared bibliography, dropping any the model invented.
    #[must_use]
    pub fn with_bibliography(mut self, bibliography: Vec<BibEntry>) -> Self {
        self.extra.remove("bibliography");
        self.bibliography = bibliography;
        self
    }
}

/// Result of the `generate_ideas` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeasResponse {
    /// Whether the pipeline completed.
    pub success: bool,

    /// Generated ideas (possibly empty on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideas: Option<Vec<ResearchIdea>>,

    /// Number of grounding papers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub papers_analyzed: Option<usize>,

    /// Whether the grounding papers were live or fallback data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,

    /// Failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IdeasResponse {
    /// Successful result.
    #[must_use]
    pub fn success(ideas: Vec<ResearchIdea>, papers_analyzed: usize) -> Self {
        Self {
            success: true,
            ideas: Some(ideas),
            papers_analyzed: Some(papers_analyzed),
            data_source: None,
            error: None,
        }
    }

    /// Failed result.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            ideas: None,
            papers_analyzed: None,
            data_source: None,
            error: Some(error.into()),
        }
    }

    /// Tag the result with its paper provenance.
    #[must_use]
    pub fn with_data_source(mut self, source: DataSource) -> Self {
        self.data_source = Some(source);
        self
    }

    /// Ideas, or an empty slice on failure.
    #[must_use]
    pub fn ideas(&self) -> &[ResearchIdea] {
        self.ideas.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_idea_keeps_extra_fields() {
        let idea = ResearchIdea::from_model_value(json!({
            "title": "Sparse probes",
            "overview": {"background": "b"},
            "impact": {"scientific_contribution": "c"}
        }))
        .unwrap();

        assert_eq!(idea.title, "Sparse probes");
        assert_eq!(idea.methodology, json!({}));
        assert!(idea.extra.contains_key("impact"));

        let out = serde_json::to_value(&idea).unwrap();
        assert_eq!(out["impact"]["scientific_contribution"], "c");
        assert_eq!(out["bibliography"], json!([]));
    }

    #[test]
    fn test_idea_rejects_non_objects() {
        assert!(ResearchIdea::from_model_value(json!("just text")).is_none());
        assert!(ResearchIdea::from_model_value(json!(42)).is_none());
    }

    #[test]
    fn test_model_bibliography_is_replaced() {
        let idea = ResearchIdea::from_model_value(json!({
            "title": "x",
            "bibliography": [{"title": "made up"}]
        }))
        .unwrap()
        .with_bibliography(vec![]);

        let out = serde_json::to_value(&idea).unwrap();
        assert_eq!(out["bibliography"], json!([]));
    }

    #[test]
    fn test_failure_shape() {
        let out = serde_json::to_value(IdeasResponse::failure("No papers found")).unwrap();
        assert_eq!(out, json!({"success": false, "error": "No papers found"}));
    }
}
