//! Literature-grounded research idea generation.

use crate::config::limits;
use crate::extract::extract_json_array;
use crate::llm::{ChatMessage, LanguageModel};
use crate::models::{BibEntry, IdeasResponse, PaperRecord, ResearchIdea, truncate_chars};

const SYSTEM_PROMPT: &str = "You are a research advisor. Always respond with valid JSON only.";

/// Failure message when there is nothing to ground ideas in.
pub const NO_PAPERS: &str = "No papers found for the given topic";

/// Turns a paper set into up to three structured research ideas.
pub struct IdeaSynthesizer<'a> {
    model: &'a dyn LanguageModel,
}

impl<'a> IdeaSynthesizer<'a> {
    /// Bind the synthesizer to a model.
    #[must_use]
    pub fn new(model: &'a dyn LanguageModel) -> Self {
        Self { model }
    }

    /// Generate ideas for `topic` grounded in `papers`.
    ///
    /// Makes no model call when `papers` is empty. An unparseable reply
    /// yields zero ideas; a failed call yields a failure result.
    pub async fn synthesize(
        &self,
        topic: &str,
        focus_area: Option<&str>,
        papers: &[PaperRecord],
    ) -> IdeasResponse {
        if papers.is_empty() {
            return IdeasResponse::failure(NO_PAPERS);
        }

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(topic, focus_area, &build_context(papers))),
        ];

        let reply = match self.model.invoke(&messages).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(model = self.model.model_name(), error = %e, "Idea generation call failed");
                return IdeasResponse::failure(e.to_string());
            }
        };

        let candidates = extract_json_array(&reply).unwrap_or_else(|| {
            tracing::warn!(reply_chars = reply.len(), "No JSON array in idea reply");
            Vec::new()
        });

        let bibliography = bibliography(papers);
        let ideas: Vec<ResearchIdea> = candidates
            .into_iter()
            .filter_map(ResearchIdea::from_model_value)
            .take(limits::MAX_IDEAS)
            .map(|idea| idea.with_bibliography(bibliography.clone()))
            .collect();

        tracing::debug!(ideas = ideas.len(), papers = papers.len(), "Ideas synthesized");
        IdeasResponse::success(ideas, papers.len())
    }
}

/// Numbered summary of the first five papers for the prompt.
#[must_use]
pub fn build_context(papers: &[PaperRecord]) -> String {
    papers
        .iter()
        .take(limits::CONTEXT_PAPERS)
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}. \"{}\" ({})\n   Abstract: {}...",
                i + 1,
                p.title,
                p.date,
                truncate_chars(&p.r#abstract, limits::CONTEXT_ABSTRACT_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// User prompt asking for three ideas as a JSON array.
#[must_use]
pub fn build_prompt(topic: &str, focus_area: Option<&str>, context: &str) -> String {
    let focus = focus_area.map(|f| format!("Focus Area: {f}")).unwrap_or_default();

    format!(
        r#"You are an expert research advisor. Based on the following recent papers on "{topic}", generate 3 innovative and feasible research ideas.

Recent Papers:
{context}

{focus}

For each research idea, provide:
1. Title
2. Background and motivation
3. Research hypothesis
4. Proposed methodology
5. Expected outcomes
6. Feasibility assessment

Format your response as a JSON array with objects containing these fields:
{{
  "title": "...",
  "overview": {{
    "background": "...",
    "research_hypothesis": "...",
    "significance": "...",
    "novelty": "..."
  }},
  "methodology": {{
    "research_design": "...",
    "data_collection": {{
      "sources": [...],
      "methods": [...]
    }}
  }},
  "feasibility": {{
    "overall_assessment": "..."
  }}
}}"#
    )
}

fn bibliography(papers: &[PaperRecord]) -> Vec<BibEntry> {
    papers
        .iter()
        .take(limits::CONTEXT_PAPERS)
        .map(|p| p.to_bib_entry(limits::BIBLIOGRAPHY_ABSTRACT_CHARS))
        .collect()
}
