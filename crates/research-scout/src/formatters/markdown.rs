//! Markdown output formatting.

use serde_json::Value;

use crate::models::{
    IdeasResponse, PaperRecord, ResearchIdea, SearchResponse, TrendReport, TrendsResponse,
    truncate_chars,
};

const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Format a list of papers as Markdown.
#[must_use]
pub fn format_papers_markdown(papers: &[PaperRecord]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &PaperRecord, index: usize) -> String {
    let mut output = format!("## {}. {}\n\n", index, paper.title);

    output.push_str(&format!("**Authors**: {}\n\n", paper.authors));
    output.push_str(&format!(
        "**Published**: {} | **Categories**: {}\n\n",
        paper.date,
        paper.categories.join(", ")
    ));

    if !paper.url.is_empty() {
        output.push_str(&format!("**Link**: [arXiv]({})\n\n", paper.url));
    }

    let preview = truncate_chars(&paper.r#abstract, ABSTRACT_PREVIEW_CHARS);
    if preview.len() < paper.r#abstract.len() {
        output.push_str(&format!("**Abstract**: {preview}...\n"));
    } else {
        output.push_str(&format!("**Abstract**: {preview}\n"));
    }

    output
}

/// Format a search result as Markdown.
#[must_use]
pub fn format_search_markdown(query: &str, response: &SearchResponse) -> String {
    match response {
        SearchResponse::Success { total_results, returned_count, papers } => {
            let mut output = format!(
                "# Search: {query}\n\n**Matched:** {total_results} | **Returned:** {returned_count}\n\n---\n\n"
            );
            output.push_str(&format_papers_markdown(papers));
            output
        }
        SearchResponse::Error { message, .. } => format!("# Search failed\n\n{message}\n"),
    }
}

/// Format generated ideas as Markdown.
#[must_use]
pub fn format_ideas_markdown(topic: &str, response: &IdeasResponse) -> String {
    if !response.success {
        return format!(
            "# Idea generation failed\n\n{}\n",
            response.error.as_deref().unwrap_or("Unknown error")
        );
    }

    let mut output = format!("# Research Ideas: {topic}\n\n");
    output.push_str(&format!(
        "**Papers analyzed:** {}\n",
        response.papers_analyzed.unwrap_or_default()
    ));
    if response.data_source.is_some_and(|s| s.is_fallback()) {
        output.push_str("\n> No live arXiv results; ideas are grounded in sample papers.\n");
    }
    output.push_str("\n---\n\n");

    let ideas = response.ideas();
    if ideas.is_empty() {
        output.push_str("The model returned no usable ideas.\n");
        return output;
    }

    for (i, idea) in ideas.iter().enumerate() {
        output.push_str(&format_idea_markdown(idea, i + 1));
        output.push_str("\n---\n\n");
    }

    // every idea shares one bibliography
    if let Some(first) = ideas.first() {
        output.push_str("## Bibliography\n\n");
        for (i, entry) in first.bibliography.iter().enumerate() {
            output.push_str(&format!(
                "{}. **{}** ({}). {}. {}\n",
                i + 1,
                entry.title,
                entry.date,
                entry.authors,
                entry.url
            ));
        }
    }

    output
}

fn format_idea_markdown(idea: &ResearchIdea, index: usize) -> String {
    let title = if idea.title.is_empty() { "Untitled idea" } else { idea.title.as_str() };
    let mut output = format!("## {index}. {title}\n\n");

    for (heading, section) in [
        ("Overview", &idea.overview),
        ("Methodology", &idea.methodology),
        ("Feasibility", &idea.feasibility),
    ] {
        let body = render_value(section, 0);
        if !body.is_empty() {
            output.push_str(&format!("### {heading}\n\n{body}\n"));
        }
    }

    for (key, section) in &idea.extra {
        let body = render_value(section, 0);
        if !body.is_empty() {
            output.push_str(&format!("### {}\n\n{body}\n", humanize(key)));
        }
    }

    output
}

/// Format a trend analysis as Markdown.
#[must_use]
pub fn format_trends_markdown(response: &TrendsResponse) -> String {
    match response {
        TrendsResponse::Success(report) => format_report(report),
        TrendsResponse::Error { message } => format!("# Trend analysis failed\n\n{message}\n"),
    }
}

fn format_report(report: &TrendReport) -> String {
    let mut output = format!(
        "# Research Trends: {}\n\n\
         **Period:** {}\n\
         **Total papers:** {}\n\
         **Data:** {}\n\n\
         ---\n\n\
         ## Summary\n\n{}\n\n",
        report.topic,
        report.time_range,
        report.total_papers_analyzed,
        if report.data_source.is_fallback() {
            "sample papers (no live arXiv results)"
        } else {
            "arXiv"
        },
        report.analysis_summary
    );

    output.push_str("## Papers by Year\n\n| Year | Papers |\n|------|--------|\n");
    for point in &report.trends_by_year {
        output.push_str(&format!("| {} | {} |\n", point.year, point.paper_count));
    }

    output.push_str("\n## Top Categories\n\n");
    for (i, category) in report.top_categories.iter().enumerate() {
        output.push_str(&format!("{}. {} ({})\n", i + 1, category.category, category.count));
    }

    if !report.top_authors.is_empty() {
        output.push_str("\n## Top Authors\n\n");
        for (i, author) in report.top_authors.iter().enumerate() {
            output.push_str(&format!("{}. {} ({})\n", i + 1, author.author, author.count));
        }
    }

    if !report.emerging_topics.is_empty() {
        output.push_str("\n## Emerging Topics\n\n");
        for topic in &report.emerging_topics {
            if topic.reason.is_empty() {
                output.push_str(&format!("- **{}**\n", topic.topic));
            } else {
                output.push_str(&format!("- **{}**: {}\n", topic.topic, topic.reason));
            }
        }
    }

    output
}

/// Render free-form model JSON as nested bullet lists.
fn render_value(value: &Value, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, inner)| match inner {
                Value::Object(_) => {
                    format!("{indent}- **{}**:\n{}", humanize(key), render_value(inner, depth + 1))
                }
                _ => format!("{indent}- **{}**: {}\n", humanize(key), inline(inner)),
            })
            .collect(),
        Value::Null => String::new(),
        other => format!("{indent}{}\n", inline(other)),
    }
}

fn inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(inline).collect::<Vec<_>>().join(", "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{AuthorCount, DataSource, TrendPoint};
    use crate::source::fallback_papers;

    #[test]
    fn test_papers_markdown() {
        let output = format_papers_markdown(&fallback_papers("robotics"));
        assert!(output.starts_with("# Papers (2 results)"));
        assert!(output.contains("## 2. Ethical Considerations in robotics Systems"));
        assert!(output.contains("**Link**: [arXiv](https://arxiv.org/abs/2402.67890)"));
        assert_eq!(format_papers_markdown(&[]), "No papers found.");
    }

    #[test]
    fn test_idea_sections_render() {
        let idea = ResearchIdea::from_model_value(json!({
            "title": "Probing",
            "overview": {"research_hypothesis": "h", "novelty": "n"},
            "methodology": {"data_collection": {"sources": ["arXiv", "S2"]}}
        }))
        .unwrap();
        let output = format_idea_markdown(&idea, 1);

        assert!(output.contains("## 1. Probing"));
        assert!(output.contains("- **Research hypothesis**: h"));
        assert!(output.contains("  - **Sources**: arXiv, S2"));
        assert!(!output.contains("### Feasibility"));
    }

    #[test]
    fn test_fallback_notice() {
        let response = IdeasResponse::success(vec![], 2).with_data_source(DataSource::Fallback);
        let output = format_ideas_markdown("robotics", &response);
        assert!(output.contains("No live arXiv results; ideas are grounded in sample papers."));
        assert!(!output.contains("unavailable"));
        assert!(output.contains("no usable ideas"));
    }

    #[test]
    fn test_trends_markdown() {
        let response = TrendsResponse::Success(TrendReport {
            topic: "agents".to_string(),
            time_range: "past_3_years".to_string(),
            total_papers_analyzed: 3,
            data_source: DataSource::Live,
            analysis_summary: "Growing.".to_string(),
            trends_by_year: vec![
                TrendPoint { year: "2022".to_string(), paper_count: 2 },
                TrendPoint { year: "2023".to_string(), paper_count: 1 },
            ],
            top_categories: vec![],
            top_authors: vec![AuthorCount { author: "Ada Lovelace".to_string(), count: 2 }],
            emerging_topics: vec![],
        });
        let output = format_trends_markdown(&response);
        assert!(output.contains("| 2022 | 2 |"));
        assert!(output.contains("**Data:** arXiv"));
        assert!(output.contains("## Top Authors\n\n1. Ada Lovelace (2)"));
        assert!(!output.contains("Emerging Topics"));
    }

    #[test]
    fn test_trends_fallback_label() {
        let response = TrendsResponse::Success(TrendReport {
            topic: "agents".to_string(),
            time_range: "past_year".to_string(),
            total_papers_analyzed: 2,
            data_source: DataSource::Fallback,
            analysis_summary: "Sample.".to_string(),
            trends_by_year: vec![],
            top_categories: vec![],
            top_authors: vec![],
            emerging_topics: vec![],
        });
        let output = format_trends_markdown(&response);
        assert!(output.contains("**Data:** sample papers (no live arXiv results)"));
        assert!(!output.contains("Top Authors"));
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("overall_assessment"), "Overall assessment");
        assert_eq!(humanize(""), "");
    }
}
