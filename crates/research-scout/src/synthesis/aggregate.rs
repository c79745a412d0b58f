//! Year and category aggregation over paper records.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::limits;
use crate::models::{
    AuthorCount, CategoryCount, PaperRecord, TrendAggregate, TrendPoint, UNKNOWN_DATE,
};

/// Bucket papers by year and rank their categories and authors.
///
/// Years ascend numerically with the `"N/A"` bucket last. Every category of
/// every paper counts once; the top ten are kept, most frequent first, ties
/// in first-seen order. Authors are ranked the same way over the named
/// authors of each paper.
#[must_use]
pub fn aggregate(papers: &[PaperRecord]) -> TrendAggregate {
    let mut years: HashMap<&str, usize> = HashMap::new();
    for paper in papers {
        *years.entry(paper.year_bucket()).or_default() += 1;
    }

    let mut trends: Vec<TrendPoint> = years
        .into_iter()
        .map(|(year, paper_count)| TrendPoint { year: year.to_string(), paper_count })
        .collect();
    trends.sort_by(|a, b| compare_years(&a.year, &b.year));

    TrendAggregate {
        trends,
        top_categories: rank_categories(papers),
        top_authors: rank_authors(papers),
    }
}

fn compare_years(a: &str, b: &str) -> Ordering {
    match (a == UNKNOWN_DATE, b == UNKNOWN_DATE) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.parse::<u32>().unwrap_or(0).cmp(&b.parse::<u32>().unwrap_or(0)),
    }
}

fn rank_categories(papers: &[PaperRecord]) -> Vec<CategoryCount> {
    rank(papers.iter().flat_map(|p| &p.categories), limits::TOP_CATEGORIES)
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

fn rank_authors(papers: &[PaperRecord]) -> Vec<AuthorCount> {
    rank(papers.iter().flat_map(|p| &p.author_names), limits::TOP_AUTHORS)
        .into_iter()
        .map(|(author, count)| AuthorCount { author, count })
        .collect()
}

/// Occurrence counts, most frequent first, ties in first-seen order, cut to `keep`.
fn rank<'a>(values: impl Iterator<Item = &'a String>, keep: usize) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match index.get(value.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value.as_str(), counts.len());
                counts.push((value.clone(), 1));
            }
        }
    }

    // stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(keep);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(date: &str, categories: &[&str]) -> PaperRecord {
        PaperRecord {
            title: "t".to_string(),
            r#abstract: "a".to_string(),
            date: date.to_string(),
            url: String::new(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            primary_category: categories[0].to_string(),
            authors: "x".to_string(),
            author_names: vec!["x".to_string()],
        }
    }

    #[test]
    fn test_years_ascending_unknown_last() {
        let papers = [
            paper("2023-01-01", &["cs.AI"]),
            paper("N/A", &["cs.AI"]),
            paper("2022-05-05", &["cs.AI"]),
            paper("2022-06-06", &["cs.AI"]),
        ];
        let agg = aggregate(&papers);
        let years: Vec<(&str, usize)> =
            agg.trends.iter().map(|t| (t.year.as_str(), t.paper_count)).collect();
        assert_eq!(years, vec![("2022", 2), ("2023", 1), ("N/A", 1)]);
    }

    #[test]
    fn test_category_ties_keep_first_seen_order() {
        let papers = [
            paper("2024-01-01", &["cs.CL", "cs.AI"]),
            paper("2024-01-01", &["cs.LG", "cs.AI"]),
        ];
        let agg = aggregate(&papers);
        let ranked: Vec<&str> = agg.top_categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(ranked, vec!["cs.AI", "cs.CL", "cs.LG"]);
        assert_eq!(agg.top_categories[0].count, 2);
    }

    #[test]
    fn test_top_ten_only() {
        let cats: Vec<String> = (0..15).map(|i| format!("c{i}")).collect();
        let refs: Vec<&str> = cats.iter().map(String::as_str).collect();
        let agg = aggregate(&[paper("2020-01-01", &refs)]);
        assert_eq!(agg.top_categories.len(), 10);
        assert_eq!(agg.top_categories[0].category, "c0");
    }

    #[test]
    fn test_author_ranking() {
        let mut first = paper("2024-01-01", &["cs.AI"]);
        first.author_names = vec!["Noether".to_string(), "Hilbert".to_string()];
        let mut second = paper("2024-01-01", &["cs.AI"]);
        second.author_names = vec!["Klein".to_string(), "Hilbert".to_string()];
        let mut unnamed = paper("2024-01-01", &["cs.AI"]);
        unnamed.author_names.clear();

        let agg = aggregate(&[first, second, unnamed]);
        let ranked: Vec<(&str, usize)> =
            agg.top_authors.iter().map(|a| (a.author.as_str(), a.count)).collect();
        assert_eq!(ranked, vec![("Hilbert", 2), ("Noether", 1), ("Klein", 1)]);
    }

    #[test]
    fn test_top_ten_authors_only() {
        let mut big = paper("2020-01-01", &["cs.AI"]);
        big.author_names = (0..12).map(|i| format!("Author {i}")).collect();
        let agg = aggregate(&[big]);
        assert_eq!(agg.top_authors.len(), 10);
        assert_eq!(agg.top_authors[9].author, "Author 9");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[]), TrendAggregate::default());
    }
}
