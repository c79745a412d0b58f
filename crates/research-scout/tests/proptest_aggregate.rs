//! Property-based tests for trend aggregation.

use std::collections::HashSet;

use proptest::prelude::*;

use research_scout::models::PaperRecord;
use research_scout::synthesis::aggregate;

const CATEGORY_POOL: &[&str] = &["cs.AI", "cs.LG", "cs.CL", "cs.CV", "stat.ML", "math.OC"];

const AUTHOR_POOL: &[&str] = &[
    "Noether", "Hilbert", "Klein", "Gauss", "Riemann", "Euler", "Cantor", "Galois", "Abel",
    "Jacobi", "Dirichlet", "Lie",
];

fn arb_paper() -> impl Strategy<Value = PaperRecord> {
    (
        prop_oneof![
            (1995u32..2030).prop_map(|y| format!("{y}-06-15")),
            Just("N/A".to_string()),
        ],
        prop::sample::subsequence(CATEGORY_POOL, 1..=3),
        prop::sample::subsequence(AUTHOR_POOL, 0..=4),
    )
        .prop_map(|(date, categories, authors)| PaperRecord {
            title: "t".to_string(),
            r#abstract: "a".to_string(),
            date,
            url: String::new(),
            primary_category: categories[0].to_string(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            authors: authors.join(", "),
            author_names: authors.iter().map(|a| (*a).to_string()).collect(),
        })
}

proptest! {
    /// Year buckets account for every paper, ascend, and keep N/A last.
    #[test]
    fn year_buckets_cover_all_papers(papers in prop::collection::vec(arb_paper(), 0..60)) {
        let agg = aggregate(&papers);

        let total: usize = agg.trends.iter().map(|t| t.paper_count).sum();
        prop_assert_eq!(total, papers.len());
        prop_assert!(agg.trends.iter().all(|t| t.paper_count >= 1));

        let known: Vec<u32> = agg
            .trends
            .iter()
            .filter(|t| t.year != "N/A")
            .map(|t| t.year.parse().unwrap())
            .collect();
        prop_assert!(known.windows(2).all(|w| w[0] < w[1]));

        if let Some(pos) = agg.trends.iter().position(|t| t.year == "N/A") {
            prop_assert_eq!(pos, agg.trends.len() - 1);
        }
    }

    /// With at most ten distinct categories every occurrence is counted.
    #[test]
    fn category_counts_sum_to_occurrences(papers in prop::collection::vec(arb_paper(), 0..60)) {
        let agg = aggregate(&papers);

        let occurrences: usize = papers.iter().map(|p| p.categories.len()).sum();
        let counted: usize = agg.top_categories.iter().map(|c| c.count).sum();
        prop_assert_eq!(counted, occurrences);

        let distinct: HashSet<&str> =
            papers.iter().flat_map(|p| p.categories.iter().map(String::as_str)).collect();
        prop_assert_eq!(agg.top_categories.len(), distinct.len().min(10));
        prop_assert!(agg.top_categories.windows(2).all(|w| w[0].count >= w[1].count));
    }

    /// Author ranking keeps at most ten names, each with its exact paper count.
    #[test]
    fn author_ranking_is_bounded(papers in prop::collection::vec(arb_paper(), 0..60)) {
        let agg = aggregate(&papers);

        let distinct: HashSet<&str> =
            papers.iter().flat_map(|p| p.author_names.iter().map(String::as_str)).collect();
        prop_assert_eq!(agg.top_authors.len(), distinct.len().min(10));
        prop_assert!(agg.top_authors.windows(2).all(|w| w[0].count >= w[1].count));

        for ranked in &agg.top_authors {
            let listed = papers.iter().filter(|p| p.author_names.contains(&ranked.author)).count();
            prop_assert_eq!(ranked.count, listed);
        }
    }
}
