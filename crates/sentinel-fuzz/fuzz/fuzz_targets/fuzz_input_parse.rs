#![no_main]

use libfuzzer_sys::fuzz_target;
use research_scout::models::{AnalyzeTrendsInput, GenerateIdeasInput, SearchPapersInput};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = serde_json::from_slice::<GenerateIdeasInput>(data) {
        assert!((1..=50).contains(&input.paper_limit()));
    }
    if let Ok(input) = serde_json::from_slice::<AnalyzeTrendsInput>(data) {
        assert!((1..=500).contains(&input.paper_limit()));
    }
    if let Ok(input) = serde_json::from_slice::<SearchPapersInput>(data) {
        assert!((1..=50).contains(&input.result_limit()));
    }
});
