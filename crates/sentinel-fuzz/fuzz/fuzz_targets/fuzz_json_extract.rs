#![no_main]

use libfuzzer_sys::fuzz_target;
use research_scout::extract::{extract_json_array, extract_json_object};
use research_scout::models::ResearchIdea;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    if let Some(items) = extract_json_array(&text) {
        for item in items {
            let _ = ResearchIdea::from_model_value(item);
        }
    }
    let _ = extract_json_object(&text);
});
