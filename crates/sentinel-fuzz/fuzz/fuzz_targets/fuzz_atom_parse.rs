#![no_main]

use libfuzzer_sys::fuzz_target;
use research_scout::client::atom::parse_feed;

fuzz_target!(|data: &[u8]| {
    let Ok(markup) = std::str::from_utf8(data) else {
        return;
    };

    for paper in parse_feed(markup) {
        assert!(!paper.title.is_empty());
        assert!(!paper.r#abstract.is_empty());
        assert!(!paper.categories.is_empty());
        assert_eq!(paper.categories[0], paper.primary_category);
    }
});
