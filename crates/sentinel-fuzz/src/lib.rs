//! Fuzzing library for research-scout.
//!
//! Targets cover the three places untrusted text enters the crate: arXiv
//! Atom feeds, model replies, and tool arguments.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_atom_parse -- -max_total_time=60
//! ```

pub use research_scout::{client::atom, extract, models};
