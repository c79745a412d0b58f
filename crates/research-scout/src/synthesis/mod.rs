//! Literature synthesis: aggregation and model-backed interpretation.
//!
//! The aggregator is pure. The two synthesizers each make exactly one
//! [`LanguageModel`](crate::llm::LanguageModel) call and tolerate replies
//! that wrap or mangle the requested JSON.

pub mod aggregate;
pub mod ideas;
pub mod trends;

pub use aggregate::aggregate;
pub use ideas::IdeaSynthesizer;
pub use trends::TrendSynthesizer;
