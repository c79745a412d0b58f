//! Output formatters.
//!
//! JSON output is the serialized result type itself; this module only adds
//! the Markdown rendering selected by `response_format`.

mod markdown;

pub use markdown::*;
