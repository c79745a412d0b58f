//! Research Scout MCP Server
//!
//! A Model Context Protocol (MCP) server that grounds research exploration in
//! arXiv literature. Papers are fetched from the arXiv Atom API, normalized
//! into [`models::PaperRecord`]s, and fused with a language-model call.
//!
//! # Features
//!
//! - **3 MCP Tools**: `generate_ideas`, `analyze_trends`, `search_papers`
//! - **Async-first**: Built on Tokio; every request is independent
//! - **Degrades gracefully**: idea and trend flows fall back to deterministic
//!   sample papers and say so via `data_source`
//!
//! # Example
//!
//! ```no_run
//! use research_scout::{client::ArxivClient, config::Config, source::PaperSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let source = PaperSource::new(ArxivClient::new(&config)?);
//!
//!     let papers = source.search(&"graph neural networks".into(), 5).await?;
//!     println!("{} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatters;
pub mod llm;
pub mod models;
pub mod server;
pub mod source;
pub mod synthesis;
pub mod tools;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
