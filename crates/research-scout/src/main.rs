//! Research Scout MCP Server - Entry Point
//!
//! Provides both stdio and HTTP transports.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_scout::{config::Config, server::McpServer, tools::ToolContext};

#[derive(Parser, Debug)]
#[command(name = "research-scout")]
#[command(about = "MCP server for arXiv-grounded research ideas and trend analysis")]
#[command(version)]
struct Cli {
    /// API key for the OpenAI-compatible model endpoint
    #[arg(long, env = "LLM_API_KEY")]
    llm_api_key: Option<String>,

    /// Chat model name
    #[arg(long, env = "LLM_MODEL")]
    llm_model: Option<String>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// HTTP (JSON-RPC at /mcp plus /research routes)
    Http,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries the stdio protocol, so logs go to stderr
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting Research Scout MCP server"
    );

    let mut config = Config::from_env()?;
    if cli.llm_api_key.is_some() {
        config.llm_api_key = cli.llm_api_key;
    }
    if let Some(model) = cli.llm_model {
        config.llm_model = model;
    }

    if !config.has_llm_api_key() {
        tracing::warn!("LLM_API_KEY is not set; model calls will be sent without credentials");
    }

    let server = McpServer::new(ToolContext::from_config(&config)?);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port = cli.port, "Running in HTTP mode");
            server.run_http(cli.port).await?;
        }
    }

    Ok(())
}
