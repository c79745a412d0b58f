//! Stdio transport for MCP protocol.
//!
//! Handles newline-delimited JSON-RPC 2.0 over stdin/stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::transport::{JsonRpcRequest, JsonRpcResponse, PARSE_ERROR, handle_request};
use crate::tools::{McpTool, ToolContext};

/// Handle MCP protocol over the process's stdin and stdout.
pub async fn run_stdio(tools: Vec<Box<dyn McpTool>>, ctx: ToolContext) -> anyhow::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();

    tracing::info!("MCP stdio server ready, waiting for requests...");
    serve_lines(reader, writer, &tools, &ctx).await
}

/// Serve requests from `reader` until EOF, writing one response line each.
pub async fn serve_lines<R, W>(
    mut reader: R,
    mut writer: W,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(trimmed) {
            Ok(request) => {
                tracing::debug!(method = %request.method, "Received request");
                handle_request(&request, tools, ctx).await
            }
            Err(e) => Some(JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {e}"))),
        };

        if let Some(response) = response {
            let response_json = serde_json::to_string(&response)?;
            writer.write_all(response_json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    Ok(())
}
