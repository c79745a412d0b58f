//! JSON-RPC types, shared dispatch and the HTTP router.
//!
//! Every request is handled independently: there are no sessions and no
//! server-initiated messages.

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::models::{
    AnalyzeTrendsInput, GenerateIdeasInput, IdeasResponse, SearchPapersInput, SearchResponse,
    TrendsResponse,
};
use crate::tools::{self, McpTool, ToolContext};

/// JSON-RPC: invalid JSON.
pub const PARSE_ERROR: i32 = -32700;
/// JSON-RPC: unknown method.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC: bad params.
pub const INVALID_PARAMS: i32 = -32602;
/// Tool execution failed.
pub const TOOL_ERROR: i32 = -32000;

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 error.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    /// JSON-RPC version constant.
    const VERSION: &'static str = "2.0";

    #[must_use]
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self { jsonrpc: Cow::Borrowed(Self::VERSION), result: Some(result), error: None, id }
    }

    #[must_use]
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: Cow::Borrowed(Self::VERSION),
            result: None,
            error: Some(JsonRpcError { code, message: message.into() }),
            id,
        }
    }
}

/// MCP tool info for tools/list response.
#[derive(Debug, Serialize)]
pub struct McpToolInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Dispatch one JSON-RPC request.
///
/// Returns `None` for notifications, which get no reply.
pub async fn handle_request(
    req: &JsonRpcRequest,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> Option<JsonRpcResponse> {
    let id = req.id.clone();

    match req.method.as_str() {
        "initialize" => Some(JsonRpcResponse::success(id, initialize_result(&req.params))),
        "notifications/initialized" | "initialized" | "notifications/cancelled"
            if id.is_none() =>
        {
            None
        }
        "notifications/initialized" | "initialized" | "notifications/cancelled" | "ping" => {
            Some(JsonRpcResponse::success(id, serde_json::json!({})))
        }
        "tools/list" => Some(handle_tools_list(id, tools)),
        "tools/call" => Some(handle_tools_call(id, &req.params, tools, ctx).await),
        _ if id.is_none() => None,
        _ => Some(JsonRpcResponse::error(
            id,
            METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        )),
    }
}

fn initialize_result(params: &serde_json::Value) -> serde_json::Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(|v| v.as_str())
        .unwrap_or("2024-11-05");

    tracing::info!("MCP initialize: protocol version {}", protocol_version);

    serde_json::json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "serverInfo": {
            "name": "research-scout",
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn handle_tools_list(id: Option<serde_json::Value>, tools: &[Box<dyn McpTool>]) -> JsonRpcResponse {
    let tool_list: Vec<McpToolInfo> = tools
        .iter()
        .map(|t| McpToolInfo {
            name: t.name().to_string(),
            description: t.description().to_string(),
            input_schema: t.input_schema(),
        })
        .collect();

    JsonRpcResponse::success(id, serde_json::json!({ "tools": tool_list }))
}

async fn handle_tools_call(
    id: Option<serde_json::Value>,
    params: &serde_json::Value,
    tools: &[Box<dyn McpTool>],
    ctx: &ToolContext,
) -> JsonRpcResponse {
    let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing 'name' parameter");
    };

    let arguments = params.get("arguments").cloned().unwrap_or(serde_json::json!({}));

    let Some(tool) = tools.iter().find(|t| t.name() == tool_name) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Tool not found: {tool_name}"));
    };

    tracing::info!(tool = %tool_name, "Executing tool");

    match tool.execute(ctx, arguments).await {
        Ok(result) => JsonRpcResponse::success(
            id,
            serde_json::json!({
                "content": [{
                    "type": "text",
                    "text": result
                }]
            }),
        ),
        Err(e) => {
            tracing::error!(tool = %tool_name, error = %e, "Tool execution failed");
            JsonRpcResponse::error(id, TOOL_ERROR, e.to_user_message())
        }
    }
}

/// Shared state for HTTP handlers.
pub struct HttpState {
    pub tools: Vec<Box<dyn McpTool>>,
    pub ctx: ToolContext,
}

/// Create the HTTP router.
pub fn create_router(tools: Vec<Box<dyn McpTool>>, ctx: ToolContext) -> Router {
    let state = Arc::new(HttpState { tools, ctx });

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/mcp", post(handle_mcp_post))
        .route("/research/generateIdeas", post(handle_generate_ideas))
        .route("/research/analyzeTrends", post(handle_analyze_trends))
        .route("/research/searchPapers", post(handle_search_papers))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "research-scout",
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.tools.len()
    }))
}

/// Handle POST requests to /mcp.
async fn handle_mcp_post(
    State(state): State<Arc<HttpState>>,
    body: axum::body::Bytes,
) -> Response {
    let req: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            return Json(JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {e}")))
                .into_response();
        }
    };

    tracing::debug!(method = %req.method, "Handling MCP POST request");

    match handle_request(&req, &state.tools, &state.ctx).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn handle_generate_ideas(
    State(state): State<Arc<HttpState>>,
    Json(input): Json<GenerateIdeasInput>,
) -> Json<IdeasResponse> {
    Json(tools::generate_ideas(&state.ctx, &input).await)
}

async fn handle_analyze_trends(
    State(state): State<Arc<HttpState>>,
    Json(input): Json<AnalyzeTrendsInput>,
) -> Json<TrendsResponse> {
    Json(tools::analyze_trends(&state.ctx, &input).await)
}

async fn handle_search_papers(
    State(state): State<Arc<HttpState>>,
    Json(input): Json<SearchPapersInput>,
) -> Json<SearchResponse> {
    Json(tools::search_papers(&state.ctx, &input).await)
}
