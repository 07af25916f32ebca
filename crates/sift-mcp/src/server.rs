//! MCP server implementation.
//!
//! `SiftMcpServer` is a thin rmcp `ServerHandler` that delegates tool
//! listing and dispatch to the [`ToolRegistry`] it holds. An unknown tool
//! name is a protocol-level `METHOD_NOT_FOUND` error, deliberately
//! distinct from the error-flagged text responses the tools themselves
//! produce for data failures.

use crate::registry::ToolRegistry;
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ErrorCode, ErrorData, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    transport::stdio,
    ServerHandler, ServiceExt,
};
use serde_json::Value;

/// Server metadata reported during MCP initialization.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Optional usage instructions for clients.
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "sift-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: Some(
                "Extracts embedded literal data from source files: \
                 extract_data flattens nested object literals into a JSON \
                 key-path map, extract_svg writes SVG components to \
                 individual files."
                    .to_string(),
            ),
        }
    }
}

/// Generic MCP server over a tool registry.
pub struct SiftMcpServer<R: ToolRegistry> {
    config: ServerConfig,
    registry: R,
}

impl<R: ToolRegistry> SiftMcpServer<R> {
    /// Create a server with default metadata.
    pub fn new(registry: R) -> Self {
        Self {
            config: ServerConfig::default(),
            registry,
        }
    }

    /// Create a server with explicit metadata.
    pub fn with_config(registry: R, config: ServerConfig) -> Self {
        Self { config, registry }
    }
}

impl<R: ToolRegistry + 'static> SiftMcpServer<R> {
    /// Serve over stdio until the client disconnects.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        tracing::info!(server = %self.config.name, "starting MCP server on stdio");
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }
}

impl<R: ToolRegistry + 'static> ServerHandler for SiftMcpServer<R> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
                ..Default::default()
            },
            instructions: self.config.instructions.clone(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request
            .arguments
            .map(Value::Object)
            .unwrap_or(Value::Null);

        tracing::debug!(tool = %request.name, "dispatching tool call");

        match self.registry.call(&request.name, args) {
            Some(result) => result.await,
            None => Err(ErrorData::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", request.name),
                None,
            )),
        }
    }
}
