//! Built-in `health` tool.
//!
//! Reports server status, version, and the number of tools the server
//! exposes. Metadata is captured at construction time, so the reported
//! tool count must include the health tool itself.

use crate::registry::{ToolRegistry, ToolResult};
use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Number of registered tools.
    pub tool_count: usize,
}

/// A tool registry that provides the `health` tool.
pub struct HealthTools {
    server_name: String,
    version: String,
    total_tool_count: usize,
}

impl HealthTools {
    /// Create health tools with server metadata.
    ///
    /// `total_tool_count` should include the health tool itself.
    pub fn new(
        server_name: impl Into<String>,
        version: impl Into<String>,
        total_tool_count: usize,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            version: version.into(),
            total_tool_count,
        }
    }
}

impl ToolRegistry for HealthTools {
    fn tools(&self) -> Vec<Tool> {
        vec![Tool {
            name: "health".into(),
            description: Some("Check server health and status".into()),
            input_schema: Arc::new(serde_json::Map::new()),
            title: None,
            output_schema: None,
            annotations: None,
            icons: None,
            meta: None,
        }]
    }

    fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
        if name != "health" {
            return None;
        }

        let response = HealthResponse {
            status: "healthy".to_string(),
            server_name: self.server_name.clone(),
            version: self.version.clone(),
            tool_count: self.total_tool_count,
        };

        Some(Box::pin(async move {
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    #[test]
    fn test_health_tools_creation() {
        let tools = HealthTools::new("sift-mcp", "0.1.0", 3);
        assert_eq!(tools.tool_count(), 1);
        assert!(tools.has_tool("health"));
        assert!(!tools.has_tool("extract_data"));
    }

    #[tokio::test]
    async fn test_health_tools_call_reports_metadata() {
        let tools = HealthTools::new("sift-mcp", "0.1.0", 3);
        let future = tools.call("health", json!({})).unwrap();
        let result = future.await.unwrap();

        assert_eq!(result.is_error, Some(false));
        let text = match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            _ => panic!("Expected text content"),
        };
        let response: HealthResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(response.status, "healthy");
        assert_eq!(response.server_name, "sift-mcp");
        assert_eq!(response.version, "0.1.0");
        assert_eq!(response.tool_count, 3);
    }

    #[test]
    fn test_health_tools_unknown_tool() {
        let tools = HealthTools::new("sift-mcp", "0.1.0", 3);
        assert!(tools.call("unknown", json!({})).is_none());
    }

    #[test]
    fn test_health_response_round_trip() {
        let json = r#"{"status":"healthy","server_name":"sift-mcp","version":"0.1.0","tool_count":3}"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.tool_count, 3);
    }
}
