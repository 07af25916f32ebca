//! The two extraction tools: `extract_data` and `extract_svg`.
//!
//! Each tool reads a source file, parses it through the configured
//! [`SyntaxProvider`], runs the matching core engine, and writes the
//! output artifacts. After every output write has succeeded — and only
//! then — the source file is optionally overwritten with a migration
//! marker recording where the data went, so the original file never
//! disappears before its replacement exists.

use crate::error::{error_result, Error, Result};
use crate::registry::{ToolRegistry, ToolResult};
use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde::Deserialize;
use serde_json::Value;
use sift_core::{extract_components, flatten_module, SyntaxProvider};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    Tool {
        name: name.to_string().into(),
        description: Some(description.to_string().into()),
        input_schema: json_schema(schema),
        title: None,
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    }
}

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for the `extract_data` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractDataArgs {
    /// Path to the source file containing data inside code.
    pub source_path: PathBuf,
    /// Path where the resulting JSON file should be written.
    pub target_path: PathBuf,
}

/// Arguments for the `extract_svg` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSvgArgs {
    /// Path to the source file containing SVG components.
    pub source_path: PathBuf,
    /// Directory where the SVG files should be written.
    pub target_dir: PathBuf,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the extraction tools, threaded in explicitly — the
/// tools never read ambient environment state.
#[derive(Clone, Copy, Debug)]
pub struct ExtractorConfig {
    /// Overwrite the source file with a `MIGRATED TO <path>` marker after
    /// a fully successful extraction. Irreversible.
    pub replace_source: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            replace_source: true,
        }
    }
}

// ---------------------------------------------------------------------------
// ExtractorTools
// ---------------------------------------------------------------------------

/// MCP tools for literal extraction.
///
/// Generates two tools:
/// - `extract_data` — flatten nested literals into a key-path JSON map
/// - `extract_svg` — write SVG components to individual `.svg` files
pub struct ExtractorTools {
    provider: Arc<dyn SyntaxProvider>,
    config: ExtractorConfig,
}

impl ExtractorTools {
    /// Create extraction tools over a syntax provider.
    pub fn new<P: SyntaxProvider + 'static>(provider: P, config: ExtractorConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

}

impl ToolRegistry for ExtractorTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "extract_data",
                "Extract data content (e.g. i18n translations) embedded in \
                 source code to a JSON file. Flattens nested objects and \
                 arrays into dotted key paths and keeps template variables \
                 as {{}} placeholders. By default the source file is \
                 replaced with a MIGRATED TO marker recording the target \
                 path after successful extraction.",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "sourcePath": {
                            "type": "string",
                            "description": "Path to the source file containing data inside code"
                        },
                        "targetPath": {
                            "type": "string",
                            "description": "Path where the resulting JSON file should be written"
                        }
                    },
                    "required": ["sourcePath", "targetPath"]
                }),
            ),
            make_tool(
                "extract_svg",
                "Extract SVG components from React/TypeScript/JavaScript \
                 files into individual .svg files, preserving the static \
                 SVG structure and attributes while dropping framework \
                 code. By default the source file is replaced with a \
                 MIGRATED TO marker recording the target directory after \
                 successful extraction.",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "sourcePath": {
                            "type": "string",
                            "description": "Path to the source file containing SVG components"
                        },
                        "targetDir": {
                            "type": "string",
                            "description": "Directory where the SVG files should be written"
                        }
                    },
                    "required": ["sourcePath", "targetDir"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let provider = Arc::clone(&self.provider);
        let config = self.config;

        match name {
            "extract_data" => Some(Box::pin(async move {
                let args: ExtractDataArgs = serde_json::from_value(args)
                    .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;

                match run_extract_data(provider, config, args).await {
                    Ok(message) => Ok(CallToolResult::success(vec![Content::text(message)])),
                    Err(err) => Ok(error_result(&err)),
                }
            })),

            "extract_svg" => Some(Box::pin(async move {
                let args: ExtractSvgArgs = serde_json::from_value(args)
                    .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;

                match run_extract_svg(provider, config, args).await {
                    Ok(message) => Ok(CallToolResult::success(vec![Content::text(message)])),
                    Err(err) => Ok(error_result(&err)),
                }
            })),

            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tool bodies
// ---------------------------------------------------------------------------

async fn run_extract_data(
    provider: Arc<dyn SyntaxProvider>,
    config: ExtractorConfig,
    args: ExtractDataArgs,
) -> Result<String> {
    let source = tokio::fs::read_to_string(&args.source_path).await?;
    let module = provider.parse_module(&source)?;
    let record = flatten_module(&module);

    tracing::info!(
        source = %args.source_path.display(),
        entries = record.len(),
        "flattened data literals"
    );

    create_parent_dir(&args.target_path).await?;
    let json = serde_json::to_string_pretty(&record)?;
    tokio::fs::write(&args.target_path, json).await?;

    let resolved = std::path::absolute(&args.target_path)?;
    let mut message = format!(
        "Successfully extracted {} data entries to {}",
        record.len(),
        resolved.display()
    );

    if config.replace_source {
        write_migration_marker(&args.source_path, &resolved).await?;
        message.push_str(&format!(
            ". Source file replaced with \"MIGRATED TO {}\"",
            resolved.display()
        ));
    }

    Ok(message)
}

async fn run_extract_svg(
    provider: Arc<dyn SyntaxProvider>,
    config: ExtractorConfig,
    args: ExtractSvgArgs,
) -> Result<String> {
    let source = tokio::fs::read_to_string(&args.source_path).await?;
    let module = provider.parse_module(&source)?;
    let components = extract_components(&module);

    tracing::info!(
        source = %args.source_path.display(),
        components = components.len(),
        "extracted SVG components"
    );

    tokio::fs::create_dir_all(&args.target_dir).await?;

    // No rollback on partial failure: files already written stay on disk,
    // but the migration marker below is only reached when every write
    // succeeded.
    for component in &components {
        let file_path = args.target_dir.join(format!("{}.svg", component.name));
        tokio::fs::write(&file_path, &component.content).await?;
    }

    let resolved = std::path::absolute(&args.target_dir)?;
    let mut message = format!(
        "Successfully extracted {} SVG components to {}",
        components.len(),
        resolved.display()
    );

    if config.replace_source {
        write_migration_marker(&args.source_path, &resolved).await?;
        message.push_str(&format!(
            ". Source file replaced with \"MIGRATED TO {}\"",
            resolved.display()
        ));
    }

    Ok(message)
}

async fn create_parent_dir(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

async fn write_migration_marker(source: &Path, resolved_target: &Path) -> Result<()> {
    tokio::fs::write(
        source,
        format!("MIGRATED TO {}", resolved_target.display()),
    )
    .await
    .map_err(Error::Io)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use sift_core::{Module, Result as CoreResult};
    use sift_syntax::TsxProvider;
    use tempfile::tempdir;

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    fn tools(replace_source: bool) -> ExtractorTools {
        ExtractorTools::new(TsxProvider::new(), ExtractorConfig { replace_source })
    }

    // -- Mock provider ------------------------------------------------------

    struct FailingProvider;

    impl SyntaxProvider for FailingProvider {
        fn parse_module(&self, _source: &str) -> CoreResult<Module> {
            Err(sift_core::Error::Provider("grammar unavailable".into()))
        }
    }

    // -- Tool listing -------------------------------------------------------

    #[test]
    fn test_tool_listing() {
        let tools = tools(true);
        assert_eq!(tools.tool_count(), 2);
        assert!(tools.has_tool("extract_data"));
        assert!(tools.has_tool("extract_svg"));
        assert!(!tools.has_tool("extract_html"));
    }

    #[test]
    fn test_unknown_tool_returns_none() {
        assert!(tools(true)
            .call("extract_html", serde_json::json!({}))
            .is_none());
    }

    // -- extract_data -------------------------------------------------------

    #[tokio::test]
    async fn test_extract_data_writes_json_and_marker() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("strings.ts");
        let target_path = dir.path().join("out").join("strings.json");
        std::fs::write(
            &source_path,
            "export default { common: { ok: 'OK' }, items: ['a', 'b'] };",
        )
        .unwrap();

        let future = tools(true)
            .call(
                "extract_data",
                serde_json::json!({
                    "sourcePath": source_path,
                    "targetPath": target_path,
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).contains("Successfully extracted 3 data entries"));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&target_path).unwrap()).unwrap();
        assert_eq!(written["common.ok"], "OK");
        assert_eq!(written["items.0"], "a");
        assert_eq!(written["items.1"], "b");

        let marker = std::fs::read_to_string(&source_path).unwrap();
        let resolved = std::path::absolute(&target_path).unwrap();
        assert_eq!(marker, format!("MIGRATED TO {}", resolved.display()));
    }

    #[tokio::test]
    async fn test_extract_data_replacement_disabled() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("strings.ts");
        let target_path = dir.path().join("strings.json");
        let source = "export default { a: 'x' };";
        std::fs::write(&source_path, source).unwrap();

        let future = tools(false)
            .call(
                "extract_data",
                serde_json::json!({
                    "sourcePath": source_path,
                    "targetPath": target_path,
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(!result_text(&result).contains("Source file replaced"));

        // Source untouched.
        assert_eq!(std::fs::read_to_string(&source_path).unwrap(), source);
    }

    #[tokio::test]
    async fn test_extract_data_missing_source_is_error_response() {
        let dir = tempdir().unwrap();
        let future = tools(true)
            .call(
                "extract_data",
                serde_json::json!({
                    "sourcePath": dir.path().join("missing.ts"),
                    "targetPath": dir.path().join("out.json"),
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Error: "));
        // No output written.
        assert!(!dir.path().join("out.json").exists());
    }

    #[tokio::test]
    async fn test_extract_data_syntax_error_is_error_response() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("broken.ts");
        let target_path = dir.path().join("out.json");
        let source = "export default { a: };";
        std::fs::write(&source_path, source).unwrap();

        let future = tools(true)
            .call(
                "extract_data",
                serde_json::json!({
                    "sourcePath": source_path,
                    "targetPath": target_path,
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("syntax error"));
        assert!(!target_path.exists());
        // Failed extraction never touches the source.
        assert_eq!(std::fs::read_to_string(&source_path).unwrap(), source);
    }

    #[tokio::test]
    async fn test_extract_data_failed_write_leaves_source_untouched() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("strings.ts");
        let source = "export default { a: 'x' };";
        std::fs::write(&source_path, source).unwrap();

        // Target path is an existing directory, so the JSON write fails
        // after a successful parse.
        let target_path = dir.path().join("occupied");
        std::fs::create_dir(&target_path).unwrap();

        let future = tools(true)
            .call(
                "extract_data",
                serde_json::json!({
                    "sourcePath": source_path,
                    "targetPath": target_path,
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Error: "));

        // The marker is sequenced after the output write; a failed write
        // must never overwrite the source.
        assert_eq!(std::fs::read_to_string(&source_path).unwrap(), source);
    }

    #[tokio::test]
    async fn test_extract_data_provider_failure_is_error_response() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("any.ts");
        std::fs::write(&source_path, "export default {};").unwrap();

        let tools = ExtractorTools::new(FailingProvider, ExtractorConfig::default());
        let future = tools
            .call(
                "extract_data",
                serde_json::json!({
                    "sourcePath": source_path,
                    "targetPath": dir.path().join("out.json"),
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("grammar unavailable"));
    }

    #[tokio::test]
    async fn test_extract_data_invalid_args() {
        let future = tools(true)
            .call("extract_data", serde_json::json!({"sourcePath": "x.ts"}))
            .unwrap();
        // Missing targetPath is a protocol error, not a tool response.
        assert!(future.await.is_err());
    }

    // -- extract_svg --------------------------------------------------------

    #[tokio::test]
    async fn test_extract_svg_writes_component_files() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("icons.tsx");
        let target_dir = dir.path().join("svg");
        std::fs::write(
            &source_path,
            r#"
const close = () => <svg width="10"><path d="M0 0"/></svg>;
const open = () => <svg width="12"><path d="M1 1"/></svg>;
"#,
        )
        .unwrap();

        let future = tools(true)
            .call(
                "extract_svg",
                serde_json::json!({
                    "sourcePath": source_path,
                    "targetDir": target_dir,
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).contains("Successfully extracted 2 SVG components"));

        let close_svg = std::fs::read_to_string(target_dir.join("close.svg")).unwrap();
        assert_eq!(
            close_svg,
            "<svg width=\"10\">\n    <path d=\"M0 0\"></path>\n</svg>"
        );
        assert!(target_dir.join("open.svg").exists());

        let marker = std::fs::read_to_string(&source_path).unwrap();
        let resolved = std::path::absolute(&target_dir).unwrap();
        assert_eq!(marker, format!("MIGRATED TO {}", resolved.display()));
    }

    #[tokio::test]
    async fn test_extract_svg_no_components_is_success() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("module.ts");
        let target_dir = dir.path().join("svg");
        std::fs::write(&source_path, "export const n = 1;").unwrap();

        let future = tools(false)
            .call(
                "extract_svg",
                serde_json::json!({
                    "sourcePath": source_path,
                    "targetDir": target_dir,
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).contains("0 SVG components"));
        assert!(target_dir.is_dir());
    }

    #[tokio::test]
    async fn test_extract_svg_failed_write_leaves_source_untouched() {
        let dir = tempdir().unwrap();
        let source_path = dir.path().join("icons.tsx");
        let source = r#"const icon = () => <svg width="10"><path d="M0 0"/></svg>;"#;
        std::fs::write(&source_path, source).unwrap();

        // Target dir collides with an existing file, so create_dir_all
        // fails before any component write.
        let target_dir = dir.path().join("occupied");
        std::fs::write(&target_dir, "not a directory").unwrap();

        let future = tools(true)
            .call(
                "extract_svg",
                serde_json::json!({
                    "sourcePath": source_path,
                    "targetDir": target_dir,
                }),
            )
            .unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Error: "));
        assert_eq!(std::fs::read_to_string(&source_path).unwrap(), source);
    }

    #[tokio::test]
    async fn test_extract_svg_invalid_args() {
        let future = tools(true)
            .call("extract_svg", serde_json::json!({"targetDir": "out"}))
            .unwrap();
        assert!(future.await.is_err());
    }
}
