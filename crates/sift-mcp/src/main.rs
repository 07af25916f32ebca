//! Sift MCP Server
//!
//! Standalone MCP server exposing the literal-extraction tools over stdio.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use sift_mcp::{
    CompositeRegistry, ExtractorConfig, ExtractorTools, HealthTools, SiftMcpServer, ToolRegistry,
};
use sift_syntax::TsxProvider;
use tracing_subscriber::EnvFilter;

/// Sift MCP server - extract embedded literal data from source files
#[derive(Parser, Debug)]
#[command(name = "sift-mcp")]
#[command(about = "MCP server for extracting data and SVG literals from source code", long_about = None)]
struct Args {
    /// Leave source files untouched instead of replacing them with a
    /// migration marker after extraction.
    #[arg(long, env = "DISABLE_SOURCE_REPLACEMENT")]
    disable_source_replacement: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,sift_mcp=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let extractor = ExtractorTools::new(
        TsxProvider::new(),
        ExtractorConfig {
            replace_source: !args.disable_source_replacement,
        },
    );
    let total_tools = extractor.tool_count() + 1;

    let registry = CompositeRegistry::new().add(extractor).add(HealthTools::new(
        "sift-mcp",
        env!("CARGO_PKG_VERSION"),
        total_tools,
    ));

    SiftMcpServer::new(registry).serve_stdio().await
}
