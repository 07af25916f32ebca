//! Sift MCP — the dispatch and I/O shell around the extraction engines.
//!
//! Exposes sift's two extraction operations as MCP tools over the stdio
//! transport, plus a built-in `health` tool.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        sift-mcp                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry trait — tool registration and dispatch        │
//! │  CompositeRegistry — combine multiple tool sources          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SiftMcpServer — generic server (implements ServerHandler)  │
//! │  ServerConfig — server metadata (name, version, notes)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Tools:                                                     │
//! │  ├── extract_data — nested literals → dotted-path JSON map  │
//! │  ├── extract_svg — SVG components → individual .svg files   │
//! │  └── health — server status and tool count                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell owns everything the core engines refuse to: reading source
//! files, creating output directories, writing artifacts, the optional
//! migration-marker overwrite of the source file, and converting every
//! failure into a uniform error-flagged tool response at the dispatch
//! boundary.
//!
//! # Example
//!
//! ```rust,ignore
//! use sift_mcp::registry::CompositeRegistry;
//! use sift_mcp::server::SiftMcpServer;
//! use sift_mcp::tools::{ExtractorConfig, ExtractorTools, HealthTools};
//! use sift_syntax::TsxProvider;
//!
//! let extractor = ExtractorTools::new(TsxProvider::new(), ExtractorConfig::default());
//! let registry = CompositeRegistry::new()
//!     .add(extractor)
//!     .add(HealthTools::new("sift-mcp", env!("CARGO_PKG_VERSION"), 3));
//!
//! SiftMcpServer::new(registry).serve_stdio().await?;
//! ```

pub mod error;
pub mod registry;
pub mod server;
pub mod tools;

// Re-exports — registry
pub use registry::{CompositeRegistry, ToolRegistry, ToolResult};

// Re-exports — server
pub use server::{ServerConfig, SiftMcpServer};

// Re-exports — tools
pub use tools::{ExtractorConfig, ExtractorTools, HealthTools};

// Re-exports — error
pub use error::{Error, Result};
