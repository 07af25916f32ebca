//! MCP tools exposed by the sift server.

pub mod extract;
pub mod health;

pub use extract::{ExtractorConfig, ExtractorTools};
pub use health::{HealthResponse, HealthTools};
