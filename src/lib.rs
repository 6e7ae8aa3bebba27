//! mcp-audit - Known MCP registry
//!
//! Identifies known MCP (Model Context Protocol) integrations from observed
//! package names, endpoint URLs, and display names, and reports their
//! provider, risk level, and type.

mod lookup;
pub mod models;
pub mod paths;
pub mod registry;

pub use models::{McpRecord, Registry};
pub use paths::{RegistrySource, REGISTRY_PATH_ENV};
pub use registry::{get_registry, load_registry, RegistryError};
