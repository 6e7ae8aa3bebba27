//! Data structures for the known-MCP registry document.

use serde::{Deserialize, Serialize};

/// Registry document at `data/known_mcps.json`
///
/// `mcps` is ordered: lookup passes scan it front to back and the first
/// match wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    pub mcps: Vec<McpRecord>,
    #[serde(default)]
    pub risk_definitions: std::collections::HashMap<String, String>,
    #[serde(default)]
    pub type_definitions: std::collections::HashMap<String, String>,
}

/// One known MCP integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRecord {
    pub id: String,
    pub name: String,
    /// Package identifier, matched as a substring of observed source strings.
    pub package: String,
    pub provider: String,
    pub risk_level: String,
    #[serde(rename = "type")]
    pub mcp_type: String,
    /// Present only for remote-hosted MCPs.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl McpRecord {
    /// True when the record points at a hosted endpoint.
    pub fn is_remote(&self) -> bool {
        self.endpoint.as_deref().is_some_and(|e| !e.is_empty())
    }
}
