//! Lookup and filtering over the known-MCP registry.

use crate::models::{McpRecord, Registry};

impl Registry {
    /// Resolve an MCP from an observed source string (package identifier or
    /// network destination) and an optional display-name hint.
    ///
    /// Priority order:
    /// 1. Package substring match against `source`
    /// 2. Endpoint URL match (remote MCPs)
    /// 3. Exact name or id match against `name`
    /// 4. Partial name match (fallback)
    ///
    /// Each pass scans records in document order; the first hit wins and no
    /// later pass runs. Best-effort: no score, ties broken by document order.
    pub fn lookup(&self, source: &str, name: Option<&str>) -> Option<&McpRecord> {
        let source_lower = source.to_lowercase();
        let name_lower = name.unwrap_or("").to_lowercase();

        // First pass: package substring match
        for mcp in &self.mcps {
            if source_lower.contains(&mcp.package.to_lowercase()) {
                return Some(mcp);
            }
        }

        // Second pass: endpoint URL match (remote MCPs)
        for mcp in &self.mcps {
            let Some(endpoint) = mcp.endpoint.as_deref().filter(|e| !e.is_empty()) else {
                continue;
            };
            let endpoint_lower = endpoint.to_lowercase();
            if source_lower.contains(&endpoint_lower) || endpoint_lower.contains(&source_lower) {
                return Some(mcp);
            }
            // Same host behind a different path or port still counts
            if extract_domain(&endpoint_lower) == extract_domain(&source_lower) {
                return Some(mcp);
            }
        }

        // Third pass: exact name or id match
        if !name_lower.is_empty() {
            for mcp in &self.mcps {
                if name_lower == mcp.name.to_lowercase() || name_lower == mcp.id.to_lowercase() {
                    return Some(mcp);
                }
            }
        }

        // Fourth pass: partial name match (e.g. "github-integration" vs "github")
        if !name_lower.is_empty() {
            for mcp in &self.mcps {
                let mcp_name_lower = mcp.name.to_lowercase();
                if mcp_name_lower.contains(&name_lower) || name_lower.contains(&mcp_name_lower) {
                    return Some(mcp);
                }
            }
        }

        None
    }

    /// Find a record by exact id.
    pub fn get(&self, id: &str) -> Option<&McpRecord> {
        self.mcps.iter().find(|m| m.id == id)
    }

    /// All MCPs from a provider. Case-insensitive.
    pub fn by_provider(&self, provider: &str) -> Vec<&McpRecord> {
        self.mcps
            .iter()
            .filter(|m| m.provider.eq_ignore_ascii_case(provider))
            .collect()
    }

    /// All MCPs at a risk level. Matches the stored label exactly,
    /// unlike [`Registry::by_provider`].
    pub fn by_risk(&self, risk_level: &str) -> Vec<&McpRecord> {
        self.mcps
            .iter()
            .filter(|m| m.risk_level == risk_level)
            .collect()
    }

    /// All verified MCPs.
    pub fn verified(&self) -> Vec<&McpRecord> {
        self.mcps.iter().filter(|m| m.verified).collect()
    }

    /// All MCPs with a known endpoint (for network monitoring).
    pub fn remote(&self) -> Vec<&McpRecord> {
        self.mcps.iter().filter(|m| m.is_remote()).collect()
    }

    /// Definition for a risk level.
    pub fn risk_definition(&self, risk_level: &str) -> &str {
        self.risk_definitions
            .get(risk_level)
            .map(String::as_str)
            .unwrap_or("Unknown risk level")
    }

    /// Definition for an MCP type.
    pub fn type_definition(&self, mcp_type: &str) -> &str {
        self.type_definitions
            .get(mcp_type)
            .map(String::as_str)
            .unwrap_or("Unknown type")
    }
}

/// Extract the host from a URL: scheme, path, and port stripped.
fn extract_domain(url: &str) -> &str {
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let url = url.split('/').next().unwrap_or(url);
    url.split(':').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Registry {
        serde_json::from_str(
            r#"{
                "mcps": [
                    {
                        "id": "github",
                        "name": "GitHub",
                        "package": "@modelcontextprotocol/server-github",
                        "provider": "Anthropic",
                        "risk_level": "medium",
                        "type": "development",
                        "verified": true
                    },
                    {
                        "id": "github-remote",
                        "name": "GitHub Remote",
                        "package": "github-mcp-server",
                        "provider": "GitHub",
                        "risk_level": "medium",
                        "type": "development",
                        "endpoint": "https://api.githubcopilot.com/mcp",
                        "verified": true
                    },
                    {
                        "id": "slack",
                        "name": "Slack",
                        "package": "@modelcontextprotocol/server-slack",
                        "provider": "anthropic",
                        "risk_level": "medium",
                        "type": "communication",
                        "verified": true
                    },
                    {
                        "id": "example-remote",
                        "name": "Example",
                        "package": "example-mcp",
                        "provider": "Example Co",
                        "risk_level": "high",
                        "type": "network",
                        "endpoint": "https://mcp.example.com/api"
                    },
                    {
                        "id": "shell",
                        "name": "Shell",
                        "package": "mcp-shell-server",
                        "provider": "Community",
                        "risk_level": "critical",
                        "type": "code_execution",
                        "endpoint": ""
                    }
                ],
                "risk_definitions": {
                    "medium": "Accesses user data or external services."
                },
                "type_definitions": {
                    "development": "Interacts with developer tooling."
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn package_match_is_case_insensitive() {
        let registry = fixture();
        let found = registry
            .lookup("npx @ModelContextProtocol/Server-GitHub", None)
            .unwrap();
        assert_eq!(found.id, "github");
    }

    #[test]
    fn package_match_wins_over_name_passes() {
        let registry = fixture();
        // The name hint alone would resolve to Slack, but the package pass
        // runs first and takes the hit.
        let found = registry
            .lookup("my-@modelcontextprotocol/server-github-wrapper", Some("Slack"))
            .unwrap();
        assert_eq!(found.id, "github");
    }

    #[test]
    fn endpoint_substring_match() {
        let registry = fixture();
        let found = registry
            .lookup("POST https://mcp.example.com/api/v1/tools", None)
            .unwrap();
        assert_eq!(found.id, "example-remote");
    }

    #[test]
    fn endpoint_domain_match_ignores_scheme_path_and_port() {
        let registry = fixture();
        let found = registry.lookup("http://MCP.EXAMPLE.COM:8443/other", None).unwrap();
        assert_eq!(found.id, "example-remote");
    }

    #[test]
    fn empty_endpoint_never_matches() {
        let registry = fixture();
        assert!(registry.lookup("https://shell.internal/run", None).is_none());
    }

    #[test]
    fn exact_name_match_accepts_name_or_id() {
        let registry = fixture();
        let by_name = registry.lookup("unrelated", Some("slack")).unwrap();
        assert_eq!(by_name.id, "slack");
        let by_id = registry.lookup("unrelated", Some("example-remote")).unwrap();
        assert_eq!(by_id.id, "example-remote");
    }

    #[test]
    fn partial_name_fallback() {
        let registry = fixture();
        let found = registry
            .lookup("unrelated-xyz", Some("slack-integration"))
            .unwrap();
        assert_eq!(found.id, "slack");
    }

    #[test]
    fn partial_name_ties_break_by_document_order() {
        let registry = fixture();
        // "github-helper" partially matches both GitHub and GitHub Remote;
        // GitHub comes first in the document.
        let found = registry.lookup("unrelated", Some("github-helper")).unwrap();
        assert_eq!(found.id, "github");
    }

    #[test]
    fn exact_name_preferred_over_partial() {
        let registry = fixture();
        // "GitHub Remote" exactly names the second record even though
        // "GitHub" would match it partially first.
        let found = registry.lookup("unrelated", Some("github remote")).unwrap();
        assert_eq!(found.id, "github-remote");
    }

    #[test]
    fn no_match_returns_none() {
        let registry = fixture();
        assert!(registry.lookup("nothing-matches", Some("zzz")).is_none());
        assert!(registry.lookup("nothing-matches", None).is_none());
    }

    #[test]
    fn get_by_id_is_exact() {
        let registry = fixture();
        assert_eq!(registry.get("slack").unwrap().name, "Slack");
        assert!(registry.get("Slack").is_none());
    }

    #[test]
    fn by_provider_is_case_insensitive() {
        let registry = fixture();
        let upper = registry.by_provider("Anthropic");
        let lower = registry.by_provider("anthropic");
        assert_eq!(upper.len(), 2);
        let upper_ids: Vec<_> = upper.iter().map(|m| m.id.as_str()).collect();
        let lower_ids: Vec<_> = lower.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(upper_ids, lower_ids);
        assert_eq!(upper_ids, ["github", "slack"]);
    }

    #[test]
    fn by_risk_is_case_sensitive() {
        let registry = fixture();
        // Risk filtering matches the stored label exactly, unlike provider
        // filtering.
        assert_eq!(registry.by_risk("medium").len(), 3);
        assert!(registry.by_risk("Medium").is_empty());
    }

    #[test]
    fn verified_requires_explicit_flag() {
        let registry = fixture();
        let ids: Vec<_> = registry.verified().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["github", "github-remote", "slack"]);
    }

    #[test]
    fn remote_skips_missing_and_empty_endpoints() {
        let registry = fixture();
        let ids: Vec<_> = registry.remote().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["github-remote", "example-remote"]);
    }

    #[test]
    fn definition_lookups_fall_back() {
        let registry = fixture();
        assert_eq!(
            registry.risk_definition("medium"),
            "Accesses user data or external services."
        );
        assert_eq!(registry.risk_definition("nonexistent"), "Unknown risk level");
        assert_eq!(
            registry.type_definition("development"),
            "Interacts with developer tooling."
        );
        assert_eq!(registry.type_definition("nonexistent"), "Unknown type");
    }

    #[test]
    fn extract_domain_strips_scheme_path_and_port() {
        assert_eq!(extract_domain("https://mcp.example.com/api"), "mcp.example.com");
        assert_eq!(extract_domain("http://mcp.example.com:8443/x"), "mcp.example.com");
        assert_eq!(extract_domain("mcp.example.com"), "mcp.example.com");
    }
}
