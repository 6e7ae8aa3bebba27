//! Registry source resolution.
//!
//! Uses the env var when set, otherwise a user-scope override file,
//! otherwise the snapshot bundled into the binary.

use std::path::PathBuf;

/// Env var pointing at an alternate registry JSON file.
pub const REGISTRY_PATH_ENV: &str = "MCP_AUDIT_REGISTRY_PATH";

/// Where the registry document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// Snapshot compiled into the binary.
    Bundled,
    /// JSON file on disk (env override or user config).
    File(PathBuf),
}

impl RegistrySource {
    /// Resolve the source from environment, falling back to the user
    /// override file when it exists, then the bundled snapshot.
    pub fn resolve() -> Self {
        if let Ok(val) = std::env::var(REGISTRY_PATH_ENV) {
            let trimmed = val.trim();
            if !trimmed.is_empty() {
                return RegistrySource::File(expand_tilde(trimmed));
            }
        }

        if let Some(path) = Self::user_override_path() {
            if path.exists() {
                return RegistrySource::File(path);
            }
        }

        RegistrySource::Bundled
    }

    /// User-scope override location, whether or not the file exists.
    pub fn user_override_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mcp-audit/known_mcps.json"))
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}
