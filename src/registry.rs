//! Loading and caching of the known-MCP registry.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::models::Registry;
use crate::paths::RegistrySource;

/// Registry snapshot shipped with the crate.
const BUNDLED: &str = include_str!("../data/known_mcps.json");

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Load and cache the known-MCP registry.
///
/// The first call resolves the source, reads, and parses; later calls return
/// the cached value without touching disk. A failed load caches nothing, so
/// the error reaches every caller until a load succeeds.
pub fn get_registry() -> Result<&'static Registry, RegistryError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let loaded = load_registry(&RegistrySource::resolve())?;
    Ok(REGISTRY.get_or_init(|| loaded))
}

/// Load a registry from the given source without caching.
pub fn load_registry(source: &RegistrySource) -> Result<Registry, RegistryError> {
    match source {
        RegistrySource::Bundled => serde_json::from_str(BUNDLED)
            .map_err(|e| RegistryError::ParseFailed(e, "bundled registry".to_string())),
        RegistrySource::File(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| RegistryError::ReadFailed(e, path.clone()))?;
            serde_json::from_str(&content)
                .map_err(|e| RegistryError::ParseFailed(e, path.display().to_string()))
        }
    }
}

#[derive(Debug)]
pub enum RegistryError {
    ReadFailed(std::io::Error, PathBuf),
    ParseFailed(serde_json::Error, String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::ReadFailed(e, path) => {
                write!(f, "Failed to read registry {}: {}", path.display(), e)
            }
            RegistryError::ParseFailed(e, origin) => {
                write!(f, "Failed to parse {}: {}", origin, e)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
