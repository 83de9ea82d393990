//! Serialization of scan output to YAML or JSON.

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serializes any scan model to YAML.
pub fn serialize_yaml<T: Serialize>(value: &T) -> Result<String> {
    debug!("Serializing scan output to YAML");
    serde_yaml::to_string(value).context("Failed to serialize scan output to YAML")
}

/// Serializes any scan model to pretty-printed JSON.
pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    debug!("Serializing scan output to JSON");
    serde_json::to_string_pretty(value).context("Failed to serialize scan output to JSON")
}

/// Writes string content to a file, creating parent directories as needed.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
