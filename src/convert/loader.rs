use crate::convert::types::LoadedDocument;
use crate::error::{ConvertError, Result};
use log::{debug, info};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Parses file text as JSON. A leading byte-order mark is skipped, the same
/// way a text reader would drop it.
pub fn parse_document(text: &str) -> Result<Value> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(serde_json::from_str(text)?)
}

pub async fn load_document(path: &Path) -> Result<LoadedDocument> {
    info!("Reading {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let size = bytes.len() as u64;

    // Invalid UTF-8 is replaced rather than rejected; the parser decides.
    let text = String::from_utf8_lossy(&bytes);
    let value = parse_document(&text)?;
    debug!("Parsed {} bytes from {}", size, path.display());

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(LoadedDocument {
        name,
        path: path.to_path_buf(),
        size,
        value: Arc::new(value),
    })
}
