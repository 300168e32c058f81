//! Reading snapshot and configuration files as JSON or TOON.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AuditError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toon,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("toon") => Ok(FileFormat::Toon),
            _ => Err(AuditError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

pub fn parse_structured<T: DeserializeOwned>(text: &str, format: FileFormat) -> Result<T> {
    match format {
        FileFormat::Json => Ok(serde_json::from_str(text)?),
        FileFormat::Toon => {
            //toon decodes into a JSON value first, then into T
            let value: serde_json::Value =
                toon_format::decode_default(text).map_err(AuditError::toon)?;
            Ok(serde_json::from_value(value)?)
        }
    }
}

pub fn read_structured<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = FileFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
    parse_structured(&text, format)
}
