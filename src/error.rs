//! Error types for the gallery audit.
//!
//! Anything that reaches the caller as an `AuditError` aborts the run. A
//! reference that simply fails the gallery match is not an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::types::{ChannelId, FolderId};

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("resource resolver failed for {url}: {message}")]
    Resolver { url: String, message: String },

    #[error("permission lookup failed for channel {channel}: {message}")]
    PermissionLookup { channel: ChannelId, message: String },

    #[error("malformed resource identity {0:?}")]
    MalformedIdentity(String),

    #[error("audits rooted at {ours} and {theirs} cannot be merged")]
    RootGalleryMismatch { ours: FolderId, theirs: FolderId },

    // snapshot consistency
    #[error("duplicate resource guid: {0}")]
    DuplicateResource(String),

    #[error("unknown channel: {0}")]
    UnknownChannel(ChannelId),

    #[error("folder not found: {0}")]
    FolderNotFound(FolderId),

    #[error("duplicate folder id: {0}")]
    DuplicateFolder(FolderId),

    #[error("folder {folder} references unknown parent {parent}")]
    UnknownParent { folder: FolderId, parent: FolderId },

    #[error("folder {0} is part of a parent cycle")]
    FolderCycle(FolderId),

    // loading snapshots and configuration
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOON error: {0}")]
    Toon(String),

    #[error("unsupported file format for {0:?} (expected .json or .toon)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("shared audit lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, AuditError>;

impl AuditError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuditError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn toon(err: impl std::fmt::Display) -> Self {
        AuditError::Toon(err.to_string())
    }
}
