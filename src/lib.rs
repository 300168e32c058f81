//! Finds CMS resources stored outside the gallery of the group that edits the
//! pages using them.
//!
//! Authors can only save a page when every resource on it lives in their own
//! gallery. The audit walks the content once, classifies every resource
//! reference against the editor groups of its page, and reports the resources
//! that need to move.

pub mod config;
pub mod core;
pub mod error;
pub mod formats;
pub mod mapping;
pub mod pipeline;
pub mod render;
pub mod snapshot;

pub use crate::config::AuditConfig;
pub use crate::core::{
    GalleryAudit, MatchOutcome, Report, ReportEntry, ResourceReference, SharedAudit,
};
pub use crate::error::{AuditError, Result};
pub use crate::pipeline::{AuditOutcome, run_audit};
pub use crate::snapshot::SnapshotRepository;
