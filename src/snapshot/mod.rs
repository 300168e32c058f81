//! File-backed content repository.
//!
//! A snapshot is an export of the CMS: the resource gallery folders, the
//! resources in them, and the channels with their editor groups, pages and
//! placeholders. `SnapshotRepository` walks it the way the live traversal
//! would and answers permission and resource lookups from it.

pub mod model;
pub mod repository;
pub mod tree;

pub use model::{
    ChannelRecord, FolderRecord, GroupGrant, PageRecord, PlaceholderKind, PlaceholderRecord,
    RepositorySnapshot, ResourceRecord,
};
pub use repository::{SnapshotRepository, extract_download_links};
pub use tree::FolderTree;
