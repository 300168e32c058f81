//! Seams to the content repository: who edits a channel, and which resource a
//! URL points at.

pub mod permissions;
pub mod resolver;

pub use permissions::{PermissionLookup, distinct_editors};
pub use resolver::{ResolvedResource, ResourceResolver};
