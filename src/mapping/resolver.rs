// raw URL -> resource handle
use crate::core::types::{Folder, ResourceId, ResourceReference};
use crate::error::Result;

/// What a resolver knows about a resource behind a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub id: ResourceId,
    pub path: String,
    /// Parent chain, nearest folder first.
    pub ancestry: Vec<Folder>,
}

impl ResolvedResource {
    pub fn into_reference(self, page_url: &str, groups: &[String]) -> ResourceReference {
        ResourceReference {
            resource: self.id,
            path: self.path,
            ancestry: self.ancestry,
            page_url: page_url.to_string(),
            groups: groups.to_vec(),
        }
    }
}

/// Resolves image sources and download links to tracked resources.
///
/// `Ok(None)` is the normal answer for URLs that are not repository
/// resources (external links, pages). Errors abort the audit.
pub trait ResourceResolver {
    fn resolve(&self, url: &str) -> Result<Option<ResolvedResource>>;
}

impl<F> ResourceResolver for F
where
    F: Fn(&str) -> Result<Option<ResolvedResource>>,
{
    fn resolve(&self, url: &str) -> Result<Option<ResolvedResource>> {
        self(url)
    }
}
