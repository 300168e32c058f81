// a repository snapshot acting as traversal, permission lookup and resolver
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::core::types::{ChannelId, Folder};
use crate::core::visit::{PlaceholderContent, PlaceholderVisit};
use crate::error::{AuditError, Result};
use crate::formats::read_structured;
use crate::mapping::{PermissionLookup, ResolvedResource, ResourceResolver, distinct_editors};
use crate::snapshot::model::{PlaceholderKind, RepositorySnapshot};
use crate::snapshot::tree::FolderTree;

//links to resources inside html placeholder content
static DOWNLOAD_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:href|src)\s*=\s*["'](?P<url>[^"']*/NR/rdonlyres/[^"']+)["']"#)
        .expect("download link regex must compile")
});

static RESOURCE_GUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)/NR/rdonlyres/\{?(?P<guid>[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12})\}?/",
    )
    .expect("resource guid regex must compile")
});

pub fn extract_download_links(content: &str) -> Vec<String> {
    DOWNLOAD_LINK
        .captures_iter(content)
        .filter_map(|c| c.name("url"))
        .map(|m| m.as_str().to_string())
        .collect()
}

//"{3f2504e0-...}" and "3F2504E0-..." name the same resource
fn normalize_guid(guid: &str) -> String {
    guid.trim_matches(|c| c == '{' || c == '}').to_uppercase()
}

#[derive(Debug)]
pub struct SnapshotRepository {
    snapshot: RepositorySnapshot,
    tree: FolderTree,
    by_url: HashMap<String, usize>,
    by_guid: HashMap<String, usize>,
    editors: HashMap<ChannelId, Vec<String>>,
}

impl SnapshotRepository {
    pub fn new(snapshot: RepositorySnapshot) -> Result<Self> {
        let tree = FolderTree::build(&snapshot.folders)?;
        if !tree.contains(&snapshot.root_gallery) {
            return Err(AuditError::FolderNotFound(snapshot.root_gallery.clone()));
        }

        let mut by_url = HashMap::new();
        let mut by_guid = HashMap::new();
        for (idx, resource) in snapshot.resources.iter().enumerate() {
            if by_guid.insert(normalize_guid(&resource.guid), idx).is_some() {
                return Err(AuditError::DuplicateResource(resource.guid.clone()));
            }
            if let Some(folder) = &resource.folder {
                if !tree.contains(folder) {
                    return Err(AuditError::FolderNotFound(folder.clone()));
                }
            }
            if let Some(url) = &resource.url {
                by_url.insert(url.clone(), idx);
            }
        }

        let editors = snapshot
            .channels
            .iter()
            .map(|c| {
                let grants = c.groups.iter().map(|g| (g.name.as_str(), g.role));
                (c.guid.clone(), distinct_editors(grants))
            })
            .collect();

        debug!(
            folders = tree.len(),
            resources = snapshot.resources.len(),
            channels = snapshot.channels.len(),
            "snapshot loaded"
        );

        Ok(SnapshotRepository {
            snapshot,
            tree,
            by_url,
            by_guid,
            editors,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let snapshot: RepositorySnapshot = read_structured(path)?;
        Self::new(snapshot)
    }

    pub fn root_gallery(&self) -> &str {
        &self.snapshot.root_gallery
    }

    /// Every placeholder that can reference a resource, channel by channel,
    /// page by page, in snapshot order.
    pub fn visits(&self) -> impl Iterator<Item = Result<PlaceholderVisit>> + '_ {
        self.snapshot.channels.iter().flat_map(|channel| {
            channel.pages.iter().flat_map(move |page| {
                let info = page.info();
                page.placeholders.iter().filter_map(move |ph| {
                    let content = match ph.kind {
                        PlaceholderKind::Image => PlaceholderContent::Image {
                            src: ph.src.clone()?,
                        },
                        PlaceholderKind::Html => PlaceholderContent::Text {
                            links: extract_download_links(&ph.content),
                        },
                    };
                    Some(Ok(PlaceholderVisit {
                        page: info.clone(),
                        channel: channel.guid.clone(),
                        placeholder: ph.name.clone(),
                        content,
                    }))
                })
            })
        })
    }

    fn find_resource(&self, url: &str) -> Option<usize> {
        if let Some(&idx) = self.by_url.get(url) {
            return Some(idx);
        }
        let guid = RESOURCE_GUID.captures(url)?.name("guid")?.as_str();
        self.by_guid.get(&normalize_guid(guid)).copied()
    }
}

impl PermissionLookup for SnapshotRepository {
    fn editor_groups(&self, channel: &str) -> Result<Vec<String>> {
        self.editors
            .get(channel)
            .cloned()
            .ok_or_else(|| AuditError::UnknownChannel(channel.to_string()))
    }
}

impl ResourceResolver for SnapshotRepository {
    fn resolve(&self, url: &str) -> Result<Option<ResolvedResource>> {
        let Some(idx) = self.find_resource(url) else {
            return Ok(None);
        };
        let resource = &self.snapshot.resources[idx];

        let ancestry: Vec<Folder> = match &resource.folder {
            Some(folder) => self.tree.ancestry(folder)?,
            None => Vec::new(),
        };

        Ok(Some(ResolvedResource {
            id: resource.guid.clone(),
            path: resource.path.clone(),
            ancestry,
        }))
    }
}
