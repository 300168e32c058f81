// serialisable picture of the content repository
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{ChannelId, CmsRole, FolderId, PublishState};
use crate::core::visit::PageInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    /// Id of the root resource gallery; galleries sit two levels below it.
    pub root_gallery: FolderId,
    #[serde(default)]
    pub folders: Vec<FolderRecord>,
    #[serde(default)]
    pub resources: Vec<ResourceRecord>,
    #[serde(default)]
    pub channels: Vec<ChannelRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub id: FolderId,
    pub name: String,
    #[serde(default)]
    pub parent: Option<FolderId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub guid: String,
    pub path: String,
    #[serde(default)]
    pub folder: Option<FolderId>,
    /// URL the resource is served from, if it differs from the GUID form.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub guid: ChannelId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub groups: Vec<GroupGrant>,
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupGrant {
    pub name: String,
    pub role: CmsRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub guid: String,
    #[serde(default)]
    pub state: PublishState,
    pub published_url: String,
    pub unpublished_url: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub placeholders: Vec<PlaceholderRecord>,
}

impl PageRecord {
    pub fn info(&self) -> PageInfo {
        PageInfo {
            guid: self.guid.clone(),
            state: self.state,
            published_url: self.published_url.clone(),
            unpublished_url: self.unpublished_url.clone(),
            expires_at: self.expires_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    Image,
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderRecord {
    pub name: String,
    pub kind: PlaceholderKind,
    //image placeholders
    #[serde(default)]
    pub src: Option<String>,
    //html placeholders
    #[serde(default)]
    pub content: String,
}
