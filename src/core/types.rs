// identifiers and value types shared by the classifier and the adapters
use serde::{Deserialize, Serialize};

pub type ResourceId = String;
pub type FolderId = String;
pub type ChannelId = String;

/// One step on the way from a resource up to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
}

impl Folder {
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        Folder {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single resolved reference from a page to a resource.
///
/// `ancestry[0]` is the folder holding the resource, the last element is the
/// top of the tree. `groups` are the editor groups of the referencing
/// channel in the order the permission lookup returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    pub resource: ResourceId,
    pub path: String,
    pub ancestry: Vec<Folder>,
    pub page_url: String,
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Correct,
    NeedsMove,
}

impl MatchOutcome {
    pub fn is_violation(&self) -> bool {
        matches!(self, MatchOutcome::NeedsMove)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishState {
    Published,
    #[default]
    Unpublished,
}

/// Roles a group can hold on a channel. Only editors own pages for the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CmsRole {
    Editor,
    Moderator,
    Author,
    Subscriber,
}

//group and gallery names compare on this key, never on the raw strings
pub fn fold_name(name: &str) -> String {
    name.to_uppercase()
}

pub fn names_match(a: &str, b: &str) -> bool {
    fold_name(a) == fold_name(b)
}
