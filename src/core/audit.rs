// the caller-owned aggregator and its two accumulators
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::core::types::{FolderId, ResourceId};

/// Groups whose gallery a resource already sits in, and where that was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedCorrectly {
    pub groups: Vec<String>,
    pub pages: Vec<String>,
}

/// A resource that at least one page needs in another gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedsToMove {
    pub path: String,
    pub groups: Vec<String>,
    pub pages: Vec<String>,
}

/// Accumulates classification results for one audit run.
///
/// Records are created on the first reference to a resource and only ever
/// grow. `needs_to_move` is ordered by resource identity so the report can
/// iterate it directly.
#[derive(Debug, Clone)]
pub struct GalleryAudit {
    pub(crate) root_gallery: FolderId,
    pub(crate) used_correctly: HashMap<ResourceId, UsedCorrectly>,
    pub(crate) needs_to_move: BTreeMap<ResourceId, NeedsToMove>,
}

impl GalleryAudit {
    pub fn new(root_gallery: impl Into<FolderId>) -> Self {
        GalleryAudit {
            root_gallery: root_gallery.into(),
            used_correctly: HashMap::new(),
            needs_to_move: BTreeMap::new(),
        }
    }

    pub fn used_correctly(&self, resource: &str) -> Option<&UsedCorrectly> {
        self.used_correctly.get(resource)
    }

    pub fn needs_to_move(&self, resource: &str) -> Option<&NeedsToMove> {
        self.needs_to_move.get(resource)
    }

    pub fn is_empty(&self) -> bool {
        self.used_correctly.is_empty() && self.needs_to_move.is_empty()
    }

    pub(crate) fn record_correct(&mut self, resource: &str, group: &str, page_url: &str) {
        let record = self.used_correctly.entry(resource.to_string()).or_default();
        push_distinct(&mut record.groups, group);
        push_distinct(&mut record.pages, page_url);
    }

    pub(crate) fn record_move(&mut self, resource: &str, path: &str, group: &str, page_url: &str) {
        let record = self
            .needs_to_move
            .entry(resource.to_string())
            .or_insert_with(|| NeedsToMove {
                path: path.to_string(),
                ..NeedsToMove::default()
            });
        push_distinct(&mut record.groups, group);
        push_distinct(&mut record.pages, page_url);
    }
}

//append unless already present; returns whether the list grew
pub(crate) fn push_distinct(list: &mut Vec<String>, value: &str) -> bool {
    if list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}
