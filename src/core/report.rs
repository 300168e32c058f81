// turning the accumulators into the report that gets rendered and delivered
use serde::{Deserialize, Serialize};

use crate::core::audit::GalleryAudit;
use crate::error::{AuditError, Result};

/// One resource to move: where it is, where it belongs, who uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub path: String,
    pub belongs_in: Vec<String>,
    pub used_on: Vec<String>,
}

/// Entries in ascending resource identity order. Empty means nothing to send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportEntry> + '_ {
        self.entries.iter()
    }
}

impl GalleryAudit {
    //distinct move targets + distinct groups already using the resource correctly
    pub fn required_gallery_count(&self, resource: &str) -> usize {
        let moving = self.needs_to_move.get(resource).map_or(0, |r| r.groups.len());
        let used = self.used_correctly.get(resource).map_or(0, |r| r.groups.len());
        moving + used
    }

    /// Build the report from everything classified so far.
    ///
    /// A resource is reported when it has exactly one gallery it should live
    /// in, or always when `include_conflicts` is set. Page URLs go through
    /// `correct_link` before they are stored in the entry.
    pub fn build_report<F>(&self, include_conflicts: bool, correct_link: F) -> Result<Report>
    where
        F: Fn(&str) -> String,
    {
        let mut entries = Vec::new();

        for (resource, moving) in &self.needs_to_move {
            if resource.trim().is_empty() {
                return Err(AuditError::MalformedIdentity(resource.clone()));
            }

            if self.required_gallery_count(resource) != 1 && !include_conflicts {
                continue;
            }

            let used = self.used_correctly.get(resource);

            let mut belongs_in = moving.groups.clone();
            let mut used_on: Vec<String> = moving
                .pages
                .iter()
                .map(|p| correct_link(p.as_str()))
                .collect();
            if let Some(used) = used {
                belongs_in.extend(used.groups.iter().cloned());
                used_on.extend(used.pages.iter().map(|p| correct_link(p.as_str())));
            }

            entries.push(ReportEntry {
                path: moving.path.clone(),
                belongs_in,
                used_on,
            });
        }

        Ok(Report { entries })
    }
}
