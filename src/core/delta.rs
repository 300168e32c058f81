// combining partial audits and sharing one audit between traversal threads
use std::sync::Mutex;

use crate::core::audit::{GalleryAudit, push_distinct};
use crate::core::types::{MatchOutcome, ResourceReference};
use crate::error::{AuditError, Result};

impl GalleryAudit {
    /// Append another audit's findings to this one.
    ///
    /// Entries from `other` land after the ones already here, so merging shards
    /// in traversal order gives the same lists as a single sequential run.
    pub fn merge(&mut self, other: GalleryAudit) -> Result<()> {
        if other.root_gallery != self.root_gallery {
            return Err(AuditError::RootGalleryMismatch {
                ours: self.root_gallery.clone(),
                theirs: other.root_gallery,
            });
        }

        for (resource, theirs) in other.used_correctly {
            let ours = self.used_correctly.entry(resource).or_default();
            for group in &theirs.groups {
                push_distinct(&mut ours.groups, group);
            }
            for page in &theirs.pages {
                push_distinct(&mut ours.pages, page);
            }
        }

        for (resource, theirs) in other.needs_to_move {
            match self.needs_to_move.get_mut(&resource) {
                //first path seen wins, same as classify
                Some(ours) => {
                    for group in &theirs.groups {
                        push_distinct(&mut ours.groups, group);
                    }
                    for page in &theirs.pages {
                        push_distinct(&mut ours.pages, page);
                    }
                }
                None => {
                    self.needs_to_move.insert(resource, theirs);
                }
            }
        }
        Ok(())
    }
}

/// A `GalleryAudit` behind one lock, for traversals that classify from
/// several threads. Every mutation is serialised, so first match wins and
/// first-seen ordering stay well defined per resource.
#[derive(Debug)]
pub struct SharedAudit {
    inner: Mutex<GalleryAudit>,
}

impl SharedAudit {
    pub fn new(audit: GalleryAudit) -> Self {
        SharedAudit {
            inner: Mutex::new(audit),
        }
    }

    pub fn classify(&self, reference: &ResourceReference) -> Result<MatchOutcome> {
        let mut audit = self.inner.lock().map_err(|_| AuditError::LockPoisoned)?;
        Ok(audit.classify(reference))
    }

    pub fn into_inner(self) -> Result<GalleryAudit> {
        self.inner.into_inner().map_err(|_| AuditError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Folder;

    fn mk_ref(resource: &str, gallery: &str, page: &str, groups: &[&str]) -> ResourceReference {
        ResourceReference {
            resource: resource.to_string(),
            path: format!("/Galleries/{gallery}/{resource}.pdf"),
            ancestry: vec![
                Folder::new(format!("g-{gallery}"), gallery),
                Folder::new("galleries", "Galleries"),
                Folder::new("root", "Root"),
            ],
            page_url: page.to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn merging_shards_matches_a_sequential_run() {
        let refs = vec![
            mk_ref("R1", "A", "/p1.htm", &["A"]),
            mk_ref("R1", "C", "/p2.htm", &["B"]),
            mk_ref("R2", "C", "/p2.htm", &["B"]),
            mk_ref("R1", "C", "/p3.htm", &["B"]),
            mk_ref("R1", "A", "/p4.htm", &["A"]),
        ];

        let mut sequential = GalleryAudit::new("root");
        for r in &refs {
            sequential.classify(r);
        }

        let mut left = GalleryAudit::new("root");
        let mut right = GalleryAudit::new("root");
        for r in &refs[..2] {
            left.classify(r);
        }
        for r in &refs[2..] {
            right.classify(r);
        }
        left.merge(right).unwrap();

        let expected = sequential.build_report(true, |l| l.to_string()).unwrap();
        let merged = left.build_report(true, |l| l.to_string()).unwrap();
        assert_eq!(merged, expected);
        assert_eq!(left.used_correctly("R1"), sequential.used_correctly("R1"));
        assert_eq!(left.needs_to_move("R2"), sequential.needs_to_move("R2"));
    }

    #[test]
    fn merge_rejects_different_roots() {
        let mut a = GalleryAudit::new("root-a");
        let b = GalleryAudit::new("root-b");

        let err = a.merge(b).unwrap_err();
        assert!(matches!(err, AuditError::RootGalleryMismatch { .. }));
    }

    #[test]
    fn shared_audit_serialises_classification_across_threads() {
        let shared = SharedAudit::new(GalleryAudit::new("root"));

        std::thread::scope(|s| {
            for t in 0..4 {
                let shared = &shared;
                s.spawn(move || {
                    for i in 0..25 {
                        let page = format!("/t{t}/p{i}.htm");
                        shared.classify(&mk_ref("R1", "C", &page, &["B"])).unwrap();
                        shared.classify(&mk_ref("R2", "A", &page, &["A"])).unwrap();
                    }
                });
            }
        });

        let audit = shared.into_inner().unwrap();
        let moving = audit.needs_to_move("R1").unwrap();
        assert_eq!(moving.groups, vec!["B"]);
        assert_eq!(moving.pages.len(), 100);
        assert_eq!(audit.used_correctly("R2").unwrap().pages.len(), 100);
    }
}
