// folder hierarchy of the resource galleries
use std::collections::HashMap;

use crate::core::types::{Folder, FolderId};
use crate::error::{AuditError, Result};
use crate::snapshot::model::FolderRecord;

/// Validated folder tree: ids are unique, every parent exists, no cycles.
#[derive(Debug, Clone, Default)]
pub struct FolderTree {
    folders: HashMap<FolderId, FolderRecord>,
}

impl FolderTree {
    pub fn build(records: &[FolderRecord]) -> Result<Self> {
        let mut folders = HashMap::with_capacity(records.len());
        for record in records {
            if folders.insert(record.id.clone(), record.clone()).is_some() {
                return Err(AuditError::DuplicateFolder(record.id.clone()));
            }
        }

        let tree = FolderTree { folders };
        for record in records {
            if let Some(parent) = &record.parent {
                if !tree.folders.contains_key(parent) {
                    return Err(AuditError::UnknownParent {
                        folder: record.id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
            //a walk longer than the tree itself can only mean a cycle
            tree.walk_up(&record.id)?;
        }
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn contains(&self, folder: &str) -> bool {
        self.folders.contains_key(folder)
    }

    /// Folders from `folder` itself up to the top of the tree.
    pub fn ancestry(&self, folder: &str) -> Result<Vec<Folder>> {
        Ok(self
            .walk_up(folder)?
            .into_iter()
            .map(|r| Folder::new(r.id.clone(), r.name.clone()))
            .collect())
    }

    fn walk_up(&self, folder: &str) -> Result<Vec<&FolderRecord>> {
        let mut chain = Vec::new();
        let mut current = self
            .folders
            .get(folder)
            .ok_or_else(|| AuditError::FolderNotFound(folder.to_string()))?;

        loop {
            chain.push(current);
            if chain.len() > self.folders.len() {
                return Err(AuditError::FolderCycle(folder.to_string()));
            }
            match current.parent.as_deref().and_then(|p| self.folders.get(p)) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        Ok(chain)
    }
}
