//! In-memory record store for unit tests.

use crate::error::{CatalogError, Result};
use crate::store::{CatalogChange, CollectionNode, RecordStore, RootFolder};

/// Store that applies commits to in-memory rows and remembers each one.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    root_folders: Vec<RootFolder>,
    collections: Vec<CollectionNode>,
    commits: Vec<CatalogChange>,
}

impl RecordingStore {
    pub fn with_root_folders(root_folders: Vec<RootFolder>) -> Self {
        Self {
            root_folders,
            ..Self::default()
        }
    }

    pub fn with_collections(collections: Vec<CollectionNode>) -> Self {
        Self {
            collections,
            ..Self::default()
        }
    }

    pub fn push_collection(&mut self, node: CollectionNode) {
        self.collections.push(node);
    }

    pub fn collection(&self, id: i64) -> Option<&CollectionNode> {
        self.collections.iter().find(|c| c.id == id)
    }

    pub fn commits(&self) -> Vec<CatalogChange> {
        self.commits.clone()
    }
}

impl RecordStore for RecordingStore {
    fn root_folders(&self, name: Option<&str>) -> Result<Vec<RootFolder>> {
        Ok(self
            .root_folders
            .iter()
            .filter(|f| name.map_or(true, |n| f.name == n))
            .cloned()
            .collect())
    }

    fn collections_named(&self, name: &str) -> Result<Vec<CollectionNode>> {
        Ok(self
            .collections
            .iter()
            .filter(|c| c.name == name)
            .cloned()
            .collect())
    }

    fn commit(&mut self, change: &CatalogChange) -> Result<()> {
        let found = match change {
            CatalogChange::RootFolderPath { id, absolute_path } => self
                .root_folders
                .iter_mut()
                .find(|f| f.id == *id)
                .map(|f| f.absolute_path = absolute_path.clone()),
            CatalogChange::CollectionPlacement {
                id,
                parent_id,
                genealogy,
            } => self.collections.iter_mut().find(|c| c.id == *id).map(|c| {
                c.parent_id = Some(*parent_id);
                c.genealogy = genealogy.clone();
            }),
        };

        if found.is_none() {
            return Err(CatalogError::Other(format!("no row for {:?}", change)));
        }
        self.commits.push(change.clone());
        Ok(())
    }
}
