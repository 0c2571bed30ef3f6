//! Collection relocation within the materialized-path tree.
//!
//! Only the named node is re-parented. Its descendants keep their stored
//! genealogies, and no check is made that the target parent lies outside the
//! moved node's own subtree: moving a node beneath one of its descendants
//! goes through and leaves a cycle in the tree.

use crate::error::{CatalogError, RecordKind, Result};
use crate::genealogy::Genealogy;
use crate::report::Reporter;
use crate::store::{expect_single, CatalogChange, RecordStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of a collection move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMove {
    pub collection_id: i64,
    pub collection_name: String,
    pub target_name: String,
    pub old_parent_id: Option<i64>,
    pub new_parent_id: i64,
    /// Genealogy above the node before the move; empty for top-level nodes.
    pub previous_parent_genealogy: Genealogy,
    pub parent_genealogy: Genealogy,
    pub new_genealogy: Genealogy,
    /// False for dry runs.
    pub applied: bool,
}

/// Re-parents collections in one catalog.
pub struct CollectionMover<'a, S: RecordStore> {
    store: S,
    reporter: &'a dyn Reporter,
}

impl<'a, S: RecordStore> CollectionMover<'a, S> {
    pub fn new(store: S, reporter: &'a dyn Reporter) -> Self {
        Self { store, reporter }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Move the collection named `collection_name` under the collection
    /// named `target_parent_name`.
    ///
    /// Both names must resolve to exactly one row, and default collections
    /// are refused. The parent id and genealogy are written together in one
    /// commit, or not at all with `dry_run`.
    pub fn move_collection(
        &mut self,
        collection_name: &str,
        target_parent_name: &str,
        dry_run: bool,
    ) -> Result<CollectionMove> {
        let node = expect_single(
            self.store.collections_named(collection_name)?,
            RecordKind::Collection,
            collection_name,
        )?;

        if node.is_protected() {
            return Err(CatalogError::ProtectedNode {
                name: node.name.clone(),
            });
        }

        let parent = expect_single(
            self.store.collections_named(target_parent_name)?,
            RecordKind::ParentCollection,
            target_parent_name,
        )?;

        let new_genealogy = Genealogy::relocated_under(&node.genealogy, &parent.genealogy);
        let previous_parent_genealogy = node.genealogy.parent_prefix();

        debug!(
            "Collection {} genealogy '{}' -> '{}'",
            node.id, node.genealogy, new_genealogy
        );

        self.reporter.info(&format!(
            "Moving '{}' under '{}'",
            node.name, parent.name
        ));
        self.reporter.info(&format!(
            "Previous parent genealogy: {}",
            previous_parent_genealogy.display_or_absent()
        ));
        self.reporter.info(&format!(
            "New parent genealogy: {}",
            parent.genealogy.display_or_absent()
        ));
        self.reporter
            .info(&format!("Final genealogy: {}", new_genealogy.display_or_absent()));

        if dry_run {
            self.reporter.info("Dry run: no changes made.");
        } else {
            self.store.commit(&CatalogChange::CollectionPlacement {
                id: node.id,
                parent_id: parent.id,
                genealogy: new_genealogy.clone(),
            })?;
            self.reporter.info(&format!(
                "Collection '{}' moved under '{}'.",
                node.name, parent.name
            ));
        }

        Ok(CollectionMove {
            collection_id: node.id,
            collection_name: node.name,
            target_name: parent.name,
            old_parent_id: node.parent_id,
            new_parent_id: parent.id,
            previous_parent_genealogy,
            parent_genealogy: parent.genealogy,
            new_genealogy,
            applied: !dry_run,
        })
    }
}
