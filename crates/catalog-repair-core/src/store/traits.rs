//! Record store trait and row types.

use crate::error::{CatalogError, RecordKind, Result};
use crate::genealogy::Genealogy;
use serde::{Deserialize, Serialize};

/// A top-level storage location referenced by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFolder {
    pub id: i64,
    pub name: String,
    pub absolute_path: String,
    /// Informational only. A non-empty value may go stale when the
    /// absolute path is rewritten.
    pub relative_path: Option<String>,
}

impl RootFolder {
    pub fn has_relative_path(&self) -> bool {
        self.relative_path
            .as_deref()
            .is_some_and(|p| !p.is_empty())
    }
}

/// A node in the collection tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNode {
    pub id: i64,
    pub name: String,
    pub is_default: Option<bool>,
    pub parent_id: Option<i64>,
    pub genealogy: Genealogy,
}

impl CollectionNode {
    /// Default collections are managed by the application and never move.
    pub fn is_protected(&self) -> bool {
        self.is_default == Some(true)
    }
}

/// A single all-or-nothing mutation of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    RootFolderPath {
        id: i64,
        absolute_path: String,
    },
    CollectionPlacement {
        id: i64,
        parent_id: i64,
        genealogy: Genealogy,
    },
}

/// Query and update access to the catalog tables.
///
/// Reads never mutate. `commit` applies one change atomically: either every
/// statement it implies lands, or none does.
pub trait RecordStore {
    /// Root folders in the store's natural order, optionally filtered by
    /// exact name.
    fn root_folders(&self, name: Option<&str>) -> Result<Vec<RootFolder>>;

    /// Collections whose name matches exactly.
    fn collections_named(&self, name: &str) -> Result<Vec<CollectionNode>>;

    fn commit(&mut self, change: &CatalogChange) -> Result<()>;
}

/// Reduce a name lookup to its single row.
///
/// Zero rows is `NotFound`, more than one is `Ambiguous`; duplicates are
/// never resolved by picking one.
pub fn expect_single<T>(mut rows: Vec<T>, kind: RecordKind, name: &str) -> Result<T> {
    match rows.len() {
        0 => Err(CatalogError::NotFound {
            kind,
            name: name.to_string(),
        }),
        1 => Ok(rows.remove(0)),
        count => Err(CatalogError::Ambiguous {
            kind,
            name: name.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_single_outcomes() {
        let none: Vec<i32> = Vec::new();
        assert!(matches!(
            expect_single(none, RecordKind::RootFolder, "A"),
            Err(CatalogError::NotFound { .. })
        ));

        assert_eq!(expect_single(vec![7], RecordKind::RootFolder, "A").unwrap(), 7);

        match expect_single(vec![1, 2, 3], RecordKind::Collection, "Dup") {
            Err(CatalogError::Ambiguous { count, name, .. }) => {
                assert_eq!(count, 3);
                assert_eq!(name, "Dup");
            }
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_relative_path_signal() {
        let mut folder = RootFolder {
            id: 1,
            name: "A".into(),
            absolute_path: "/mnt/a/".into(),
            relative_path: None,
        };
        assert!(!folder.has_relative_path());
        folder.relative_path = Some(String::new());
        assert!(!folder.has_relative_path());
        folder.relative_path = Some("../Photos/".into());
        assert!(folder.has_relative_path());
    }

    #[test]
    fn test_only_true_default_flag_protects() {
        let mut node = CollectionNode {
            id: 1,
            name: "Trips".into(),
            is_default: None,
            parent_id: None,
            genealogy: Genealogy::default(),
        };
        assert!(!node.is_protected());
        node.is_default = Some(false);
        assert!(!node.is_protected());
        node.is_default = Some(true);
        assert!(node.is_protected());
    }
}
