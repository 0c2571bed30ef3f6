//! SQLite-backed record store over an existing catalog file.

use super::traits::{CatalogChange, CollectionNode, RecordStore, RootFolder};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::genealogy::Genealogy;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// How the catalog file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    ReadOnly,
    ReadWrite,
}

/// Handle on one catalog file.
///
/// The connection is closed when the handle is dropped, whichever way the
/// operation using it exits.
pub struct SqliteCatalog {
    path: PathBuf,
    mode: OpenMode,
    conn: Connection,
}

impl SqliteCatalog {
    /// Open an existing catalog. A missing file is an error; the catalog is
    /// never created.
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CatalogError::Io {
                message: format!("Catalog file '{}' does not exist", path.display()),
                path: Some(path.to_path_buf()),
                source: None,
            });
        }

        let access = match mode {
            OpenMode::ReadOnly => OpenFlags::SQLITE_OPEN_READ_ONLY,
            OpenMode::ReadWrite => OpenFlags::SQLITE_OPEN_READ_WRITE,
        };
        let conn = Connection::open_with_flags(
            path,
            access | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| CatalogError::Database {
            message: format!("Failed to open catalog {}: {}", path.display(), e),
            source: Some(e),
        })?;
        conn.busy_timeout(Duration::from_millis(u64::from(
            CatalogConfig::BUSY_TIMEOUT_MS,
        )))?;

        debug!("Opened catalog {} ({:?})", path.display(), mode);

        Ok(Self {
            path: path.to_path_buf(),
            mode,
            conn,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    fn root_folder_from_row(row: &Row<'_>) -> rusqlite::Result<RootFolder> {
        Ok(RootFolder {
            id: row.get(0)?,
            name: row.get(1)?,
            absolute_path: row.get(2)?,
            relative_path: row.get(3)?,
        })
    }

    fn collection_from_row(row: &Row<'_>) -> rusqlite::Result<CollectionNode> {
        let genealogy: Option<String> = row.get(4)?;
        Ok(CollectionNode {
            id: row.get(0)?,
            name: row.get(1)?,
            is_default: flag_value(row.get(2)?),
            parent_id: row.get(3)?,
            genealogy: Genealogy::parse(genealogy.as_deref()),
        })
    }
}

/// Interpret the catalog's loosely typed boolean column.
fn flag_value(value: Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Integer(n) => Some(n == 1),
        Value::Real(f) => Some(f == 1.0),
        Value::Text(s) => Some(s.trim() == "1"),
        Value::Blob(_) => Some(false),
    }
}

impl RecordStore for SqliteCatalog {
    fn root_folders(&self, name: Option<&str>) -> Result<Vec<RootFolder>> {
        let base = format!(
            "SELECT id_local, name, absolutePath, relativePathFromCatalog FROM {}",
            CatalogConfig::ROOT_FOLDER_TABLE
        );

        let mut entries = Vec::new();
        match name {
            Some(name) => {
                let mut stmt = self.conn.prepare(&format!("{} WHERE name = ?1", base))?;
                let rows = stmt.query_map(params![name], Self::root_folder_from_row)?;
                for row in rows {
                    entries.push(row?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(&base)?;
                let rows = stmt.query_map([], Self::root_folder_from_row)?;
                for row in rows {
                    entries.push(row?);
                }
            }
        }

        debug!("Fetched {} root folder(s) (filter: {:?})", entries.len(), name);
        Ok(entries)
    }

    fn collections_named(&self, name: &str) -> Result<Vec<CollectionNode>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id_local, name, isDefaultCollection, parent, genealogy
             FROM {} WHERE name = ?1",
            CatalogConfig::COLLECTION_TABLE
        ))?;

        let rows = stmt.query_map(params![name], Self::collection_from_row)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }

        debug!("Fetched {} collection(s) named '{}'", entries.len(), name);
        Ok(entries)
    }

    fn commit(&mut self, change: &CatalogChange) -> Result<()> {
        if self.mode == OpenMode::ReadOnly {
            return Err(CatalogError::Database {
                message: format!("Catalog {} is open read-only", self.path.display()),
                source: None,
            });
        }

        // Dropping the transaction without commit rolls it back.
        let tx = self.conn.transaction()?;
        let (id, affected) = match change {
            CatalogChange::RootFolderPath { id, absolute_path } => {
                let affected = tx.execute(
                    &format!(
                        "UPDATE {} SET absolutePath = ?1 WHERE id_local = ?2",
                        CatalogConfig::ROOT_FOLDER_TABLE
                    ),
                    params![absolute_path, id],
                )?;
                (*id, affected)
            }
            CatalogChange::CollectionPlacement {
                id,
                parent_id,
                genealogy,
            } => {
                let affected = tx.execute(
                    &format!(
                        "UPDATE {} SET parent = ?1, genealogy = ?2 WHERE id_local = ?3",
                        CatalogConfig::COLLECTION_TABLE
                    ),
                    params![parent_id, genealogy.to_string(), id],
                )?;
                (*id, affected)
            }
        };

        if affected != 1 {
            return Err(CatalogError::Database {
                message: format!("Expected to update 1 row for id {}, updated {}", id, affected),
                source: None,
            });
        }

        tx.commit()?;
        debug!("Committed {:?}", change);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_catalog() -> (PathBuf, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.lrcat");
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE AgLibraryRootFolder (
                id_local INTEGER PRIMARY KEY,
                absolutePath TEXT NOT NULL DEFAULT '',
                name TEXT NOT NULL DEFAULT '',
                relativePathFromCatalog TEXT
            );
            CREATE TABLE AgLibraryPublishedCollection (
                id_local INTEGER PRIMARY KEY,
                genealogy NOT NULL DEFAULT '',
                isDefaultCollection,
                name NOT NULL DEFAULT '',
                parent INTEGER
            );
            INSERT INTO AgLibraryRootFolder VALUES (1, '/mnt/a/', 'Library A', NULL);
            INSERT INTO AgLibraryRootFolder VALUES (2, '/mnt/b/', 'Library B', '../b/');
            INSERT INTO AgLibraryPublishedCollection VALUES (5, '/15', NULL, 'Albums', NULL);
            INSERT INTO AgLibraryPublishedCollection VALUES (12, '/15/212', 0, 'Trips', 5);
            INSERT INTO AgLibraryPublishedCollection VALUES (13, '/213', 1.0, 'Default', NULL);",
        )
        .unwrap();
        (db_path, temp_dir)
    }

    #[test]
    fn test_open_missing_catalog_fails_without_creating() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nope.lrcat");

        let result = SqliteCatalog::open(&db_path, OpenMode::ReadWrite);
        assert!(matches!(result, Err(CatalogError::Io { .. })));
        assert!(!db_path.exists());
    }

    #[test]
    fn test_root_folders_natural_order_and_filter() {
        let (db_path, _temp_dir) = create_test_catalog();
        let catalog = SqliteCatalog::open(&db_path, OpenMode::ReadOnly).unwrap();

        let all = catalog.root_folders(None).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Library A");
        assert_eq!(all[1].relative_path.as_deref(), Some("../b/"));

        let filtered = catalog.root_folders(Some("Library B")).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);

        assert!(catalog.root_folders(Some("Nope")).unwrap().is_empty());
    }

    #[test]
    fn test_collections_named_maps_flags_and_genealogy() {
        let (db_path, _temp_dir) = create_test_catalog();
        let catalog = SqliteCatalog::open(&db_path, OpenMode::ReadOnly).unwrap();

        let trips = catalog.collections_named("Trips").unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].parent_id, Some(5));
        assert_eq!(trips[0].is_default, Some(false));
        assert_eq!(trips[0].genealogy.to_string(), "/15/212");

        let albums = catalog.collections_named("Albums").unwrap();
        assert_eq!(albums[0].is_default, None);

        let default = catalog.collections_named("Default").unwrap();
        assert!(default[0].is_protected());
    }

    #[test]
    fn test_commit_placement_updates_both_columns() {
        let (db_path, _temp_dir) = create_test_catalog();
        let mut catalog = SqliteCatalog::open(&db_path, OpenMode::ReadWrite).unwrap();

        catalog
            .commit(&CatalogChange::CollectionPlacement {
                id: 12,
                parent_id: 13,
                genealogy: Genealogy::parse(Some("/213/212")),
            })
            .unwrap();

        let trips = catalog.collections_named("Trips").unwrap();
        assert_eq!(trips[0].parent_id, Some(13));
        assert_eq!(trips[0].genealogy.to_string(), "/213/212");
    }

    #[test]
    fn test_commit_missing_row_rolls_back() {
        let (db_path, _temp_dir) = create_test_catalog();
        let mut catalog = SqliteCatalog::open(&db_path, OpenMode::ReadWrite).unwrap();

        let result = catalog.commit(&CatalogChange::RootFolderPath {
            id: 99,
            absolute_path: "/mnt/x/".into(),
        });
        assert!(matches!(result, Err(CatalogError::Database { .. })));
    }

    #[test]
    fn test_commit_refused_on_read_only_handle() {
        let (db_path, _temp_dir) = create_test_catalog();
        let mut catalog = SqliteCatalog::open(&db_path, OpenMode::ReadOnly).unwrap();

        let result = catalog.commit(&CatalogChange::RootFolderPath {
            id: 1,
            absolute_path: "/mnt/x/".into(),
        });
        assert!(result.is_err());

        let folder = catalog.root_folders(Some("Library A")).unwrap();
        assert_eq!(folder[0].absolute_path, "/mnt/a/");
    }
}
