//! Root folder path reconciliation.
//!
//! Lists root folders with a live existence probe of each recorded absolute
//! path, and rewrites the path of a single root folder. Missing paths are
//! only flagged: a catalog may legitimately point at an offline drive. The
//! target of a rewrite, however, must exist.

use crate::config::ReportConfig;
use crate::error::{CatalogError, RecordKind, Result};
use crate::report::Reporter;
use crate::store::{expect_single, CatalogChange, RecordStore, RootFolder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A root folder together with whether its absolute path exists right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFolderStatus {
    pub name: String,
    pub absolute_path: String,
    pub relative_path: Option<String>,
    pub exists: bool,
}

impl RootFolderStatus {
    fn probe(folder: RootFolder) -> Self {
        let exists = Path::new(&folder.absolute_path).exists();
        Self {
            name: folder.name,
            absolute_path: folder.absolute_path,
            relative_path: folder.relative_path,
            exists,
        }
    }

    /// ` - name: "path" (MISSING), "relative"`
    pub fn display_line(&self) -> String {
        let missing = if self.exists {
            ""
        } else {
            ReportConfig::MISSING_MARKER
        };
        let relative = match self.relative_path.as_deref() {
            Some(rel) if !rel.is_empty() => format!(", \"{}\"", rel),
            _ => String::new(),
        };
        format!(
            " - {}: \"{}\"{}{}",
            self.name, self.absolute_path, missing, relative
        )
    }
}

/// Result of a listing.
///
/// `total` and `missing` count every row that matched the name filter, even
/// rows left out of `entries` by `missing_only`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFolderListing {
    pub filter: Option<String>,
    pub entries: Vec<RootFolderStatus>,
    pub total: usize,
    pub missing: usize,
}

impl RootFolderListing {
    /// Write the listing as header, one line per entry, and a summary.
    pub fn report_to(&self, reporter: &dyn Reporter) {
        match &self.filter {
            Some(name) => reporter.info(&format!("Root folders matching '{}':", name)),
            None => reporter.info("Root folders and their paths:"),
        }
        for entry in &self.entries {
            reporter.info(&entry.display_line());
        }
        reporter.info(&format!(
            "{} of {} root folder(s) missing.",
            self.missing, self.total
        ));
    }
}

/// Outcome of a root folder path rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathChange {
    pub id: i64,
    pub name: String,
    pub old_path: String,
    pub new_path: String,
    /// False for dry runs.
    pub applied: bool,
}

/// Lists and repairs root folder paths in one catalog.
pub struct PathReconciler<'a, S: RecordStore> {
    store: S,
    reporter: &'a dyn Reporter,
}

impl<'a, S: RecordStore> PathReconciler<'a, S> {
    pub fn new(store: S, reporter: &'a dyn Reporter) -> Self {
        Self { store, reporter }
    }

    /// Give the store back, closing nothing.
    pub fn into_store(self) -> S {
        self.store
    }

    /// List root folders, optionally by exact name, optionally only those
    /// whose path is missing.
    ///
    /// An unfiltered listing of an empty catalog is an empty result; a name
    /// filter that matches nothing is `NotFound`.
    pub fn list(&self, filter: Option<&str>, missing_only: bool) -> Result<RootFolderListing> {
        let folders = self.store.root_folders(filter)?;
        if let (Some(name), true) = (filter, folders.is_empty()) {
            return Err(CatalogError::NotFound {
                kind: RecordKind::RootFolder,
                name: name.to_string(),
            });
        }

        let total = folders.len();
        let mut missing = 0;
        let mut entries = Vec::with_capacity(total);
        for folder in folders {
            let status = RootFolderStatus::probe(folder);
            if !status.exists {
                missing += 1;
            } else if missing_only {
                continue;
            }
            entries.push(status);
        }

        debug!(
            "Listed {} root folder(s), {} missing, {} shown",
            total,
            missing,
            entries.len()
        );

        Ok(RootFolderListing {
            filter: filter.map(str::to_string),
            entries,
            total,
            missing,
        })
    }

    /// Point the uniquely named root folder at `new_path`.
    ///
    /// With `dry_run` every check and report happens but nothing is written.
    pub fn rename(&mut self, name: &str, new_path: &str, dry_run: bool) -> Result<PathChange> {
        if !Path::new(new_path).exists() {
            return Err(CatalogError::InvalidTarget {
                path: new_path.into(),
            });
        }

        let folders = self.store.root_folders(Some(name))?;
        let folder = expect_single(folders, RecordKind::RootFolder, name)?;

        self.reporter.info(&format!(
            "Changing absolute path for \"{}\": \"{}\" -> \"{}\"",
            folder.name, folder.absolute_path, new_path
        ));

        if folder.has_relative_path() {
            self.reporter.warn(&format!(
                "Root folder \"{}\" also stores relative path \"{}\", which may now be stale.",
                folder.name,
                folder.relative_path.as_deref().unwrap_or_default()
            ));
        }

        if dry_run {
            self.reporter.info("Dry run: no changes made.");
        } else {
            self.store.commit(&CatalogChange::RootFolderPath {
                id: folder.id,
                absolute_path: new_path.to_string(),
            })?;
            self.reporter.info("Changes applied.");
        }

        Ok(PathChange {
            id: folder.id,
            name: folder.name,
            old_path: folder.absolute_path,
            new_path: new_path.to_string(),
            applied: !dry_run,
        })
    }
}
