//! Catalog Repair - consistency repairs for SQLite photo catalogs.
//!
//! Two independent operations run against an existing catalog file:
//!
//! - [`PathReconciler`] lists root folders, flags those whose absolute path
//!   is missing on disk, and points a single root folder at a new path.
//! - [`CollectionMover`] re-parents one collection, rewriting its
//!   materialized-path genealogy.
//!
//! Both read and write through a [`RecordStore`] and describe their work to
//! an injected [`Reporter`].
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_repair::{MemoryReporter, OpenMode, PathReconciler, SqliteCatalog};
//!
//! let catalog = SqliteCatalog::open("Photos.lrcat", OpenMode::ReadOnly)?;
//! let reporter = MemoryReporter::new();
//! let listing = PathReconciler::new(catalog, &reporter).list(None, true)?;
//! println!("{} of {} root folders missing", listing.missing, listing.total);
//! ```

pub mod config;
pub mod error;
pub mod genealogy;
pub mod mover;
pub mod reconciler;
pub mod report;
pub mod store;

#[cfg(test)]
mod test_support;

pub use error::{CatalogError, RecordKind, Result};
pub use genealogy::Genealogy;
pub use mover::{CollectionMove, CollectionMover};
pub use reconciler::{PathChange, PathReconciler, RootFolderListing, RootFolderStatus};
pub use report::{MemoryReporter, Reporter, Severity};
pub use store::{
    expect_single, CatalogChange, CollectionNode, OpenMode, RecordStore, RootFolder,
    SqliteCatalog,
};
