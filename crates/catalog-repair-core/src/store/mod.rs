//! Record store abstraction over the catalog tables.
//!
//! Components only see the narrow [`RecordStore`] interface: fetch rows by
//! name, and commit one [`CatalogChange`] atomically. The SQLite
//! implementation lives in [`sqlite`].

mod sqlite;
mod traits;

pub use sqlite::{OpenMode, SqliteCatalog};
pub use traits::{expect_single, CatalogChange, CollectionNode, RecordStore, RootFolder};
