//! Centralized configuration for catalog repairs.
//!
//! The catalog schema is owned by the photo application, so everything here
//! describes that external layout rather than anything this crate defines.

/// Catalog table and column layout.
pub struct CatalogConfig;

impl CatalogConfig {
    pub const ROOT_FOLDER_TABLE: &'static str = "AgLibraryRootFolder";
    pub const COLLECTION_TABLE: &'static str = "AgLibraryPublishedCollection";

    /// How long SQLite waits on a lock held by the photo application.
    pub const BUSY_TIMEOUT_MS: u32 = 5_000;

    /// Separator between genealogy segments.
    pub const GENEALOGY_SEPARATOR: char = '/';
}

/// Presentation constants shared by the reporters.
pub struct ReportConfig;

impl ReportConfig {
    pub const MISSING_MARKER: &'static str = " (MISSING)";
    /// Printed in place of a genealogy that has no segments.
    pub const ABSENT_GENEALOGY: &'static str = "None";
}
