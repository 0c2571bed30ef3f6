//! `path-reconciler`: list root folders and repair their absolute paths.

use super::emit_json;
use crate::console::{OutputArgs, OutputFormat};
use catalog_repair::{CatalogError, OpenMode, PathReconciler, Reporter, Result, SqliteCatalog};
use clap::Parser;
use std::path::PathBuf;

/// List root folders of a catalog, or point one at a new location.
#[derive(Debug, Parser)]
#[command(name = "path-reconciler", version, about, long_about = None)]
pub struct PathReconcilerArgs {
    /// Path to the catalog file
    pub catalog_path: PathBuf,

    /// Name of the root folder to inspect or update
    pub name: Option<String>,

    /// New absolute path for the root folder
    pub new_path: Option<String>,

    /// List only root folders whose path is missing
    #[arg(short, long)]
    pub missing_only: bool,

    /// Validate and report without changing the catalog
    #[arg(short, long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl PathReconcilerArgs {
    /// Argument checks that need no catalog access.
    pub fn validate(&self) -> Result<()> {
        if !self.catalog_path.is_file() {
            return Err(CatalogError::Io {
                message: format!(
                    "Catalog file '{}' does not exist",
                    self.catalog_path.display()
                ),
                path: Some(self.catalog_path.clone()),
                source: None,
            });
        }

        if self.new_path.is_some() && self.missing_only {
            return Err(CatalogError::Validation {
                field: "missing_only".to_string(),
                message: "cannot be combined with a new path".to_string(),
            });
        }

        Ok(())
    }
}

pub fn run(args: &PathReconcilerArgs, reporter: &dyn Reporter) -> Result<()> {
    args.validate()?;

    if let (Some(name), Some(new_path)) = (&args.name, &args.new_path) {
        let catalog = SqliteCatalog::open(&args.catalog_path, OpenMode::ReadWrite)?;
        let change = PathReconciler::new(catalog, reporter).rename(name, new_path, args.dry_run)?;
        if args.output.format == OutputFormat::Json {
            emit_json(serde_json::to_value(&change))?;
        }
        return Ok(());
    }

    let catalog = SqliteCatalog::open(&args.catalog_path, OpenMode::ReadOnly)?;
    let listing =
        PathReconciler::new(catalog, reporter).list(args.name.as_deref(), args.missing_only)?;
    match args.output.format {
        OutputFormat::Text => listing.report_to(reporter),
        OutputFormat::Json => emit_json(serde_json::to_value(&listing))?,
    }
    Ok(())
}
