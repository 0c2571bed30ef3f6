//! `collection-mover`: re-parent one collection.

use super::emit_json;
use crate::console::{OutputArgs, OutputFormat};
use catalog_repair::{CollectionMover, OpenMode, Reporter, Result, SqliteCatalog};
use clap::Parser;
use std::path::PathBuf;

/// Move a collection under a new parent collection.
#[derive(Debug, Parser)]
#[command(name = "collection-mover", version, about, long_about = None)]
pub struct CollectionMoverArgs {
    /// Path to the catalog file
    pub catalog_path: PathBuf,

    /// Name of the collection to move
    pub collection_name: String,

    /// Name of the new parent collection
    pub target_parent_name: String,

    /// Validate and report without changing the catalog
    #[arg(short, long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &CollectionMoverArgs, reporter: &dyn Reporter) -> Result<()> {
    let catalog = SqliteCatalog::open(&args.catalog_path, OpenMode::ReadWrite)?;
    let moved = CollectionMover::new(catalog, reporter).move_collection(
        &args.collection_name,
        &args.target_parent_name,
        args.dry_run,
    )?;

    if args.output.format == OutputFormat::Json {
        emit_json(serde_json::to_value(&moved))?;
    }
    Ok(())
}
