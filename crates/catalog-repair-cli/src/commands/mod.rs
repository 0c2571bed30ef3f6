//! Command implementations behind the two binaries.

pub mod collection_mover;
pub mod path_reconciler;

use catalog_repair::{CatalogError, Reporter, Result};
use std::error::Error;
use tracing::debug;

/// Print a JSON document on stdout.
fn emit_json(value: serde_json::Result<serde_json::Value>) -> Result<()> {
    let value = value.map_err(|e| CatalogError::Other(format!("Failed to encode JSON: {}", e)))?;
    let text = serde_json::to_string_pretty(&value)
        .map_err(|e| CatalogError::Other(format!("Failed to encode JSON: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// Report an operation failure once, at error severity.
pub fn report_failure(reporter: &dyn Reporter, err: &CatalogError) {
    reporter.error(&format!("Error: {}", err));
    if !err.is_user_error() {
        let mut source = err.source();
        while let Some(cause) = source {
            debug!("Caused by: {}", cause);
            source = cause.source();
        }
    }
}
