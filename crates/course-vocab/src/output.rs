//! Writing the vocabulary file

use crate::error::Result;
use crate::types::CatalogRecord;
use std::path::Path;
use tracing::debug;

/// Serialize `records` as indented UTF-8 JSON to `path`, creating the parent
/// directory if needed. Non-ASCII names are written as-is.
pub async fn write_catalog(path: &Path, records: &[CatalogRecord]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }

    let json = serde_json::to_vec_pretty(records)?;
    tokio::fs::write(path, &json).await?;

    debug!(path = %path.display(), bytes = json.len(), "Wrote catalog");
    Ok(())
}
