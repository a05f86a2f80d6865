//! Output directory reset

use std::path::Path;

use crate::Result;

/// Delete `output_dir` and everything under it, then recreate it empty
///
/// Removal errors are ignored: a missing directory is the expected case and
/// anything left behind surfaces later when a clone targets it.
pub fn reset_workspace(output_dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(output_dir) {
        Ok(()) => tracing::debug!(dir = %output_dir.display(), "Removed previous output"),
        Err(e) => tracing::debug!(dir = %output_dir.display(), error = %e, "Nothing removed"),
    }

    std::fs::create_dir_all(output_dir)?;
    Ok(())
}
