use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Refuse to overwrite an existing output file unless `--force` was given.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "output file already exists (use --force to overwrite): {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(AppError::Export(format!(
            "output directory does not exist: {}",
            parent.display()
        )));
    }

    Ok(())
}
