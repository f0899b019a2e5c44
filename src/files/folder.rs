//! Image folder initialization.

use std::io;
use std::path::Path;

/// Make sure `folder` exists, creating missing parents.
///
/// Succeeds without touching anything when the folder is already there.
/// Errors are returned as-is; there is no retry.
pub async fn ensure_folder(folder: &Path) -> io::Result<()> {
    tokio::fs::create_dir_all(folder).await?;
    tracing::debug!(folder = %folder.display(), "image folder ready");
    Ok(())
}
