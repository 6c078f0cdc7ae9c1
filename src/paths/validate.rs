use std::path::Path;

use super::local::normalize_lexically;
use super::{LocalPathError, LocalPathReport};

/// Check that `path` can serve as a download directory.
///
/// The path must be absolute. An existing path must be a writable directory;
/// a missing one must have a writable parent directory so it can be created
/// later. The filesystem is only inspected.
pub fn validate_local_path(path: &str) -> Result<(), LocalPathError> {
    if path.is_empty() {
        return Err(LocalPathError::Empty);
    }

    let raw = Path::new(path);
    // un chemin relatif dépendrait du cwd du processus
    if !raw.is_absolute() {
        return Err(LocalPathError::Relative(raw.to_path_buf()));
    }

    let abs_path = normalize_lexically(raw);

    if !abs_path.exists() {
        let parent = abs_path.parent().unwrap_or(&abs_path);
        if !parent.exists() {
            return Err(LocalPathError::ParentMissing(parent.to_path_buf()));
        }
        if !parent.is_dir() {
            return Err(LocalPathError::ParentNotDirectory(parent.to_path_buf()));
        }
        if !is_writable(parent) {
            return Err(LocalPathError::ParentNotWritable(parent.to_path_buf()));
        }
        #[cfg(feature = "with-tracing")]
        tracing::debug!(path = %abs_path.display(), "destination missing, parent is writable");
        return Ok(());
    }

    if !abs_path.is_dir() {
        return Err(LocalPathError::NotDirectory(abs_path));
    }
    if !is_writable(&abs_path) {
        return Err(LocalPathError::NotWritable(abs_path));
    }
    Ok(())
}

/// [`validate_local_path`] flattened to the `(valid, reason)` pair.
pub fn local_path_report(path: &str) -> LocalPathReport {
    let result = validate_local_path(path);
    #[cfg(feature = "with-tracing")]
    if let Err(err) = &result {
        tracing::debug!(path, code = err.code(), "local path rejected");
    }
    LocalPathReport::from(result)
}

#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    rustix::fs::access(path, rustix::fs::Access::WRITE_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
