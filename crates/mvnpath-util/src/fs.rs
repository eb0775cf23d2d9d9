use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Last-modified time of `path`, or `UNIX_EPOCH` when it cannot be read.
pub fn modified_or_epoch(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Join `path` onto `base` unless it is already absolute.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
