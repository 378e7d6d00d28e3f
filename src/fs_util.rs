use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Deletes `dir` and everything below it, best effort.
///
/// Only a failure to list `dir` itself is returned. Entries that cannot be removed
/// are logged and skipped so the rest of the tree still goes; in that case `dir`
/// survives with whatever could not be deleted.
pub fn remove_dir_recursive(dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();
    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        // symlink_metadata so a link to a directory is removed, not followed.
        let is_dir = fs::symlink_metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        let removed = if is_dir {
            remove_dir_recursive(&path)
        } else {
            fs::remove_file(&path)
        };
        if let Err(e) = removed {
            warn!(path = %path.display(), error = %e, "failed to remove");
        }
    }

    if let Err(e) = fs::remove_dir(dir) {
        warn!(dir = %dir.display(), error = %e, "failed to remove directory");
    }
    Ok(())
}
