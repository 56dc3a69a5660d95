//! Directory scanning for dirguard
//!
//! Produces the oldest-first [`EntryList`] snapshot the eviction engine
//! works on. Scanning is read-only: it only lists directories and stats files.

use dirguard_core::{Entry, EntryList, Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Scan `root` and return its regular files sorted oldest first.
///
/// With `recursive` set, subdirectories are walked depth-first using an
/// explicit work list, so deep trees never grow the call stack. Entries that
/// vanish or become unreadable between listing and stat are skipped.
///
/// Fails if `root` does not name a readable directory.
pub fn scan(root: impl AsRef<Path>, recursive: bool) -> Result<EntryList> {
    let root = root.as_ref();
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::not_a_directory(root),
        _ => Error::file_system(root, "stat scan root", e),
    })?;
    if !metadata.is_dir() {
        return Err(Error::not_a_directory(root));
    }

    let mut entries = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    let mut is_root = true;

    while let Some(dir) = pending.pop() {
        let listing = match fs::read_dir(&dir) {
            Ok(listing) => listing,
            Err(e) if is_root => return Err(Error::file_system(&dir, "read directory", e)),
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };
        is_root = false;

        for item in listing {
            let item = match item {
                Ok(item) => item,
                Err(e) => {
                    debug!(path = %dir.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let path = item.path();
            let is_link = item.file_type().map(|t| t.is_symlink()).unwrap_or(false);
            match classify(&path) {
                Some(Kind::File(entry)) => {
                    trace!(path = %path.display(), size = entry.size(), "found file");
                    entries.push(entry);
                }
                // Symlinked directories are not followed; they could form cycles.
                Some(Kind::Directory) if recursive && !is_link => pending.push(path),
                Some(Kind::Directory) | None => {}
            }
        }
    }

    debug!(root = %root.display(), recursive, count = entries.len(), "scan complete");
    Ok(EntryList::from_entries(entries))
}

enum Kind {
    File(Entry),
    Directory,
}

/// Stat one path. `None` means it disappeared, is unreadable, or is neither
/// a regular file nor a directory.
fn classify(path: &Path) -> Option<Kind> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping entry that vanished during scan");
            return None;
        }
    };

    if metadata.is_dir() {
        return Some(Kind::Directory);
    }
    if !metadata.is_file() {
        return None;
    }

    let modified = match metadata.modified() {
        Ok(modified) => modified,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping entry without modification time");
            return None;
        }
    };

    Some(Kind::File(Entry::new(
        PathBuf::from(path),
        metadata.len(),
        modified,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};
    use tempfile::TempDir;

    fn write_file(path: &Path, len: usize, modified: SystemTime) {
        fs::write(path, vec![b'x'; len]).unwrap();
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(modified)
            .unwrap();
    }

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn file_names(list: &EntryList) -> Vec<String> {
        list.iter()
            .map(|e| e.path().file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_scan_orders_by_modification_time() {
        let temp_dir = TempDir::new().unwrap();
        write_file(&temp_dir.path().join("a"), 30, at(200));
        write_file(&temp_dir.path().join("b"), 20, at(100));
        write_file(&temp_dir.path().join("c"), 42, at(400));

        let list = scan(temp_dir.path(), false).unwrap();

        assert_eq!(file_names(&list), ["b", "a", "c"]);
        assert_eq!(list.total_size(), 92);
    }

    #[test]
    fn test_recursive_scan_includes_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_file(&temp_dir.path().join("top"), 1, at(10));
        write_file(&sub.join("nested"), 2, at(20));

        let flat = scan(temp_dir.path(), false).unwrap();
        assert_eq!(file_names(&flat), ["top"]);

        let deep = scan(temp_dir.path(), true).unwrap();
        let mut names = file_names(&deep);
        names.sort();
        assert_eq!(names, ["nested", "top"]);
        assert_eq!(deep.total_size(), 3);
    }

    #[test]
    fn test_repeated_scans_agree_on_ties() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["q", "e", "w"] {
            write_file(&temp_dir.path().join(name), 1, at(50));
        }

        let first = scan(temp_dir.path(), false).unwrap();
        let second = scan(temp_dir.path(), false).unwrap();

        assert_eq!(file_names(&first), ["e", "q", "w"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let list = scan(temp_dir.path(), true).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = scan(temp_dir.path().join("missing"), false).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_file_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain");
        write_file(&file, 1, at(1));
        let err = scan(&file, false).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }
}
