// Whole-document file access shared by the scoreboard and the save slot

use crate::debug_log;
use crate::error::StoreError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn persistence(path: &Path, source: io::Error) -> StoreError {
    StoreError::Persistence {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a document, `Ok(None)` if the file does not exist.
pub fn read_document(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            debug_log!("read {} bytes from {}", contents.len(), path.display());
            Ok(Some(contents))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(persistence(path, e)),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the document at `path` with `contents`.
///
/// The data goes to a sibling temp file which is then renamed over the
/// target, so readers see either the old or the new document.
pub fn write_document(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| persistence(parent, e))?;
    }

    let tmp = temp_path(path);
    let result = (|| {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(persistence(path, e));
    }
    debug_log!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Delete a document; a missing file counts as success.
pub fn remove_document(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(persistence(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_document_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_document(&dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn test_write_creates_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.json");
        write_document(&path, "first").unwrap();
        write_document(&path, "second").unwrap();
        assert_eq!(read_document(&path).unwrap().as_deref(), Some("second"));
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_failed_write_leaves_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        write_document(&path, "intact").unwrap();

        // A directory squatting on the temp name makes the write fail.
        fs::create_dir(temp_path(&path)).unwrap();
        let err = write_document(&path, "lost").unwrap_err();
        assert!(matches!(err, StoreError::Persistence { .. }));
        assert_eq!(read_document(&path).unwrap().as_deref(), Some("intact"));
    }

    #[test]
    fn test_read_directory_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Persistence { .. }));
    }

    #[test]
    fn test_remove_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        remove_document(&path).unwrap();
        write_document(&path, "x").unwrap();
        remove_document(&path).unwrap();
        assert!(!path.exists());
    }
}
