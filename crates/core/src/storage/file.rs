//! File-backed key-value store.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::storage::{KeyValueStore, StorageError};

/// Stores each key as `<key>.json` inside a directory.
///
/// Writes go to a temporary file that is renamed over the target, so a crash mid-write leaves
/// the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));

        fs::create_dir_all(&self.dir)?;
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), bytes = value.len(), "wrote storage entry");

        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_entry_reads_as_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());

        assert_eq!(store.get_item("cart-storage")?, None);

        Ok(())
    }

    #[test]
    fn write_creates_directory_and_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set_item("cart-storage", r#"{"version":1}"#)?;

        assert!(dir.path().join("nested/cart-storage.json").exists());
        assert_eq!(
            store.get_item("cart-storage")?.as_deref(),
            Some(r#"{"version":1}"#)
        );

        Ok(())
    }

    #[test]
    fn overwrite_leaves_no_temporary_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::new(dir.path());

        store.set_item("k", "one")?;
        store.set_item("k", "two")?;

        let names: Vec<String> = fs::read_dir(dir.path())?
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["k.json"]);
        assert_eq!(store.get_item("k")?.as_deref(), Some("two"));

        Ok(())
    }

    #[test]
    fn rejects_path_traversal_keys() {
        let store = FileStore::new("unused");

        for key in ["", "../escape", ".hidden", "a/b"] {
            assert!(
                matches!(store.get_item(key), Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn remove_deletes_entry() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::new(dir.path());

        store.set_item("k", "v")?;
        store.remove_item("k")?;
        store.remove_item("k")?;

        assert_eq!(store.get_item("k")?, None);

        Ok(())
    }
}
