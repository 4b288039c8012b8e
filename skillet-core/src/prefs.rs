//! Local preference storage.
//!
//! A file-per-key store of scalar strings, written through on every mutation.
//! The theme and profile services sit on top of this.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Persisted key for the theme flag ("light" or "dark").
pub const THEME_KEY: &str = "theme";
/// Persisted key for the profile display name.
pub const PROFILE_NAME_KEY: &str = "profileName";
/// Persisted key for the profile picture URI.
pub const PROFILE_PICTURE_KEY: &str = "profilePicture";

/// File-per-key scalar string store.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    dir: PathBuf,
}

impl PrefsStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the default preference directory: ~/.skillet/prefs
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".skillet").join("prefs"))
            .unwrap_or_else(|| PathBuf::from("data/prefs"))
    }

    /// Open the store at the default location.
    pub fn open_default() -> Self {
        Self::new(Self::default_dir())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Read a value. Absent keys and unreadable files both yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Write a value immediately.
    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, PrefsStore) {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path().join("prefs"));
        (dir, store)
    }

    #[test]
    fn test_absent_key_reads_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let (_dir, store) = temp_store();
        store.set(PROFILE_NAME_KEY, "Ada").unwrap();
        assert_eq!(store.get(PROFILE_NAME_KEY).as_deref(), Some("Ada"));
    }

    #[test]
    fn test_writes_are_visible_to_a_fresh_handle() {
        // Write-through: a second handle over the same directory sees the
        // value without any flush step.
        let (_dir, store) = temp_store();
        store.set(THEME_KEY, "dark").unwrap();

        let reopened = PrefsStore::new(store.dir.clone());
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = temp_store();
        store.set(THEME_KEY, "dark").unwrap();
        store.remove(THEME_KEY).unwrap();
        store.remove(THEME_KEY).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
    }
}
