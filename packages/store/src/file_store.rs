//! # Filesystem-backed session storage
//!
//! [`FileStorage`] persists each key as a small file under a base directory.
//! It backs native (non-browser) builds so a desktop run keeps its session
//! across restarts the same way the browser keeps `localStorage`.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── notezilla.session.json   # one file per key
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `notezilla` to
//! obtain a platform-appropriate base directory.

use std::path::PathBuf;

use crate::storage::SessionStorage;

/// Filesystem-backed SessionStorage for native builds.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.entry_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Role, Session, SessionStore, SessionUser};

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("notezilla_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut store = SessionStore::restore(FileStorage::new(dir.clone()));
        store.login(Session {
            user: SessionUser {
                id: 7,
                email: "file@example.com".to_string(),
                role: Role::Admin,
                ..SessionUser::default()
            },
            token: "file-token".to_string(),
        });

        // Re-open from the same directory
        let mut reopened = SessionStore::restore(FileStorage::new(dir.clone()));
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.token(), Some("file-token"));
        assert!(reopened.is_admin());

        reopened.logout();
        let cleared = SessionStore::restore(FileStorage::new(dir.clone()));
        assert!(!cleared.is_authenticated());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_directory_reads_as_empty() {
        let storage = FileStorage::new(std::env::temp_dir().join("notezilla_missing_dir_xyz"));
        assert!(storage.get("anything").is_none());
    }
}
