//! Last notification id, kept between runs so the next notification replaces
//! the previous one instead of stacking.
//!
//! Loading never fails: a missing, unreadable or malformed file reads as 0
//! ("no previous notification"). Saving reports errors.

use std::path::{Path, PathBuf};

const DIR_NAME: &str = "brightstep";
const FILE_NAME: &str = "notification-id";

/// Id meaning "no previous notification".
pub const NO_IDENTITY: u32 = 0;

#[derive(Debug, Clone)]
pub struct IdentityStore {
    path: Option<PathBuf>,
}

impl IdentityStore {
    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        IdentityStore {
            path: Some(path.into()),
        }
    }

    /// Per-user location: `$XDG_STATE_HOME/brightstep/notification-id`,
    /// falling back to `~/.local/state`. With no home directory at all the
    /// store loads as empty and refuses to save.
    pub fn for_current_user() -> Self {
        IdentityStore {
            path: Self::default_path(),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::state_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("state")))
            .map(|d| d.join(DIR_NAME).join(FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> u32 {
        let Some(path) = &self.path else {
            return NO_IDENTITY;
        };
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("no stored notification id ({}): {e}", path.display());
                return NO_IDENTITY;
            }
        };
        match contents.trim().parse::<u32>() {
            Ok(id) => id,
            Err(e) => {
                log::debug!(
                    "ignoring malformed notification id in {}: {e}",
                    path.display()
                );
                NO_IDENTITY
            }
        }
    }

    /// Overwrite the stored id (write to temp file, then rename).
    ///
    /// The temp file sits next to the target, so the rename never crosses
    /// filesystems. A failed rename leaves the previous id in place.
    pub fn save(&self, id: u32) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No home directory for notification id",
            ));
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, id.to_string())?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdentityStore::at(dir.path().join("id"));
        store.save(42).unwrap();
        assert_eq!(store.load(), 42);
    }

    #[test]
    fn load_never_created_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdentityStore::at(dir.path().join("never-written"));
        assert_eq!(store.load(), NO_IDENTITY);
    }

    #[test]
    fn load_garbage_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id");
        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(IdentityStore::at(&path).load(), 0);
    }

    #[test]
    fn load_negative_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id");
        std::fs::write(&path, "-5").unwrap();
        assert_eq!(IdentityStore::at(&path).load(), 0);
    }

    #[test]
    fn load_tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id");
        std::fs::write(&path, "17\n").unwrap();
        assert_eq!(IdentityStore::at(&path).load(), 17);
    }

    #[test]
    fn load_directory_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(IdentityStore::at(dir.path()).load(), 0);
    }

    #[test]
    fn save_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdentityStore::at(dir.path().join("id"));
        store.save(1_000_000).unwrap();
        store.save(7).unwrap();
        assert_eq!(store.load(), 7);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("id")).unwrap(),
            "7"
        );
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdentityStore::at(dir.path().join("a/b/notification-id"));
        store.save(3).unwrap();
        assert_eq!(store.load(), 3);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdentityStore::at(dir.path().join("notification-id"));
        store.save(9).unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .map(|e| e.file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("notification-id")]);
    }

    #[test]
    fn save_into_file_as_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = IdentityStore::at(blocker.join("id"));
        assert!(store.save(1).is_err());
    }

    #[test]
    fn failed_rename_reports_error_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("id");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let store = IdentityStore::at(&target);
        assert!(store.save(5).is_err());
        assert!(target.is_dir(), "target left as it was");
        assert!(!dir.path().join("id.tmp").exists());
    }

    #[test]
    fn pathless_store_loads_zero_and_refuses_save() {
        let store = IdentityStore { path: None };
        assert_eq!(store.load(), 0);
        assert!(store.save(1).is_err());
    }

    #[test]
    fn default_path_ends_with_app_file() {
        if let Some(p) = IdentityStore::default_path() {
            assert!(p.ends_with("brightstep/notification-id"), "got: {}", p.display());
        }
    }
}
