//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KvStore`] implementation that keeps one file per key
//! under a base directory. It is used by native builds (desktop shells and
//! test harnesses) in place of browser storage.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── eagletask.session
//! ├── eagletask.grades
//! └── eagletask.tasks
//! ```
//!
//! ## Writes
//!
//! Each `set` writes `<key>.tmp` and renames it over `<key>`. Rename is atomic
//! on the same filesystem, so a reader sees either the old value or the new
//! one. Errors are logged and otherwise ignored: an unwritable directory
//! degrades to "nothing cached" rather than failing the UI.
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/eagletask/` |
//! | Linux | `~/.local/share/eagletask/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\eagletask\` |

use std::path::PathBuf;

use crate::session::KvStore;

/// Filesystem-backed KvStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base.join(sanitize(key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{}.tmp", sanitize(key)))
    }
}

/// Keep keys from escaping the base directory.
fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
            _ => '_',
        })
        .collect()
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.value_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!(dir = %self.base.display(), error = %e, "cannot create store directory");
            return;
        }
        let path = self.value_path(key);
        let tmp = self.temp_path(key);
        let result = std::fs::write(&tmp, value).and_then(|()| std::fs::rename(&tmp, &path));
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "failed to persist value");
            let _ = std::fs::remove_file(&tmp);
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.value_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "failed to remove value"),
        }
    }
}
