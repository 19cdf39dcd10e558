//! File-backed token store for the CLI.
//!
//! ERROR HANDLING
//! ==============
//! A missing file means "no session". Other I/O failures are logged and
//! treated the same way, matching the `SessionStore` contract. File contents
//! are the token byte for byte.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use session::SessionStore;

/// Stores the bearer token as the exact contents of a file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        file.write_all(token.as_bytes())
    }
}

impl SessionStore for FileStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "token file unreadable");
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Err(e) = self.write(token) {
            tracing::warn!(path = %self.path.display(), error = %e, "token file write failed");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "token file removal failed"),
        }
    }
}
