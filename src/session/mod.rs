//! Ephemeral session storage.
//!
//! The login response body is written verbatim to a single file in the
//! per-user runtime directory, which the OS clears when the user session
//! ends. Without one, the per-user cache directory is used. `logout` removes
//! it explicitly.

use crate::errors::AppResult;
use crate::models::SessionIdentity;
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

const SESSION_FILE_NAME: &str = "eventhost-session.json";

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_RUNTIME_DIR/eventhost-session.json`, else
    /// `<cache dir>/eventhost/eventhost-session.json`. The shared temp dir is
    /// only used when the platform reports neither.
    pub fn default_path() -> PathBuf {
        dirs::runtime_dir()
            .or_else(|| dirs::cache_dir().map(|d| d.join("eventhost")))
            .unwrap_or_else(|| std::env::temp_dir().join(format!("eventhost-{}", whoami())))
            .join(SESSION_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the login response body exactly as received.
    ///
    /// The body goes to a freshly created owner-only sibling file that is
    /// then renamed over the session path, so an existing file or symlink at
    /// that path is replaced, never written through.
    pub fn save_verbatim(&self, body: &str) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let tmp = self.path.with_extension(format!("tmp{}", process::id()));
        // A stale leftover (or a planted link) would make create_new fail.
        fs::remove_file(&tmp).ok();

        let written = create_private(&tmp).and_then(|mut file| {
            file.write_all(body.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp, &self.path)) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    /// The stored identity, or `None` when there is no usable session.
    pub fn load(&self) -> Option<SessionIdentity> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("cannot read session file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("ignoring corrupt session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Remove the session. Clearing an absent session is not an error.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("session cleared ({})", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// New file readable by its owner only. Fails if anything already exists at
/// `path`, symlinks included.
#[cfg(unix)]
fn create_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

fn whoami() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".into())
}
