//! Polling file watcher for `--watch`.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::error_line;

/// Remembers the last seen modification time of a file.
#[derive(Debug)]
pub struct FileWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl FileWatcher {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let last_modified = modified(&path);
        Self {
            path,
            last_modified,
        }
    }

    /// Returns `true` once per modification of the file.
    ///
    /// A file that is temporarily missing (editors replacing it on save) is
    /// not a change; it is picked up when it reappears.
    pub fn poll(&mut self) -> bool {
        let Some(current) = modified(&self.path) else {
            debug!(path = %self.path.display(), "file missing, waiting");
            return false;
        };
        if self.last_modified == Some(current) {
            return false;
        }
        self.last_modified = Some(current);
        true
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Call `on_change` every time the watched file changes. Never returns;
/// errors from `on_change` are printed once and watching continues.
pub fn watch<F>(mut watcher: FileWatcher, interval: Duration, mut on_change: F) -> !
where
    F: FnMut() -> anyhow::Result<()>,
{
    loop {
        thread::sleep(interval);
        if !watcher.poll() {
            continue;
        }
        debug!(path = %watcher.path().display(), "file changed");
        if let Err(e) = on_change() {
            eprintln!("{}", error_line(&e));
        }
    }
}
