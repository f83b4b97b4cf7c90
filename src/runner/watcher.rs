// SSLC - A compiler for a simple scripting language targeting x86-64 assembly
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Recompile-on-save support.
//!
//! Editors save in different ways: some write the file in place, others
//! write a temporary file and rename it over the original. The watcher
//! observes the parent directory and filters events down to the source
//! file, which covers both.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::RunnerError;

/// Debounce window for file change events.
/// Multiple rapid changes within this window are collapsed into one.
const DEBOUNCE_DURATION: Duration = Duration::from_millis(100);

/// Watches a source file for changes.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sslc::runner::SourceWatcher;
///
/// let watcher = SourceWatcher::new(Path::new("hello.ssl")).expect("Failed to create watcher");
/// watcher.wait_for_change().expect("Watch error");
/// println!("hello.ssl changed");
/// ```
pub struct SourceWatcher {
    /// The underlying file system watcher.
    _watcher: RecommendedWatcher,
    /// Receiver for file system events.
    rx: Receiver<Result<Event, notify::Error>>,
    /// Canonical path of the watched file.
    path: PathBuf,
}

impl SourceWatcher {
    /// Create a watcher for the given source file.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::WatchError` if the file cannot be resolved or
    /// its directory cannot be watched.
    pub fn new(path: &Path) -> Result<Self, RunnerError> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = notify::recommended_watcher(tx)
            .map_err(|e| RunnerError::WatchError(format!("Failed to create watcher: {}", e)))?;

        let canonical = path.canonicalize().map_err(|e| {
            RunnerError::WatchError(format!("Cannot resolve path {}: {}", path.display(), e))
        })?;

        let parent = canonical.parent().ok_or_else(|| {
            RunnerError::WatchError(format!("{} has no parent directory", canonical.display()))
        })?;
        watcher
            .watch(parent, RecursiveMode::NonRecursive)
            .map_err(|e| {
                RunnerError::WatchError(format!("Failed to watch {}: {}", parent.display(), e))
            })?;
        log::debug!("watching {}", parent.display());

        Ok(Self {
            _watcher: watcher,
            rx,
            path: canonical,
        })
    }

    /// Get the watched path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until the source file changes.
    ///
    /// Events arriving within the debounce window after the first relevant
    /// one are discarded.
    pub fn wait_for_change(&self) -> Result<(), RunnerError> {
        loop {
            let event = self
                .rx
                .recv()
                .map_err(|e| RunnerError::WatchError(format!("Watch channel closed: {}", e)))?
                .map_err(|e| RunnerError::WatchError(format!("Watch error: {}", e)))?;

            if !is_relevant_event(&event, &self.path) {
                continue;
            }
            log::debug!("change detected: {:?}", event.kind);

            std::thread::sleep(DEBOUNCE_DURATION);
            while self.rx.try_recv().is_ok() {}

            return Ok(());
        }
    }
}

/// Check whether an event modifies or recreates the watched file.
fn is_relevant_event(event: &Event, watched: &Path) -> bool {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
        return false;
    }

    event.paths.iter().any(|event_path| same_file(event_path, watched))
}

/// Compare paths, falling back to parent and file name while a renamed
/// file cannot be canonicalized yet.
fn same_file(path: &Path, watched: &Path) -> bool {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if canonical == watched {
        return true;
    }

    canonical.file_name().is_some()
        && canonical.file_name() == watched.file_name()
        && canonical.parent() == watched.parent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_source_watcher_new() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.ssl");
        File::create(&file_path).unwrap();

        let watcher = SourceWatcher::new(&file_path).unwrap();
        assert_eq!(watcher.path(), file_path.canonicalize().unwrap());
    }

    #[test]
    fn test_source_watcher_nonexistent_file() {
        let result = SourceWatcher::new(Path::new("/nonexistent/path/file.ssl"));
        assert!(matches!(result, Err(RunnerError::WatchError(_))));
    }

    #[test]
    fn test_relevant_events() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("prog.ssl");
        let other_path = temp_dir.path().join("other.ssl");
        File::create(&file_path).unwrap();
        File::create(&other_path).unwrap();
        let watched = file_path.canonicalize().unwrap();

        let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(file_path.clone());
        assert!(is_relevant_event(&modify, &watched));

        let create = Event::new(EventKind::Create(CreateKind::File)).add_path(file_path.clone());
        assert!(is_relevant_event(&create, &watched));

        let remove = Event::new(EventKind::Remove(RemoveKind::File)).add_path(file_path);
        assert!(!is_relevant_event(&remove, &watched));

        let other = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(other_path);
        assert!(!is_relevant_event(&other, &watched));
    }

    #[test]
    fn test_file_change_detection() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("watch_test.ssl");

        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "PRINTLN 1").unwrap();
        }

        let watcher = SourceWatcher::new(&file_path).unwrap();

        let file_path_clone = file_path.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(&file_path_clone)
                .unwrap();
            writeln!(file, "PRINTLN 2").unwrap();
        });

        let result = watcher.wait_for_change();
        handle.join().unwrap();

        assert!(result.is_ok(), "Should detect file change");
    }

    #[test]
    fn test_debounce_duration() {
        assert!(DEBOUNCE_DURATION.as_millis() >= 50);
        assert!(DEBOUNCE_DURATION.as_millis() <= 500);
    }
}
