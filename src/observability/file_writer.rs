//! Size-capped append-only trace file.
//!
//! The plugin data directory is small and never cleaned by anyone else, so the
//! trace file keeps exactly one predecessor: when the live file passes its
//! size cap it is renamed to `<name>.1` (replacing any older backup) and a
//! fresh file is started.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size cap of the live file (2 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;

/// Append-only file with a single rotated backup.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer for `path` with the default size cap.
    ///
    /// Nothing is opened until the first write.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, DEFAULT_MAX_BYTES)
    }

    /// Creates a writer that rotates once the file exceeds `max_bytes`.
    pub const fn with_limit(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            handle: Mutex::new(None),
        }
    }

    /// Path of the rotated backup.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".1");
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if the file is over its cap.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing, or an error if
    /// the internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| std::io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if file_len(&self.path) > self.max_bytes {
            *handle = None;
            fs::rename(&self.path, self.backup_path())?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(OpenOptions::new().create(true).append(true).open(&self.path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }
}

fn file_len(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");
        let file = RotatingFile::new(path.clone());

        file.write_line("{\"a\":1}").unwrap();
        file.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_single_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");
        let file = RotatingFile::with_limit(path.clone(), 8);

        file.write_line("first-line").unwrap();
        file.write_line("second-line").unwrap();
        file.write_line("third-line").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "third-line\n");
        assert_eq!(fs::read_to_string(file.backup_path()).unwrap(), "second-line\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }
}
