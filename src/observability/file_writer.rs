//! Size-capped trace file writer.
//!
//! Thread-safe appending writer for the trace file. When the file grows past
//! the size cap it is truncated and writing starts over, which keeps disk
//! usage bounded without a backup rotation scheme.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum trace file size before truncation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Thread-safe size-capped file writer.
///
/// The file handle is opened lazily on first write, so construction succeeds
/// even when the target path is not yet writable. An internal `Mutex` makes
/// concurrent writes from the plugin and worker threads safe.
pub struct FileWriter {
    /// Path to the trace file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    handle: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a new writer for the given path without opening the file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            handle: Mutex::new(None),
        }
    }

    /// Writes a single line to the file, truncating first if over the cap.
    ///
    /// The line is written with a trailing newline and flushed immediately so
    /// traces survive abrupt plugin teardown.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened, written, or
    /// flushed, or if the internal lock is poisoned.
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::Other, format!("lock poisoned: {e}"))
            })?;

        if self.over_cap() {
            *handle = None;
            // Truncate rather than rotate; old traces are expendable.
            let _ = fs::remove_file(&self.file_path);
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "no file available")
            })?;

        writeln!(file, "{json}")?;
        file.flush()?;
        drop(handle);

        Ok(())
    }

    fn over_cap(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > MAX_FILE_SIZE_BYTES)
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_append_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }
}
