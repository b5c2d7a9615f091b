//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe log writer that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage for log files.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Provides automatic file rotation based on size thresholds. When the current
/// file exceeds `MAX_FILE_SIZE_BYTES`, it is renamed with a timestamp suffix
/// and a new file is created. Old backups beyond `MAX_BACKUP_FILES` are
/// automatically cleaned up.
///
/// # Thread Safety
///
/// Uses an internal `Mutex` to ensure safe concurrent access. Multiple threads
/// can safely write to the same `FileWriter` instance.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 10MB, rotate:
///    - Rename current file to `<name>.log.<timestamp>`
///    - Create new empty file
///    - Remove oldest backups beyond 3
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<std::fs::File>>,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write operation. This allows
    /// construction to succeed even if the file cannot be opened immediately.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Path to the log file (will be created if it doesn't exist)
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Writes raw bytes to the file with automatic rotation.
    ///
    /// Checks file size before writing and rotates if necessary. Bytes are
    /// flushed to disk immediately so a crash never loses the last event.
    ///
    /// # Parameters
    ///
    /// * `bytes` - Formatted log event bytes (newline included by the caller)
    ///
    /// # Errors
    ///
    /// May fail due to:
    /// - File system permissions
    /// - Disk space exhaustion
    /// - Mutex poisoning (if another thread panicked while holding the lock)
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<usize> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()?;
        drop(writer);

        Ok(bytes.len())
    }

    /// Checks file size and rotates if necessary.
    ///
    /// If the current file exceeds `MAX_FILE_SIZE_BYTES`, closes the file
    /// handle and triggers rotation.
    ///
    /// # Parameters
    ///
    /// * `writer` - Current file handle (set to `None` if rotation occurs)
    fn check_and_rotate(&self, writer: &mut Option<std::fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Rotates the current file and cleans up old backups.
    ///
    /// Creates a timestamped backup of the current file and removes backups
    /// beyond the retention limit.
    ///
    /// # Backup Naming
    ///
    /// Backups are named: `<original_name>.log.<unix_timestamp>`
    ///
    /// Example: `bookgrid.log.1234567890`
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes old backup files beyond the retention limit.
    ///
    /// Scans the directory for backup files matching the pattern
    /// `<name>.log.*`, sorts by modification time (newest first), and deletes
    /// all backups beyond `MAX_BACKUP_FILES`.
    ///
    /// # Error Handling
    ///
    /// Ignores individual file deletion errors to ensure cleanup continues even
    /// if some files cannot be removed.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        // Find all backup files
        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        // Remove backups beyond retention limit
        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Cloneable handle to a shared [`FileWriter`], usable as a tracing writer.
///
/// The fmt layer asks for a fresh writer per event; every handle points at
/// the same underlying file and mutex, so events from concurrent tasks stay
/// line-atomic.
#[derive(Clone, Debug)]
pub struct FileWriterHandle(Arc<FileWriter>);

impl FileWriterHandle {
    /// Wraps a file writer in a shareable handle.
    pub fn new(writer: FileWriter) -> Self {
        Self(Arc::new(writer))
    }
}

impl Write for FileWriterHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriterHandle {
    type Writer = FileWriterHandle;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookgrid.log");
        let writer = FileWriter::new(path.clone());

        writer.write_bytes(b"first event\n").unwrap();
        writer.write_bytes(b"second event\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first event\nsecond event\n");
    }

    #[test]
    fn handle_writes_through_shared_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookgrid.log");
        let mut handle = FileWriterHandle::new(FileWriter::new(path.clone()));

        handle.write_all(b"via handle\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "via handle\n");
    }

    #[test]
    fn rotates_when_file_exceeds_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookgrid.log");

        // Seed a file already past the rotation threshold.
        fs::write(&path, vec![b'x'; (MAX_FILE_SIZE_BYTES + 1) as usize]).unwrap();

        let writer = FileWriter::new(path.clone());
        writer.write_bytes(b"after rotation\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "after rotation\n");

        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|n| n.contains(".log.") && n != "bookgrid.log")
            })
            .collect();
        assert_eq!(backups.len(), 1);
    }
}
