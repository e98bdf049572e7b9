//! Append-only trace file with a size cap.
//!
//! When the file grows past the cap it is moved to `<name>.1`, replacing any
//! previous backup, and a fresh file is started. Disk usage is therefore
//! bounded by roughly twice the cap.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the trace file is rolled over (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Thread-safe line writer with single-backup rotation.
///
/// The file is opened lazily on the first write so construction never fails.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limit(file_path, MAX_FILE_SIZE_BYTES)
    }

    pub const fn with_limit(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            writer: Mutex::new(None),
        }
    }

    /// Path the previous file is moved to on rotation.
    pub fn backup_path(&self) -> PathBuf {
        backup_path_for(&self.file_path)
    }

    /// Appends `line` plus a newline, rotating first if the file is over the cap.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotation, opening, or writing fails, or if the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            fs::rename(&self.file_path, self.backup_path())?;
        }

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }
        let Some(file) = writer.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }
}

fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".1");
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coinpane-otlp.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_single_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coinpane-otlp.json");
        let writer = FileWriter::with_limit(path.clone(), 8);

        writer.write_line("first-line").unwrap();
        writer.write_line("second-line").unwrap();
        writer.write_line("third-line").unwrap();

        let backup = writer.backup_path();
        assert_eq!(backup, dir.path().join("coinpane-otlp.json.1"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "second-line\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "third-line\n");
    }
}
