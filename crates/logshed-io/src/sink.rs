//! Destination sinks: append-only line writers with explicit finalization.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One destination's output channel. Append lines, then finish exactly once
/// at end of run; a sink that is never finished may lose buffered lines.
pub trait LineSink: Send {
    fn append(&mut self, line: &str) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
}

/// Writes one artifact file for a destination (`<output-dir>/<name>.txt`).
/// The file is truncated on creation: one run, one artifact.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(&path)?);
        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSink for FileSink {
    fn append(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// In-memory sink for tests and dry runs. The handle stays readable after
/// the writer task has consumed the sink itself.
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A shared view of everything appended so far.
    pub fn handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lines)
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for MemorySink {
    fn append(&mut self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .map_err(|_| io::Error::other("memory sink poisoned"))?
            .push(line.to_string());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
