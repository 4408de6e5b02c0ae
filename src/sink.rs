//! Output sinks for generated lines.
//!
//! Sinks are explicit handles passed into the scheduler rather than
//! process-wide streams, so tests can capture output and the CLI can
//! select console or file writing with the same run path.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Default buffer size for buffered sinks.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Minimal sink contract required by the scheduler: append one line,
/// flush buffered output. Writes are serialized by the scheduler.
pub trait LineSink: Send {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// A sink shared between scheduler workers. The mutex serializes
/// writes and flushes; row generation itself happens outside the lock.
pub type SharedSink = Arc<tokio::sync::Mutex<Box<dyn LineSink>>>;

/// Wrap a sink for use by the scheduler.
pub fn shared(sink: impl LineSink + 'static) -> SharedSink {
    Arc::new(tokio::sync::Mutex::new(Box::new(sink)))
}

/// Buffered standard-output sink.
pub struct StdoutSink {
    inner: BufWriter<Stdout>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            inner: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, io::stdout()),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Buffered file sink. File creation failures surface before any
/// generation starts.
pub struct FileSink {
    inner: BufWriter<File>,
}

impl FileSink {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            inner: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file),
        })
    }
}

impl LineSink for FileSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// In-memory sink for tests: cloning shares the underlying buffer, so
/// callers can hand one clone to the scheduler and inspect the other
/// after the run.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("memory sink poisoned").clone()
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .expect("memory sink poisoned")
            .push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_file_sink_writes_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();
        sink.flush().unwrap();

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_file_sink_create_failure() {
        let result = FileSink::create("/nonexistent-dir/out.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_sink_shares_buffer_across_clones() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_line("hello").unwrap();
        assert_eq!(sink.lines(), vec!["hello"]);
    }
}
