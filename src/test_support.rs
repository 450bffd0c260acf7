use crate::mapper::Diagnostics;
use crate::output::OutputSink;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Write `content` to `dir/name` and return the full path.
pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// One call made on a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SinkEvent {
    Begin(String),
    Value(String),
    Blank,
    End,
}

/// A row reassembled from sink events. `None` cells are blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Row {
    pub label: String,
    pub cells: Vec<Option<String>>,
    pub ended: bool,
}

/// Sink that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub events: Vec<SinkEvent>,
    /// When set, `emit_value` records the call and then fails.
    pub fail_values: bool,
}

impl RecordingSink {
    pub(crate) fn failing() -> Self {
        Self {
            events: Vec::new(),
            fail_values: true,
        }
    }

    pub(crate) fn rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();
        for event in &self.events {
            match event {
                SinkEvent::Begin(label) => rows.push(Row {
                    label: label.clone(),
                    cells: Vec::new(),
                    ended: false,
                }),
                SinkEvent::Value(item) => rows.last_mut().unwrap().cells.push(Some(item.clone())),
                SinkEvent::Blank => rows.last_mut().unwrap().cells.push(None),
                SinkEvent::End => rows.last_mut().unwrap().ended = true,
            }
        }
        rows
    }

    pub(crate) fn count(&self, wanted: &SinkEvent) -> usize {
        self.events
            .iter()
            .filter(|event| std::mem::discriminant(*event) == std::mem::discriminant(wanted))
            .count()
    }
}

impl OutputSink for RecordingSink {
    fn begin_row(&mut self, label: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Begin(label.to_string()));
        Ok(())
    }

    fn emit_value(&mut self, item: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Value(item.to_string()));
        if self.fail_values {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        Ok(())
    }

    fn emit_blank(&mut self) -> io::Result<()> {
        self.events.push(SinkEvent::Blank);
        Ok(())
    }

    fn end_row(&mut self) -> io::Result<()> {
        self.events.push(SinkEvent::End);
        Ok(())
    }
}

/// Diagnostics that keep every message.
#[derive(Debug, Default)]
pub(crate) struct RecordingDiagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Diagnostics for RecordingDiagnostics {
    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
