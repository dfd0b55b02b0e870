// ============================================================
// Layer 6 - Question Cache Writer
// ============================================================
// Appends one JSON line per answered question:
//
//   {"3f1c…": {"question": "What is the capital of France?",
//              "answers": [["Paris", 0.92], ["Lyon", 0.1]]}}
//
// Properties of the log:
//   - Append-only: records are never rewritten or compacted
//   - Each line is independent; readers must not treat the file
//     as a single JSON document
//   - Each record gets a fresh UUID, so asking the same question
//     twice produces two distinct lines
//
// Caching is best-effort telemetry. A failed write is logged
// and dropped; it never changes the answer the user gets.
//
// Concurrency: the encoded line (record + '\n') is written with
// a single write_all on an O_APPEND handle while holding a mutex,
// so concurrent questions can never interleave inside a record.
//
// Why JSON lines instead of one JSON array?
//   - Appending a record never touches earlier bytes
//   - A crash mid-write can only damage the last line
//   - `history` can read the file line by line and skip bad lines
//
// Reference: serde_json docs (to_string, from_str),
//            Rust Book §16 (Shared-State Concurrency)

use std::{
    fs::{self, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};

use crate::domain::answer::{CacheRecord, CachedAnswers};
use crate::domain::errors::CacheError;
use crate::domain::traits::AnswerCache;

/// Appends question/answer records to a JSON-lines file.
pub struct CacheWriter {
    /// Destination log file
    path: PathBuf,

    /// When false every call to `record` is a no-op
    enabled: bool,

    /// Serialises appends from concurrent callers
    lock: Mutex<()>,
}

impl CacheWriter {
    pub fn new(path: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            path: path.into(),
            enabled,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Encode and append one record. Returns the error instead of
    /// logging it so callers that care (and tests) can inspect it.
    pub fn append(&self, record: &CacheRecord) -> Result<(), CacheError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let io_err = |source: std::io::Error| CacheError::Io {
            path: self.path.display().to_string(),
            source,
        };

        // A poisoned lock only means another append panicked;
        // the file itself is still usable.
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;

        file.write_all(&line).map_err(io_err)?;

        tracing::debug!("Cached question under id {}", record.id);
        Ok(())
    }
}

impl AnswerCache for CacheWriter {
    fn record(&self, question: &str, answers: &CachedAnswers) {
        if !self.enabled {
            return;
        }

        let record = CacheRecord::new(question, answers.clone());
        if let Err(e) = self.append(&record) {
            tracing::warn!("Question cache write failed: {e}");
        }
    }
}

/// Read every well-formed record from a cache log, oldest first.
///
/// Lines are parsed independently; a malformed line is skipped
/// with a warning rather than failing the whole read. A missing
/// file is an empty history.
pub fn read_records(path: &Path) -> Result<Vec<CacheRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = fs::File::open(path)
        .with_context(|| format!("Cannot open cache file '{}'", path.display()))?;

    let mut records = Vec::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<CacheRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(
                "Skipping malformed cache line {} in '{}': {}",
                line_no + 1,
                path.display(),
                e
            ),
        }
    }

    Ok(records)
}
