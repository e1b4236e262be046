//! Turn Journal
//!
//! Append-only record of a run: one line per turn and one when the run ends.
//! Lines go to stdout, a file, an in-memory buffer, or nowhere.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use village_events::JournalEntry;

/// How journal lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalFormat {
    /// `Moved to <place>` / `Done in <n> turns`
    #[default]
    Text,
    /// One JSON object per line
    Jsonl,
}

/// Errors writing the journal
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("journal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("journal serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output sink for journal entries
pub struct TurnJournal {
    writer: Option<Box<dyn Write>>,
    captured: Option<Vec<String>>,
    format: JournalFormat,
    entry_count: u64,
}

impl TurnJournal {
    /// Journal to standard output
    pub fn stdout(format: JournalFormat) -> Self {
        Self::from_writer(Box::new(io::stdout()), format)
    }

    /// Journal to a file, truncating whatever was there
    pub fn to_file(path: impl AsRef<Path>, format: JournalFormat) -> Result<Self, JournalError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path.as_ref())?;
        Ok(Self::from_writer(Box::new(BufWriter::new(file)), format))
    }

    /// Journal to any writer
    pub fn from_writer(writer: Box<dyn Write>, format: JournalFormat) -> Self {
        Self {
            writer: Some(writer),
            captured: None,
            format,
            entry_count: 0,
        }
    }

    /// A journal that only counts entries (for testing and batch runs)
    pub fn null() -> Self {
        Self {
            writer: None,
            captured: None,
            format: JournalFormat::Text,
            entry_count: 0,
        }
    }

    /// A journal that keeps its lines in memory
    pub fn in_memory(format: JournalFormat) -> Self {
        Self {
            writer: None,
            captured: Some(Vec::new()),
            format,
            entry_count: 0,
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.entry_count
    }

    /// Lines captured by an in-memory journal; empty for other sinks.
    pub fn lines(&self) -> &[String] {
        self.captured.as_deref().unwrap_or(&[])
    }

    /// Append one entry
    pub fn record(&mut self, entry: &JournalEntry) -> Result<(), JournalError> {
        self.entry_count += 1;
        trace_entry(entry);

        if self.writer.is_none() && self.captured.is_none() {
            return Ok(());
        }

        let line = match self.format {
            JournalFormat::Text => entry.to_string(),
            JournalFormat::Jsonl => serde_json::to_string(entry)?,
        };

        if let Some(ref mut writer) = self.writer {
            writeln!(writer, "{}", line)?;
        }
        if let Some(ref mut captured) = self.captured {
            captured.push(line);
        }
        Ok(())
    }

    /// Flush buffered lines to the underlying writer
    pub fn flush(&mut self) -> Result<(), JournalError> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for TurnJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnJournal")
            .field("format", &self.format)
            .field("entry_count", &self.entry_count)
            .field("has_writer", &self.writer.is_some())
            .finish()
    }
}

impl Drop for TurnJournal {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush turn journal: {}", e);
        }
    }
}

fn trace_entry(entry: &JournalEntry) {
    match entry {
        JournalEntry::Moved(record) => tracing::debug!(
            turn = record.turn,
            from = %record.from,
            moved = record.moved,
            delivered = record.delivered,
            remaining = record.remaining,
            "Moved to {}",
            record.direction
        ),
        JournalEntry::Done { turns } => tracing::info!(turns = *turns, "Done in {} turns", turns),
        JournalEntry::Stopped { turns, remaining } => tracing::warn!(
            turns = *turns,
            remaining = *remaining,
            "Turn limit reached with parcels undelivered"
        ),
    }
}

/// Open the journal a run should write to: a file when `path` is given,
/// standard output otherwise.
pub fn open_journal(
    path: Option<&Path>,
    format: JournalFormat,
) -> Result<TurnJournal, JournalError> {
    match path {
        Some(path) => TurnJournal::to_file(path, format),
        None => Ok(TurnJournal::stdout(format)),
    }
}
