//! th-logging: append-only NDJSON records of moves and finished games.
//!
//! One JSON object per line, written as play proceeds, so a crashed or
//! interrupted run still leaves a readable log behind.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use th_core::RuleEvent;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// One completed move.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecordV1 {
    pub record: &'static str,
    pub ts_ms: u64,

    pub game_id: u64,
    pub player: String,
    pub move_idx: u32,

    /// Move total offered for banking; zero means the move busted.
    pub banked: u32,
    pub won: bool,
    pub score_after: u16,
    pub bolts: u8,
    pub barrels: u8,

    pub events: Vec<RuleEvent>,
}

impl MoveRecordV1 {
    pub const RECORD: &'static str = "move_v1";
}

/// One finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecordV1 {
    pub record: &'static str,
    pub ts_ms: u64,

    pub game_id: u64,
    pub seed: u64,
    /// Winner name, or `None` when the move cap was hit.
    pub winner: Option<String>,
    pub moves: u32,
}

impl GameRecordV1 {
    pub const RECORD: &'static str = "game_v1";
}

#[derive(Debug)]
pub enum NdjsonError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for NdjsonError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NdjsonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl std::fmt::Display for NdjsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "ndjson io error: {}", e),
            Self::Json(e) => write!(f, "ndjson encode error: {}", e),
        }
    }
}

impl std::error::Error for NdjsonError {}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .write(true)
            .open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_record<T: Serialize>(&mut self, record: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(record)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}
