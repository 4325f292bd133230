//! Append-only JSONL log of game events.
//!
//! One JSON object per line:
//! `{"ts":1234,"event":"locked","linesCleared":2,"points":300,"score":300,"level":1,"lines":2}`

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::ScoreSnapshot;
use crate::types::GameEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Milliseconds since the runner started.
    pub ts: u64,
    pub event: &'static str,
    /// Horizontal offset of a move, or the kick applied by a rotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dx: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_cleared: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl EventRecord {
    pub fn new(ts: u64, event: GameEvent, totals: ScoreSnapshot) -> Self {
        let mut rec = Self {
            ts,
            event: event.name(),
            dx: None,
            manual: None,
            cells: None,
            lines_cleared: None,
            points: None,
            score: totals.score,
            level: totals.level,
            lines: totals.lines,
        };
        match event {
            GameEvent::Moved { dx } => rec.dx = Some(dx),
            GameEvent::Rotated { kick } => rec.dx = Some(kick),
            GameEvent::Fell { manual } => rec.manual = Some(manual),
            GameEvent::HardDropped { cells } => rec.cells = Some(cells),
            GameEvent::Locked {
                lines_cleared,
                points,
            } => {
                rec.lines_cleared = Some(lines_cleared);
                rec.points = Some(points);
            }
            GameEvent::Started
            | GameEvent::Paused
            | GameEvent::Resumed
            | GameEvent::GameOver { .. } => {}
        }
        rec
    }
}

/// Serializes records into a reused buffer, then writes them as one line.
pub struct EventLog<W: Write = BufWriter<File>> {
    out: W,
    buf: Vec<u8>,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn record(&mut self, rec: &EventRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, rec)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
