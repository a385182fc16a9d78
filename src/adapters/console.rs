//! Console event sink adapter.
//!
//! Writes one line per event to any [`Write`] target: either the plain
//! status line, or the whole event as a JSON object.  Events without a
//! status line (start, rejections) are skipped in text mode.
//!
//! The first write error is kept and later events are dropped;
//! [`ConsoleSink::finish`] hands it back to the caller.

use std::io::{self, Write};

use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFormat {
    /// Human-readable status lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

pub struct ConsoleSink<W: Write> {
    out: W,
    format: LineFormat,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, format: LineFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Flush and return the writer, or the first write error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_event(&mut self, event: &AppEvent) -> io::Result<()> {
        match self.format {
            LineFormat::Text => {
                if let Some(line) = event.status_line() {
                    writeln!(self.out, "{line}")?;
                }
            }
            LineFormat::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: &AppEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_event(event) {
            warn!("console write failed: {e}");
            self.error = Some(e);
        }
    }
}
