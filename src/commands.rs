//! Command handlers invoked by the host event dispatcher
//!
//! Each host key binding or palette entry maps to one [`Command`]; the
//! handler receives everything it needs as parameters and hands back an
//! [`Outcome`]. Handlers share no state with the extractor or with each
//! other, so the host is free to dispatch from wherever its event loop
//! happens to be.

use crate::host::Host;
use crate::memory::{MemoryError, MemoryStore};
use crate::primitives::display_width::TextMetrics;
use crate::selection::{extract_with_tag, Position};
use crate::status::Spinner;

/// Commands the host can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Capture the current visual selection for an outgoing request
    CaptureSelection,
    /// Append a note to the memory file
    MemoryAppend { text: String },
    /// Read the memory file for inclusion in a request
    MemoryShow,
    /// Mark a request as in flight
    StatusStart { label: String },
    /// Mark the in-flight request as finished
    StatusStop,
}

/// Result of a dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text produced for the caller (selection capture, memory contents)
    Text(String),
    /// Completed with nothing to return
    Ack,
}

/// Command dispatch error types
#[derive(Debug)]
pub enum CommandError {
    Memory(MemoryError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory(e) => write!(f, "Memory error: {}", e),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Memory(e) => Some(e),
        }
    }
}

impl From<MemoryError> for CommandError {
    fn from(e: MemoryError) -> Self {
        CommandError::Memory(e)
    }
}

/// Execute one command against the host and stores.
///
/// `CaptureSelection` with no active selection yields empty text: nothing
/// selected is a normal outcome, never an error.
pub fn dispatch<H: Host, M: TextMetrics>(
    command: Command,
    host: &H,
    memory: &MemoryStore,
    spinner: &mut Spinner,
    metrics: &M,
) -> Result<Outcome, CommandError> {
    match command {
        Command::CaptureSelection => {
            let Some(sel) = host.selection() else {
                return Ok(Outcome::Text(String::new()));
            };
            let lo = sel.start.0.min(sel.end.0);
            let hi = sel.start.0.max(sel.end.0);
            let lines = host.lines_in(lo..hi + 1);
            let start = Position::new(sel.start.0 - lo, sel.start.1);
            let end = Position::new(sel.end.0 - lo, sel.end.1);
            let text = extract_with_tag(&lines, start, end, &sel.mode, metrics);
            tracing::debug!(
                "Captured {} byte(s) from {} line(s), mode {:?}",
                text.len(),
                lines.len(),
                sel.mode
            );
            Ok(Outcome::Text(text))
        }
        Command::MemoryAppend { text } => {
            memory.append(&text)?;
            Ok(Outcome::Ack)
        }
        Command::MemoryShow => Ok(Outcome::Text(memory.contents()?)),
        Command::StatusStart { label } => {
            spinner.start(label);
            Ok(Outcome::Ack)
        }
        Command::StatusStop => {
            spinner.stop();
            Ok(Outcome::Ack)
        }
    }
}
