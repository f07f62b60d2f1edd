//! The debug hook itself: a timestamped passthrough over the dump formatter.
//!
//! A [`Tracer`] is handed to the transfer engine's instrumentation hook and
//! fed one event at a time. It classifies each event, writes informational
//! text with a timestamp, dumps header/body payloads, labels encrypted
//! payloads without dumping them, and drops everything else.

use crate::clock;
use crate::dump::{dump, DumpFormat};
use crate::event::{classify, EventAction, InfoKind};
use std::io::Write;
use tracing::trace;

/// Status reported back to the transfer engine.
///
/// The engine does not allow the debug hook to abort the operation, so
/// there is exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStatus {
    /// Keep the transfer going
    Continue,
}

/// Debug-event sink for a transfer engine's instrumentation hook
pub struct Tracer<W: Write> {
    sink: W,
    format: DumpFormat,
}

impl<W: Write> Tracer<W> {
    /// Create a tracer dumping in ASCII-only mode
    pub fn new(sink: W) -> Self {
        Self::with_format(sink, DumpFormat::Ascii)
    }

    /// Create a tracer with an explicit dump format
    pub fn with_format(sink: W, format: DumpFormat) -> Self {
        Tracer { sink, format }
    }

    /// Handle one event from the engine.
    ///
    /// Always reports [`TraceStatus::Continue`]. Write failures are
    /// swallowed: a diagnostic hook must never perturb the transfer it
    /// observes.
    pub fn on_event(&mut self, kind: InfoKind, data: &[u8]) -> TraceStatus {
        match classify(kind) {
            EventAction::Info => {
                // engine text normally carries its own trailing newline
                let text = String::from_utf8_lossy(data);
                let _ = write!(self.sink, "{} Info: {}", clock::timestamp(), text);
            }
            EventAction::Dump(label) => {
                let _ = dump(&mut self.sink, label, data, self.format);
            }
            EventAction::LabelOnly(label) => {
                let _ = writeln!(self.sink, "{}", label);
            }
            EventAction::Ignore => {
                trace!(?kind, len = data.len(), "dropping debug event");
            }
        }
        TraceStatus::Continue
    }

    /// Consume the tracer and hand back its sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}
