//! wire-trace: a debug-tracing helper for network transfer engines
//!
//! This crate provides the glue between a transfer engine's debug hook and
//! a human reading a diagnostic stream:
//! - Event classification (informational text, headers, body data,
//!   encrypted payloads)
//! - Hex-and-ASCII payload dumps with CRLF-aware line breaking for text
//!   bodies
//! - Microsecond timestamps from a once-captured clock anchor
//!
//! The tracer is synchronous and best-effort by contract: it always tells
//! the engine to continue and never lets a formatting failure disturb the
//! transfer it observes.

pub mod clock;
pub mod dump;
pub mod event;
pub mod trace;

pub use dump::{dump, DumpFormat};
pub use event::{classify, EventAction, InfoKind};
pub use trace::{TraceStatus, Tracer};
