//! wire-trace: render wire payloads as offset/hex/ASCII dumps
//!
//! Reads a payload from a file or stdin and writes a dump to stderr, so the
//! formatter can be exercised without a live transfer:
//! - Plain dump under a caller-chosen label
//! - Routed through the event classifier with `--kind`
//! - Split into header/body events with `--exchange`

use bytes::Bytes;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wire_trace::{dump, DumpFormat, InfoKind, Tracer};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "wire-trace")]
#[command(version = "0.1.0")]
#[command(about = "Render wire payloads as offset/hex/ASCII dumps", long_about = None)]
struct Args {
    /// Payload file; stdin when omitted
    file: Option<PathBuf>,

    /// Suppress the hex column (64 bytes per line, CRLF-aware)
    #[arg(short, long)]
    ascii: bool,

    /// Header label for the dump
    #[arg(short, long, default_value = "payload")]
    label: String,

    /// Route the payload through the event classifier
    #[arg(short, long, value_enum, conflicts_with = "exchange")]
    kind: Option<Kind>,

    /// Treat the payload as a received HTTP-style exchange and trace the
    /// header block and body as separate events
    #[arg(short = 'x', long)]
    exchange: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// CLI spelling of the engine event tags
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Text,
    HeaderIn,
    HeaderOut,
    DataIn,
    DataOut,
    SslIn,
    SslOut,
}

impl From<Kind> for InfoKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Text => InfoKind::Text,
            Kind::HeaderIn => InfoKind::HeaderIn,
            Kind::HeaderOut => InfoKind::HeaderOut,
            Kind::DataIn => InfoKind::DataIn,
            Kind::DataOut => InfoKind::DataOut,
            Kind::SslIn => InfoKind::SslDataIn,
            Kind::SslOut => InfoKind::SslDataOut,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let payload = read_payload(args.file.as_deref())?;
    debug!(bytes = payload.len(), "payload loaded");

    let format = if args.ascii {
        DumpFormat::Ascii
    } else {
        DumpFormat::Hex
    };

    let stderr = std::io::stderr().lock();

    if args.exchange {
        let mut tracer = Tracer::with_format(stderr, format);
        let (header, body) = split_exchange(&payload);
        tracer.on_event(InfoKind::HeaderIn, &header);
        if !body.is_empty() {
            tracer.on_event(InfoKind::DataIn, &body);
        }
    } else if let Some(kind) = args.kind {
        let mut tracer = Tracer::with_format(stderr, format);
        tracer.on_event(kind.into(), &payload);
    } else {
        let mut out = stderr;
        dump(&mut out, &args.label, &payload, format)?;
    }

    Ok(())
}

/// Read the whole payload from a file or stdin
fn read_payload(path: Option<&Path>) -> Result<Bytes, std::io::Error> {
    let mut buf = Vec::new();
    match path {
        Some(path) => {
            std::fs::File::open(path)?.read_to_end(&mut buf)?;
        }
        None => {
            std::io::stdin().lock().read_to_end(&mut buf)?;
        }
    }
    Ok(Bytes::from(buf))
}

/// Zero-copy split of an HTTP-style exchange at the first blank line.
///
/// Without a blank line the whole payload counts as the header block.
fn split_exchange(payload: &Bytes) -> (Bytes, Bytes) {
    match payload.windows(4).position(|w| w == b"\r\n\r\n") {
        Some(pos) => (payload.slice(..pos + 4), payload.slice(pos + 4..)),
        None => (payload.clone(), Bytes::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_exchange() {
        let payload = Bytes::from_static(b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello");
        let (header, body) = split_exchange(&payload);
        assert!(header.ends_with(b"\r\n\r\n"));
        assert_eq!(&body[..], b"hello");
    }

    #[test]
    fn test_split_exchange_header_only() {
        let payload = Bytes::from_static(b"HTTP/1.1 204 No Content\r\n");
        let (header, body) = split_exchange(&payload);
        assert_eq!(header, payload);
        assert!(body.is_empty());
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(InfoKind::from(Kind::SslIn), InfoKind::SslDataIn);
        assert_eq!(InfoKind::from(Kind::HeaderOut), InfoKind::HeaderOut);
    }
}
