//! Hex/ASCII dump formatter for wire payloads.
//!
//! Renders a byte buffer as a sequence of fixed-width lines, each carrying a
//! hexadecimal offset label, an optional hex byte grid, and a printable
//! rendering of the same bytes. Output targets human eyes on a diagnostic
//! stream; its exact shape is not guaranteed stable and is not meant to be
//! machine-parsed.

use std::io::{self, Write};

/// Bytes per output line when the hex column is rendered
const HEX_WIDTH: usize = 16;

/// Bytes per output line in ASCII-only mode (more fits on screen)
const ASCII_WIDTH: usize = 64;

/// Dump rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    /// Offset, hex byte grid, and printable column; 16 bytes per line
    Hex,
    /// Offset and printable column only; 64 bytes per line, with a CRLF
    /// inside the payload forcing a line break
    Ascii,
}

impl DumpFormat {
    /// Source bytes consumed per output line
    fn width(self) -> usize {
        match self {
            DumpFormat::Hex => HEX_WIDTH,
            DumpFormat::Ascii => ASCII_WIDTH,
        }
    }
}

/// Render `data` to `out` as an offset/hex/ASCII dump under `label`.
///
/// The header line carries the byte count in decimal and hex. An empty
/// buffer produces the header line and nothing else. Offset labels are
/// always relative to the start of `data`, including after a CRLF-forced
/// line break in [`DumpFormat::Ascii`] mode.
pub fn dump(out: &mut impl Write, label: &str, data: &[u8], format: DumpFormat) -> io::Result<()> {
    writeln!(out, "{}, {} bytes (0x{:x})", label, data.len(), data.len())?;

    let width = format.width();
    let mut i = 0;

    while i < data.len() {
        write!(out, "{:04x}: ", i)?;

        if format == DumpFormat::Hex {
            for c in 0..width {
                match data.get(i + c) {
                    Some(byte) => write!(out, "{:02x} ", byte)?,
                    // placeholder keeps the ASCII column aligned
                    None => write!(out, "   ")?,
                }
            }
        }

        // Where the next line starts unless a CRLF forces an earlier break
        let mut next = i + width;

        let mut c = 0;
        while c < width && i + c < data.len() {
            // A CRLF in ASCII mode ends the line; the pair is consumed and
            // the next line resumes right after it
            if format == DumpFormat::Ascii && crlf_at(data, i + c) {
                next = i + c + 2;
                break;
            }

            let byte = data[i + c];
            let ch = if (0x20..0x80).contains(&byte) {
                byte as char
            } else {
                '.'
            };
            write!(out, "{}", ch)?;

            // Look one byte past the window so a CRLF landing on the chunk
            // boundary still breaks here instead of opening an empty line
            if format == DumpFormat::Ascii && crlf_at(data, i + c + 1) {
                next = i + c + 3;
                break;
            }

            c += 1;
        }

        writeln!(out)?;
        i = next;
    }

    Ok(())
}

/// True if a complete CR LF pair sits at `pos` within `data`
fn crlf_at(data: &[u8], pos: usize) -> bool {
    data.get(pos) == Some(&0x0d) && data.get(pos + 1) == Some(&0x0a)
}
