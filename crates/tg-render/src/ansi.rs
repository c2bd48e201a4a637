//! Encodage ANSI : mode texte (un caractère coloré par cellule) et mode
//! pixel (demi-blocs, fond et texte indépendants).
//!
//! Style state lives in locals of each line loop and restarts at every line,
//! since each line ends with a full reset.

use std::fmt;
use std::io::{self, Write};

use crossterm::{Command, queue};
use tg_ascii::halfblock::{Channel, fuse_line};
use tg_core::frame::{Glyph, GlyphBuffer};

/// 256-color SGR directive.
///
/// Written by hand rather than through `crossterm::style` so the bytes do
/// not depend on `NO_COLOR` or the host terminal.
///
/// # Example
/// ```
/// use crossterm::Command;
/// use tg_ascii::halfblock::Channel;
/// use tg_render::ansi::Sgr;
///
/// let mut s = String::new();
/// Sgr::Foreground(Channel::Indexed(196)).write_ansi(&mut s).unwrap();
/// assert_eq!(s, "\x1b[38;5;196m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sgr {
    /// Set (or reset) the foreground color.
    Foreground(Channel),
    /// Set (or reset) the background color.
    Background(Channel),
    /// Reset every attribute.
    Reset,
}

impl Command for Sgr {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match *self {
            Self::Foreground(Channel::Default) => f.write_str("\x1b[39m"),
            Self::Foreground(Channel::Indexed(n)) => write!(f, "\x1b[38;5;{n}m"),
            Self::Background(Channel::Default) => f.write_str("\x1b[49m"),
            Self::Background(Channel::Indexed(n)) => write!(f, "\x1b[48;5;{n}m"),
            Self::Reset => f.write_str("\x1b[0m"),
        }
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::other("SGR directives require ANSI support"))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

#[inline(always)]
fn put_char<W: Write>(out: &mut W, ch: char) -> io::Result<()> {
    let mut buf = [0u8; 4];
    out.write_all(ch.encode_utf8(&mut buf).as_bytes())
}

/// Terminate a line: full style reset, then newline.
///
/// # Errors
/// Propagates write failures.
pub fn end_line<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Sgr::Reset)?;
    out.write_all(b"\n")
}

/// Encode one row in text mode.
///
/// A foreground directive is emitted only when the color differs from the
/// previous cell (or the previous cell was transparent); a background reset
/// only when entering transparency. Transparent cells print a space.
///
/// # Errors
/// Propagates write failures.
///
/// # Example
/// ```
/// use tg_core::frame::Glyph;
/// use tg_render::ansi::encode_text_line;
///
/// let red = Glyph { ch: '#', color: 9, transparent: false };
/// let mut out = Vec::new();
/// encode_text_line(&[red, red, red], &mut out).unwrap();
/// assert_eq!(out, b"\x1b[38;5;9m###\x1b[0m\n");
/// ```
pub fn encode_text_line<W: Write>(row: &[Glyph], out: &mut W) -> io::Result<()> {
    // None: line start, nothing emitted yet.
    let mut last: Option<Option<u8>> = None;
    for glyph in row {
        let style = glyph.style();
        if last != Some(style) {
            match style {
                None => queue!(out, Sgr::Background(Channel::Default))?,
                Some(color) => queue!(out, Sgr::Foreground(Channel::Indexed(color)))?,
            }
            last = Some(style);
        }
        put_char(out, if glyph.transparent { ' ' } else { glyph.ch })?;
    }
    end_line(out)
}

/// Encode output line `line` in pixel mode (pixel rows `2 * line` and
/// `2 * line + 1`).
///
/// Background and foreground are tracked separately; each is re-emitted only
/// when it changes from the previous cell.
///
/// # Errors
/// Propagates write failures.
pub fn encode_pixel_line<W: Write>(
    buffer: &GlyphBuffer,
    line: u32,
    out: &mut W,
) -> io::Result<()> {
    let mut last_bg: Option<Channel> = None;
    let mut last_fg: Option<Channel> = None;
    for cell in fuse_line(buffer, line) {
        if last_bg != Some(cell.bg) {
            queue!(out, Sgr::Background(cell.bg))?;
            last_bg = Some(cell.bg);
        }
        if let Some(fg) = cell.fg {
            if last_fg != Some(fg) {
                queue!(out, Sgr::Foreground(fg))?;
                last_fg = Some(fg);
            }
        }
        put_char(out, cell.ch)?;
    }
    end_line(out)
}
