use std::io::{self, Write};

use tg_core::config::{Options, RenderMode};
use tg_core::frame::GlyphBuffer;

use crate::ansi::{encode_pixel_line, encode_text_line};
use crate::html::HtmlEncoder;

/// Encodeur de sortie, choisi une fois pour toute la conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoder {
    /// One colored character per cell.
    Plain,
    /// Half blocks, two pixel rows per output line.
    Pixel,
    /// Standalone HTML document.
    Html(HtmlEncoder),
}

impl Encoder {
    /// Pick the encoder matching the options' render mode.
    ///
    /// # Example
    /// ```
    /// use tg_core::config::Options;
    /// use tg_render::encoder::Encoder;
    ///
    /// let opts = Options { pixel: true, ..Options::default() };
    /// assert_eq!(Encoder::for_options(&opts), Encoder::Pixel);
    /// ```
    #[must_use]
    pub fn for_options(options: &Options) -> Self {
        match options.mode() {
            RenderMode::Text => Self::Plain,
            RenderMode::Pixel => Self::Pixel,
            RenderMode::Html => Self::Html(HtmlEncoder {
                grayscale: options.grayscale,
                center: options.center,
            }),
        }
    }

    /// Pixel rows consumed by one output line.
    #[must_use]
    pub fn rows_per_line(&self) -> u32 {
        match self {
            Self::Pixel => 2,
            Self::Plain | Self::Html(_) => 1,
        }
    }

    /// Number of output lines for a buffer of `height` rows.
    #[must_use]
    pub fn line_count(&self, height: u32) -> u32 {
        height.div_ceil(self.rows_per_line())
    }

    /// Document prologue; empty outside HTML.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Html(html) => html.header(out),
            Self::Plain | Self::Pixel => Ok(()),
        }
    }

    /// Encode output line `line`, line terminator included.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn encode_line<W: Write>(
        &self,
        buffer: &GlyphBuffer,
        line: u32,
        out: &mut W,
    ) -> io::Result<()> {
        match self {
            Self::Plain => encode_text_line(buffer.row(line), out),
            Self::Pixel => encode_pixel_line(buffer, line, out),
            Self::Html(html) => html.encode_line(buffer.row(line), out),
        }
    }

    /// Document epilogue; empty outside HTML.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Html(html) => html.footer(out),
            Self::Plain | Self::Pixel => Ok(()),
        }
    }
}

/// Left padding that centers `width` cells in `columns` (saturating).
///
/// # Example
/// ```
/// use tg_render::encoder::centering_padding;
/// assert_eq!(centering_padding(80, 61), 9);
/// assert_eq!(centering_padding(10, 40), 0);
/// ```
#[must_use]
pub fn centering_padding(columns: u32, width: u32) -> usize {
    (columns.saturating_sub(width) / 2) as usize
}

/// Write the whole glyph buffer: header, every line prefixed by `padding`
/// spaces, footer. Flushes `out` at the end.
///
/// # Errors
/// Propagates write failures.
///
/// # Example
/// ```
/// use tg_core::frame::{Glyph, GlyphBuffer};
/// use tg_render::encoder::{render, Encoder};
///
/// let white = Glyph { ch: 'M', color: 15, transparent: false };
/// let buffer = GlyphBuffer::from_glyphs(2, 1, vec![white; 2]).unwrap();
/// let mut out = Vec::new();
/// render(&buffer, &Encoder::Plain, 0, &mut out).unwrap();
/// assert_eq!(out, b"\x1b[38;5;15mMM\x1b[0m\n");
/// ```
pub fn render<W: Write>(
    buffer: &GlyphBuffer,
    encoder: &Encoder,
    padding: usize,
    out: &mut W,
) -> io::Result<()> {
    encoder.header(out)?;
    let pad = " ".repeat(padding);
    let lines = encoder.line_count(buffer.height());
    for line in 0..lines {
        out.write_all(pad.as_bytes())?;
        encoder.encode_line(buffer, line, out)?;
    }
    encoder.footer(out)?;
    log::debug!("Rendu : {lines} lignes, marge {padding}");
    out.flush()
}
