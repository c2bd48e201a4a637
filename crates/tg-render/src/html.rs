//! Document HTML autonome : une classe CSS par entrée de palette, un `<span>`
//! par cellule opaque.

use std::io::{self, Write};

use tg_core::frame::Glyph;
use tg_core::palette::{COLOR_RAMP, GRAY_RAMP, color_to_gray_index, to_hex};

/// HTML encoder state, fixed for the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HtmlEncoder {
    /// Classes index the 26-entry gray ramp instead of the 256-color ramp.
    pub grayscale: bool,
    /// Center the `<pre>` block.
    pub center: bool,
}

impl HtmlEncoder {
    /// Write the document head, the stylesheet and the opening `<pre>`.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(
            out,
            "  <meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />"
        )?;
        writeln!(out, "  <title>termglyph asciified image</title>")?;
        writeln!(out, "  <style type=\"text/css\">")?;
        writeln!(out, "    body {{ background: #000000; }}")?;
        writeln!(out, "    pre {{ font: normal 12px/9px Menlo, monospace; }}")?;
        if self.center {
            writeln!(out, "    pre {{ text-align: center; }}")?;
        }
        let ramp: &[_] = if self.grayscale { &GRAY_RAMP } else { &COLOR_RAMP };
        for (idx, rgb) in ramp.iter().enumerate() {
            writeln!(out, "    .c_{idx} {{ color: #{:06x} }}", to_hex(*rgb))?;
        }
        writeln!(out, "  </style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<pre>")
    }

    /// Encode one glyph row followed by a bare newline.
    ///
    /// # Errors
    /// Propagates write failures.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::Glyph;
    /// use tg_render::html::HtmlEncoder;
    ///
    /// let enc = HtmlEncoder { grayscale: true, center: false };
    /// let white = Glyph { ch: 'M', color: 15, transparent: false };
    /// let mut out = Vec::new();
    /// enc.encode_line(&[white, Glyph::TRANSPARENT], &mut out).unwrap();
    /// assert_eq!(out, b"<span class=\"c_1\">M</span> \n");
    /// ```
    pub fn encode_line<W: Write>(&self, row: &[Glyph], out: &mut W) -> io::Result<()> {
        for glyph in row {
            if glyph.transparent {
                out.write_all(b" ")?;
                continue;
            }
            let class = if self.grayscale {
                color_to_gray_index(glyph.color)
            } else {
                glyph.color
            };
            write!(out, "<span class=\"c_{class}\">")?;
            write_escaped(out, glyph.ch)?;
            out.write_all(b"</span>")?;
        }
        out.write_all(b"\n")
    }

    /// Close the document and stamp the producer version.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "</pre>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        writeln!(out, "<!-- termglyph v{} -->", env!("CARGO_PKG_VERSION"))
    }
}

fn write_escaped<W: Write>(out: &mut W, ch: char) -> io::Result<()> {
    match ch {
        '<' => out.write_all(b"&lt;"),
        '>' => out.write_all(b"&gt;"),
        '&' => out.write_all(b"&amp;"),
        _ => {
            let mut buf = [0u8; 4];
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())
        }
    }
}
