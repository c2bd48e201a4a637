use tg_core::frame::{Glyph, GlyphBuffer};

/// Upper half block, drawn in the foreground color.
pub const UPPER_HALF: char = '▀';
/// Lower half block, drawn in the foreground color.
pub const LOWER_HALF: char = '▄';

/// Couleur d'un canal (fond ou texte) d'une cellule terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Terminal default (transparent).
    Default,
    /// Index into the 256-color palette.
    Indexed(u8),
}

impl From<Option<u8>> for Channel {
    fn from(style: Option<u8>) -> Self {
        style.map_or(Self::Default, Self::Indexed)
    }
}

/// One terminal cell covering two vertically stacked pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfBlock {
    /// Space or a half-block glyph.
    pub ch: char,
    /// Background channel.
    pub bg: Channel,
    /// Foreground channel; `None` when `ch` is a space and the foreground
    /// is never visible.
    pub fg: Option<Channel>,
}

/// Fuse a top and a bottom pixel into one cell.
///
/// - both transparent: space on the default background;
/// - same color: space on that background;
/// - only the bottom transparent: `▀` in the top color on the default background;
/// - otherwise: `▄` in the bottom color on the top color (or default).
///
/// # Example
/// ```
/// use tg_ascii::halfblock::{fuse, Channel, LOWER_HALF};
/// use tg_core::frame::Glyph;
///
/// let red = Glyph { ch: '#', color: 9, transparent: false };
/// let blue = Glyph { ch: '#', color: 12, transparent: false };
/// let cell = fuse(&red, &blue);
/// assert_eq!(cell.ch, LOWER_HALF);
/// assert_eq!(cell.bg, Channel::Indexed(9));
/// assert_eq!(cell.fg, Some(Channel::Indexed(12)));
/// ```
#[must_use]
pub fn fuse(top: &Glyph, bottom: &Glyph) -> HalfBlock {
    match (top.style(), bottom.style()) {
        (None, None) => HalfBlock {
            ch: ' ',
            bg: Channel::Default,
            fg: None,
        },
        (Some(t), Some(b)) if t == b => HalfBlock {
            ch: ' ',
            bg: Channel::Indexed(t),
            fg: None,
        },
        (Some(t), None) => HalfBlock {
            ch: UPPER_HALF,
            bg: Channel::Default,
            fg: Some(Channel::Indexed(t)),
        },
        (t, Some(b)) => HalfBlock {
            ch: LOWER_HALF,
            bg: Channel::from(t),
            fg: Some(Channel::Indexed(b)),
        },
    }
}

/// Fused cells of output line `line` (pixel rows `2 * line` and `2 * line + 1`).
///
/// A missing bottom row (odd buffer height) reads as transparent.
///
/// # Example
/// ```
/// use tg_ascii::halfblock::fuse_line;
/// use tg_core::frame::{Glyph, GlyphBuffer};
///
/// let buffer = GlyphBuffer::from_glyphs(3, 2, vec![Glyph::TRANSPARENT; 6]).unwrap();
/// assert_eq!(fuse_line(&buffer, 0).count(), 3);
/// ```
pub fn fuse_line(buffer: &GlyphBuffer, line: u32) -> impl Iterator<Item = HalfBlock> + '_ {
    let top = buffer.row(line * 2);
    let bottom_y = line * 2 + 1;
    let bottom = (bottom_y < buffer.height()).then(|| buffer.row(bottom_y));
    top.iter().enumerate().map(move |(x, t)| {
        let b = bottom.map_or(&Glyph::TRANSPARENT, |row| &row[x]);
        fuse(t, b)
    })
}
