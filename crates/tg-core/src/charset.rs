/// Charset par défaut, 26 caractères, un par entrée de la rampe de gris.
///
/// Index 0 (black) is a space, index 1 (white) is `M`, then the gray slide
/// runs from sparse to dense glyphs.
pub const CHARSET_DEFAULT: &str = " M   ...',;:clodxkO0KXNWMM";

/// Ordered glyph sequence used to pick a character from a grayscale-ramp
/// index.
///
/// Indices wrap modulo the charset length, so a charset shorter (or longer)
/// than the ramp still yields a glyph for every index.
///
/// # Example
/// ```
/// use tg_core::charset::Charset;
/// let charset = Charset::new(" .:#@").unwrap();
/// assert_eq!(charset.glyph(0), ' ');
/// assert_eq!(charset.glyph(4), '@');
/// assert_eq!(charset.glyph(7), ':');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charset {
    glyphs: Vec<char>,
}

impl Charset {
    /// Build a charset from a string, one glyph per `char`.
    ///
    /// Returns `None` for an empty string.
    #[must_use]
    pub fn new(charset: &str) -> Option<Self> {
        let glyphs: Vec<char> = charset.chars().collect();
        if glyphs.is_empty() {
            None
        } else {
            Some(Self { glyphs })
        }
    }

    /// Glyph for a ramp index.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index % self.glyphs.len()]
    }

    /// Number of glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; an empty charset cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            glyphs: CHARSET_DEFAULT.chars().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::GRAY_RAMP_LEN;

    #[test]
    fn default_charset_covers_gray_ramp() {
        assert_eq!(Charset::default().len(), GRAY_RAMP_LEN);
    }

    #[test]
    fn empty_charset_rejected() {
        assert!(Charset::new("").is_none());
    }

    #[test]
    fn short_charset_wraps() {
        let charset = Charset::new("ab").unwrap();
        let picked: String = (0..GRAY_RAMP_LEN).map(|i| charset.glyph(i)).collect();
        assert_eq!(picked, "ab".repeat(GRAY_RAMP_LEN / 2));
    }

    #[test]
    fn multibyte_glyphs_count_once() {
        let charset = Charset::new(" ░▒▓█").unwrap();
        assert_eq!(charset.len(), 5);
        assert_eq!(charset.glyph(3), '▓');
    }
}
