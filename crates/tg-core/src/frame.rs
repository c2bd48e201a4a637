/// Buffer de pixels décodé. Jamais modifié après construction.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel, alpha non
/// prémultiplié.
///
/// # Example
/// ```
/// use tg_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer entièrement transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Crée un buffer rempli d'une seule couleur RGBA.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, [255, 0, 0, 255]);
    /// assert_eq!(fb.pixel(1, 1), (255, 0, 0, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            data: rgba.repeat(width as usize * height as usize),
            width,
            height,
        }
    }

    /// Accès au pixel (x, y) → (r, g, b, a), 8 bits par canal.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Pixel (x, y) in 16-bit channels with color premultiplied by alpha.
    ///
    /// Each 8-bit channel is widened by `* 0x101`; color channels are then
    /// scaled by `alpha / 0xff`, so a fully transparent pixel reads as black.
    ///
    /// # Example
    /// ```
    /// use tg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(1, 1, [255, 128, 0, 255]);
    /// assert_eq!(fb.rgba16(0, 0), (0xffff, 0x8080, 0, 0xffff));
    ///
    /// let half = FrameBuffer::filled(1, 1, [255, 255, 255, 0]);
    /// assert_eq!(half.rgba16(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn rgba16(&self, x: u32, y: u32) -> (u32, u32, u32, u32) {
        let (r, g, b, a) = self.pixel(x, y);
        let alpha = u32::from(a);
        let premul = |c: u8| u32::from(c) * 0x101 * alpha / 0xff;
        (premul(r), premul(g), premul(b), alpha * 0x101)
    }
}

/// Une cellule de sortie : caractère, index de couleur, transparence.
///
/// # Example
/// ```
/// use tg_core::frame::Glyph;
/// let glyph = Glyph { ch: '#', color: 196, transparent: false };
/// assert_eq!(glyph.style(), Some(196));
/// assert_eq!(Glyph::TRANSPARENT.style(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Caractère à afficher.
    pub ch: char,
    /// Index dans la palette 256 couleurs. 0 si transparent.
    pub color: u8,
    /// Pixel sous le seuil d'opacité.
    pub transparent: bool,
}

impl Glyph {
    /// A transparent cell.
    pub const TRANSPARENT: Self = Self {
        ch: ' ',
        color: 0,
        transparent: true,
    };

    /// Color index, or `None` when the cell is transparent.
    #[inline(always)]
    #[must_use]
    pub fn style(&self) -> Option<u8> {
        if self.transparent {
            None
        } else {
            Some(self.color)
        }
    }
}

/// Grille de glyphes, une entrée par cellule de sortie, row-major.
///
/// Built once from a complete vector and read-only afterwards.
///
/// # Example
/// ```
/// use tg_core::frame::{Glyph, GlyphBuffer};
/// let cell = Glyph { ch: '@', color: 15, transparent: false };
/// let buffer = GlyphBuffer::from_glyphs(2, 1, vec![cell; 2]).unwrap();
/// assert_eq!(buffer.get(1, 0).ch, '@');
/// assert_eq!(buffer.row(0).len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GlyphBuffer {
    glyphs: Vec<Glyph>,
    width: u32,
    height: u32,
}

impl GlyphBuffer {
    /// Wrap a row-major glyph vector.
    ///
    /// Returns `None` if the vector length is not `width * height`.
    #[must_use]
    pub fn from_glyphs(width: u32, height: u32, glyphs: Vec<Glyph>) -> Option<Self> {
        if glyphs.len() == width as usize * height as usize {
            Some(Self {
                glyphs,
                width,
                height,
            })
        } else {
            None
        }
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> &Glyph {
        &self.glyphs[y as usize * self.width as usize + x as usize]
    }

    /// All cells of row `y`.
    #[inline]
    #[must_use]
    pub fn row(&self, y: u32) -> &[Glyph] {
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Every cell, row-major.
    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}
