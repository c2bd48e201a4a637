use tg_core::charset::Charset;
use tg_core::config::Options;
use tg_core::frame::{FrameBuffer, Glyph, GlyphBuffer};
use tg_core::palette::{COLOR_RAMP, GRAY_RAMP, gray_to_color_index, nearest_index};

/// Quantifie chaque pixel : caractère par la rampe de gris, couleur par la
/// palette 256 couleurs (ou la rampe de gris en mode grayscale).
///
/// # Example
/// ```
/// use tg_ascii::quantize::Quantizer;
/// use tg_core::config::Options;
/// use tg_core::frame::FrameBuffer;
///
/// let quantizer = Quantizer::new(&Options::default());
/// let frame = FrameBuffer::filled(4, 2, [255, 255, 255, 255]);
/// let glyphs = quantizer.quantize(&frame);
/// assert_eq!((glyphs.width(), glyphs.height()), (4, 2));
/// assert_eq!(glyphs.get(0, 0).ch, 'M');
/// ```
pub struct Quantizer {
    charset: Charset,
    weights: (f64, f64, f64),
    grayscale: bool,
    /// `None` when transparency is disabled.
    min_opacity: Option<u32>,
}

impl Quantizer {
    /// Capture everything the per-pixel loop needs from the options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let min_opacity = options
            .transparent
            .then(|| ((1.0 - options.transparency_threshold) * f64::from(u16::MAX)) as u32);
        Self {
            charset: options.charset(),
            weights: options.weights(),
            grayscale: options.grayscale,
            min_opacity,
        }
    }

    /// Build the glyph buffer for `frame`, one glyph per pixel.
    #[must_use]
    pub fn quantize(&self, frame: &FrameBuffer) -> GlyphBuffer {
        let mut glyphs = Vec::with_capacity(frame.width as usize * frame.height as usize);
        for y in 0..frame.height {
            for x in 0..frame.width {
                glyphs.push(self.glyph(frame.rgba16(x, y)));
            }
        }
        log::debug!(
            "Quantification : {}×{} glyphes",
            frame.width,
            frame.height
        );
        // Length is width * height by construction.
        GlyphBuffer::from_glyphs(frame.width, frame.height, glyphs)
            .unwrap_or_else(|| unreachable!("glyph count matches frame dimensions"))
    }

    /// Quantize one pixel given as premultiplied 16-bit RGBA.
    ///
    /// # Example
    /// ```
    /// use tg_ascii::quantize::Quantizer;
    /// use tg_core::config::Options;
    ///
    /// let quantizer = Quantizer::new(&Options::default());
    /// let black = quantizer.glyph((0, 0, 0, 0xffff));
    /// assert_eq!((black.ch, black.color), (' ', 0));
    /// ```
    #[inline]
    #[must_use]
    pub fn glyph(&self, (r, g, b, a): (u32, u32, u32, u32)) -> Glyph {
        let v = self.luminance(r, g, b);
        let gray_idx = nearest_index(&GRAY_RAMP, (v, v, v));
        let ch = self.charset.glyph(gray_idx);

        if self.min_opacity.is_some_and(|min| a <= min) {
            return Glyph {
                ch,
                color: 0,
                transparent: true,
            };
        }

        let color = if self.grayscale {
            gray_to_color_index(gray_idx as u8)
        } else {
            nearest_index(&COLOR_RAMP, (r, g, b)) as u8
        };
        Glyph {
            ch,
            color,
            transparent: false,
        }
    }

    /// Weighted luminance in the 16-bit channel space, saturated to `u16`.
    #[inline(always)]
    fn luminance(&self, r: u32, g: u32, b: u32) -> u32 {
        let (rw, gw, bw) = self.weights;
        let v = f64::from(r) * rw + f64::from(g) * gw + f64::from(b) * bw;
        u32::from(v as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tg_core::palette::widen;

    fn opaque(r: u8, g: u8, b: u8) -> (u32, u32, u32, u32) {
        (widen(r), widen(g), widen(b), 0xffff)
    }

    #[test]
    fn white_picks_white_entries() {
        let q = Quantizer::new(&Options::default());
        let glyph = q.glyph(opaque(255, 255, 255));
        assert_eq!(glyph.ch, 'M');
        assert_eq!(glyph.color, 15);
        assert!(!glyph.transparent);
    }

    #[test]
    fn pure_red_color_index() {
        let q = Quantizer::new(&Options::default());
        assert_eq!(q.glyph(opaque(255, 0, 0)).color, 9);
    }

    #[test]
    fn grayscale_reuses_ramp_index() {
        let options = Options {
            grayscale: true,
            ..Options::default()
        };
        let q = Quantizer::new(&options);
        assert_eq!(q.glyph(opaque(255, 255, 255)).color, 15);
        assert_eq!(q.glyph(opaque(0, 0, 0)).color, 0);
        // Mid gray lands on the xterm gray slide.
        let mid = q.glyph(opaque(128, 128, 128)).color;
        assert!((232..=255).contains(&mid), "got {mid}");
    }

    #[test]
    fn charset_wraps_modulo() {
        let options = Options {
            charset: "ab".into(),
            ..Options::default()
        };
        let q = Quantizer::new(&options);
        // White is gray index 1.
        assert_eq!(q.glyph(opaque(255, 255, 255)).ch, 'b');
        // Black is gray index 0.
        assert_eq!(q.glyph(opaque(0, 0, 0)).ch, 'a');
    }

    #[test]
    fn transparency_threshold_applies_only_when_enabled() {
        let alpha = 0xffff / 10;
        let pixel = (alpha, alpha, alpha, alpha);

        let enabled = Options {
            transparent: true,
            transparency_threshold: 0.5,
            ..Options::default()
        };
        assert!(Quantizer::new(&enabled).glyph(pixel).transparent);

        let disabled = Options {
            transparent: false,
            transparency_threshold: 0.5,
            ..Options::default()
        };
        let glyph = Quantizer::new(&disabled).glyph(pixel);
        assert!(!glyph.transparent);
        assert_eq!(glyph.style(), Some(glyph.color));
    }

    #[test]
    fn default_threshold_only_drops_fully_transparent() {
        let options = Options {
            transparent: true,
            ..Options::default()
        };
        let q = Quantizer::new(&options);
        assert!(q.glyph((0, 0, 0, 0)).transparent);
        assert!(!q.glyph((257, 257, 257, 257)).transparent);
    }

    #[test]
    fn weights_steer_character_choice() {
        let red_only = Options {
            red_weight: 1.0,
            green_weight: 0.0,
            blue_weight: 0.0,
            ..Options::default()
        };
        let q = Quantizer::new(&red_only);
        assert_eq!(q.glyph(opaque(255, 0, 0)).ch, 'M');
        assert_eq!(q.glyph(opaque(0, 255, 255)).ch, ' ');
    }

    #[test]
    fn buffer_matches_frame_dimensions() {
        let q = Quantizer::new(&Options::default());
        let frame = FrameBuffer::filled(7, 3, [12, 200, 40, 255]);
        let glyphs = q.quantize(&frame);
        assert_eq!(glyphs.glyphs().len(), 21);
        let first = *glyphs.get(0, 0);
        assert!(glyphs.glyphs().iter().all(|g| *g == first));
    }
}
