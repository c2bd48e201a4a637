use std::io::Write;

use tg_ascii::geometry::{self, Geometry};
use tg_ascii::quantize::Quantizer;
use tg_core::config::{Options, RenderMode};
use tg_core::error::ConvertError;
use tg_core::frame::FrameBuffer;
use tg_core::traits::{TerminalProbe, TerminalSize};
use tg_render::encoder::{Encoder, centering_padding, render};
use tg_source::image::load_frame;
use tg_source::resize::resize_frame;

/// Orchestrateur d'une conversion : charge, dimensionne, quantifie, encode.
///
/// # Example
/// ```
/// use tg_app::asciifier::Asciifier;
/// use tg_core::config::Options;
/// use tg_core::frame::FrameBuffer;
/// use tg_core::traits::TerminalSize;
///
/// let options = Options { width: 4, ..Options::default() };
/// let frame = FrameBuffer::filled(8, 8, [255, 255, 255, 255]);
/// let mut out = Vec::new();
/// Asciifier::new(options)
///     .convert(&frame, &TerminalSize::default(), &mut out)
///     .unwrap();
/// assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
/// ```
pub struct Asciifier {
    options: Options,
}

impl Asciifier {
    /// Wrap `options` for one or more conversions.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Load the image named by the options, then [`convert`](Self::convert) it.
    ///
    /// # Errors
    /// [`ConvertError::SourceUnavailable`] or [`ConvertError::DecodeFailure`]
    /// for the source, then anything [`convert`](Self::convert) returns.
    pub fn asciify<P, W>(&self, probe: &P, out: &mut W) -> Result<(), ConvertError>
    where
        P: TerminalProbe + ?Sized,
        W: Write,
    {
        let frame = load_frame(&self.options.image, self.options.invert)?;
        log::info!(
            "Image chargée : {} ({}×{})",
            self.options.image,
            frame.width,
            frame.height
        );
        self.convert(&frame, probe, out)
    }

    /// Convert an already decoded frame and write it to `out`.
    ///
    /// # Errors
    /// - [`ConvertError::InvalidConfiguration`] for contradictory options;
    /// - [`ConvertError::TerminalSizeUnknown`] when the terminal size is
    ///   needed and the probe reports zero;
    /// - [`ConvertError::Scale`] if resampling fails;
    /// - [`ConvertError::Io`] on write failure.
    pub fn convert<P, W>(
        &self,
        frame: &FrameBuffer,
        probe: &P,
        out: &mut W,
    ) -> Result<(), ConvertError>
    where
        P: TerminalProbe + ?Sized,
        W: Write,
    {
        self.options.validate()?;
        let mode = self.options.mode();
        let requested = (self.options.width, self.options.height);

        let terminal = if geometry::needs_terminal(mode, requested, self.options.center) {
            let size = probe.size();
            if size.is_unknown() {
                return Err(ConvertError::TerminalSizeUnknown);
            }
            size
        } else {
            TerminalSize::default()
        };

        let scaled;
        let source = (frame.width, frame.height);
        let frame = match geometry::resolve(source, requested, terminal, mode) {
            Some(Geometry { width, height }) => {
                scaled = resize_frame(frame, width, height)?;
                &scaled
            }
            None => frame,
        };

        let glyphs = Quantizer::new(&self.options).quantize(frame);
        let encoder = Encoder::for_options(&self.options);
        let padding = if self.options.center && mode != RenderMode::Html {
            centering_padding(terminal.columns, glyphs.width())
        } else {
            0
        };
        log::info!(
            "Conversion {:?} : {}×{} glyphes",
            mode,
            glyphs.width(),
            glyphs.height()
        );
        render(&glyphs, &encoder, padding, out)?;
        Ok(())
    }
}
