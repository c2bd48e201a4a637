pub mod ansi;
/// Output encoders for termglyph.
///
/// Turns glyph buffers into ANSI 256-color text, half-block pixels or an
/// HTML document.
pub mod encoder;
pub mod html;

pub use encoder::{Encoder, render};
