/// Image sources for termglyph: file or URL loading, decoding, and the
/// bilinear scaler.

pub mod image;
pub mod resize;
