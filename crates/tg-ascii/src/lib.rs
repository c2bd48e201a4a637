pub mod geometry;
pub mod halfblock;
/// Conversion engine for termglyph.
///
/// Resolves output geometry and quantizes pixel frames into glyph buffers.
pub mod quantize;
