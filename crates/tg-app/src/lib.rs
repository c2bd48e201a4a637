/// Conversion orchestration for the termglyph binary.
///
/// Wires image loading, geometry, quantization and encoding together.
pub mod asciifier;
pub mod cli;
pub mod terminal;
