/// Configuration, types, and shared structures for termglyph.
///
/// This crate contains the palette tables, the frame and glyph buffers,
/// the conversion options and the error type shared across the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod palette;
pub mod traits;

pub use charset::Charset;
pub use config::{Options, RenderMode};
pub use error::ConvertError;
pub use frame::{FrameBuffer, Glyph, GlyphBuffer};
pub use traits::{TerminalProbe, TerminalSize};
