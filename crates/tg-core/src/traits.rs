/// Dimensions du terminal en cellules. `(0, 0)` si inconnues.
///
/// # Example
/// ```
/// use tg_core::traits::TerminalSize;
/// assert!(TerminalSize::default().is_unknown());
/// assert!(!TerminalSize { columns: 80, rows: 24 }.is_unknown());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalSize {
    /// Number of columns.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
}

impl TerminalSize {
    /// True when either dimension could not be determined.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

/// Fournit la taille du terminal au pipeline.
///
/// Only queried when a conversion actually needs it.
///
/// # Example
/// ```
/// use tg_core::traits::{TerminalProbe, TerminalSize};
///
/// struct Fixed;
/// impl TerminalProbe for Fixed {
///     fn size(&self) -> TerminalSize { TerminalSize { columns: 80, rows: 24 } }
/// }
/// assert_eq!(Fixed.size().columns, 80);
/// ```
pub trait TerminalProbe {
    /// Current terminal size, or `TerminalSize::default()` if unknown.
    fn size(&self) -> TerminalSize;
}

impl TerminalProbe for TerminalSize {
    fn size(&self) -> TerminalSize {
        *self
    }
}
