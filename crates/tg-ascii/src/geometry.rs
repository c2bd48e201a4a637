//! Résolution des dimensions de sortie.
//!
//! Terminal cells are roughly twice as tall as they are wide, so text mode
//! halves the derived height (or doubles the derived width). Pixel mode packs
//! two image rows per terminal row and needs an even height.

use tg_core::config::RenderMode;
use tg_core::traits::TerminalSize;

/// Dimensions cibles de l'image redimensionnée, en pixels (= cellules en
/// mode texte, demi-cellules verticales en mode pixel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Target width.
    pub width: u32,
    /// Target height.
    pub height: u32,
}

/// Round half up, decided on the first decimal digit only.
///
/// `2.5 → 3`, `2.45 → 2`, `20.0 → 20`. Negative and NaN inputs give 0.
///
/// # Example
/// ```
/// use tg_ascii::geometry::round_half_up;
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(20.0), 20);
/// assert_eq!(round_half_up(2.96), 3);
/// ```
#[must_use]
pub fn round_half_up(value: f64) -> u32 {
    let tenths = (value * 10.0) as u64;
    let rounded = if tenths % 10 > 4 {
        tenths / 10 + 1
    } else {
        tenths / 10
    };
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Whether resolving geometry for these options needs the terminal size.
///
/// Pixel mode always does. Text mode does when no dimension is given or
/// when centering (the padding depends on the column count). HTML never does.
///
/// # Example
/// ```
/// use tg_ascii::geometry::needs_terminal;
/// use tg_core::config::RenderMode;
/// assert!(needs_terminal(RenderMode::Text, (0, 0), false));
/// assert!(!needs_terminal(RenderMode::Text, (40, 0), false));
/// assert!(needs_terminal(RenderMode::Pixel, (40, 20), false));
/// assert!(!needs_terminal(RenderMode::Html, (0, 0), true));
/// ```
#[must_use]
pub fn needs_terminal(mode: RenderMode, requested: (u32, u32), center: bool) -> bool {
    match mode {
        RenderMode::Html => false,
        RenderMode::Pixel => true,
        RenderMode::Text => center || (requested.0 == 0 && requested.1 == 0),
    }
}

/// Compute the target dimensions.
///
/// `requested` uses 0 for "not given". Returns `None` when no scaling should
/// happen (HTML mode without explicit dimensions: native resolution).
/// `terminal` is only read when neither dimension is requested outside HTML
/// mode; callers check [`needs_terminal`] and reject an unknown size first.
///
/// Results are clamped to at least 1×1, and pixel-mode heights are bumped
/// to the next even number.
///
/// # Example
/// ```
/// use tg_ascii::geometry::{resolve, Geometry};
/// use tg_core::config::RenderMode;
/// use tg_core::traits::TerminalSize;
///
/// let g = resolve((100, 50), (40, 0), TerminalSize::default(), RenderMode::Text);
/// assert_eq!(g, Some(Geometry { width: 40, height: 10 }));
/// ```
#[must_use]
pub fn resolve(
    source: (u32, u32),
    requested: (u32, u32),
    terminal: TerminalSize,
    mode: RenderMode,
) -> Option<Geometry> {
    let (src_w, src_h) = (f64::from(source.0), f64::from(source.1));
    let (req_w, req_h) = requested;
    let text = mode == RenderMode::Text;

    let (width, height) = if req_w > 0 && req_h > 0 {
        (req_w, req_h)
    } else if req_w > 0 {
        let prop = src_w / f64::from(req_w);
        let height = round_half_up(src_h / prop);
        (req_w, if text { height / 2 } else { height })
    } else if req_h > 0 {
        let prop = src_h / f64::from(req_h);
        let width = round_half_up(src_w / prop);
        (if text { width.saturating_mul(2) } else { width }, req_h)
    } else {
        match mode {
            RenderMode::Html => return None,
            RenderMode::Pixel => fit_pixel(src_w, src_h, terminal),
            RenderMode::Text => fit_text(src_w, src_h, terminal),
        }
    };

    let width = width.max(1);
    let mut height = height.max(1);
    if mode == RenderMode::Pixel && height % 2 == 1 {
        height += 1;
    }
    Some(Geometry { width, height })
}

/// Full terminal height (two pixels per row, minus a one-row margin), then
/// width as the binding dimension if the image would overflow.
fn fit_pixel(src_w: f64, src_h: f64, terminal: TerminalSize) -> (u32, u32) {
    let target_h = terminal.rows.saturating_mul(2).saturating_sub(2);
    let prop = src_h / f64::from(target_h);
    let width = round_half_up(src_w / prop);
    if width <= terminal.columns {
        return (width, target_h);
    }
    let target_w = terminal.columns.saturating_sub(1);
    let prop = src_w / f64::from(target_w);
    (target_w, round_half_up(src_h / prop))
}

/// Same shape as [`fit_pixel`] with the 2:1 cell correction and a single
/// margin row.
fn fit_text(src_w: f64, src_h: f64, terminal: TerminalSize) -> (u32, u32) {
    let target_h = terminal.rows.saturating_sub(1);
    let prop = src_h / f64::from(target_h) / 2.0;
    let width = round_half_up(src_w / prop);
    if width <= terminal.columns {
        return (width, target_h);
    }
    let target_w = terminal.columns.saturating_sub(1);
    let prop = src_w / f64::from(target_w) * 2.0;
    (target_w, round_half_up(src_h / prop))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERM: TerminalSize = TerminalSize {
        columns: 80,
        rows: 24,
    };

    fn geom(width: u32, height: u32) -> Option<Geometry> {
        Some(Geometry { width, height })
    }

    #[test]
    fn rounding_uses_first_decimal() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(2.3), 2);
        assert_eq!(round_half_up(19.7), 20);
        assert_eq!(round_half_up(-4.0), 0);
        assert_eq!(round_half_up(f64::NAN), 0);
    }

    #[test]
    fn width_only_halves_height_in_text_mode() {
        let none = TerminalSize::default();
        assert_eq!(resolve((100, 50), (40, 0), none, RenderMode::Text), geom(40, 10));
        assert_eq!(resolve((100, 50), (40, 0), TERM, RenderMode::Pixel), geom(40, 20));
        assert_eq!(resolve((100, 50), (40, 0), none, RenderMode::Html), geom(40, 20));
    }

    #[test]
    fn height_only_doubles_width_in_text_mode() {
        let none = TerminalSize::default();
        assert_eq!(resolve((100, 50), (0, 10), none, RenderMode::Text), geom(40, 10));
        assert_eq!(resolve((100, 50), (0, 10), TERM, RenderMode::Pixel), geom(20, 10));
        assert_eq!(resolve((100, 50), (0, 10), none, RenderMode::Html), geom(20, 10));
    }

    #[test]
    fn explicit_dimensions_are_verbatim() {
        let none = TerminalSize::default();
        assert_eq!(resolve((100, 50), (33, 17), none, RenderMode::Text), geom(33, 17));
        assert_eq!(resolve((100, 50), (33, 17), none, RenderMode::Html), geom(33, 17));
    }

    #[test]
    fn pixel_mode_height_is_even() {
        assert_eq!(resolve((100, 50), (33, 17), TERM, RenderMode::Pixel), geom(33, 18));
        assert_eq!(resolve((1, 1), (1, 0), TERM, RenderMode::Pixel), geom(1, 2));
        for h in 1..40 {
            let g = resolve((64, 64), (0, h), TERM, RenderMode::Pixel).unwrap();
            assert_eq!(g.height % 2, 0, "requested height {h}");
        }
    }

    #[test]
    fn html_without_dimensions_keeps_native_size() {
        assert_eq!(resolve((640, 480), (0, 0), TERM, RenderMode::Html), None);
    }

    #[test]
    fn text_mode_fits_terminal_height() {
        // 480 / 23 / 2 ≈ 10.43 → 640 / 10.43 ≈ 61.3
        assert_eq!(resolve((640, 480), (0, 0), TERM, RenderMode::Text), geom(61, 23));
    }

    #[test]
    fn text_mode_falls_back_to_width() {
        // 460 columns would overflow: width becomes 79, height 100 / 25.3 ≈ 3.95.
        assert_eq!(resolve((1000, 100), (0, 0), TERM, RenderMode::Text), geom(79, 4));
    }

    #[test]
    fn pixel_mode_fits_terminal_height() {
        assert_eq!(resolve((640, 480), (0, 0), TERM, RenderMode::Pixel), geom(61, 46));
    }

    #[test]
    fn pixel_mode_falls_back_to_width() {
        assert_eq!(resolve((1000, 100), (0, 0), TERM, RenderMode::Pixel), geom(79, 8));
    }

    #[test]
    fn degenerate_sizes_clamp_to_one() {
        let none = TerminalSize::default();
        assert_eq!(resolve((10, 1), (5, 0), none, RenderMode::Text), geom(5, 1));
        let tiny = TerminalSize { columns: 1, rows: 1 };
        let g = resolve((640, 480), (0, 0), tiny, RenderMode::Text).unwrap();
        assert!(g.width >= 1 && g.height >= 1);
    }
}
