//! Tables de palette fixes : rampe de gris (sélection du caractère) et
//! palette xterm 256 couleurs (couleur de sortie).
//!
//! Both tables are computed at compile time and never change.

/// An 8-bit-per-channel RGB triple.
pub type Rgb = (u8, u8, u8);

/// Number of entries in the grayscale ramp.
pub const GRAY_RAMP_LEN: usize = 26;

/// Number of entries in the color ramp.
pub const COLOR_RAMP_LEN: usize = 256;

/// Grayscale ramp: black, white, then the 24-step xterm gray slide.
///
/// Index `i` of this ramp corresponds to terminal color
/// [`gray_to_color_index`]`(i)`.
///
/// # Example
/// ```
/// use tg_core::palette::GRAY_RAMP;
/// assert_eq!(GRAY_RAMP[0], (0, 0, 0));
/// assert_eq!(GRAY_RAMP[1], (255, 255, 255));
/// assert_eq!(GRAY_RAMP[2], (8, 8, 8));
/// assert_eq!(GRAY_RAMP[25], (238, 238, 238));
/// ```
pub const GRAY_RAMP: [Rgb; GRAY_RAMP_LEN] = build_gray_ramp();

/// Full xterm 256-color palette.
///
/// # Example
/// ```
/// use tg_core::palette::COLOR_RAMP;
/// assert_eq!(COLOR_RAMP[9], (255, 0, 0));
/// assert_eq!(COLOR_RAMP[16], (0, 0, 0));
/// assert_eq!(COLOR_RAMP[231], (255, 255, 255));
/// assert_eq!(COLOR_RAMP[255], (238, 238, 238));
/// ```
pub const COLOR_RAMP: [Rgb; COLOR_RAMP_LEN] = build_color_ramp();

/// The 16 system colors, in the usual xterm rendering.
const SYSTEM_COLORS: [Rgb; 16] = [
    (0x00, 0x00, 0x00),
    (0x80, 0x00, 0x00),
    (0x00, 0x80, 0x00),
    (0x80, 0x80, 0x00),
    (0x00, 0x00, 0x80),
    (0x80, 0x00, 0x80),
    (0x00, 0x80, 0x80),
    (0xc0, 0xc0, 0xc0),
    (0x80, 0x80, 0x80),
    (0xff, 0x00, 0x00),
    (0x00, 0xff, 0x00),
    (0xff, 0xff, 0x00),
    (0x00, 0x00, 0xff),
    (0xff, 0x00, 0xff),
    (0x00, 0xff, 0xff),
    (0xff, 0xff, 0xff),
];

/// Channel levels of the 6×6×6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

const fn gray_slide(step: u8) -> u8 {
    8 + 10 * step
}

const fn build_color_ramp() -> [Rgb; COLOR_RAMP_LEN] {
    let mut table = [(0u8, 0u8, 0u8); COLOR_RAMP_LEN];
    let mut i = 0;
    while i < 16 {
        table[i] = SYSTEM_COLORS[i];
        i += 1;
    }
    while i < 232 {
        let c = i - 16;
        table[i] = (
            CUBE_LEVELS[c / 36],
            CUBE_LEVELS[(c / 6) % 6],
            CUBE_LEVELS[c % 6],
        );
        i += 1;
    }
    while i < COLOR_RAMP_LEN {
        let v = gray_slide((i - 232) as u8);
        table[i] = (v, v, v);
        i += 1;
    }
    table
}

const fn build_gray_ramp() -> [Rgb; GRAY_RAMP_LEN] {
    let mut table = [(0u8, 0u8, 0u8); GRAY_RAMP_LEN];
    table[1] = (0xff, 0xff, 0xff);
    let mut i = 2;
    while i < GRAY_RAMP_LEN {
        let v = gray_slide((i - 2) as u8);
        table[i] = (v, v, v);
        i += 1;
    }
    table
}

/// Map a grayscale-ramp index to the matching entry of [`COLOR_RAMP`].
///
/// 0 stays 0 (black), 1 becomes 15 (white), everything else lands on the
/// gray slide at 232..=255.
///
/// # Example
/// ```
/// use tg_core::palette::gray_to_color_index;
/// assert_eq!(gray_to_color_index(0), 0);
/// assert_eq!(gray_to_color_index(1), 15);
/// assert_eq!(gray_to_color_index(2), 232);
/// ```
#[inline(always)]
#[must_use]
pub const fn gray_to_color_index(idx: u8) -> u8 {
    match idx {
        0 => 0,
        1 => 15,
        i => i + 230,
    }
}

/// Inverse of [`gray_to_color_index`], used to key HTML classes in
/// grayscale mode.
///
/// # Example
/// ```
/// use tg_core::palette::color_to_gray_index;
/// assert_eq!(color_to_gray_index(15), 1);
/// assert_eq!(color_to_gray_index(255), 25);
/// ```
#[inline(always)]
#[must_use]
pub const fn color_to_gray_index(idx: u8) -> u8 {
    match idx {
        0 => 0,
        15 => 1,
        i => i.saturating_sub(230),
    }
}

/// Widen an 8-bit channel into the 16-bit space used for distances.
#[inline(always)]
#[must_use]
pub const fn widen(c: u8) -> u32 {
    c as u32 * 0x101
}

/// Index of the ramp entry closest to `target` (16-bit channels).
///
/// Plain Euclidean distance in RGB space; on ties the first entry wins.
///
/// # Example
/// ```
/// use tg_core::palette::nearest_index;
/// let ramp = [(0, 0, 0), (255, 255, 255)];
/// assert_eq!(nearest_index(&ramp, (10 * 257, 10 * 257, 10 * 257)), 0);
/// assert_eq!(nearest_index(&ramp, (250 * 257, 250 * 257, 250 * 257)), 1);
/// ```
#[must_use]
pub fn nearest_index(ramp: &[Rgb], target: (u32, u32, u32)) -> usize {
    let mut best = 0;
    let mut best_distance = u64::MAX;
    for (i, &(r, g, b)) in ramp.iter().enumerate() {
        let distance = channel_delta(widen(r), target.0)
            + channel_delta(widen(g), target.1)
            + channel_delta(widen(b), target.2);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

#[inline(always)]
fn channel_delta(a: u32, b: u32) -> u64 {
    let d = u64::from(a.abs_diff(b));
    d * d
}

/// Pack an entry as `0xRRGGBB`, for CSS color rules.
///
/// # Example
/// ```
/// use tg_core::palette::to_hex;
/// assert_eq!(format!("#{:06x}", to_hex((0x12, 0xab, 0x05))), "#12ab05");
/// ```
#[must_use]
pub const fn to_hex(rgb: Rgb) -> u32 {
    ((rgb.0 as u32) << 16) | ((rgb.1 as u32) << 8) | rgb.2 as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_ramp_matches_color_ramp_through_remap() {
        for (i, &entry) in GRAY_RAMP.iter().enumerate() {
            let color = gray_to_color_index(i as u8);
            assert_eq!(COLOR_RAMP[color as usize], entry, "gray index {i}");
        }
    }

    #[test]
    fn remap_round_trips() {
        for i in 0..GRAY_RAMP_LEN as u8 {
            assert_eq!(color_to_gray_index(gray_to_color_index(i)), i);
        }
    }

    #[test]
    fn cube_corners() {
        assert_eq!(COLOR_RAMP[21], (0, 0, 255));
        assert_eq!(COLOR_RAMP[196], (255, 0, 0));
        assert_eq!(COLOR_RAMP[46], (0, 255, 0));
        assert_eq!(COLOR_RAMP[59], (95, 95, 95));
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        // Both 15 and 231 are pure white.
        let white = (widen(255), widen(255), widen(255));
        assert_eq!(nearest_index(&COLOR_RAMP, white), 15);
    }

    #[test]
    fn nearest_finds_exact_cube_entry() {
        let target = (widen(135), widen(175), widen(215));
        let idx = nearest_index(&COLOR_RAMP, target);
        assert_eq!(COLOR_RAMP[idx], (135, 175, 215));
    }
}
