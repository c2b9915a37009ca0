//! Advance widths of the base-14 Helvetica faces, in 1/1000 em.

use wipecert_render_core::FontFace;

const FIRST_CHAR: u32 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// Used for anything outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

fn glyph_width(face: FontFace, c: char) -> u16 {
    let table = match face {
        FontFace::Regular => &HELVETICA,
        FontFace::Bold => &HELVETICA_BOLD,
    };
    (c as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Width of `text` in points when set in `face` at `size`.
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(face, c) as u32).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        // "Hello" = 722 + 556 + 222 + 222 + 556
        assert!((text_width("Hello", FontFace::Regular, 10.0) - 22.78).abs() < 0.001);
        assert!(text_width("Hello", FontFace::Bold, 10.0) > text_width("Hello", FontFace::Regular, 10.0));
    }

    #[test]
    fn test_empty_and_fallback() {
        assert_eq!(text_width("", FontFace::Regular, 12.0), 0.0);
        assert!((text_width("é", FontFace::Regular, 1000.0) - 556.0).abs() < 0.001);
    }
}
