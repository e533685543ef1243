//! Compositor: maps live trails into the intermediate cell grid.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each trail glyph becomes a self-contained cell render: a truecolor
//! foreground escape, the UTF-8 glyph and a foreground reset. The tail-most
//! glyph is the one being erased this frame and is never drawn. Trails are
//! drawn in pool slot order, so the last trail to touch a cell wins.

use std::io::Write;

use crate::core::{Trail, TrailPool};
use crate::grid::{Cell, CellGrid};
use crate::types::Rgb;
use crate::utf8;

/// Colour of the leading glyph.
pub const HEAD_COLOUR: Rgb = Rgb::new(200, 200, 200);

/// Resets the foreground colour only.
pub const RESET_COLOUR: &[u8] = b"\x1b[39m";

/// Colour for glyph `index` of a trail of `length` glyphs.
///
/// Index 0 is the bright head; the rest fade linearly along a dark green ramp.
pub fn calc_colour(index: usize, length: usize) -> Rgb {
    if index == 0 {
        return HEAD_COLOUR;
    }
    let coeff = 1.0 - (index as f64 / (length as f64 * 1.1));
    // `as u8` saturates, clamping the ramp to byte range.
    Rgb::new(
        (40.0 * coeff) as u8,
        (255.0 * coeff) as u8,
        (40.0 * coeff) as u8,
    )
}

/// Draw every live trail in `pool` into `grid`.
pub fn composite(pool: &TrailPool, grid: &mut CellGrid) {
    for trail in pool.trails() {
        write_trail(trail, grid);
    }
}

/// Draw one trail. Glyphs outside the grid are skipped.
pub fn write_trail(trail: &Trail, grid: &mut CellGrid) {
    let length = trail.length();
    for (j, &glyph) in trail.glyphs().iter().enumerate().take(length.saturating_sub(1)) {
        let row = trail.head_row() - j as i32;
        let Some(cell) = grid.get_mut(trail.column(), row) else {
            continue;
        };
        render_glyph(cell, calc_colour(j, length), glyph);
    }
}

/// Overwrite `cell` with a colorized glyph.
///
/// Returns false and leaves the cell empty if the render does not fit.
pub fn render_glyph(cell: &mut Cell, fg: Rgb, glyph: u32) -> bool {
    cell.clear();
    let bytes = cell.bytes_mut();

    if write!(bytes, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b).is_err() {
        bytes.clear();
        return false;
    }

    let mut encoded = [0u8; 4];
    let room = bytes
        .remaining_capacity()
        .saturating_sub(RESET_COLOUR.len())
        .min(encoded.len());
    let n = utf8::encode(&[glyph], &mut encoded[..room]);

    if n == 0
        || bytes.try_extend_from_slice(&encoded[..n]).is_err()
        || bytes.try_extend_from_slice(RESET_COLOUR).is_err()
    {
        bytes.clear();
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Viewport, CELL_CAPACITY};

    #[test]
    fn head_colour_ignores_length() {
        for length in [1, 2, 14, 19, 100] {
            assert_eq!(calc_colour(0, length), HEAD_COLOUR);
        }
    }

    #[test]
    fn fade_decreases_toward_tail() {
        let length = 18;
        let mut prev = calc_colour(1, length);
        for j in 2..length {
            let c = calc_colour(j, length);
            assert!(c.g < prev.g, "j={} {:?} !< {:?}", j, c, prev);
            assert!(c.r <= prev.r && c.b <= prev.b);
            prev = c;
        }
        // The tail never fades to black.
        assert!(prev.g > 0);
    }

    #[test]
    fn fade_coefficient_values() {
        // 1 - 1/(10*1.1) = 0.90909..
        assert_eq!(calc_colour(1, 10), Rgb::new(36, 231, 36));
    }

    #[test]
    fn render_is_escape_glyph_reset() {
        let mut cell = Cell::default();
        assert!(render_glyph(&mut cell, Rgb::new(1, 22, 255), 0xFF71));
        let expected = "\x1b[38;2;1;22;255mｱ\x1b[39m";
        assert_eq!(cell.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn widest_render_fits_cell() {
        let mut cell = Cell::default();
        assert!(render_glyph(&mut cell, Rgb::new(255, 255, 255), 0x10FFFF));
        assert!(cell.len() <= CELL_CAPACITY);
        assert!(cell.as_bytes().ends_with(RESET_COLOUR));
    }

    #[test]
    fn tail_glyph_is_not_drawn() {
        let mut grid = CellGrid::new(Viewport::new(1, 3));
        let trail = Trail::from_parts(0, 2, &[b'a' as u32, b'b' as u32, b'c' as u32]);
        write_trail(&trail, &mut grid);

        assert!(!grid.get(0, 2).unwrap().is_empty());
        assert!(!grid.get(0, 1).unwrap().is_empty());
        assert!(grid.get(0, 0).unwrap().is_empty());
    }

    #[test]
    fn out_of_bounds_glyphs_are_skipped() {
        let mut grid = CellGrid::new(Viewport::new(4, 4));
        // Column outside the grid entirely.
        write_trail(&Trail::from_parts(9, 2, &[b'1' as u32; 5]), &mut grid);
        // Head below the bottom edge, partly visible.
        write_trail(&Trail::from_parts(0, 6, &[b'2' as u32; 5]), &mut grid);
        // Still above the top edge.
        write_trail(&Trail::from_parts(1, -1, &[b'3' as u32; 5]), &mut grid);

        let drawn: Vec<_> = (0..4)
            .flat_map(|y| (0..4u16).map(move |x| (x, y)))
            .filter(|&(x, y)| !grid.get(x, y).unwrap().is_empty())
            .collect();
        // Column 0 covers rows 6..=3; only row 3 is on screen.
        assert_eq!(drawn, vec![(0, 3)]);
    }

    #[test]
    fn later_trail_overwrites_earlier() {
        let mut pool = TrailPool::new(2);
        pool.insert(Trail::from_parts(0, 0, &[b'A' as u32, b'x' as u32]))
            .unwrap();
        pool.insert(Trail::from_parts(0, 0, &[b'B' as u32, b'x' as u32]))
            .unwrap();

        let mut grid = CellGrid::new(Viewport::new(1, 1));
        composite(&pool, &mut grid);

        let cell = grid.get(0, 0).unwrap().as_bytes();
        assert!(cell.contains(&b'B'));
        assert!(!cell.contains(&b'A'));
    }
}
