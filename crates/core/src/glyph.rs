//! Glyph source: random display characters for the rain.
//!
//! Glyphs are Unicode code points. Three in five come from the half-width
//! katakana block (U+FF66..=U+FF9D); the rest from a short ASCII set.

use crate::rng::RandomSource;

/// ASCII glyphs mixed into the katakana.
pub const ASCII_GLYPHS: &[u8] = b"0123456789*+-<=>|";

/// First code point of the katakana block we draw from.
pub const KATAKANA_START: u32 = 0xFF66;

/// Number of consecutive katakana code points in the block.
pub const KATAKANA_COUNT: u32 = 0x38;

/// Draw one glyph.
pub fn next_glyph(rng: &mut impl RandomSource) -> u32 {
    if rng.next_range(5) < 3 {
        return KATAKANA_START + rng.next_range(KATAKANA_COUNT);
    }
    ASCII_GLYPHS[rng.next_range(ASCII_GLYPHS.len() as u32) as usize] as u32
}

/// True when `cp` belongs to the glyph universe.
pub fn is_rain_glyph(cp: u32) -> bool {
    (KATAKANA_START..KATAKANA_START + KATAKANA_COUNT).contains(&cp)
        || (cp < 0x80 && ASCII_GLYPHS.contains(&(cp as u8)))
}
