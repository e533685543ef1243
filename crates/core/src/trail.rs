//! Trail: one falling column of glyphs.
//!
//! Row 0 is the top of the viewport and rows grow downward. A trail is
//! born fully above the viewport (`head_row = -length`) and falls until its
//! tail has left the bottom edge.

use arrayvec::ArrayVec;

use crate::glyph::next_glyph;
use crate::rng::RandomSource;
use crate::types::{MAX_TRAIL, MIN_TRAIL};

/// A falling column of glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    column: u16,
    head_row: i32,
    /// Index 0 is the leading (newest) glyph; the last index is the tail.
    glyphs: ArrayVec<u32, MAX_TRAIL>,
    phase: f32,
}

impl Trail {
    /// Create a trail with a random length in `[MIN_TRAIL, MAX_TRAIL)`.
    pub fn new(column: u16, rng: &mut impl RandomSource) -> Self {
        let length = MIN_TRAIL + rng.next_range((MAX_TRAIL - MIN_TRAIL) as u32) as usize;
        let glyphs = (0..length).map(|_| next_glyph(rng)).collect();
        Self {
            column,
            head_row: -(length as i32),
            glyphs,
            phase: 0.0,
        }
    }

    /// Build a trail from explicit parts.
    ///
    /// `glyphs` beyond `MAX_TRAIL` are dropped.
    pub fn from_parts(column: u16, head_row: i32, glyphs: &[u32]) -> Self {
        Self {
            column,
            head_row,
            glyphs: glyphs.iter().copied().take(MAX_TRAIL).collect(),
            phase: 0.0,
        }
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn head_row(&self) -> i32 {
        self.head_row
    }

    pub fn length(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyphs(&self) -> &[u32] {
        &self.glyphs
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Accumulate `speed` into the phase and fall one row per whole unit.
    ///
    /// Returns the number of rows fallen.
    pub fn advance(&mut self, speed: f32, rng: &mut impl RandomSource) -> u32 {
        self.phase += speed;
        let mut steps = 0;
        while self.phase >= 1.0 {
            self.step(rng);
            self.phase -= 1.0;
            steps += 1;
        }
        steps
    }

    /// Fall one row: the tail glyph drops off and a fresh glyph leads.
    fn step(&mut self, rng: &mut impl RandomSource) {
        self.head_row += 1;
        if self.glyphs.is_empty() {
            return;
        }
        self.glyphs.pop();
        self.glyphs.insert(0, next_glyph(rng));
    }

    /// True once the whole trail is below a viewport of `height` rows.
    pub fn is_retired(&self, height: u16) -> bool {
        self.head_row - self.length() as i32 > height as i32
    }
}
