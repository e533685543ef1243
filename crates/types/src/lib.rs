//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they
//! can be used by the simulation, the compositor and the terminal driver alike.
//!
//! # Animation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPEED` | 0.5 | Rows a trail falls per frame (fractional speeds accumulate) |
//! | `FPS` | 30.0 | Target frame rate |
//! | `MIN_TRAIL` | 14 | Shortest trail length (inclusive) |
//! | `MAX_TRAIL` | 20 | Longest trail length (exclusive) and glyph capacity |
//! | `INIT_CHANCE` | 1e-3 | Per-frame spawn chance for each free pool slot |
//! | `MAX_NUM_TRAILS` | 1024 | Trail pool capacity |
//!
//! # Buffer Constants
//!
//! - `CELL_CAPACITY`: 32 bytes per intermediate cell. The longest render is a
//!   19-byte truecolor escape, a 3-byte glyph and a 5-byte reset (27 bytes).
//! - `DEFAULT_WIDTH` x `DEFAULT_HEIGHT`: 80x24, substituted when the terminal
//!   size query fails or reports zero.
//!
//! # Examples
//!
//! ```
//! use matrix_rain_types::{RainConfig, Viewport, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let vp = Viewport::clamped(0, 40);
//! assert_eq!(vp, Viewport::new(DEFAULT_WIDTH, 40));
//! assert_eq!(Viewport::clamped(0, 0).height, DEFAULT_HEIGHT);
//!
//! let config = RainConfig::default();
//! assert_eq!(config.frame_budget().as_micros(), 33_333);
//! ```

use std::time::Duration;

/// Rows a trail falls per frame.
pub const SPEED: f32 = 0.5;

/// Target frames per second.
pub const FPS: f64 = 30.0;

/// Minimum trail length (inclusive).
pub const MIN_TRAIL: usize = 14;

/// Maximum trail length (exclusive). Also the glyph capacity of a trail.
pub const MAX_TRAIL: usize = 20;

/// Chance that a free pool slot spawns a trail on a given frame.
pub const INIT_CHANCE: f32 = 1e-3;

/// Number of slots in the trail pool.
pub const MAX_NUM_TRAILS: usize = 1024;

/// Byte capacity of one intermediate buffer cell.
pub const CELL_CAPACITY: usize = 32;

/// Fallback terminal width.
pub const DEFAULT_WIDTH: u16 = 80;

/// Fallback terminal height.
pub const DEFAULT_HEIGHT: u16 = 24;

/// Frames whose leftover budget is below this are not paced.
pub const SLEEP_THRESHOLD_US: u64 = 1024;

/// Byte emitted between rows on terminals that need an explicit line feed.
#[cfg(not(windows))]
pub const ROW_SEPARATOR: Option<u8> = Some(b'\n');

/// The Windows console wraps full rows by itself.
#[cfg(windows)]
pub const ROW_SEPARATOR: Option<u8> = None;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Terminal viewport dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Substitute the 80x24 default for any zero dimension.
    pub fn clamped(width: u16, height: u16) -> Self {
        Self {
            width: if width == 0 { DEFAULT_WIDTH } else { width },
            height: if height == 0 { DEFAULT_HEIGHT } else { height },
        }
    }

    /// Number of cells covered by the viewport.
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Animation tunables.
///
/// `RainConfig::default()` mirrors the compile-time constants above; tests
/// build their own to force spawning or change the row separator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainConfig {
    pub speed: f32,
    pub fps: f64,
    pub init_chance: f32,
    pub max_trails: usize,
    pub row_separator: Option<u8>,
}

impl RainConfig {
    /// Wall-clock time available to one frame.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_micros((1_000_000.0 / self.fps) as u64)
    }
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            speed: SPEED,
            fps: FPS,
            init_chance: INIT_CHANCE,
            max_trails: MAX_NUM_TRAILS,
            row_separator: ROW_SEPARATOR,
        }
    }
}
