//! Core rain simulation - pure, deterministic, and testable
//!
//! This crate owns the animation state: which trails exist, where they are,
//! and which glyphs they show. It has **zero dependencies** on terminals or
//! I/O, so the same seed always produces the same rain.
//!
//! # Module Structure
//!
//! - [`rng`]: injected random source and a small LCG
//! - [`glyph`]: katakana/ASCII glyph source
//! - [`trail`]: one falling column with a speed phase accumulator
//! - [`pool`]: fixed-capacity arena of trail slots, spawning and retiring
//!
//! # Example
//!
//! ```
//! use matrix_rain_core::{SimpleRng, TrailPool};
//! use matrix_rain_types::{RainConfig, Viewport};
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut pool = TrailPool::default();
//! let config = RainConfig::default();
//!
//! for _ in 0..100 {
//!     pool.update(Viewport::new(80, 24), &config, &mut rng);
//! }
//! assert!(pool.trails().all(|t| t.column() < 80));
//! ```

pub mod glyph;
pub mod pool;
pub mod rng;
pub mod trail;

pub use matrix_rain_types as types;

pub use glyph::next_glyph;
pub use pool::{PoolStats, TrailPool};
pub use rng::{RandomSource, SimpleRng};
pub use trail::Trail;
