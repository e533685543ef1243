//! Terminal rendering pipeline for the rain.
//!
//! Renders through two buffers instead of a widget layer:
//!
//! - [`compositor`] draws live trails into a [`CellGrid`] of fixed-size byte
//!   slots, one colorized glyph per slot
//! - [`flatten`] packs the grid into a single byte run with row breaks
//! - [`renderer`] writes that run to the terminal in place
//!
//! [`RainFrame`] ties the steps together for one frame, [`FramePacer`]
//! holds the frame rate and [`driver`] runs the loop until interrupted.

pub mod compositor;
pub mod driver;
pub mod flatten;
pub mod frame;
pub mod grid;
pub mod pacing;
pub mod renderer;
pub mod utf8;

pub use matrix_rain_core as core;
pub use matrix_rain_types as types;

pub use compositor::{calc_colour, composite, write_trail};
pub use driver::{run_session, RunSignals};
pub use flatten::{flatten_into, output_len};
pub use frame::RainFrame;
pub use grid::{Cell, CellGrid};
pub use pacing::FramePacer;
pub use renderer::{install_panic_hook, restore_terminal_best_effort, TerminalRenderer};
