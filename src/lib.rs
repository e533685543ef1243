//! Matrix rain (workspace facade crate).
//!
//! Re-exports the member crates as `matrix_rain::{types,core,term}` so the
//! binary, tests and benches share one import path.

pub use matrix_rain_core as core;
pub use matrix_rain_term as term;
pub use matrix_rain_types as types;
