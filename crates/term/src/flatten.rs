//! Frame flattener: packs the cell grid into one terminal-ready byte run.
//!
//! Cells hold variable-length renders, so the output cursor advances by each
//! cell's stored byte count. Empty cells advance by one byte over the blank
//! fill already present in the output buffer.

use crate::grid::CellGrid;
use crate::types::{Viewport, CELL_CAPACITY};

/// Fill byte for empty cells.
pub const BLANK: u8 = b' ';

/// Worst-case output length for `viewport`: every cell at full capacity
/// plus one separator per row.
pub fn output_len(viewport: Viewport) -> usize {
    viewport.area() * CELL_CAPACITY + viewport.height as usize
}

/// Flatten `grid` into `out` and return the number of bytes to emit.
///
/// `out` must already be filled with [`BLANK`]. `separator`, when set, is
/// written before every row but the first.
///
/// # Panics
///
/// Panics if `out` is shorter than [`output_len`] for the grid's viewport.
pub fn flatten_into(grid: &CellGrid, out: &mut [u8], separator: Option<u8>) -> usize {
    let need = output_len(grid.viewport());
    assert!(
        out.len() >= need,
        "output buffer too small: {} < {}",
        out.len(),
        need
    );

    let mut ptr = 0;
    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            if let Some(sep) = separator {
                out[ptr] = sep;
                ptr += 1;
            }
        }

        for cell in row {
            if cell.is_empty() {
                ptr += 1;
                continue;
            }
            let bytes = cell.as_bytes();
            out[ptr..ptr + bytes.len()].copy_from_slice(bytes);
            ptr += bytes.len();
        }
    }
    ptr
}
