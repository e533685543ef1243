//! Intermediate cell grid.
//!
//! One fixed-capacity byte slot per terminal position. A slot is either
//! empty or holds a complete colorized glyph render. All `(column, row)`
//! addressing goes through [`CellGrid::index`].

use std::collections::TryReserveError;

use arrayvec::ArrayVec;

use crate::types::{Viewport, CELL_CAPACITY};

/// A single intermediate buffer slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    bytes: ArrayVec<u8, CELL_CAPACITY>,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut ArrayVec<u8, CELL_CAPACITY> {
        &mut self.bytes
    }
}

/// Row-major grid of [`Cell`]s covering the viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            cells: vec![Cell::default(); viewport.area()],
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Resize to `viewport`, keeping the allocation when it is large enough.
    ///
    /// Cell contents are unspecified afterward; call [`clear`](Self::clear).
    pub fn try_resize(&mut self, viewport: Viewport) -> Result<(), TryReserveError> {
        let len = viewport.area();
        if len > self.cells.len() {
            self.cells.try_reserve_exact(len - self.cells.len())?;
        }
        self.cells.resize(len, Cell::default());
        self.width = viewport.width;
        self.height = viewport.height;
        Ok(())
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }

    /// Slot index for `(column, row)`, or `None` outside the grid.
    #[inline(always)]
    pub fn index(&self, column: u16, row: i32) -> Option<usize> {
        if column >= self.width || row < 0 || row >= self.height as i32 {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (column as usize))
    }

    pub fn get(&self, column: u16, row: i32) -> Option<&Cell> {
        self.index(column, row).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, column: u16, row: i32) -> Option<&mut Cell> {
        self.index(column, row).map(|i| &mut self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows, each a `width`-long slice.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}
