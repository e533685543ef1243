//! RainFrame: one frame of the rain, from trail update to output bytes.
//!
//! Owns every per-frame buffer. Once the viewport is stable a frame does not
//! allocate: buffers are only grown when the terminal gets bigger.

use anyhow::{Context, Result};
use log::debug;

use crate::compositor::composite;
use crate::core::{PoolStats, RandomSource, TrailPool};
use crate::flatten::{flatten_into, output_len, BLANK};
use crate::grid::CellGrid;
use crate::types::{RainConfig, Viewport};

pub struct RainFrame {
    config: RainConfig,
    pool: TrailPool,
    grid: CellGrid,
    out: Vec<u8>,
    viewport: Option<Viewport>,
    last_stats: PoolStats,
}

impl RainFrame {
    pub fn new(config: RainConfig) -> Self {
        Self {
            pool: TrailPool::new(config.max_trails),
            config,
            grid: CellGrid::default(),
            out: Vec::new(),
            viewport: None,
            last_stats: PoolStats::default(),
        }
    }

    pub fn pool(&self) -> &TrailPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut TrailPool {
        &mut self.pool
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Viewport of the most recent frame.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Pool bookkeeping from the most recent frame.
    pub fn last_stats(&self) -> PoolStats {
        self.last_stats
    }

    /// Build the next frame for `viewport` and return the bytes to emit.
    pub fn render(&mut self, viewport: Viewport, rng: &mut impl RandomSource) -> Result<&[u8]> {
        self.resize(viewport)?;

        self.out.fill(BLANK);
        self.grid.clear();

        self.last_stats = self.pool.update(viewport, &self.config, rng);
        composite(&self.pool, &mut self.grid);

        let len = flatten_into(&self.grid, &mut self.out, self.config.row_separator);
        Ok(&self.out[..len])
    }

    /// Track `viewport`, growing buffers as needed.
    fn resize(&mut self, viewport: Viewport) -> Result<()> {
        if self.viewport == Some(viewport) {
            return Ok(());
        }
        let fail = || {
            format!(
                "buffer allocation failed ({}x{})",
                viewport.width, viewport.height
            )
        };

        self.grid.try_resize(viewport).with_context(fail)?;

        let len = output_len(viewport);
        if len > self.out.len() {
            self.out
                .try_reserve_exact(len - self.out.len())
                .with_context(fail)?;
        }
        self.out.resize(len, BLANK);

        debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = Some(viewport);
        Ok(())
    }
}

impl Default for RainFrame {
    fn default() -> Self {
        Self::new(RainConfig::default())
    }
}
