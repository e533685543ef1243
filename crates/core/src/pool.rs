//! Trail pool: fixed-capacity arena of optional trail slots.
//!
//! Each free slot rolls for a spawn every frame, which gives a Poisson-like
//! arrival rate bounded by the pool capacity. Iteration is always in slot
//! order, so later slots draw over earlier ones when trails overlap.

use log::trace;

use crate::rng::RandomSource;
use crate::trail::Trail;
use crate::types::{RainConfig, Viewport};

/// Per-frame bookkeeping returned by [`TrailPool::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub spawned: usize,
    pub retired: usize,
    pub live: usize,
}

#[derive(Debug, Clone)]
pub struct TrailPool {
    slots: Vec<Option<Trail>>,
}

impl TrailPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Live trails in slot order.
    pub fn trails(&self) -> impl Iterator<Item = &Trail> {
        self.slots.iter().flatten()
    }

    pub fn slot(&self, index: usize) -> Option<&Trail> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Place a trail in the first free slot. Returns the slot index, or
    /// hands the trail back when the pool is full.
    pub fn insert(&mut self, trail: Trail) -> Result<usize, Trail> {
        match self.slots.iter().position(Option::is_none) {
            Some(i) => {
                self.slots[i] = Some(trail);
                Ok(i)
            }
            None => Err(trail),
        }
    }

    /// Run one frame of the trail lifecycle.
    ///
    /// Free slots may spawn a trail at a random column; a new trail is not
    /// advanced until the next frame. Occupied slots advance and are freed
    /// once their trail has fallen past the bottom of `viewport`.
    pub fn update(
        &mut self,
        viewport: Viewport,
        config: &RainConfig,
        rng: &mut impl RandomSource,
    ) -> PoolStats {
        let mut stats = PoolStats::default();

        for (i, slot) in self.slots.iter_mut().enumerate() {
            match slot {
                None => {
                    if rng.next_unit() < config.init_chance {
                        let column = rng.next_range(viewport.width as u32) as u16;
                        *slot = Some(Trail::new(column, rng));
                        stats.spawned += 1;
                        trace!("slot {}: spawned trail at column {}", i, column);
                    }
                }
                Some(trail) => {
                    trail.advance(config.speed, rng);
                    if trail.is_retired(viewport.height) {
                        *slot = None;
                        stats.retired += 1;
                        trace!("slot {}: retired trail", i);
                    } else {
                        stats.live += 1;
                    }
                }
            }
        }

        stats
    }
}

impl Default for TrailPool {
    fn default() -> Self {
        Self::new(crate::types::MAX_NUM_TRAILS)
    }
}
