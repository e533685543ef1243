//! Frame driver: the running loop around [`RainFrame`].
//!
//! Interrupts are cooperative. Signal handlers only flip flags in
//! [`RunSignals`]; the loop looks at them once per frame, before the size
//! query, and does all terminal work on its own stack.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::{debug, info};

use crate::core::RandomSource;
use crate::frame::RainFrame;
use crate::pacing::FramePacer;
use crate::renderer::TerminalRenderer;
use crate::types::Viewport;

/// Flags shared with signal handlers.
#[derive(Debug, Clone, Default)]
pub struct RunSignals {
    stop: Arc<AtomicBool>,
    resume: Arc<AtomicBool>,
}

impl RunSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag that ends the loop at the next frame boundary.
    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stop
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Make the loop set the terminal up again (after job-control suspension).
    pub fn request_resume(&self) {
        self.resume.store(true, Ordering::SeqCst);
    }

    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

/// Enter the alternate screen, rain until stopped, then always restore the
/// terminal. The loop's error, if any, wins over a cleanup error.
pub fn run_session<W: Write>(
    term: &mut TerminalRenderer<W>,
    frame: &mut RainFrame,
    rng: &mut impl RandomSource,
    pacer: &FramePacer,
    signals: &RunSignals,
    viewport: impl FnMut() -> Viewport,
) -> Result<()> {
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e.context("Not supported"));
    }
    let result = run(term, frame, rng, pacer, signals, viewport);
    let restored = term.exit();
    info!("stopped");
    result.and(restored)
}

/// Render frames until the stop flag is set.
pub fn run<W: Write>(
    term: &mut TerminalRenderer<W>,
    frame: &mut RainFrame,
    rng: &mut impl RandomSource,
    pacer: &FramePacer,
    signals: &RunSignals,
    mut viewport: impl FnMut() -> Viewport,
) -> Result<()> {
    while !signals.should_stop() {
        let frame_start = Instant::now();

        if signals.resume.swap(false, Ordering::SeqCst) {
            debug!("resumed, setting terminal up again");
            term.enter()?;
        }

        let bytes = frame.render(viewport(), rng)?;
        term.draw(bytes)?;

        pacer.pace(frame_start);
    }
    Ok(())
}
