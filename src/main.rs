//! Terminal digital rain (default binary).
//!
//! Draws falling glyph trails straight into the terminal with escape
//! sequences until interrupted. The terminal size is re-read every frame,
//! so the rain follows resizes.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::{info, warn};

use matrix_rain::core::SimpleRng;
use matrix_rain::term::{
    install_panic_hook, renderer, run_session, FramePacer, RainFrame, RunSignals,
    TerminalRenderer,
};
use matrix_rain::types::RainConfig;

fn main() -> Result<()> {
    init_logging();
    install_panic_hook();

    let signals = RunSignals::new();
    register_signals(&signals);

    let config = RainConfig::default();
    let pacer = FramePacer::from_config(&config);
    let mut frame = RainFrame::new(config);
    let mut rng = SimpleRng::new(clock_seed());
    let mut term = TerminalRenderer::new();

    info!(
        "raining: {} slots, {:?} per frame",
        config.max_trails,
        pacer.budget()
    );

    run_session(
        &mut term,
        &mut frame,
        &mut rng,
        &pacer,
        &signals,
        renderer::viewport,
    )
}

/// Log to a file, and only when asked: stdout and stderr belong to the rain.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let path = std::env::temp_dir().join("matrix-rain.log");
    let Ok(log_file) = File::create(&path) else {
        return;
    };
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    info!("logging to {}", path.display());
}

#[cfg(unix)]
fn register_signals(signals: &RunSignals) {
    use std::sync::Arc;
    use std::thread;

    use matrix_rain::term::restore_terminal_best_effort;
    use signal_hook::consts::{SIGCONT, SIGHUP, SIGINT, SIGSTOP, SIGTERM, SIGTSTP};
    use signal_hook::iterator::Signals;
    use signal_hook::low_level;

    for sig in [SIGINT, SIGTERM, SIGHUP] {
        if let Err(e) = signal_hook::flag::register(sig, Arc::clone(signals.stop_flag())) {
            warn!("failed to install handler for signal {}: {}", sig, e);
        }
    }

    // Ctrl-Z: hand the shell a usable screen, set ours up again on resume.
    match Signals::new([SIGTSTP, SIGCONT]) {
        Ok(mut job_control) => {
            let signals = signals.clone();
            thread::spawn(move || {
                for sig in job_control.forever() {
                    match sig {
                        SIGTSTP => {
                            restore_terminal_best_effort();
                            let _ = low_level::raise(SIGSTOP);
                        }
                        SIGCONT => signals.request_resume(),
                        _ => {}
                    }
                }
            });
        }
        Err(e) => warn!("failed to install job control handlers: {}", e),
    }
}

#[cfg(windows)]
fn register_signals(signals: &RunSignals) {
    let signals = signals.clone();
    if let Err(e) = ctrlc::set_handler(move || signals.request_stop()) {
        warn!("failed to install Ctrl-C handler: {}", e);
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
