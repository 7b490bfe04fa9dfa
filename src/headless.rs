//! Headless driver
//!
//! Runs a session without a display: a plain loop stands in for
//! `requestAnimationFrame` and the wall clock is simulated at a fixed frame
//! time so runs are reproducible.

use std::path::PathBuf;

use clap::Parser;

use crate::render::{FrameView, RenderSurface};
use crate::sim::{GamePhase, GameState, Snapshot, TickInput, tick};
use crate::tuning::Tuning;

/// 60 Hz display refresh
pub const DEFAULT_FRAME_MS: f64 = 1000.0 / 60.0;

/// Options for a headless run
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "skyflap")]
#[command(about = "Play Skyflap headless and print the final frame as JSON", long_about = None)]
pub struct RunOptions {
    /// Seed for gap placement
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Upper bound on ticks; the run also stops at game over
    #[arg(long = "ticks", default_value_t = 10_000)]
    pub max_ticks: u64,

    /// Tuning JSON file (missing fields keep their defaults)
    #[arg(long)]
    pub tuning: Option<PathBuf>,

    /// Disable autoplay; nobody flaps
    #[arg(long, default_value_t = false)]
    pub manual: bool,

    /// Simulated wall-clock time per frame (ms)
    #[arg(long, default_value_t = DEFAULT_FRAME_MS)]
    pub frame_ms: f64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::parse_from(["skyflap"])
    }
}

impl RunOptions {
    #[inline]
    pub fn autoplay(&self) -> bool {
        !self.manual
    }
}

/// Play one session to game over (or `max_ticks`) and return the final state
pub fn run<S: RenderSurface>(opts: &RunOptions, tuning: Tuning, surface: &mut S) -> Snapshot {
    let mut state = GameState::new(opts.seed, tuning);
    if opts.autoplay() {
        state.toggle_autoplay();
    }
    state.start();

    for frame in 0..opts.max_ticks {
        let input = TickInput {
            flap: false,
            now_ms: frame as f64 * opts.frame_ms,
        };
        let report = tick(&mut state, &input);
        surface.present(&FrameView::from_state(&state));
        if report.scored {
            log::debug!("passed obstacle {} at tick {}", state.score, state.time_ticks);
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Run finished: {:?} after {} ticks, score {}",
        state.phase,
        state.time_ticks,
        state.score
    );
    state.snapshot()
}
