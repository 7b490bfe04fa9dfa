//! Session commands
//!
//! Idle --start--> Running --collision--> GameOver --restart--> Running
//!
//! Every command is a synchronous transition on [`GameState`].

use super::physics;
use super::state::{GamePhase, GameState};

impl GameState {
    /// Leave the menu and begin a run. Ignored unless idle.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            log::warn!("start ignored in phase {:?}", self.phase);
            return false;
        }
        self.reset_run();
        self.phase = GamePhase::Running;
        log::info!("Run started (seed {})", self.seed);
        true
    }

    /// Throw away the current run and begin a fresh one
    pub fn restart(&mut self) {
        let previous = self.score;
        self.reset_run();
        self.phase = GamePhase::Running;
        log::info!("Run restarted (previous score {})", previous);
    }

    /// Turn autoplay on or off; returns the new setting
    pub fn toggle_autoplay(&mut self) -> bool {
        let enabled = self.autopilot.toggle();
        log::info!("Autoplay: {}", if enabled { "ON" } else { "OFF" });
        enabled
    }

    /// Flap. Only has an effect while running.
    pub fn apply_impulse(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        physics::flap(&mut self.actor, self.tuning.flap_velocity);
        true
    }

    /// Running -> GameOver. Happens at most once per run.
    pub(crate) fn end_run(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over at tick {} with score {}",
            self.time_ticks,
            self.score
        );
        true
    }
}
