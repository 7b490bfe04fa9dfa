//! Game state and core simulation types
//!
//! Everything one session needs lives in [`GameState`]; there are no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::autoplay::Autopilot;
use super::obstacles::ObstacleField;
use crate::consts::ANIM_FRAME_COUNT;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu, nothing simulated yet
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; the last frame stays on screen
    GameOver,
}

/// The bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner. `x` never changes during a run.
    pub pos: Vec2,
    /// Bounding box width/height
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub vel: f32,
}

impl Actor {
    /// Fresh bird at the start position, at rest
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.actor_x, tuning.actor_start_y),
            size: Vec2::new(tuning.actor_width, tuning.actor_height),
            vel: 0.0,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A pipe pair: solid above `gap_top`, solid below `gap_top + gap_size`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top edge of the gap
    pub gap_top: f32,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    #[inline]
    pub fn gap_bottom(&self, gap_size: f32) -> f32 {
        self.gap_top + gap_size
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Constants in effect
    pub tuning: Tuning,
    /// Gap placement RNG
    pub rng: Pcg32,
    /// Simulation tick counter (reset on start)
    pub time_ticks: u64,
    /// Obstacles passed this run
    pub score: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The bird
    pub actor: Actor,
    /// Obstacles in creation order
    pub field: ObstacleField,
    /// Autoplay toggle and cooldown clock
    pub autopilot: Autopilot,
}

impl GameState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            score: 0,
            phase: GamePhase::Idle,
            actor: Actor::spawn(&tuning),
            field: ObstacleField::new(),
            autopilot: Autopilot::default(),
            tuning,
        }
    }

    /// Put tick, score, bird and obstacles back to their initial values
    pub(crate) fn reset_run(&mut self) {
        self.time_ticks = 0;
        self.score = 0;
        self.actor = Actor::spawn(&self.tuning);
        self.field.clear();
    }

    /// Wing animation frame index. The period is tunable; the frame count is
    /// the number of bird sprites and stays a constant.
    pub fn anim_frame(&self) -> usize {
        ((self.time_ticks / self.tuning.anim_ticks_per_frame) % ANIM_FRAME_COUNT) as usize
    }

    /// Copy of everything observable about the run
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time_ticks: self.time_ticks,
            score: self.score,
            phase: self.phase,
            actor: self.actor.clone(),
            obstacles: self.field.iter().copied().collect(),
        }
    }
}

/// Observable run state, comparable and serializable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub actor: Actor,
    pub obstacles: Vec<Obstacle>,
}
