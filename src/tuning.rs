//! Data-driven game constants
//!
//! Defaults come from [`crate::consts`]. A partial JSON document overrides
//! individual fields; anything missing keeps its default.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Every constant the simulation reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ground_height: f32,

    pub gravity: f32,
    pub flap_velocity: f32,

    pub base_speed: f32,
    pub speed_accel: f32,

    pub obstacle_width: f32,
    pub gap_size: f32,
    pub spawn_interval_ticks: u64,
    pub gap_margin: f32,

    pub actor_x: f32,
    pub actor_start_y: f32,
    pub actor_width: f32,
    pub actor_height: f32,

    pub autoplay_cooldown_ms: f64,
    pub autoplay_gap_fraction: f32,

    pub anim_ticks_per_frame: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            base_speed: BASE_SPEED,
            speed_accel: SPEED_ACCEL,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            gap_margin: GAP_MARGIN,
            actor_x: ACTOR_X,
            actor_start_y: ACTOR_START_Y,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            autoplay_cooldown_ms: AUTOPLAY_COOLDOWN_MS,
            autoplay_gap_fraction: AUTOPLAY_GAP_FRACTION,
            anim_ticks_per_frame: ANIM_TICKS_PER_FRAME,
        }
    }
}

impl Tuning {
    /// Y coordinate of the top of the ground strip
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.canvas_height - self.ground_height
    }

    /// Exclusive upper bound for a gap's top edge
    #[inline]
    pub fn max_gap_top(&self) -> f32 {
        self.ground_line() - self.gap_size
    }

    /// Parse and validate a tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the preconditions the simulation assumes but never checks itself
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("obstacle_width", self.obstacle_width),
            ("gap_size", self.gap_size),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }
        if self.spawn_interval_ticks == 0 {
            return Err(TuningError::Invalid {
                field: "spawn_interval_ticks",
                reason: "must be at least one tick",
            });
        }
        if self.anim_ticks_per_frame == 0 {
            return Err(TuningError::Invalid {
                field: "anim_ticks_per_frame",
                reason: "must be at least one tick",
            });
        }
        if self.ground_height < 0.0 || self.ground_height >= self.canvas_height {
            return Err(TuningError::Invalid {
                field: "ground_height",
                reason: "must lie within the canvas",
            });
        }
        if self.gap_margin < 0.0 || self.max_gap_top() <= self.gap_margin {
            return Err(TuningError::Invalid {
                field: "gap_size",
                reason: "gap plus margin must fit above the ground line",
            });
        }
        if self.autoplay_cooldown_ms < 0.0 {
            return Err(TuningError::Invalid {
                field: "autoplay_cooldown_ms",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

/// Failure to load a [`Tuning`]
#[derive(Debug)]
pub enum TuningError {
    /// Document is not valid tuning JSON
    Parse(serde_json::Error),
    /// A field violates a simulation precondition
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {}", e),
            TuningError::Invalid { field, reason } => write!(f, "tuning `{}` {}", field, reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}
