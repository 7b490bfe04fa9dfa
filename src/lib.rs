//! Skyflap - A side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, session)
//! - `render`: Render surface abstraction and frame hand-off
//! - `tuning`: Data-driven game constants
//! - `headless`: Display-less driver for native runs

#[cfg(not(target_arch = "wasm32"))]
pub mod headless;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 360.0;
    pub const CANVAS_HEIGHT: f32 = 640.0;
    /// Height of the ground strip at the bottom of the canvas
    pub const GROUND_HEIGHT: f32 = 112.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.25;
    /// Velocity set by a flap (negative is up)
    pub const FLAP_VELOCITY: f32 = -4.6;

    /// Horizontal scroll speed at tick 0 (pixels/tick)
    pub const BASE_SPEED: f32 = 2.0;
    /// Scroll speed gained per elapsed tick
    pub const SPEED_ACCEL: f32 = 0.0001;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const GAP_SIZE: f32 = 100.0;
    pub const SPAWN_INTERVAL_TICKS: u64 = 90;
    /// Minimum distance from the top of the canvas to a gap
    pub const GAP_MARGIN: f32 = 40.0;

    /// Bird defaults
    pub const ACTOR_X: f32 = 50.0;
    pub const ACTOR_START_Y: f32 = 150.0;
    pub const ACTOR_WIDTH: f32 = 34.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;

    /// Minimum wall-clock time between autoplay flaps (ms)
    pub const AUTOPLAY_COOLDOWN_MS: f64 = 150.0;
    /// Autoplay flaps once the bird sinks below this fraction of the gap
    pub const AUTOPLAY_GAP_FRACTION: f32 = 0.6;

    /// Ticks each wing animation frame stays on screen
    pub const ANIM_TICKS_PER_FRAME: u64 = 5;
    /// Bird sprites per wing cycle (up, mid, down); fixed by the sprite sheet
    pub const ANIM_FRAME_COUNT: u64 = 3;
}
