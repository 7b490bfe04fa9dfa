//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per display refresh
//! - Seeded RNG only
//! - Obstacles kept in creation order, never re-sorted
//! - No rendering or platform dependencies
//!
//! Wall-clock time enters only through [`TickInput::now_ms`] and only the
//! autoplay cooldown reads it.

pub mod autoplay;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod session;
pub mod state;
pub mod tick;

pub use autoplay::{Autopilot, should_flap};
pub use collision::{collides, hits_bounds, hits_obstacle};
pub use obstacles::{FieldStep, ObstacleField, scroll_speed};
pub use state::{Actor, GamePhase, GameState, Obstacle, Snapshot};
pub use tick::{TickInput, TickReport, tick};
