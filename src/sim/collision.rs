//! Collision detection
//!
//! A single pure predicate: does the current state end the run?
//! Boxes are axis-aligned; the gap is the only safe band inside an obstacle.

use super::obstacles::ObstacleField;
use super::state::{Actor, Obstacle};
use crate::tuning::Tuning;

/// Bird touches the top of the screen or the ground line
#[inline]
pub fn hits_bounds(actor: &Actor, ground_line: f32) -> bool {
    actor.top() <= 0.0 || actor.bottom() >= ground_line
}

/// Bird overlaps the obstacle's columns and is not fully inside its gap
pub fn hits_obstacle(actor: &Actor, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let overlaps_x =
        actor.right() > obstacle.x && actor.left() < obstacle.right_edge(tuning.obstacle_width);
    overlaps_x
        && (actor.top() < obstacle.gap_top || actor.bottom() > obstacle.gap_bottom(tuning.gap_size))
}

/// Terminal condition for the current tick
pub fn collides(actor: &Actor, field: &ObstacleField, tuning: &Tuning) -> bool {
    hits_bounds(actor, tuning.ground_line()) || field.iter().any(|o| hits_obstacle(actor, o, tuning))
}
