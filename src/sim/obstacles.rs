//! Obstacle generation, scrolling and recycling
//!
//! Obstacles are kept in creation order, which is also left-to-right screen
//! order: new ones are pushed at the back (right edge), old ones popped from
//! the front. Nothing ever reorders the queue, so the front is always the
//! leftmost obstacle and a forward scan finds the nearest one ahead.

use std::collections::VecDeque;

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Horizontal scroll speed at a given tick (grows without bound)
#[inline]
pub fn scroll_speed(tick: u64, tuning: &Tuning) -> f32 {
    tuning.base_speed + tick as f32 * tuning.speed_accel
}

/// What one generator step did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStep {
    /// Leftmost obstacle left the screen (worth one point)
    pub recycled: bool,
    /// A new obstacle entered at the right edge
    pub spawned: bool,
}

/// Ordered obstacle queue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field from obstacles already in left-to-right order
    #[cfg(test)]
    pub(crate) fn from_ordered(obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        Self {
            obstacles: obstacles.into_iter().collect(),
        }
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Obstacles left to right
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Leftmost (oldest) obstacle
    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    /// First obstacle whose right edge is still past `x`
    pub fn next_ahead(&self, x: f32, width: f32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.right_edge(width) > x)
    }

    /// Shift every obstacle left
    pub fn scroll(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop the leftmost obstacle once it is fully off-screen.
    /// Only the front is checked.
    pub fn recycle_leftmost(&mut self, width: f32) -> bool {
        match self.obstacles.front() {
            Some(front) if front.x < -width => {
                self.obstacles.pop_front();
                true
            }
            _ => false,
        }
    }

    /// Append an obstacle at the right edge on interval ticks
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        tick: u64,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Obstacle> {
        if tick % tuning.spawn_interval_ticks != 0 {
            return None;
        }
        let span = tuning.max_gap_top() - tuning.gap_margin;
        let obstacle = Obstacle {
            x: tuning.canvas_width,
            gap_top: rng.random::<f32>() * span + tuning.gap_margin,
        };
        self.obstacles.push_back(obstacle);
        Some(obstacle)
    }

    /// Scroll, recycle, then spawn
    pub fn advance<R: Rng + ?Sized>(&mut self, tick: u64, tuning: &Tuning, rng: &mut R) -> FieldStep {
        self.scroll(scroll_speed(tick, tuning));
        let recycled = self.recycle_leftmost(tuning.obstacle_width);
        let spawned = self.maybe_spawn(tick, tuning, rng);
        if let Some(obstacle) = spawned {
            log::debug!("tick {}: obstacle spawned, gap at {:.1}", tick, obstacle.gap_top);
        }
        FieldStep {
            recycled,
            spawned: spawned.is_some(),
        }
    }
}
