//! Autoplay - flaps on the player's behalf
//!
//! Purely reactive: looks at the nearest obstacle ahead and flaps when the
//! bird has sunk too far into its gap. The cooldown runs on wall-clock time,
//! not ticks, so the flap cadence does not change with frame rate.

use super::obstacles::ObstacleField;
use super::state::Actor;
use crate::tuning::Tuning;

/// Decide whether to flap now
///
/// `now_ms` and `last_flap_ms` are wall-clock milliseconds. Nothing here
/// depends on the tick counter.
pub fn should_flap(
    actor: &Actor,
    field: &ObstacleField,
    tuning: &Tuning,
    now_ms: f64,
    last_flap_ms: f64,
) -> bool {
    let Some(next) = field.next_ahead(actor.left(), tuning.obstacle_width) else {
        return false;
    };
    let threshold = next.gap_top + tuning.gap_size * tuning.autoplay_gap_fraction;
    actor.top() > threshold && now_ms - last_flap_ms > tuning.autoplay_cooldown_ms
}

/// Autoplay toggle plus the time of its last flap
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autopilot {
    pub enabled: bool,
    /// Wall-clock time of the last synthetic flap (ms)
    pub last_flap_ms: f64,
}

impl Autopilot {
    /// Flip the toggle, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Returns true if a flap should be applied this tick, and starts the
    /// cooldown when it is
    pub fn poll(&mut self, actor: &Actor, field: &ObstacleField, tuning: &Tuning, now_ms: f64) -> bool {
        if !self.enabled {
            return false;
        }
        if should_flap(actor, field, tuning, now_ms, self.last_flap_ms) {
            self.last_flap_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    /// One obstacle ahead of the bird; with gap_top 200 the threshold is 260
    fn field_with_gap_at(gap_top: f32) -> ObstacleField {
        ObstacleField::from_ordered([Obstacle { x: 200.0, gap_top }])
    }

    #[test]
    fn test_targets_nearest_obstacle_ahead() {
        let tuning = Tuning::default();
        // First obstacle is already behind the bird (right edge 40 < 50)
        let field = ObstacleField::from_ordered([
            Obstacle { x: -12.0, gap_top: 400.0 },
            Obstacle { x: 150.0, gap_top: 100.0 },
            Obstacle { x: 300.0, gap_top: 400.0 },
        ]);
        // 170 is below 100 + 60 but above 400 + 60
        assert!(should_flap(&actor_at(170.0), &field, &tuning, 1_000.0, 0.0));
    }

    fn actor_at(y: f32) -> Actor {
        let mut actor = Actor::spawn(&Tuning::default());
        actor.pos.y = y;
        actor
    }

    #[test]
    fn test_no_obstacles_no_flap() {
        let tuning = Tuning::default();
        let field = ObstacleField::new();
        assert!(!should_flap(&actor_at(500.0), &field, &tuning, 10_000.0, 0.0));
    }

    #[test]
    fn test_flaps_below_threshold() {
        let tuning = Tuning::default();
        let field = field_with_gap_at(200.0);
        assert!(should_flap(&actor_at(261.0), &field, &tuning, 1_000.0, 0.0));
        assert!(!should_flap(&actor_at(260.0), &field, &tuning, 1_000.0, 0.0));
        assert!(!should_flap(&actor_at(150.0), &field, &tuning, 1_000.0, 0.0));
    }

    #[test]
    fn test_cooldown_is_wall_clock() {
        let tuning = Tuning::default();
        let field = field_with_gap_at(200.0);
        let actor = actor_at(290.0);
        assert!(!should_flap(&actor, &field, &tuning, 1_150.0, 1_000.0));
        assert!(should_flap(&actor, &field, &tuning, 1_150.5, 1_000.0));
    }

    #[test]
    fn test_poll_respects_toggle_and_cooldown() {
        let tuning = Tuning::default();
        let field = field_with_gap_at(200.0);
        let actor = actor_at(290.0);
        let mut pilot = Autopilot::default();

        assert!(!pilot.poll(&actor, &field, &tuning, 1_000.0));
        assert!(pilot.toggle());

        assert!(pilot.poll(&actor, &field, &tuning, 1_000.0));
        assert_eq!(pilot.last_flap_ms, 1_000.0);
        // Many frames inside the window: no second flap
        for i in 1..=9 {
            assert!(!pilot.poll(&actor, &field, &tuning, 1_000.0 + i as f64 * 16.0));
        }
        assert!(pilot.poll(&actor, &field, &tuning, 1_160.0));
        assert!(!pilot.toggle());
    }
}
