//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by one display refresh.
//! Order within a tick: input/autoplay flap, gravity, obstacles
//! (scroll, recycle, spawn), collision, tick counter.

use super::collision::collides;
use super::physics;
use super::state::{GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player flapped since the last tick (key, click or tap)
    pub flap: bool,
    /// Wall-clock time of this frame in milliseconds.
    /// Only the autoplay cooldown reads it.
    pub now_ms: f64,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Autoplay issued a flap
    pub autoflap: bool,
    /// A new obstacle entered
    pub spawned: bool,
    /// An obstacle was passed and the score went up by one
    pub scored: bool,
    /// The run ended on this tick
    pub game_over: bool,
}

/// Advance the game state by one tick. Does nothing unless running.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    if state.phase != GamePhase::Running {
        return report;
    }

    if input.flap {
        state.apply_impulse();
    }

    if state
        .autopilot
        .poll(&state.actor, &state.field, &state.tuning, input.now_ms)
    {
        physics::flap(&mut state.actor, state.tuning.flap_velocity);
        report.autoflap = true;
    }

    physics::integrate(&mut state.actor, state.tuning.gravity);

    let step = state
        .field
        .advance(state.time_ticks, &state.tuning, &mut state.rng);
    report.spawned = step.spawned;
    if step.recycled {
        state.score += 1;
        report.scored = true;
        log::debug!("tick {}: score {}", state.time_ticks, state.score);
    }

    if collides(&state.actor, &state.field, &state.tuning) {
        report.game_over = state.end_run();
    }

    state.time_ticks += 1;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::ObstacleField;
    use crate::sim::state::Obstacle;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        state.start();
        state
    }

    #[test]
    fn test_tick_idle_is_noop() {
        let mut state = GameState::new(12345, Tuning::default());
        let before = state.snapshot();
        let report = tick(&mut state, &TickInput { flap: true, now_ms: 500.0 });
        assert_eq!(report, TickReport::default());
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_first_tick_spawns_and_falls() {
        let mut state = running(12345);
        let report = tick(&mut state, &TickInput::default());
        assert!(report.spawned);
        assert!(!report.scored);
        assert_eq!(state.field.len(), 1);
        assert_eq!(state.field.front().map(|o| o.x), Some(360.0));
        assert_eq!(state.actor.vel, 0.25);
        assert_eq!(state.actor.pos.y, 150.25);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_flap_input_applies_before_gravity() {
        let mut state = running(1);
        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput { flap: true, now_ms: 0.0 });
        assert!((state.actor.vel - (-4.35)).abs() < 1e-6);
    }

    #[test]
    fn test_scores_when_leftmost_leaves() {
        let mut state = running(1);
        state.time_ticks = 1;
        state.field = ObstacleField::from_ordered([Obstacle { x: -51.0, gap_top: 100.0 }]);

        let report = tick(&mut state, &TickInput::default());
        assert!(report.scored);
        assert!(!report.game_over);
        assert_eq!(state.score, 1);
        assert!(state.field.is_empty());
    }

    #[test]
    fn test_fall_to_ground_ends_run_once() {
        let mut state = running(9);
        let input = TickInput::default();
        let mut endings = 0;
        for _ in 0..200 {
            if tick(&mut state, &input).game_over {
                endings += 1;
            }
        }
        assert_eq!(endings, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
        // y = 150 + 0.125 k (k + 1) reaches 504 at k = 53
        assert_eq!(state.time_ticks, 53);
    }

    #[test]
    fn test_obstacle_hit_mid_screen_ends_run_once() {
        let mut state = running(3);
        // Past the spawn tick so only this obstacle is in play
        state.time_ticks = 1;
        state.field = ObstacleField::from_ordered([Obstacle { x: 90.0, gap_top: 350.0 }]);

        let mut endings = 0;
        for t in 0..100u64 {
            let input = TickInput { flap: false, now_ms: t as f64 * FRAME_MS };
            if tick(&mut state, &input).game_over {
                endings += 1;
            }
        }
        assert_eq!(endings, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
        // Closes the 6px between obstacle and bird in a few ticks, long before the ground
        assert!(state.time_ticks <= 5);
        assert!(state.actor.bottom() < state.tuning.ground_line() - 300.0);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = running(9);
        let input = TickInput::default();
        while state.phase == GamePhase::Running {
            tick(&mut state, &input);
        }
        let frozen = state.snapshot();
        for i in 0..10 {
            let report = tick(&mut state, &TickInput { flap: true, now_ms: i as f64 * 1000.0 });
            assert_eq!(report, TickReport::default());
        }
        assert_eq!(state.snapshot(), frozen);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = running(99999);
        let mut state2 = running(99999);
        state1.toggle_autoplay();
        state2.toggle_autoplay();

        for t in 0..1500u64 {
            let input = TickInput {
                flap: t % 37 == 0,
                now_ms: t as f64 * FRAME_MS,
            };
            let r1 = tick(&mut state1, &input);
            let r2 = tick(&mut state2, &input);
            assert_eq!(r1, r2);
            assert_eq!(state1.snapshot(), state2.snapshot());
        }
    }

    #[test]
    fn test_autoplay_flaps_with_cooldown() {
        let mut state = running(2024);
        state.toggle_autoplay();

        let mut flap_times = Vec::new();
        for t in 0..600u64 {
            let now_ms = 1000.0 + t as f64 * FRAME_MS;
            if state.phase != GamePhase::Running {
                break;
            }
            if tick(&mut state, &TickInput { flap: false, now_ms }).autoflap {
                flap_times.push(now_ms);
            }
        }
        assert!(!flap_times.is_empty());
        assert!(flap_times.windows(2).all(|w| w[1] - w[0] > 150.0));
    }

    #[test]
    fn test_autoplay_off_never_flaps() {
        let mut state = running(2024);
        for t in 0..60u64 {
            let report = tick(&mut state, &TickInput { flap: false, now_ms: t as f64 * 1000.0 });
            assert!(!report.autoflap);
        }
    }

    #[test]
    fn test_autoplay_flap_replaces_falling_velocity() {
        let mut state = running(5);
        state.toggle_autoplay();
        tick(&mut state, &TickInput::default());
        // Below any possible threshold (gap_top + 60 < 488)
        state.actor.pos.y = 495.0;
        state.actor.vel = 6.0;
        let report = tick(&mut state, &TickInput { flap: false, now_ms: 10_000.0 });
        assert!(report.autoflap);
        assert!((state.actor.vel - (-4.35)).abs() < 1e-6);
        assert_eq!(state.autopilot.last_flap_ms, 10_000.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn score_tracks_obstacles_leaving(seed in any::<u64>(), flap_every in 10u64..40) {
            let mut state = running(seed);
            state.toggle_autoplay();
            let mut spawned_total = 0u64;
            for t in 0..3000u64 {
                let input = TickInput {
                    flap: t % flap_every == 0,
                    now_ms: t as f64 * FRAME_MS,
                };
                let len_before = state.field.len();
                let score_before = state.score;
                let report = tick(&mut state, &input);
                if report.spawned {
                    spawned_total += 1;
                }

                // An obstacle left the field exactly when the score moved, and by one
                let left = len_before + usize::from(report.spawned) - state.field.len();
                prop_assert!(left <= 1);
                prop_assert_eq!(report.scored, left == 1);
                prop_assert_eq!(state.score, score_before + left as u64);
                prop_assert!(state.score <= spawned_total);

                if state.phase != GamePhase::Running {
                    break;
                }
            }
        }
    }
}
