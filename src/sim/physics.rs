//! Bird motion: constant gravity plus the flap impulse
//!
//! Velocity is integrated before position and is never clamped.

use super::state::Actor;

/// One tick of gravity: `vel += gravity`, then `y += vel`
#[inline]
pub fn integrate(actor: &mut Actor, gravity: f32) {
    actor.vel += gravity;
    actor.pos.y += actor.vel;
}

/// Flap. Overrides the current velocity rather than adding to it.
#[inline]
pub fn flap(actor: &mut Actor, flap_velocity: f32) {
    actor.vel = flap_velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FLAP_VELOCITY, GRAVITY};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    #[test]
    fn test_four_ticks_from_rest() {
        let mut actor = Actor::spawn(&Tuning::default());
        for _ in 0..4 {
            integrate(&mut actor, GRAVITY);
        }
        assert_eq!(actor.vel, 1.0);
        // 150 + 0.25 + 0.5 + 0.75 + 1.0
        assert_eq!(actor.pos.y, 152.5);
    }

    #[test]
    fn test_flap_moves_up_next_tick() {
        let mut actor = Actor::spawn(&Tuning::default());
        flap(&mut actor, FLAP_VELOCITY);
        integrate(&mut actor, GRAVITY);
        assert!((actor.vel - (-4.35)).abs() < 1e-6);
        assert!(actor.pos.y < 150.0);
    }

    proptest! {
        #[test]
        fn velocity_is_ticks_times_gravity(n in 0u32..2000) {
            let mut actor = Actor::spawn(&Tuning::default());
            for _ in 0..n {
                integrate(&mut actor, GRAVITY);
            }
            prop_assert_eq!(actor.vel, n as f32 * GRAVITY);
        }

        #[test]
        fn flap_overrides_any_velocity(vel in -1000.0f32..1000.0) {
            let mut actor = Actor::spawn(&Tuning::default());
            actor.vel = vel;
            flap(&mut actor, FLAP_VELOCITY);
            prop_assert_eq!(actor.vel, FLAP_VELOCITY);
            flap(&mut actor, FLAP_VELOCITY);
            prop_assert_eq!(actor.vel, FLAP_VELOCITY);
        }
    }
}
