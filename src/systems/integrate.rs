use crate::bodies::Body;
use crate::domain::Tuning;

/// Advance every body by one tick and publish the new displacement into the
/// offsets buffer the presentation host reads.
///
/// Order per body: damp velocity, move, recover from any non-finite
/// displacement by resetting the body to neutral, then clamp to the travel
/// limit with an inelastic bounce.
pub fn integrate(bodies: &mut [Body], offsets: &mut [f32], tuning: &Tuning) {
    for (body, slot) in bodies.iter_mut().zip(offsets.iter_mut()) {
        body.vx *= tuning.slipperiness;
        body.x += body.vx;

        // Degenerate force math (distance-zero divisions and the like) must
        // never leak out of a tick.
        if !body.x.is_finite() {
            body.x = 0.0;
            body.vx = 0.0;
        }

        if body.x > tuning.max_travel {
            body.x = tuning.max_travel;
            body.vx *= tuning.wall_bounce;
        }
        if body.x < -tuning.max_travel {
            body.x = -tuning.max_travel;
            body.vx *= tuning.wall_bounce;
        }

        *slot = body.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyRegistry, Vec2};

    fn one_body() -> (BodyRegistry, Vec<f32>) {
        let mut registry = BodyRegistry::new();
        registry.register(Vec2::new(0.0, 0.0), 40.0);
        (registry, vec![0.0])
    }

    #[test]
    fn damping_shrinks_velocity_every_tick() {
        let (mut registry, mut offsets) = one_body();
        registry.bodies_mut()[0].vx = 10.0;
        integrate(registry.bodies_mut(), &mut offsets, &Tuning::default());
        assert_eq!(registry.get(0).unwrap().vx, 10.0 * 0.97);
        assert_eq!(registry.get(0).unwrap().x, 10.0 * 0.97);
    }

    #[test]
    fn travel_limit_clamps_and_bounces() {
        let (mut registry, mut offsets) = one_body();
        registry.bodies_mut()[0].x = 299.0;
        registry.bodies_mut()[0].vx = 5.0;
        integrate(registry.bodies_mut(), &mut offsets, &Tuning::default());

        let body = registry.get(0).unwrap();
        assert_eq!(body.x, 300.0);
        // 5.0 damped to 4.85 before the wall, halved and reversed on it.
        assert!((body.vx - (-2.425)).abs() < 1e-5);
        assert_eq!(offsets[0], 300.0);
    }

    #[test]
    fn travel_limit_is_symmetric() {
        let (mut registry, mut offsets) = one_body();
        registry.bodies_mut()[0].x = -299.0;
        registry.bodies_mut()[0].vx = -5.0;
        integrate(registry.bodies_mut(), &mut offsets, &Tuning::default());

        let body = registry.get(0).unwrap();
        assert_eq!(body.x, -300.0);
        assert!(body.vx > 0.0);
    }

    #[test]
    fn undamped_bounce_halves_and_reverses_exactly() {
        let mut tuning = Tuning::default();
        tuning.slipperiness = 1.0;

        let (mut registry, mut offsets) = one_body();
        registry.bodies_mut()[0].x = 299.0;
        registry.bodies_mut()[0].vx = 5.0;
        integrate(registry.bodies_mut(), &mut offsets, &tuning);

        let body = registry.get(0).unwrap();
        assert_eq!(body.x, 300.0);
        assert_eq!(body.vx, -2.5);
    }

    #[test]
    fn non_finite_displacement_resets_to_neutral() {
        let (mut registry, mut offsets) = one_body();
        registry.bodies_mut()[0].x = f32::NAN;
        registry.bodies_mut()[0].vx = 5.0;
        integrate(registry.bodies_mut(), &mut offsets, &Tuning::default());

        let body = registry.get(0).unwrap();
        assert_eq!(body.x, 0.0);
        assert_eq!(body.vx, 0.0);
        assert_eq!(offsets[0], 0.0);
    }

    #[test]
    fn infinite_displacement_also_resets() {
        let (mut registry, mut offsets) = one_body();
        registry.bodies_mut()[0].x = f32::INFINITY;
        integrate(registry.bodies_mut(), &mut offsets, &Tuning::default());
        assert_eq!(registry.get(0).unwrap().x, 0.0);
    }
}
