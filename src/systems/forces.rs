use crate::bodies::{Body, Vec2};
use crate::domain::Tuning;

/// Accumulate per-tick force contributions into each body's velocity.
///
/// Three terms, applied in order: pointer repulsion, tilt, return spring.
/// Only `vx` is touched, never `x`. `pointer = None` means no active input
/// and contributes nothing.
pub fn apply_forces(
    bodies: &mut [Body],
    pointer: Option<Vec2>,
    tilt_force: f32,
    motion_enabled: bool,
    tuning: &Tuning,
) {
    for body in bodies.iter_mut() {
        // Pointer push, quadratic falloff toward the repel radius.
        if let Some(pointer) = pointer {
            let center = Vec2::new(body.center_x(), body.origin.y);
            let delta = pointer - center;
            let distance = delta.length();

            if distance < tuning.repel_radius {
                let falloff = (tuning.repel_radius - distance) / tuning.repel_radius;
                // Push away from the pointer, horizontally only. A pointer
                // dead on the center pushes right.
                let direction = if delta.x > 0.0 { -1.0 } else { 1.0 };
                body.vx += direction * falloff * falloff * tuning.push_strength;
            }
        }

        // Tilt applies the same force to every body.
        if motion_enabled {
            body.vx += tilt_force;
        }

        // Drift back toward the origin.
        body.vx -= body.x * tuning.return_speed;
    }
}
