use crate::audio::AudioSink;
use crate::bodies::Body;
use crate::domain::Tuning;

/// Run the per-tick collision relaxation: two fixed passes over all pairs.
///
/// A single impulse pass under-corrects deep overlaps when several bodies
/// contend for the same stretch of row; the second pass buys materially
/// better separation without a full iterative solver.
pub fn resolve_collisions(
    bodies: &mut [Body],
    now_ms: f64,
    tuning: &Tuning,
    audio: &mut dyn AudioSink,
) {
    for _ in 0..2 {
        resolve_pass(bodies, now_ms, tuning, audio);
    }
}

/// One pass over all unordered pairs `(i, j), i < j` in registration order.
///
/// The iteration order is part of the contract: results are not
/// order-invariant within a pass, so pairs always go lowest id first.
pub fn resolve_pass(bodies: &mut [Body], now_ms: f64, tuning: &Tuning, audio: &mut dyn AudioSink) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            resolve_pair(&mut head[i], &mut tail[0], now_ms, tuning, audio);
        }
    }
}

fn resolve_pair(
    a: &mut Body,
    b: &mut Body,
    now_ms: f64,
    tuning: &Tuning,
    audio: &mut dyn AudioSink,
) {
    // Collisions are 1-D along a row: different rows never interact.
    if (a.origin.y - b.origin.y).abs() > tuning.row_tolerance {
        return;
    }

    let dx = b.center_x() - a.center_x();
    let distance = dx.abs();
    let min_distance = (a.radius + b.radius) * tuning.overlap_factor;

    if distance >= min_distance {
        return;
    }

    // Split the overlap equally. When the centers coincide exactly the
    // higher-id body counts as the one on the right.
    let overlap = min_distance - distance;
    let sign = if dx >= 0.0 { 1.0 } else { -1.0 };
    a.x -= overlap * 0.5 * sign;
    b.x += overlap * 0.5 * sign;

    // Audible only above the impact threshold, and each body carries an
    // independent cooldown regardless of partner.
    let impact = (a.vx - b.vx).abs();
    if impact > tuning.min_impact
        && now_ms - a.last_hit_ms > tuning.hit_cooldown_ms
        && now_ms - b.last_hit_ms > tuning.hit_cooldown_ms
    {
        audio.play_impact(impact);
        a.last_hit_ms = now_ms;
        b.last_hit_ms = now_ms;
    }

    // Elastic-inelastic blend, then a flat energy loss on every contact to
    // keep stacked bodies from oscillating forever.
    let (v1, v2) = (a.vx, b.vx);
    a.vx = (v1 * (1.0 - tuning.bounciness) + v2 * tuning.bounciness) * tuning.contact_friction;
    b.vx = (v2 * (1.0 - tuning.bounciness) + v1 * tuning.bounciness) * tuning.contact_friction;
}
