use serde::Deserialize;

/// Runtime tuning bundle.
///
/// Every knob the physics and audio systems read lives here, so a host can
/// override any subset at runtime with a JSON bundle. Missing fields keep
/// their defaults, which match the shipped feel of the installation.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pointer repulsion reach in layout units.
    pub repel_radius: f32,
    /// Peak repulsion force at zero distance.
    pub push_strength: f32,
    /// Linear spring pulling displacement back toward the origin.
    pub return_speed: f32,
    /// Per-tick velocity retention (friction analogue).
    pub slipperiness: f32,
    /// Velocity mixing weight on contact (0 = pass through, 1 = swap).
    pub bounciness: f32,
    /// Hard travel limit for displacement, both directions.
    pub max_travel: f32,
    /// Bodies whose origins differ vertically by more than this never collide.
    pub row_tolerance: f32,
    /// Fraction of summed radii that counts as contact (allows visual overlap).
    pub overlap_factor: f32,
    /// Flat velocity retention applied to both bodies on every contact.
    pub contact_friction: f32,
    /// Velocity multiplier when a body hits the travel limit.
    pub wall_bounce: f32,
    /// Relative velocity below which a contact makes no sound.
    pub min_impact: f32,
    /// Volume ceiling for impact playback.
    pub max_volume: f32,
    /// Computed volumes below this are suppressed entirely.
    pub volume_floor: f32,
    /// Minimum gap between two impact sounds from the same body.
    pub hit_cooldown_ms: f64,
    /// Scale applied to raw horizontal acceleration from the motion sensor.
    pub gravity_sensitivity: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            repel_radius: 180.0,
            push_strength: 1.2,
            return_speed: 0.008,
            slipperiness: 0.97,
            bounciness: 0.2,
            max_travel: 300.0,
            row_tolerance: 50.0,
            overlap_factor: 0.90,
            contact_friction: 0.9,
            wall_bounce: -0.5,
            min_impact: 0.5,
            max_volume: 0.6,
            volume_floor: 0.05,
            hit_cooldown_ms: 100.0,
            gravity_sensitivity: 0.8,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
