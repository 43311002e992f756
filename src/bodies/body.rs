use super::vec2::Vec2;

/// One sliding body. Moves along its row only; the origin is owned by the
/// layout host and refreshed every tick.
pub struct Body {
    /// Registration index, stable for the life of the simulation.
    pub id: u32,
    /// Resting center supplied by the layout host.
    pub origin: Vec2,
    /// Horizontal displacement from the origin.
    pub x: f32,
    /// Horizontal velocity (units per frame).
    pub vx: f32,
    /// Half-width used for collision extent.
    pub radius: f32,
    /// Timestamp of the last audible impact, for the cooldown gate.
    pub last_hit_ms: f64,
}

impl Body {
    pub fn new(id: u32, origin: Vec2, radius: f32) -> Self {
        Self {
            id,
            origin,
            x: 0.0,
            vx: 0.0,
            radius,
            last_hit_ms: 0.0,
        }
    }

    /// Absolute horizontal center, origin plus displacement.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.origin.x + self.x
    }
}
