use super::body::Body;
use super::vec2::Vec2;

/// Ordered collection of registered bodies.
///
/// Registration happens once during setup; ids are the insertion index.
/// The shape is fixed afterwards, only the per-body numeric fields mutate.
/// Collision resolution iterates pairs in registration order, so insertion
/// order is part of the simulation contract.
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Register a body. Candidates with a non-positive (or non-finite)
    /// radius are skipped and get no id.
    pub fn register(&mut self, origin: Vec2, radius: f32) -> Option<u32> {
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        let id = self.bodies.len() as u32;
        self.bodies.push(Body::new(id, origin, radius));
        Some(id)
    }

    /// Refresh a body's resting center from the layout host.
    /// Returns false for an unknown index.
    pub fn set_origin(&mut self, index: usize, x: f32, y: f32) -> bool {
        match self.bodies.get_mut(index) {
            Some(body) => {
                body.origin = Vec2::new(x, y);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
