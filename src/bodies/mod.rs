pub mod body;
pub mod registry;
pub mod vec2;

pub use body::Body;
pub use registry::BodyRegistry;
pub use vec2::Vec2;
