pub mod animation;
pub mod color;
pub mod shape;
pub mod transform;
