//! Math module - spatial state of scene entities.
//!
//! Built on glam (`Vec3`, `Quat`, `Mat4`); angles are radians throughout.

mod transform;

pub use transform::Transform;
