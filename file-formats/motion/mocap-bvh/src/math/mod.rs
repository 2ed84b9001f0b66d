//! Rotation algebra and affine transforms for skeletal playback
//!
//! The playback core deliberately carries its own small math kit rather than
//! a general-purpose linear algebra crate: the Euler composition sequence and
//! the slerp variant are part of the playback contract, and both rotation
//! construction paths (matrix and quaternion) must fold axes identically.

mod mat4;
mod quat;
mod types;

pub use mat4::Mat4;
pub use quat::Quat;
pub use types::{Lerp, RotationOrder, Vec3};
