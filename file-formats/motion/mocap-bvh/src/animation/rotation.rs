//! Per-joint rotation construction
//!
//! Two interchangeable strategies produce the rotation applied to a joint
//! each tick: a discrete matrix composition of the current frame's Euler
//! angles, and a quaternion slerp between the current and next frames'
//! angles. Both fold axes in ascending chain position, so the interpolated
//! path lands exactly on the discrete path at t=0 (current frame) and t=1
//! (next frame). That endpoint agreement is the contract that keeps the
//! interpolation toggle from visibly snapping.

use crate::math::{Mat4, Quat, RotationOrder, Vec3};
use crate::skeleton::Joint;

/// Strategy for building a joint's per-tick rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// Current frame's angles only
    Discrete,
    /// Slerp between the current and next frames' angles
    Interpolated,
}

/// Compose the three elementary rotations of an Euler triple (degrees) in
/// the given order, folding exactly like [`Quat::from_euler`]
pub fn euler_matrix(angles: Vec3, order: RotationOrder) -> Mat4 {
    let mx = Mat4::from_rotation_x(angles.x);
    let my = Mat4::from_rotation_y(angles.y);
    let mz = Mat4::from_rotation_z(angles.z);

    let mut m = Mat4::IDENTITY;
    for position in 0..3u8 {
        let step = if order.x == position {
            &mx
        } else if order.y == position {
            &my
        } else {
            &mz
        };
        m = m.mul(step);
    }
    m
}

/// Build the rotation transform for a joint at the current playback sample
pub fn joint_rotation(
    joint: &Joint,
    mode: RotationMode,
    current: &[f32],
    next: &[f32],
    t: f32,
) -> Mat4 {
    let channels = joint.rotation_channels;
    match mode {
        RotationMode::Discrete => euler_matrix(channels.read(current), joint.rotation_order),
        RotationMode::Interpolated => {
            let from = Quat::from_euler(channels.read(current), joint.rotation_order);
            let to = Quat::from_euler(channels.read(next), joint.rotation_order);
            Mat4::from_rotation(from.slerp(&to, t))
        }
    }
}
