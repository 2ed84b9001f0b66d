//! Forward-kinematics evaluation
//!
//! One pre-order, depth-first pass over the joint tree per tick. A joint's
//! world transform is computed strictly after its parent's is final; sibling
//! subtrees carry no ordering dependency on each other. Each transform is
//! written to the pose buffer and pushed to the scene binding immediately;
//! the evaluator itself holds no rendering state.

use crate::math::Mat4;
use crate::scene::SceneBinding;
use crate::skeleton::Joint;

use super::rotation::{RotationMode, joint_rotation};

/// Per-tick sample threaded through the traversal
#[derive(Clone, Copy)]
pub(crate) struct FrameSample<'a> {
    /// Current frame's channel values
    pub current: &'a [f32],
    /// Next frame's channel values
    pub next: &'a [f32],
    /// Interpolation fraction toward the next frame
    pub fraction: f32,
    /// Rotation construction strategy for this tick
    pub mode: RotationMode,
}

/// Evaluate the whole tree from the root. The root composes the externally
/// supplied placement with its own rotation; its static offset does not
/// apply, the placement already positions it.
pub(crate) fn evaluate_root(
    root: &Joint,
    placement: &Mat4,
    sample: &FrameSample<'_>,
    pose: &mut [Mat4],
    binding: &mut dyn SceneBinding,
) {
    let rotation = joint_rotation(root, sample.mode, sample.current, sample.next, sample.fraction);
    let world = placement.mul(&rotation);
    publish(root, world, sample, pose, binding);
}

/// Evaluate a non-root joint: parent world, then the static offset, then the
/// joint's own rotation
fn evaluate_child(
    joint: &Joint,
    parent_world: &Mat4,
    sample: &FrameSample<'_>,
    pose: &mut [Mat4],
    binding: &mut dyn SceneBinding,
) {
    let rotation = joint_rotation(joint, sample.mode, sample.current, sample.next, sample.fraction);
    let world = parent_world
        .mul(&Mat4::from_translation(joint.offset))
        .mul(&rotation);
    publish(joint, world, sample, pose, binding);
}

fn publish(
    joint: &Joint,
    world: Mat4,
    sample: &FrameSample<'_>,
    pose: &mut [Mat4],
    binding: &mut dyn SceneBinding,
) {
    pose[joint.index()] = world;
    binding.update_joint(joint.index(), &world);

    for child in &joint.children {
        evaluate_child(child, &world, sample, pose, binding);
    }
}
