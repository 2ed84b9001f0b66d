//! Scene-binding boundary
//!
//! The playback core never creates or owns visuals. A host implements
//! [`SceneBinding`] to receive marker and limb creation requests when a
//! skeleton is bound, and the freshly-computed world transform of every joint
//! once per tick. The collaborator owns all rendering lifetime; `mocap-bvh`
//! only pushes data across this boundary.

use crate::math::{Mat4, Vec3};
use crate::skeleton::{Joint, Skeleton};

/// Host-side receiver for skeleton visuals and per-tick transforms
pub trait SceneBinding {
    /// A point marker for a joint. Called once per joint at bind time with
    /// the joint's rest-pose world position, parents before children.
    fn create_marker(&mut self, joint_index: usize, name: &str, rest_position: Vec3);

    /// A connecting bar for a parent-child edge, sized to the inter-joint
    /// distance. Both endpoint markers exist by the time this is called; a
    /// placement transform can be built with [`Mat4::limb_between`].
    fn create_limb(
        &mut self,
        parent_index: usize,
        child_index: usize,
        start: Vec3,
        end: Vec3,
        length: f32,
    );

    /// The newly computed world transform of a joint. Called once per joint
    /// per animated tick, parents before children.
    fn update_joint(&mut self, joint_index: usize, transform: &Mat4);
}

/// A binding that ignores every call; used by tests, benches and headless
/// playback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBinding;

impl SceneBinding for NullBinding {
    fn create_marker(&mut self, _joint_index: usize, _name: &str, _rest_position: Vec3) {}

    fn create_limb(
        &mut self,
        _parent_index: usize,
        _child_index: usize,
        _start: Vec3,
        _end: Vec3,
        _length: f32,
    ) {
    }

    fn update_joint(&mut self, _joint_index: usize, _transform: &Mat4) {}
}

/// Walk the rest pose and announce every marker and limb to the binding
pub(crate) fn bind_skeleton(skeleton: &Skeleton, binding: &mut dyn SceneBinding) {
    bind_joint(skeleton.root(), Vec3::ZERO, binding);
}

fn bind_joint(joint: &Joint, parent_position: Vec3, binding: &mut dyn SceneBinding) {
    let position = parent_position + joint.offset;
    binding.create_marker(joint.index(), &joint.name, position);

    for child in &joint.children {
        bind_joint(child, position, binding);

        let child_position = position + child.offset;
        binding.create_limb(
            joint.index(),
            child.index(),
            position,
            child_position,
            child.offset.length(),
        );
    }
}
