//! Joint hierarchy and keyframe table
//!
//! The external BVH parser hands over a fully-populated joint tree plus the
//! motion section (frame duration, frame table); no raw text is interpreted
//! here. `Skeleton::new` validates the hand-off once; after that the
//! structure and the keyframe table are immutable and playback can never hit
//! an out-of-range channel.

use log::debug;

use crate::error::{BvhError, Result};
use crate::math::{RotationOrder, Vec3};

/// Positions of a joint's three channels within a frame's value array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelTriple {
    /// Channel carrying the X component
    pub x: usize,
    /// Channel carrying the Y component
    pub y: usize,
    /// Channel carrying the Z component
    pub z: usize,
}

impl ChannelTriple {
    /// Create a new channel triple
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Read the referenced components out of a frame value array
    pub fn read(&self, frame: &[f32]) -> Vec3 {
        Vec3::new(frame[self.x], frame[self.y], frame[self.z])
    }

    fn largest(&self) -> usize {
        self.x.max(self.y).max(self.z)
    }
}

/// A single joint in the hierarchy.
///
/// Joints exclusively own their children, so the hierarchy is a tree by
/// construction: a joint with two parents is unrepresentable and cycles
/// cannot occur.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Joint {
    /// Joint name, for lookup and debugging
    pub name: String,
    /// Static displacement from the parent joint's origin
    pub offset: Vec3,
    /// Frame-array positions of this joint's X/Y/Z rotation angles (degrees)
    pub rotation_channels: ChannelTriple,
    /// Composition sequence for the three rotation angles
    pub rotation_order: RotationOrder,
    /// Frame-array positions of the X/Y/Z position channels. Parsers may
    /// populate these on any joint, but only the root's are evaluated.
    pub position_channels: Option<ChannelTriple>,
    /// Child joints, in declaration order
    pub children: Vec<Joint>,
    /// Dense pre-order index, assigned by `Skeleton::new`
    #[cfg_attr(feature = "serde-support", serde(skip))]
    index: usize,
}

impl Joint {
    /// Create a joint with no position channels and no children
    pub fn new(
        name: impl Into<String>,
        offset: Vec3,
        rotation_channels: ChannelTriple,
        rotation_order: RotationOrder,
    ) -> Self {
        Self {
            name: name.into(),
            offset,
            rotation_channels,
            rotation_order,
            position_channels: None,
            children: Vec::new(),
            index: 0,
        }
    }

    /// Attach position channels (the root joint of a BVH hierarchy)
    #[must_use]
    pub fn with_position_channels(mut self, channels: ChannelTriple) -> Self {
        self.position_channels = Some(channels);
        self
    }

    /// Attach a child joint
    #[must_use]
    pub fn with_child(mut self, child: Joint) -> Self {
        self.children.push(child);
        self
    }

    /// Dense pre-order index into the pose buffer
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Keyframe data produced by the external BVH parser
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionData {
    /// Seconds per frame
    pub frame_time: f64,
    /// Total channel count declared across the hierarchy
    pub channel_count: usize,
    /// One fixed-length value array per frame
    pub frames: Vec<Vec<f32>>,
}

/// An immutable skeleton bound to its keyframe table
#[derive(Debug, Clone)]
pub struct Skeleton {
    root: Joint,
    frame_time: f64,
    channel_count: usize,
    frames: Vec<Vec<f32>>,
    joint_count: usize,
}

impl Skeleton {
    /// Validate the parser hand-off and assemble the skeleton.
    ///
    /// Any malformed input (empty frame table, non-positive frame duration,
    /// frame-length mismatch, out-of-range channel index, rotation order that
    /// does not use each axis exactly once) is a fatal load error; the
    /// skeleton does not exist until validation passes.
    pub fn new(mut root: Joint, motion: MotionData) -> Result<Self> {
        if motion.frames.is_empty() {
            return Err(BvhError::EmptyMotion);
        }
        if !(motion.frame_time > 0.0 && motion.frame_time.is_finite()) {
            return Err(BvhError::InvalidFrameTime(motion.frame_time));
        }
        for (index, frame) in motion.frames.iter().enumerate() {
            if frame.len() != motion.channel_count {
                return Err(BvhError::FrameLengthMismatch {
                    frame: index,
                    expected: motion.channel_count,
                    actual: frame.len(),
                });
            }
        }

        let mut next_index = 0;
        Self::validate_joint(&mut root, &mut next_index, motion.channel_count)?;

        debug!(
            "skeleton loaded: {} joints, {} channels, {} frames at {}s/frame",
            next_index,
            motion.channel_count,
            motion.frames.len(),
            motion.frame_time
        );

        Ok(Self {
            root,
            frame_time: motion.frame_time,
            channel_count: motion.channel_count,
            frames: motion.frames,
            joint_count: next_index,
        })
    }

    fn validate_joint(joint: &mut Joint, next_index: &mut usize, channel_count: usize) -> Result<()> {
        joint.index = *next_index;
        *next_index += 1;

        if !joint.rotation_order.is_valid() {
            return Err(BvhError::InvalidRotationOrder {
                joint: joint.name.clone(),
                order: [
                    joint.rotation_order.x,
                    joint.rotation_order.y,
                    joint.rotation_order.z,
                ],
            });
        }

        let check = |channels: &ChannelTriple| -> Result<()> {
            if channels.largest() >= channel_count {
                return Err(BvhError::ChannelOutOfRange {
                    joint: joint.name.clone(),
                    index: channels.largest(),
                    channel_count,
                });
            }
            Ok(())
        };
        check(&joint.rotation_channels)?;
        if let Some(position) = joint.position_channels {
            check(&position)?;
        }

        for child in &mut joint.children {
            Self::validate_joint(child, next_index, channel_count)?;
        }
        Ok(())
    }

    /// Root joint of the hierarchy
    pub fn root(&self) -> &Joint {
        &self.root
    }

    /// Seconds per frame
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Number of frames in the keyframe table
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Total channel count declared across the hierarchy
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Number of joints in the hierarchy
    pub fn joint_count(&self) -> usize {
        self.joint_count
    }

    /// Value array of one frame
    pub fn frame(&self, index: usize) -> &[f32] {
        &self.frames[index]
    }

    /// Visit every joint in pre-order (parents before children)
    pub fn visit_joints<F: FnMut(&Joint)>(&self, f: &mut F) {
        Self::visit(&self.root, f);
    }

    fn visit<F: FnMut(&Joint)>(joint: &Joint, f: &mut F) {
        f(joint);
        for child in &joint.children {
            Self::visit(child, f);
        }
    }

    /// Find a joint by name
    pub fn find_joint(&self, name: &str) -> Option<&Joint> {
        Self::find(&self.root, name)
    }

    fn find<'a>(joint: &'a Joint, name: &str) -> Option<&'a Joint> {
        if joint.name == name {
            return Some(joint);
        }
        joint.children.iter().find_map(|child| Self::find(child, name))
    }
}
