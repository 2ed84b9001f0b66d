//! BVH playback
//!
//! This module drives a loaded [`crate::skeleton::Skeleton`] through time:
//! - Frame clock mapping continuous time to (frame, fraction)
//! - Rotation builder with discrete and slerp-interpolated strategies
//! - Recursive forward-kinematics evaluation, parents before children
//! - A playback controller tying the pieces together once per tick
//!
//! # Example
//!
//! ```rust,ignore
//! use mocap_bvh::{AnimationPlayer, NullBinding, Skeleton};
//!
//! // Skeleton assembled from parser output
//! let skeleton = Skeleton::new(root_joint, motion_data)?;
//! let mut player = AnimationPlayer::new(skeleton);
//! player.bind(&mut scene);
//!
//! // Host per-frame callback
//! player.update(delta_seconds, &mut scene);
//! let root_world = player.joint_transform(0);
//! ```

mod clock;
mod evaluator;
mod player;
mod rotation;

pub use clock::{FrameClock, FrameCursor};
pub use player::{AnimationPlayer, MAX_SPEED, MIN_SPEED, PlaybackSettings};
pub use rotation::{RotationMode, euler_matrix, joint_rotation};
