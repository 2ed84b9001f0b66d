//! Playback orchestration
//!
//! The [`AnimationPlayer`] owns the skeleton, the playback switches and the
//! pose buffer. One call to [`AnimationPlayer::update`] runs one full tick to
//! completion: advance the clock, resolve the frame cursor, place the root
//! from its position channels, and evaluate forward kinematics over the whole
//! tree. Pausing is a flag flip; the last computed pose stays readable.

use log::warn;

use crate::animation::clock::{FrameClock, FrameCursor};
use crate::animation::evaluator::{FrameSample, evaluate_root};
use crate::animation::rotation::RotationMode;
use crate::math::{Lerp, Mat4, Vec3};
use crate::scene::SceneBinding;
use crate::skeleton::Skeleton;

/// Lower bound of the accepted speed range
pub const MIN_SPEED: f64 = 0.01;
/// Upper bound of the accepted speed range
pub const MAX_SPEED: f64 = 2.0;

/// Externally configured playback switches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackSettings {
    /// Whether ticks evaluate at all; while false the last pose persists
    pub animate: bool,
    /// Whether rotations slerp (and the root position lerps) toward the next
    /// frame, or hold the current frame's values exactly
    pub interpolate: bool,
    speed: f64,
}

impl PlaybackSettings {
    /// Playback running, interpolation on, speed 1
    pub fn new() -> Self {
        Self {
            animate: true,
            interpolate: true,
            speed: 1.0,
        }
    }

    /// Speed multiplier applied to incoming time deltas
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the speed multiplier, clamped into [`MIN_SPEED`, `MAX_SPEED`]
    pub fn set_speed(&mut self, speed: f64) {
        let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
        if clamped != speed {
            warn!("playback speed {speed} clamped to {clamped}");
        }
        self.speed = clamped;
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives playback of one skeleton
#[derive(Debug)]
pub struct AnimationPlayer {
    skeleton: Skeleton,
    clock: FrameClock,
    settings: PlaybackSettings,
    time: f64,
    cursor: FrameCursor,
    pose: Vec<Mat4>,
}

impl AnimationPlayer {
    /// Create a player at time zero with every pose slot at identity
    pub fn new(skeleton: Skeleton) -> Self {
        let clock = FrameClock::new(skeleton.frame_time(), skeleton.frame_count());
        let pose = vec![Mat4::IDENTITY; skeleton.joint_count()];
        Self {
            skeleton,
            clock,
            settings: PlaybackSettings::new(),
            time: 0.0,
            cursor: FrameCursor {
                frame: 0,
                next_frame: 0,
                fraction: 0.0,
            },
            pose,
        }
    }

    /// Announce markers and limbs for every joint to the scene collaborator
    pub fn bind(&self, binding: &mut dyn SceneBinding) {
        crate::scene::bind_skeleton(&self.skeleton, binding);
    }

    /// The skeleton being played back
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Playback switches
    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    /// Mutable access to the playback switches
    pub fn settings_mut(&mut self) -> &mut PlaybackSettings {
        &mut self.settings
    }

    /// Accumulated playback time in seconds (already speed-scaled)
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Frame cursor of the most recent tick
    pub fn cursor(&self) -> FrameCursor {
        self.cursor
    }

    /// World transforms of the most recent tick, indexed by joint index
    pub fn pose(&self) -> &[Mat4] {
        &self.pose
    }

    /// World transform of one joint; identity if the index is out of range
    pub fn joint_transform(&self, joint_index: usize) -> Mat4 {
        self.pose.get(joint_index).copied().unwrap_or(Mat4::IDENTITY)
    }

    /// Jump the playback clock to an absolute time (seconds). The pose is
    /// not recomputed until the next animated tick.
    pub fn seek(&mut self, seconds: f64) {
        self.time = seconds.max(0.0);
    }

    /// Run one playback tick. Advances the clock by `delta_seconds` scaled by
    /// the speed multiplier and recomputes the pose. Does nothing while the
    /// animate flag is off.
    pub fn update(&mut self, delta_seconds: f64, binding: &mut dyn SceneBinding) {
        if !self.settings.animate {
            return;
        }
        self.time += delta_seconds * self.settings.speed;
        self.tick(binding);
    }

    fn tick(&mut self, binding: &mut dyn SceneBinding) {
        let cursor = self.clock.cursor(self.time);
        self.cursor = cursor;
        let interpolate = self.settings.interpolate;

        let skeleton = &self.skeleton;
        let pose = &mut self.pose;
        let current = skeleton.frame(cursor.frame);
        let next = skeleton.frame(cursor.next_frame);

        let root = skeleton.root();
        let root_position = match root.position_channels {
            Some(channels) => {
                let held = channels.read(current);
                if interpolate {
                    held.lerp(&channels.read(next), cursor.fraction)
                } else {
                    held
                }
            }
            None => Vec3::ZERO,
        };
        let placement = Mat4::from_translation(root_position);

        let sample = FrameSample {
            current,
            next,
            fraction: if interpolate { cursor.fraction } else { 0.0 },
            mode: if interpolate {
                RotationMode::Interpolated
            } else {
                RotationMode::Discrete
            },
        };
        evaluate_root(root, &placement, &sample, pose, binding);
    }
}
