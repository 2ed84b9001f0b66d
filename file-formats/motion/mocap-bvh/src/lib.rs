// Re-export main components
pub mod animation;
pub mod error;
pub mod math;
pub mod scene;
pub mod skeleton;

// Re-export common types
pub use animation::{AnimationPlayer, FrameClock, FrameCursor, PlaybackSettings, RotationMode};
pub use error::{BvhError, Result};
pub use math::{Lerp, Mat4, Quat, RotationOrder, Vec3};
pub use scene::{NullBinding, SceneBinding};
pub use skeleton::{ChannelTriple, Joint, MotionData, Skeleton};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
