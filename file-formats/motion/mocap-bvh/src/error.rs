use thiserror::Error;

/// Error types for skeleton assembly and playback setup
#[derive(Error, Debug)]
pub enum BvhError {
    /// The motion section declared no frames
    #[error("Motion data contains no frames")]
    EmptyMotion,

    /// Frame duration is zero, negative or not finite
    #[error("Invalid frame duration: {0} seconds")]
    InvalidFrameTime(f64),

    /// A frame's value array does not match the declared channel count
    #[error("Frame {frame} carries {actual} channel values, expected {expected}")]
    FrameLengthMismatch {
        frame: usize,
        expected: usize,
        actual: usize,
    },

    /// A joint references a channel outside the frame value arrays
    #[error(
        "Joint '{joint}' references channel {index}, but only {channel_count} channels are declared"
    )]
    ChannelOutOfRange {
        joint: String,
        index: usize,
        channel_count: usize,
    },

    /// A joint's rotation order does not use each axis exactly once
    #[error("Joint '{joint}' has invalid rotation order {order:?}")]
    InvalidRotationOrder { joint: String, order: [u8; 3] },
}

/// Result type using BvhError
pub type Result<T> = std::result::Result<T, BvhError>;
