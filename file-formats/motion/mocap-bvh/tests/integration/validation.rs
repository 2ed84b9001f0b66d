//! Load-time validation of the parser hand-off

use mocap_bvh::{BvhError, ChannelTriple, Joint, MotionData, RotationOrder, Skeleton, Vec3};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn chain(rotation_order: RotationOrder) -> Joint {
    Joint::new("Hips", Vec3::ZERO, ChannelTriple::new(3, 4, 5), rotation_order)
        .with_position_channels(ChannelTriple::new(0, 1, 2))
        .with_child(
            Joint::new(
                "Spine",
                Vec3::new(0.0, 1.0, 0.0),
                ChannelTriple::new(6, 7, 8),
                rotation_order,
            )
            .with_child(Joint::new(
                "Head",
                Vec3::new(0.0, 0.5, 0.0),
                ChannelTriple::new(9, 10, 11),
                rotation_order,
            )),
        )
}

fn motion(channel_count: usize, frames: usize) -> MotionData {
    MotionData {
        frame_time: 1.0 / 60.0,
        channel_count,
        frames: vec![vec![0.0; channel_count]; frames],
    }
}

#[test]
fn well_formed_input_loads() {
    init_logging();
    let skeleton = Skeleton::new(chain(RotationOrder::ZXY), motion(12, 10)).unwrap();
    assert_eq!(skeleton.joint_count(), 3);
    assert_eq!(skeleton.frame_count(), 10);
    assert_eq!(skeleton.channel_count(), 12);
    assert_eq!(skeleton.find_joint("Head").unwrap().index(), 2);
}

#[test]
fn zero_frames_is_fatal() {
    init_logging();
    let err = Skeleton::new(chain(RotationOrder::ZXY), motion(12, 0)).unwrap_err();
    assert!(matches!(err, BvhError::EmptyMotion));
    assert!(err.to_string().contains("no frames"));
}

#[test]
fn negative_frame_time_is_fatal() {
    init_logging();
    let mut data = motion(12, 5);
    data.frame_time = -0.1;
    let err = Skeleton::new(chain(RotationOrder::ZXY), data).unwrap_err();
    assert!(matches!(err, BvhError::InvalidFrameTime(_)));
}

#[test]
fn nan_frame_time_is_fatal() {
    init_logging();
    let mut data = motion(12, 5);
    data.frame_time = f64::NAN;
    let err = Skeleton::new(chain(RotationOrder::ZXY), data).unwrap_err();
    assert!(matches!(err, BvhError::InvalidFrameTime(_)));
}

#[test]
fn frame_length_mismatch_is_fatal() {
    init_logging();
    let mut data = motion(12, 5);
    data.frames[3].push(0.0);
    let err = Skeleton::new(chain(RotationOrder::ZXY), data).unwrap_err();
    assert!(matches!(
        err,
        BvhError::FrameLengthMismatch {
            frame: 3,
            expected: 12,
            actual: 13
        }
    ));
}

#[test]
fn out_of_range_channel_is_fatal() {
    init_logging();
    // The Head joint's channels (9..=11) exceed a 9-channel frame
    let err = Skeleton::new(chain(RotationOrder::ZXY), motion(9, 5)).unwrap_err();
    match err {
        BvhError::ChannelOutOfRange {
            joint,
            index,
            channel_count,
        } => {
            assert_eq!(joint, "Head");
            assert_eq!(index, 11);
            assert_eq!(channel_count, 9);
        }
        other => panic!("expected ChannelOutOfRange, got {other:?}"),
    }
}

#[test]
fn duplicate_order_slot_is_fatal() {
    init_logging();
    let err = Skeleton::new(chain(RotationOrder::new(1, 1, 0)), motion(12, 5)).unwrap_err();
    assert!(matches!(err, BvhError::InvalidRotationOrder { .. }));
}
