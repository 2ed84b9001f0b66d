//! End-to-end playback over a two-joint skeleton

use mocap_bvh::{
    AnimationPlayer, ChannelTriple, Joint, Mat4, MotionData, Quat, RotationOrder, SceneBinding,
    Skeleton, Vec3,
};
use pretty_assertions::assert_eq;

const TOL: f32 = 1e-4;

/// Records every call the core pushes across the scene boundary
#[derive(Debug, Default)]
struct RecordingBinding {
    markers: Vec<(usize, String, Vec3)>,
    limbs: Vec<(usize, usize, f32)>,
    updates: Vec<(usize, Mat4)>,
}

impl SceneBinding for RecordingBinding {
    fn create_marker(&mut self, joint_index: usize, name: &str, rest_position: Vec3) {
        self.markers.push((joint_index, name.to_string(), rest_position));
    }

    fn create_limb(
        &mut self,
        parent_index: usize,
        child_index: usize,
        _start: Vec3,
        _end: Vec3,
        length: f32,
    ) {
        self.limbs.push((parent_index, child_index, length));
    }

    fn update_joint(&mut self, joint_index: usize, transform: &Mat4) {
        self.updates.push((joint_index, *transform));
    }
}

fn assert_vec3(actual: Vec3, expected: Vec3) {
    assert!(
        (actual.x - expected.x).abs() < TOL
            && (actual.y - expected.y).abs() < TOL
            && (actual.z - expected.z).abs() < TOL,
        "expected {expected:?}, got {actual:?}"
    );
}

fn assert_mat4(actual: &Mat4, expected: &Mat4) {
    for i in 0..16 {
        assert!(
            (actual.data[i] - expected.data[i]).abs() < TOL,
            "matrices differ at element {i}: {} vs {}",
            actual.data[i],
            expected.data[i]
        );
    }
}

/// Root with position channels plus one child offset (0, 1, 0); two frames,
/// 0.1 s apart. Frame 1 turns the root 90 degrees about Y and lifts it one
/// unit.
fn two_joint_skeleton() -> Skeleton {
    let root = Joint::new(
        "Hips",
        Vec3::ZERO,
        ChannelTriple::new(3, 4, 5),
        RotationOrder::XYZ,
    )
    .with_position_channels(ChannelTriple::new(0, 1, 2))
    .with_child(Joint::new(
        "Chest",
        Vec3::new(0.0, 1.0, 0.0),
        ChannelTriple::new(6, 7, 8),
        RotationOrder::XYZ,
    ));

    let motion = MotionData {
        frame_time: 0.1,
        channel_count: 9,
        frames: vec![
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0, 0.0, 90.0, 0.0, 0.0, 0.0, 0.0],
        ],
    };
    Skeleton::new(root, motion).expect("skeleton fixture must validate")
}

#[test]
fn bind_announces_markers_and_limbs() {
    let player = AnimationPlayer::new(two_joint_skeleton());
    let mut scene = RecordingBinding::default();
    player.bind(&mut scene);

    assert_eq!(scene.markers.len(), 2);
    assert_eq!(scene.markers[0].0, 0);
    assert_eq!(scene.markers[0].1, "Hips");
    assert_vec3(scene.markers[0].2, Vec3::ZERO);
    assert_eq!(scene.markers[1].1, "Chest");
    assert_vec3(scene.markers[1].2, Vec3::new(0.0, 1.0, 0.0));

    assert_eq!(scene.limbs.len(), 1);
    let (parent, child, length) = scene.limbs[0];
    assert_eq!((parent, child), (0, 1));
    assert!((length - 1.0).abs() < TOL);
}

#[test]
fn interpolated_midpoint_pose() {
    let mut player = AnimationPlayer::new(two_joint_skeleton());
    let mut scene = RecordingBinding::default();
    player.update(0.05, &mut scene);

    // Root: halfway between the two frames, position lerped and rotation
    // slerped toward the 90-degree turn about Y
    let root_world = player.joint_transform(0);
    assert_vec3(root_world.translation(), Vec3::new(0.0, 0.5, 0.0));

    let half_turn = Quat::IDENTITY.slerp(&Quat::from_axis_angle(Vec3::Y, 90.0), 0.5);
    let expected = Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0))
        .mul(&Mat4::from_rotation(half_turn));
    assert_mat4(&root_world, &expected);

    // The 45-degree yaw swings a unit X offset toward -Z
    assert_vec3(
        root_world.transform_point(Vec3::X),
        Vec3::new(45f32.to_radians().cos(), 0.5, -45f32.to_radians().sin()),
    );

    // Child: rides the root's rotation, offset stays on the Y axis
    let child_world = player.joint_transform(1);
    assert_vec3(child_world.translation(), Vec3::new(0.0, 1.5, 0.0));

    // Transforms were published to the scene in parent-before-child order
    assert_eq!(scene.updates.len(), 2);
    assert_eq!(scene.updates[0].0, 0);
    assert_eq!(scene.updates[1].0, 1);
    assert_mat4(&scene.updates[0].1, &root_world);
}

#[test]
fn final_frame_holds_pose() {
    let mut player = AnimationPlayer::new(two_joint_skeleton());
    let mut scene = RecordingBinding::default();

    // Deep inside the last frame: fraction is large but the next frame
    // clamps to the final frame, so the pose holds instead of wrapping
    player.update(0.1 + 0.0999, &mut scene);
    assert_eq!(player.cursor().frame, 1);
    assert_eq!(player.cursor().next_frame, 1);

    let root_world = player.joint_transform(0);
    assert_vec3(root_world.translation(), Vec3::new(0.0, 1.0, 0.0));
    assert_vec3(root_world.transform_point(Vec3::X), Vec3::new(0.0, 1.0, -1.0));
}

#[test]
fn looping_returns_to_first_frame() {
    let mut player = AnimationPlayer::new(two_joint_skeleton());
    let mut scene = RecordingBinding::default();

    // Two full frame lengths past the table wraps back to frame 0
    player.update(0.2, &mut scene);
    assert_eq!(player.cursor().frame, 0);
    assert!(player.cursor().fraction < TOL);
    assert_vec3(player.joint_transform(0).translation(), Vec3::ZERO);
}

#[test]
fn discrete_mode_snaps_to_current_frame() {
    let mut player = AnimationPlayer::new(two_joint_skeleton());
    player.settings_mut().interpolate = false;
    let mut scene = RecordingBinding::default();
    player.update(0.05, &mut scene);

    // Midway through frame 0 the pose is exactly frame 0's
    let root_world = player.joint_transform(0);
    assert_vec3(root_world.translation(), Vec3::ZERO);
    assert_vec3(root_world.transform_point(Vec3::X), Vec3::X);
}

#[test]
fn seek_then_tick_recomputes() {
    let mut player = AnimationPlayer::new(two_joint_skeleton());
    let mut scene = RecordingBinding::default();

    player.seek(0.1);
    player.update(0.0, &mut scene);
    assert_eq!(player.cursor().frame, 1);
    assert_vec3(player.joint_transform(0).translation(), Vec3::new(0.0, 1.0, 0.0));
}
