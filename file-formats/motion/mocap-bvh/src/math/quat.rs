//! Quaternion rotation algebra
//!
//! Quaternions are stored as (x, y, z, w) with w as the scalar part and are
//! expected to be unit length on entry to `slerp` and matrix conversion;
//! every operation that can denormalize renormalizes its own result. Angle
//! inputs are degrees throughout, matching the keyframe channel data.

use super::types::{RotationOrder, Vec3};

/// Quaternion representation for rotations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create a new quaternion
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Euclidean norm
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Normalize the quaternion; a zero quaternion falls back to the identity
    pub fn normalize(&self) -> Self {
        let len = self.norm();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
                w: self.w / len,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Hamilton product of `self` and `other` (non-commutative)
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y + self.y * other.w + self.z * other.x - self.x * other.z,
            z: self.w * other.z + self.z * other.w + self.x * other.y - self.y * other.x,
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        }
    }

    /// Conjugate: vector part negated, scalar part kept
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Hamilton product sandwich `q · v · q*`, rotating the pure
    /// vector-quaternion `v` by `self`
    pub fn hamilton_product(&self, v: &Self) -> Self {
        self.multiply(v).multiply(&self.conjugate())
    }

    /// Rotate a 3-vector by this quaternion
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let rotated = self.hamilton_product(&Self::new(v.x, v.y, v.z, 0.0));
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }

    /// Rotation of `degrees` around `axis`. The axis must already be unit
    /// length; that is the caller's responsibility.
    pub fn from_axis_angle(axis: Vec3, degrees: f32) -> Self {
        let half = degrees.to_radians() / 2.0;
        let s = half.sin();
        Self {
            x: s * axis.x,
            y: s * axis.y,
            z: s * axis.z,
            w: half.cos(),
        }
    }

    /// Build the rotation for an Euler angle triple (degrees) composed in the
    /// given order.
    ///
    /// One axis-angle quaternion is built per axis, then the three are folded
    /// into an identity accumulator in ascending chain position
    /// (`acc = acc · q`), so the axis at position 0 leads the product. The
    /// discrete matrix path composes with exactly the same fold; the two must
    /// not diverge.
    pub fn from_euler(angles: Vec3, order: RotationOrder) -> Self {
        let qx = Self::from_axis_angle(Vec3::X, angles.x);
        let qy = Self::from_axis_angle(Vec3::Y, angles.y);
        let qz = Self::from_axis_angle(Vec3::Z, angles.z);

        let mut q = Self::IDENTITY;
        for position in 0..3u8 {
            let step = if order.x == position {
                &qx
            } else if order.y == position {
                &qy
            } else {
                &qz
            };
            q = q.multiply(step);
        }
        q.normalize()
    }

    /// Spherical linear interpolation from `self` toward `other` at `t` in
    /// [0, 1].
    ///
    /// The arc angle is read off `self · other*`; when it exceeds π/2 the
    /// angle is recomputed from the negated scalar part to prefer the shorter
    /// arc. Coincident (or otherwise degenerate, `sin θ == 0`) inputs return
    /// `self` unchanged rather than dividing by zero.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let q1 = self.normalize();
        let q2 = other.normalize();

        let d = q1.multiply(&q2.conjugate()).normalize();
        let mut theta = d.w.clamp(-1.0, 1.0).acos();
        if theta.abs() > std::f32::consts::FRAC_PI_2 {
            theta = (-d.w.clamp(-1.0, 1.0)).acos();
        }

        let sin_theta = theta.sin();
        if sin_theta == 0.0 {
            return q1;
        }

        let w1 = ((1.0 - t) * theta).sin() / sin_theta;
        let w2 = (t * theta).sin() / sin_theta;
        Self {
            x: w1 * q1.x + w2 * q2.x,
            y: w1 * q1.y + w2 * q2.y,
            z: w1 * q1.z + w2 * q2.z,
            w: w1 * q1.w + w2 * q2.w,
        }
        .normalize()
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}
