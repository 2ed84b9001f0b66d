//! 4x4 affine transforms (column-major, like OpenGL/WebGL)

use super::quat::Quat;
use super::types::Vec3;

/// 4x4 transformation matrix in column-major order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    /// Matrix data in column-major order
    pub data: [f32; 16],
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // Column 0
            0.0, 1.0, 0.0, 0.0, // Column 1
            0.0, 0.0, 1.0, 0.0, // Column 2
            0.0, 0.0, 0.0, 1.0, // Column 3
        ],
    };

    /// Create identity matrix
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create translation matrix
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // Column 0
                0.0, 1.0, 0.0, 0.0, // Column 1
                0.0, 0.0, 1.0, 0.0, // Column 2
                v.x, v.y, v.z, 1.0, // Column 3
            ],
        }
    }

    /// Create scale matrix
    pub fn from_scale(v: Vec3) -> Self {
        Self {
            data: [
                v.x, 0.0, 0.0, 0.0, // Column 0
                0.0, v.y, 0.0, 0.0, // Column 1
                0.0, 0.0, v.z, 0.0, // Column 2
                0.0, 0.0, 0.0, 1.0, // Column 3
            ],
        }
    }

    /// Elementary rotation of `degrees` around the X axis
    pub fn from_rotation_x(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // Column 0
                0.0, c, s, 0.0, // Column 1
                0.0, -s, c, 0.0, // Column 2
                0.0, 0.0, 0.0, 1.0, // Column 3
            ],
        }
    }

    /// Elementary rotation of `degrees` around the Y axis
    pub fn from_rotation_y(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self {
            data: [
                c, 0.0, -s, 0.0, // Column 0
                0.0, 1.0, 0.0, 0.0, // Column 1
                s, 0.0, c, 0.0, // Column 2
                0.0, 0.0, 0.0, 1.0, // Column 3
            ],
        }
    }

    /// Elementary rotation of `degrees` around the Z axis
    pub fn from_rotation_z(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self {
            data: [
                c, s, 0.0, 0.0, // Column 0
                -s, c, 0.0, 0.0, // Column 1
                0.0, 0.0, 1.0, 0.0, // Column 2
                0.0, 0.0, 0.0, 1.0, // Column 3
            ],
        }
    }

    /// Create rotation matrix from a unit quaternion
    pub fn from_rotation(q: Quat) -> Self {
        let x = q.x;
        let y = q.y;
        let z = q.z;
        let w = q.w;

        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self {
            data: [
                1.0 - (yy + zz),
                xy + wz,
                xz - wy,
                0.0,
                xy - wz,
                1.0 - (xx + zz),
                yz + wx,
                0.0,
                xz + wy,
                yz - wx,
                1.0 - (xx + yy),
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ],
        }
    }

    /// Rotation aligning the +Y axis with the given direction.
    ///
    /// A zero-length direction resolves to the identity; a direction opposite
    /// +Y resolves to a half turn about X. Neither case produces NaN.
    pub fn align_y_to(direction: Vec3) -> Self {
        let dir = direction.normalized();
        if dir == Vec3::ZERO {
            return Self::IDENTITY;
        }

        let axis = Vec3::Y.cross(&dir).normalized();
        if axis == Vec3::ZERO {
            // Parallel or antiparallel to +Y
            if dir.y > 0.0 {
                return Self::IDENTITY;
            }
            return Self::from_rotation_x(180.0);
        }

        let degrees = Vec3::Y.dot(&dir).clamp(-1.0, 1.0).acos().to_degrees();
        Self::from_rotation(Quat::from_axis_angle(axis, degrees))
    }

    /// Placement transform for a bar of the given diameter spanning `p1` to
    /// `p2`: translate to the midpoint, align the bar's +Y axis along the
    /// edge, scale to half the inter-point distance. Coincident points
    /// collapse the bar deterministically (identity alignment, zero length).
    pub fn limb_between(p1: Vec3, p2: Vec3, diameter: f32) -> Self {
        let edge = p2 - p1;
        let midpoint = (p1 + p2) * 0.5;
        let half_length = edge.length() * 0.5;

        Self::from_translation(midpoint)
            .mul(&Self::align_y_to(edge))
            .mul(&Self::from_scale(Vec3::new(diameter, half_length, diameter)))
    }

    /// Multiply two matrices (self * other)
    pub fn mul(&self, other: &Self) -> Self {
        let a = &self.data;
        let b = &other.data;

        let mut data = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[k * 4 + row] * b[col * 4 + k];
                }
                data[col * 4 + row] = sum;
            }
        }
        Self { data }
    }

    /// Transform a point by this matrix
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.data;
        Vec3 {
            x: m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            y: m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            z: m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
        }
    }

    /// Translation column of the transform
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Get matrix as flat array, e.g. for GPU upload
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Self) -> Self::Output {
        Mat4::mul(&self, &rhs)
    }
}
