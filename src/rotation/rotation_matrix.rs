// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::Mul;

use crate::{
    config::GeometryConfig,
    geometry::{
        matrix::Matrix3,
        vector::{Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
    rotation::quaternion::Quaternion,
};

/// 3x3 rotation matrix in row-vector convention (`v' = v * M`).
///
/// Rotations are left-handed: a positive angle around X takes +Y towards +Z,
/// around Y takes +Z towards +X and around Z takes +X towards +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix3<T: Scalar>(pub Matrix3<T>);

impl<T: Scalar> RotationMatrix3<T> {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Rotation of `angle` (configured unit) around the X axis (pitch).
    pub fn rotation_x(angle: T, cfg: &GeometryConfig<T>) -> Self {
        let (s, c) = cfg.angle_to_radians(angle).sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self(Matrix3::new([[l, o, o], [o, c, s], [o, -s, c]]))
    }

    /// Rotation of `angle` (configured unit) around the Y axis (yaw).
    pub fn rotation_y(angle: T, cfg: &GeometryConfig<T>) -> Self {
        let (s, c) = cfg.angle_to_radians(angle).sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self(Matrix3::new([[c, o, -s], [o, l, o], [s, o, c]]))
    }

    /// Rotation of `angle` (configured unit) around the Z axis (roll).
    pub fn rotation_z(angle: T, cfg: &GeometryConfig<T>) -> Self {
        let (s, c) = cfg.angle_to_radians(angle).sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self(Matrix3::new([[c, s, o], [-s, c, o], [o, o, l]]))
    }

    /// Composes `Roll(z) * Pitch(x) * Yaw(y)`: roll is applied first, yaw last.
    pub fn from_euler_angles(x: T, y: T, z: T, cfg: &GeometryConfig<T>) -> Self {
        Self::rotation_z(z, cfg) * Self::rotation_x(x, cfg) * Self::rotation_y(y, cfg)
    }

    /// Rotation of `angle` around `axis`.
    ///
    /// The axis is used as given and is not normalized; a null axis yields
    /// the identity whatever the angle.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T, cfg: &GeometryConfig<T>) -> Self {
        if axis.is_zero(cfg) {
            log::debug!("null rotation axis, using identity rotation");
            return Self::identity();
        }

        let (s, c) = cfg.angle_to_radians(angle).sin_cos();
        let k = T::one() - c;
        let (x, y, z) = (axis[0], axis[1], axis[2]);

        Self(Matrix3::new([
            [c + k * x * x, k * x * y + s * z, k * x * z - s * y],
            [k * x * y - s * z, c + k * y * y, k * y * z + s * x],
            [k * x * z + s * y, k * y * z - s * x, c + k * z * z],
        ]))
    }

    /// Homogeneous conversion; a null quaternion produces a null matrix.
    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let two = T::two();

        let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Self(Matrix3::new([
            [ww + xx - yy - zz, two * (xy + wz), two * (xz - wy)],
            [two * (xy - wz), ww - xx + yy - zz, two * (yz + wx)],
            [two * (xz + wy), two * (yz - wx), ww - xx - yy + zz],
        ]))
    }

    pub fn to_quaternion(&self, cfg: &GeometryConfig<T>) -> Quaternion<T> {
        Quaternion::from_rotation_matrix(self, cfg)
    }

    /// Euler angles `(x, y, z)` in the configured unit such that
    /// `from_euler_angles(x, y, z)` yields an equivalent rotation.
    ///
    /// At gimbal lock (pitch of ±90°) roll is reported as zero and the whole
    /// remaining rotation is folded into yaw.
    pub fn to_euler_angles(&self, cfg: &GeometryConfig<T>) -> (T, T, T) {
        let m = &self.0;
        let sin_x = (-m[2][1]).max(-T::one()).min(T::one());
        let x = sin_x.asin();
        let cos_x = (m[2][0] * m[2][0] + m[2][2] * m[2][2]).sqrt();

        let (y, z) = if cfg.is_zero(cos_x) {
            log::debug!("gimbal lock while extracting Euler angles, roll set to zero");
            ((-m[0][2]).atan2(m[0][0]), T::zero())
        } else {
            (m[2][0].atan2(m[2][2]), m[0][1].atan2(m[1][1]))
        };

        (
            cfg.radians_to_angle(x),
            cfg.radians_to_angle(y),
            cfg.radians_to_angle(z),
        )
    }

    /// Axis and angle (configured unit, always in `[0, half turn]`).
    ///
    /// See [`Quaternion::to_axis_angle`] for the identity and null conventions.
    pub fn to_axis_angle(&self, cfg: &GeometryConfig<T>) -> (Vector3<T>, T) {
        self.to_quaternion(cfg).to_axis_angle(cfg)
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Inverse of an orthonormal matrix.
    pub fn inverse(&self) -> Self {
        self.transpose()
    }

    pub fn determinant(&self) -> T {
        self.0.determinant()
    }

    pub fn rotate_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        *v * self.0
    }

    pub fn is_identity(&self, cfg: &GeometryConfig<T>) -> bool {
        self.0.is_identity(cfg)
    }

    pub fn approx_eq(&self, other: &Self, cfg: &GeometryConfig<T>) -> bool {
        self.0.approx_eq(&other.0, cfg)
    }

    /// Rows are unit length and mutually orthogonal.
    pub fn is_orthonormal(&self, cfg: &GeometryConfig<T>) -> bool {
        let rows = [self.0.row(0), self.0.row(1), self.0.row(2)];
        (0..3).all(|i| {
            (0..3).all(|j| {
                let expected = if i == j { T::one() } else { T::zero() };
                cfg.are_equal(rows[i].dot(&rows[j]), expected)
            })
        })
    }
}

impl<T: Scalar> Default for RotationMatrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// `a * b` applies `a` first, then `b`.
impl<T: Scalar> Mul for RotationMatrix3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<T: Scalar> From<Quaternion<T>> for RotationMatrix3<T> {
    fn from(q: Quaternion<T>) -> Self {
        Self::from_quaternion(&q)
    }
}
