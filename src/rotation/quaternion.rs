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

use std::ops::{Mul, Neg};

use crate::{
    config::GeometryConfig,
    geometry::vector::{Vector3, Vector4},
    numeric::scalar::Scalar,
    rotation::rotation_matrix::RotationMatrix3,
};

/// Rotation quaternion stored as `(x, y, z, w)`, `w` being the scalar part.
///
/// Follows the same left-handed, row-vector conventions as
/// [`RotationMatrix3`]; `q.to_rotation_matrix()` transforms vectors exactly
/// like `q.rotate_vector`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// The null quaternion. Not a rotation; kept as a defined degenerate value.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn from_vector4(v: &Vector4<T>) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    pub fn to_vector4(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    /// Rotation of `angle` (configured unit) around `axis`.
    ///
    /// The axis is not normalized: a non-unit axis produces a non-unit
    /// quaternion. A null axis yields the identity.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T, cfg: &GeometryConfig<T>) -> Self {
        if axis.is_zero(cfg) {
            log::debug!("null rotation axis, using identity quaternion");
            return Self::identity();
        }
        let half = cfg.angle_to_radians(angle) * T::half();
        let (s, c) = half.sin_cos();
        Self::new(axis[0] * s, axis[1] * s, axis[2] * s, c)
    }

    /// Composes `Roll(z) * Pitch(x) * Yaw(y)`, like
    /// [`RotationMatrix3::from_euler_angles`].
    pub fn from_euler_angles(x: T, y: T, z: T, cfg: &GeometryConfig<T>) -> Self {
        let pitch = Self::from_axis_angle(&Vector3::unit_x(), x, cfg);
        let yaw = Self::from_axis_angle(&Vector3::unit_y(), y, cfg);
        let roll = Self::from_axis_angle(&Vector3::unit_z(), z, cfg);
        roll * pitch * yaw
    }

    /// Extracts the rotation of an orthonormal matrix.
    ///
    /// A null matrix (the image of the null quaternion) maps back to the null
    /// quaternion.
    pub fn from_rotation_matrix(m: &RotationMatrix3<T>, cfg: &GeometryConfig<T>) -> Self {
        if m.0.is_zero(cfg) {
            log::debug!("null rotation matrix, using null quaternion");
            return Self::zero();
        }

        let m = &m.0;
        let quarter = T::half() * T::half();
        let trace = m.trace();

        if trace > T::zero() {
            let s = (trace + T::one()).sqrt() * T::two();
            Self::new(
                (m[1][2] - m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
                (m[0][1] - m[1][0]) / s,
                quarter * s,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = (T::one() + m[0][0] - m[1][1] - m[2][2]).sqrt() * T::two();
            Self::new(
                quarter * s,
                (m[0][1] + m[1][0]) / s,
                (m[0][2] + m[2][0]) / s,
                (m[1][2] - m[2][1]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = (T::one() + m[1][1] - m[0][0] - m[2][2]).sqrt() * T::two();
            Self::new(
                (m[0][1] + m[1][0]) / s,
                quarter * s,
                (m[1][2] + m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
            )
        } else {
            let s = (T::one() + m[2][2] - m[0][0] - m[1][1]).sqrt() * T::two();
            Self::new(
                (m[0][2] + m[2][0]) / s,
                (m[1][2] + m[2][1]) / s,
                quarter * s,
                (m[0][1] - m[1][0]) / s,
            )
        }
    }

    pub fn to_rotation_matrix(&self) -> RotationMatrix3<T> {
        RotationMatrix3::from_quaternion(self)
    }

    /// Axis and angle (configured unit) of the rotation.
    ///
    /// The angle is always in `[0, half turn]`; the sign of a rotation is
    /// carried by the axis. The identity reports the X axis and a zero
    /// angle. The null quaternion reports the null axis and a half turn.
    pub fn to_axis_angle(&self, cfg: &GeometryConfig<T>) -> (Vector3<T>, T) {
        if self.norm_squared() == T::zero() {
            log::debug!("null quaternion, reporting null axis");
            return (Vector3::zero(), cfg.radians_to_angle(T::PI()));
        }

        let q = if self.w < T::zero() { -*self } else { *self };
        let w = q.w.min(T::one());
        let sin_half = (T::one() - w * w).sqrt();

        if cfg.is_zero(sin_half) {
            return (Vector3::unit_x(), T::zero());
        }

        let angle = T::two() * w.acos();
        let axis = Vector3::new(q.x / sin_half, q.y / sin_half, q.z / sin_half);
        (axis, cfg.radians_to_angle(angle))
    }

    pub fn to_euler_angles(&self, cfg: &GeometryConfig<T>) -> (T, T, T) {
        self.to_rotation_matrix().to_euler_angles(cfg)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit quaternion; the null quaternion is returned unchanged.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n == T::zero() {
            return *self;
        }
        self.scale(T::one() / n)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse; the null quaternion is returned unchanged.
    pub fn inverse(&self) -> Self {
        let n2 = self.norm_squared();
        if n2 == T::zero() {
            return *self;
        }
        self.conjugate().scale(T::one() / n2)
    }

    fn scale(&self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Hamilton product `a ⊗ b` in the usual mathematical sense.
    fn hamilton(a: &Self, b: &Self) -> Self {
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    /// Rotates `v`; equivalent to `v * self.to_rotation_matrix()` for unit quaternions.
    pub fn rotate_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        let p = Self::new(v[0], v[1], v[2], T::zero());
        let r = Self::hamilton(&Self::hamilton(self, &p), &self.conjugate());
        Vector3::new(r.x, r.y, r.z)
    }

    /// Spherical interpolation along the shortest arc.
    pub fn slerp(&self, other: &Self, t: T, cfg: &GeometryConfig<T>) -> Self {
        let mut cos_theta = self.dot(other);
        let mut end = *other;
        if cos_theta < T::zero() {
            cos_theta = -cos_theta;
            end = -end;
        }

        if cfg.are_equal(cos_theta, T::one()) {
            // Nearly identical: fall back to linear interpolation.
            let l = Self::new(
                self.x + (end.x - self.x) * t,
                self.y + (end.y - self.y) * t,
                self.z + (end.z - self.z) * t,
                self.w + (end.w - self.w) * t,
            );
            return l.normalized();
        }

        let theta = cos_theta.min(T::one()).acos();
        let sin_theta = theta.sin();
        let a = ((T::one() - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        Self::new(
            self.x * a + end.x * b,
            self.y * a + end.y * b,
            self.z * a + end.z * b,
            self.w * a + end.w * b,
        )
    }

    pub fn approx_eq(&self, other: &Self, cfg: &GeometryConfig<T>) -> bool {
        cfg.are_equal(self.x, other.x)
            && cfg.are_equal(self.y, other.y)
            && cfg.are_equal(self.z, other.z)
            && cfg.are_equal(self.w, other.w)
    }

    /// Same rotation, allowing for the `q` / `-q` double cover.
    pub fn same_rotation(&self, other: &Self, cfg: &GeometryConfig<T>) -> bool {
        self.approx_eq(other, cfg) || self.approx_eq(&-*other, cfg)
    }

    pub fn is_identity(&self, cfg: &GeometryConfig<T>) -> bool {
        self.same_rotation(&Self::identity(), cfg)
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// `a * b` applies `a` first, then `b`, matching the matrix product order of
/// [`RotationMatrix3`]. Not commutative.
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::hamilton(&rhs, &self)
    }
}

/// Uses [`GeometryConfig::default`] (radians, [`Scalar::default_epsilon`])
/// for the null-matrix check; call [`Quaternion::from_rotation_matrix`] to
/// pick another tolerance.
impl<T: Scalar> From<RotationMatrix3<T>> for Quaternion<T> {
    fn from(m: RotationMatrix3<T>) -> Self {
        Self::from_rotation_matrix(&m, &GeometryConfig::default())
    }
}
