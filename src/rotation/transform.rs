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

//! A single tagged transformation type applied uniformly to every primitive.

use std::ops::Mul;

use crate::{
    geometry::{
        matrix::{Matrix3, Matrix4},
        vector::Vector3,
    },
    numeric::scalar::Scalar,
    rotation::{quaternion::Quaternion, rotation_matrix::RotationMatrix3},
};

/// Affine 4x4 transformation in row-vector convention.
///
/// The upper 3x3 block holds the linear part and the fourth row the
/// translation, so a point is transformed as `[x, y, z, 1] * M`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformationMatrix<T: Scalar>(pub Matrix4<T>);

impl<T: Scalar> TransformationMatrix<T> {
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    pub fn from_translation(t: &Vector3<T>) -> Self {
        let mut m = Matrix4::identity();
        m[3][0] = t[0];
        m[3][1] = t[1];
        m[3][2] = t[2];
        Self(m)
    }

    pub fn from_scale(s: &Vector3<T>) -> Self {
        let mut m = Matrix4::identity();
        m[0][0] = s[0];
        m[1][1] = s[1];
        m[2][2] = s[2];
        Self(m)
    }

    pub fn from_rotation(r: &RotationMatrix3<T>) -> Self {
        Self::from_linear(&r.0)
    }

    pub fn from_linear(linear: &Matrix3<T>) -> Self {
        let mut m = Matrix4::identity();
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] = linear[i][j];
            }
        }
        Self(m)
    }

    /// Scale, then rotate, then translate.
    pub fn from_components(
        translation: &Vector3<T>,
        rotation: &Quaternion<T>,
        scale: &Vector3<T>,
    ) -> Self {
        Self::from_scale(scale)
            * Self::from_rotation(&rotation.to_rotation_matrix())
            * Self::from_translation(translation)
    }

    pub fn linear(&self) -> Matrix3<T> {
        Matrix3::new(std::array::from_fn(|i| {
            std::array::from_fn(|j| self.0[i][j])
        }))
    }

    pub fn translation(&self) -> Vector3<T> {
        Vector3::new(self.0[3][0], self.0[3][1], self.0[3][2])
    }

    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        (p.extend(T::one()) * self.0).truncate()
    }

    pub fn transform_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        (v.extend(T::zero()) * self.0).truncate()
    }
}

impl<T: Scalar> Mul for TransformationMatrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

/// Translation, rotation, scale or general affine matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transformation<T: Scalar> {
    Translation(Vector3<T>),
    Rotation(Quaternion<T>),
    RotationMatrix(RotationMatrix3<T>),
    Scale(Vector3<T>),
    Matrix(TransformationMatrix<T>),
}

impl<T: Scalar> Transformation<T> {
    pub fn apply_to_point(&self, p: &Vector3<T>) -> Vector3<T> {
        match self {
            Transformation::Translation(t) => *p + *t,
            Transformation::Rotation(q) => q.rotate_vector(p),
            Transformation::RotationMatrix(m) => m.rotate_vector(p),
            Transformation::Scale(s) => p.scale_by(s),
            Transformation::Matrix(m) => m.transform_point(p),
        }
    }

    /// Like [`apply_to_point`](Self::apply_to_point) but ignores translations.
    pub fn apply_to_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        match self {
            Transformation::Translation(_) => *v,
            Transformation::Matrix(m) => m.transform_vector(v),
            _ => self.apply_to_point(v),
        }
    }

    /// Whether vector lengths may change under this transformation.
    pub fn alters_lengths(&self) -> bool {
        matches!(self, Transformation::Scale(_) | Transformation::Matrix(_))
    }

    /// Largest factor by which the transformation can stretch a length.
    pub fn max_stretch(&self) -> T {
        match self {
            Transformation::Translation(_)
            | Transformation::Rotation(_)
            | Transformation::RotationMatrix(_) => T::one(),
            Transformation::Scale(s) => s[0].abs().max(s[1].abs()).max(s[2].abs()),
            Transformation::Matrix(m) => spectral_norm(&m.linear()),
        }
    }
}

// Largest singular value of `l`, from the largest eigenvalue of `l * lᵀ`
// (closed form for symmetric 3x3 matrices).
fn spectral_norm<T: Scalar>(l: &Matrix3<T>) -> T {
    let a = *l * l.transpose();
    let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
    if off == T::zero() {
        return a[0][0].max(a[1][1]).max(a[2][2]).max(T::zero()).sqrt();
    }

    let three = T::from_f64(3.0);
    let q = a.trace() / three;
    let p2 = (0..3).fold(T::two() * off, |acc, i| acc + (a[i][i] - q) * (a[i][i] - q));
    let p = (p2 / T::from_f64(6.0)).sqrt();
    let b = (a - Matrix3::identity().scale(q)).scale(T::one() / p);
    let r = (b.determinant() * T::half()).max(-T::one()).min(T::one());
    let largest = q + T::two() * p * (r.acos() / three).cos();
    largest.max(T::zero()).sqrt()
}

/// Primitives that can be moved by a [`Transformation`].
///
/// Implementors provide the pure [`transformed`](Self::transformed); pivot
/// and in-place variants are derived from it.
pub trait Transformable<T: Scalar>: Sized {
    fn transformed(&self, t: &Transformation<T>) -> Self;

    /// Applies `t` as if `pivot` were the origin.
    fn transformed_with_pivot(&self, t: &Transformation<T>, pivot: &Vector3<T>) -> Self {
        self.transformed(&Transformation::Translation(-*pivot))
            .transformed(t)
            .transformed(&Transformation::Translation(*pivot))
    }

    fn transform(&mut self, t: &Transformation<T>) -> &mut Self {
        *self = self.transformed(t);
        self
    }

    fn transform_with_pivot(&mut self, t: &Transformation<T>, pivot: &Vector3<T>) -> &mut Self {
        *self = self.transformed_with_pivot(t, pivot);
        self
    }
}

impl<T: Scalar> Transformable<T> for Vector3<T> {
    fn transformed(&self, t: &Transformation<T>) -> Self {
        t.apply_to_point(self)
    }
}
