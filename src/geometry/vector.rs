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

use std::{
    array,
    ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign},
};

use crate::{config::GeometryConfig, numeric::scalar::Scalar};

/// Fixed-size vector; also used to represent points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn norm_squared(&self) -> T;
    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }
    fn normalized(&self) -> Self;
    fn distance_to(&self, other: &Self) -> T;
}

pub trait Cross2<T: Scalar> {
    /// Z component of the 3D cross product of two planar vectors.
    fn perp_dot(&self, other: &Self) -> T;
}

pub trait Cross3<T: Scalar> {
    fn cross(&self, other: &Self) -> Self;
}

/// Lifts 2D and 3D vectors into 3D space and back.
///
/// 2D vectors live in the `z = 0` plane; dropping back discards `z`.
pub trait Embed3<T: Scalar>: Sized {
    fn to_3d(&self) -> Vector3<T>;
    fn from_3d(v: &Vector3<T>) -> Self;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub fn from_vals(coords: [T; N]) -> Self {
        Self { coords }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            coords: [T::zero(); N],
        }
    }

    #[inline]
    pub fn splat(val: T) -> Self {
        Self { coords: [val; N] }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    /// Every component is zero within the configured tolerance.
    pub fn is_zero(&self, cfg: &GeometryConfig<T>) -> bool {
        self.coords.iter().all(|c| cfg.is_zero(*c))
    }

    pub fn scale(&self, s: T) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i] * s),
        }
    }

    /// Component-wise product.
    pub fn scale_by(&self, s: &Self) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i] * s.coords[i]),
        }
    }

    pub fn lerp(&self, other: &Self, u: T) -> Self {
        *self + (*other - *self).scale(u)
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, T::half())
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Self { coords: [x, y] }
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { coords: [x, y, z] }
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Promotes to homogeneous coordinates with the given `w`.
    pub fn extend(&self, w: T) -> Vector4<T> {
        Vector4::new(self[0], self[1], self[2], w)
    }
}

impl<T: Scalar> Vector<T, 4> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            coords: [x, y, z, w],
        }
    }

    pub fn truncate(&self) -> Vector3<T> {
        Vector3::new(self[0], self[1], self[2])
    }
}

impl<T: Scalar, const N: usize> VectorOps<T, N> for Vector<T, N> {
    fn dot(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Divides by the norm; the null vector is returned unchanged.
    fn normalized(&self) -> Self {
        let n = self.norm();
        if n == T::zero() {
            return *self;
        }
        self.scale(T::one() / n)
    }

    fn distance_to(&self, other: &Self) -> T {
        (*other - *self).norm()
    }
}

impl<T: Scalar> Cross2<T> for Vector<T, 2> {
    fn perp_dot(&self, other: &Self) -> T {
        self[0] * other[1] - self[1] * other[0]
    }
}

impl<T: Scalar> Cross3<T> for Vector<T, 3> {
    fn cross(&self, other: &Self) -> Self {
        Vector3::new(
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        )
    }
}

impl<T: Scalar> Embed3<T> for Vector<T, 2> {
    fn to_3d(&self) -> Vector3<T> {
        Vector3::new(self[0], self[1], T::zero())
    }

    fn from_3d(v: &Vector3<T>) -> Self {
        Vector2::new(v[0], v[1])
    }
}

impl<T: Scalar> Embed3<T> for Vector<T, 3> {
    fn to_3d(&self) -> Vector3<T> {
        *self
    }

    fn from_3d(v: &Vector3<T>) -> Self {
        *v
    }
}

// ---------- Indexing ----------
impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self { coords }
    }
}

// ---------- Arithmetic ----------
impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            coords: array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            coords: array::from_fn(|i| -self.coords[i]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_basis_order() {
        let x = Vector3::<f64>::unit_x();
        let y = Vector3::<f64>::unit_y();
        assert_eq!(x.cross(&y), Vector3::unit_z());
        assert_eq!(y.cross(&x), -Vector3::unit_z());
    }

    #[test]
    fn perp_dot_is_lifted_cross_z() {
        let a = Vector2::new(2.0f32, 1.0);
        let b = Vector2::new(-1.0f32, 3.0);
        assert_eq!(a.perp_dot(&b), a.to_3d().cross(&b.to_3d())[2]);
    }

    #[test]
    fn normalizing_null_vector_is_identity() {
        let z = Vector3::<f64>::zero();
        assert_eq!(z.normalized(), z);
        assert!((Vector3::new(3.0, 0.0, 4.0).normalized().norm() - 1.0f64).abs() < 1e-12);
    }

    #[test]
    fn embed_drops_z() {
        let v = Vector3::new(1.0f64, 2.0, 3.0);
        assert_eq!(Vector2::from_3d(&v), Vector2::new(1.0, 2.0));
    }
}
