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
    ops::{Add, Index, IndexMut, Mul, Sub},
};

use crate::{config::GeometryConfig, geometry::vector::Vector, numeric::scalar::Scalar};

/// Generic row-major matrix R x C.
///
/// Vectors are treated as rows: a vector is transformed as `v * M`, so the
/// product `A * B` applies `A` first and `B` second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T: Scalar, const R: usize, const C: usize>(pub [[T; C]; R]);

pub type Matrix3<T> = Matrix<T, 3, 3>;
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ---------- Basics ----------
impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn new(data: [[T; C]; R]) -> Self {
        Matrix(data)
    }

    #[inline]
    pub fn zero() -> Self {
        Matrix([[T::zero(); C]; R])
    }

    /// Matrix filled with a single value.
    #[inline]
    pub fn splat(val: T) -> Self {
        Matrix([[val; C]; R])
    }

    /// Transpose into C x R.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix(array::from_fn(|j| array::from_fn(|i| self[i][j])))
    }

    /// Scale all entries by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Matrix(array::from_fn(|i| array::from_fn(|j| self[i][j] * s)))
    }

    /// Get a row as a Vector<T, C>.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<T, C> {
        Vector::from_vals(self.0[r])
    }

    /// Get a column as a Vector<T, R>.
    #[inline]
    pub fn col(&self, c: usize) -> Vector<T, R> {
        Vector::from_vals(array::from_fn(|i| self[i][c]))
    }

    /// Every entry is zero within the configured tolerance.
    pub fn is_zero(&self, cfg: &GeometryConfig<T>) -> bool {
        self.0.iter().all(|row| row.iter().all(|x| cfg.is_zero(*x)))
    }

    /// Entry-wise tolerance comparison.
    pub fn approx_eq(&self, other: &Self, cfg: &GeometryConfig<T>) -> bool {
        (0..R).all(|i| (0..C).all(|j| cfg.are_equal(self[i][j], other[i][j])))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| if i == j { T::one() } else { T::zero() })
        }))
    }

    pub fn is_identity(&self, cfg: &GeometryConfig<T>) -> bool {
        self.approx_eq(&Self::identity(), cfg)
    }

    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self[i][i])
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    pub fn determinant(&self) -> T {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Determinant of the matrix whose rows are `a`, `b` and `c`.
    pub fn determinant_of_rows(a: &Vector<T, 3>, b: &Vector<T, 3>, c: &Vector<T, 3>) -> T {
        Matrix::new([a.coords, b.coords, c.coords]).determinant()
    }
}

// ---------- Indexing ----------
impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ---------- Add / Sub ----------
impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Matrix(array::from_fn(|i| array::from_fn(|j| self[i][j] + rhs[i][j])))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Matrix(array::from_fn(|i| array::from_fn(|j| self[i][j] - rhs[i][j])))
    }
}

// ---------- Products ----------
impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| (0..K).fold(T::zero(), |acc, k| acc + self[i][k] * rhs[k][j]))
        }))
    }
}

/// Row vector times matrix.
impl<T: Scalar, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;
    fn mul(self, rhs: Matrix<T, R, C>) -> Vector<T, C> {
        Vector::from_vals(array::from_fn(|j| {
            (0..R).fold(T::zero(), |acc, i| acc + self[i] * rhs[i][j])
        }))
    }
}
