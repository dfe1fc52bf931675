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

use crate::{
    config::GeometryConfig,
    geometry::vector::{Embed3, Vector, Vector3, VectorOps},
    numeric::scalar::Scalar,
    rotation::transform::{Transformable, Transformation},
};

/// Half-line starting at `origin` and running along `direction`.
///
/// The direction is not normalized on construction. Queries that need a unit
/// direction say so in their documentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T: Scalar, const N: usize> {
    pub origin: Vector<T, N>,
    pub direction: Vector<T, N>,
}

pub type Ray2<T> = Ray<T, 2>;
pub type Ray3<T> = Ray<T, 3>;

impl<T: Scalar, const N: usize> Ray<T, N> {
    pub fn new(origin: &Vector<T, N>, direction: &Vector<T, N>) -> Self {
        Self {
            origin: *origin,
            direction: *direction,
        }
    }

    /// `origin + t * direction`.
    pub fn point_at(&self, t: T) -> Vector<T, N> {
        self.origin + self.direction.scale(t)
    }

    pub fn normalized(&self) -> Self {
        Self::new(&self.origin, &self.direction.normalized())
    }

    pub fn is_normalized(&self, cfg: &GeometryConfig<T>) -> bool {
        cfg.are_equal(self.direction.norm_squared(), T::one())
    }
}

impl<T: Scalar, const N: usize> Ray<T, N>
where
    Vector<T, N>: Embed3<T>,
{
    pub fn to_3d(&self) -> Ray3<T> {
        Ray3::new(&self.origin.to_3d(), &self.direction.to_3d())
    }
}

/// Direction is re-normalized after scales and general matrices.
impl<T: Scalar> Transformable<T> for Ray3<T> {
    fn transformed(&self, t: &Transformation<T>) -> Self {
        let origin = t.apply_to_point(&self.origin);
        let direction = t.apply_to_vector(&self.direction);
        let direction = if t.alters_lengths() {
            direction.normalized()
        } else {
            direction
        };
        Self::new(&origin, &direction)
    }

    /// Only the origin is moved around the pivot; the direction turns in place.
    fn transformed_with_pivot(&self, t: &Transformation<T>, pivot: &Vector3<T>) -> Self {
        let origin = t.apply_to_point(&(self.origin - *pivot)) + *pivot;
        let moved = self.transformed(t);
        Self::new(&origin, &moved.direction)
    }
}
