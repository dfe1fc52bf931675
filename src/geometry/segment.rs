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
    geometry::vector::{Vector, Vector3, VectorOps},
    numeric::scalar::Scalar,
    rotation::transform::{Transformable, Transformation},
};

/// Line segment between `a` and `b`.
///
/// Intersection code walks the segment from `a` to `b`, so the point order
/// defines its internal parametrization `a + t (b - a)`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub a: Vector<T, N>,
    pub b: Vector<T, N>,
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(a: &Vector<T, N>, b: &Vector<T, N>) -> Self {
        Self { a: *a, b: *b }
    }

    pub fn length(&self) -> T {
        self.a.distance_to(&self.b)
    }

    pub fn center(&self) -> Vector<T, N> {
        self.a.midpoint(&self.b)
    }

    pub fn direction(&self) -> Vector<T, N> {
        self.b - self.a
    }

    pub fn inverse(&self) -> Self {
        Self::new(&self.b, &self.a)
    }

    /// Point of the segment closest to `p`.
    pub fn closest_point(&self, p: &Vector<T, N>) -> Vector<T, N> {
        let ab = self.direction();
        let len2 = ab.norm_squared();
        if len2 == T::zero() {
            // a == b; degenerate segment
            return self.a;
        }
        let t = ((*p - self.a).dot(&ab) / len2).max(T::zero()).min(T::one());
        self.a + ab.scale(t)
    }

    pub fn min_distance_to_point(&self, p: &Vector<T, N>) -> T {
        self.closest_point(p).distance_to(p)
    }

    /// `p` lies on the segment within the configured tolerance.
    pub fn contains(&self, p: &Vector<T, N>, cfg: &GeometryConfig<T>) -> bool {
        cfg.is_zero(self.min_distance_to_point(p))
    }
}

impl<T: Scalar> Transformable<T> for Segment3<T> {
    fn transformed(&self, t: &Transformation<T>) -> Self {
        Self::new(&t.apply_to_point(&self.a), &t.apply_to_point(&self.b))
    }
}

impl<T: Scalar> From<(Vector3<T>, Vector3<T>)> for Segment3<T> {
    fn from((a, b): (Vector3<T>, Vector3<T>)) -> Self {
        Self::new(&a, &b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::Vector2;

    #[test]
    fn closest_point_is_clamped() {
        let s = Segment2::new(&Vector2::new(0.0f64, 0.0), &Vector2::new(4.0, 0.0));
        assert_eq!(s.closest_point(&Vector2::new(2.0, 3.0)), Vector2::new(2.0, 0.0));
        assert_eq!(s.closest_point(&Vector2::new(-2.0, 1.0)), Vector2::new(0.0, 0.0));
        assert_eq!(s.min_distance_to_point(&Vector2::new(7.0, 4.0)), 5.0);
    }

    #[test]
    fn contains_endpoints_and_interior() {
        let cfg = GeometryConfig::default();
        let s = Segment3::new(
            &Vector3::new(0.0f64, 0.0, 0.0),
            &Vector3::new(1.0, 1.0, 1.0),
        );
        assert!(s.contains(&s.a, &cfg));
        assert!(s.contains(&s.center(), &cfg));
        assert!(!s.contains(&Vector3::new(2.0, 2.0, 2.0), &cfg));
        assert_eq!(s.length(), 3.0f64.sqrt());
    }
}
