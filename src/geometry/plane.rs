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
    geometry::vector::{Cross3, Vector3, VectorOps},
    numeric::scalar::Scalar,
    rotation::transform::{Transformable, Transformation},
};

/// Position of a point or a ray with respect to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceRelation {
    Contained,
    PositiveSide,
    NegativeSide,
    BothSides,
}

/// Plane `a x + b y + c z + d = 0`; `(a, b, c)` is its (not necessarily
/// unit) normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane<T: Scalar> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: Scalar> Plane<T> {
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Plane { a, b, c, d }
    }

    pub fn from_point_normal(point: &Vector3<T>, normal: &Vector3<T>) -> Self {
        let d = -normal.dot(point);
        Plane::new(normal[0], normal[1], normal[2], d)
    }

    /// Plane through three non-collinear points.
    ///
    /// The normal is `(p2 - p1) x (p3 - p1)`, so swapping two points flips
    /// which side is positive.
    pub fn from_points(p1: &Vector3<T>, p2: &Vector3<T>, p3: &Vector3<T>) -> Self {
        let v1 = *p2 - *p1;
        let v2 = *p3 - *p1;
        let normal = v1.cross(&v2);
        Plane::from_point_normal(p1, &normal)
    }

    pub fn normal(&self) -> Vector3<T> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Same plane with a unit normal.
    pub fn normalized(&self) -> Self {
        let n = self.normal().norm();
        if n == T::zero() {
            return *self;
        }
        Plane::new(self.a / n, self.b / n, self.c / n, self.d / n)
    }

    /// `a x + b y + c z + d`; a true distance only for normalized planes.
    pub fn signed_distance(&self, p: &Vector3<T>) -> T {
        self.normal().dot(p) + self.d
    }

    /// Euclidean distance from `p` to the plane.
    pub fn distance(&self, p: &Vector3<T>) -> T {
        self.normalized().signed_distance(p).abs()
    }

    pub fn contains(&self, p: &Vector3<T>, cfg: &GeometryConfig<T>) -> bool {
        cfg.is_zero(self.signed_distance(p))
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn point_projection(&self, p: &Vector3<T>) -> Vector3<T> {
        let n = self.normal();
        let n2 = n.norm_squared();
        if n2 == T::zero() {
            return *p;
        }
        *p - n.scale(self.signed_distance(p) / n2)
    }

    /// `Contained`, `PositiveSide` or `NegativeSide`; never `BothSides`.
    pub fn point_relation(&self, p: &Vector3<T>, cfg: &GeometryConfig<T>) -> SpaceRelation {
        let dist = self.signed_distance(p);
        if cfg.is_zero(dist) {
            SpaceRelation::Contained
        } else if dist < T::zero() {
            SpaceRelation::NegativeSide
        } else {
            SpaceRelation::PositiveSide
        }
    }

    /// Some point lying on the plane.
    pub fn origin(&self) -> Vector3<T> {
        self.point_projection(&Vector3::zero())
    }

    /// Two directions spanning the plane.
    pub fn basis(&self) -> (Vector3<T>, Vector3<T>) {
        let n = self.normal();
        let helper = if n[0].abs() <= n[1].abs() && n[0].abs() <= n[2].abs() {
            Vector3::unit_x()
        } else if n[1].abs() <= n[2].abs() {
            Vector3::unit_y()
        } else {
            Vector3::unit_z()
        };
        let u = n.cross(&helper);
        let v = n.cross(&u);
        (u, v)
    }
}

impl<T: Scalar> Transformable<T> for Plane<T> {
    fn transformed(&self, t: &Transformation<T>) -> Self {
        match t {
            Transformation::Translation(v) => {
                Plane::new(self.a, self.b, self.c, self.d - self.normal().dot(v))
            }
            Transformation::Rotation(_) | Transformation::RotationMatrix(_) => {
                let n = t.apply_to_vector(&self.normal());
                Plane::new(n[0], n[1], n[2], self.d)
            }
            Transformation::Scale(s) => {
                Plane::new(self.a / s[0], self.b / s[1], self.c / s[2], self.d)
            }
            Transformation::Matrix(_) => {
                // Rebuild from transformed points, keeping the winding.
                let p = self.origin();
                let (u, v) = self.basis();
                let p1 = t.apply_to_point(&p);
                let p2 = t.apply_to_point(&(p + u));
                let p3 = t.apply_to_point(&(p + v));
                let rebuilt = Plane::from_points(&p1, &p2, &p3);
                // `u x v` points along `n`, keep the original scale of the normal.
                let k = self.normal().norm() / rebuilt.normal().norm();
                Plane::new(rebuilt.a * k, rebuilt.b * k, rebuilt.c * k, rebuilt.d * k)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_orientation() {
        let p = Plane::from_points(
            &Vector3::new(0.0f64, 0.0, 0.0),
            &Vector3::new(1.0, 0.0, 0.0),
            &Vector3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(p.normal(), Vector3::unit_z());
        let cfg = GeometryConfig::default();
        assert_eq!(
            p.point_relation(&Vector3::new(0.0, 0.0, 2.0), &cfg),
            SpaceRelation::PositiveSide
        );
        assert_eq!(
            p.point_relation(&Vector3::new(3.0, -1.0, 0.0), &cfg),
            SpaceRelation::Contained
        );
    }

    #[test]
    fn projection_and_distance() {
        let p = Plane::new(0.0f64, 2.0, 0.0, -10.0); // y = 5
        let q = Vector3::new(1.0, 8.0, -2.0);
        assert_eq!(p.distance(&q), 3.0);
        assert_eq!(p.point_projection(&q), Vector3::new(1.0, 5.0, -2.0));
        assert!(p.contains(&p.origin(), &GeometryConfig::default()));
    }
}
