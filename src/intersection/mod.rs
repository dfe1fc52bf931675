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

//! Ray intersection engine.
//!
//! Every query is solved once in 3D by the free functions of the submodules.
//! 2D rays and primitives are lifted to the `z = 0` plane through
//! [`Embed3`] and the resulting points dropped back to 2D.

pub mod ray_hexahedron;
pub mod ray_orb;
pub mod ray_plane;
pub mod ray_polygon;
pub mod ray_ray;

pub use ray_hexahedron::ray_hexahedron_intersection;
pub use ray_orb::ray_orb_intersection;
pub use ray_plane::{ray_plane_intersection, ray_plane_relation};
pub use ray_polygon::{ray_quadrilateral_intersection, ray_triangle_intersection};
pub use ray_ray::{ray_ray_intersection, ray_segment_intersection};

use crate::{
    config::GeometryConfig,
    geometry::{
        hexahedron::Hexahedron,
        orb::Orb,
        plane::Plane,
        quadrilateral::Quadrilateral,
        ray::{Ray, Ray3},
        segment::Segment,
        triangle::Triangle,
        vector::{Embed3, Vector, Vector3},
    },
    numeric::scalar::Scalar,
};

/// Number of intersection points, without the points themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionCount {
    None,
    One,
    Two,
    Infinite,
}

/// Outcome of an intersection query.
///
/// Points are only carried by the variants that produce them. In `Two`, the
/// first point is the one reported when a single point is asked for: the
/// nearest to the ray origin, or the vertex the ray starts from when the
/// origin sits on a polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection<P> {
    None,
    One(P),
    Two(P, P),
    Infinite,
}

impl<P> Intersection<P> {
    pub fn count(&self) -> IntersectionCount {
        match self {
            Intersection::None => IntersectionCount::None,
            Intersection::One(_) => IntersectionCount::One,
            Intersection::Two(_, _) => IntersectionCount::Two,
            Intersection::Infinite => IntersectionCount::Infinite,
        }
    }

    pub fn intersects(&self) -> bool {
        !matches!(self, Intersection::None)
    }

    pub fn first(&self) -> Option<&P> {
        match self {
            Intersection::One(p) | Intersection::Two(p, _) => Some(p),
            _ => None,
        }
    }

    pub fn second(&self) -> Option<&P> {
        match self {
            Intersection::Two(_, q) => Some(q),
            _ => None,
        }
    }

    pub fn map<Q>(self, f: impl Fn(P) -> Q) -> Intersection<Q> {
        match self {
            Intersection::None => Intersection::None,
            Intersection::One(p) => Intersection::One(f(p)),
            Intersection::Two(p, q) => Intersection::Two(f(p), f(q)),
            Intersection::Infinite => Intersection::Infinite,
        }
    }

    pub fn points(self) -> Vec<P> {
        match self {
            Intersection::One(p) => vec![p],
            Intersection::Two(p, q) => vec![p, q],
            _ => Vec::new(),
        }
    }
}

/// Ray queries against a target primitive.
pub trait Intersect<T: Scalar, Target> {
    type Point;

    fn intersection(&self, target: &Target, cfg: &GeometryConfig<T>) -> Intersection<Self::Point>;

    /// Boolean form of [`intersection`](Self::intersection).
    fn intersects(&self, target: &Target, cfg: &GeometryConfig<T>) -> bool {
        self.intersection(target, cfg).intersects()
    }

    /// Single-point form: the first point of [`intersection`](Self::intersection).
    fn first_intersection(&self, target: &Target, cfg: &GeometryConfig<T>) -> Option<Self::Point> {
        match self.intersection(target, cfg) {
            Intersection::One(p) | Intersection::Two(p, _) => Some(p),
            _ => None,
        }
    }
}

fn lift<T: Scalar, const N: usize>(v: &Vector<T, N>) -> Vector3<T>
where
    Vector<T, N>: Embed3<T>,
{
    v.to_3d()
}

fn project<T: Scalar, const N: usize>(v: Vector3<T>) -> Vector<T, N>
where
    Vector<T, N>: Embed3<T>,
{
    Vector::<T, N>::from_3d(&v)
}

impl<T: Scalar, const N: usize> Intersect<T, Ray<T, N>> for Ray<T, N>
where
    Vector<T, N>: Embed3<T>,
{
    type Point = Vector<T, N>;

    fn intersection(&self, other: &Ray<T, N>, cfg: &GeometryConfig<T>) -> Intersection<Vector<T, N>> {
        ray_ray_intersection(&self.to_3d(), &other.to_3d(), cfg).map(project)
    }
}

impl<T: Scalar, const N: usize> Intersect<T, Segment<T, N>> for Ray<T, N>
where
    Vector<T, N>: Embed3<T>,
{
    type Point = Vector<T, N>;

    fn intersection(
        &self,
        segment: &Segment<T, N>,
        cfg: &GeometryConfig<T>,
    ) -> Intersection<Vector<T, N>> {
        let segment = Segment::new(&lift(&segment.a), &lift(&segment.b));
        ray_segment_intersection(&self.to_3d(), &segment, cfg).map(project)
    }
}

impl<T: Scalar, const N: usize> Intersect<T, Triangle<T, N>> for Ray<T, N>
where
    Vector<T, N>: Embed3<T>,
{
    type Point = Vector<T, N>;

    fn intersection(
        &self,
        triangle: &Triangle<T, N>,
        cfg: &GeometryConfig<T>,
    ) -> Intersection<Vector<T, N>> {
        let [a, b, c] = triangle.vertices().map(|v| lift(&v));
        ray_triangle_intersection(&self.to_3d(), &Triangle::new(&a, &b, &c), cfg).map(project)
    }
}

impl<T: Scalar, const N: usize> Intersect<T, Quadrilateral<T, N>> for Ray<T, N>
where
    Vector<T, N>: Embed3<T>,
{
    type Point = Vector<T, N>;

    fn intersection(
        &self,
        quad: &Quadrilateral<T, N>,
        cfg: &GeometryConfig<T>,
    ) -> Intersection<Vector<T, N>> {
        let [a, b, c, d] = quad.vertices().map(|v| lift(&v));
        ray_quadrilateral_intersection(&self.to_3d(), &Quadrilateral::new(&a, &b, &c, &d), cfg)
            .map(project)
    }
}

impl<T: Scalar, const N: usize> Intersect<T, Orb<T, N>> for Ray<T, N> {
    type Point = Vector<T, N>;

    fn intersection(&self, orb: &Orb<T, N>, cfg: &GeometryConfig<T>) -> Intersection<Vector<T, N>> {
        ray_orb_intersection(self, orb, cfg)
    }
}

impl<T: Scalar> Intersect<T, Plane<T>> for Ray3<T> {
    type Point = Vector3<T>;

    fn intersection(&self, plane: &Plane<T>, cfg: &GeometryConfig<T>) -> Intersection<Vector3<T>> {
        ray_plane_intersection(self, plane, cfg)
    }
}

impl<T: Scalar> Intersect<T, Hexahedron<T>> for Ray3<T> {
    type Point = Vector3<T>;

    fn intersection(
        &self,
        hexahedron: &Hexahedron<T>,
        cfg: &GeometryConfig<T>,
    ) -> Intersection<Vector3<T>> {
        ray_hexahedron_intersection(self, hexahedron, cfg)
    }
}
