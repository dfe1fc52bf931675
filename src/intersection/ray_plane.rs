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
    geometry::{
        plane::{Plane, SpaceRelation},
        ray::Ray3,
        vector::{Vector3, VectorOps},
    },
    intersection::Intersection,
    numeric::scalar::Scalar,
};

/// Ray against plane. A ray lying in the plane is `Infinite`.
///
/// Distances are measured against the unit-normal form of the plane.
pub fn ray_plane_intersection<T: Scalar>(
    ray: &Ray3<T>,
    plane: &Plane<T>,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    let plane = plane.normalized();
    let nv = plane.normal().dot(&ray.direction);
    let dist = plane.signed_distance(&ray.origin);

    if cfg.is_zero(nv) {
        return if cfg.is_zero(dist) {
            Intersection::Infinite
        } else {
            Intersection::None
        };
    }
    if cfg.is_zero(dist) {
        return Intersection::One(ray.origin);
    }

    let t = -dist / nv;
    if t > T::zero() {
        Intersection::One(ray.point_at(t))
    } else {
        Intersection::None
    }
}

/// Classifies a ray against a plane from the signed distances of its origin
/// and of `origin + direction`.
pub fn ray_plane_relation<T: Scalar>(
    ray: &Ray3<T>,
    plane: &Plane<T>,
    cfg: &GeometryConfig<T>,
) -> SpaceRelation {
    let plane = plane.normalized();
    let d0 = plane.signed_distance(&ray.origin);
    let d1 = plane.signed_distance(&(ray.origin + ray.direction));

    if cfg.is_zero(d0) {
        if cfg.is_zero(d1) {
            SpaceRelation::Contained
        } else if d1 < T::zero() {
            SpaceRelation::NegativeSide
        } else {
            SpaceRelation::PositiveSide
        }
    } else if d0 < T::zero() {
        if cfg.is_less_or_equal(d1, d0) {
            SpaceRelation::NegativeSide
        } else {
            SpaceRelation::BothSides
        }
    } else if cfg.is_greater_or_equal(d1, d0) {
        SpaceRelation::PositiveSide
    } else {
        SpaceRelation::BothSides
    }
}

impl<T: Scalar> Ray3<T> {
    pub fn space_relation(&self, plane: &Plane<T>, cfg: &GeometryConfig<T>) -> SpaceRelation {
        ray_plane_relation(self, plane, cfg)
    }
}
