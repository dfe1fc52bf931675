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
        matrix::Matrix3,
        ray::Ray3,
        segment::Segment3,
        vector::{Cross3, Vector3, VectorOps},
    },
    intersection::Intersection,
    kernel::predicates::{are_parallel, is_on_line, line_parameter},
    numeric::scalar::Scalar,
};

/// Ray against ray.
///
/// Collinear rays sharing part of their support report `Infinite`; opposite
/// rays starting from the same point meet only there.
pub fn ray_ray_intersection<T: Scalar>(
    r1: &Ray3<T>,
    r2: &Ray3<T>,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    let (o1, d1) = (r1.origin, r1.direction);
    let (o2, d2) = (r2.origin, r2.direction);
    if are_parallel(&d1, &d2, cfg) {
        if !is_on_line(&o1, &d1, &o2, cfg) {
            return Intersection::None;
        }
        if d1.dot(&d2) > T::zero() {
            return Intersection::Infinite;
        }
        if cfg.points_equal(&o1, &o2) {
            return Intersection::One(o1);
        }
        return if line_parameter(&o1, &d1, &o2) > T::zero() {
            Intersection::Infinite
        } else {
            Intersection::None
        };
    }

    let cross = d1.cross(&d2);
    let denom = cross.norm_squared();
    let dp = o2 - o1;
    let t1 = Matrix3::determinant_of_rows(&dp, &d2, &cross) / denom;
    let t2 = Matrix3::determinant_of_rows(&dp, &d1, &cross) / denom;
    if !cfg.is_greater_or_equal(t1, T::zero()) || !cfg.is_greater_or_equal(t2, T::zero()) {
        return Intersection::None;
    }

    let p1 = r1.point_at(t1.max(T::zero()));
    let p2 = r2.point_at(t2.max(T::zero()));
    if cfg.points_equal(&p1, &p2) {
        Intersection::One(p1)
    } else {
        Intersection::None
    }
}

/// Ray against segment.
///
/// A crossing at a segment endpoint is reported as that exact endpoint, so
/// that adjacent polygon edges agree on shared vertices.
pub fn ray_segment_intersection<T: Scalar>(
    ray: &Ray3<T>,
    segment: &Segment3<T>,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    let (o, d1) = (ray.origin, ray.direction);
    let d2 = segment.b - segment.a;
    if are_parallel(&d1, &d2, cfg) {
        return collinear_ray_segment(ray, segment, cfg);
    }

    let cross = d1.cross(&d2);
    let denom = cross.norm_squared();
    let dp = segment.a - o;
    let t1 = Matrix3::determinant_of_rows(&dp, &d2, &cross) / denom;
    let t2 = Matrix3::determinant_of_rows(&dp, &d1, &cross) / denom;
    if !cfg.is_greater_or_equal(t1, T::zero())
        || !cfg.is_greater_or_equal(t2, T::zero())
        || !cfg.is_less_or_equal(t2, T::one())
    {
        return Intersection::None;
    }

    let on_ray = ray.point_at(t1.max(T::zero()));
    let on_segment = segment.a + d2.scale(t2);
    if !cfg.points_equal(&on_ray, &on_segment) {
        return Intersection::None;
    }

    let point = if cfg.points_equal(&on_segment, &segment.a) {
        segment.a
    } else if cfg.points_equal(&on_segment, &segment.b) {
        segment.b
    } else if cfg.points_equal(&on_ray, &o) {
        o
    } else {
        on_ray
    };
    Intersection::One(point)
}

// Segment parallel to the ray (or reduced to a point).
fn collinear_ray_segment<T: Scalar>(
    ray: &Ray3<T>,
    segment: &Segment3<T>,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    let (o, d) = (ray.origin, ray.direction);
    if !is_on_line(&o, &d, &segment.a, cfg) || !is_on_line(&o, &d, &segment.b, cfg) {
        return Intersection::None;
    }

    let ta = line_parameter(&o, &d, &segment.a);
    let tb = line_parameter(&o, &d, &segment.b);

    if cfg.points_equal(&segment.a, &segment.b) {
        return if cfg.points_equal(&segment.a, &o) || ta > T::zero() {
            Intersection::One(segment.a)
        } else {
            Intersection::None
        };
    }

    let far = if ta >= tb { segment.a } else { segment.b };
    if cfg.points_equal(&far, &o) {
        Intersection::One(o)
    } else if ta.max(tb) < T::zero() {
        Intersection::None
    } else {
        Intersection::Infinite
    }
}
