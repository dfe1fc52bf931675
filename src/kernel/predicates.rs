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
};

/// Directions whose angle has a (tolerance-)zero sine. The test does not
/// depend on the lengths of `d1` and `d2`; a null direction is parallel to
/// everything.
pub fn are_parallel<T: Scalar>(d1: &Vector3<T>, d2: &Vector3<T>, cfg: &GeometryConfig<T>) -> bool {
    let lengths = d1.norm() * d2.norm();
    lengths == T::zero() || cfg.is_zero(d1.cross(d2).norm() / lengths)
}

pub fn are_collinear<T: Scalar>(
    a: &Vector3<T>,
    b: &Vector3<T>,
    c: &Vector3<T>,
    cfg: &GeometryConfig<T>,
) -> bool {
    are_parallel(&(*b - *a), &(*c - *a), cfg)
}

/// Parameter `t` of the orthogonal projection of `p` on the line
/// `origin + t * direction`.
pub fn line_parameter<T: Scalar>(origin: &Vector3<T>, direction: &Vector3<T>, p: &Vector3<T>) -> T {
    (*p - *origin).dot(direction) / direction.norm_squared()
}

/// Perpendicular distance from `p` to the line `origin + t * direction`.
pub fn distance_to_line<T: Scalar>(origin: &Vector3<T>, direction: &Vector3<T>, p: &Vector3<T>) -> T {
    direction.cross(&(*p - *origin)).norm() / direction.norm()
}

/// `p` lies on the line `origin + t * direction`, within the tolerance.
pub fn is_on_line<T: Scalar>(
    origin: &Vector3<T>,
    direction: &Vector3<T>,
    p: &Vector3<T>,
    cfg: &GeometryConfig<T>,
) -> bool {
    cfg.is_zero(distance_to_line(origin, direction, p))
}

/// Orders `p` and `q` by distance to `origin`, nearest first.
pub fn nearest_first<T: Scalar>(
    origin: &Vector3<T>,
    p: Vector3<T>,
    q: Vector3<T>,
) -> (Vector3<T>, Vector3<T>) {
    if origin.distance_to(&q) < origin.distance_to(&p) {
        (q, p)
    } else {
        (p, q)
    }
}
