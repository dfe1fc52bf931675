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
    geometry::{hexahedron::Hexahedron, ray::Ray3, vector::Vector3},
    intersection::{Intersection, ray_polygon::ray_quadrilateral_intersection},
    kernel::predicates::nearest_first,
    numeric::scalar::Scalar,
};

/// Ray against a convex hexahedron, face by face.
///
/// A face crossed twice (the ray runs inside its plane) settles the query.
/// Otherwise the first two distinct face hits are kept, so a ray through an
/// edge or a corner shared by several faces counts that point once.
pub fn ray_hexahedron_intersection<T: Scalar>(
    ray: &Ray3<T>,
    hexahedron: &Hexahedron<T>,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    let mut first: Option<Vector3<T>> = None;
    let mut second: Option<Vector3<T>> = None;

    for face in hexahedron.faces() {
        match ray_quadrilateral_intersection(ray, &face, cfg) {
            Intersection::Two(p, q) => return Intersection::Two(p, q),
            Intersection::One(p) => match first {
                None => first = Some(p),
                Some(q) if second.is_none() && !cfg.points_equal(&p, &q) => second = Some(p),
                _ => {}
            },
            _ => {}
        }
    }

    match (first, second) {
        (Some(p), Some(q)) => {
            let (near, far) = nearest_first(&ray.origin, p, q);
            Intersection::Two(near, far)
        }
        (Some(p), None) => Intersection::One(p),
        _ => Intersection::None,
    }
}
