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

//! Ray against planar polygons (triangles and quadrilaterals).
//!
//! The ray is first tested against the supporting plane. A single crossing
//! is kept when it falls inside the polygon. A ray lying in the polygon's
//! plane is resolved edge by edge, depending on where its origin sits: on a
//! vertex, on an edge, strictly inside, or outside.

use crate::{
    config::GeometryConfig,
    geometry::{
        plane::Plane,
        quadrilateral::Quadrilateral3,
        ray::Ray3,
        segment::Segment3,
        triangle::Triangle3,
        vector::Vector3,
    },
    intersection::{Intersection, ray_plane::ray_plane_intersection, ray_ray::ray_segment_intersection},
    kernel::{
        containment::{point_in_quadrilateral, point_in_triangle},
        predicates::nearest_first,
    },
    numeric::scalar::Scalar,
};

/// # Panics
///
/// If the triangle is degenerate, or if a coplanar ray starting strictly
/// inside the triangle finds no boundary crossing.
pub fn ray_triangle_intersection<T: Scalar>(
    ray: &Ray3<T>,
    triangle: &Triangle3<T>,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    ray_polygon_intersection(ray, &triangle.vertices(), |p| point_in_triangle(triangle, p, cfg), cfg)
}

/// The supporting plane is taken through `a`, `b` and `c`.
///
/// # Panics
///
/// Same conditions as [`ray_triangle_intersection`].
pub fn ray_quadrilateral_intersection<T: Scalar>(
    ray: &Ray3<T>,
    quad: &Quadrilateral3<T>,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    ray_polygon_intersection(ray, &quad.vertices(), |p| point_in_quadrilateral(quad, p, cfg), cfg)
}

fn ray_polygon_intersection<T: Scalar>(
    ray: &Ray3<T>,
    vertices: &[Vector3<T>],
    contains: impl Fn(&Vector3<T>) -> bool,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    let plane = Plane::from_points(&vertices[0], &vertices[1], &vertices[2]);
    match ray_plane_intersection(ray, &plane, cfg) {
        Intersection::One(p) if contains(&p) => Intersection::One(p),
        Intersection::Infinite => coplanar_intersection(ray, vertices, contains, cfg),
        _ => Intersection::None,
    }
}

fn edge<T: Scalar>(vertices: &[Vector3<T>], i: usize) -> Segment3<T> {
    Segment3::new(&vertices[i], &vertices[(i + 1) % vertices.len()])
}

// Single crossing of one edge; a collinear edge yields its endpoint
// nearest to the origin.
fn edge_crossing<T: Scalar>(ray: &Ray3<T>, edge: &Segment3<T>, cfg: &GeometryConfig<T>) -> Option<Vector3<T>> {
    match ray_segment_intersection(ray, edge, cfg) {
        Intersection::One(p) => Some(p),
        Intersection::Infinite => Some(nearest_first(&ray.origin, edge.a, edge.b).0),
        _ => None,
    }
}

fn coplanar_intersection<T: Scalar>(
    ray: &Ray3<T>,
    vertices: &[Vector3<T>],
    contains: impl Fn(&Vector3<T>) -> bool,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    let n = vertices.len();
    let origin = ray.origin;

    if !contains(&origin) {
        log::trace!("coplanar ray starts outside the polygon");
        return outside_intersection(ray, vertices, cfg);
    }

    if let Some(k) = vertices.iter().position(|v| cfg.points_equal(v, &origin)) {
        log::trace!("coplanar ray starts on vertex {k}");
        let vertex = vertices[k];
        let far = (0..n)
            .filter(|&i| i != k && (i + 1) % n != k)
            .find_map(|i| edge_crossing(ray, &edge(vertices, i), cfg))
            .filter(|p| !cfg.points_equal(p, &vertex));
        return match far {
            Some(p) => Intersection::Two(vertex, p),
            None => Intersection::One(vertex),
        };
    }

    if let Some(e) = (0..n).find(|&i| cfg.is_zero(edge(vertices, i).min_distance_to_point(&origin))) {
        log::trace!("coplanar ray starts on edge {e}");
        let far = (1..n)
            .filter_map(|j| edge_crossing(ray, &edge(vertices, (e + j) % n), cfg))
            .find(|p| !cfg.points_equal(p, &origin));
        return match far {
            Some(p) => Intersection::Two(origin, p),
            None => Intersection::One(origin),
        };
    }

    log::trace!("coplanar ray starts strictly inside the polygon");
    let exit = (0..n)
        .filter_map(|i| edge_crossing(ray, &edge(vertices, i), cfg))
        .reduce(|best, p| nearest_first(&origin, best, p).0);
    match exit {
        Some(p) => Intersection::One(p),
        None => {
            log::error!("ray {ray:?} starts inside polygon {vertices:?} but crosses no edge");
            panic!("coplanar ray starting inside a polygon must cross its boundary");
        }
    }
}

fn outside_intersection<T: Scalar>(
    ray: &Ray3<T>,
    vertices: &[Vector3<T>],
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector3<T>> {
    let origin = ray.origin;
    let mut first: Option<Vector3<T>> = None;
    let mut second: Option<Vector3<T>> = None;

    for i in 0..vertices.len() {
        let side = edge(vertices, i);
        match ray_segment_intersection(ray, &side, cfg) {
            Intersection::Infinite => {
                let (near, far) = nearest_first(&origin, side.a, side.b);
                return Intersection::Two(near, far);
            }
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
            let (near, far) = nearest_first(&origin, p, q);
            Intersection::Two(near, far)
        }
        (Some(p), None) => Intersection::One(p),
        _ => Intersection::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{quadrilateral::Quadrilateral, triangle::Triangle};

    fn v(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3::new(x, y, z)
    }

    fn tri() -> Triangle3<f64> {
        Triangle::new(&v(0.0, 0.0, 0.0), &v(4.0, 0.0, 0.0), &v(0.0, 4.0, 0.0))
    }

    fn square() -> Quadrilateral3<f64> {
        Quadrilateral::new(
            &v(0.0, 0.0, 0.0),
            &v(4.0, 0.0, 0.0),
            &v(4.0, 4.0, 0.0),
            &v(0.0, 4.0, 0.0),
        )
    }

    #[test]
    fn crossing_the_plane() {
        let cfg = GeometryConfig::default();
        let down = v(0.0, 0.0, -1.0);
        let hit = Ray3::new(&v(1.0, 1.0, 5.0), &down);
        let miss = Ray3::new(&v(3.0, 3.0, 5.0), &down);
        assert_eq!(ray_triangle_intersection(&hit, &tri(), &cfg), Intersection::One(v(1.0, 1.0, 0.0)));
        assert_eq!(ray_triangle_intersection(&miss, &tri(), &cfg), Intersection::None);
        assert_eq!(
            ray_quadrilateral_intersection(&miss, &square(), &cfg),
            Intersection::One(v(3.0, 3.0, 0.0))
        );
    }

    #[test]
    fn coplanar_from_outside() {
        let cfg = GeometryConfig::default();
        let ray = Ray3::new(&v(-1.0, 1.0, 0.0), &v(1.0, 0.0, 0.0));
        assert_eq!(
            ray_triangle_intersection(&ray, &tri(), &cfg),
            Intersection::Two(v(0.0, 1.0, 0.0), v(3.0, 1.0, 0.0))
        );
        assert_eq!(
            ray_quadrilateral_intersection(&ray, &square(), &cfg),
            Intersection::Two(v(0.0, 1.0, 0.0), v(4.0, 1.0, 0.0))
        );
    }

    #[test]
    fn coplanar_through_a_vertex_only() {
        let cfg = GeometryConfig::default();
        let ray = Ray3::new(&v(-1.0, 3.0, 0.0), &v(1.0, 1.0, 0.0));
        assert_eq!(ray_triangle_intersection(&ray, &tri(), &cfg), Intersection::One(v(0.0, 4.0, 0.0)));
    }

    #[test]
    fn coplanar_along_an_edge() {
        let cfg = GeometryConfig::default();
        let ray = Ray3::new(&v(-2.0, 0.0, 0.0), &v(1.0, 0.0, 0.0));
        assert_eq!(
            ray_triangle_intersection(&ray, &tri(), &cfg),
            Intersection::Two(v(0.0, 0.0, 0.0), v(4.0, 0.0, 0.0))
        );
    }

    #[test]
    fn coplanar_from_a_vertex() {
        let cfg = GeometryConfig::default();
        let inward = Ray3::new(&v(0.0, 0.0, 0.0), &v(1.0, 1.0, 0.0));
        let outward = Ray3::new(&v(0.0, 0.0, 0.0), &v(-1.0, -1.0, 0.0));
        assert_eq!(
            ray_triangle_intersection(&inward, &tri(), &cfg),
            Intersection::Two(v(0.0, 0.0, 0.0), v(2.0, 2.0, 0.0))
        );
        assert_eq!(ray_triangle_intersection(&outward, &tri(), &cfg), Intersection::One(v(0.0, 0.0, 0.0)));
        assert_eq!(
            ray_quadrilateral_intersection(&inward, &square(), &cfg),
            Intersection::Two(v(0.0, 0.0, 0.0), v(4.0, 4.0, 0.0))
        );
    }

    #[test]
    fn coplanar_from_an_edge() {
        let cfg = GeometryConfig::default();
        let inward = Ray3::new(&v(2.0, 0.0, 0.0), &v(0.0, 1.0, 0.0));
        let outward = Ray3::new(&v(2.0, 0.0, 0.0), &v(0.0, -1.0, 0.0));
        let along = Ray3::new(&v(2.0, 0.0, 0.0), &v(1.0, 0.0, 0.0));
        assert_eq!(
            ray_triangle_intersection(&inward, &tri(), &cfg),
            Intersection::Two(v(2.0, 0.0, 0.0), v(2.0, 2.0, 0.0))
        );
        assert_eq!(ray_triangle_intersection(&outward, &tri(), &cfg), Intersection::One(v(2.0, 0.0, 0.0)));
        assert_eq!(
            ray_triangle_intersection(&along, &tri(), &cfg),
            Intersection::Two(v(2.0, 0.0, 0.0), v(4.0, 0.0, 0.0))
        );
    }

    #[test]
    fn coplanar_from_an_edge_to_a_shared_vertex() {
        let cfg = GeometryConfig::default();
        let ray = Ray3::new(&v(2.0, 0.0, 0.0), &v(-1.0, 2.0, 0.0));
        assert_eq!(
            ray_triangle_intersection(&ray, &tri(), &cfg),
            Intersection::Two(v(2.0, 0.0, 0.0), v(0.0, 4.0, 0.0))
        );
        let ray = Ray3::new(&v(2.0, 0.0, 0.0), &v(1.0, 2.0, 0.0));
        assert_eq!(
            ray_quadrilateral_intersection(&ray, &square(), &cfg),
            Intersection::Two(v(2.0, 0.0, 0.0), v(4.0, 4.0, 0.0))
        );
    }

    #[test]
    fn coplanar_beside_an_edge_misses() {
        let cfg = GeometryConfig::<f32>::default();
        let tri = Triangle::new(
            &Vector3::new(0.0f32, 0.0, 0.0),
            &Vector3::new(4.0, 0.0, 0.0),
            &Vector3::new(0.0, 4.0, 0.0),
        );
        let ray = Ray3::new(&Vector3::new(-2.0f32, -0.002, 0.0), &Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(ray_triangle_intersection(&ray, &tri, &cfg), Intersection::None);
    }

    #[test]
    fn coplanar_from_inside() {
        let cfg = GeometryConfig::default();
        let ray = Ray3::new(&v(1.0, 1.0, 0.0), &v(-1.0, 0.0, 0.0));
        assert_eq!(ray_triangle_intersection(&ray, &tri(), &cfg), Intersection::One(v(0.0, 1.0, 0.0)));
        let ray = Ray3::new(&v(2.0, 2.0, 0.0), &v(1.0, 1.0, 0.0));
        assert_eq!(
            ray_quadrilateral_intersection(&ray, &square(), &cfg),
            Intersection::One(v(4.0, 4.0, 0.0))
        );
    }

    #[test]
    #[should_panic]
    fn degenerate_triangle_panics() {
        let cfg = GeometryConfig::default();
        let flat = Triangle::new(&v(0.0, 0.0, 0.0), &v(1.0, 0.0, 0.0), &v(2.0, 0.0, 0.0));
        let ray = Ray3::new(&v(0.5, 0.0, 0.0), &v(0.0, 1.0, 0.0));
        ray_triangle_intersection(&ray, &flat, &cfg);
    }
}
