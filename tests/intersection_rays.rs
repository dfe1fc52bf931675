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

use georay::{
    GeometryConfig, Intersect, Intersection, IntersectionCount,
    geometry::{
        Hexahedron, Orb2, Plane, Quadrilateral2, Quadrilateral3, Ray2, Ray3, Segment2, Segment3, Triangle2,
        Triangle3, Vector2, Vector3,
    },
};

fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

fn v2(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn test_ray_plane_y5() {
    let cfg = GeometryConfig::default();
    let ray = Ray3::new(&v3(0.0, 0.0, 0.0), &v3(0.0, 1.0, 0.0));
    let plane = Plane::new(0.0, 1.0, 0.0, -5.0);
    let res = ray.intersection(&plane, &cfg);
    assert_eq!(res.count(), IntersectionCount::One);
    assert_eq!(res, Intersection::One(v3(0.0, 5.0, 0.0)));
    assert_eq!(ray.first_intersection(&plane, &cfg), Some(v3(0.0, 5.0, 0.0)));
}

#[test]
fn test_opposite_rays_sharing_origin() {
    let cfg = GeometryConfig::default();
    let r1 = Ray3::new(&v3(0.0, 0.0, 0.0), &v3(1.0, 0.0, 0.0));
    let r2 = Ray3::new(&v3(0.0, 0.0, 0.0), &v3(-1.0, 0.0, 0.0));
    assert_eq!(r1.intersection(&r2, &cfg), Intersection::One(v3(0.0, 0.0, 0.0)));
    assert_eq!(r2.intersection(&r1, &cfg), Intersection::One(v3(0.0, 0.0, 0.0)));
}

#[test]
fn test_ray_segment_x5() {
    let cfg = GeometryConfig::default();
    let ray = Ray3::new(&v3(0.0, 0.0, 0.0), &v3(1.0, 0.0, 0.0));
    let seg = Segment3::new(&v3(5.0, -1.0, 0.0), &v3(5.0, 1.0, 0.0));
    assert_eq!(ray.intersection(&seg, &cfg), Intersection::One(v3(5.0, 0.0, 0.0)));
}

#[test]
fn test_ray_triangle_from_above() {
    let cfg = GeometryConfig::default();
    let tri = Triangle3::new(&v3(0.0, 0.0, 0.0), &v3(4.0, 0.0, 0.0), &v3(0.0, 4.0, 0.0));
    let ray = Ray3::new(&v3(1.0, 1.0, 5.0), &v3(0.0, 0.0, -1.0));
    assert_eq!(ray.intersection(&tri, &cfg), Intersection::One(v3(1.0, 1.0, 0.0)));
}

#[test]
fn test_ray_through_unit_cube() {
    let cfg = GeometryConfig::default();
    let cube = Hexahedron::from_corners(&Vector3::splat(-0.5), &Vector3::splat(0.5));
    let ray = Ray3::new(&v3(-5.0, 0.0, 0.0), &v3(1.0, 0.0, 0.0));
    let res = ray.intersection(&cube, &cfg);
    assert_eq!(res, Intersection::Two(v3(-0.5, 0.0, 0.0), v3(0.5, 0.0, 0.0)));
    assert_eq!(ray.first_intersection(&cube, &cfg), Some(v3(-0.5, 0.0, 0.0)));
}

#[test]
fn test_ray_grazing_cube_face() {
    let cfg = GeometryConfig::default();
    let cube = Hexahedron::from_corners(&Vector3::splat(-0.5), &Vector3::splat(0.5));
    let ray = Ray3::new(&v3(-5.0, 0.5, 0.0), &v3(1.0, 0.0, 0.0));
    assert_eq!(
        ray.intersection(&cube, &cfg),
        Intersection::Two(v3(-0.5, 0.5, 0.0), v3(0.5, 0.5, 0.0))
    );
}

fn dart() -> Quadrilateral3<f64> {
    // Reflex vertex at `a`.
    Quadrilateral3::new(
        &v3(3.0, 3.0, 0.0),
        &v3(4.0, 0.0, 0.0),
        &v3(4.0, 4.0, 0.0),
        &v3(0.0, 4.0, 0.0),
    )
}

#[test]
fn test_ray_concave_quadrilateral_from_above() {
    let cfg = GeometryConfig::default();
    let down = v3(0.0, 0.0, -1.0);
    let arm = Ray3::new(&v3(3.8, 1.0, 5.0), &down);
    let notch = Ray3::new(&v3(2.0, 2.0, 5.0), &down);
    assert_eq!(arm.intersection(&dart(), &cfg), Intersection::One(v3(3.8, 1.0, 0.0)));
    assert_eq!(notch.intersection(&dart(), &cfg), Intersection::None);
}

#[test]
fn test_ray_concave_quadrilateral_coplanar() {
    let cfg = GeometryConfig::default();
    let ray = Ray3::new(&v3(-1.0, 3.5, 0.0), &v3(1.0, 0.0, 0.0));
    let res = ray.intersection(&dart(), &cfg);
    assert_eq!(res.count(), IntersectionCount::Two);
    assert!(cfg.points_equal(res.first().unwrap(), &v3(1.5, 3.5, 0.0)));
    assert!(cfg.points_equal(res.second().unwrap(), &v3(4.0, 3.5, 0.0)));
}

#[test]
fn test_planar_rays_cross() {
    let cfg = GeometryConfig::default();
    let r1 = Ray2::new(&v2(0.0, 0.0), &v2(1.0, 1.0));
    let r2 = Ray2::new(&v2(4.0, 0.0), &v2(-1.0, 1.0));
    assert_eq!(r1.intersection(&r2, &cfg), Intersection::One(v2(2.0, 2.0)));
    assert!(r2.intersects(&r1, &cfg));
}

#[test]
fn test_planar_segment_and_polygons() {
    let cfg = GeometryConfig::default();
    let ray = Ray2::new(&v2(-1.0, 1.0), &v2(1.0, 0.0));

    let seg = Segment2::new(&v2(2.0, -3.0), &v2(2.0, 3.0));
    assert_eq!(ray.intersection(&seg, &cfg), Intersection::One(v2(2.0, 1.0)));

    let tri = Triangle2::new(&v2(0.0, 0.0), &v2(4.0, 0.0), &v2(0.0, 4.0));
    assert_eq!(
        ray.intersection(&tri, &cfg),
        Intersection::Two(v2(0.0, 1.0), v2(3.0, 1.0))
    );

    let quad = Quadrilateral2::new(&v2(0.0, 0.0), &v2(4.0, 0.0), &v2(4.0, 4.0), &v2(0.0, 4.0));
    assert_eq!(
        ray.intersection(&quad, &cfg),
        Intersection::Two(v2(0.0, 1.0), v2(4.0, 1.0))
    );

    let away = Ray2::new(&v2(-1.0, 1.0), &v2(-1.0, 0.0));
    assert_eq!(away.intersection(&quad, &cfg), Intersection::None);
}

#[test]
fn test_planar_ray_circle() {
    let cfg = GeometryConfig::default();
    let circle = Orb2::new(&v2(5.0, 0.0), 1.0);
    let ray = Ray2::new(&v2(0.0, 0.0), &v2(1.0, 0.0));
    assert_eq!(ray.intersection(&circle, &cfg), Intersection::Two(v2(4.0, 0.0), v2(6.0, 0.0)));
    assert_eq!(ray.first_intersection(&circle, &cfg), Some(v2(4.0, 0.0)));
}

#[test]
fn test_intersection_accessors() {
    let two = Intersection::Two(1, 2);
    assert_eq!(two.count(), IntersectionCount::Two);
    assert_eq!(two.first(), Some(&1));
    assert_eq!(two.second(), Some(&2));
    assert_eq!(two.map(|x| x * 10).points(), vec![10, 20]);
    assert!(!Intersection::<i32>::None.intersects());
    assert!(Intersection::<i32>::Infinite.intersects());
    assert!(Intersection::<i32>::Infinite.points().is_empty());
}
