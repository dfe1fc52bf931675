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

//! Seeded randomized checks of the geometric invariants.

use georay::{
    GeometryConfig, Intersect,
    geometry::{Ray2, Ray3, Triangle3, Vector2, Vector3, vector::VectorOps},
    kernel::{are_parallel, point_in_triangle},
    rotation::{Quaternion, RotationMatrix3},
};
use rand::prelude::*;

const CASES: usize = 200;

fn random_vec3(rng: &mut StdRng, range: f64) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-range..range),
        rng.random_range(-range..range),
        rng.random_range(-range..range),
    )
}

fn random_axis(rng: &mut StdRng) -> Vector3<f64> {
    loop {
        let v = random_vec3(rng, 1.0);
        if v.norm() > 0.1 {
            return v.normalized();
        }
    }
}

#[test]
fn test_proportional_directions_are_parallel() {
    let cfg = GeometryConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..CASES {
        let d = random_vec3(&mut rng, 10.0);
        let k = rng.random_range(-5.0..5.0);
        assert!(are_parallel(&d, &d.scale(k), &cfg), "{d:?} x {k}");
    }
}

#[test]
fn test_ray_ray_is_symmetric() {
    let cfg = GeometryConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let r1 = Ray2::new(
            &Vector2::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)),
            &Vector2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
        );
        let r2 = Ray2::new(
            &Vector2::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)),
            &Vector2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
        );
        assert_eq!(r1.intersects(&r2, &cfg), r2.intersects(&r1, &cfg), "{r1:?} / {r2:?}");
    }
}

#[test]
fn test_axis_angle_sign_invariant() {
    let cfg = GeometryConfig::<f64>::degrees();
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..CASES {
        let axis = random_axis(&mut rng);
        let angle = rng.random_range(1.0..179.0);

        let (a, theta) = RotationMatrix3::from_axis_angle(&axis, angle, &cfg).to_axis_angle(&cfg);
        assert!((theta - angle).abs() < 1e-6);
        assert!(a.distance_to(&axis) < 1e-6);

        let (a, theta) = Quaternion::from_axis_angle(&axis, -angle, &cfg).to_axis_angle(&cfg);
        assert!((theta - angle).abs() < 1e-6);
        assert!(a.distance_to(&-axis) < 1e-6);
    }
}

#[test]
fn test_rotation_composes_with_inverse_to_identity() {
    let cfg = GeometryConfig::<f64>::radians();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..CASES {
        let r = RotationMatrix3::from_axis_angle(
            &random_axis(&mut rng),
            rng.random_range(-3.0..3.0),
            &cfg,
        );
        assert!((r * RotationMatrix3::identity()).approx_eq(&r, &cfg));
        assert!((r * r.inverse()).is_identity(&cfg));
    }
}

#[test]
fn test_euler_round_trip_away_from_gimbal_lock() {
    let cfg = GeometryConfig::<f64>::degrees();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..CASES {
        let (x, y, z) = (
            rng.random_range(-80.0..80.0),
            rng.random_range(-180.0..180.0),
            rng.random_range(-180.0..180.0),
        );
        let r = RotationMatrix3::from_euler_angles(x, y, z, &cfg);
        let (ex, ey, ez) = r.to_euler_angles(&cfg);
        let back = RotationMatrix3::from_euler_angles(ex, ey, ez, &cfg);

        let p = random_vec3(&mut rng, 10.0);
        assert!(back.rotate_vector(&p).distance_to(&r.rotate_vector(&p)) < 1e-9);
    }
}

#[test]
fn test_edge_midpoints_are_inside_triangles() {
    let cfg = GeometryConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut checked = 0;
    while checked < CASES {
        let tri = Triangle3::new(
            &random_vec3(&mut rng, 10.0),
            &random_vec3(&mut rng, 10.0),
            &random_vec3(&mut rng, 10.0),
        );
        if tri.area() < 1.0 {
            continue;
        }
        for edge in tri.edges() {
            assert!(point_in_triangle(&tri, &edge.center(), &cfg), "{tri:?}");
        }
        assert!(point_in_triangle(&tri, &tri.centroid(), &cfg));
        checked += 1;
    }
}

#[test]
fn test_ray_hits_lie_on_the_ray() {
    let cfg = GeometryConfig::default();
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..CASES {
        let target = random_vec3(&mut rng, 5.0);
        let origin = random_vec3(&mut rng, 20.0);
        let ray = Ray3::new(&origin, &(target - origin).normalized());
        let tri = Triangle3::new(
            &(target + Vector3::new(-1.0, -1.0, 0.0)),
            &(target + Vector3::new(2.0, -1.0, 0.0)),
            &(target + Vector3::new(-1.0, 2.0, 0.0)),
        );
        if cfg.is_zero(ray.direction[2]) {
            continue;
        }
        let hit = ray.first_intersection(&tri, &cfg);
        let hit = hit.unwrap_or_else(|| panic!("{ray:?} should hit {tri:?}"));
        assert!(hit.distance_to(&target) < 1e-6);
    }
}
