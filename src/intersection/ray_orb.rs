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
        orb::Orb,
        ray::Ray,
        vector::{Vector, VectorOps},
    },
    intersection::Intersection,
    numeric::scalar::Scalar,
};

/// Ray against a circle (2D) or sphere (3D).
///
/// Tolerances on the discriminant are calibrated for unit directions; use
/// [`Ray::normalized`] first when the direction is arbitrary. An origin on
/// or inside the orb is itself counted as a crossing when it lies on the
/// surface.
pub fn ray_orb_intersection<T: Scalar, const N: usize>(
    ray: &Ray<T, N>,
    orb: &Orb<T, N>,
    cfg: &GeometryConfig<T>,
) -> Intersection<Vector<T, N>> {
    let oc = ray.origin - orb.center;
    let a = ray.direction.norm_squared();
    if a == T::zero() {
        return Intersection::None;
    }
    let b = oc.dot(&ray.direction);
    let c = oc.norm_squared() - orb.radius * orb.radius;
    let disc = b * b - a * c;

    if cfg.is_zero(disc) {
        let t = -b / a;
        return if cfg.is_greater_or_equal(t, T::zero()) {
            Intersection::One(ray.point_at(t.max(T::zero())))
        } else {
            Intersection::None
        };
    }
    if disc < T::zero() {
        return Intersection::None;
    }

    let root = disc.sqrt();
    let t_near = (-b - root) / a;
    let t_far = (-b + root) / a;

    if cfg.is_negative(t_far) {
        Intersection::None
    } else if cfg.is_negative(t_near) {
        Intersection::One(ray.point_at(t_far.max(T::zero())))
    } else {
        Intersection::Two(ray.point_at(t_near.max(T::zero())), ray.point_at(t_far))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::{Vector2, Vector3};

    #[test]
    fn through_a_sphere() {
        let cfg = GeometryConfig::default();
        let orb = Orb::new(&Vector3::new(5.0, 0.0, 0.0), 2.0);
        let ray = Ray::new(&Vector3::zero(), &Vector3::unit_x());
        assert_eq!(
            ray_orb_intersection(&ray, &orb, &cfg),
            Intersection::Two(Vector3::new(3.0, 0.0, 0.0), Vector3::new(7.0, 0.0, 0.0))
        );
    }

    #[test]
    fn tangent_and_miss() {
        let cfg = GeometryConfig::default();
        let orb = Orb::new(&Vector3::new(5.0, 1.0, 0.0), 1.0);
        let tangent = Ray::new(&Vector3::zero(), &Vector3::unit_x());
        let miss = Ray::new(&Vector3::new(0.0, 3.0, 0.0), &Vector3::unit_x());
        assert_eq!(
            ray_orb_intersection(&tangent, &orb, &cfg),
            Intersection::One(Vector3::new(5.0, 0.0, 0.0))
        );
        assert_eq!(ray_orb_intersection(&miss, &orb, &cfg), Intersection::None);
    }

    #[test]
    fn from_inside_and_behind() {
        let cfg = GeometryConfig::default();
        let circle = Orb::new(&Vector2::new(0.0, 0.0), 2.0);
        let inside = Ray::new(&Vector2::new(0.0, 0.0), &Vector2::new(0.0, 1.0));
        let behind = Ray::new(&Vector2::new(0.0, 5.0), &Vector2::new(0.0, 1.0));
        assert_eq!(
            ray_orb_intersection(&inside, &circle, &cfg),
            Intersection::One(Vector2::new(0.0, 2.0))
        );
        assert_eq!(ray_orb_intersection(&behind, &circle, &cfg), Intersection::None);
    }

    #[test]
    fn origin_on_the_surface() {
        let cfg = GeometryConfig::default();
        let circle = Orb::new(&Vector2::new(0.0, 0.0), 2.0);
        let outward = Ray::new(&Vector2::new(2.0, 0.0), &Vector2::new(1.0, 0.0));
        let inward = Ray::new(&Vector2::new(2.0, 0.0), &Vector2::new(-1.0, 0.0));
        assert_eq!(
            ray_orb_intersection(&outward, &circle, &cfg),
            Intersection::One(Vector2::new(2.0, 0.0))
        );
        assert_eq!(
            ray_orb_intersection(&inward, &circle, &cfg),
            Intersection::Two(Vector2::new(2.0, 0.0), Vector2::new(-2.0, 0.0))
        );
    }
}
