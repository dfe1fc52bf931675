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

//! Point-in-polygon tests shared by the ray intersection engine.

use crate::{
    config::GeometryConfig,
    geometry::{
        quadrilateral::Quadrilateral,
        triangle::Triangle,
        vector::{Cross3, Embed3, Vector, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Whether `p1` and `p2` lie on the same side of the infinite line through
/// `line_start` and `line_end`.
///
/// Compares the orientation of the triangles `(start, end, p1)` and
/// `(start, end, p2)`. A point on the line counts as being on either side.
pub fn same_side_of_line<T: Scalar, const N: usize>(
    p1: &Vector<T, N>,
    p2: &Vector<T, N>,
    line_start: &Vector<T, N>,
    line_end: &Vector<T, N>,
    cfg: &GeometryConfig<T>,
) -> bool
where
    Vector<T, N>: Embed3<T>,
{
    let line = (*line_end - *line_start).to_3d();
    let o1 = line.cross(&(*p1 - *line_start).to_3d());
    let o2 = line.cross(&(*p2 - *line_start).to_3d());
    cfg.is_greater_or_equal(o1.dot(&o2), T::zero())
}

/// Barycentric point-in-triangle test, boundary inclusive.
///
/// `point` is expected to lie in the plane of the triangle.
///
/// # Panics
///
/// If the triangle is degenerate: the squared sine of its angle at `a` is
/// not above the configured epsilon (zero or near-zero area).
pub fn point_in_triangle<T: Scalar, const N: usize>(
    triangle: &Triangle<T, N>,
    point: &Vector<T, N>,
    cfg: &GeometryConfig<T>,
) -> bool {
    let v0 = triangle.c - triangle.a;
    let v1 = triangle.b - triangle.a;
    let v2 = *point - triangle.a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d02 = v0.dot(&v2);
    let d11 = v1.dot(&v1);
    let d12 = v1.dot(&v2);

    let denom = d00 * d11 - d01 * d01;
    if !(denom > cfg.epsilon() * d00 * d11) {
        log::error!("point_in_triangle called on a degenerate triangle {triangle:?}");
        panic!("degenerate triangle: barycentric denominator is zero");
    }

    let u = (d11 * d02 - d01 * d12) / denom;
    let v = (d00 * d12 - d01 * d02) / denom;

    cfg.is_greater_or_equal(u, T::zero())
        && cfg.is_greater_or_equal(v, T::zero())
        && cfg.is_less_or_equal(u + v, T::one())
}

/// Point-in-quadrilateral test for consecutive, possibly concave vertices.
///
/// Splits along the diagonal `ac` into the triangles `acb` and `acd`.
///
/// # Panics
///
/// If either sub-triangle is degenerate.
pub fn point_in_quadrilateral<T: Scalar, const N: usize>(
    quad: &Quadrilateral<T, N>,
    point: &Vector<T, N>,
    cfg: &GeometryConfig<T>,
) -> bool {
    point_in_triangle(&Triangle::new(&quad.a, &quad.c, &quad.b), point, cfg)
        || point_in_triangle(&Triangle::new(&quad.a, &quad.c, &quad.d), point, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::{Vector2, Vector3};

    fn tri() -> Triangle<f64, 2> {
        Triangle::new(
            &Vector2::new(0.0, 0.0),
            &Vector2::new(4.0, 0.0),
            &Vector2::new(0.0, 4.0),
        )
    }

    #[test]
    fn same_side_2d() {
        let cfg = GeometryConfig::default();
        let s = Vector2::new(0.0f64, 0.0);
        let e = Vector2::new(1.0, 0.0);
        assert!(same_side_of_line(&Vector2::new(0.0, 1.0), &Vector2::new(5.0, 2.0), &s, &e, &cfg));
        assert!(!same_side_of_line(&Vector2::new(0.0, 1.0), &Vector2::new(5.0, -2.0), &s, &e, &cfg));
        // On the line: boundary inclusive.
        assert!(same_side_of_line(&Vector2::new(3.0, 0.0), &Vector2::new(5.0, -2.0), &s, &e, &cfg));
    }

    #[test]
    fn same_side_3d() {
        let cfg = GeometryConfig::default();
        let s = Vector3::new(0.0f64, 0.0, 0.0);
        let e = Vector3::new(0.0, 0.0, 1.0);
        assert!(same_side_of_line(
            &Vector3::new(1.0, 0.0, 3.0),
            &Vector3::new(2.0, 0.1, -1.0),
            &s,
            &e,
            &cfg
        ));
        assert!(!same_side_of_line(
            &Vector3::new(1.0, 0.0, 3.0),
            &Vector3::new(-2.0, 0.0, 0.0),
            &s,
            &e,
            &cfg
        ));
    }

    #[test]
    fn triangle_interior_boundary_exterior() {
        let cfg = GeometryConfig::default();
        let t = tri();
        assert!(point_in_triangle(&t, &Vector2::new(1.0, 1.0), &cfg));
        assert!(point_in_triangle(&t, &Vector2::new(2.0, 0.0), &cfg));
        assert!(point_in_triangle(&t, &Vector2::new(2.0, 2.0), &cfg));
        assert!(point_in_triangle(&t, &t.c, &cfg));
        assert!(!point_in_triangle(&t, &Vector2::new(3.0, 3.0), &cfg));
        assert!(!point_in_triangle(&t, &Vector2::new(-0.1, 1.0), &cfg));
    }

    #[test]
    #[should_panic(expected = "degenerate triangle")]
    fn degenerate_triangle_panics() {
        let cfg = GeometryConfig::default();
        let t = Triangle::new(
            &Vector2::new(0.0f64, 0.0),
            &Vector2::new(1.0, 1.0),
            &Vector2::new(2.0, 2.0),
        );
        point_in_triangle(&t, &Vector2::new(0.5, 0.5), &cfg);
    }

    #[test]
    fn concave_quadrilateral_uses_ac_diagonal() {
        let cfg = GeometryConfig::default();
        // Reflex vertex at `a`, so the `ac` diagonal lies inside.
        let q = Quadrilateral::new(
            &Vector2::new(3.0f64, 3.0),
            &Vector2::new(4.0, 0.0),
            &Vector2::new(4.0, 4.0),
            &Vector2::new(0.0, 4.0),
        );
        assert!(point_in_quadrilateral(&q, &Vector2::new(3.8, 1.0), &cfg));
        assert!(point_in_quadrilateral(&q, &Vector2::new(1.0, 3.8), &cfg));
        assert!(!point_in_quadrilateral(&q, &Vector2::new(2.0, 2.0), &cfg));
        assert!(point_in_quadrilateral(&q, &q.d, &cfg));
    }
}
