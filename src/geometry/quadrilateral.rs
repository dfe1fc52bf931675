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
        segment::Segment,
        vector::{Embed3, Vector},
    },
    kernel::containment::same_side_of_line,
    numeric::scalar::Scalar,
    rotation::transform::{Transformable, Transformation},
};

/// Quadrilateral with consecutive vertices `a`, `b`, `c`, `d`.
///
/// Edges are `ab`, `bc`, `cd` and `da`. The shape may be concave or even
/// crossed; see [`is_convex`](Self::is_convex) and friends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral<T: Scalar, const N: usize> {
    pub a: Vector<T, N>,
    pub b: Vector<T, N>,
    pub c: Vector<T, N>,
    pub d: Vector<T, N>,
}

pub type Quadrilateral2<T> = Quadrilateral<T, 2>;
pub type Quadrilateral3<T> = Quadrilateral<T, 3>;

impl<T: Scalar, const N: usize> Quadrilateral<T, N> {
    pub fn new(a: &Vector<T, N>, b: &Vector<T, N>, c: &Vector<T, N>, d: &Vector<T, N>) -> Self {
        Self {
            a: *a,
            b: *b,
            c: *c,
            d: *d,
        }
    }

    pub fn vertices(&self) -> [Vector<T, N>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn edges(&self) -> [Segment<T, N>; 4] {
        [
            Segment::new(&self.a, &self.b),
            Segment::new(&self.b, &self.c),
            Segment::new(&self.c, &self.d),
            Segment::new(&self.d, &self.a),
        ]
    }
}

impl<T: Scalar, const N: usize> Quadrilateral<T, N>
where
    Vector<T, N>: Embed3<T>,
{
    /// Both diagonals separate the other two vertices.
    pub fn is_convex(&self, cfg: &GeometryConfig<T>) -> bool {
        !same_side_of_line(&self.b, &self.d, &self.a, &self.c, cfg)
            && !same_side_of_line(&self.a, &self.c, &self.b, &self.d, cfg)
    }

    /// Two opposite edges cross each other (bow-tie shape).
    pub fn is_crossed(&self, cfg: &GeometryConfig<T>) -> bool {
        let ab_cd = !same_side_of_line(&self.c, &self.d, &self.a, &self.b, cfg)
            && !same_side_of_line(&self.a, &self.b, &self.c, &self.d, cfg);
        let bc_da = !same_side_of_line(&self.d, &self.a, &self.b, &self.c, cfg)
            && !same_side_of_line(&self.b, &self.c, &self.d, &self.a, cfg);
        ab_cd || bc_da
    }

    pub fn is_concave(&self, cfg: &GeometryConfig<T>) -> bool {
        !self.is_convex(cfg) && !self.is_crossed(cfg)
    }
}

impl<T: Scalar> Transformable<T> for Quadrilateral3<T> {
    fn transformed(&self, t: &Transformation<T>) -> Self {
        let [a, b, c, d] = self.vertices().map(|v| t.apply_to_point(&v));
        Self::new(&a, &b, &c, &d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector::Vector2;

    fn quad(points: [(f64, f64); 4]) -> Quadrilateral2<f64> {
        let [a, b, c, d] = points.map(|(x, y)| Vector2::new(x, y));
        Quadrilateral2::new(&a, &b, &c, &d)
    }

    #[test]
    fn classifies_shapes() {
        let cfg = GeometryConfig::default();

        let square = quad([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(square.is_convex(&cfg));
        assert!(!square.is_crossed(&cfg));
        assert!(!square.is_concave(&cfg));

        let bow_tie = quad([(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
        assert!(bow_tie.is_crossed(&cfg));
        assert!(!bow_tie.is_convex(&cfg));

        let dart = quad([(0.0, 0.0), (2.0, 0.0), (0.5, 0.5), (0.0, 2.0)]);
        assert!(dart.is_concave(&cfg));
    }
}
