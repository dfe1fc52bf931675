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
    geometry::{quadrilateral::Quadrilateral3, vector::Vector3},
    numeric::scalar::Scalar,
    rotation::transform::{Transformable, Transformation},
};

/// Six-faced solid defined by eight vertices.
///
/// `a b c d` is one face and `e f g h` the opposite one, with `e` facing `a`,
/// `h` facing `b`, `g` facing `c` and `f` facing `d`. Faces are enumerated
/// as `ABCD, EFGH, ABHE, BCGH, ADFE, CDFG`. Intersection queries assume the
/// solid is convex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hexahedron<T: Scalar> {
    pub a: Vector3<T>,
    pub b: Vector3<T>,
    pub c: Vector3<T>,
    pub d: Vector3<T>,
    pub e: Vector3<T>,
    pub f: Vector3<T>,
    pub g: Vector3<T>,
    pub h: Vector3<T>,
}

impl<T: Scalar> Hexahedron<T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a: &Vector3<T>,
        b: &Vector3<T>,
        c: &Vector3<T>,
        d: &Vector3<T>,
        e: &Vector3<T>,
        f: &Vector3<T>,
        g: &Vector3<T>,
        h: &Vector3<T>,
    ) -> Self {
        Self::from_vertices([*a, *b, *c, *d, *e, *f, *g, *h])
    }

    /// Vertices in `a..h` order.
    pub fn from_vertices(v: [Vector3<T>; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = v;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }

    /// Axis-aligned box spanning `min` to `max`; `abcd` is the top (`max.y`) face.
    pub fn from_corners(min: &Vector3<T>, max: &Vector3<T>) -> Self {
        Self::from_vertices([
            Vector3::new(min[0], max[1], max[2]),
            Vector3::new(max[0], max[1], max[2]),
            Vector3::new(max[0], max[1], min[2]),
            Vector3::new(min[0], max[1], min[2]),
            Vector3::new(min[0], min[1], max[2]),
            Vector3::new(min[0], min[1], min[2]),
            Vector3::new(max[0], min[1], min[2]),
            Vector3::new(max[0], min[1], max[2]),
        ])
    }

    pub fn vertices(&self) -> [Vector3<T>; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }

    /// Faces in `ABCD, EFGH, ABHE, BCGH, ADFE, CDFG` order.
    pub fn faces(&self) -> [Quadrilateral3<T>; 6] {
        [
            Quadrilateral3::new(&self.a, &self.b, &self.c, &self.d),
            Quadrilateral3::new(&self.e, &self.f, &self.g, &self.h),
            Quadrilateral3::new(&self.a, &self.b, &self.h, &self.e),
            Quadrilateral3::new(&self.b, &self.c, &self.g, &self.h),
            Quadrilateral3::new(&self.a, &self.d, &self.f, &self.e),
            Quadrilateral3::new(&self.c, &self.d, &self.f, &self.g),
        ]
    }
}

impl<T: Scalar> Transformable<T> for Hexahedron<T> {
    fn transformed(&self, t: &Transformation<T>) -> Self {
        Self::from_vertices(self.vertices().map(|v| t.apply_to_point(&v)))
    }
}
