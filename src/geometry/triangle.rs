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
    geometry::{
        segment::Segment,
        vector::{Cross3, Embed3, Vector, Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
    rotation::transform::{Transformable, Transformation},
};

/// Triangle `abc`; edges are `ab`, `bc` and `ca`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: Scalar, const N: usize> {
    pub a: Vector<T, N>,
    pub b: Vector<T, N>,
    pub c: Vector<T, N>,
}

pub type Triangle2<T> = Triangle<T, 2>;
pub type Triangle3<T> = Triangle<T, 3>;

impl<T: Scalar, const N: usize> Triangle<T, N> {
    pub fn new(a: &Vector<T, N>, b: &Vector<T, N>, c: &Vector<T, N>) -> Self {
        Self {
            a: *a,
            b: *b,
            c: *c,
        }
    }

    pub fn vertices(&self) -> [Vector<T, N>; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edges(&self) -> [Segment<T, N>; 3] {
        [
            Segment::new(&self.a, &self.b),
            Segment::new(&self.b, &self.c),
            Segment::new(&self.c, &self.a),
        ]
    }

    pub fn centroid(&self) -> Vector<T, N> {
        let third = T::one() / T::from_f64(3.0);
        (self.a + self.b + self.c).scale(third)
    }
}

impl<T: Scalar, const N: usize> Triangle<T, N>
where
    Vector<T, N>: Embed3<T>,
{
    pub fn area(&self) -> T {
        let ab = (self.b - self.a).to_3d();
        let ac = (self.c - self.a).to_3d();
        ab.cross(&ac).norm() * T::half()
    }
}

impl<T: Scalar> Triangle3<T> {
    /// Unit normal following the `abc` winding.
    pub fn normal(&self) -> Vector3<T> {
        (self.b - self.a).cross(&(self.c - self.a)).normalized()
    }
}

impl<T: Scalar> Transformable<T> for Triangle3<T> {
    fn transformed(&self, t: &Transformation<T>) -> Self {
        let [a, b, c] = self.vertices().map(|v| t.apply_to_point(&v));
        Self::new(&a, &b, &c)
    }
}
