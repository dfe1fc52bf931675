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
    geometry::vector::{Vector, VectorOps},
    numeric::scalar::Scalar,
    rotation::transform::{Transformable, Transformation},
};

/// Circle (2D) or sphere (3D).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb<T: Scalar, const N: usize> {
    pub center: Vector<T, N>,
    pub radius: T,
}

pub type Orb2<T> = Orb<T, 2>;
pub type Orb3<T> = Orb<T, 3>;

impl<T: Scalar, const N: usize> Orb<T, N> {
    pub fn new(center: &Vector<T, N>, radius: T) -> Self {
        Self {
            center: *center,
            radius,
        }
    }

    /// `p` is inside or on the surface.
    pub fn contains(&self, p: &Vector<T, N>, cfg: &GeometryConfig<T>) -> bool {
        cfg.is_less_or_equal(self.center.distance_to(p), self.radius)
    }
}

/// Non-uniform scales grow the radius by the largest factor.
impl<T: Scalar> Transformable<T> for Orb<T, 3> {
    fn transformed(&self, t: &Transformation<T>) -> Self {
        Self::new(&t.apply_to_point(&self.center), self.radius * t.max_stretch())
    }
}
