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

//! Process-independent configuration shared by every geometric query.
//!
//! A [`GeometryConfig`] bundles the angle unit of the public API and the
//! tolerance used for every floating point decision. It is passed by
//! reference to the queries that need it; nothing is stored globally.

use crate::{
    error::ConfigError,
    geometry::vector::Vector,
    numeric::{AngleUnit, Scalar},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig<T: Scalar> {
    angle_unit: AngleUnit,
    epsilon: T,
}

impl<T: Scalar> Default for GeometryConfig<T> {
    fn default() -> Self {
        Self {
            angle_unit: AngleUnit::Radians,
            epsilon: T::default_epsilon(),
        }
    }
}

impl<T: Scalar> GeometryConfig<T> {
    pub fn new(angle_unit: AngleUnit, epsilon: T) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() {
            return Err(ConfigError::NonFiniteEpsilon);
        }
        if epsilon <= T::zero() {
            return Err(ConfigError::NonPositiveEpsilon);
        }
        Ok(Self {
            angle_unit,
            epsilon,
        })
    }

    /// Radians with the default tolerance of `T`.
    pub fn radians() -> Self {
        Self::default()
    }

    /// Degrees with the default tolerance of `T`.
    pub fn degrees() -> Self {
        Self {
            angle_unit: AngleUnit::Degrees,
            ..Self::default()
        }
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    #[inline]
    pub fn angle_to_radians(&self, angle: T) -> T {
        self.angle_unit.to_radians(angle)
    }

    #[inline]
    pub fn radians_to_angle(&self, radians: T) -> T {
        self.angle_unit.from_radians(radians)
    }

    // ---------- Comparator ----------

    #[inline]
    pub fn are_equal(&self, a: T, b: T) -> bool {
        (a - b).abs() <= self.epsilon
    }

    #[inline]
    pub fn are_not_equal(&self, a: T, b: T) -> bool {
        !self.are_equal(a, b)
    }

    #[inline]
    pub fn is_zero(&self, a: T) -> bool {
        a.abs() <= self.epsilon
    }

    #[inline]
    pub fn is_not_zero(&self, a: T) -> bool {
        !self.is_zero(a)
    }

    /// Strictly below `-epsilon`.
    #[inline]
    pub fn is_negative(&self, a: T) -> bool {
        a < -self.epsilon
    }

    /// Strictly above `epsilon`.
    #[inline]
    pub fn is_positive(&self, a: T) -> bool {
        a > self.epsilon
    }

    #[inline]
    pub fn is_less(&self, a: T, b: T) -> bool {
        a < b && !self.are_equal(a, b)
    }

    #[inline]
    pub fn is_greater(&self, a: T, b: T) -> bool {
        a > b && !self.are_equal(a, b)
    }

    #[inline]
    pub fn is_less_or_equal(&self, a: T, b: T) -> bool {
        a < b || self.are_equal(a, b)
    }

    #[inline]
    pub fn is_greater_or_equal(&self, a: T, b: T) -> bool {
        a > b || self.are_equal(a, b)
    }

    /// Component-wise tolerance comparison.
    pub fn points_equal<const N: usize>(&self, a: &Vector<T, N>, b: &Vector<T, N>) -> bool {
        (0..N).all(|i| self.are_equal(a[i], b[i]))
    }
}
