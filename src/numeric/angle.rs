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

use crate::numeric::scalar::Scalar;

/// Unit in which every angle-valued parameter of the public API is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Converts `angle`, expressed in this unit, to radians.
    pub fn to_radians<T: Scalar>(self, angle: T) -> T {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle * T::PI() / T::from_f64(180.0),
        }
    }

    /// Converts `radians` to this unit.
    pub fn from_radians<T: Scalar>(self, radians: T) -> T {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * T::from_f64(180.0) / T::PI(),
        }
    }

    /// Half a turn in this unit.
    pub fn half_turn<T: Scalar>(self) -> T {
        self.from_radians(T::PI())
    }
}

#[cfg(test)]
mod tests {
    use super::AngleUnit;

    #[test]
    fn degrees_round_trip() {
        let r = AngleUnit::Degrees.to_radians(90.0f64);
        assert!((r - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((AngleUnit::Degrees.from_radians(r) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn radians_are_passthrough() {
        assert_eq!(AngleUnit::Radians.to_radians(1.25f32), 1.25);
        assert_eq!(AngleUnit::Radians.half_turn::<f32>(), std::f32::consts::PI);
    }
}
