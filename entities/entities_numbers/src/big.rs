//! Big Number Operations
//!
//! Provides the arbitrary precision integers that carry numerators and
//! denominators through continued-fraction collapsing.
//!
//! Fractions are added without reduction, so twenty levels of expansion can
//! push intermediate values well past `i64`. This module uses the `malachite`
//! crate so those values stay exact.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Scalar Types Contributors 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::fmt;

use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use malachite::Integer;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a big number from the integer part of a double (f64)
    ///
    /// The value is truncated toward zero. Unlike a cast through `i64`, the
    /// conversion is exact for every finite float, however large.
    ///
    /// Returns None for NaN and infinities.
    pub fn from_f64_truncated(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let (value, _ordering) = Integer::rounding_from(value.trunc(), RoundingMode::Exact);
        Some(Self { value })
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Nearest f64 to this value
    pub fn to_f64(&self) -> f64 {
        let (result, _ordering) = f64::rounding_from(&self.value, RoundingMode::Nearest);
        result
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is strictly negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Multiply and add: x * y + z
    pub fn mul_add(&self, y: &Self, z: &Self) -> Self {
        Self {
            value: &self.value * &y.value + &z.value,
        }
    }

    /// Add a small unsigned integer: x + y
    pub fn plus_small(&self, y: u64) -> Self {
        Self {
            value: &self.value + Integer::from(y),
        }
    }

    /// Negate: -x
    pub fn negate(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
