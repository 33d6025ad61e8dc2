//! Integer Wrapper

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

use entities_numbers::Rational;

use crate::cast::Cast;
use crate::text::Str;
use crate::value::Value;

/// An integer with an original and an active value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integ {
    original: i64,
    active: i64,
}

impl Integ {
    pub fn new(value: i64) -> Self {
        Self {
            original: value,
            active: value,
        }
    }

    pub fn original(&self) -> i64 {
        self.original
    }

    pub fn active(&self) -> i64 {
        self.active
    }

    pub fn reset(&mut self) -> &mut Self {
        self.active = self.original;
        self
    }

    /// Characters in the decimal rendering, sign included
    pub fn length(&self) -> usize {
        self.active.to_string().len()
    }

    pub fn to_decimal(&self) -> f64 {
        self.active as f64
    }

    pub fn to_double(&self) -> f64 {
        self.active as f64
    }

    /// `n/1`
    pub fn to_rational(&self) -> Rational {
        Rational::new(self.active, 1)
    }

    /// Lowercase hexadecimal, `-` prefixed when negative
    pub fn to_hex(&self) -> String {
        self.radix_string(|magnitude| format!("{:x}", magnitude))
    }

    pub fn to_binary(&self) -> String {
        self.radix_string(|magnitude| format!("{:b}", magnitude))
    }

    pub fn to_octal(&self) -> String {
        self.radix_string(|magnitude| format!("{:o}", magnitude))
    }

    fn radix_string(&self, render: impl Fn(u64) -> String) -> String {
        let digits = render(self.active.unsigned_abs());
        if self.active < 0 {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Decimal digits of the magnitude, least significant first
    pub fn digits(&self) -> Vec<u8> {
        let mut magnitude = self.active.unsigned_abs();
        let mut digits = vec![(magnitude % 10) as u8];
        magnitude /= 10;
        while magnitude > 0 {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        digits
    }
}

impl fmt::Display for Integ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.active)
    }
}

impl From<i64> for Integ {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl Cast for Integ {
    fn to_int(&self) -> i64 {
        self.active
    }

    fn to_float(&self) -> f64 {
        self.active as f64
    }

    fn to_array(&self) -> Vec<Value> {
        vec![Value::Integer(self.active)]
    }

    fn to_str(&self) -> Str {
        Str::new(self.to_string())
    }
}
