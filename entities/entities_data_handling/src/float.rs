//! Float Wrapper
//!
//! [`Flt`] renders its value at 14 significant digits, positionally between
//! `1e-4` and `1e15` and in exponent form outside that range. Its length and
//! digits are taken from that rendering.
//!
//! ```rust
//! use entities_data_handling::Flt;
//!
//! let f = Flt::new(4.4624);
//! assert_eq!(f.to_string(), "4.4624");
//! assert_eq!(f.to_rational().unwrap().to_string(), "2789/625");
//! ```

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

use entities_numbers::{Rational, RationalError};

use crate::cast::Cast;
use crate::text::Str;
use crate::value::{render_float, Value};

/// A float with an original and an active value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flt {
    original: f64,
    active: f64,
}

impl Flt {
    pub fn new(value: f64) -> Self {
        Self {
            original: value,
            active: value,
        }
    }

    pub fn original(&self) -> f64 {
        self.original
    }

    pub fn active(&self) -> f64 {
        self.active
    }

    pub fn reset(&mut self) -> &mut Self {
        self.active = self.original;
        self
    }

    /// Characters in the rendering
    pub fn length(&self) -> usize {
        self.to_string().chars().count()
    }

    pub fn to_decimal(&self) -> f64 {
        self.active
    }

    pub fn to_double(&self) -> f64 {
        self.active
    }

    /// Continued-fraction approximation of the active value
    ///
    /// # Errors
    ///
    /// `RationalError::NonFinite` for NaN and infinities.
    pub fn to_rational(&self) -> Result<Rational, RationalError> {
        Rational::from_float(self.active)
    }

    /// Characters of the rendering, sign and decimal point included
    pub fn digits(&self) -> Vec<char> {
        self.to_string().chars().collect()
    }
}

impl fmt::Display for Flt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_float(self.active))
    }
}

impl From<f64> for Flt {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Cast for Flt {
    /// Truncates toward zero, saturating at the `i64` bounds
    fn to_int(&self) -> i64 {
        self.active as i64
    }

    fn to_float(&self) -> f64 {
        self.active
    }

    fn to_array(&self) -> Vec<Value> {
        vec![Value::Float(self.active)]
    }

    fn to_str(&self) -> Str {
        Str::new(self.to_string())
    }
}
