//! Scalar Casts
//!
//! The conversions every wrapper type offers: to an integer, a float, a
//! single-element array and a [`Str`].

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

use entities_numbers::Rational;

use crate::text::Str;
use crate::value::Value;

/// Conversions shared by the wrapper types
pub trait Cast {
    fn to_int(&self) -> i64;

    fn to_float(&self) -> f64;

    /// The active value as the only element of an array
    fn to_array(&self) -> Vec<Value>;

    fn to_str(&self) -> Str;
}

impl Cast for Rational {
    fn to_int(&self) -> i64 {
        Rational::to_int(self)
    }

    fn to_float(&self) -> f64 {
        Rational::to_float(self)
    }

    fn to_array(&self) -> Vec<Value> {
        Rational::to_array(self).into_iter().map(Value::Str).collect()
    }

    fn to_str(&self) -> Str {
        Str::new(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_casts() {
        let r = Rational::from_float(-2.5).unwrap();
        assert_eq!(Cast::to_int(&r), -2);
        assert_eq!(Cast::to_float(&r), -2.5);
        assert_eq!(Cast::to_array(&r), vec![Value::from("-5/2")]);
        assert_eq!(r.to_str().active(), "-5/2");
    }
}
