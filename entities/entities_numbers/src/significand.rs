//! Significant-Digit Rendering
//!
//! A float's "decimal representation" throughout this crate is its value
//! rounded to a fixed number of significant digits, with trailing zeros
//! dropped. Continued-fraction expansion reads remainder digits from this
//! rendering, and the float wrapper displays values with it.
//!
//! ```rust
//! use entities_numbers::Significand;
//!
//! let s = Significand::of(0.4624000000000001, 14);
//! assert_eq!(s.digits(), "4624");
//! assert_eq!(s.exponent(), -1);
//! assert_eq!(s.render(), "0.4624");
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

/// Precision used when rendering floats for display and expansion
pub const DISPLAY_SIGNIFICANT_DIGITS: usize = 14;

/// Largest useful precision for an f64
const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Smallest decimal exponent rendered positionally by [`Significand::render`]
const MIN_POSITIONAL_EXPONENT: i32 = -4;

/// Largest decimal exponent rendered positionally by [`Significand::render`]
const MAX_POSITIONAL_EXPONENT: i32 = 14;

/// A finite float rounded to a fixed number of significant digits
///
/// The value is `±0.d1d2d3... × 10^(exponent + 1)`, i.e. the first digit sits
/// at `10^exponent`. `digits` never carries trailing zeros; zero has no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Significand {
    negative: bool,
    digits: String,
    exponent: i32,
}

impl Significand {
    /// Round `value` to `significant_digits` significant digits
    ///
    /// Precision is clamped to `1..=17`. Non-finite values render as zero;
    /// callers reject them before getting here.
    pub fn of(value: f64, significant_digits: usize) -> Self {
        if !value.is_finite() || value == 0.0 {
            return Self::zero();
        }
        let precision = significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS) - 1;
        let formatted = format!("{:.*e}", precision, value.abs());
        let (mantissa, exponent) = match formatted.split_once('e') {
            Some(parts) => parts,
            None => return Self::zero(),
        };
        let exponent = match exponent.parse::<i32>() {
            Ok(exponent) => exponent,
            Err(_) => return Self::zero(),
        };
        let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
        let digits = digits.trim_end_matches('0').to_string();
        if digits.is_empty() {
            return Self::zero();
        }
        Self {
            negative: value < 0.0,
            digits,
            exponent,
        }
    }

    fn zero() -> Self {
        Self {
            negative: false,
            digits: String::new(),
            exponent: 0,
        }
    }

    /// Significant digits without trailing zeros (empty for zero)
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Decimal exponent of the leading digit
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True when no digit lands after the decimal point
    pub fn is_integral(&self) -> bool {
        self.is_zero() || self.digits.len() as i32 - 1 <= self.exponent
    }

    /// Digits after the decimal point, including leading zeros
    ///
    /// Empty when the rendering is integral.
    pub fn fractional_digits(&self) -> String {
        if self.is_integral() {
            return String::new();
        }
        if self.exponent < 0 {
            let mut out = "0".repeat((-self.exponent - 1) as usize);
            out.push_str(&self.digits);
            out
        } else {
            self.digits[(self.exponent as usize + 1)..].to_string()
        }
    }

    /// Human readable rendering
    ///
    /// Positional between `1e-4` and `1e15`, `<mantissa>e<exponent>` outside.
    pub fn render(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let sign = if self.negative { "-" } else { "" };
        if self.exponent < MIN_POSITIONAL_EXPONENT || self.exponent > MAX_POSITIONAL_EXPONENT {
            let (head, tail) = self.digits.split_at(1);
            return if tail.is_empty() {
                format!("{}{}e{}", sign, head, self.exponent)
            } else {
                format!("{}{}.{}e{}", sign, head, tail, self.exponent)
            };
        }
        if self.exponent < 0 {
            return format!("{}0.{}", sign, self.fractional_digits());
        }
        let whole_len = self.exponent as usize + 1;
        if self.digits.len() <= whole_len {
            format!("{}{}{}", sign, self.digits, "0".repeat(whole_len - self.digits.len()))
        } else {
            let (whole, fraction) = self.digits.split_at(whole_len);
            format!("{}{}.{}", sign, whole, fraction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_away_representation_noise() {
        let s = Significand::of(0.4624000000000001, DISPLAY_SIGNIFICANT_DIGITS);
        assert_eq!(s.digits(), "4624");
        assert_eq!(s.exponent(), -1);
        assert_eq!(s.fractional_digits(), "4624");
    }

    #[test]
    fn test_leading_zeros_are_fractional_digits() {
        let s = Significand::of(0.00001234, DISPLAY_SIGNIFICANT_DIGITS);
        assert_eq!(s.digits(), "1234");
        assert_eq!(s.exponent(), -5);
        assert_eq!(s.fractional_digits(), "00001234");
    }

    #[test]
    fn test_integral_detection() {
        assert!(Significand::of(5.0, 14).is_integral());
        assert!(Significand::of(-5.0, 14).is_integral());
        assert!(Significand::of(0.0, 14).is_integral());
        assert!(Significand::of(1200.0, 14).is_integral());
        assert!(!Significand::of(4.4624, 14).is_integral());
        // Beyond 14 significant digits the fraction disappears
        assert!(Significand::of(0.999999999999999, 14).is_integral());
    }

    #[test]
    fn test_render() {
        assert_eq!(Significand::of(0.0, 14).render(), "0");
        assert_eq!(Significand::of(2.4, 14).render(), "2.4");
        assert_eq!(Significand::of(5.0, 14).render(), "5");
        assert_eq!(Significand::of(-1200.0, 14).render(), "-1200");
        assert_eq!(Significand::of(2345.0 / 4395.0, 14).render(), "0.53356086461889");
        assert_eq!(Significand::of(0.00015, 14).render(), "0.00015");
        assert_eq!(Significand::of(0.000015, 14).render(), "1.5e-5");
        assert_eq!(Significand::of(1e25, 14).render(), "1e25");
    }

    #[test]
    fn test_precision_is_clamped() {
        assert_eq!(Significand::of(0.26, 0).digits(), "3");
        assert_eq!(Significand::of(0.1, 40), Significand::of(0.1, 17));
    }

    #[test]
    fn test_non_finite_renders_as_zero() {
        assert!(Significand::of(f64::NAN, 14).is_zero());
        assert!(Significand::of(f64::INFINITY, 14).is_zero());
    }
}
