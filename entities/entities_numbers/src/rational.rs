//! Rational Number Module
//!
//! A numerator/denominator pair that approximates a float, built either
//! directly from two integers or from a float through its continued-fraction
//! expansion.
//!
//! # Construction
//!
//! - [`Rational::new`] stores the pair exactly as given. No common factors are
//!   cancelled and a zero denominator is accepted; the cached float then
//!   follows IEEE division (`inf`, `-inf` or `NaN`).
//! - [`Rational::checked_new`] rejects a zero denominator up front.
//! - [`Rational::from_float`] expands the float into at most twenty
//!   continued-fraction terms and collapses them back into a fraction. The
//!   sign always ends up on the numerator and the denominator is positive.
//!
//! # Examples
//!
//! ```rust
//! use entities_numbers::Rational;
//!
//! let r = Rational::from_float(4.4624).unwrap();
//! assert_eq!(r.to_string(), "2789/625");
//!
//! let r = Rational::from_float(-4.4624).unwrap();
//! assert_eq!(r.to_string(), "-2789/625");
//!
//! // Direct construction keeps the pair as given
//! let r = Rational::new(2345, 4395);
//! assert_eq!(r.to_string(), "2345/4395");
//! assert!((r.to_float() - 0.53356086461889).abs() < 1e-12);
//! ```
//!
//! # See Also
//!
//! - [`crate::continued_fraction`]: expansion and collapsing
//! - [`crate::significand`]: how floats are rendered for digit extraction

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
use malachite::Rational as ExactRatio;

use crate::big::BigNumber;
use crate::continued_fraction::{ContinuedFraction, ExpansionConfig};
use crate::error::RationalError;

/// A ratio of two integers approximating a float
///
/// The pair is never reduced to lowest terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Rational {
    numerator: BigNumber,
    denominator: BigNumber,
    float_value: f64,
    continued_fraction: Option<ContinuedFraction>,
}

impl Rational {
    /// Store `numerator/denominator` as given
    ///
    /// A zero denominator is not rejected here; use [`Rational::checked_new`]
    /// for a validating constructor.
    ///
    /// # Arguments
    ///
    /// * `numerator` - Signed numerator
    /// * `denominator` - Signed denominator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numbers::Rational;
    ///
    /// let r = Rational::new(4, 8);
    /// assert_eq!(r.to_string(), "4/8");
    /// assert_eq!(r.to_float(), 0.5);
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::from_parts(BigNumber::from_i64(numerator), BigNumber::from_i64(denominator))
    }

    /// Like [`Rational::new`], but a zero denominator is an error
    ///
    /// # Returns
    ///
    /// * `Ok(Rational)` - The unreduced pair
    /// * `Err(RationalError::InvalidDenominator)` - If `denominator` is zero
    pub fn checked_new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::new(numerator, denominator))
    }

    fn from_parts(numerator: BigNumber, denominator: BigNumber) -> Self {
        let float_value = ratio_to_f64(&numerator, &denominator);
        Self {
            numerator,
            denominator,
            float_value,
            continued_fraction: None,
        }
    }

    /// Approximate `value` with the default [`ExpansionConfig`]
    ///
    /// # Returns
    ///
    /// * `Ok(Rational)` - Fraction collapsed from the expansion of `value`
    /// * `Err(RationalError::NonFinite)` - If `value` is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numbers::Rational;
    ///
    /// assert_eq!(Rational::from_float(0.0).unwrap().to_string(), "0/1");
    /// assert_eq!(Rational::from_float(-5.0).unwrap().to_string(), "-5/1");
    /// assert_eq!(Rational::from_float(0.1).unwrap().to_string(), "1/10");
    /// ```
    pub fn from_float(value: f64) -> Result<Self, RationalError> {
        Self::from_float_with(value, &ExpansionConfig::default())
    }

    /// Approximate `value` with an explicit expansion configuration
    pub fn from_float_with(value: f64, config: &ExpansionConfig) -> Result<Self, RationalError> {
        let expansion = ContinuedFraction::expand(value, config)?;
        let (numerator, denominator) = expansion.collapse();
        Ok(Self {
            numerator,
            denominator,
            float_value: value,
            continued_fraction: Some(expansion),
        })
    }

    pub fn numerator(&self) -> &BigNumber {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigNumber {
        &self.denominator
    }

    /// Cached float: the input of [`Rational::from_float`], or
    /// `numerator / denominator` for directly built instances
    pub fn float_value(&self) -> f64 {
        self.float_value
    }

    /// Expansion this instance was collapsed from, if it came from a float
    pub fn continued_fraction(&self) -> Option<&ContinuedFraction> {
        self.continued_fraction.as_ref()
    }

    /// Expand the cached float of this instance
    ///
    /// # Returns
    ///
    /// * `Ok(ContinuedFraction)` - The expansion
    /// * `Err(RationalError::InvalidDenominator)` - If the denominator is zero
    pub fn to_continued_fraction(&self) -> Result<ContinuedFraction, RationalError> {
        if self.denominator.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }
        ContinuedFraction::expand(self.float_value, &ExpansionConfig::default())
    }

    /// `numerator / denominator`, computed fresh
    pub fn to_float(&self) -> f64 {
        ratio_to_f64(&self.numerator, &self.denominator)
    }

    /// The cached float truncated toward zero
    ///
    /// Saturates at the `i64` bounds; NaN becomes zero.
    pub fn to_int(&self) -> i64 {
        self.float_value.trunc() as i64
    }

    /// Single-element list holding the `n/d` rendering
    pub fn to_array(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Nearest f64 to `numerator / denominator`
///
/// A zero denominator follows IEEE division.
pub(crate) fn ratio_to_f64(numerator: &BigNumber, denominator: &BigNumber) -> f64 {
    if denominator.is_zero() {
        return numerator.to_f64() / 0.0;
    }
    let exact = ExactRatio::from_integers_ref(numerator.as_integer(), denominator.as_integer());
    let (result, _ordering) = f64::rounding_from(&exact, RoundingMode::Nearest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn from_float(value: f64) -> String {
        Rational::from_float(value).unwrap().to_string()
    }

    #[test]
    fn test_zero() {
        let r = Rational::from_float(0.0).unwrap();
        assert_eq!(r.to_string(), "0/1");
        assert_eq!(r.to_float(), 0.0);
        assert_eq!(r.to_int(), 0);
    }

    #[test]
    fn test_integers() {
        assert_eq!(from_float(5.0), "5/1");
        assert_eq!(from_float(-5.0), "-5/1");
        assert_eq!(from_float(1e20), "100000000000000000000/1");
        assert_eq!(from_float(123456789012345.0), "123456789012345/1");
        assert_eq!(from_float(-9007199254740992.0), "-9007199254740992/1");
    }

    #[test]
    fn test_large_magnitude_fractions() {
        // Fifteen significant digits
        assert_eq!(from_float(99999999999999.9), "999999999999999/10");
        assert_eq!(from_float(123456789012345.5), "246913578024691/2");

        let r = Rational::from_float(1234567.12345678).unwrap();
        assert!((r.to_float() - 1234567.12345678).abs() <= 1e-9);
        assert_eq!(r.to_int(), 1234567);
    }

    #[test]
    fn test_known_fractions() {
        assert_eq!(from_float(4.4624), "2789/625");
        assert_eq!(from_float(-4.4624), "-2789/625");
        assert_eq!(from_float(0.5335608646188851), "469/879");
        assert_eq!(from_float(3.14159), "314159/100000");
        assert_eq!(from_float(5.234), "2617/500");
        assert_eq!(from_float(123456.789), "123456789/1000");
        assert_eq!(from_float(99.99), "9999/100");
        assert_eq!(from_float(2.675), "107/40");
        assert_eq!(from_float(0.000015), "3/200000");
    }

    #[test]
    fn test_repeating_decimals() {
        assert_eq!(from_float(1.0 / 3.0), "1/3");
        assert_eq!(from_float(2.0 / 3.0), "2/3");
    }

    #[test]
    fn test_negative_fractions() {
        assert_eq!(from_float(-0.75), "-3/4");
        assert_eq!(from_float(-2.5), "-5/2");
    }

    #[test]
    fn test_nearly_integral() {
        assert_eq!(from_float(0.999999999999999), "1/1");
        assert_eq!(from_float(2.999999999999999), "3/1");
    }

    #[test]
    fn test_tiny_values() {
        assert_eq!(from_float(1e-7), "1/10000000");
        assert_eq!(from_float(1e-15), "1/1000000000000000");
        assert_eq!(from_float(1e-17), "0/1");
    }

    #[test]
    fn test_direct_construction_is_unreduced() {
        let r = Rational::new(2345, 4395);
        assert_eq!(r.to_string(), "2345/4395");
        assert!((r.to_float() - 0.5335608646188851).abs() < 1e-15);
        assert_eq!(r.float_value(), r.to_float());
        assert!(r.continued_fraction().is_none());
    }

    #[test]
    fn test_zero_denominator() {
        let r = Rational::new(1, 0);
        assert_eq!(r.to_float(), f64::INFINITY);
        assert_eq!(Rational::new(-1, 0).to_float(), f64::NEG_INFINITY);
        assert!(Rational::new(0, 0).to_float().is_nan());
        assert_eq!(r.to_continued_fraction(), Err(RationalError::InvalidDenominator));
        assert_eq!(Rational::checked_new(1, 0), Err(RationalError::InvalidDenominator));
        assert_eq!(Rational::checked_new(3, 4).unwrap().to_string(), "3/4");
    }

    #[test]
    fn test_to_continued_fraction() {
        let cf = Rational::new(2789, 625).to_continued_fraction().unwrap();
        let (n, d) = cf.collapse();
        assert_eq!(format!("{}/{}", n, d), "2789/625");
    }

    #[test]
    fn test_float_value_is_input() {
        let r = Rational::from_float(1.0 / 3.0).unwrap();
        assert_eq!(r.float_value(), 1.0 / 3.0);
        assert!(r.continued_fraction().is_some());
    }

    #[test]
    fn test_to_int_truncates() {
        assert_eq!(Rational::from_float(4.4624).unwrap().to_int(), 4);
        assert_eq!(Rational::from_float(-4.4624).unwrap().to_int(), -4);
        assert_eq!(Rational::new(7, 2).to_int(), 3);
    }

    #[test]
    fn test_to_array() {
        let r = Rational::from_float(2.4).unwrap();
        assert_eq!(r.to_array(), vec!["12/5".to_string()]);
    }

    #[test]
    fn test_non_finite() {
        assert!(matches!(Rational::from_float(f64::NAN), Err(RationalError::NonFinite(_))));
        assert_eq!(
            Rational::from_float(f64::NEG_INFINITY),
            Err(RationalError::NonFinite(f64::NEG_INFINITY))
        );
    }

    fn scaled(mantissa: i32, places: u8) -> f64 {
        mantissa as f64 / 10f64.powi((places % 7) as i32)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn prop_round_trip_is_close() {
        fn prop(mantissa: i32, places: u8) -> TestResult {
            let value = scaled(mantissa, places);
            match Rational::from_float(value) {
                Ok(r) => TestResult::from_bool(close(r.to_float(), value)),
                Err(_) => TestResult::failed(),
            }
        }
        quickcheck(prop as fn(i32, u8) -> TestResult);
    }

    #[test]
    fn prop_short_decimals_with_large_integer_part() {
        fn prop(whole: u32, thousandths: u16) -> TestResult {
            let value = whole as f64 + (thousandths % 1000) as f64 / 1000.0;
            match Rational::from_float(value) {
                Ok(r) => TestResult::from_bool((r.to_float() - value).abs() <= 1e-9 && r.to_int() == whole as i64),
                Err(_) => TestResult::failed(),
            }
        }
        quickcheck(prop as fn(u32, u16) -> TestResult);
    }

    #[test]
    fn prop_sign_on_numerator() {
        fn prop(mantissa: i32, places: u8) -> TestResult {
            let value = scaled(mantissa, places);
            let r = match Rational::from_float(value) {
                Ok(r) => r,
                Err(_) => return TestResult::failed(),
            };
            let sign_ok = r.numerator().is_zero() || r.numerator().is_negative() == (value < 0.0);
            TestResult::from_bool(sign_ok && !r.denominator().is_negative() && !r.denominator().is_zero())
        }
        quickcheck(prop as fn(i32, u8) -> TestResult);
    }

    #[test]
    fn prop_reexpansion_is_stable() {
        fn prop(mantissa: i32, places: u8) -> TestResult {
            let value = scaled(mantissa, places);
            let first = match Rational::from_float(value) {
                Ok(r) => r,
                Err(_) => return TestResult::failed(),
            };
            match Rational::from_float(first.to_float()) {
                Ok(second) => TestResult::from_bool(close(second.to_float(), value)),
                Err(_) => TestResult::failed(),
            }
        }
        quickcheck(prop as fn(i32, u8) -> TestResult);
    }

    #[test]
    fn prop_to_array_matches_display() {
        fn prop(numerator: i64, denominator: i64) -> bool {
            let r = Rational::new(numerator, denominator);
            r.to_array() == vec![r.to_string()]
        }
        quickcheck(prop as fn(i64, i64) -> bool);
    }
}
