//! Continued Fraction Module
//!
//! Expands a float into a finite continued fraction and collapses a continued
//! fraction back into a single (unreduced) numerator/denominator pair.
//!
//! # Expansion
//!
//! The magnitude of the input splits into an exact integer part and a
//! fractional remainder. The remainder is taken from the shortest decimal form
//! of the input, so the integer part never eats into its digits. Each step
//! renders the remainder at a fixed number of significant digits, reads the
//! `d` digits after the decimal point as an integer `m`, and takes `10^d / m`.
//! The whole part of that quotient becomes the next term `[1, floor]`, and its
//! fractional part is the next remainder.
//!
//! Expansion stops when:
//!
//! - the remainder renders as zero,
//! - the terms collapsed so far render identically to the fractional part,
//! - `max_terms` terms have been produced, or
//! - the remainder rounds up to one, in which case the last term is bumped.
//!
//! # Collapsing
//!
//! Terms are folded from the least significant upward using plain fraction
//! addition `a/b + c/d = (ad + cb)/bd`, inverting at every level. No common
//! factors are cancelled. The integer part is added last and the sign is
//! applied to the numerator.
//!
//! ```rust
//! use entities_numbers::{ContinuedFraction, ExpansionConfig, Sign};
//!
//! let cf = ContinuedFraction::expand(4.4624, &ExpansionConfig::default()).unwrap();
//! assert_eq!(cf.sign(), Sign::Plus);
//! assert_eq!(cf.integer().to_i64(), Some(4));
//! let (numerator, denominator) = cf.collapse();
//! assert_eq!(format!("{}/{}", numerator, denominator), "2789/625");
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

use tracing::{debug, trace};

use crate::big::BigNumber;
use crate::error::RationalError;
use crate::rational::ratio_to_f64;
use crate::significand::{Significand, DISPLAY_SIGNIFICANT_DIGITS};

/// Expansion tuning
///
/// The defaults bound the size of unreduced intermediate fractions and keep
/// floating-point noise out of the terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionConfig {
    /// Maximum number of continued-fraction terms
    pub max_terms: usize,
    /// Decimal places the remainder is rounded to before it is rendered
    pub rounding_decimals: i32,
    /// Significant digits used to render remainders and compare convergents
    pub significant_digits: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_terms: 20,
            rounding_decimals: 16,
            significant_digits: DISPLAY_SIGNIFICANT_DIGITS,
        }
    }
}

/// Sign of an expanded value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// `Plus` for strictly positive values, `Minus` otherwise
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One level of a continued fraction, stored as `[numerator, denominator]`
///
/// Expansion only produces unit numerators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub numerator: u64,
    pub denominator: u64,
}

impl Term {
    pub fn unit(denominator: u64) -> Self {
        Self {
            numerator: 1,
            denominator,
        }
    }
}

/// A float's continued-fraction expansion: `sign (integer + terms)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuedFraction {
    sign: Sign,
    integer: BigNumber,
    terms: Vec<Term>,
}

/// What the next remainder contributes to the expansion
enum Remainder {
    /// Nothing left after rounding
    Exhausted,
    /// Rounded up to one: the previous level was one short
    Carry,
    /// `count` digits after the decimal point, reading as `value`
    Digits { count: usize, value: u64 },
}

impl Remainder {
    fn read(remainder: f64, significant_digits: usize) -> Self {
        let rendered = Significand::of(remainder, significant_digits);
        if rendered.is_zero() {
            return Remainder::Exhausted;
        }
        if rendered.exponent() >= 0 {
            return Remainder::Carry;
        }
        let count = rendered.fractional_digits().len();
        match rendered.digits().parse::<u64>() {
            Ok(value) if value > 0 => Remainder::Digits { count, value },
            _ => Remainder::Exhausted,
        }
    }
}

impl ContinuedFraction {
    pub fn new(sign: Sign, integer: BigNumber, terms: Vec<Term>) -> Self {
        Self {
            sign,
            integer,
            terms,
        }
    }

    /// The expansion of zero: `+0` with no terms
    pub fn zero() -> Self {
        Self::new(Sign::Plus, BigNumber::from_i64(0), Vec::new())
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Absolute value of the integer part
    pub fn integer(&self) -> &BigNumber {
        &self.integer
    }

    /// Terms, most significant first
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Expand `value` into a continued fraction
    ///
    /// # Errors
    ///
    /// `RationalError::NonFinite` for NaN and infinities.
    pub fn expand(value: f64, config: &ExpansionConfig) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite(value));
        }
        if value == 0.0 {
            return Ok(Self::zero());
        }

        let sign = Sign::of(value);
        let magnitude = value.abs();
        let integer = BigNumber::from_f64_truncated(magnitude).ok_or(RationalError::NonFinite(value))?;
        if magnitude.fract() == 0.0 {
            return Ok(Self::new(sign, integer, Vec::new()));
        }

        let mut remainder = fractional_part(magnitude);
        let target = Significand::of(remainder, config.significant_digits);
        let mut expansion = Self::new(sign, integer, Vec::with_capacity(config.max_terms));

        while expansion.terms.len() < config.max_terms {
            if expansion.renders_as(&target, config.significant_digits) {
                break;
            }
            remainder = round_decimals(remainder, config.rounding_decimals);
            match Remainder::read(remainder, config.significant_digits) {
                Remainder::Exhausted => break,
                Remainder::Carry => {
                    debug!(value, "remainder rounded up to one, carrying into previous level");
                    expansion.carry();
                    break;
                }
                Remainder::Digits { count, value: digits } => {
                    let current = 10f64.powi(count as i32) / digits as f64;
                    let whole = current.floor();
                    trace!(level = expansion.terms.len(), term = whole, "continued fraction term");
                    expansion.terms.push(Term::unit(whole as u64));
                    remainder = current - whole;
                }
            }
        }

        if expansion.terms.len() >= config.max_terms {
            debug!(value, max_terms = config.max_terms, "continued fraction expansion hit the term limit");
        }

        Ok(expansion)
    }

    /// Collapse into `(numerator, denominator)` with the sign on the numerator
    pub fn collapse(&self) -> (BigNumber, BigNumber) {
        let (numerator, denominator) = self.collapse_magnitude();
        match self.sign {
            Sign::Plus => (numerator, denominator),
            Sign::Minus => (numerator.negate(), denominator),
        }
    }

    fn collapse_magnitude(&self) -> (BigNumber, BigNumber) {
        let (numerator, denominator) = self.collapse_terms();
        (numerator.plus(&self.integer.times(&denominator)), denominator)
    }

    /// Everything below the integer part, as one fraction
    fn collapse_terms(&self) -> (BigNumber, BigNumber) {
        let one = BigNumber::from_i64(1);
        let mut levels = self.terms.iter().rev();
        match levels.next() {
            Some(last) => {
                let mut acc = (BigNumber::from(last.numerator), BigNumber::from(last.denominator));
                for term in levels {
                    let sum = add_fractions(&acc, &(BigNumber::from(term.denominator), one.clone()));
                    acc = (BigNumber::from(term.numerator).times(&sum.1), sum.0);
                }
                acc
            }
            None => (BigNumber::from_i64(0), one),
        }
    }

    fn renders_as(&self, target: &Significand, significant_digits: usize) -> bool {
        let (numerator, denominator) = self.collapse_terms();
        Significand::of(ratio_to_f64(&numerator, &denominator), significant_digits) == *target
    }

    fn carry(&mut self) {
        match self.terms.last_mut() {
            Some(last) => last.denominator += 1,
            None => self.integer = self.integer.plus_small(1),
        }
    }
}

/// Unreduced fraction addition: `a/b + c/d = (ad + cb) / bd`
fn add_fractions(first: &(BigNumber, BigNumber), second: &(BigNumber, BigNumber)) -> (BigNumber, BigNumber) {
    (
        first.0.mul_add(&second.1, &second.0.times(&first.1)),
        first.1.times(&second.1),
    )
}

/// Digits after the decimal point of the shortest rendering of `magnitude`
///
/// Subtracting the truncated value would drag the input's representation
/// error into the remainder (`7.0000001` has a remainder of `1.00000000058e-7`).
fn fractional_part(magnitude: f64) -> f64 {
    match magnitude.to_string().split_once('.') {
        Some((_, digits)) => format!("0.{}", digits)
            .parse::<f64>()
            .unwrap_or_else(|_| magnitude.fract()),
        None => 0.0,
    }
}

fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
