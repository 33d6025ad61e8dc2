//! Entities Layer: Numbers
//!
//! Exact numeric building blocks for the scalar wrapper types.
//!
//! ## Overview
//!
//! The `entities_numbers` crate approximates floats with "nice" fractions. A
//! float is expanded into a short continued fraction, and the expansion is
//! collapsed back into a numerator/denominator pair using unreduced fraction
//! addition over arbitrary precision integers.
//!
//! ## Modules
//!
//! - **[`big`](big/index.html)**: `BigNumber`, the arbitrary precision integer
//!   carrying numerators and denominators.
//! - **[`significand`](significand/index.html)**: rendering a float at a fixed
//!   number of significant digits, which is where remainder digits are read.
//! - **[`continued_fraction`](continued_fraction/index.html)**: expansion,
//!   collapsing and the `ExpansionConfig` knobs.
//! - **[`rational`](rational/index.html)**: the `Rational` value type.
//! - **[`error`](error/index.html)**: `RationalError`.
//!
//! ## Usage
//!
//! ```rust
//! use entities_numbers::Rational;
//!
//! let r = Rational::from_float(2.4).unwrap();
//! assert_eq!(r.to_string(), "12/5");
//! assert_eq!(r.to_int(), 2);
//! ```
//!
//! ## Architecture
//!
//! Innermost layer: no dependencies on other crates in the workspace.

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

pub mod big;
pub mod continued_fraction;
pub mod error;
pub mod rational;
pub mod significand;

pub use big::BigNumber;
pub use continued_fraction::{ContinuedFraction, ExpansionConfig, Sign, Term};
pub use error::RationalError;
pub use rational::Rational;
pub use significand::{Significand, DISPLAY_SIGNIFICANT_DIGITS};
