//! Entities Layer: Data Handling
//!
//! Scalar wrapper types with fluent, chainable operations.
//!
//! ## Overview
//!
//! Every wrapper keeps the value it was created with (`original`) next to an
//! `active` value that chained operations rewrite. Mutating methods take
//! `&mut self` and return `&mut Self` (or a `Result` around it when they can
//! fail), so calls chain; `reset()` restores the original.
//!
//! ## Modules
//!
//! - **[`value`](value/index.html)**: `TypeTag` and the dynamic `Value` used at
//!   JSON boundaries, in arrays and in boolean truth lists.
//! - **[`cast`](cast/index.html)**: the `Cast` trait (`to_int`, `to_float`,
//!   `to_array`, `to_str`), also implemented for `Rational`.
//! - **[`text`](text/index.html)**: `Str`, trimming, case, padding, base64,
//!   slugs and truncation.
//! - **[`integer`](integer/index.html)**: `Integ`, radix renderings and digits.
//! - **[`float`](float/index.html)**: `Flt`, significant-digit rendering and
//!   rational approximation.
//! - **[`boolean`](boolean/index.html)**: `Bln`, truthy/falsy lookup with
//!   custom value lists, SQL mode and output representations.
//! - **[`array`](array/index.html)**: `Arr`, an ordered keyed array.
//! - **[`error`](error/index.html)**: error enums for the modules above.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{Cast, Integ, Str};
//!
//! let mut s = Str::new("  Hello World  ");
//! assert_eq!(s.trim().downcase().to_slug(None).active(), "hello-world");
//!
//! let i = Integ::new(255);
//! assert_eq!(i.to_hex(), "ff");
//! assert_eq!(i.to_str().active(), "255");
//! ```
//!
//! ## Architecture
//!
//! Entities layer. Depends only on `entities_numbers` for rational
//! approximation and float rendering.
//!
//! ## See Also
//!
//! - [`entities_numbers`](../entities_numbers/index.html): the `Rational` engine

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

pub mod array;
pub mod boolean;
pub mod cast;
pub mod error;
pub mod float;
pub mod integer;
pub mod text;
pub mod value;

pub use array::{Arr, ArrayKey};
pub use boolean::{BooleanOptions, Bln, Representation};
pub use cast::Cast;
pub use error::{ArrayError, BooleanError, TextError, ValueError};
pub use float::Flt;
pub use integer::Integ;
pub use text::Str;
pub use value::{TypeTag, Value};
