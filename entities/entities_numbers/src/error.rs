//! Rational Engine Errors

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

/// Failures of the rational engine
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RationalError {
    /// The instance's denominator is zero, so it has no well-defined float
    #[error("invalid denominator: cannot expand a fraction with a zero denominator")]
    InvalidDenominator,
    /// NaN or an infinity cannot be approximated by a fraction
    #[error("cannot build a rational number from non-finite value {0}")]
    NonFinite(f64),
}
