//! Wrapper Type Errors
//!
//! One error enum per wrapper family. Every fallible operation in this crate
//! returns one of these; nothing panics on user input.

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

use thiserror::Error;

/// Failures at the dynamic (JSON) boundary
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of [`crate::Str`] operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("padding string must not be empty")]
    EmptyPadding,

    #[error("invalid base64 input: {0}")]
    Base64(String),

    #[error("decoded base64 is not valid UTF-8")]
    NotUtf8,
}

/// Failures of [`crate::Bln`] construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BooleanError {
    #[error("cannot create a boolean from null unless SQL mode is enabled")]
    NullNotAllowed,

    #[error("compound value found in {list}: only scalar truth values are allowed")]
    CompoundValue { list: &'static str },

    #[error("same values found in both true and false values: {0}")]
    Overlapping(String),

    #[error("cannot determine truthiness or falsiness of {0}")]
    Undetermined(String),

    #[error("invalid boolean options: {0}")]
    Options(String),
}

/// Failures of [`crate::Arr`] operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("cannot prepend an array to an array")]
    ArrayItem,
}
