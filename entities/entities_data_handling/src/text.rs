//! String Wrapper
//!
//! [`Str`] keeps the text it was created with next to an active copy that
//! chained operations rewrite. [`Str::reset`] brings the original back.
//!
//! Lengths, offsets and justification widths count characters, not bytes.
//! Trimming strips the same set of characters everywhere: space, tab, line
//! feed, carriage return, NUL and vertical tab.
//!
//! ## Examples
//!
//! ```rust
//! use entities_data_handling::Str;
//!
//! let mut s = Str::new(" Vaibhav Kaushal ");
//! assert_eq!(s.trim().upcase().toggle_case().active(), "vaibhav kaushal");
//! assert_eq!(s.reset().active(), " Vaibhav Kaushal ");
//! assert_eq!(s.to_slug(None).active(), "vaibhav-kaushal");
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

use tracing::trace;
use unicode_normalization::UnicodeNormalization;

use crate::cast::Cast;
use crate::error::TextError;
use crate::value::Value;

/// Characters removed by the trimming operations
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

const ELLIPSIS: &str = "...";

/// A string with an original and an active value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Str {
    original: String,
    active: String,
}

impl Str {
    pub fn new(text: impl Into<String>) -> Self {
        let original = text.into();
        Self {
            active: original.clone(),
            original,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Number of characters in the active text
    pub fn length(&self) -> usize {
        self.active.chars().count()
    }

    pub fn ltrim(&mut self) -> &mut Self {
        self.active = self.active.trim_start_matches(WHITESPACE).to_string();
        self
    }

    pub fn rtrim(&mut self) -> &mut Self {
        self.active = self.active.trim_end_matches(WHITESPACE).to_string();
        self
    }

    pub fn trim(&mut self) -> &mut Self {
        self.active = self.active.trim_matches(WHITESPACE).to_string();
        self
    }

    /// Alias of [`Str::trim`]
    pub fn strip(&mut self) -> &mut Self {
        self.trim()
    }

    /// The active text split on `\n`
    pub fn lines(&self) -> Vec<String> {
        self.active.split('\n').map(str::to_string).collect()
    }

    /// Restore the active text to the original
    pub fn reset(&mut self) -> &mut Self {
        self.active = self.original.clone();
        self
    }

    pub fn downcase(&mut self) -> &mut Self {
        self.active = self.active.to_lowercase();
        self
    }

    pub fn upcase(&mut self) -> &mut Self {
        self.active = self.active.to_uppercase();
        self
    }

    /// Swap the case of every cased character
    pub fn toggle_case(&mut self) -> &mut Self {
        let mut toggled = String::with_capacity(self.active.len());
        for c in self.active.chars() {
            if c.is_lowercase() {
                toggled.extend(c.to_uppercase());
            } else if c.is_uppercase() {
                toggled.extend(c.to_lowercase());
            } else {
                toggled.push(c);
            }
        }
        self.active = toggled;
        self
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.active = self.active.chars().rev().collect();
        self
    }

    pub fn chars(&self) -> Vec<char> {
        self.active.chars().collect()
    }

    /// Split the active text on `delimiter`
    ///
    /// # Errors
    ///
    /// `TextError::EmptyDelimiter` when `delimiter` is empty.
    pub fn explode(&self, delimiter: &str) -> Result<Vec<String>, TextError> {
        if delimiter.is_empty() {
            return Err(TextError::EmptyDelimiter);
        }
        Ok(self.active.split(delimiter).map(str::to_string).collect())
    }

    /// Alias of [`Str::explode`]
    pub fn split(&self, delimiter: &str) -> Result<Vec<String>, TextError> {
        self.explode(delimiter)
    }

    pub fn append(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.active.push_str(text.as_ref());
        self
    }

    pub fn prepend(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.active.insert_str(0, text.as_ref());
        self
    }

    /// Characters from `start`, at most `length` of them
    ///
    /// A negative `start` counts from the end. A negative `length` leaves that
    /// many characters off the end. Out-of-range requests give an empty string.
    pub fn substr(&self, start: i64, length: Option<i64>) -> String {
        let total = self.length() as i64;
        let from = if start < 0 { (total + start).max(0) } else { start };
        if from >= total {
            return String::new();
        }
        let to = match length {
            None => total,
            Some(len) if len < 0 => total + len,
            Some(len) => (from + len).min(total),
        };
        if to <= from {
            return String::new();
        }
        self.active
            .chars()
            .skip(from as usize)
            .take((to - from) as usize)
            .collect()
    }

    pub fn is_empty(&self, trim_first: bool) -> bool {
        if trim_first {
            self.active.trim_matches(WHITESPACE).is_empty()
        } else {
            self.active.is_empty()
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.active.contains(needle)
    }

    pub fn starts_with(&self, needle: &str) -> bool {
        self.active.starts_with(needle)
    }

    pub fn ends_with(&self, needle: &str) -> bool {
        self.active.ends_with(needle)
    }

    pub fn is_equal_to(&self, other: &str) -> bool {
        self.active == other
    }

    pub fn first_character(&self) -> Option<char> {
        self.active.chars().next()
    }

    pub fn last_character(&self) -> Option<char> {
        self.active.chars().next_back()
    }

    /// Pad on the right with `pad` (repeated, then cut) up to `width` characters
    pub fn l_just(&mut self, width: usize, pad: &str) -> Result<&mut Self, TextError> {
        let padding = padding(self.length(), width, pad)?;
        self.active.push_str(&padding);
        Ok(self)
    }

    /// Pad on the left with `pad` (repeated, then cut) up to `width` characters
    pub fn r_just(&mut self, width: usize, pad: &str) -> Result<&mut Self, TextError> {
        let padding = padding(self.length(), width, pad)?;
        self.active.insert_str(0, &padding);
        Ok(self)
    }

    /// Replace the active text with its base64 encoding
    ///
    /// The URL-safe alphabet uses `-` and `_` and drops the `=` padding.
    pub fn base64_encode(&mut self, url_safe: bool) -> &mut Self {
        self.active = if url_safe {
            base64::encode_config(self.active.as_bytes(), base64::URL_SAFE_NO_PAD)
        } else {
            base64::encode(self.active.as_bytes())
        };
        self
    }

    /// Replace the active text with its base64 decoding
    pub fn base64_decode(&mut self, url_safe: bool) -> Result<&mut Self, TextError> {
        let decoded = if url_safe {
            base64::decode_config(self.active.as_bytes(), base64::URL_SAFE_NO_PAD)
        } else {
            base64::decode(self.active.as_bytes())
        }
        .map_err(|e| TextError::Base64(e.to_string()))?;
        self.active = String::from_utf8(decoded).map_err(|_| TextError::NotUtf8)?;
        Ok(self)
    }

    /// Surround the active text with `start` and `end` (`end` defaults to `start`)
    pub fn wrap_with(&mut self, start: &str, end: Option<&str>) -> &mut Self {
        let end = end.unwrap_or(start);
        self.active = format!("{}{}{}", start, self.active, end);
        self
    }

    /// Wrap the active text in double quotes
    pub fn quote(&mut self) -> &mut Self {
        self.wrap_with("\"", None)
    }

    /// Turn the active text into a URL slug
    ///
    /// Accented letters are transliterated to their ASCII base, whitespace
    /// becomes `-`, and only `[a-z0-9_-]` survive. Runs of `-` collapse into
    /// one and the slug never starts or ends with `-`.
    pub fn to_slug(&mut self, max_len: Option<usize>) -> &mut Self {
        let ascii: String = self
            .active
            .trim_matches(WHITESPACE)
            .nfkd()
            .filter(char::is_ascii)
            .collect::<String>()
            .to_ascii_lowercase();

        let mut slug = String::with_capacity(ascii.len());
        for c in ascii.chars() {
            let c = if c.is_ascii_whitespace() { '-' } else { c };
            if !(c.is_ascii_alphanumeric() || c == '_' || c == '-') {
                continue;
            }
            if c == '-' && (slug.is_empty() || slug.ends_with('-')) {
                continue;
            }
            slug.push(c);
        }
        if let Some(max) = max_len {
            slug.truncate(max);
        }
        trace!(from = %self.active, to = %slug.trim_end_matches('-'), "slugified");
        self.active = slug.trim_end_matches('-').to_string();
        self
    }

    /// Cut the active text to `len` characters
    ///
    /// With `ellipsis`, the last three of those characters are `...`.
    pub fn truncate(&mut self, len: usize, ellipsis: bool) -> &mut Self {
        if self.length() <= len {
            return self;
        }
        self.active = if ellipsis {
            let keep = len.saturating_sub(ELLIPSIS.len());
            let mut cut: String = self.active.chars().take(keep).collect();
            cut.push_str(ELLIPSIS);
            cut
        } else {
            self.active.chars().take(len).collect()
        };
        self
    }

    /// True when the active text equals one of `candidates`
    pub fn included_in<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        candidates.iter().any(|c| c.as_ref() == self.active)
    }
}

fn padding(current: usize, width: usize, pad: &str) -> Result<String, TextError> {
    if pad.is_empty() {
        return Err(TextError::EmptyPadding);
    }
    Ok(pad.chars().cycle().take(width.saturating_sub(current)).collect())
}

/// Longest leading slice of `text` that reads as a number, after whitespace
fn numeric_prefix(text: &str, with_fraction: bool) -> &str {
    let text = text.trim_start_matches(WHITESPACE);
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut seen_digits = int_end > end;
    end = int_end;

    if with_fraction {
        if bytes.get(end) == Some(&b'.') {
            let frac_end = digits_from(end + 1);
            if frac_end > end + 1 || seen_digits {
                seen_digits |= frac_end > end + 1;
                end = frac_end;
            }
        }
        if seen_digits && matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
                exp += 1;
            }
            let exp_end = digits_from(exp);
            if exp_end > exp {
                end = exp_end;
            }
        }
    }

    if seen_digits {
        &text[..end]
    } else {
        ""
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.active)
    }
}

impl Cast for Str {
    /// Leading integer of the active text, 0 when there is none
    fn to_int(&self) -> i64 {
        let prefix = numeric_prefix(&self.active, false);
        prefix
            .parse::<i64>()
            .unwrap_or_else(|_| prefix.parse::<f64>().map_or(0, |f| f as i64))
    }

    /// Leading number of the active text, 0.0 when there is none
    fn to_float(&self) -> f64 {
        numeric_prefix(&self.active, true).parse::<f64>().unwrap_or(0.0)
    }

    fn to_array(&self) -> Vec<Value> {
        vec![Value::Str(self.active.clone())]
    }

    fn to_str(&self) -> Str {
        Str::new(self.active.clone())
    }
}
