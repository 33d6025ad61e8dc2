//! Boolean Wrapper
//!
//! [`Bln`] decides whether an arbitrary value means true or false by looking
//! it up in two lists of recognised values.
//!
//! ## Truth values
//!
//! | Index | True     | False     | [`Representation`]    |
//! |-------|----------|-----------|-----------------------|
//! | 0     | `true`   | `false`   | `TrueFalseBoolean`    |
//! | 1     | `1`      | `0`       | `OneZeroInteger`      |
//! | 2     | `"t"`    | `"f"`     | `TFString`            |
//! | 3     | `"true"` | `"false"` | `TrueFalseString`     |
//! | 4     | `"yes"`  | `"no"`    | `YesNoString`         |
//!
//! Strings match case-insensitively; everything else must match exactly, so
//! `1.0` and `"1"` are not recognised. Callers may extend both lists through
//! [`BooleanOptions`], which can also be loaded from JSON:
//!
//! ```rust
//! use entities_data_handling::{Bln, BooleanOptions, Value};
//!
//! let options = BooleanOptions::from_json(
//!     r#"{"representation": "yes_no_string", "true_values": ["Oui"], "false_values": ["non"]}"#,
//! ).unwrap();
//! let b = Bln::with_options("OUI", &options).unwrap();
//! assert_eq!(b.to_bool(), Some(true));
//! assert_eq!(b.represent(), Value::from("yes"));
//! ```
//!
//! In SQL mode `null` is accepted and means "unknown".

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

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cast::Cast;
use crate::error::BooleanError;
use crate::text::Str;
use crate::value::Value;

/// How a boolean is rendered by [`Bln::represent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    #[default]
    TrueFalseBoolean,
    OneZeroInteger,
    TFString,
    TrueFalseString,
    YesNoString,
}

impl Representation {
    /// Position of this representation in the built-in truth lists
    pub fn index(self) -> usize {
        match self {
            Representation::TrueFalseBoolean => 0,
            Representation::OneZeroInteger => 1,
            Representation::TFString => 2,
            Representation::TrueFalseString => 3,
            Representation::YesNoString => 4,
        }
    }
}

/// Construction options for [`Bln`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanOptions {
    pub representation: Representation,
    /// Accept `null` as an unknown value
    pub sql_mode: bool,
    /// Extra values meaning true, appended after the built-ins
    pub true_values: Vec<Value>,
    /// Extra values meaning false, appended after the built-ins
    pub false_values: Vec<Value>,
}

impl BooleanOptions {
    pub fn from_json(text: &str) -> Result<Self, BooleanError> {
        serde_json::from_str(text).map_err(|e| BooleanError::Options(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TruthTable {
    true_values: Vec<Value>,
    false_values: Vec<Value>,
}

impl TruthTable {
    fn builtin() -> Self {
        Self {
            true_values: vec![
                Value::Bool(true),
                Value::Integer(1),
                Value::from("t"),
                Value::from("true"),
                Value::from("yes"),
            ],
            false_values: vec![
                Value::Bool(false),
                Value::Integer(0),
                Value::from("f"),
                Value::from("false"),
                Value::from("no"),
            ],
        }
    }

    fn with_custom(true_values: &[Value], false_values: &[Value]) -> Result<Self, BooleanError> {
        let mut table = Self::builtin();
        if true_values.is_empty() && false_values.is_empty() {
            return Ok(table);
        }

        let extra_true = normalize(true_values, "true values")?;
        let extra_false = normalize(false_values, "false values")?;

        let overlap: Vec<String> = extra_true
            .iter()
            .filter(|v| extra_false.contains(v))
            .map(Value::render)
            .collect();
        if !overlap.is_empty() {
            return Err(BooleanError::Overlapping(overlap.join(",")));
        }

        debug!(
            true_values = extra_true.len(),
            false_values = extra_false.len(),
            "merged custom truth values"
        );
        table.true_values.extend(extra_true);
        table.false_values.extend(extra_false);
        Ok(table)
    }

    fn classify(&self, value: &Value) -> Option<bool> {
        let value = lowercased(value);
        if self.true_values.contains(&value) {
            Some(true)
        } else if self.false_values.contains(&value) {
            Some(false)
        } else {
            None
        }
    }

    fn value_for(&self, truth: bool, representation: Representation) -> Value {
        let list = if truth { &self.true_values } else { &self.false_values };
        list[representation.index()].clone()
    }
}

fn lowercased(value: &Value) -> Value {
    match value {
        Value::Str(s) => Value::Str(s.to_lowercase()),
        other => other.clone(),
    }
}

/// Lower-case strings and drop duplicates; compound values are rejected
fn normalize(values: &[Value], list: &'static str) -> Result<Vec<Value>, BooleanError> {
    let mut out: Vec<Value> = Vec::with_capacity(values.len());
    for value in values {
        if value.is_compound() {
            return Err(BooleanError::CompoundValue { list });
        }
        let value = lowercased(value);
        if !out.contains(&value) {
            out.push(value);
        }
    }
    Ok(out)
}

/// A boolean with an original value and its truthiness
#[derive(Debug, Clone, PartialEq)]
pub struct Bln {
    original: Value,
    active: Option<bool>,
    representation: Representation,
    sql_mode: bool,
    table: TruthTable,
}

impl Bln {
    /// Build with default options
    pub fn new(value: impl Into<Value>) -> Result<Self, BooleanError> {
        Self::with_options(value, &BooleanOptions::default())
    }

    /// # Errors
    ///
    /// * `NullNotAllowed` - `null` outside SQL mode
    /// * `CompoundValue` - an array or object in the custom truth lists
    /// * `Overlapping` - a value in both custom lists
    /// * `Undetermined` - the value is in neither list
    pub fn with_options(value: impl Into<Value>, options: &BooleanOptions) -> Result<Self, BooleanError> {
        let original = value.into();
        if original.is_null() && !options.sql_mode {
            return Err(BooleanError::NullNotAllowed);
        }

        let table = TruthTable::with_custom(&options.true_values, &options.false_values)?;
        let active = if original.is_null() {
            None
        } else {
            Some(
                table
                    .classify(&original)
                    .ok_or_else(|| BooleanError::Undetermined(original.to_json()))?,
            )
        };

        Ok(Self {
            original,
            active,
            representation: options.representation,
            sql_mode: options.sql_mode,
            table,
        })
    }

    /// Render `value`'s truthiness in `mode`, using the built-in lists
    pub fn value_from_boolean(value: impl Into<Value>, mode: Representation) -> Result<Value, BooleanError> {
        let bln = Self::new(value)?;
        Ok(bln
            .active
            .map_or(Value::Null, |truth| bln.table.value_for(truth, mode)))
    }

    pub fn original(&self) -> &Value {
        &self.original
    }

    /// `None` only for `null` in SQL mode
    pub fn to_bool(&self) -> Option<bool> {
        self.active
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn sql_mode(&self) -> bool {
        self.sql_mode
    }

    pub fn reset(&mut self) -> &mut Self {
        if !self.original.is_null() {
            self.active = self.table.classify(&self.original);
        }
        self
    }

    /// The active value in the configured representation (`null` if unknown)
    pub fn represent(&self) -> Value {
        self.active
            .map_or(Value::Null, |truth| self.table.value_for(truth, self.representation))
    }

    pub fn length(&self) -> usize {
        self.to_string().len()
    }

    fn is_true(&self) -> bool {
        self.active == Some(true)
    }
}

impl fmt::Display for Bln {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_true() { "1" } else { "" })
    }
}

impl Cast for Bln {
    fn to_int(&self) -> i64 {
        self.is_true() as i64
    }

    fn to_float(&self) -> f64 {
        if self.is_true() {
            1.0
        } else {
            0.0
        }
    }

    fn to_array(&self) -> Vec<Value> {
        vec![Value::from(self.active)]
    }

    fn to_str(&self) -> Str {
        Str::new(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_values() {
        for truthy in [Value::from(true), Value::from(1), Value::from("t"), Value::from("TRUE"), Value::from("Yes")] {
            assert_eq!(Bln::new(truthy).unwrap().to_bool(), Some(true));
        }
        for falsy in [Value::from(false), Value::from(0), Value::from("F"), Value::from("false"), Value::from("no")] {
            assert_eq!(Bln::new(falsy).unwrap().to_bool(), Some(false));
        }
    }

    #[test]
    fn test_strict_matching() {
        assert!(matches!(Bln::new(1.0), Err(BooleanError::Undetermined(_))));
        assert!(matches!(Bln::new("1"), Err(BooleanError::Undetermined(_))));
        assert!(matches!(Bln::new(2), Err(BooleanError::Undetermined(_))));
        assert_eq!(
            Bln::new("maybe").unwrap_err().to_string(),
            "cannot determine truthiness or falsiness of \"maybe\""
        );
    }

    #[test]
    fn test_null_handling() {
        assert_eq!(Bln::new(Value::Null), Err(BooleanError::NullNotAllowed));
        let options = BooleanOptions {
            sql_mode: true,
            ..BooleanOptions::default()
        };
        let b = Bln::with_options(Value::Null, &options).unwrap();
        assert_eq!(b.to_bool(), None);
        assert!(b.sql_mode());
        assert_eq!(b.represent(), Value::Null);
        assert_eq!(b.to_array(), vec![Value::Null]);
        assert_eq!(b.to_string(), "");
    }

    #[test]
    fn test_custom_values() {
        let options = BooleanOptions {
            true_values: vec![Value::from("Y"), Value::from("y"), Value::from(2)],
            false_values: vec![Value::from("N")],
            ..BooleanOptions::default()
        };
        assert_eq!(Bln::with_options("y", &options).unwrap().to_bool(), Some(true));
        assert_eq!(Bln::with_options(2, &options).unwrap().to_bool(), Some(true));
        assert_eq!(Bln::with_options("n", &options).unwrap().to_bool(), Some(false));
        // Built-ins still apply
        assert_eq!(Bln::with_options("yes", &options).unwrap().to_bool(), Some(true));
    }

    #[test]
    fn test_custom_value_errors() {
        let compound = BooleanOptions {
            true_values: vec![Value::Array(vec![])],
            ..BooleanOptions::default()
        };
        assert_eq!(
            Bln::with_options(true, &compound),
            Err(BooleanError::CompoundValue { list: "true values" })
        );

        let overlapping = BooleanOptions {
            true_values: vec![Value::from("Ja"), Value::from("x")],
            false_values: vec![Value::from("ja")],
            ..BooleanOptions::default()
        };
        assert_eq!(
            Bln::with_options(true, &overlapping),
            Err(BooleanError::Overlapping("ja".to_string()))
        );
    }

    #[test]
    fn test_representations() {
        let cases = [
            (Representation::TrueFalseBoolean, Value::from(true), Value::from(false)),
            (Representation::OneZeroInteger, Value::from(1), Value::from(0)),
            (Representation::TFString, Value::from("t"), Value::from("f")),
            (Representation::TrueFalseString, Value::from("true"), Value::from("false")),
            (Representation::YesNoString, Value::from("yes"), Value::from("no")),
        ];
        for (mode, when_true, when_false) in cases {
            assert_eq!(Bln::value_from_boolean("YES", mode).unwrap(), when_true);
            assert_eq!(Bln::value_from_boolean(0, mode).unwrap(), when_false);

            let options = BooleanOptions {
                representation: mode,
                ..BooleanOptions::default()
            };
            assert_eq!(Bln::with_options("t", &options).unwrap().represent(), when_true);
        }
        assert!(Bln::value_from_boolean("perhaps", Representation::YesNoString).is_err());
    }

    #[test]
    fn test_options_from_json() {
        let options = BooleanOptions::from_json(r#"{"representation": "one_zero_integer", "sql_mode": true}"#).unwrap();
        assert_eq!(options.representation, Representation::OneZeroInteger);
        assert!(options.sql_mode);
        assert!(options.true_values.is_empty());

        assert_eq!(BooleanOptions::from_json("{}").unwrap(), BooleanOptions::default());
        assert!(matches!(
            BooleanOptions::from_json(r#"{"representation": "maybe"}"#),
            Err(BooleanError::Options(_))
        ));
    }

    #[test]
    fn test_display_and_casts() {
        let mut yes = Bln::new("yes").unwrap();
        let no = Bln::new("no").unwrap();
        assert_eq!(yes.to_string(), "1");
        assert_eq!(no.to_string(), "");
        assert_eq!(yes.length(), 1);
        assert_eq!(no.length(), 0);
        assert_eq!(yes.to_int(), 1);
        assert_eq!(no.to_float(), 0.0);
        assert_eq!(yes.to_array(), vec![Value::Bool(true)]);
        assert_eq!(yes.to_str().active(), "1");
        assert_eq!(yes.reset().to_bool(), Some(true));
        assert_eq!(yes.original(), &Value::from("yes"));
        assert_eq!(yes.representation(), Representation::TrueFalseBoolean);
    }
}
