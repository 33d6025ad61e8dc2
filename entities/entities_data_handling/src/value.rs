//! Dynamic Values and Type Tags
//!
//! Wrapper types are statically typed, but arrays, boolean truth lists and
//! casts still need to carry "any scalar or compound value". This module
//! provides that closed set of variants ([`Value`]) together with the short
//! tags ([`TypeTag`]) used to name each kind.
//!
//! JSON is the one true dynamic boundary: [`Value`] converts to and from
//! `serde_json::Value` and serializes with `serde`. Object entries keep their
//! insertion order both ways (`serde_json` is built with `preserve_order`).
//!
//! ## Examples
//!
//! ```rust
//! use entities_data_handling::{TypeTag, Value};
//!
//! let v = Value::from_json(r#"[1, 2.5, "three", null]"#).unwrap();
//! assert_eq!(v.type_tag(), TypeTag::Array);
//! assert_eq!(v.to_json(), r#"[1,2.5,"three",null]"#);
//! assert_eq!(TypeTag::Float.as_str(), "Flt");
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

use entities_numbers::{Significand, DISPLAY_SIGNIFICANT_DIGITS};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// Kind of a value, named by its short tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null,
    Integer,
    Float,
    String,
    Bool,
    Array,
    Object,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Null => "Nul",
            TypeTag::Integer => "Integ",
            TypeTag::Float => "Flt",
            TypeTag::String => "Str",
            TypeTag::Bool => "Bln",
            TypeTag::Array => "Arr",
            TypeTag::Object => "Obj",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed value
///
/// Equality is strict: `Integer(1)`, `Float(1.0)`, `Bool(true)` and
/// `Str("1")` are all different values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Bool,
            Value::Integer(_) => TypeTag::Integer,
            Value::Float(_) => TypeTag::Float,
            Value::Str(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }

    /// Booleans, integers, floats and strings
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::Str(_)
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Arrays and objects
    pub fn is_compound(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a JSON document
    pub fn from_json(text: &str) -> Result<Self, ValueError> {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from(parsed))
    }

    /// Compact JSON rendering
    ///
    /// Non-finite floats render as `null`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }

    /// Plain text rendering of a scalar
    ///
    /// `true` renders as `"1"`, `false` and null as `""`, floats at 14
    /// significant digits and compound values as JSON.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => String::new(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => render_float(*f),
            Value::Str(s) => s.clone(),
            Value::Array(_) | Value::Object(_) => self.to_json(),
        }
    }
}

/// Float rendering shared by [`Value::render`] and [`crate::Flt`]
pub(crate) fn render_float(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        Significand::of(value, DISPLAY_SIGNIFICANT_DIGITS).render()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(entries) => {
                Value::Object(entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Str(s) => serde_json::Value::String(s),
            Value::Array(items) => serde_json::Value::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => {
                serde_json::Value::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float(_) => serializer.serialize_unit(),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, item) in entries {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags() {
        assert_eq!(Value::Null.type_tag().as_str(), "Nul");
        assert_eq!(Value::from(3).type_tag().as_str(), "Integ");
        assert_eq!(Value::from(3.5).type_tag().as_str(), "Flt");
        assert_eq!(Value::from("x").type_tag().as_str(), "Str");
        assert_eq!(Value::from(true).type_tag().as_str(), "Bln");
        assert_eq!(Value::Array(vec![]).type_tag().as_str(), "Arr");
        assert_eq!(Value::Object(vec![]).type_tag().to_string(), "Obj");
    }

    #[test]
    fn test_scalar_and_compound() {
        assert!(Value::from(1).is_scalar());
        assert!(Value::from("a").is_scalar());
        assert!(!Value::Null.is_scalar());
        assert!(!Value::Null.is_compound());
        assert!(Value::Array(vec![]).is_compound());
        assert!(Value::Object(vec![]).is_compound());
    }

    #[test]
    fn test_strict_equality() {
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from(true));
        assert_ne!(Value::from("1"), Value::from(1));
        assert_eq!(Value::from(Some("a")), Value::from("a"));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_json_round_trip() {
        let v = Value::from_json(r#"{"a": 1, "b": [true, null, 2.5]}"#).unwrap();
        assert_eq!(
            v,
            Value::Object(vec![
                ("a".to_string(), Value::Integer(1)),
                (
                    "b".to_string(),
                    Value::Array(vec![Value::Bool(true), Value::Null, Value::Float(2.5)])
                ),
            ])
        );
        assert_eq!(v.to_json(), r#"{"a":1,"b":[true,null,2.5]}"#);
        assert!(Value::from_json("{not json").is_err());
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let v = Value::Object(vec![
            ("z".to_string(), Value::from(1)),
            ("a".to_string(), Value::from(2)),
        ]);
        assert_eq!(v.to_json(), r#"{"z":1,"a":2}"#);

        let parsed = Value::from_json(r#"{"b": 1, "a": 2}"#).unwrap();
        assert_eq!(
            parsed,
            Value::Object(vec![
                ("b".to_string(), Value::from(1)),
                ("a".to_string(), Value::from(2)),
            ])
        );
        assert_eq!(parsed.to_json(), r#"{"b":1,"a":2}"#);

        let deserialized: Value = serde_json::from_str(r#"{"y": null, "x": true}"#).unwrap();
        assert_eq!(deserialized.to_json(), r#"{"y":null,"x":true}"#);
    }

    #[test]
    fn test_non_finite_floats_render_as_null() {
        assert_eq!(Value::from(f64::NAN).to_json(), "null");
        assert_eq!(serde_json::Value::from(Value::from(f64::INFINITY)), serde_json::Value::Null);
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::from(true).render(), "1");
        assert_eq!(Value::from(false).render(), "");
        assert_eq!(Value::Null.render(), "");
        assert_eq!(Value::from(2.4).render(), "2.4");
        assert_eq!(Value::from(-7).render(), "-7");
        assert_eq!(Value::from(f64::NEG_INFINITY).render(), "-INF");
        assert_eq!(Value::Array(vec![Value::from("a")]).render(), r#"["a"]"#);
    }
}
