//! Array Wrapper
//!
//! [`Arr`] is an ordered list of keyed entries. Keys are either positional
//! indexes or names, and entries keep their insertion order. An array whose
//! keys are exactly `0..n` in order is a list; anything else is a map, and
//! the two render differently as JSON:
//!
//! ```rust
//! use entities_data_handling::{Arr, ArrayKey, Value};
//!
//! let mut list = Arr::new(vec![Value::from(1), Value::from("two")]);
//! list.append(3.5);
//! assert_eq!(list.to_string(), r#"[1,"two",3.5]"#);
//!
//! list.add_indexed_item("name", "x");
//! assert_eq!(list.to_string(), r#"{"0":1,"1":"two","2":3.5,"name":"x"}"#);
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

use crate::error::ArrayError;
use crate::value::Value;

/// Key of an [`Arr`] entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayKey {
    Index(usize),
    Name(String),
}

impl From<usize> for ArrayKey {
    fn from(index: usize) -> Self {
        ArrayKey::Index(index)
    }
}

impl From<&str> for ArrayKey {
    fn from(name: &str) -> Self {
        ArrayKey::Name(name.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(name: String) -> Self {
        ArrayKey::Name(name)
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Index(i) => write!(f, "{}", i),
            ArrayKey::Name(name) => f.write_str(name),
        }
    }
}

type Entries = Vec<(ArrayKey, Value)>;

/// An ordered, keyed array with an original and an active value
#[derive(Debug, Clone, PartialEq)]
pub struct Arr {
    original: Entries,
    active: Entries,
}

impl Arr {
    /// A list: `items` keyed `0..n`
    pub fn new(items: Vec<Value>) -> Self {
        Self::from_entries(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ArrayKey::Index(i), v))
                .collect(),
        )
    }

    pub fn from_entries(entries: Vec<(ArrayKey, Value)>) -> Self {
        Self {
            active: entries.clone(),
            original: entries,
        }
    }

    pub fn original(&self) -> &[(ArrayKey, Value)] {
        &self.original
    }

    pub fn active(&self) -> &[(ArrayKey, Value)] {
        &self.active
    }

    pub fn count(&self) -> usize {
        self.active.len()
    }

    /// Alias of [`Arr::count`]
    pub fn length(&self) -> usize {
        self.count()
    }

    /// Add `item` under the index after the largest one in use
    pub fn append(&mut self, item: impl Into<Value>) -> &mut Self {
        let key = ArrayKey::Index(self.next_index());
        self.active.push((key, item.into()));
        self
    }

    /// Put `item` first and renumber the positional keys from zero
    ///
    /// Named keys are left alone.
    ///
    /// # Errors
    ///
    /// `ArrayError::ArrayItem` when `item` is itself an array or object.
    pub fn prepend(&mut self, item: impl Into<Value>) -> Result<&mut Self, ArrayError> {
        let item = item.into();
        if item.is_compound() {
            return Err(ArrayError::ArrayItem);
        }
        self.active.insert(0, (ArrayKey::Index(0), item));
        let mut next = 0;
        for (key, _) in self.active.iter_mut() {
            if let ArrayKey::Index(index) = key {
                *index = next;
                next += 1;
            }
        }
        Ok(self)
    }

    /// Replace the entry under `key` in place, or append it
    pub fn add_indexed_item(&mut self, key: impl Into<ArrayKey>, item: impl Into<Value>) -> &mut Self {
        let key = key.into();
        let item = item.into();
        match self.active.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = item,
            None => self.active.push((key, item)),
        }
        self
    }

    pub fn get(&self, key: impl Into<ArrayKey>) -> Option<&Value> {
        let key = key.into();
        self.active.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn reset(&mut self) -> &mut Self {
        self.active = self.original.clone();
        self
    }

    pub fn values(&self) -> Vec<Value> {
        self.active.iter().map(|(_, v)| v.clone()).collect()
    }

    /// True when the keys are exactly `0..n` in order
    pub fn is_list(&self) -> bool {
        self.active
            .iter()
            .enumerate()
            .all(|(i, (k, _))| *k == ArrayKey::Index(i))
    }

    /// The active entries as a dynamic value: `Array` for lists, `Object` otherwise
    pub fn to_value(&self) -> Value {
        if self.is_list() {
            Value::Array(self.values())
        } else {
            Value::Object(
                self.active
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            )
        }
    }

    fn next_index(&self) -> usize {
        self.active
            .iter()
            .filter_map(|(k, _)| match k {
                ArrayKey::Index(i) => Some(i + 1),
                ArrayKey::Name(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Arr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value().to_json())
    }
}
