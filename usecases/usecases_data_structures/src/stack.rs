//! Typed Stack
//!
//! A LIFO of wrapper values that all share one type. The first item decides
//! the element type; arrays are never accepted.

use entities_data_handling::{Arr, Integ, Str, TypeTag};
use thiserror::Error;
use tracing::trace;

/// Stack errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("cannot build a stack of arrays")]
    ArrayItem,

    #[error("stack holds {expected} items, cannot push {found}")]
    TypeMismatch { expected: TypeTag, found: TypeTag },
}

/// A value that can be offered to a [`Stack`]
#[derive(Debug, Clone, PartialEq)]
pub enum StackItem {
    Str(Str),
    Integ(Integ),
    Arr(Arr),
}

impl StackItem {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            StackItem::Str(_) => TypeTag::String,
            StackItem::Integ(_) => TypeTag::Integer,
            StackItem::Arr(_) => TypeTag::Array,
        }
    }
}

impl From<Str> for StackItem {
    fn from(value: Str) -> Self {
        StackItem::Str(value)
    }
}

impl From<Integ> for StackItem {
    fn from(value: Integ) -> Self {
        StackItem::Integ(value)
    }
}

impl From<Arr> for StackItem {
    fn from(value: Arr) -> Self {
        StackItem::Arr(value)
    }
}

/// LIFO stack with a fixed element type
#[derive(Debug, Clone)]
pub struct Stack {
    items: Vec<StackItem>,
    element_type: TypeTag,
}

impl Stack {
    /// Create a stack holding `first`, whose type every later item must share
    pub fn new(first: impl Into<StackItem>) -> Result<Self, StackError> {
        let first = first.into();
        let element_type = first.type_tag();
        if element_type == TypeTag::Array {
            return Err(StackError::ArrayItem);
        }
        Ok(Self {
            items: vec![first],
            element_type,
        })
    }

    pub fn element_type(&self) -> TypeTag {
        self.element_type
    }

    pub fn push(&mut self, item: impl Into<StackItem>) -> Result<&mut Self, StackError> {
        let item = item.into();
        let found = item.type_tag();
        if found == TypeTag::Array {
            return Err(StackError::ArrayItem);
        }
        if found != self.element_type {
            return Err(StackError::TypeMismatch {
                expected: self.element_type,
                found,
            });
        }
        self.items.push(item);
        trace!(depth = self.items.len(), "stack push");
        Ok(self)
    }

    pub fn pop(&mut self) -> Option<StackItem> {
        let item = self.items.pop();
        trace!(depth = self.items.len(), "stack pop");
        item
    }

    pub fn peek(&self) -> Option<&StackItem> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
