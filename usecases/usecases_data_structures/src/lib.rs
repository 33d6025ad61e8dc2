//! Use Cases Layer: Data Structures
//!
//! Containers built from the wrapper types of the entities layer.
//!
//! ## Modules
//!
//! - **[`stack`](stack/index.html)**: a LIFO whose element type is fixed by its
//!   first item (`Str` or `Integ`; arrays are rejected)
//!
//! ## Architecture
//!
//! Depends on `entities_data_handling` for the wrapper types and `TypeTag`.
//!
//! ## See Also
//!
//! - [`entities_data_handling`](../../entities/entities_data_handling/index.html): wrapper types

pub mod stack;

pub use stack::{Stack, StackError, StackItem};
