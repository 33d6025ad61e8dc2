//! Everything needed for everyday use, in one import
//!
//! ```rust
//! use api_facades::prelude::*;
//!
//! let mut s = Str::new(" hello ");
//! assert_eq!(s.trim().upcase().active(), "HELLO");
//! assert_eq!(Flt::new(2.4).to_rational().unwrap().to_string(), "12/5");
//! ```

pub use crate::common_facades::{rational_from_float, rational_string, slugify};
pub use entities_data_handling::{
    Arr, ArrayKey, Bln, BooleanOptions, Cast, Flt, Integ, Representation, Str, TypeTag, Value,
};
pub use entities_numbers::{ExpansionConfig, Rational};
pub use usecases_data_structures::{Stack, StackItem};
