//! API Facades Layer
//!
//! Flat public surface over the inner layers: the `Rational` engine, the
//! scalar wrapper types and the typed stack, plus a [`prelude`] and a few
//! free functions.
//!
//! All facades call underlying Rust modules from inner layers.

pub mod common_facades;
pub mod prelude;

pub use common_facades::*;

// Re-export the inner layers' public types
pub use entities_data_handling::{
    Arr, ArrayError, ArrayKey, Bln, BooleanError, BooleanOptions, Cast, Flt, Integ, Representation, Str,
    TextError, TypeTag, Value, ValueError,
};
pub use entities_numbers::{
    BigNumber, ContinuedFraction, ExpansionConfig, Rational, RationalError, Sign, Significand, Term,
};
pub use usecases_data_structures::{Stack, StackError, StackItem};
