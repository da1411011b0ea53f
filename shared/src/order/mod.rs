//! Order pricing value types
//!
//! Inputs to the order builder (line items, packaging, delivery request) and
//! the priced results it produces. Money is carried as [`rust_decimal::Decimal`]
//! and serialized as a JSON number.

pub mod types;

pub use types::*;
