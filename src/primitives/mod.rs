//! Primitive types
//!
//! Fixed-size building blocks with explicit, predictable semantics. They
//! are intentionally minimal and do not attempt to replicate full-featured
//! big-integer libraries.
//!
//! Current primitives:
//! - `U256`: a fixed-size 256-bit unsigned integer with checked arithmetic,
//!   backing the digit-concatenation values of the binary fusion tap

mod ops;
mod u256;

pub use u256::U256;
