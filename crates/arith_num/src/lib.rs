#![deny(clippy::arithmetic_side_effects)]
//! Arith Num - numeric value and error types for the arith workspace.
//!
//! This crate provides:
//! - `CheckedInt`: an `i64` newtype that prevents unchecked arithmetic
//! - `Number`: the runtime numeric value (integer or float)
//! - Error types (`ArithError`, `ArithResult`) and their factory constructors
//!
//! # Value Types
//!
//! Operands are dynamically numeric: the same operation surface accepts
//! integers and floats. `Number` models this with two variants; integer
//! arithmetic is only reachable through `CheckedInt`'s checked methods, so
//! silent overflow cannot be written in the first place.

mod checked_int;
mod errors;
mod number;

pub use checked_int::CheckedInt;
pub use errors::{ArithError, ArithErrorKind, ArithResult};
pub use number::Number;

// Re-export error constructors for use by other crates
pub use errors::{division_by_zero, unknown_operation};
