//! The four arithmetic operations.
//!
//! Provides direct enum-based dispatch for the operation set. The set is
//! fixed, so pattern matching is preferred over trait objects for
//! exhaustiveness checking.
//!
//! Integer operands stay integers while the result is representable in
//! `i64`; a checked operation that returns `None` is recomputed in `f64`,
//! keeping `add`, `subtract`, and `multiply` total. Any float operand
//! promotes the whole computation to `f64`.

use arith_num::{division_by_zero, unknown_operation, ArithError, ArithResult, CheckedInt, Number};
use std::fmt;
use std::str::FromStr;

/// The four arithmetic operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    /// Operator symbol, as rendered in messages.
    pub fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Operation name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_symbol())
    }
}

impl FromStr for ArithOp {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Sub),
            "multiply" => Ok(Self::Mul),
            "divide" => Ok(Self::Div),
            _ => Err(unknown_operation(s)),
        }
    }
}

// Helper for the repetitive checked-then-widen pattern

/// Checked integer arithmetic with float widening.
///
/// Used for Add, Sub, Mul, where a checked operation returning `None`
/// means the result does not fit in `i64` and is recomputed in `f64`.
#[inline]
fn checked_or_widened<F>(result: Option<CheckedInt>, widened: F) -> Number
where
    F: FnOnce() -> f64,
{
    match result {
        Some(n) => Number::Int(n),
        None => Number::Float(widened()),
    }
}

// The Operation Surface

/// Add two numbers.
pub fn add(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            checked_or_widened(x.checked_add(y), || x.to_f64() + y.to_f64())
        }
        // At least one float operand: compute in f64
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

/// Subtract `b` from `a`.
pub fn subtract(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            checked_or_widened(x.checked_sub(y), || x.to_f64() - y.to_f64())
        }
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

/// Multiply two numbers.
pub fn multiply(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            checked_or_widened(x.checked_mul(y), || x.to_f64() * y.to_f64())
        }
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}

/// Divide `a` by `b`.
///
/// Errors with division by zero when `b` is zero, whichever variant holds
/// the zero. An integer division with zero remainder yields the exact
/// integer quotient; everything else yields the `f64` quotient.
pub fn divide(a: Number, b: Number) -> ArithResult {
    if b.is_zero() {
        tracing::debug!(dividend = %a, "division by zero");
        return Err(division_by_zero());
    }
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => match (x.checked_div(y), x.checked_rem(y)) {
            (Some(q), Some(r)) if r.is_zero() => Ok(Number::Int(q)),
            // Nonzero remainder, or the one quotient i64 cannot hold
            // (i64::MIN / -1): fractional result
            _ => Ok(Number::Float(x.to_f64() / y.to_f64())),
        },
        _ => Ok(Number::Float(a.as_f64() / b.as_f64())),
    }
}

// Direct Dispatch Function

/// Evaluate an operation using direct pattern matching.
///
/// The three total operations are wrapped in `Ok`; only `Div` can fail.
pub fn evaluate(a: Number, b: Number, op: ArithOp) -> ArithResult {
    tracing::trace!(op = op.name(), left = %a, right = %b, "evaluating operation");
    match op {
        ArithOp::Add => Ok(add(a, b)),
        ArithOp::Sub => Ok(subtract(a, b)),
        ArithOp::Mul => Ok(multiply(a, b)),
        ArithOp::Div => divide(a, b),
    }
}
