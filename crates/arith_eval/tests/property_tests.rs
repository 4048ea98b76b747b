//! Property-based tests for the arithmetic operations.
//!
//! These tests use proptest to generate random operands and verify the
//! algebraic laws the operations promise: commutativity of add and
//! multiply, subtract antisymmetry, and the divide/multiply inverse
//! relationship (exact for integer-divisible operands, approximate
//! otherwise).

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use arith_eval::{add, divide, division_by_zero, multiply, subtract, Number};
use proptest::prelude::*;

// -- Operand Strategies --

/// Generate an integer operand small enough to stay in the i64 domain
/// through any single operation.
fn int_operand() -> impl Strategy<Value = Number> {
    (-1_000_000i64..=1_000_000).prop_map(Number::int)
}

/// Generate a finite float operand.
fn float_operand() -> impl Strategy<Value = Number> {
    (-1.0e9f64..1.0e9).prop_map(Number::float)
}

/// Generate either kind of operand.
fn operand() -> impl Strategy<Value = Number> {
    prop_oneof![int_operand(), float_operand()]
}

proptest! {
    #[test]
    fn add_commutes(a in operand(), b in operand()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn multiply_commutes(a in operand(), b in operand()) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn subtract_is_antisymmetric(a in operand(), b in operand()) {
        // subtract(a, b) == -subtract(b, a)
        let negated = multiply(subtract(b, a), Number::int(-1));
        prop_assert_eq!(subtract(a, b), negated);
    }

    #[test]
    fn divide_multiply_inverse_exact_for_divisible_ints(
        q in -10_000i64..=10_000,
        d in (-1_000i64..=1_000).prop_filter("nonzero divisor", |n| *n != 0),
    ) {
        let a = Number::int(q * d);
        let quotient = divide(a, Number::int(d)).unwrap();
        prop_assert_eq!(quotient, Number::int(q));
        prop_assert_eq!(multiply(quotient, Number::int(d)), a);
    }

    #[test]
    fn divide_multiply_inverse_approximate(
        a in operand(),
        b in operand().prop_filter("nonzero divisor", |n| !n.is_zero()),
    ) {
        let roundtrip = multiply(divide(a, b).unwrap(), b);
        let expected = a.as_f64();
        let got = roundtrip.as_f64();
        let tolerance = 1e-9_f64.max(expected.abs() * 1e-12);
        prop_assert!(
            (got - expected).abs() <= tolerance,
            "divide({}, {}) * {} = {}, expected about {}",
            a, b, b, got, expected
        );
    }

    #[test]
    fn divide_by_zero_always_fails(a in operand()) {
        for zero in [Number::int(0), Number::float(0.0), Number::float(-0.0)] {
            prop_assert_eq!(divide(a, zero), Err(division_by_zero()));
        }
    }
}
