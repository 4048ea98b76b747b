//! Integer newtype that prevents unchecked arithmetic.
//!
//! `CheckedInt` wraps `i64` and intentionally does NOT implement `Add`, `Sub`,
//! `Mul`, `Div`, or `Rem`. All arithmetic must go through checked methods that
//! return `Option<CheckedInt>`, making integer overflow impossible to miss.

use std::fmt;

/// A 64-bit signed integer that prevents unchecked arithmetic.
///
/// All arithmetic operations require explicit checked methods.
/// Using `+`, `-`, `*`, `/` directly on `CheckedInt` is a compile error.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct CheckedInt(i64);

impl CheckedInt {
    /// The zero value.
    pub const ZERO: Self = Self(0);

    /// The one value.
    pub const ONE: Self = Self(1);

    /// The minimum value (`i64::MIN`).
    pub const MIN: Self = Self(i64::MIN);

    /// The maximum value (`i64::MAX`).
    pub const MAX: Self = Self(i64::MAX);

    /// Create a new `CheckedInt` from a raw `i64`.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Extract the raw `i64` value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Check if this value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.0.checked_mul(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division. Returns `None` on division by zero or overflow
    /// (`i64::MIN / -1`).
    #[inline]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        match self.0.checked_div(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked remainder. Returns `None` on division by zero or overflow.
    #[inline]
    pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
        match self.0.checked_rem(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Widen to `f64`, rounding to the nearest representable value.
    ///
    /// Magnitudes below 2^53 convert losslessly. Values that fit in `i32`
    /// take the exact `From` conversion; larger values go through decimal
    /// formatting, which rounds correctly without a lossy cast.
    pub fn to_f64(self) -> f64 {
        if let Ok(small) = i32::try_from(self.0) {
            f64::from(small)
        } else {
            format!("{}", self.0).parse().unwrap_or(f64::NAN)
        }
    }
}

// Conversions

impl From<i64> for CheckedInt {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<CheckedInt> for i64 {
    #[inline]
    fn from(value: CheckedInt) -> Self {
        value.0
    }
}

// Formatting

impl fmt::Debug for CheckedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CheckedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
