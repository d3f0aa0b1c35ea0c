//! # Scalar Module
//!
//! The coordinate systems in this crate are generic over the scalar used to
//! store their components. This module defines the [`Scalar`] capability
//! trait listing the arithmetic and transcendental operations they rely on.
//!
//! ## Floating-point scalars
//!
//! `f32` and `f64` forward every operation to the corresponding inherent
//! method of the primitive type.
//!
//! ## Integer scalars
//!
//! `i32` and `i64` are supported so that integer coordinate systems still
//! compile and evaluate the documented formulas. Transcendental operations
//! are computed in `f64` and converted back with an `as` cast, which truncates
//! toward zero and saturates at the integer bounds. Integers report an
//! epsilon of zero.
//!
//! ```rust
//! use genvector::scalar::Scalar;
//!
//! assert_eq!(Scalar::sqrt(25_i32), 5);
//! assert_eq!(Scalar::sqrt(2_i64), 1);
//! assert_eq!(<f64 as Scalar>::epsilon(), f64::EPSILON);
//! ```

use num_traits::Num;
use std::fmt::Debug;
use std::ops::Neg;

/// Numeric type usable as the component of a coordinate system
pub trait Scalar: Copy + Debug + PartialOrd + Num + Neg<Output = Self> {
    /// Machine epsilon (zero for integer types)
    fn epsilon() -> Self;

    /// The constant π in this scalar type
    fn pi() -> Self;

    /// Convert an `f64` constant into this scalar type
    fn from_f64(value: f64) -> Self;

    /// Absolute value
    fn abs(self) -> Self;

    /// Largest integer less than or equal to `self`
    fn floor(self) -> Self;

    /// Square root
    fn sqrt(self) -> Self;

    /// Natural logarithm
    fn ln(self) -> Self;

    /// Raise to a real power
    fn powf(self, exponent: f64) -> Self;

    /// Sine
    fn sin(self) -> Self;

    /// Cosine
    fn cos(self) -> Self;

    /// Hyperbolic sine
    fn sinh(self) -> Self;

    /// Four-quadrant arctangent of `self / other`
    fn atan2(self, other: Self) -> Self;

    /// Twice `self`, without requiring a literal of this type
    fn twice(self) -> Self {
        self + self
    }
}

macro_rules! impl_float_scalar {
    ($t:ident) => {
        impl Scalar for $t {
            #[inline]
            fn epsilon() -> Self {
                $t::EPSILON
            }

            #[inline]
            fn pi() -> Self {
                std::$t::consts::PI
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn floor(self) -> Self {
                $t::floor(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn ln(self) -> Self {
                $t::ln(self)
            }

            #[inline]
            fn powf(self, exponent: f64) -> Self {
                $t::powf(self, exponent as $t)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn sinh(self) -> Self {
                $t::sinh(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                $t::atan2(self, other)
            }
        }
    };
}

// Integer math goes through f64, then truncates back
macro_rules! impl_integer_scalar {
    ($t:ident) => {
        impl Scalar for $t {
            #[inline]
            fn epsilon() -> Self {
                0
            }

            #[inline]
            fn pi() -> Self {
                std::f64::consts::PI as $t
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn abs(self) -> Self {
                self.saturating_abs()
            }

            #[inline]
            fn floor(self) -> Self {
                self
            }

            #[inline]
            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $t
            }

            #[inline]
            fn ln(self) -> Self {
                (self as f64).ln() as $t
            }

            #[inline]
            fn powf(self, exponent: f64) -> Self {
                (self as f64).powf(exponent) as $t
            }

            #[inline]
            fn sin(self) -> Self {
                (self as f64).sin() as $t
            }

            #[inline]
            fn cos(self) -> Self {
                (self as f64).cos() as $t
            }

            #[inline]
            fn sinh(self) -> Self {
                (self as f64).sinh() as $t
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                (self as f64).atan2(other as f64) as $t
            }
        }
    };
}

impl_float_scalar!(f32);
impl_float_scalar!(f64);
impl_integer_scalar!(i32);
impl_integer_scalar!(i64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_float_forwarding() {
        assert_eq!(Scalar::sqrt(16.0_f64), 4.0);
        assert_eq!(Scalar::abs(-2.5_f32), 2.5);
        assert_relative_eq!(Scalar::atan2(1.0_f64, 1.0), std::f64::consts::FRAC_PI_4);
        assert_relative_eq!(Scalar::ln(std::f64::consts::E), 1.0);
        assert_eq!(<f32 as Scalar>::epsilon(), f32::EPSILON);
    }

    #[test]
    fn test_integer_truncation() {
        assert_eq!(Scalar::sqrt(26_i32), 5);
        assert_eq!(<i64 as Scalar>::pi(), 3);
        assert_eq!(Scalar::atan2(1_i32, 0), 1); // π/2 truncated
        assert_eq!(<i32 as Scalar>::epsilon(), 0);
        assert_eq!(Scalar::abs(i32::MIN), i32::MAX);
    }

    #[test]
    fn test_integer_powf_of_zero_saturates() {
        // 0^(-0.6) is +inf in f64, which saturates when cast back
        assert_eq!(Scalar::powf(0_i32, -0.6), i32::MAX);
        assert_eq!(Scalar::powf(0_i64, -0.6), i64::MAX);
    }

    #[test]
    fn test_twice() {
        assert_eq!(Scalar::twice(21_i32), 42);
        assert_eq!(Scalar::twice(0.25_f64), 0.5);
    }
}
