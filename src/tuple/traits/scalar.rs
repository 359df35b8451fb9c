//! Scalar traits for tuple components.
//!
//! This module defines the [`TupleScalar`] trait that consolidates the
//! requirements a numeric type must satisfy to serve as a tuple component,
//! along with the accumulator-transfer operations used by the dot product
//! and norm computations.
//!
//! # Overview
//!
//! Tuples are generic over both their dimension and their component type:
//! the same algebra works for `f32`, `f64`, and the integer types. Two
//! concerns cut across all of them:
//!
//! - **Numeric bounds**: components must support elementwise arithmetic,
//!   comparison, zero/one construction, and checked casts between types.
//! - **Widened accumulation**: dot products accumulate in `f64` (the widest
//!   available floating representation) regardless of the component type,
//!   and narrow back only on return. This is an intentional accuracy
//!   decision, not an implementation detail — narrow floating types lose
//!   noticeably less precision this way.
//!
//! [`TupleScalar`] captures both: it is a trait alias over the `num-traits`
//! bounds plus the two transfer methods [`to_accum`](TupleScalar::to_accum)
//! and [`from_accum`](TupleScalar::from_accum).
//!
//! # Narrowing semantics
//!
//! `from_accum` uses the scalar type's native lossy conversion (`as`). For
//! floating types this is ordinary rounding; for integer types it truncates
//! toward zero and saturates at the type's bounds. Integer tuples therefore
//! get lossy `length()` results, matching the established behavior of the
//! algebra rather than guessing an integer norm.

use num_traits::{Num, NumCast};
use std::fmt::{Debug, Display};

/// Errors that can occur when converting tuple components between scalar types.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComponentConversionError {
    /// A component value could not be represented in the target scalar type.
    #[error(
        "failed to convert component at index {component_index} from {from_type} to {to_type}: {component_value}"
    )]
    ConversionFailed {
        /// Index of the component that failed to convert.
        component_index: usize,
        /// String representation of the problematic component value.
        component_value: String,
        /// Source type name.
        from_type: &'static str,
        /// Target type name.
        to_type: &'static str,
    },
}

/// Trait alias for the scalar component type of a tuple.
///
/// Consolidates the bounds every tuple operation relies on:
///
/// - `Num`: elementwise arithmetic and zero/one construction
/// - `NumCast`: checked casts for cross-type tuple conversions
/// - `Copy + Default + Debug + Display + PartialOrd`: value semantics,
///   zero-initialization, diagnostics, and the `(c0,c1,...)` formatter
///
/// plus the accumulator-transfer methods used by [`dot`](crate::tuple::Tuple::dot),
/// [`length`](crate::tuple::Tuple::length), and
/// [`normalized`](crate::tuple::Tuple::normalized).
///
/// Implemented for `f32`, `f64`, `i32`, `u32`, `i64`, and `u64`.
///
/// # Usage
///
/// ```rust
/// use vecn::tuple::traits::scalar::TupleScalar;
///
/// fn accumulate<T: TupleScalar>(components: &[T]) -> f64 {
///     components.iter().map(|c| c.to_accum()).sum()
/// }
///
/// assert_eq!(accumulate(&[1.0f32, 2.0, 3.0]), 6.0);
/// assert_eq!(accumulate(&[1u32, 2, 3]), 6.0);
/// ```
pub trait TupleScalar:
    Num + NumCast + Copy + Default + Debug + Display + PartialOrd + 'static
{
    /// Widen this scalar into the `f64` accumulator.
    ///
    /// Every supported scalar type is exactly representable in `f64` up to
    /// at least 53 bits of magnitude, so the widening itself is lossless
    /// for the value ranges graphics code works with.
    fn to_accum(self) -> f64;

    /// Narrow an accumulator value back to this scalar type using the
    /// type's native lossy conversion.
    ///
    /// Floating targets round; integer targets truncate toward zero and
    /// saturate at the type's bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vecn::tuple::traits::scalar::TupleScalar;
    ///
    /// assert_eq!(f32::from_accum(1.5), 1.5f32);
    /// assert_eq!(i32::from_accum(1.9), 1);
    /// assert_eq!(u32::from_accum(-3.0), 0); // saturates
    /// ```
    fn from_accum(accum: f64) -> Self;
}

// Unified macro for implementing TupleScalar on concrete component types.
// The `as` casts are the documented lossy narrowing semantics.
macro_rules! impl_tuple_scalar {
    (float: $($t:ty),*) => {
        $(
            impl TupleScalar for $t {
                #[inline(always)]
                fn to_accum(self) -> f64 {
                    <f64 as From<$t>>::from(self)
                }

                #[inline(always)]
                #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
                fn from_accum(accum: f64) -> Self {
                    accum as $t
                }
            }
        )*
    };
    (int: $($t:ty),*) => {
        $(
            impl TupleScalar for $t {
                #[inline(always)]
                #[allow(clippy::cast_precision_loss)]
                fn to_accum(self) -> f64 {
                    self as f64
                }

                #[inline(always)]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss
                )]
                fn from_accum(accum: f64) -> Self {
                    accum as $t
                }
            }
        )*
    };
}

impl_tuple_scalar!(float: f32, f64);
impl_tuple_scalar!(int: i32, u32, i64, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn accum_roundtrip_float() {
        assert_relative_eq!(f64::from_accum(2.5f64.to_accum()), 2.5);
        assert_relative_eq!(f32::from_accum(1.25f32.to_accum()), 1.25f32);

        // f32 narrowing rounds rather than truncates
        let widened = 0.1f64;
        assert_relative_eq!(f32::from_accum(widened), 0.1f32);
    }

    #[test]
    fn accum_widening_integers() {
        assert_relative_eq!(7i32.to_accum(), 7.0);
        assert_relative_eq!(7u32.to_accum(), 7.0);
        assert_relative_eq!((-3i64).to_accum(), -3.0);
    }

    #[test]
    fn accum_narrowing_truncates_integers() {
        assert_eq!(i32::from_accum(2.999), 2);
        assert_eq!(i32::from_accum(-2.999), -2);
        assert_eq!(u32::from_accum(5.5), 5);
    }

    #[test]
    fn accum_narrowing_saturates_integers() {
        assert_eq!(u32::from_accum(-1.0), 0);
        assert_eq!(i32::from_accum(1e12), i32::MAX);
        assert_eq!(u64::from_accum(f64::INFINITY), u64::MAX);
    }

    #[test]
    fn conversion_error_display() {
        let err = ComponentConversionError::ConversionFailed {
            component_index: 1,
            component_value: "NaN".to_string(),
            from_type: "f64",
            to_type: "i32",
        };
        let message = err.to_string();
        assert!(message.contains("index 1"));
        assert!(message.contains("f64"));
        assert!(message.contains("i32"));
        assert!(message.contains("NaN"));
    }
}
