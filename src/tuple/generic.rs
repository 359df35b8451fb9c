//! Data and operations on generic fixed-dimension numeric tuples.
//!
//! This module provides [`Tuple`], an ordered, compile-time-dimensioned
//! container of `N` scalars of type `T` with value semantics: elementwise
//! arithmetic, dot products with widened accumulation, norms,
//! normalization, and contiguous buffer views for array-oriented interop.
//!
//! # Precondition failures
//!
//! Two operations carry preconditions and panic when they are violated:
//!
//! - Indexing with `[]` requires the index to be in `[0, N)`.
//! - [`Tuple::normalized`] requires a positive squared length.
//!
//! Both are programmer-error conditions. They are never reported as
//! recoverable `Result` values because no sensible fallback exists — a
//! silently returned default would mask the caller's bug. Fallible
//! *conversions* (building a tuple from a runtime slice or from components
//! of another scalar type) return typed errors instead.

use crate::tuple::traits::scalar::{ComponentConversionError, TupleScalar};
use log::error;
use num_traits::{NumCast, ToPrimitive, cast};
use serde::de::{Error as DeError, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any;
use std::array;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// Errors that can occur when constructing a tuple from a runtime slice.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum TupleFromSliceError {
    /// The slice length does not match the tuple dimension.
    #[error("expected a slice of {expected} components, got {actual}")]
    LengthMismatch {
        /// The tuple dimension.
        expected: usize,
        /// The length of the offending slice.
        actual: usize,
    },
}

/// An ordered, fixed-length sequence of `N` scalars of type `T`.
///
/// The dimension `N` is a compile-time property: tuples of different
/// dimensions are different types and cannot be mixed except through the
/// explicit conversions this crate defines (see
/// [`Tuple::truncate`](crate::tuple::dims) for the single permitted
/// cross-dimension case).
///
/// # Layout
///
/// `Tuple` is `#[repr(transparent)]` over its component array: exactly `N`
/// contiguous elements of `T` in index order, no padding. External
/// array-consuming APIs can rely on this through the buffer-view accessors
/// ([`as_slice`](Tuple::as_slice), [`components`](Tuple::components)).
///
/// # Examples
///
/// ```rust
/// use vecn::prelude::*;
///
/// let v = Tuple3::new(1.0, 2.0, 2.0);
/// let w = Tuple::from_array([2.0, 0.0, 1.0]);
///
/// assert_eq!((v + w).as_slice(), &[3.0, 2.0, 3.0]);
/// assert_eq!(v.dot(&w), 4.0);
/// assert_eq!(v.length(), 3.0);
/// assert_eq!(format!("{v}"), "(1,2,2)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuple<T, const N: usize>
where
    T: TupleScalar,
{
    /// The components of the tuple.
    components: [T; N],
}

// =============================================================================
// CONSTRUCTION AND ACCESS
// =============================================================================

impl<T, const N: usize> Tuple<T, N>
where
    T: TupleScalar,
{
    /// Creates a tuple from a contiguous array of `N` scalars.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecn::tuple::Tuple;
    ///
    /// let v = Tuple::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// Returns the dimensionality of the tuple.
    #[inline]
    #[must_use]
    pub const fn dim(&self) -> usize {
        N
    }

    /// Extracts the components as an owned array.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; N] {
        self.components
    }

    /// Returns a read-only view of the component array.
    ///
    /// This is the explicit buffer-view accessor for interop with
    /// array-consuming external APIs: the returned reference covers exactly
    /// `N` contiguous elements of `T` in index order. The borrow cannot
    /// outlive the tuple or span a mutation of it.
    #[inline]
    #[must_use]
    pub const fn components(&self) -> &[T; N] {
        &self.components
    }

    /// Returns a read-write view of the component array.
    #[inline]
    #[must_use]
    pub fn components_mut(&mut self) -> &mut [T; N] {
        &mut self.components
    }

    /// Returns the components as a read-only slice of length `N`.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Returns the components as a read-write slice of length `N`.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    /// Returns the component at `index`, or `None` if out of bounds.
    ///
    /// The indexing operator is the panicking counterpart for callers that
    /// guarantee the index is valid.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.components.get(index).copied()
    }
}

impl<T, const N: usize> Default for Tuple<T, N>
where
    T: TupleScalar,
{
    fn default() -> Self {
        Self {
            components: [T::default(); N],
        }
    }
}

// =============================================================================
// VECTOR ALGEBRA
// =============================================================================

impl<T, const N: usize> Tuple<T, N>
where
    T: TupleScalar,
{
    /// Computes the dot product of two tuples.
    ///
    /// The elementwise products are accumulated in `f64` — the widest
    /// available floating representation — regardless of `T`, and the sum
    /// is narrowed back to `T` only on return. Accumulating at widened
    /// precision loses markedly less accuracy for narrow component types
    /// than accumulating in `T` would.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecn::prelude::*;
    ///
    /// let v = Tuple3::new(1.0, 2.0, 3.0);
    /// let w = Tuple3::new(4.0, -5.0, 6.0);
    /// assert_eq!(v.dot(&w), 12.0);
    /// ```
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        let accum = self
            .components
            .iter()
            .zip(other.components.iter())
            .fold(0.0_f64, |acc, (&a, &b)| acc + a.to_accum() * b.to_accum());
        T::from_accum(accum)
    }

    /// Returns the squared Euclidean length.
    ///
    /// Equal to `self.dot(self)` — the exact same computed value, not
    /// merely the same mathematical quantity.
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the Euclidean length.
    ///
    /// The square root is computed in floating arithmetic even for integer
    /// component types; the result is then narrowed to `T` with the
    /// scalar's native lossy conversion.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecn::prelude::*;
    ///
    /// assert_eq!(Tuple2::new(3.0, 4.0).length(), 5.0);
    /// assert_eq!(Tuple2::new(1i32, 1).length(), 1); // sqrt(2) truncated
    /// ```
    #[must_use]
    pub fn length(&self) -> T {
        T::from_accum(self.length_squared().to_accum().sqrt())
    }

    /// Returns a unit-length copy of this tuple.
    ///
    /// Computes `self * (1 / sqrt(length_squared()))` with the scale factor
    /// evaluated in `f64` and narrowed to `T` before the elementwise
    /// multiply.
    ///
    /// # Panics
    ///
    /// Panics if `length_squared()` is not positive. A zero-length tuple
    /// has no normalized direction, so this is a caller bug rather than a
    /// recoverable condition; one diagnostic line is logged with the
    /// offending tuple before the panic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecn::prelude::*;
    ///
    /// let v = Tuple3::new(0.0, 2.0, 0.0).normalized();
    /// assert_eq!(v.as_slice(), &[0.0, 1.0, 0.0]);
    ///
    /// let w: Tuple3<f64> = Tuple3::new(0.0, 3.0, 4.0).normalized();
    /// assert!((w.length() - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        let len_sq = self.length_squared();
        let positive = len_sq > T::zero();
        if !positive {
            error!("cannot normalize {self}: squared length {len_sq} is not positive");
        }
        assert!(
            positive,
            "normalized() requires a tuple with positive squared length"
        );
        *self * T::from_accum(1.0 / len_sq.to_accum().sqrt())
    }
}

// =============================================================================
// INDEXED ACCESS
// =============================================================================

impl<T, const N: usize> Index<usize> for Tuple<T, N>
where
    T: TupleScalar,
{
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Tuple<T, N>
where
    T: TupleScalar,
{
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

// =============================================================================
// ELEMENTWISE OPERATORS
// =============================================================================

impl<T, const N: usize> Add for Tuple<T, N>
where
    T: TupleScalar,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            components: array::from_fn(|i| self.components[i] + rhs.components[i]),
        }
    }
}

impl<T, const N: usize> Sub for Tuple<T, N>
where
    T: TupleScalar,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            components: array::from_fn(|i| self.components[i] - rhs.components[i]),
        }
    }
}

impl<T, const N: usize> Neg for Tuple<T, N>
where
    T: TupleScalar + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            components: self.components.map(|c| -c),
        }
    }
}

impl<T, const N: usize> Mul<T> for Tuple<T, N>
where
    T: TupleScalar,
{
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self {
            components: self.components.map(|c| c * scalar),
        }
    }
}

impl<T, const N: usize> Div<T> for Tuple<T, N>
where
    T: TupleScalar,
{
    type Output = Self;

    /// Elementwise division by a scalar.
    ///
    /// Division by zero is not guarded: floating components propagate
    /// infinities and NaN, integer components panic, exactly as the scalar
    /// type's own division does.
    #[inline]
    fn div(self, scalar: T) -> Self {
        Self {
            components: self.components.map(|c| c / scalar),
        }
    }
}

// Left scalar multiplication (`s * v`). The orphan rules forbid a generic
// `impl Mul<Tuple<T, N>> for T`, so each supported scalar gets its own impl.
macro_rules! impl_left_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Tuple<$t, N>> for $t {
                type Output = Tuple<$t, N>;

                #[inline]
                fn mul(self, rhs: Tuple<$t, N>) -> Tuple<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_left_scalar_mul!(f32, f64, i32, u32, i64, u64);

// =============================================================================
// FORMATTING
// =============================================================================

impl<T, const N: usize> fmt::Display for Tuple<T, N>
where
    T: TupleScalar,
{
    /// Renders the tuple as `(c0,c1,...,cN-1)`.
    ///
    /// Components are separated by a single comma, with no surrounding
    /// whitespace and no trailing separator. This exact shape is relied on
    /// by diagnostic-output consumers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, ")")
    }
}

// =============================================================================
// TYPE CONVERSION IMPLEMENTATIONS
// =============================================================================

/// Fallible construction from components of a different scalar type.
///
/// Each component is converted with a checked numeric cast; the conversion
/// fails if any component cannot be represented in the target type. There
/// is deliberately no infallible `From<[T; N]>` — it would collide with the
/// blanket `TryFrom` impl — so `Tuple::from_array` is the primary
/// same-type constructor.
impl<T, U, const N: usize> TryFrom<[U; N]> for Tuple<T, N>
where
    T: TupleScalar,
    U: ToPrimitive + NumCast + fmt::Debug + Copy,
{
    type Error = ComponentConversionError;

    fn try_from(components: [U; N]) -> Result<Self, Self::Error> {
        let mut out = [T::zero(); N];
        for (i, c) in components.into_iter().enumerate() {
            out[i] = cast::cast(c).ok_or_else(|| ComponentConversionError::ConversionFailed {
                component_index: i,
                component_value: format!("{c:?}"),
                from_type: any::type_name::<U>(),
                to_type: any::type_name::<T>(),
            })?;
        }
        Ok(Self { components: out })
    }
}

/// Fallible construction from a runtime slice; the length must equal `N`.
impl<T, const N: usize> TryFrom<&[T]> for Tuple<T, N>
where
    T: TupleScalar,
{
    type Error = TupleFromSliceError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let components: [T; N] =
            slice
                .try_into()
                .map_err(|_| TupleFromSliceError::LengthMismatch {
                    expected: N,
                    actual: slice.len(),
                })?;
        Ok(Self { components })
    }
}

impl<T, const N: usize> From<Tuple<T, N>> for [T; N]
where
    T: TupleScalar,
{
    #[inline]
    fn from(tuple: Tuple<T, N>) -> [T; N] {
        tuple.to_array()
    }
}

impl<T, const N: usize> From<&Tuple<T, N>> for [T; N]
where
    T: TupleScalar,
{
    #[inline]
    fn from(tuple: &Tuple<T, N>) -> [T; N] {
        tuple.to_array()
    }
}

// =============================================================================
// SERDE IMPLEMENTATIONS
// =============================================================================

// Serialized as a fixed-length tuple of components. Manual impls because
// serde's derived array support does not cover const-generic lengths for
// deserialization.

impl<T, const N: usize> Serialize for Tuple<T, N>
where
    T: TupleScalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for component in &self.components {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Tuple<T, N>
where
    T: TupleScalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ComponentsVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for ComponentsVisitor<T, N>
        where
            T: TupleScalar + Deserialize<'de>,
        {
            type Value = Tuple<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_fmt(format_args!("a sequence of {N} numeric components"))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut components = [T::default(); N];
                for (i, slot) in components.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| DeError::invalid_length(i, &self))?;
                }
                Ok(Tuple::from_array(components))
            }
        }

        deserializer.deserialize_tuple(N, ComponentsVisitor(PhantomData))
    }
}
