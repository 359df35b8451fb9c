//! Fixed-dimension specializations for 2-, 3-, and 4-component tuples.
//!
//! The generic [`Tuple`] carries all of the shared algebra; this module
//! layers the dimension-specific surface on top as inherent impls over the
//! same storage (composition, not an is-a hierarchy): positional
//! constructors, named component accessors, the 3D cross product, and the
//! single permitted cross-dimension conversion (4 → 3, dropping the last
//! component to demote homogeneous coordinates to Cartesian).
//!
//! Named accessors replace free index constants: `v.x()` instead of
//! `v[X]`, and on 3/4-component tuples the color aliases `r()`/`g()`/`b()`
//! (/`a()`) for tuples used as RGB(A) values.

use crate::tuple::generic::Tuple;
use crate::tuple::traits::scalar::TupleScalar;

/// A 2-component tuple.
pub type Tuple2<T> = Tuple<T, 2>;
/// A 3-component tuple.
pub type Tuple3<T> = Tuple<T, 3>;
/// A 4-component tuple.
pub type Tuple4<T> = Tuple<T, 4>;

/// 2-component `f32` tuple.
pub type Tuple2f = Tuple2<f32>;
/// 2-component `f64` tuple.
pub type Tuple2d = Tuple2<f64>;
/// 2-component `i32` tuple.
pub type Tuple2i = Tuple2<i32>;
/// 2-component `u32` tuple.
pub type Tuple2u = Tuple2<u32>;

/// 3-component `f32` tuple.
pub type Tuple3f = Tuple3<f32>;
/// 3-component `f64` tuple.
pub type Tuple3d = Tuple3<f64>;
/// 3-component `i32` tuple.
pub type Tuple3i = Tuple3<i32>;
/// 3-component `u32` tuple.
pub type Tuple3u = Tuple3<u32>;

/// 4-component `f32` tuple.
pub type Tuple4f = Tuple4<f32>;
/// 4-component `f64` tuple.
pub type Tuple4d = Tuple4<f64>;
/// 4-component `i32` tuple.
pub type Tuple4i = Tuple4<i32>;
/// 4-component `u32` tuple.
pub type Tuple4u = Tuple4<u32>;

impl<T> Tuple<T, 2>
where
    T: TupleScalar,
{
    /// Creates a 2-component tuple from positional scalars.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecn::prelude::*;
    ///
    /// let v = Tuple2::new(3.0, 4.0);
    /// assert_eq!(v.length(), 5.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(c0: T, c1: T) -> Self {
        Self::from_array([c0, c1])
    }

    /// The first component.
    #[inline]
    #[must_use]
    pub fn x(&self) -> T {
        self[0]
    }

    /// The second component.
    #[inline]
    #[must_use]
    pub fn y(&self) -> T {
        self[1]
    }
}

impl<T> Tuple<T, 3>
where
    T: TupleScalar,
{
    /// Creates a 3-component tuple from positional scalars.
    #[inline]
    #[must_use]
    pub const fn new(c0: T, c1: T, c2: T) -> Self {
        Self::from_array([c0, c1, c2])
    }

    /// The first component.
    #[inline]
    #[must_use]
    pub fn x(&self) -> T {
        self[0]
    }

    /// The second component.
    #[inline]
    #[must_use]
    pub fn y(&self) -> T {
        self[1]
    }

    /// The third component.
    #[inline]
    #[must_use]
    pub fn z(&self) -> T {
        self[2]
    }

    /// The red channel, for tuples used as RGB colors.
    #[inline]
    #[must_use]
    pub fn r(&self) -> T {
        self[0]
    }

    /// The green channel.
    #[inline]
    #[must_use]
    pub fn g(&self) -> T {
        self[1]
    }

    /// The blue channel.
    #[inline]
    #[must_use]
    pub fn b(&self) -> T {
        self[2]
    }

    /// Computes the cross product of two 3-component tuples.
    ///
    /// The result is orthogonal to both operands and anticommutative:
    /// `a.cross(&b) == -(b.cross(&a))`. Parallel (or zero) inputs yield
    /// the zero tuple — a valid value, not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecn::prelude::*;
    ///
    /// let x = Tuple3::new(1.0, 0.0, 0.0);
    /// let y = Tuple3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Tuple3::new(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        )
    }
}

impl<T> Tuple<T, 4>
where
    T: TupleScalar,
{
    /// Creates a 4-component tuple from positional scalars.
    #[inline]
    #[must_use]
    pub const fn new(c0: T, c1: T, c2: T, c3: T) -> Self {
        Self::from_array([c0, c1, c2, c3])
    }

    /// The first component.
    #[inline]
    #[must_use]
    pub fn x(&self) -> T {
        self[0]
    }

    /// The second component.
    #[inline]
    #[must_use]
    pub fn y(&self) -> T {
        self[1]
    }

    /// The third component.
    #[inline]
    #[must_use]
    pub fn z(&self) -> T {
        self[2]
    }

    /// The fourth component.
    #[inline]
    #[must_use]
    pub fn w(&self) -> T {
        self[3]
    }

    /// The red channel, for tuples used as RGBA colors.
    #[inline]
    #[must_use]
    pub fn r(&self) -> T {
        self[0]
    }

    /// The green channel.
    #[inline]
    #[must_use]
    pub fn g(&self) -> T {
        self[1]
    }

    /// The blue channel.
    #[inline]
    #[must_use]
    pub fn b(&self) -> T {
        self[2]
    }

    /// The alpha channel.
    #[inline]
    #[must_use]
    pub fn a(&self) -> T {
        self[3]
    }

    /// Drops the fourth component, demoting homogeneous coordinates to
    /// Cartesian.
    ///
    /// This is the only cross-dimension conversion: 4 → 3, one-directional.
    /// The first three components are copied; the fourth is silently
    /// discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecn::prelude::*;
    ///
    /// let h = Tuple4::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(h.truncate(), Tuple3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn truncate(self) -> Tuple<T, 3> {
        Tuple::<T, 3>::new(self[0], self[1], self[2])
    }
}

/// Homogeneous → Cartesian demotion as an assignment-style conversion.
impl<T> From<Tuple<T, 4>> for Tuple<T, 3>
where
    T: TupleScalar,
{
    #[inline]
    fn from(tuple: Tuple<T, 4>) -> Self {
        tuple.truncate()
    }
}
