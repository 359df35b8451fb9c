//! # vecn
//!
//! Generic fixed-dimension numeric tuples for graphics-oriented
//! computation: a compile-time-dimensioned vector value type with
//! elementwise algebra, dot/cross products, norms, normalization, and
//! contiguous buffer views for handing vertex data to array-oriented
//! rendering APIs.
//!
//! # Features
//!
//! - A single generic core, [`Tuple<T, N>`](tuple::Tuple), over any
//!   supported scalar type (`f32`, `f64`, `i32`, `u32`, `i64`, `u64`) and
//!   any compile-time dimension
//! - 2-, 3-, and 4-component specializations with positional constructors,
//!   named accessors, the 3D cross product, and homogeneous → Cartesian
//!   demotion
//! - Dot products accumulated at `f64` precision regardless of the
//!   component type, narrowing only on return
//! - `#[repr(transparent)]` layout with explicit slice/array views — no
//!   implicit pointer conversions, no padding, no reordering
//! - Deterministic `(c0,c1,...,cN-1)` diagnostic formatting
//! - Serialization/deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use vecn::prelude::*;
//!
//! // Positional constructors for the fixed dimensions
//! let v: Tuple3<f64> = Tuple3::new(1.0, 2.0, 2.0);
//! let w: Tuple3<f64> = Tuple3::new(3.0, 0.0, -1.0);
//!
//! // Elementwise algebra with value semantics
//! let sum = v + w * 2.0;
//! assert_eq!(sum.as_slice(), &[7.0, 2.0, 0.0]);
//!
//! // Dot product, norms, normalization
//! assert_eq!(v.dot(&w), 1.0);
//! assert_eq!(v.length(), 3.0);
//! assert!((v.normalized().length() - 1.0).abs() < 1e-12);
//!
//! // Cross product is orthogonal to both operands
//! let n = v.cross(&w);
//! assert!(n.dot(&v).abs() < 1e-9);
//! assert!(n.dot(&w).abs() < 1e-9);
//! ```
//!
//! # Buffer views for rendering interop
//!
//! Tuples expose their storage as plain slices — exactly `N` contiguous
//! scalars in index order — so batches of vertices can be handed to
//! array-consuming APIs without copying or implicit pointer casts:
//!
//! ```rust
//! use vecn::prelude::*;
//!
//! let vertex = Tuple2f::new(0.5, -0.5);
//! assert_eq!(vertex.as_slice(), &[0.5, -0.5]);
//!
//! // A parametric polyline the way a viewer would build one
//! let polyline: Vec<Tuple2f> = (0..=8u16)
//!     .map(|i| {
//!         let t = f32::from(i) / 8.0;
//!         Tuple2::new(t, t * t)
//!     })
//!     .collect();
//! assert_eq!(polyline.len(), 9);
//! assert_eq!(polyline[8].as_slice(), &[1.0, 1.0]);
//! ```
//!
//! # Precondition violations
//!
//! Indexing past the dimension and normalizing a zero-length tuple are
//! programmer errors: both panic rather than returning a recoverable value,
//! since no sensible default exists. Every other operation is a total,
//! deterministic function of its inputs. Fallible *conversions* (from
//! runtime slices or across scalar types) return typed errors instead — see
//! [`tuple::TupleFromSliceError`] and
//! [`tuple::traits::scalar::ComponentConversionError`].

#![forbid(unsafe_code)]

/// Tuple types and operations: the generic core, the fixed-dimension
/// specializations, and the scalar trait layer.
pub mod tuple {
    /// Fixed-dimension specializations and concrete aliases.
    pub mod dims;
    /// The generic `Tuple<T, N>` core.
    pub mod generic;
    /// Traits for tuple component scalars.
    pub mod traits {
        pub mod scalar;
        pub use scalar::*;
    }
    pub use dims::*;
    pub use generic::*;
    pub use traits::*;
}

/// A prelude module that re-exports commonly used types and traits.
pub mod prelude {
    pub use crate::tuple::{
        Tuple, Tuple2, Tuple2d, Tuple2f, Tuple2i, Tuple2u, Tuple3, Tuple3d, Tuple3f, Tuple3i,
        Tuple3u, Tuple4, Tuple4d, Tuple4f, Tuple4i, Tuple4u, TupleFromSliceError,
        traits::scalar::{ComponentConversionError, TupleScalar},
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_exports_cover_common_surface() {
        let v: Tuple3d = Tuple3::new(1.0, 2.0, 3.0);
        let w: Tuple2f = Tuple2::new(3.0, 4.0);
        let h: Tuple4d = Tuple4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(v.dim(), 3);
        assert_eq!(w.length(), 5.0);
        assert_eq!(Tuple3::from(h), Tuple3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn scalar_trait_usable_through_prelude() {
        fn total<T: TupleScalar, const N: usize>(v: &Tuple<T, N>) -> f64 {
            v.as_slice().iter().map(|c| c.to_accum()).sum()
        }

        assert_eq!(total(&Tuple3::new(1u32, 2, 3)), 6.0);
        assert_eq!(total(&Tuple2::new(0.5f32, 0.25)), 0.75);
    }
}
