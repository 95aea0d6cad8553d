//! Fixed-size linear algebra for 2D and 3D geometry.
//!
//! This crate provides [`Vector`] and [`Matrix`] types whose dimensions are fixed at compile time
//! (2, 3 or 4 elements per side in practice), along with generators for the matrices of common
//! affine transforms (scale, shear, rotation, translation) and their inverses.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics for the
//!   dimensions lets the compiler reject mismatched products and keeps every value on the stack.
//! - Support only a single, row-major, unpadded data layout for matrices.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals"). Geometric operations (lengths, angles, rotations) require the [`Float`]
//!   trait, implemented for [`f32`] and [`f64`].
//! - Degenerate input (zero-length vectors, singular matrices) does not panic: the default
//!   operations propagate NaN and infinity like IEEE 754 arithmetic does, and `try_*` variants
//!   report a [`LinalgError`] instead.
//!
//! # Approximate Comparisons
//!
//! Floating-point results should be compared with the [`approx::ApproxEq`] trait or the
//! [`assert_approx_eq!`] macro rather than with `==`.
//!
//! ```
//! # use camel_linalg::*;
//! let v = Mat3d::rotation_z_rh(std::f64::consts::PI) * vec3(1.0, 2.0, 3.0);
//! assert_approx_eq!(v, vec3(-1.0, -2.0, 3.0));
//! ```

pub mod approx;
mod error;
mod matrix;
mod traits;
mod vector;

pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
