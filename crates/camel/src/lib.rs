//! Fixed-size vectors and matrices for 2D and 3D geometry.
//!
//! This crate re-exports everything from [`camel_linalg`] (vectors, matrices, transform
//! generators and approximate comparisons), and adds the [`blas`] module, which runs BLAS
//! Level-1 style kernels over the storage of those types (or any other slice).
//!
//! # Coordinate Conventions
//!
//! Matrices are stored row-major and act on column vectors (`m * v`). Multiplying a row vector
//! from the left (`v * m`) is supported as well. Rotation generators come in right-handed
//! (`_rh`, counter-clockwise for positive angles) and left-handed (`_lh`, clockwise) variants.
//!
//! # Environment Variables
//!
//! * `CAMEL_LEVEL1_BACKEND`: Configures the backend returned by [`blas::Backend::from_env`].
//!   Allowed values are:
//!   * `reference` (the default): straightforward iterator code, one element at a time.
//!   * `chunked`: processes 4 elements per step with independent accumulators, which the
//!     compiler can turn into SIMD instructions.
//! * `RUST_LOG`: Overrides the log filter installed by [`init_logger!`].

use log::LevelFilter;

pub use camel_linalg::*;

pub mod blas;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .filter(Some("camel_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and CAMEL will log at *debug* level, unless overridden by the `RUST_LOG`
/// environment variable.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
