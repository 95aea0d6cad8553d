//! BLAS Level-1 style vector kernels.
//!
//! [`Level1`] is implemented by interchangeable backends that all compute the same results (up
//! to floating-point rounding, since they may sum in a different order). Operations work on
//! plain slices with unit stride, so they can be applied to the storage of a [`Vector`] or
//! [`Matrix`] via [`Vector::as_slice`] and [`Matrix::as_flat_slice`]:
//!
//! ```
//! use camel::{blas::{Backend, Level1}, vec3};
//!
//! let mut y = vec3(1.0, 1.0, 1.0);
//! let x = vec3(1.0, 2.0, 3.0);
//! Backend::Chunked.axpy(2.0, x.as_slice(), y.as_mut_slice());
//! assert_eq!(y, vec3(3.0, 5.0, 7.0));
//! ```
//!
//! Passing slices of different lengths to an operation taking two slices is a programming error
//! and panics.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix
//! [`Vector::as_slice`]: crate::Vector::as_slice
//! [`Matrix::as_flat_slice`]: crate::Matrix::as_flat_slice

mod chunked;
mod reference;

use std::{
    env::{self, VarError},
    fmt, process,
    str::FromStr,
    sync::OnceLock,
};

use anyhow::bail;
use camel_linalg::Float;

pub use chunked::Chunked;
pub use reference::Reference;

/// The BLAS Level-1 operations.
///
/// `T` is the element type, typically [`f32`] or [`f64`].
pub trait Level1<T> {
    /// Computes `y = alpha * x + y`.
    fn axpy(&self, alpha: T, x: &[T], y: &mut [T]);

    /// Returns the dot product of `x` and `y`.
    fn dot(&self, x: &[T], y: &[T]) -> T;

    /// Computes `x = alpha * x`.
    fn scal(&self, alpha: T, x: &mut [T]);

    /// Returns the sum of the absolute values of the elements of `x`.
    fn asum(&self, x: &[T]) -> T;

    /// Returns the Euclidean norm of `x`.
    fn nrm2(&self, x: &[T]) -> T;

    /// Returns the index of the first element of `x` with the largest absolute value.
    ///
    /// NaN elements are skipped. Returns [`None`] if `x` is empty or contains only NaNs.
    fn iamax(&self, x: &[T]) -> Option<usize>;

    /// Exchanges the contents of `x` and `y`.
    fn swap(&self, x: &mut [T], y: &mut [T]);

    /// Copies `x` into `y`.
    fn copy(&self, x: &[T], y: &mut [T]);

    /// Applies a plane rotation to every pair `(x[i], y[i])`:
    /// `x[i] = c * x[i] + s * y[i]` and `y[i] = c * y[i] - s * x[i]`.
    fn rot(&self, x: &mut [T], y: &mut [T], c: T, s: T);
}

/// Runtime selection of a [`Level1`] backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// See [`Reference`].
    #[default]
    Reference,
    /// See [`Chunked`].
    Chunked,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

impl Backend {
    /// Returns the backend configured via the `CAMEL_LEVEL1_BACKEND` environment variable.
    ///
    /// The variable is read on the first call only. If it is unset, [`Backend::Reference`] is
    /// used. If it is set to an unknown value, an error is printed and the process exits.
    pub fn from_env() -> Backend {
        *BACKEND.get_or_init(|| {
            let backend = match env::var("CAMEL_LEVEL1_BACKEND") {
                Ok(value) => match value.parse() {
                    Ok(backend) => backend,
                    Err(e) => {
                        eprintln!(
                            "invalid value set for `CAMEL_LEVEL1_BACKEND` variable: {e}; exiting"
                        );
                        process::exit(1);
                    }
                },
                Err(VarError::NotPresent) => Backend::Reference,
                Err(VarError::NotUnicode(s)) => {
                    eprintln!(
                        "invalid value set for `CAMEL_LEVEL1_BACKEND` variable: {}; exiting",
                        s.to_string_lossy()
                    );
                    process::exit(1);
                }
            };
            log::debug!("using Level-1 backend {:?}", backend);
            backend
        })
    }

    /// Returns every available backend.
    pub fn all() -> [Backend; 2] {
        [Backend::Reference, Backend::Chunked]
    }
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "reference" => Backend::Reference,
            "chunked" => Backend::Chunked,
            _ => bail!("unknown Level-1 backend '{s}' (expected 'reference' or 'chunked')"),
        })
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::Reference => "reference",
            Backend::Chunked => "chunked",
        })
    }
}

macro_rules! dispatch {
    ($self:ident.$method:ident($($arg:expr),*)) => {
        match $self {
            Backend::Reference => Reference.$method($($arg),*),
            Backend::Chunked => Chunked.$method($($arg),*),
        }
    };
}

impl<T: Float> Level1<T> for Backend {
    fn axpy(&self, alpha: T, x: &[T], y: &mut [T]) {
        dispatch!(self.axpy(alpha, x, y))
    }

    fn dot(&self, x: &[T], y: &[T]) -> T {
        dispatch!(self.dot(x, y))
    }

    fn scal(&self, alpha: T, x: &mut [T]) {
        dispatch!(self.scal(alpha, x))
    }

    fn asum(&self, x: &[T]) -> T {
        dispatch!(self.asum(x))
    }

    fn nrm2(&self, x: &[T]) -> T {
        dispatch!(self.nrm2(x))
    }

    fn iamax(&self, x: &[T]) -> Option<usize> {
        dispatch!(self.iamax(x))
    }

    fn swap(&self, x: &mut [T], y: &mut [T]) {
        dispatch!(self.swap(x, y))
    }

    fn copy(&self, x: &[T], y: &mut [T]) {
        dispatch!(self.copy(x, y))
    }

    fn rot(&self, x: &mut [T], y: &mut [T], c: T, s: T) {
        dispatch!(self.rot(x, y, c, s))
    }
}

#[track_caller]
fn check_len<T>(x: &[T], y: &[T]) {
    assert_eq!(
        x.len(),
        y.len(),
        "Level-1 operands have different lengths ({} vs {})",
        x.len(),
        y.len()
    );
}

#[cfg(test)]
mod tests {
    use camel_linalg::assert_approx_eq;

    use super::*;

    #[test]
    fn parse() {
        assert_eq!("reference".parse::<Backend>().unwrap(), Backend::Reference);
        assert_eq!("chunked".parse::<Backend>().unwrap(), Backend::Chunked);
        let err = "simd".parse::<Backend>().unwrap_err();
        assert!(err.to_string().contains("'simd'"));

        for backend in Backend::all() {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
        assert_eq!(Backend::default(), Backend::Reference);
    }

    #[test]
    fn from_env_is_cached() {
        let first = Backend::from_env();
        assert_eq!(Backend::from_env(), first);
    }

    #[test]
    fn backends_agree() {
        let mut rng = fastrand::Rng::with_seed(0xb1a5);
        for len in [0, 1, 3, 4, 5, 8, 13, 64, 101] {
            let x: Vec<f64> = (0..len).map(|_| rng.f64() * 2.0 - 1.0).collect();
            let y: Vec<f64> = (0..len).map(|_| rng.f64() * 2.0 - 1.0).collect();
            let (x, y) = (&x[..], &y[..]);

            let r = Reference;
            let c = Chunked;
            assert_approx_eq!(r.dot(x, y), c.dot(x, y), epsilon = 1e-12);
            assert_approx_eq!(r.asum(x), c.asum(x), epsilon = 1e-12);
            assert_approx_eq!(r.nrm2(x), c.nrm2(x), epsilon = 1e-12);
            assert_eq!(r.iamax(x), c.iamax(x));

            let (mut ry, mut cy) = (y.to_vec(), y.to_vec());
            r.axpy(0.5, x, &mut ry[..]);
            c.axpy(0.5, x, &mut cy[..]);
            assert_eq!(ry, cy);

            let (mut rx, mut cx) = (x.to_vec(), x.to_vec());
            r.rot(&mut rx[..], &mut ry[..], 0.6, 0.8);
            c.rot(&mut cx[..], &mut cy[..], 0.6, 0.8);
            assert_eq!(rx, cx);
            assert_eq!(ry, cy);
        }
    }

    #[test]
    #[should_panic(expected = "different lengths")]
    fn length_mismatch() {
        Backend::Chunked.dot(&[1.0f32, 2.0][..], &[1.0][..]);
    }
}
