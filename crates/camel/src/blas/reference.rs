use camel_linalg::Float;

use super::{check_len, Level1};

/// Straightforward Level-1 backend processing one element at a time.
///
/// This is the default backend, and the one other backends are tested against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

impl<T: Float> Level1<T> for Reference {
    fn axpy(&self, alpha: T, x: &[T], y: &mut [T]) {
        check_len(x, y);
        for (y, &x) in y.iter_mut().zip(x) {
            *y = alpha * x + *y;
        }
    }

    fn dot(&self, x: &[T], y: &[T]) -> T {
        check_len(x, y);
        x.iter().zip(y).fold(T::ZERO, |acc, (&x, &y)| acc + x * y)
    }

    fn scal(&self, alpha: T, x: &mut [T]) {
        for x in x {
            *x = alpha * *x;
        }
    }

    fn asum(&self, x: &[T]) -> T {
        x.iter().fold(T::ZERO, |acc, &x| acc + x.abs())
    }

    fn nrm2(&self, x: &[T]) -> T {
        self.dot(x, x).sqrt()
    }

    fn iamax(&self, x: &[T]) -> Option<usize> {
        let mut best = None;
        let mut best_abs = -T::ONE;
        for (i, &x) in x.iter().enumerate() {
            let abs = x.abs();
            if abs > best_abs {
                best = Some(i);
                best_abs = abs;
            }
        }
        best
    }

    fn swap(&self, x: &mut [T], y: &mut [T]) {
        check_len(x, y);
        x.swap_with_slice(y);
    }

    fn copy(&self, x: &[T], y: &mut [T]) {
        check_len(x, y);
        y.copy_from_slice(x);
    }

    fn rot(&self, x: &mut [T], y: &mut [T], c: T, s: T) {
        check_len(x, y);
        for (x, y) in x.iter_mut().zip(y) {
            let (xi, yi) = (*x, *y);
            *x = c * xi + s * yi;
            *y = c * yi - s * xi;
        }
    }
}
