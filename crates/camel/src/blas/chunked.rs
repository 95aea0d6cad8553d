use camel_linalg::Float;

use super::{check_len, Level1};

const LANES: usize = 4;

/// Level-1 backend processing 4 elements per step.
///
/// Reductions (`dot`, `asum`, `nrm2`) keep one accumulator per lane and only combine them at the
/// end, which removes the loop-carried dependency on a single accumulator and lets the compiler
/// vectorize the loop. Because of the different summation order, results may differ from
/// [`Reference`][super::Reference] in the last few bits. Element-wise operations produce
/// identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chunked;

/// Splits `len` into the length of the part covered by whole chunks, and the rest.
fn split_point(len: usize) -> usize {
    len - len % LANES
}

fn reduce<T: Float>(x: &[T], y: &[T], f: impl Fn(T, T) -> T) -> T {
    let split = split_point(x.len());
    let (x_head, x_tail) = x.split_at(split);
    let (y_head, y_tail) = y.split_at(split);

    let mut acc = [T::ZERO; LANES];
    for (x, y) in x_head.chunks_exact(LANES).zip(y_head.chunks_exact(LANES)) {
        for lane in 0..LANES {
            acc[lane] = acc[lane] + f(x[lane], y[lane]);
        }
    }

    let sum = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    x_tail
        .iter()
        .zip(y_tail)
        .fold(sum, |acc, (&x, &y)| acc + f(x, y))
}

impl<T: Float> Level1<T> for Chunked {
    fn axpy(&self, alpha: T, x: &[T], y: &mut [T]) {
        check_len(x, y);
        let split = split_point(x.len());
        let (x_head, x_tail) = x.split_at(split);
        let (y_head, y_tail) = y.split_at_mut(split);

        for (x, y) in x_head.chunks_exact(LANES).zip(y_head.chunks_exact_mut(LANES)) {
            for lane in 0..LANES {
                y[lane] = alpha * x[lane] + y[lane];
            }
        }
        for (y, &x) in y_tail.iter_mut().zip(x_tail) {
            *y = alpha * x + *y;
        }
    }

    fn dot(&self, x: &[T], y: &[T]) -> T {
        check_len(x, y);
        reduce(x, y, |x, y| x * y)
    }

    fn scal(&self, alpha: T, x: &mut [T]) {
        let split = split_point(x.len());
        let (head, tail) = x.split_at_mut(split);
        for chunk in head.chunks_exact_mut(LANES) {
            for lane in 0..LANES {
                chunk[lane] = alpha * chunk[lane];
            }
        }
        for x in tail {
            *x = alpha * *x;
        }
    }

    fn asum(&self, x: &[T]) -> T {
        reduce(x, x, |x, _| x.abs())
    }

    fn nrm2(&self, x: &[T]) -> T {
        reduce(x, x, |x, _| x * x).sqrt()
    }

    fn iamax(&self, x: &[T]) -> Option<usize> {
        let split = split_point(x.len());
        let (head, tail) = x.split_at(split);

        // Per-lane maximum; strict comparisons keep the first index within each lane.
        let mut best_abs = [-T::ONE; LANES];
        let mut best_idx = [usize::MAX; LANES];
        for (chunk_idx, chunk) in head.chunks_exact(LANES).enumerate() {
            for lane in 0..LANES {
                let abs = chunk[lane].abs();
                if abs > best_abs[lane] {
                    best_abs[lane] = abs;
                    best_idx[lane] = chunk_idx * LANES + lane;
                }
            }
        }

        let mut best = None;
        let mut max = -T::ONE;
        for lane in 0..LANES {
            if best_idx[lane] == usize::MAX {
                continue;
            }
            let earlier_tie =
                best_abs[lane] == max && best.is_some_and(|b: usize| best_idx[lane] < b);
            if best_abs[lane] > max || earlier_tie {
                max = best_abs[lane];
                best = Some(best_idx[lane]);
            }
        }

        for (i, &x) in tail.iter().enumerate() {
            let abs = x.abs();
            if abs > max {
                max = abs;
                best = Some(split + i);
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
        let split = split_point(x.len());
        let (x_head, x_tail) = x.split_at_mut(split);
        let (y_head, y_tail) = y.split_at_mut(split);

        for (x, y) in x_head
            .chunks_exact_mut(LANES)
            .zip(y_head.chunks_exact_mut(LANES))
        {
            for lane in 0..LANES {
                let (xi, yi) = (x[lane], y[lane]);
                x[lane] = c * xi + s * yi;
                y[lane] = c * yi - s * xi;
            }
        }
        for (x, y) in x_tail.iter_mut().zip(y_tail) {
            let (xi, yi) = (*x, *y);
            *x = c * xi + s * yi;
            *y = c * yi - s * xi;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_handling() {
        let c = Chunked;
        let x: Vec<f32> = (1..=7).map(|i| i as f32).collect();
        assert_eq!(c.asum(&x[..]), 28.0);
        assert_eq!(c.dot(&x[..], &x[..]), 140.0);

        let mut y = vec![1.0f32; 7];
        c.axpy(1.0, &x[..], &mut y[..]);
        assert_eq!(y, [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        c.scal(0.5, &mut y[..]);
        assert_eq!(y, [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
    }

    #[test]
    fn iamax_ties_across_lanes() {
        let c = Chunked;
        // Largest value occurs in lane 3 first, then in lane 1 of a later chunk.
        let x = [0.0, 0.0, 0.0, -9.0, 0.0, 9.0, 0.0, 0.0];
        assert_eq!(c.iamax(&x[..]), Some(3));
        // Remainder elements equal to the maximum don't win.
        let x = [0.0, 5.0, 0.0, 0.0, 5.0];
        assert_eq!(c.iamax(&x[..]), Some(1));
        assert_eq!(c.iamax(&[0.0, 0.0, 7.0][..]), Some(2));
        assert_eq!(c.iamax(&[f64::NAN; 6][..]), None);
        assert_eq!(c.iamax(&[] as &[f64]), None);
    }
}
