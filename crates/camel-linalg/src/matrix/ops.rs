use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_flat_slice().abs_diff_eq(other.as_flat_slice(), epsilon)
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

impl<T, const R: usize, const C: usize> AddAssign for Matrix<T, R, C>
where
    T: Number,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> Sub for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

impl<T, const R: usize, const C: usize> SubAssign for Matrix<T, R, C>
where
    T: Number,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Row Vector * Matrix.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R>
where
    T: Number,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Vector::from_fn(|col| (0..R).fold(T::ZERO, |acc, row| acc + self[row] * rhs[(row, col)]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Mat2, Mat3, Mat4, Matrix};

    fn sequential() -> Mat4<i32> {
        Matrix::from_fn(|row, col| (row * 4 + col + 1) as i32)
    }

    #[test]
    fn index() {
        let mat = sequential();
        assert_eq!(mat[(0, 0)], 1);
        assert_eq!(mat[(0, 3)], 4);
        assert_eq!(mat[(3, 0)], 13);
        assert_eq!(mat[(2, 1)], 10);
    }

    #[test]
    fn element_wise() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[4, 3], [2, 1]]);
        assert_eq!(a + b, Matrix::from_rows([[5, 5], [5, 5]]));
        assert_eq!(a - b, Matrix::from_rows([[-3, -1], [1, 3]]));
        assert_eq!(-a, Matrix::from_rows([[-1, -2], [-3, -4]]));
        assert_eq!(a * 3, Matrix::from_rows([[3, 6], [9, 12]]));
        assert_eq!(a * 3 / 3, a);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 2;
        c /= 2;
        assert_eq!(c, b);
    }

    #[test]
    fn mat_vec_mul() {
        let m = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m * vec2(1, 1), vec2(3, 7));
        assert_eq!(vec2(1, 1) * m, vec2(4, 6));

        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m * vec3(1, 0, -1), vec2(-2, -2));
        assert_eq!(vec2(1, -1) * m, vec3(-3, -3, -3));

        let m = sequential();
        assert_eq!(m * vec4(1, 0, 0, 0), m.column(0));
        assert_eq!(vec4(0, 0, 1, 0) * m, m.row(2));
        assert_eq!(m * vec4(1, 1, 1, 1), vec4(10, 26, 42, 58));
    }

    #[rustfmt::skip]
    #[test]
    fn mat_mat_mul() {
        let mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        let mat2 = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
        ]);
        assert_eq!(mat * mat2, Matrix::from_rows([
            [22, 28],
            [49, 64],
        ]));

        let m = sequential();
        assert_eq!(m * m, Matrix::from_rows([
            [ 90, 100, 110, 120],
            [202, 228, 254, 280],
            [314, 356, 398, 440],
            [426, 484, 542, 600],
        ]));
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::ZERO, Mat4::ZERO);
    }

    #[test]
    fn product_transpose() {
        let mut rng = fastrand::Rng::with_seed(0x55);
        let a: Mat3<i64> = Matrix::from_fn(|_, _| rng.i64(-20..20));
        let b: Mat3<i64> = Matrix::from_fn(|_, _| rng.i64(-20..20));
        let c: Mat3<i64> = Matrix::from_fn(|_, _| rng.i64(-20..20));
        assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
    }
}
