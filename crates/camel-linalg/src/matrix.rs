use std::{array, fmt, mem};

use crate::{
    approx,
    error::{LinalgError, Result},
    Float, Number, One, Vector, Zero,
};

mod ops;
mod transform;

macro_rules! square_aliases {
    ($($alias:ident, $f32_alias:ident, $f64_alias:ident = $n:literal;)+) => {
        $(
            #[doc = concat!("A square matrix with ", $n, " rows and columns.")]
            pub type $alias<T> = Matrix<T, $n, $n>;
            #[doc = concat!("[`", stringify!($alias), "`] of [`f32`].")]
            pub type $f32_alias = $alias<f32>;
            #[doc = concat!("[`", stringify!($alias), "`] of [`f64`].")]
            pub type $f64_alias = $alias<f64>;
        )+
    };
}

square_aliases! {
    Mat2, Mat2f, Mat2d = 2;
    Mat3, Mat3f, Mat3d = 3;
    Mat4, Mat4f, Mat4d = 4;
}

macro_rules! rect_aliases {
    ($($alias:ident = $r:literal x $c:literal;)+) => {
        $(
            #[doc = concat!("A matrix with ", $r, " rows and ", $c, " columns.")]
            pub type $alias<T> = Matrix<T, $r, $c>;
        )+
    };
}

rect_aliases! {
    Mat2x3 = 2 x 3;
    Mat2x4 = 2 x 4;
    Mat3x2 = 3 x 2;
    Mat3x4 = 3 x 4;
    Mat4x2 = 4 x 2;
    Mat4x3 = 4 x 3;
}

/// A matrix of `R` rows and `C` columns, stored row by row.
///
/// Element `(r, c)` lives at index `r * C + c` of [`Matrix::as_flat_slice`], so the flat storage
/// of a [`Mat4f`] can be handed to anything expecting 16 row-major floats.
///
/// # Construction
///
/// - [`Matrix::from_rows`] / [`Matrix::from_columns`] take an array of rows or columns, each
///   being an array or a [`Vector`].
/// - [`Matrix::from_fn`] computes every element from its `(row, col)` position.
/// - [`Matrix::from_diagonal`] builds a square matrix that is zero off the diagonal.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`].
/// - The transform generators: `Mat4::translation`, `Mat3::rotation_x_rh`, `Mat2::shear_x` and
///   friends.
///
/// # Indexing
///
/// `m[(row, col)]` reads or writes a single element, 0-based, row first. Out-of-range indices
/// panic; [`Matrix::get`] and [`Matrix::get_mut`] return [`None`] instead.
///
/// ```
/// # use camel_linalg::*;
/// let mut m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
/// m[(1, 2)] = 60;
/// assert_eq!(m.row(1), vec3(4, 5, 60));
/// assert_eq!(m.get(2, 0), None);
/// ```
///
/// # Arithmetic
///
/// - `a + b`, `a - b`, `-a`: element-wise.
/// - `a * t`, `a / t`: scale every element by the scalar `t`.
/// - `a * b`: matrix product; the column count of `a` must equal the row count of `b`, which is
///   checked at compile time.
/// - `a * v`: matrix times column vector.
/// - `v * a`: row vector times matrix.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

// SAFETY: `Matrix` is a transparent wrapper around `[[T; C]; R]`, which has no padding and is
// valid for any bit pattern whenever `T` is.
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from its rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// // Rows can be arrays or vectors.
    /// let m = Mat3x2::from_rows([vec2(1.0, 0.0), vec2(0.0, 1.0), vec2(5.0, 5.0)]);
    /// assert_eq!(m.as_flat_slice(), &[1.0, 0.0, 0.0, 1.0, 5.0, 5.0]);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Builds a matrix from its columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// // The basis vectors of a 90° turn, as columns.
    /// let m = Mat2::from_columns([Vec2f::Y, -Vec2f::X]);
    /// assert_eq!(m, Mat2::from_rows([[0.0, -1.0], [1.0, 0.0]]));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        let columns: [Vector<T, R>; C] = columns.map(Into::into);
        Self::from_fn(|row, col| columns[col][row])
    }

    /// Builds a matrix by calling `f(row, col)` for every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let hilbert = Mat3d::from_fn(|r, c| 1.0 / (r + c + 1) as f64);
    /// assert_eq!(hilbert.row(2), vec3(1.0 / 3.0, 0.25, 0.2));
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| f(row, col))))
    }

    /// Transforms every element with `f`, keeping its position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat2::from_rows([[1, -2], [-3, 4]]).map(|e: i32| e.abs() as f32);
    /// assert_eq!(m, Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns the transpose: row `i` of the result is column `i` of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.transpose(), Mat3x2::from_rows([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns row `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row].into()
    }

    /// Returns column `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        assert!(col < C, "column index {col} out of bounds for {R}x{C} matrix");
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns the element at `(row, col)`, or [`None`] if the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row)?.get(col)
    }

    /// Mutable counterpart of [`Matrix::get`].
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row)?.get_mut(col)
    }

    /// Returns all `R * C` elements, row by row.
    #[inline]
    pub fn as_flat_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns all `R * C` elements, row by row, mutably.
    #[inline]
    pub fn as_flat_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Unwraps the matrix into its array of rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }

    /// Copies `self` into the top-left corner of a zero matrix of a different size, dropping
    /// whatever does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// // Embed a 2-D linear map in homogeneous coordinates.
    /// let m = Mat2::from_rows([[2, 0], [0, 3]]).resize::<3, 3>();
    /// assert_eq!(m.row(1), vec3(0, 3, 0));
    /// assert_eq!(m.row(2), Vector::ZERO);
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| match self.0.get(row).and_then(|r| r.get(col)) {
            Some(&elem) => elem,
            None => T::ZERO,
        })
    }

    /// Renders `self` (the *expected* value) and `got` side by side, one element per line in
    /// row-major order, marking elements that differ by more than
    /// [`DEFAULT_EPSILON`][crate::approx::DefaultEpsilon::DEFAULT_EPSILON].
    ///
    /// Intended for assertion messages.
    pub fn compare(&self, got: &Self) -> String
    where
        T: Float,
    {
        let labels = (0..R).flat_map(|row| (0..C).map(move |col| format!("[{row}][{col}]")));
        approx::compare_components(
            labels,
            self.as_flat_slice(),
            got.as_flat_slice(),
            T::DEFAULT_EPSILON,
        )
    }
}

/// Prints one bracketed list per row; `{:#?}` puts each row on its own line.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T>(&'a [T]);

        impl<T: fmt::Debug> fmt::Debug for Row<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut sep = "";
                f.write_str("[")?;
                for elem in self.0 {
                    write!(f, "{sep}{elem:?}")?;
                    sep = ", ";
                }
                f.write_str("]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(|row| Row(row.as_slice())))
            .finish()
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The matrix whose elements are all 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// 1 on the main diagonal and 0 elsewhere.
    ///
    /// For non-square shapes the diagonal stops at the shorter side.
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; C]; R];
        let mut d = 0;
        while d < R && d < C {
            rows[d][d] = T::ONE;
            d += 1;
        }
        Self(rows)
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the main diagonal as a [`Vector`].
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Builds a square matrix with `diag` on the main diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat3f::from_diagonal([2.0, 3.0, 4.0]);
    /// assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(2.0, 3.0, 4.0));
    /// assert_eq!(m.into_diagonal(), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        let mut m = Self::ZERO;
        for i in 0..N {
            m.0[i][i] = diag[i];
        }
        m
    }

    /// Returns the sum of the main diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
    /// assert_eq!(Mat2::from_rows([[1, 9], [9, -5]]).trace(), -4);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        self.0
            .iter()
            .enumerate()
            .fold(T::ZERO, |sum, (i, row)| sum + row[i])
    }

    /// Transposes this square matrix without creating a new one.
    pub fn transpose_in_place(&mut self) {
        for row in 0..N {
            for col in row + 1..N {
                let (upper, lower) = self.0.split_at_mut(col);
                mem::swap(&mut upper[row][col], &mut lower[0][row]);
            }
        }
    }
}

impl<T: Number> Matrix<T, 1, 1> {
    /// The determinant of a 1x1 matrix is its only element. Ends the cofactor recursion of the
    /// larger sizes.
    #[inline]
    pub fn determinant(&self) -> T {
        self.0[0][0]
    }
}

// Determinant and inverse via cofactor expansion. The determinant of an NxN matrix is expanded
// along its first row into (N-1)x(N-1) minors, bottoming out at the 1x1 case above. For N=2 this
// reduces to `a*d - b*c`.
macro_rules! square_impls {
    ($($n:literal => $minor:literal),+) => {
        $(
            impl<T: Number> Matrix<T, $n, $n> {
                /// Returns the matrix with row `row` and column `col` removed.
                ///
                /// # Panics
                ///
                /// Panics if `row` or `col` is out of bounds.
                pub fn submatrix(&self, row: usize, col: usize) -> Matrix<T, $minor, $minor> {
                    assert!(row < $n && col < $n, "({row}, {col}) out of bounds for {}x{} matrix", $n, $n);
                    Matrix::from_fn(|r, c| {
                        let r = if r < row { r } else { r + 1 };
                        let c = if c < col { c } else { c + 1 };
                        self.0[r][c]
                    })
                }

                /// Returns the *cofactor* of the element at `(row, col)`: the determinant of
                /// [`submatrix(row, col)`][Self::submatrix], negated if `row + col` is odd.
                pub fn cofactor(&self, row: usize, col: usize) -> T {
                    let minor = self.submatrix(row, col).determinant();
                    if (row + col) % 2 == 0 {
                        minor
                    } else {
                        -minor
                    }
                }

                /// Returns the determinant, computed by cofactor expansion along the first row.
                ///
                /// # Examples
                ///
                /// ```
                /// # use camel_linalg::*;
                /// // Scaling by 2, 3 and 4 multiplies volumes by 24.
                /// assert_eq!(Mat3f::scale(2.0, 3.0, 4.0).determinant(), 24.0);
                /// ```
                pub fn determinant(&self) -> T {
                    (0..$n).fold(T::ZERO, |acc, col| acc + self.0[0][col] * self.cofactor(0, col))
                }

                /// Returns the *adjugate* of the matrix: the transpose of its cofactor matrix.
                pub fn adjugate(&self) -> Self {
                    Matrix::from_fn(|row, col| self.cofactor(col, row))
                }

                /// Inverts this matrix by dividing its [adjugate] by its [determinant].
                ///
                /// No check for singularity is performed: if the determinant is zero, the result
                /// contains non-finite elements. Use [`try_invert`] to detect that case instead.
                ///
                /// [adjugate]: Self::adjugate
                /// [determinant]: Self::determinant
                /// [`try_invert`]: Self::try_invert
                pub fn invert(&self) -> Self {
                    self.adjugate() * (T::ONE / self.determinant())
                }

                /// Inverts this matrix, or returns [`LinalgError::Singular`] if it is singular
                /// or too close to it.
                ///
                /// The determinant is compared against the product of the row lengths, which
                /// bounds it from above (Hadamard's inequality). The matrix is rejected when
                /// `|det| <= DEFAULT_EPSILON * |row 0| * ... * |row N-1|`, so the test measures
                /// how close the rows are to linearly dependent, not the magnitude of the
                /// elements: scaling a matrix never changes the outcome.
                ///
                /// # Examples
                ///
                /// ```
                /// # use camel_linalg::*;
                /// // The determinant is only 2e-6, but the matrix is perfectly conditioned.
                /// let small = Mat2f::from_diagonal([0.001, 0.002]);
                /// let inv = small.try_invert().unwrap();
                /// assert_approx_eq!(small * inv, Mat2f::IDENTITY);
                ///
                /// let flat = Mat2f::from_rows([[1.0, 2.0], [2.0, 4.0]]);
                /// assert_eq!(flat.try_invert(), Err(LinalgError::Singular));
                /// ```
                pub fn try_invert(&self) -> Result<Self>
                where
                    T: Float,
                {
                    let det = self.determinant();
                    let bound = (0..$n).fold(T::ONE, |acc, row| acc * self.row(row).length());
                    // Negated so that a NaN determinant is rejected as well.
                    if !(det.abs() > T::DEFAULT_EPSILON * bound) {
                        log::trace!(
                            "refusing to invert singular matrix {:?} (det={}, row length product={})",
                            self,
                            det,
                            bound
                        );
                        return Err(LinalgError::Singular);
                    }
                    Ok(self.adjugate() * (T::ONE / det))
                }
            }
        )+
    };
}

square_impls!(2 => 1, 3 => 2, 4 => 3);

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self(array::from_fn(|_| array::from_fn(|_| T::default())))
    }
}
