//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// Each arithmetic operator comes in an element-wise vector-vector flavor and a vector-scalar
// flavor, which applies the scalar to every element. This rules out a more generic
// `Add<U> for Vector<T, N> where T: Add<U>`.
macro_rules! binops {
    ($(($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt)),+) => {
        $(
            /// Element-wise operation.
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $sym r)
                }
            }

            /// Element-wise operation.
            impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
            where
                T: $assign,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.as_mut_slice()
                        .iter_mut()
                        .zip(rhs.into_array())
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }

            /// Vector-scalar operation, applied to every element.
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $sym rhs)
                }
            }

            /// Vector-scalar operation, applied to every element.
            impl<T, const N: usize> $assign<T> for Vector<T, N>
            where
                T: $assign + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.as_mut_slice()
                        .iter_mut()
                        .for_each(|lhs| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

binops!(
    (Add, add, AddAssign, add_assign, +),
    (Sub, sub, SubAssign, sub_assign, -),
    (Mul, mul, MulAssign, mul_assign, *),
    (Div, div, DivAssign, div_assign, /)
);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4};

    #[test]
    fn element_wise() {
        let a = vec4(1, 2, 3, 4);
        let b = vec4(8, 6, 4, 2);
        assert_eq!(a + b, [9, 8, 7, 6]);
        assert_eq!(b - a, [7, 4, 1, -2]);
        assert_eq!(a * b, [8, 12, 12, 8]);
        assert_eq!(b / a, [8, 3, 1, 0]);
        assert_eq!(-a, [-1, -2, -3, -4]);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= a;
        c /= b;
        assert_eq!(c, a);
    }

    #[test]
    fn scalar() {
        let v = vec2(6.0, -3.0);
        assert_eq!(v + 2.0, [8.0, -1.0]);
        assert_eq!(v - 2.0, [4.0, -5.0]);
        assert_eq!(v * 2.0, [12.0, -6.0]);
        assert_eq!(v / 3.0, [2.0, -1.0]);

        let mut w = v;
        w /= 3.0;
        assert_eq!(w, [2.0, -1.0]);
    }
}
