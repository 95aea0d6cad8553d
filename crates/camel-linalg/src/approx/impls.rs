use super::ApproxEq;

macro_rules! float_impls {
    ($($ty:ty),+) => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = Self;

                fn abs_diff_eq(&self, other: &Self, epsilon: Self) -> bool {
                    if self.is_finite() && other.is_finite() {
                        (self - other).abs() <= epsilon
                    } else {
                        // NaN never matches; infinities only match the same infinity.
                        self == other
                    }
                }
            }
        )+
    };
}
float_impls!(f32, f64);

impl<T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &T {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &U, epsilon: Self::Epsilon) -> bool {
        T::abs_diff_eq(self, other, epsilon)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &[U], epsilon: Self::Epsilon) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &[U; N], epsilon: Self::Epsilon) -> bool {
        self[..].abs_diff_eq(&other[..], epsilon)
    }
}
