use std::{fmt, ops};

use crate::approx::{ApproxEq, DefaultEpsilon};

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// Computes the sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Sized;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have an absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types.
///
/// This bundles everything the geometric operations, the fallible variants and the tolerance
/// comparisons need. It is implemented for [`f32`] and [`f64`].
pub trait Float:
    Number
    + Sqrt
    + Trig
    + Abs
    + MinMax
    + PartialOrd
    + ApproxEq<Epsilon = Self>
    + DefaultEpsilon
    + fmt::Debug
    + fmt::Display
{
}
impl<T> Float for T where
    T: Number
        + Sqrt
        + Trig
        + Abs
        + MinMax
        + PartialOrd
        + ApproxEq<Epsilon = Self>
        + DefaultEpsilon
        + fmt::Debug
        + fmt::Display
{
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! signed_int_impls {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }
        )+
    };
}
signed_int_impls!(i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    <$types>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$types>::max(self, other)
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    <$types>::sin(self)
                }

                fn cos(self) -> Self {
                    <$types>::cos(self)
                }

                fn tan(self) -> Self {
                    <$types>::tan(self)
                }

                fn asin(self) -> Self {
                    <$types>::asin(self)
                }

                fn acos(self) -> Self {
                    <$types>::acos(self)
                }

                fn atan(self) -> Self {
                    <$types>::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$types>::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$types>::sin_cos(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);
