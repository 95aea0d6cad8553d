use std::{array, fmt};

use crate::{
    approx,
    error::{LinalgError, Result},
    traits::{Float, Number, Sqrt},
    Mat2, MinMax, One, Trig, Zero,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors along the axes.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`. These alias the same storage as
///   indexing, so `v.y` and `v[1]` always refer to the same element.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   array, for example to hand it to a [Level-1 backend] or to `bytemuck`.
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` work element-wise between vectors, and between a vector and a scalar
/// (`v + 1.0` adds `1.0` to every element, `v * 2.0` scales the vector).
///
/// # Equality
///
/// [`PartialEq`] compares exactly. For computed results, use [`ApproxEq`], which compares each
/// pair of components against an absolute epsilon.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`ApproxEq`]: crate::approx::ApproxEq
/// [Level-1 backend]: https://netlib.org/blas/#_level_1
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// Cheaper than [`Vector::length`], and preferable when only comparing lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// assert_eq!(vec3(1, 2, 3).length2(), vec3(1, 2, 3).dot(vec3(1, 2, 3)));
    /// ```
    #[doc(alias = "mod2")]
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the (Euclidean) length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// ```
    #[doc(alias = "mod", alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Scales this vector by the reciprocal of its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction: normalizing it yields non-finite elements. Use
    /// [`Vector::try_normalize`] if the input might be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert!(Vec3f::ZERO.normalize().x.is_nan());
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self * (T::ONE / self.length())
    }

    /// Normalizes this vector, or returns [`LinalgError::ZeroLength`] if its length is at most
    /// [`DEFAULT_EPSILON`][crate::approx::DefaultEpsilon::DEFAULT_EPSILON].
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Ok(vec2(0.0, -1.0)));
    /// assert_eq!(Vec2f::ZERO.try_normalize(), Err(LinalgError::ZeroLength));
    /// ```
    pub fn try_normalize(self) -> Result<Self>
    where
        T: Float,
    {
        let length = self.length();
        if length <= T::DEFAULT_EPSILON {
            log::trace!("refusing to normalize zero-length vector {:?}", self);
            return Err(LinalgError::ZeroLength);
        }
        Ok(self * (T::ONE / length))
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(a.dot(b), b.dot(a));
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Returns the squared distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// assert_eq!(vec2(1, 1).distance2(vec2(4, 5)), 25);
    /// ```
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (self - other).length2()
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// This is `acos(dot / (|self| * |other|))`. The cosine is *not* clamped to `[-1, 1]`, so
    /// rounding errors on (anti-)parallel vectors can make the result NaN, as can zero-length
    /// operands. [`Vector::try_angle_to`] handles both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.abs_angle_to(b), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(b.abs_angle_to(a), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(a.abs_angle_to(-a), TAU / 2.0); // half a turn
    /// ```
    #[doc(alias = "angle")]
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Computes the angle between `self` and `other`, in radians, rejecting zero-length
    /// operands.
    ///
    /// Either vector counts as zero-length if its length is at most [`DEFAULT_EPSILON`], the
    /// same test [`Vector::try_normalize`] applies.
    ///
    /// Unlike [`Vector::abs_angle_to`], the cosine is clamped to `[-1, 1]` before taking the arc
    /// cosine, so (anti-)parallel vectors yield `0` or `π` instead of NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// use std::f64::consts::PI;
    ///
    /// let v = vec3(0.1, 0.2, 0.3);
    /// assert_approx_eq!(v.try_angle_to(v * -3.0).unwrap(), PI, epsilon = 1e-6);
    /// assert_eq!(v.try_angle_to(Vec3d::ZERO), Err(LinalgError::ZeroLength));
    /// ```
    ///
    /// [`DEFAULT_EPSILON`]: crate::approx::DefaultEpsilon::DEFAULT_EPSILON
    pub fn try_angle_to(self, other: Self) -> Result<T>
    where
        T: Float,
    {
        let (len_a, len_b) = (self.length(), other.length());
        if len_a <= T::DEFAULT_EPSILON || len_b <= T::DEFAULT_EPSILON {
            log::trace!(
                "refusing to measure angle between {:?} and {:?}: zero-length operand",
                self,
                other
            );
            return Err(LinalgError::ZeroLength);
        }
        let cos = (self.dot(other) / (len_a * len_b)).clamp(-T::ONE, T::ONE);
        Ok(cos.acos())
    }

    /// Projects `self` orthogonally onto the line spanned by `onto`.
    ///
    /// If `onto` has zero length, the result has non-finite elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let p = vec2(2.0, 3.0).project_onto(vec2(5.0, 0.0));
    /// assert_eq!(p, vec2(2.0, 0.0));
    /// ```
    #[doc(alias = "project")]
    pub fn project_onto(self, onto: Self) -> Self
    where
        T: Number,
    {
        onto * (self.dot(onto) / onto.length2())
    }

    /// Projects `self` onto `onto`, or returns [`LinalgError::ZeroLength`] if the length of
    /// `onto` is at most [`DEFAULT_EPSILON`][crate::approx::DefaultEpsilon::DEFAULT_EPSILON].
    pub fn try_project_onto(self, onto: Self) -> Result<Self>
    where
        T: Float,
    {
        if onto.length() <= T::DEFAULT_EPSILON {
            log::trace!("refusing to project {:?} onto zero-length vector {:?}", self, onto);
            return Err(LinalgError::ZeroLength);
        }
        Ok(onto * (self.dot(onto) / onto.length2()))
    }

    /// Reflects `self` across the line (2D) or plane (3D) through the origin with the given
    /// `normal`.
    ///
    /// `normal` does not need to be normalized, but must not be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// // Bounce off a floor.
    /// let v = vec2(1.0, -1.0).reflect(vec2(0.0, 3.0));
    /// assert_eq!(v, vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        let k = self.dot(normal) / normal.length2();
        self - normal * (k + k)
    }

    /// Renders `self` (the *expected* value) and `got` side by side, marking components that
    /// differ by more than [`DEFAULT_EPSILON`][crate::approx::DefaultEpsilon::DEFAULT_EPSILON].
    ///
    /// Intended for assertion messages.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let report = vec2(1.0f32, 2.0).compare(&vec2(1.0, 2.5));
    /// assert!(report.lines().nth(2).unwrap().ends_with("<--"));
    /// ```
    pub fn compare(&self, got: &Self) -> String
    where
        T: Float,
    {
        const NAMES: [&str; 4] = ["x", "y", "z", "w"];
        let labels = (0..N).map(|i| match NAMES.get(i) {
            Some(name) if N <= 4 => name.to_string(),
            _ => format!("[{i}]"),
        });
        approx::compare_components(labels, &self.0, &got.0, T::DEFAULT_EPSILON)
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let v = vec3(-1.0, 2.0, 7.0).clamp(Vector::splat(0.0), Vector::splat(5.0));
    /// assert_eq!(v, vec3(0.0, 2.0, 5.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_lh(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_rh(radians) * self
    }

    /// Computes the (signed) clockwise rotation in radians needed to align `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right. If the
    /// Y axis points *down*, swap the arguments to make the method work correctly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// // The Y axis can be aligned with the X axis by rotating it clockwise by a quarter turn.
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    ///
    /// // The X axis can be aligned with the Y axis by rotating it counterclockwise by a quarter turn.
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of `self` and `other` (both extended with
    /// Z=0).
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.x * other.y - self.y * other.x
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// Extending a point with `1` and a direction with `0` yields the homogeneous coordinates
    /// expected by the 4x4 transform generators.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// assert_eq!(vec3(1, 2, 3).cross(vec3(4, 5, 6)), vec3(-3, 6, -3));
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// Drops the homogeneous coordinate without dividing by it.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
