//! Approximate equality.
//!
//! Every comparison in this crate uses a single contract: two scalars are *approximately equal*
//! if their absolute difference is at most an epsilon. Vectors and matrices are approximately
//! equal if every pair of corresponding components is. Non-finite values only equal themselves
//! (`inf ≈ inf`), and NaN equals nothing.
//!
//! [`ApproxEq::approx_eq`] uses the element type's [`DefaultEpsilon`]; [`ApproxEq::abs_diff_eq`]
//! takes the epsilon explicitly. The [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros accept an optional `epsilon = ...`
//! argument.

mod impls;

use std::fmt::{self, Write};

/// Types that can be compared for *approximate equality* against an absolute epsilon.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar type of the epsilon, normally the element type ([`f32`] or [`f64`]).
    type Epsilon: DefaultEpsilon + Copy + fmt::Debug;

    /// Returns whether every component of `self` is within `epsilon` of the corresponding
    /// component of `other`.
    fn abs_diff_eq(&self, other: &Rhs, epsilon: Self::Epsilon) -> bool;

    /// Compares `self` and `other` using [`DefaultEpsilon::DEFAULT_EPSILON`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::{*, approx::ApproxEq};
    /// assert!(vec3(1.0f32, 2.0, 3.0).approx_eq(&vec3(1.0, 2.0, 3.000001)));
    /// assert!(!vec3(1.0f32, 2.0, 3.0).approx_eq(&vec3(1.0, 2.0, 3.001)));
    ///
    /// // `f64` uses a much tighter default.
    /// assert!(!vec3(1.0, 2.0, 3.0).approx_eq(&vec3(1.0, 2.0, 3.000001)));
    /// ```
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.abs_diff_eq(other, Self::Epsilon::DEFAULT_EPSILON)
    }
}

/// The epsilon used when none is given explicitly.
///
/// Besides [`ApproxEq::approx_eq`] and the assertion macros, this also bounds the degeneracy
/// checks of the `try_*` operations ([`Vector::try_normalize`], [`Matrix::try_invert`], ...).
///
/// [`Vector::try_normalize`]: crate::Vector::try_normalize
/// [`Matrix::try_invert`]: crate::Matrix::try_invert
pub trait DefaultEpsilon {
    /// `1e-5` for [`f32`], `1e-9` for [`f64`].
    const DEFAULT_EPSILON: Self;
}

impl DefaultEpsilon for f32 {
    const DEFAULT_EPSILON: Self = 1e-5;
}

impl DefaultEpsilon for f64 {
    const DEFAULT_EPSILON: Self = 1e-9;
}

/// Compares two optional values, treating a missing value as unequal to anything.
///
/// # Examples
///
/// ```
/// # use camel_linalg::{*, approx::opt_approx_eq};
/// let v = vec2(1.0, 2.0);
/// assert!(opt_approx_eq(Some(&v), Some(&v)));
/// assert!(!opt_approx_eq(Some(&v), None));
/// assert!(!opt_approx_eq::<Vec2f>(None, None));
/// ```
pub fn opt_approx_eq<T: ApproxEq>(left: Option<&T>, right: Option<&T>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left.approx_eq(right),
        _ => false,
    }
}

/// Renders `expected` and `got` side by side, one component per line.
///
/// Lines whose components differ by more than `epsilon` are marked with `<--`. `labels` names
/// each line; it must yield at least as many items as there are components.
///
/// This is the formatter behind `Vector::compare` and `Matrix::compare`, intended for test
/// failure messages.
pub fn compare_components<T, L>(labels: L, expected: &[T], got: &[T], epsilon: T::Epsilon) -> String
where
    T: ApproxEq + fmt::Debug,
    L: IntoIterator,
    L::Item: fmt::Display,
{
    let mut out = String::new();
    // `fmt::Write` for `String` never fails.
    let _ = writeln!(out, "{:<8}{:>16}{:>16}", "", "expected", "got");
    for ((label, e), g) in labels.into_iter().zip(expected).zip(got) {
        let marker = if e.abs_diff_eq(g, epsilon) { "" } else { "  <--" };
        let _ = writeln!(
            out,
            "{:<8}{:>16}{:>16}{marker}",
            label.to_string(),
            format!("{e:?}"),
            format!("{g:?}"),
        );
    }
    out
}

/// Backs [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
#[doc(hidden)]
#[track_caller]
pub fn check<T>(
    left: &T,
    right: &T,
    epsilon: Option<T::Epsilon>,
    want_equal: bool,
    msg: Option<fmt::Arguments<'_>>,
) where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    let epsilon = epsilon.unwrap_or(T::Epsilon::DEFAULT_EPSILON);
    if left.abs_diff_eq(right, epsilon) == want_equal {
        return;
    }

    let relation = if want_equal { "≈" } else { "≉" };
    let msg = match msg {
        Some(msg) => format!(": {msg}"),
        None => String::new(),
    };
    panic!(
        "assertion `left {relation} right` failed (epsilon = {epsilon:?}){msg}\n  left: {left:?}\n right: {right:?}"
    );
}

/// Asserts that two expressions are approximately equal (see [`ApproxEq`]).
///
/// Without an explicit `epsilon = ...` argument, the element type's
/// [`DefaultEpsilon::DEFAULT_EPSILON`] is used. A trailing format string and arguments are added
/// to the panic message, like for [`assert_eq!`].
///
/// # Examples
///
/// ```
/// # use camel_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0, epsilon = 1.0);
/// assert_approx_eq!(vec2(0.5, 1.0), vec2(0.51, 1.0), epsilon = 0.1, "{} is close enough", 0.51);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::check(&$lhs, &$rhs, ::core::option::Option::None, true, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, epsilon = $eps:expr $(,)?) => {
        $crate::approx::check(&$lhs, &$rhs, ::core::option::Option::Some($eps), true, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, epsilon = $eps:expr, $($arg:tt)+) => {
        $crate::approx::check(
            &$lhs,
            &$rhs,
            ::core::option::Option::Some($eps),
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::check(
            &$lhs,
            &$rhs,
            ::core::option::Option::None,
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal.
///
/// Takes the same arguments as [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use camel_linalg::*;
/// assert_approx_ne!(100.0, 99.0, epsilon = 0.5);
/// assert_approx_ne!(1.0f32, 1.001);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::check(&$lhs, &$rhs, ::core::option::Option::None, false, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, epsilon = $eps:expr $(,)?) => {
        $crate::approx::check(&$lhs, &$rhs, ::core::option::Option::Some($eps), false, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, epsilon = $eps:expr, $($arg:tt)+) => {
        $crate::approx::check(
            &$lhs,
            &$rhs,
            ::core::option::Option::Some($eps),
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::check(
            &$lhs,
            &$rhs,
            ::core::option::Option::None,
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "assertion `left ≈ right` failed (epsilon = 1e-9)")]
    fn eq_failure_reports_epsilon() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left ≉ right` failed")]
    fn ne_failure() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "(epsilon = 0.5): off by 2")]
    fn failure_message() {
        assert_approx_eq!(1.0, 3.0, epsilon = 0.5, "off by {}", 2);
    }

    #[test]
    fn default_epsilon() {
        assert!(1.0f32.approx_eq(&1.000001));
        assert!(!1.0f32.approx_eq(&1.0001));
        assert!(1.0f64.approx_eq(&1.0000000001));
        assert!(!1.0f64.approx_eq(&1.00000001));

        // Absolute only: large values are held to the same epsilon.
        assert!(!1e6f32.approx_eq(&(1e6 + 0.125)));
    }

    #[test]
    fn explicit_epsilon() {
        assert!(1.0f32.abs_diff_eq(&1.0001, 1e-3));
        assert_approx_eq!(1.0, 1.25, epsilon = 0.25);
        assert_approx_ne!(1.0, 1.25, epsilon = 0.2);
        assert_approx_eq!(-1.0, -1.0, epsilon = 0.0);
        assert_approx_eq!(1.0, -1.0, epsilon = 2.0);
        assert_approx_ne!(1.0, -1.0, epsilon = 1.0);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f32::NAN, f32::NAN, epsilon = f32::INFINITY);
        assert_approx_ne!(f64::NAN, 0.0, epsilon = 1.0);
        assert!(!f64::NAN.approx_eq(&f64::NAN));

        assert_approx_eq!(f32::INFINITY, f32::INFINITY, epsilon = 0.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX, epsilon = 1e30);
        assert_approx_ne!(f64::INFINITY, -f64::INFINITY);
    }

    #[test]
    fn slices_and_arrays() {
        assert_approx_eq!([1.0, 2.0], [1.0, 2.0 + 1e-12]);
        assert!(![1.0f32, 2.0][..].approx_eq(&[1.0f32][..]));
        assert!([0.5f32, 1.5].abs_diff_eq(&[0.75, 1.25], 0.25));
    }

    #[test]
    fn optional() {
        assert!(opt_approx_eq(Some(&1.0f32), Some(&1.0)));
        assert!(!opt_approx_eq(Some(&1.0f32), None));
        assert!(!opt_approx_eq(None, Some(&1.0f32)));
    }

    #[test]
    fn comparison_marks_mismatches() {
        let report = compare_components(["x", "y"], &[1.0f32, 2.0], &[1.0, 2.5], 1e-5);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("expected"));
        assert!(lines[1].starts_with('x'));
        assert!(!lines[1].contains("<--"));
        assert!(lines[2].starts_with('y'));
        assert!(lines[2].contains("2.5"));
        assert!(lines[2].ends_with("<--"));
    }
}
