//! Generators for the matrices of common geometric transforms, and their inverses.
//!
//! All generators produce matrices that act on *column vectors* (`m * v`). The 4x4 generators
//! work in homogeneous coordinates: their linear part occupies the upper-left 3x3 block, a
//! translation occupies the last column, and the bottom-right element is 1.
//!
//! Rotations come in a right-handed (`_rh`) and a left-handed (`_lh`) flavor. A positive angle
//! rotates counter-clockwise with the right-handed generators and clockwise with the left-handed
//! ones, when looking down the rotation axis towards the origin.
//!
//! No generator validates its arguments. A scale factor of zero produces a singular matrix, and
//! a zero rotation axis produces NaN elements.

use crate::{
    traits::{Number, Sqrt, Trig},
    Mat2, Mat3, Mat4, Matrix, Vector,
};

impl<T: Number> Mat2<T> {
    /// Creates a 2x2 matrix scaling the X and Y axes by `sx` and `sy`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat2::scale(2, 3);
    /// assert_eq!(m * vec2(1, 1), vec2(2, 3));
    /// ```
    pub fn scale(sx: T, sy: T) -> Self {
        Matrix::from_diagonal([sx, sy])
    }

    /// Creates a 2x2 matrix shearing along the X axis: `x' = x + k * y`.
    pub fn shear_x(k: T) -> Self {
        Matrix::from_rows([[T::ONE, k], [T::ZERO, T::ONE]])
    }

    /// Creates a 2x2 matrix shearing along the Y axis: `y' = y + k * x`.
    pub fn shear_y(k: T) -> Self {
        Matrix::from_rows([[T::ONE, T::ZERO], [k, T::ONE]])
    }
}

impl<T: Number + Trig> Mat2<T> {
    /// Creates a 2x2 matrix that rotates vectors counter-clockwise by `radians`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat2d::rotation_rh(std::f64::consts::FRAC_PI_2);
    /// assert_approx_eq!(m * Vec2d::X, Vec2d::Y);
    /// ```
    pub fn rotation_rh(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Matrix::from_rows([[cos, -sin], [sin, cos]])
    }

    /// Creates a 2x2 matrix that rotates vectors clockwise by `radians`.
    pub fn rotation_lh(radians: T) -> Self {
        Self::rotation_rh(-radians)
    }
}

impl<T: Number> Mat3<T> {
    /// Creates a 3x3 matrix scaling the X, Y and Z axes by `sx`, `sy` and `sz`.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        Matrix::from_diagonal([sx, sy, sz])
    }

    /// Creates a 3x3 matrix shearing along the X axis: `x' = x + ky * y + kz * z`.
    pub fn shear_x(ky: T, kz: T) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 1)] = ky;
        m[(0, 2)] = kz;
        m
    }

    /// Creates a 3x3 matrix shearing along the Y axis: `y' = y + kx * x + kz * z`.
    pub fn shear_y(kx: T, kz: T) -> Self {
        let mut m = Self::IDENTITY;
        m[(1, 0)] = kx;
        m[(1, 2)] = kz;
        m
    }

    /// Creates a 3x3 matrix shearing along the Z axis: `z' = z + kx * x + ky * y`.
    pub fn shear_z(kx: T, ky: T) -> Self {
        let mut m = Self::IDENTITY;
        m[(2, 0)] = kx;
        m[(2, 1)] = ky;
        m
    }

    /// Creates a 3x3 matrix translating 2D points in homogeneous coordinates by `(tx, ty)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat3::translation_2d(5, -1);
    /// assert_eq!(m * vec3(1, 2, 1), vec3(6, 1, 1));
    /// // Directions (w = 0) are not affected.
    /// assert_eq!(m * vec3(1, 2, 0), vec3(1, 2, 0));
    /// ```
    pub fn translation_2d(tx: T, ty: T) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 2)] = tx;
        m[(1, 2)] = ty;
        m
    }
}

impl<T: Number + Trig> Mat3<T> {
    /// Creates a 3x3 matrix rotating counter-clockwise about the X axis.
    pub fn rotation_x_rh(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Matrix::from_rows([[l, o, o], [o, c, -s], [o, s, c]])
    }

    /// Creates a 3x3 matrix rotating clockwise about the X axis.
    pub fn rotation_x_lh(radians: T) -> Self {
        Self::rotation_x_rh(-radians)
    }

    /// Creates a 3x3 matrix rotating counter-clockwise about the Y axis.
    pub fn rotation_y_rh(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Matrix::from_rows([[c, o, s], [o, l, o], [-s, o, c]])
    }

    /// Creates a 3x3 matrix rotating clockwise about the Y axis.
    pub fn rotation_y_lh(radians: T) -> Self {
        Self::rotation_y_rh(-radians)
    }

    /// Creates a 3x3 matrix rotating counter-clockwise about the Z axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat3d::rotation_z_rh(std::f64::consts::FRAC_PI_2);
    /// assert_approx_eq!(m * Vec3d::X, Vec3d::Y);
    /// ```
    pub fn rotation_z_rh(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Matrix::from_rows([[c, -s, o], [s, c, o], [o, o, l]])
    }

    /// Creates a 3x3 matrix rotating clockwise about the Z axis.
    pub fn rotation_z_lh(radians: T) -> Self {
        Self::rotation_z_rh(-radians)
    }
}

impl<T: Number + Trig + Sqrt> Mat3<T> {
    /// Creates a 3x3 matrix rotating counter-clockwise about an arbitrary `axis`.
    ///
    /// `axis` does not need to be normalized, but must not be zero. A zero axis results in a
    /// matrix full of NaN.
    ///
    /// Uses [Rodrigues' rotation formula].
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let angle = 0.7;
    /// assert_approx_eq!(
    ///     Mat3d::rotation_axis_rh(vec3(0.0, 3.0, 0.0), angle),
    ///     Mat3d::rotation_y_rh(angle),
    /// );
    /// ```
    ///
    /// [Rodrigues' rotation formula]: https://en.wikipedia.org/wiki/Rodrigues%27_rotation_formula
    pub fn rotation_axis_rh(axis: Vector<T, 3>, radians: T) -> Self {
        let axis = axis.normalize();
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let (s, c) = radians.sin_cos();
        let t = T::ONE - c;

        Matrix::from_rows([
            [c + x * x * t, x * y * t - z * s, x * z * t + y * s],
            [x * y * t + z * s, c + y * y * t, y * z * t - x * s],
            [x * z * t - y * s, y * z * t + x * s, c + z * z * t],
        ])
    }

    /// Creates a 3x3 matrix rotating clockwise about an arbitrary `axis`.
    pub fn rotation_axis_lh(axis: Vector<T, 3>, radians: T) -> Self {
        Self::rotation_axis_rh(axis, -radians)
    }
}

impl<T: Number> Mat4<T> {
    /// Extends a 3x3 linear transform to homogeneous coordinates.
    fn from_linear(linear: Mat3<T>) -> Self {
        let mut m = linear.resize::<4, 4>();
        m[(3, 3)] = T::ONE;
        m
    }

    /// Creates a 4x4 matrix scaling the X, Y and Z axes by `sx`, `sy` and `sz`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat4::scale(2, 3, 4);
    /// assert_eq!(m * vec4(1, 1, 1, 1), vec4(2, 3, 4, 1));
    /// ```
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        Matrix::from_diagonal([sx, sy, sz, T::ONE])
    }

    /// Creates a 4x4 matrix shearing along the X axis: `x' = x + ky * y + kz * z`.
    pub fn shear_x(ky: T, kz: T) -> Self {
        Self::from_linear(Mat3::shear_x(ky, kz))
    }

    /// Creates a 4x4 matrix shearing along the Y axis: `y' = y + kx * x + kz * z`.
    pub fn shear_y(kx: T, kz: T) -> Self {
        Self::from_linear(Mat3::shear_y(kx, kz))
    }

    /// Creates a 4x4 matrix shearing along the Z axis: `z' = z + kx * x + ky * y`.
    pub fn shear_z(kx: T, ky: T) -> Self {
        Self::from_linear(Mat3::shear_z(kx, ky))
    }

    /// Creates a 4x4 matrix translating points by `(tx, ty, tz)`.
    ///
    /// Points have a `w` coordinate of 1, directions have a `w` coordinate of 0 and are not
    /// affected by translation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat4::translation(1, 2, 3);
    /// assert_eq!(m * vec4(10, 10, 10, 1), vec4(11, 12, 13, 1));
    /// assert_eq!(m * vec4(10, 10, 10, 0), vec4(10, 10, 10, 0));
    /// ```
    pub fn translation(tx: T, ty: T, tz: T) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 3)] = tx;
        m[(1, 3)] = ty;
        m[(2, 3)] = tz;
        m
    }
}

impl<T: Number + Trig> Mat4<T> {
    /// Creates a 4x4 matrix rotating counter-clockwise about the X axis.
    pub fn rotation_x_rh(radians: T) -> Self {
        Self::from_linear(Mat3::rotation_x_rh(radians))
    }

    /// Creates a 4x4 matrix rotating clockwise about the X axis.
    pub fn rotation_x_lh(radians: T) -> Self {
        Self::from_linear(Mat3::rotation_x_lh(radians))
    }

    /// Creates a 4x4 matrix rotating counter-clockwise about the Y axis.
    pub fn rotation_y_rh(radians: T) -> Self {
        Self::from_linear(Mat3::rotation_y_rh(radians))
    }

    /// Creates a 4x4 matrix rotating clockwise about the Y axis.
    pub fn rotation_y_lh(radians: T) -> Self {
        Self::from_linear(Mat3::rotation_y_lh(radians))
    }

    /// Creates a 4x4 matrix rotating counter-clockwise about the Z axis.
    pub fn rotation_z_rh(radians: T) -> Self {
        Self::from_linear(Mat3::rotation_z_rh(radians))
    }

    /// Creates a 4x4 matrix rotating clockwise about the Z axis.
    pub fn rotation_z_lh(radians: T) -> Self {
        Self::from_linear(Mat3::rotation_z_lh(radians))
    }
}

impl<T: Number + Trig + Sqrt> Mat4<T> {
    /// Creates a 4x4 matrix rotating counter-clockwise about an arbitrary `axis`.
    ///
    /// See [`Mat3::rotation_axis_rh`].
    pub fn rotation_axis_rh(axis: Vector<T, 3>, radians: T) -> Self {
        Self::from_linear(Mat3::rotation_axis_rh(axis, radians))
    }

    /// Creates a 4x4 matrix rotating clockwise about an arbitrary `axis`.
    pub fn rotation_axis_lh(axis: Vector<T, 3>, radians: T) -> Self {
        Self::from_linear(Mat3::rotation_axis_lh(axis, radians))
    }
}

/// Inverses of the generated transforms.
///
/// These exploit the known structure of the matrix instead of performing a general inversion, so
/// they are only correct for matrices of the right family: calling [`Matrix::invert_rotation`] on
/// a scale matrix silently produces garbage.
impl<T, const N: usize> Matrix<T, N, N> {
    /// Inverts a scale matrix by taking the reciprocal of every diagonal element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat3f::scale(2.0, 4.0, 0.5);
    /// assert_eq!(m.invert_scale(), Mat3f::scale(0.5, 0.25, 2.0));
    /// ```
    pub fn invert_scale(&self) -> Self
    where
        T: Number,
    {
        Matrix::from_diagonal(self.into_diagonal().map(|s| T::ONE / s))
    }

    /// Inverts a shear matrix by negating every off-diagonal element.
    ///
    /// Exact for any matrix produced by a single `shear_*` generator.
    pub fn invert_shear(&self) -> Self
    where
        T: Number,
    {
        Matrix::from_fn(|row, col| {
            let elem = self[(row, col)];
            if row == col {
                elem
            } else {
                -elem
            }
        })
    }

    /// Inverts a rotation matrix by transposing it.
    pub fn invert_rotation(&self) -> Self
    where
        T: Copy,
    {
        self.transpose()
    }

    /// Inverts a translation matrix by negating its translation column (the last column,
    /// excluding the homogeneous element).
    ///
    /// # Examples
    ///
    /// ```
    /// # use camel_linalg::*;
    /// let m = Mat4::translation(1, 2, 3);
    /// assert_eq!(m.invert_translation(), Mat4::translation(-1, -2, -3));
    /// assert_eq!(Mat3::translation_2d(4, 5).invert_translation(), Mat3::translation_2d(-4, -5));
    /// ```
    pub fn invert_translation(&self) -> Self
    where
        T: Number,
    {
        let mut inverse = *self;
        for row in 0..N.saturating_sub(1) {
            inverse[(row, N - 1)] = -self[(row, N - 1)];
        }
        inverse
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec2, vec3, vec4, Mat2d, Mat3d, Mat4d, Vec3d, Vector};

    use super::*;

    fn rng_f64(rng: &mut fastrand::Rng) -> f64 {
        rng.f64() * 20.0 - 10.0
    }

    fn rng_vec<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f64, N> {
        Vector::from_fn(|_| rng_f64(rng))
    }

    fn rng_angle(rng: &mut fastrand::Rng) -> f64 {
        (rng.f64() * 2.0 - 1.0) * PI
    }

    #[test]
    fn scale_2d() {
        assert_eq!(Mat2::scale(3, -2) * vec2(1, 2), vec2(3, -4));
        assert_eq!(Mat2::scale(1, 1), Mat2::IDENTITY);
        assert_eq!(Mat2d::scale(2.0, 8.0).invert_scale(), Mat2d::scale(0.5, 0.125));
    }

    #[test]
    fn shear() {
        assert_eq!(Mat2::shear_x(2) * vec2(1, 3), vec2(7, 3));
        assert_eq!(Mat2::shear_y(2) * vec2(1, 3), vec2(1, 5));
        assert_eq!(Mat2::shear_x(2).invert_shear(), Mat2::shear_x(-2));

        assert_eq!(Mat3::shear_x(2, 3) * vec3(1, 1, 1), vec3(6, 1, 1));
        assert_eq!(Mat3::shear_y(2, 3) * vec3(1, 1, 1), vec3(1, 6, 1));
        assert_eq!(Mat3::shear_z(2, 3) * vec3(1, 1, 1), vec3(1, 1, 6));
        assert_eq!(Mat4::shear_z(2, 3) * vec4(1, 1, 1, 1), vec4(1, 1, 6, 1));
        assert_eq!(Mat4::shear_y(1, 0).invert_shear(), Mat4::shear_y(-1, 0));
    }

    #[test]
    fn rotation_2d() {
        let cw = Mat2d::rotation_lh(FRAC_PI_2);
        let ccw = Mat2d::rotation_rh(FRAC_PI_2);
        assert_approx_eq!(cw * vec2(1.0, 0.0), vec2(0.0, -1.0));
        assert_approx_eq!(ccw * vec2(1.0, 0.0), vec2(0.0, 1.0));
        assert_approx_eq!(cw * ccw, Mat2d::IDENTITY);
        assert_approx_eq!(Mat2d::rotation_rh(0.0), Mat2d::IDENTITY);
    }

    #[test]
    fn rotation_axes() {
        let q = FRAC_PI_2;
        assert_approx_eq!(Mat3d::rotation_x_rh(q) * Vec3d::Y, Vec3d::Z);
        assert_approx_eq!(Mat3d::rotation_y_rh(q) * Vec3d::Z, Vec3d::X);
        assert_approx_eq!(Mat3d::rotation_z_rh(q) * Vec3d::X, Vec3d::Y);
        assert_approx_eq!(Mat3d::rotation_x_lh(q) * Vec3d::Y, -Vec3d::Z);
        assert_approx_eq!(Mat3d::rotation_y_lh(q) * Vec3d::Z, -Vec3d::X);
        assert_approx_eq!(Mat3d::rotation_z_lh(q) * Vec3d::X, -Vec3d::Y);

        assert_approx_eq!(
            Mat4d::rotation_z_rh(q) * vec4(1.0, 0.0, 0.0, 1.0),
            vec4(0.0, 1.0, 0.0, 1.0)
        );
    }

    #[test]
    fn rotation_axis() {
        let mut rng = fastrand::Rng::with_seed(0xa415);
        for _ in 0..20 {
            let angle = rng_angle(&mut rng);
            assert_approx_eq!(
                Mat3d::rotation_axis_rh(Vec3d::X * 2.5, angle),
                Mat3d::rotation_x_rh(angle)
            );
            assert_approx_eq!(
                Mat3d::rotation_axis_lh(Vec3d::Z, angle),
                Mat3d::rotation_z_lh(angle)
            );
            assert_approx_eq!(
                Mat4d::rotation_axis_rh(Vec3d::Y, angle),
                Mat4d::rotation_y_rh(angle)
            );

            // Points on the axis stay fixed; everything else keeps its length.
            let axis = rng_vec::<3>(&mut rng);
            let m = Mat3d::rotation_axis_rh(axis, angle);
            assert_approx_eq!(m * axis, axis, epsilon = 1e-9);
            let v = rng_vec::<3>(&mut rng);
            assert_approx_eq!((m * v).length(), v.length(), epsilon = 1e-9);
            assert_approx_eq!(m.determinant(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn rotation_axis_zero() {
        let m = Mat3d::rotation_axis_rh(Vec3d::ZERO, 1.0);
        assert!(m.as_flat_slice().iter().all(|e| e.is_nan()));
    }

    #[test]
    fn translation() {
        let m = Mat4d::translation(1.0, -2.0, 0.5);
        assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, -2.0, 0.5, 1.0));
        assert_eq!(m.invert_translation() * m, Mat4d::IDENTITY);
        assert_eq!(
            Mat3::translation_2d(1, 1) * Mat3::translation_2d(2, 3),
            Mat3::translation_2d(3, 4)
        );
    }

    #[test]
    fn inverse_generators_agree_with_invert() {
        let mut rng = fastrand::Rng::with_seed(0x9e4);
        for _ in 0..20 {
            let m = Mat4d::scale(rng_f64(&mut rng), rng_f64(&mut rng), rng_f64(&mut rng));
            assert_approx_eq!(m.invert_scale(), m.invert(), epsilon = 1e-9);
            let m = Mat4d::rotation_axis_lh(rng_vec(&mut rng), rng_angle(&mut rng));
            assert_approx_eq!(m.invert_rotation(), m.invert(), epsilon = 1e-9);
            let m = Mat3d::shear_y(rng_f64(&mut rng), rng_f64(&mut rng));
            assert_approx_eq!(m.invert_shear(), m.invert(), epsilon = 1e-9);
        }
    }

    #[test]
    fn round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x40e);
        for _ in 0..100 {
            let v2: Vector<f64, 2> = rng_vec(&mut rng);
            let v3: Vector<f64, 3> = rng_vec(&mut rng);
            let v4: Vector<f64, 4> = rng_vec(&mut rng);
            let (a, b, c) = (rng_f64(&mut rng), rng_f64(&mut rng), rng_f64(&mut rng));
            let angle = rng_angle(&mut rng);
            let axis: Vector<f64, 3> = rng_vec(&mut rng);

            let mats2 = [
                Mat2d::scale(a, b),
                Mat2d::shear_x(a),
                Mat2d::shear_y(b),
                Mat2d::rotation_rh(angle),
                Mat2d::rotation_lh(angle),
            ];
            let inverses2 = [
                mats2[0].invert_scale(),
                mats2[1].invert_shear(),
                mats2[2].invert_shear(),
                mats2[3].invert_rotation(),
                mats2[4].invert_rotation(),
            ];
            for (m, inv) in mats2.iter().zip(&inverses2) {
                assert_approx_eq!(*inv * (*m * v2), v2, epsilon = 1e-9);
            }

            let mats3 = [
                Mat3d::scale(a, b, c),
                Mat3d::shear_x(a, b),
                Mat3d::shear_y(b, c),
                Mat3d::shear_z(c, a),
                Mat3d::rotation_x_rh(angle),
                Mat3d::rotation_y_lh(angle),
                Mat3d::rotation_z_rh(angle),
                Mat3d::rotation_axis_rh(axis, angle),
                Mat3d::rotation_axis_lh(axis, angle),
                Mat3d::translation_2d(a, b),
            ];
            let inverses3 = [
                mats3[0].invert_scale(),
                mats3[1].invert_shear(),
                mats3[2].invert_shear(),
                mats3[3].invert_shear(),
                mats3[4].invert_rotation(),
                mats3[5].invert_rotation(),
                mats3[6].invert_rotation(),
                mats3[7].invert_rotation(),
                mats3[8].invert_rotation(),
                mats3[9].invert_translation(),
            ];
            for (m, inv) in mats3.iter().zip(&inverses3) {
                assert_approx_eq!(*inv * (*m * v3), v3, epsilon = 1e-9);
            }

            let mats4 = [
                Mat4d::scale(a, b, c),
                Mat4d::shear_x(b, c),
                Mat4d::rotation_x_lh(angle),
                Mat4d::rotation_y_rh(angle),
                Mat4d::rotation_z_lh(angle),
                Mat4d::rotation_axis_rh(axis, angle),
                Mat4d::translation(a, b, c),
            ];
            let inverses4 = [
                mats4[0].invert_scale(),
                mats4[1].invert_shear(),
                mats4[2].invert_rotation(),
                mats4[3].invert_rotation(),
                mats4[4].invert_rotation(),
                mats4[5].invert_rotation(),
                mats4[6].invert_translation(),
            ];
            for (m, inv) in mats4.iter().zip(&inverses4) {
                assert_approx_eq!(*inv * (*m * v4), v4, epsilon = 1e-9);
            }
        }
    }
}
