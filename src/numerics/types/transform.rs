// src/numerics/types/transform.rs
// 4x4 affine transforms and their application to homogeneous tuples.

use super::matrix::{Matrix, Result};
use super::traits::FloatingPoint;
use super::tuple::{Homogeneous, HomogeneousComponents, Tuple4};
use crate::numerics::error::MatrixError;

impl<T: FloatingPoint> Matrix<T> {
    /// Moves points by `(x, y, z)`; vectors are unaffected.
    pub fn translation(x: T, y: T, z: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::from_array4([
            [l, o, o, x],
            [o, l, o, y],
            [o, o, l, z],
            [o, o, o, l],
        ])
    }

    /// Scales each axis independently. A negative factor reflects.
    pub fn scaling(x: T, y: T, z: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::from_array4([
            [x, o, o, o],
            [o, y, o, o],
            [o, o, z, o],
            [o, o, o, l],
        ])
    }

    /// Rotation about the x axis by `radians`.
    pub fn rotation_x(radians: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        let (s, c) = (radians.sin(), radians.cos());
        Self::from_array4([
            [l, o, o, o],
            [o, c, -s, o],
            [o, s, c, o],
            [o, o, o, l],
        ])
    }

    pub fn rotation_y(radians: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        let (s, c) = (radians.sin(), radians.cos());
        Self::from_array4([
            [c, o, s, o],
            [o, l, o, o],
            [-s, o, c, o],
            [o, o, o, l],
        ])
    }

    pub fn rotation_z(radians: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        let (s, c) = (radians.sin(), radians.cos());
        Self::from_array4([
            [c, -s, o, o],
            [s, c, o, o],
            [o, o, l, o],
            [o, o, o, l],
        ])
    }

    /// Shear: each parameter moves one coordinate in proportion to another,
    /// e.g. `xy` moves x in proportion to y.
    pub fn shearing(xy: T, xz: T, yx: T, yz: T, zx: T, zy: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::from_array4([
            [l, xy, xz, o],
            [yx, l, yz, o],
            [zx, zy, l, o],
            [o, o, o, l],
        ])
    }

    /// Multiply this 4x4 matrix with a homogeneous tuple and tag the result
    /// by its `w` component (see [`Homogeneous::classify`]).
    ///
    /// # Errors
    /// * `MatrixError::DimensionMismatch` - the matrix is not 4x4
    pub fn apply<H>(&self, tuple: &H) -> Result<Homogeneous<T>>
    where
        H: HomogeneousComponents<T> + ?Sized,
    {
        if self.shape() != (4, 4) {
            return Err(MatrixError::DimensionMismatch {
                expected: (4, 4),
                found: self.shape(),
            });
        }
        Ok(self.apply_4x4(tuple))
    }

    fn apply_4x4<H>(&self, tuple: &H) -> Homogeneous<T>
    where
        H: HomogeneousComponents<T> + ?Sized,
    {
        let t = tuple.to_tuple4().to_array();
        let mut out = [T::zero(); 4];
        for (dst, row) in out.iter_mut().zip(self.as_slice().chunks_exact(4)) {
            *dst = row
                .iter()
                .zip(&t)
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
        }
        Homogeneous::classify(Tuple4::from(out))
    }
}

/// Fluent composition of affine transforms.
///
/// Each `then_*` call applies its transform *after* everything added so far,
/// so the calls read in the order the transforms act:
///
/// ```
/// # use std::f64::consts::FRAC_PI_2;
/// # use lumen::numerics::types::{point::Point3, transform::Transform};
/// let t = Transform::new()
///     .then_rotate_x(FRAC_PI_2)
///     .then_scale(5.0, 5.0, 5.0)
///     .then_translate(10.0, 5.0, 7.0);
/// let p = t.apply(&Point3::new(1.0, 0.0, 1.0)).as_point().unwrap();
/// assert!(p.approx_eq(&Point3::new(15.0, 0.0, 7.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Transform<T: FloatingPoint = f64> {
    matrix: Matrix<T>,
}

impl<T: FloatingPoint> Default for Transform<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> Transform<T> {
    /// The identity transform.
    pub fn new() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self {
            matrix: Matrix::from_array4([
                [l, o, o, o],
                [o, l, o, o],
                [o, o, l, o],
                [o, o, o, l],
            ]),
        }
    }

    /// Wrap an existing 4x4 matrix.
    pub fn from_matrix(matrix: Matrix<T>) -> Result<Self> {
        if matrix.shape() != (4, 4) {
            return Err(MatrixError::DimensionMismatch {
                expected: (4, 4),
                found: matrix.shape(),
            });
        }
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }

    /// Append `next` so it acts after the current transform.
    pub fn then(self, next: &Matrix<T>) -> Result<Self> {
        Self::from_matrix(next.multiply(&self.matrix)?)
    }

    fn then_4x4(self, next: Matrix<T>) -> Self {
        Self {
            matrix: next.product(&self.matrix),
        }
    }

    pub fn then_translate(self, x: T, y: T, z: T) -> Self {
        self.then_4x4(Matrix::translation(x, y, z))
    }

    pub fn then_scale(self, x: T, y: T, z: T) -> Self {
        self.then_4x4(Matrix::scaling(x, y, z))
    }

    pub fn then_rotate_x(self, radians: T) -> Self {
        self.then_4x4(Matrix::rotation_x(radians))
    }

    pub fn then_rotate_y(self, radians: T) -> Self {
        self.then_4x4(Matrix::rotation_y(radians))
    }

    pub fn then_rotate_z(self, radians: T) -> Self {
        self.then_4x4(Matrix::rotation_z(radians))
    }

    pub fn then_shear(self, xy: T, xz: T, yx: T, yz: T, zx: T, zy: T) -> Self {
        self.then_4x4(Matrix::shearing(xy, xz, yx, yz, zx, zy))
    }

    /// The inverse transform.
    pub fn inverse(&self) -> Result<Self> {
        Ok(Self {
            matrix: self.matrix.inverse()?,
        })
    }

    /// Apply to a homogeneous tuple. Infallible since the matrix is 4x4.
    pub fn apply<H>(&self, tuple: &H) -> Homogeneous<T>
    where
        H: HomogeneousComponents<T> + ?Sized,
    {
        self.matrix.apply_4x4(tuple)
    }
}
