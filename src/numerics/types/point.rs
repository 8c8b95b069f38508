// src/numerics/types/point.rs
// Point3: a location in space, homogeneous w = 1.

use core::ops::{Add, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Point3 is a position in 3D space.
///
/// Unlike [`Vector3`] it is affected by translation. The operators follow
/// affine rules: point - point is a vector, point ± vector is a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Same (x, y, z) wire form as Vector3.
impl<T> Serialize for Point3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Point3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Point3 { x, y, z })
    }
}

impl<T: FloatingPoint> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Component-wise comparison with an absolute tolerance of `EPSILON`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        let eps = T::epsilon();
        self.x.approx_eq(other.x, eps)
            && self.y.approx_eq(other.y, eps)
            && self.z.approx_eq(other.z, eps)
    }
}

impl<T: FloatingPoint> Sub for Point3<T> {
    type Output = Vector3<T>;

    fn sub(self, other: Self) -> Vector3<T> {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    fn add(self, v: Vector3<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: FloatingPoint> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;

    fn sub(self, v: Vector3<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T: FloatingPoint> Neg for Point3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Point3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_minus_point_is_vector() {
        let p1 = Point3::new(3.0, 2.0, 1.0);
        let p2 = Point3::new(5.0, 6.0, 7.0);
        assert_eq!(p1 - p2, Vector3::new(-2.0, -4.0, -6.0));
    }

    #[test]
    fn test_point_and_vector_arithmetic() {
        let p = Point3::new(3.0, -2.0, 5.0);
        let v = Vector3::new(-2.0, 3.0, 1.0);
        assert_eq!(p + v, Point3::new(1.0, 1.0, 6.0));

        let p = Point3::new(3.0, 2.0, 1.0);
        let v = Vector3::new(5.0, 6.0, 7.0);
        assert_eq!(p - v, Point3::new(-2.0, -4.0, -6.0));
    }

    #[test]
    fn test_negate() {
        assert_eq!(-Point3::new(3.0, -2.0, 5.0), Point3::new(-3.0, 2.0, -5.0));
    }

    #[test]
    fn test_point3_bincode_roundtrip() {
        let config = bincode::config::standard();
        let p: Point3<f64> = Point3::new(1.1, 2.2, 3.3);

        let encoded = bincode::serde::encode_to_vec(p, config).unwrap();
        let (decoded, _len): (Point3<f64>, _) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(p, decoded);
    }
}
