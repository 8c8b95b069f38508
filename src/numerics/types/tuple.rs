// src/numerics/types/tuple.rs
// Generic homogeneous 4-tuples and the point/vector/tuple sum type.

use core::ops::{Add, Div, Index, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::point::Point3;
use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Anything that can be read as four ordered homogeneous components
/// `(x, y, z, w)`.
///
/// This is the only view the matrix engine needs of its input when applying
/// a transform.
pub trait HomogeneousComponents<T: FloatingPoint> {
    fn to_tuple4(&self) -> Tuple4<T>;
}

/// A raw homogeneous 4-tuple with no point/vector interpretation attached.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Tuple4<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: FloatingPoint> Tuple4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Checked component access; `None` for `index >= 4`.
    pub fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            3 => Some(self.w),
            _ => None,
        }
    }

    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// True when `w` is within `EPSILON` of 1.
    pub fn is_point(&self) -> bool {
        self.w.approx_eq(T::one(), T::epsilon())
    }

    /// True when `w` is within `EPSILON` of 0.
    pub fn is_vector(&self) -> bool {
        self.w.approx_eq(T::zero(), T::epsilon())
    }

    /// Euclidean length over all four components.
    pub fn magnitude(&self) -> T {
        self.dot(self).sqrt()
    }

    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        let eps = T::epsilon();
        self.x.approx_eq(other.x, eps)
            && self.y.approx_eq(other.y, eps)
            && self.z.approx_eq(other.z, eps)
            && self.w.approx_eq(other.w, eps)
    }
}

impl<T: FloatingPoint> Index<usize> for Tuple4<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("tuple index {index} out of range for a 4-tuple"),
        }
    }
}

impl<T: FloatingPoint> Add for Tuple4<T> {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z, self.w + o.w)
    }
}

impl<T: FloatingPoint> Sub for Tuple4<T> {
    type Output = Self;

    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z, self.w - o.w)
    }
}

impl<T: FloatingPoint> Neg for Tuple4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: FloatingPoint> Mul<T> for Tuple4<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl<T: FloatingPoint> Div<T> for Tuple4<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Tuple4<T> {
    fn from(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

/// The result of a homogeneous computation, tagged by its `w` component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Homogeneous<T: FloatingPoint = f64> {
    /// `w` was (approximately) 0.
    Vector(Vector3<T>),
    /// `w` was (approximately) 1.
    Point(Point3<T>),
    /// Any other `w`.
    Generic(Tuple4<T>),
}

impl<T: FloatingPoint> Homogeneous<T> {
    /// Pick the variant from `w`, compared against 0 and 1 with `EPSILON`.
    pub fn classify(t: Tuple4<T>) -> Self {
        if t.is_vector() {
            Homogeneous::Vector(Vector3::new(t.x, t.y, t.z))
        } else if t.is_point() {
            Homogeneous::Point(Point3::new(t.x, t.y, t.z))
        } else {
            Homogeneous::Generic(t)
        }
    }

    pub fn as_point(&self) -> Option<Point3<T>> {
        match self {
            Homogeneous::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<Vector3<T>> {
        match self {
            Homogeneous::Vector(v) => Some(*v),
            _ => None,
        }
    }

    /// Same variant and components within `EPSILON`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Homogeneous::Vector(a), Homogeneous::Vector(b)) => a.approx_eq(b),
            (Homogeneous::Point(a), Homogeneous::Point(b)) => a.approx_eq(b),
            (Homogeneous::Generic(a), Homogeneous::Generic(b)) => a.approx_eq(b),
            _ => false,
        }
    }
}

impl<T: FloatingPoint> HomogeneousComponents<T> for Tuple4<T> {
    fn to_tuple4(&self) -> Tuple4<T> {
        *self
    }
}

impl<T: FloatingPoint> HomogeneousComponents<T> for Vector3<T> {
    fn to_tuple4(&self) -> Tuple4<T> {
        Tuple4::new(self.x, self.y, self.z, T::zero())
    }
}

impl<T: FloatingPoint> HomogeneousComponents<T> for Point3<T> {
    fn to_tuple4(&self) -> Tuple4<T> {
        Tuple4::new(self.x, self.y, self.z, T::one())
    }
}

impl<T: FloatingPoint> HomogeneousComponents<T> for Homogeneous<T> {
    fn to_tuple4(&self) -> Tuple4<T> {
        match self {
            Homogeneous::Vector(v) => v.to_tuple4(),
            Homogeneous::Point(p) => p.to_tuple4(),
            Homogeneous::Generic(t) => *t,
        }
    }
}

impl<T: FloatingPoint> HomogeneousComponents<T> for [T; 4] {
    fn to_tuple4(&self) -> Tuple4<T> {
        Tuple4::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_get() {
        let t = Tuple4::new(4.3, -4.2, 3.1, 1.0);
        assert_eq!(t[0], 4.3);
        assert_eq!(t[3], 1.0);
        assert_eq!(t.get(2), Some(3.1));
        assert_eq!(t.get(4), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_past_w_panics() {
        let t = Tuple4::new(0.0, 0.0, 0.0, 0.0);
        let _value: f64 = t[4];
    }

    #[test]
    fn test_point_and_vector_discrimination() {
        assert!(Tuple4::new(4.3, -4.2, 3.1, 1.0).is_point());
        assert!(!Tuple4::new(4.3, -4.2, 3.1, 1.0).is_vector());
        assert!(Tuple4::new(4.3, -4.2, 3.1, 0.0).is_vector());
    }

    #[test]
    fn test_scalar_multiply_and_divide() {
        let t = Tuple4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(t * 3.5, Tuple4::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(t * 0.5, Tuple4::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(t / 2.0, Tuple4::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(-t, Tuple4::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_adding_two_vectors_stays_a_vector() {
        let sum = Vector3::new(3.0, -2.0, 5.0).to_tuple4() + Vector3::new(-2.0, 3.0, 1.0).to_tuple4();
        assert_eq!(
            Homogeneous::classify(sum),
            Homogeneous::Vector(Vector3::new(1.0, 1.0, 6.0))
        );
    }

    #[test]
    fn test_classify_uses_tolerance() {
        let nearly_point = Tuple4::new(1.0, 2.0, 3.0, 1.0 + 1e-9);
        assert_eq!(
            Homogeneous::classify(nearly_point).as_point(),
            Some(Point3::new(1.0, 2.0, 3.0))
        );

        let nearly_vector = Tuple4::new(1.0, 2.0, 3.0, -1e-9);
        assert!(Homogeneous::classify(nearly_vector).as_vector().is_some());

        let generic = Tuple4::new(1.0, 2.0, 3.0, 2.0);
        assert_eq!(Homogeneous::classify(generic), Homogeneous::Generic(generic));
    }

    #[test]
    fn test_approx_eq_requires_same_variant() {
        let p = Homogeneous::Point(Point3::new(1.0, 2.0, 3.0));
        let v = Homogeneous::Vector(Vector3::new(1.0, 2.0, 3.0));
        assert!(!p.approx_eq(&v));
        assert!(p.approx_eq(&Homogeneous::Point(Point3::new(1.0, 2.0, 3.000_001))));
    }

    #[test]
    fn test_components_of_points_and_vectors() {
        assert_eq!(Point3::new(1.0, 2.0, 3.0).to_tuple4().w, 1.0);
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).to_tuple4().w, 0.0);
        assert_eq!([1.0_f64, 2.0, 3.0, 4.0].to_tuple4(), Tuple4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_magnitude_and_dot() {
        let t = Tuple4::new(1.0, 2.0, 3.0, 0.0);
        assert_eq!(t.magnitude(), 14.0_f64.sqrt());
        assert_eq!(t.dot(&Tuple4::new(2.0, 3.0, 4.0, 0.0)), 20.0);
        assert!((t.normalize().magnitude() - 1.0).abs() < 1e-12);
    }
}
