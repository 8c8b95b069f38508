// src/numerics/types/traits.rs
// Scalar trait shared by every numerics type.

/// Absolute tolerance used by every `approx_eq` in the crate.
pub const EPSILON: f64 = 1e-5;

/// FloatingPoint is the scalar abstraction behind the numerics types.
///
/// Only `f32` and `f64` implement it. Besides the arithmetic operators the
/// trait exposes the handful of transcendental functions the transforms and
/// tuple normalization need, so generic code never reaches for a concrete
/// float type.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug + Default
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Lossy conversion from a literal; used for constants such as `EPSILON`.
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;

    /// `EPSILON` in this precision.
    fn epsilon() -> Self {
        Self::from_f64(EPSILON)
    }

    /// True when `self` and `other` differ by at most `epsilon` (absolute).
    fn approx_eq(self, other: Self, epsilon: Self) -> bool {
        (self - other).abs() <= epsilon
    }
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn from_f64(value: f64) -> Self { value as f32 }
    fn to_f64(self) -> f64 { self as f64 }
    fn abs(self) -> Self { f32::abs(self) }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn sin(self) -> Self { f32::sin(self) }
    fn cos(self) -> Self { f32::cos(self) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn from_f64(value: f64) -> Self { value }
    fn to_f64(self) -> f64 { self }
    fn abs(self) -> Self { f64::abs(self) }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn sin(self) -> Self { f64::sin(self) }
    fn cos(self) -> Self { f64::cos(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_is_absolute() {
        assert!(1.0_f64.approx_eq(1.000_009, f64::epsilon()));
        assert!(!1.0_f64.approx_eq(1.000_02, f64::epsilon()));
        // Large magnitudes get no relative slack.
        assert!(!1.0e9_f64.approx_eq(1.0e9 + 1.0, f64::epsilon()));
    }

    #[test]
    fn test_f32_epsilon_matches_constant() {
        assert!((f32::epsilon() - 1e-5_f32).abs() < 1e-12);
        assert_eq!(<f32 as FloatingPoint>::zero(), 0.0);
        assert_eq!(<f32 as FloatingPoint>::one(), 1.0);
    }
}
