//! RGB colors with floating point channels.
//!
//! Channels are nominally in `[0, 1]` but are not clamped; out-of-range values
//! survive arithmetic and are only clamped when a canvas is encoded.

use core::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

use crate::numerics::types::traits::FloatingPoint;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Hadamard (Schur) product: multiply channel by channel.
    pub fn hadamard(&self, other: &Self) -> Self {
        Self::new(
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }

    /// Channel-wise comparison with an absolute tolerance of `EPSILON`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        let eps = f64::epsilon();
        self.red.approx_eq(other.red, eps)
            && self.green.approx_eq(other.green, eps)
            && self.blue.approx_eq(other.blue, eps)
    }

    /// Channels scaled to `0..=255`, rounding half to even and
    /// clamping anything outside `[0, 1]`.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            scale_channel(self.red),
            scale_channel(self.green),
            scale_channel(self.blue),
        ]
    }
}

fn scale_channel(value: f64) -> u8 {
    (value * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

impl Add for Color {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        Self::new(self.red + o.red, self.green + o.green, self.blue + o.blue)
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, o: Self) -> Self {
        Self::new(self.red - o.red, self.green - o.green, self.blue - o.blue)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.red * s, self.green * s, self.blue * s)
    }
}

impl Mul for Color {
    type Output = Self;

    fn mul(self, o: Self) -> Self {
        self.hadamard(&o)
    }
}

impl From<[f64; 3]> for Color {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}
