//! lumen: a small homogeneous-geometry kernel.
//!
//! - [`numerics`]: points, vectors and 4-tuples, a dense matrix engine
//!   (determinant, cofactors, inverse) and 4x4 affine transforms
//! - [`canvas`]: a pixel grid with PPM encoding, written to disk by [`io`]
//! - [`physics`]: a projectile simulation that paints into a canvas

pub mod canvas;
pub mod color;
pub mod io;
pub mod numerics;
pub mod physics;

pub use canvas::{Canvas, CanvasError};
pub use color::Color;
pub use numerics::{Homogeneous, Matrix, MatrixError, Point3, Transform, Tuple4, Vector3};
