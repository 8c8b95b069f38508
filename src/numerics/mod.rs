// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod matrix;
    pub mod point;
    pub mod traits;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub use error::MatrixError;
pub use types::matrix::Matrix;
pub use types::point::Point3;
pub use types::traits::{FloatingPoint, EPSILON};
pub use types::transform::Transform;
pub use types::tuple::{Homogeneous, HomogeneousComponents, Tuple4};
pub use types::vector::Vector3;
