/// Matrix3D Core Library - 4x4 transform toolkit for perspective view effects
///
/// This library provides the stateless matrix math behind rotating and
/// perspective-transformed views: flat column-major 4x4 primitives, composite
/// rotations, pivoted transforms, orthographic projection and a nested-array
/// multiply for the 3x3 point path.

pub mod css;
pub mod error;
pub mod matrix;
pub mod matrix2d;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use css::parse_matrix3d;
pub use error::{MatrixError, MatrixResult, Operand};
pub use matrix::Matrix4;
pub use matrix2d::{multiply_2d, Matrix2D};
pub use nalgebra::Point3;
pub use projection::{project_orthographic, OrthographicBounds};
pub use transform::{rotate_xyz, transform_around_origin, Block, RotationState, TransformBuilder};
