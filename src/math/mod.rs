/// Dense 2D field of `f64` values indexed `(row, col)`; rows run along image height.
pub type Field = nalgebra::DMatrix<f64>;

/// Field of `f32` values, the storage type for dataset images.
pub type Field32 = nalgebra::DMatrix<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for comparing computed coordinates and distances.
pub const TOLERANCE: f64 = 1e-12;
