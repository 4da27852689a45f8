pub mod config;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod math;
pub mod normalize;
pub mod shape;
pub mod stats;

pub use config::GeneratorConfig;
pub use dataset::{generate_dataset, Dataset, GenerateDataset};
pub use error::{Result, SdfError};
pub use grid::{build_grid, Grid};
pub use normalize::{normalize, NormalizeMethod};
pub use shape::{Shape, ShapeKind, ShapeParams};
