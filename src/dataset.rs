use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::math::{Field, Field32};
use crate::normalize::{normalize, NormalizeMethod};
use crate::shape::{ShapeKind, ShapeParams};

/// Labeled SDF images in class-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    images: Vec<Field32>,
    kinds: Vec<ShapeKind>,
    height: usize,
    width: usize,
    normalization: Option<NormalizeMethod>,
}

impl Dataset {
    /// Returns the images.
    #[must_use]
    pub fn images(&self) -> &[Field32] {
        &self.images
    }

    /// Returns the shape kind of each image.
    #[must_use]
    pub fn kinds(&self) -> &[ShapeKind] {
        &self.kinds
    }

    /// Returns the integer label of each image.
    #[must_use]
    pub fn labels(&self) -> Vec<u8> {
        self.kinds.iter().map(|kind| kind.label()).collect()
    }

    /// Returns `(image count, height, width)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.images.len(), self.height, self.width)
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns whether the dataset holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Normalization applied to the images, if any.
    #[must_use]
    pub fn normalization(&self) -> Option<NormalizeMethod> {
        self.normalization
    }

    /// Iterates `(image, kind)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&Field32, ShapeKind)> + '_ {
        self.images.iter().zip(self.kinds.iter().copied())
    }

    /// Consumes the dataset, returning `(images, labels)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Field32>, Vec<u8>) {
        let labels = self.kinds.iter().map(|kind| kind.label()).collect();
        (self.images, labels)
    }
}

/// Generates a labeled SDF dataset from a [`GeneratorConfig`].
///
/// Every sample of a class uses the same shape parameters, so the samples
/// within a class are identical.
pub struct GenerateDataset {
    config: GeneratorConfig,
}

impl GenerateDataset {
    /// Creates a new `GenerateDataset` operation.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Overrides the normalization method.
    #[must_use]
    pub fn with_normalization(mut self, method: Option<NormalizeMethod>) -> Self {
        self.config.normalization = method;
        self
    }

    /// Executes the generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (including a
    /// dataset too large to index) or normalization fails (min-max on a
    /// constant image).
    pub fn execute(&self) -> Result<Dataset> {
        let config = &self.config;
        config.validate()?;

        let grid = Grid::new(config.height, config.width);
        let n = config.samples_per_class;
        debug!(
            height = config.height,
            width = config.width,
            samples_per_class = n,
            normalization = ?config.normalization,
            "generating dataset"
        );

        // Bounded by `validate`.
        let total = ShapeKind::ALL.len() * n;
        let mut images = Vec::with_capacity(total);
        let mut kinds = Vec::with_capacity(total);

        for (kind, index, field) in class_major_fields(&grid, config.shapes, n) {
            let image = match config.normalization {
                Some(method) => normalize(&field, method)?,
                None => narrow(&field),
            };
            trace!(%kind, index, "sample generated");
            images.push(image);
            kinds.push(kind);
        }

        Ok(Dataset {
            images,
            kinds,
            height: config.height,
            width: config.width,
            normalization: config.normalization,
        })
    }
}

/// Generates `n_samples_per_class` raw (unnormalized) 28x28 images per
/// shape kind with the default shape parameters.
#[must_use]
pub fn generate_dataset(n_samples_per_class: usize) -> Dataset {
    let config = GeneratorConfig::default();
    let grid = Grid::new(config.height, config.width);
    let (images, kinds) = class_major_fields(&grid, config.shapes, n_samples_per_class)
        .map(|(kind, _, field)| (narrow(&field), kind))
        .unzip();
    Dataset {
        images,
        kinds,
        height: config.height,
        width: config.width,
        normalization: None,
    }
}

/// Yields `(kind, sample index, raw field)` for every sample, all samples of
/// one kind before the next, in label order.
fn class_major_fields(
    grid: &Grid,
    params: ShapeParams,
    samples_per_class: usize,
) -> impl Iterator<Item = (ShapeKind, usize, Field)> + '_ {
    let offset = params.offset();
    ShapeKind::ALL.into_iter().flat_map(move |kind| {
        let shape = kind.shape(&params);
        debug!(%kind, ?shape, "generating class");
        (0..samples_per_class).map(move |index| (kind, index, shape.evaluate_offset(grid, offset)))
    })
}

#[allow(clippy::cast_possible_truncation)]
fn narrow(field: &Field) -> Field32 {
    field.map(|v| v as f32)
}
