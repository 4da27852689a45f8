use crate::math::Field;

/// Normalized sampling grid over image pixel coordinates.
///
/// Both coordinate fields have shape `height x width`. `x` varies along the
/// row axis and `y` along the column axis, so `x[(i, j)]` depends only on
/// `i` and `y[(i, j)]` only on `j`. Each axis maps pixel index `p` of an
/// axis of length `n` to `(p - n/2) / (n/2)`: index 0 lands on `-1` and the
/// last index lands just below `+1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Field,
    y: Field,
}

impl Grid {
    /// Builds the grid for an image of `height` rows and `width` columns.
    ///
    /// A zero-length axis yields an empty grid.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        let x = Field::from_fn(height, width, |i, _| axis_coord(i, height));
        let y = Field::from_fn(height, width, |_, j| axis_coord(j, width));
        Self { x, y }
    }

    /// Returns the X coordinate field.
    #[must_use]
    pub fn x(&self) -> &Field {
        &self.x
    }

    /// Returns the Y coordinate field.
    #[must_use]
    pub fn y(&self) -> &Field {
        &self.y
    }

    /// Returns `(height, width)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Evaluates `f(x, y)` at every grid cell, producing a field of the
    /// grid's shape.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Field
    where
        F: Fn(f64, f64) -> f64,
    {
        self.x.zip_map(&self.y, f)
    }
}

/// Builds the normalized coordinate grid for an `height x width` image.
#[must_use]
pub fn build_grid(height: usize, width: usize) -> Grid {
    Grid::new(height, width)
}

#[allow(clippy::cast_precision_loss)]
fn axis_coord(pixel: usize, len: usize) -> f64 {
    let half = len as f64 / 2.0;
    (pixel as f64 - half) / half
}
