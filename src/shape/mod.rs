mod circle;
mod hexagon;
mod square;
mod triangle;

pub use circle::sdf_circle;
pub use hexagon::sdf_hexagon;
pub use square::sdf_square;
pub use triangle::sdf_triangle;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, SdfError};
use crate::grid::Grid;
use crate::math::{Field, Vector2};

/// Shape class, doubling as the dataset label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle = 0,
    Triangle = 1,
    Square = 2,
    Hexagon = 3,
}

impl ShapeKind {
    /// All shape kinds in label order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Hexagon,
    ];

    /// Integer class index of this kind.
    #[must_use]
    pub fn label(self) -> u8 {
        self as u8
    }

    /// Lowercase name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Hexagon => "hexagon",
        }
    }

    /// Looks up a kind by label.
    #[must_use]
    pub fn from_label(label: u8) -> Option<Self> {
        Self::ALL.get(usize::from(label)).copied()
    }

    /// Builds the concrete shape of this kind from shared parameters.
    #[must_use]
    pub fn shape(self, params: &ShapeParams) -> Shape {
        match self {
            ShapeKind::Circle => Shape::Circle {
                radius: params.radius,
            },
            ShapeKind::Triangle => Shape::Triangle,
            ShapeKind::Square => Shape::Square {
                half_size: params.size,
            },
            ShapeKind::Hexagon => Shape::Hexagon {
                radius: params.radius,
            },
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = SdfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SdfError::invalid_argument(format!("unknown shape '{s}'")))
    }
}

/// Parameters shared by every shape in a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Circle and hexagon radius.
    pub radius: f64,
    /// Square half side.
    pub size: f64,
    /// Added to the X coordinate before evaluation.
    pub offset_x: f64,
    /// Added to the Y coordinate before evaluation.
    pub offset_y: f64,
}

impl ShapeParams {
    /// Offset applied to grid coordinates.
    #[must_use]
    pub fn offset(&self) -> Vector2 {
        Vector2::new(self.offset_x, self.offset_y)
    }
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            size: 0.5,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// A shape with its parameters, evaluable as a signed distance field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Triangle,
    Square { half_size: f64 },
    Hexagon { radius: f64 },
}

impl Shape {
    /// Returns the kind (label) of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Triangle => ShapeKind::Triangle,
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Hexagon { .. } => ShapeKind::Hexagon,
        }
    }

    /// Signed distance at a single point.
    #[must_use]
    pub fn distance(&self, x: f64, y: f64) -> f64 {
        match *self {
            Shape::Circle { radius } => sdf_circle(x, y, radius),
            Shape::Triangle => sdf_triangle(x, y),
            Shape::Square { half_size } => sdf_square(x, y, half_size),
            Shape::Hexagon { radius } => sdf_hexagon(x, y, radius),
        }
    }

    /// Evaluates the field over every grid cell.
    #[must_use]
    pub fn evaluate(&self, grid: &Grid) -> Field {
        grid.map(|x, y| self.distance(x, y))
    }

    /// Evaluates the field with `offset` added to each coordinate.
    #[must_use]
    pub fn evaluate_offset(&self, grid: &Grid, offset: Vector2) -> Field {
        grid.map(|x, y| self.distance(x + offset.x, y + offset.y))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grid::build_grid;

    #[test]
    fn labels_follow_declaration_order() {
        let labels: Vec<u8> = ShapeKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec![0, 1, 2, 3]);
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ShapeKind::from_label(4), None);
    }

    #[test]
    fn parse_names() {
        assert_eq!("hexagon".parse::<ShapeKind>().unwrap(), ShapeKind::Hexagon);
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_unknown_name_is_invalid_argument() {
        let err = "pentagon".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(
            err,
            SdfError::Argument(crate::error::ArgumentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn every_shape_center_is_inside() {
        let params = ShapeParams::default();
        for kind in ShapeKind::ALL {
            let shape = kind.shape(&params);
            assert_eq!(shape.kind(), kind);
            let d = shape.distance(0.0, 0.0);
            assert!(d < 0.0, "{kind} center distance {d} not inside");
        }
    }

    #[test]
    fn grid_center_pixel_is_inside() {
        let grid = build_grid(28, 28);
        let params = ShapeParams::default();
        for kind in ShapeKind::ALL {
            let field = kind.shape(&params).evaluate(&grid);
            assert_eq!(field.shape(), (28, 28));
            assert!(field[(14, 14)] < 0.0, "{kind} not inside at center");
            // Corners of the image are outside every shape.
            assert!(field[(0, 0)] > 0.0, "{kind} inside at corner");
        }
    }

    #[test]
    fn evaluate_matches_pointwise_distance() {
        let grid = build_grid(7, 5);
        let shape = Shape::Hexagon { radius: 0.4 };
        let field = shape.evaluate(&grid);
        for i in 0..7 {
            for j in 0..5 {
                let expected = shape.distance(grid.x()[(i, j)], grid.y()[(i, j)]);
                assert!((field[(i, j)] - expected).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn offset_shifts_coordinates() {
        let grid = build_grid(28, 28);
        let shape = Shape::Circle { radius: 0.5 };
        let shifted = shape.evaluate_offset(&grid, Vector2::new(0.5, 0.0));
        // Pixel row 7 has x = -0.5; shifted by +0.5 it sits on the center.
        assert!((shifted[(7, 14)] + 0.5).abs() < 1e-12);

        let zero = shape.evaluate_offset(&grid, Vector2::zeros());
        assert_eq!(zero, shape.evaluate(&grid));
    }

    #[test]
    fn triangle_is_not_transpose_symmetric() {
        let grid = build_grid(28, 28);
        let field = Shape::Triangle.evaluate(&grid);
        assert_ne!(field, field.transpose());
    }
}
