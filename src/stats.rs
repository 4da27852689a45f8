use nalgebra::{DMatrix, Scalar};

/// Summary of a distance field or normalized image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Number of cells with a negative value (inside the shape for raw
    /// distances).
    pub inside: usize,
}

impl FieldStats {
    /// Computes statistics over every cell, or `None` for an empty field.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of<T>(field: &DMatrix<T>) -> Option<Self>
    where
        T: Scalar + Copy + Into<f64>,
    {
        if field.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut inside = 0;
        for &v in field {
            let v: f64 = v.into();
            min = min.min(v);
            max = max.max(v);
            sum += v;
            if v < 0.0 {
                inside += 1;
            }
        }
        Some(Self {
            min,
            max,
            mean: sum / field.len() as f64,
            inside,
        })
    }
}
