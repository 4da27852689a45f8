use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{NormalizeError, Result, SdfError};
use crate::math::{Field, Field32};

/// Steepness of the sigmoid transition around the boundary.
const SIGMOID_SCALE: f64 = 5.0;

/// Steepness of the tanh transition around the boundary.
const TANH_SCALE: f64 = 2.0;

/// Distance magnitude mapped onto the ends of `[0, 1]` by [`NormalizeMethod::Clamp`].
const CLAMP_LIMIT: f64 = 2.0;

/// Strategy for mapping raw signed distances into `[0, 1]`.
///
/// `Sigmoid`, `Tanh` and `Clamp` are fixed pointwise maps with the boundary
/// (`d = 0`) landing on `0.5`; inside pixels map above it for the first two
/// and below it for `Clamp`. `MinMax` rescales each field independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMethod {
    Sigmoid,
    Tanh,
    MinMax,
    Clamp,
}

impl NormalizeMethod {
    /// All methods, in documentation order.
    pub const ALL: [NormalizeMethod; 4] = [
        NormalizeMethod::Sigmoid,
        NormalizeMethod::Tanh,
        NormalizeMethod::MinMax,
        NormalizeMethod::Clamp,
    ];

    /// Lowercase name of this method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NormalizeMethod::Sigmoid => "sigmoid",
            NormalizeMethod::Tanh => "tanh",
            NormalizeMethod::MinMax => "minmax",
            NormalizeMethod::Clamp => "clamp",
        }
    }
}

impl fmt::Display for NormalizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalizeMethod {
    type Err = SdfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| {
                SdfError::invalid_argument(format!(
                    "unknown normalization method '{s}' (expected sigmoid, tanh, minmax or clamp)"
                ))
            })
    }
}

/// Sigmoid map: `1 / (1 + exp(5d))`.
#[must_use]
pub fn sigmoid(d: f64) -> f64 {
    1.0 / (1.0 + (d * SIGMOID_SCALE).exp())
}

/// Tanh map: `(tanh(-2d) + 1) / 2`.
#[must_use]
pub fn tanh(d: f64) -> f64 {
    ((-d * TANH_SCALE).tanh() + 1.0) / 2.0
}

/// Clamp map: clip to `[-2, 2]`, then `(d + 2) / 4`.
#[must_use]
pub fn clamp(d: f64) -> f64 {
    (d.clamp(-CLAMP_LIMIT, CLAMP_LIMIT) + CLAMP_LIMIT) / (2.0 * CLAMP_LIMIT)
}

/// Normalizes a raw distance field into `[0, 1]` and narrows it to `f32`.
///
/// # Errors
///
/// [`NormalizeMethod::MinMax`] fails with [`NormalizeError::DegenerateInput`]
/// when every value is equal, with [`NormalizeError::NonFiniteRange`] when
/// `max - min` overflows or is NaN, and with [`NormalizeError::Empty`] when
/// the field has no cells. The pointwise methods never fail.
#[allow(clippy::cast_possible_truncation)]
pub fn normalize(field: &Field, method: NormalizeMethod) -> Result<Field32> {
    let normalized = match method {
        NormalizeMethod::Sigmoid => field.map(sigmoid),
        NormalizeMethod::Tanh => field.map(tanh),
        NormalizeMethod::Clamp => field.map(clamp),
        NormalizeMethod::MinMax => min_max(field)?,
    };
    Ok(normalized.map(|v| v as f32))
}

fn min_max(field: &Field) -> Result<Field> {
    if field.is_empty() {
        return Err(NormalizeError::Empty.into());
    }
    let min = field.min();
    let max = field.max();
    let range = max - min;
    if !range.is_finite() {
        return Err(NormalizeError::NonFiniteRange { min, max }.into());
    }
    if range <= 0.0 {
        return Err(NormalizeError::DegenerateInput { value: min }.into());
    }
    Ok(field.map(|v| (v - min) / range))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(values: &[f64]) -> Field {
        Field::from_row_slice(1, values.len(), values)
    }

    #[test]
    fn parse_known_methods() {
        assert_eq!("sigmoid".parse::<NormalizeMethod>().unwrap(), NormalizeMethod::Sigmoid);
        assert_eq!("tanh".parse::<NormalizeMethod>().unwrap(), NormalizeMethod::Tanh);
        assert_eq!("minmax".parse::<NormalizeMethod>().unwrap(), NormalizeMethod::MinMax);
        assert_eq!("clamp".parse::<NormalizeMethod>().unwrap(), NormalizeMethod::Clamp);
    }

    #[test]
    fn parse_unknown_method_is_invalid_argument() {
        for name in ["", "Sigmoid", "softmax", "min-max"] {
            let err = name.parse::<NormalizeMethod>().unwrap_err();
            assert!(
                matches!(err, SdfError::Argument(_)),
                "'{name}' gave {err:?}"
            );
        }
    }

    #[test]
    fn boundary_maps_to_half() {
        for method in [
            NormalizeMethod::Sigmoid,
            NormalizeMethod::Tanh,
            NormalizeMethod::Clamp,
        ] {
            let out = normalize(&row(&[0.0]), method).unwrap();
            assert_relative_eq!(out[(0, 0)], 0.5_f32);
        }
    }

    #[test]
    fn sigmoid_and_tanh_strictly_decrease() {
        let samples: Vec<f64> = (-40..=40).map(|i| f64::from(i) * 0.05).collect();
        for f in [sigmoid as fn(f64) -> f64, tanh] {
            for pair in samples.windows(2) {
                assert!(
                    f(pair[1]) < f(pair[0]),
                    "not decreasing between {} and {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn sigmoid_and_tanh_stay_in_unit_range() {
        let field = row(&[-3.0, -0.5, 0.0, 0.5, 3.0]);
        for method in [NormalizeMethod::Sigmoid, NormalizeMethod::Tanh] {
            let out = normalize(&field, method).unwrap();
            assert!(out.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn clamp_mapping() {
        let out = normalize(&row(&[-2.0, 0.0, 2.0, 5.0, -7.0]), NormalizeMethod::Clamp).unwrap();
        assert_relative_eq!(out[(0, 0)], 0.0_f32);
        assert_relative_eq!(out[(0, 1)], 0.5_f32);
        assert_relative_eq!(out[(0, 2)], 1.0_f32);
        assert_relative_eq!(out[(0, 3)], 1.0_f32);
        assert_relative_eq!(out[(0, 4)], 0.0_f32);
    }

    #[test]
    fn minmax_fills_unit_range() {
        let out = normalize(&row(&[-0.5, 0.0, 1.5]), NormalizeMethod::MinMax).unwrap();
        assert_relative_eq!(out[(0, 0)], 0.0_f32);
        assert_relative_eq!(out[(0, 1)], 0.25_f32);
        assert_relative_eq!(out[(0, 2)], 1.0_f32);
    }

    #[test]
    fn minmax_on_constant_field_is_degenerate() {
        let zeros = Field::zeros(28, 28);
        let err = normalize(&zeros, NormalizeMethod::MinMax).unwrap_err();
        assert!(matches!(
            err,
            SdfError::Normalize(NormalizeError::DegenerateInput { value }) if value == 0.0
        ));
    }

    #[test]
    fn minmax_overflowing_range_is_not_reported_as_constant() {
        let field = row(&[-1e308, 1e308]);
        let err = normalize(&field, NormalizeMethod::MinMax).unwrap_err();
        assert!(
            matches!(
                err,
                SdfError::Normalize(NormalizeError::NonFiniteRange { min, max })
                    if min < 0.0 && max > 0.0
            ),
            "{err:?}"
        );
        assert!(!err.to_string().contains("every value equals"), "{err}");
    }

    #[test]
    fn minmax_on_empty_field_is_rejected() {
        let empty = Field::zeros(0, 0);
        let err = normalize(&empty, NormalizeMethod::MinMax).unwrap_err();
        assert!(matches!(err, SdfError::Normalize(NormalizeError::Empty)));
    }

    #[test]
    fn pointwise_methods_accept_empty_field() {
        let empty = Field::zeros(0, 3);
        let out = normalize(&empty, NormalizeMethod::Sigmoid).unwrap();
        assert_eq!(out.shape(), (0, 3));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn output_keeps_shape() {
        let field = Field::from_fn(4, 6, |i, j| (i * 6 + j) as f64 * 0.1 - 1.0);
        for method in NormalizeMethod::ALL {
            assert_eq!(normalize(&field, method).unwrap().shape(), (4, 6));
        }
    }
}
