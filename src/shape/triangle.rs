use std::f64::consts::SQRT_2;

/// Signed distance approximation for the fixed-orientation triangle.
///
/// The x axis is folded onto its absolute value and shifted so the shape
/// sits around the origin, then the field is the larger of a slanted edge
/// plane (`sqrt(2) * x' + y'/2`) and the base plane (`-y'/2`), with
/// `x' = |x| - 0.5` and `y' = y + 0.5`. The result is a bound, not an exact
/// Euclidean distance.
#[must_use]
pub fn sdf_triangle(x: f64, y: f64) -> f64 {
    let px = x.abs() - 0.5;
    let py = y + 0.5;
    (SQRT_2 * px + 0.5 * py).max(-0.5 * py)
}
