/// Signed distance from `(x, y)` to a circle of `radius` centered at the
/// origin.
#[must_use]
pub fn sdf_circle(x: f64, y: f64, radius: f64) -> f64 {
    (x * x + y * y).sqrt() - radius
}
