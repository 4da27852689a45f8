/// Signed distance bound for an axis-aligned square with half side
/// `half_size`, centered at the origin.
///
/// Computed as `max(d, 0) + min(d, 0)` with `d = max(|x| - s, |y| - s)`,
/// which equals `d`; the split form is kept so results match the original
/// dataset bit for bit.
#[must_use]
pub fn sdf_square(x: f64, y: f64, half_size: f64) -> f64 {
    let d = (x.abs() - half_size).max(y.abs() - half_size);
    d.max(0.0) + d.min(0.0)
}
