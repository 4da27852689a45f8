/// Apothem direction component, `sqrt(3)/2` truncated to six places.
const HEX_K: f64 = 0.866_025;

/// Signed distance bound for a hexagon of `radius` centered at the origin.
///
/// Both axes are folded onto the first quadrant and the field is the
/// larger of the slanted half-plane `HEX_K * x + y/2` and the flat `y`
/// half-plane, minus `radius`.
#[must_use]
pub fn sdf_hexagon(x: f64, y: f64, radius: f64) -> f64 {
    let px = x.abs();
    let py = y.abs();
    (HEX_K * px + 0.5 * py).max(py) - radius
}
