/// Generates a zig-zag line as interleaved `x, y` pairs.
///
/// The first point is the left top of a virtual box (1x1 unless `width` /
/// `height` are given); the last point is the right bottom for an even
/// `count` and the right top for an odd one. `count` is clamped to at
/// least 2.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_points_interleaved(
    count: usize,
    width: Option<f64>,
    height: Option<f64>,
) -> Vec<f64> {
    let count = count.max(2);
    let xscale = width.map_or(0.5, |w| w * 0.5);
    let yscale = height.map_or(0.5, |h| h * 0.5);
    let stepx = (2.0 * xscale) / (count - 1) as f64;

    let mut result = Vec::with_capacity(count * 2);
    let mut y = yscale;
    for x in 0..count {
        result.push(-xscale + x as f64 * stepx);
        result.push(y);
        y = -y;
    }
    result
}
