use super::geojson::{Position, Ring};

fn round(value: f64, precision: usize) -> f64 {
    format!("{:.*}", precision, value)
        .parse()
        .unwrap_or(value)
}

fn rounded(position: &Position, precision: usize) -> (f64, f64) {
    (round(position.0, precision), round(position.1, precision))
}

/// Validate a ring and make sure its last position repeats the first.
///
/// Rings with two or fewer vertices are rejected. First and last position are
/// compared after rounding both axes to `precision` fractional digits, and
/// only when they differ the first position is appended.
pub fn close_ring(ring: &mut Ring, precision: usize) -> bool {
    if ring.len() <= 2 {
        return false;
    }
    let first = ring[0];
    let last = ring[ring.len() - 1];
    if rounded(&first, precision) != rounded(&last, precision) {
        ring.push(first);
    }
    true
}
