use super::curve::{CurvePoint, EfficiencyCurve};

/// Area contributed by one segment of the curve.
///
/// Only segments that gain information count, as a trapezoid over the
/// cost they spent. Flat segments (wrong guesses) and the terminal marker
/// contribute nothing.
#[inline(always)]
pub fn segment_area(prev: &CurvePoint, curr: &CurvePoint) -> f64 {
    if curr.y > prev.y {
        (curr.x - prev.x) * (prev.y + curr.y) / 2.0
    } else {
        0.0
    }
}

/// Area under the efficiency curve.
pub fn integrate(curve: &EfficiencyCurve) -> f64 {
    curve.segments().map(|(a, b)| segment_area(a, b)).sum()
}
