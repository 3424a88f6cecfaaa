use super::bounds::Bounds;

/// Maps a raw area onto [0, 1], where 1 matches the best bound.
///
/// Smaller areas are better, so the map is inverted. A lost game scores
/// exactly 0, as does a configuration whose bounds have collapsed.
pub fn normalize(raw_area: f64, bounds: &Bounds, game_won: bool) -> f64 {
    if !game_won || !raw_area.is_finite() {
        return 0.0;
    }

    let span = bounds.worst - bounds.best;
    if !(span > 0.0) {
        return 0.0;
    }

    ((bounds.worst - raw_area) / span).clamp(0.0, 1.0)
}
