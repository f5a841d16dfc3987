/// Rounds `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Scales counts into `0.0..=1.0` relative to the largest count, rounded to
/// three decimals. Returns all zeros when every count is zero.
pub fn normalize(counts: &[u64]) -> Vec<f64> {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; counts.len()];
    }

    counts
        .iter()
        .map(|&c| round_to(c as f64 / max as f64, 3))
        .collect()
}
