/// Rounds to two decimals, half away from zero, with a small epsilon folded in first so
/// binary floating-point representations of exact cents do not truncate downward
/// (e.g. `2.675` must surface as `2.68`, not `2.67`).
pub(crate) fn round2(value: f64) -> f64 {
    ((value + 1e-9) * 100.0).round() / 100.0
}
