//! Single-game winner draw.

use rand::Rng;

/// Draw a winner for one game between strengths `s1` and `s2`.
///
/// Returns true if side 1 wins. Pairwise comparison model: side 1 wins with
/// probability `s1 / (s1 + s2)`: deliberately simple and monotonic in
/// relative strength. A non-positive strength sum (both lookups missed or
/// degenerate inputs) resolves as a fair coin rather than dividing by zero.
pub fn simulate_game<R: Rng>(rng: &mut R, s1: f64, s2: f64) -> bool {
    let total = s1 + s2;
    let p1 = if total > 0.0 { s1 / total } else { 0.5 };
    rng.gen::<f64>() < p1
}
