//! Federal bridge formula
//!
//! `W = 500 * (L*N / (N-1) + 12*N + 36)` where `L` is the span in feet
//! between the outer axles of the group and `N` the number of axles.

use crate::constants::FEDERAL;
use crate::model::WeightLimits;

/// Bridge formula maximum using federal limits for the single-axle case
pub fn bridge_formula_max(length: f64, axle_count: usize) -> f64 {
    bridge_formula_limit(&FEDERAL, length, axle_count)
}

/// Bridge formula maximum, falling back to `limits.single_axle` below two axles
pub fn bridge_formula_limit(limits: &WeightLimits, length: f64, axle_count: usize) -> f64 {
    if axle_count < 2 {
        return limits.single_axle;
    }
    let n = axle_count as f64;
    500.0 * ((length * n) / (n - 1.0) + 12.0 * n + 36.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::lookup;

    #[test]
    fn test_tandem_at_eight_feet() {
        assert_eq!(bridge_formula_max(8.0, 2), 38000.0);
    }

    #[test]
    fn test_five_axles_at_51_feet() {
        // 500 * (51*5/4 + 60 + 36)
        assert_eq!(bridge_formula_max(51.0, 5), 79875.0);
    }

    #[test]
    fn test_guard_returns_single_axle_limit() {
        assert_eq!(bridge_formula_max(40.0, 1), FEDERAL.single_axle);
        assert_eq!(bridge_formula_max(0.0, 0), FEDERAL.single_axle);
    }

    #[test]
    fn test_guard_uses_profile_single_axle() {
        let ny = lookup(Some("NY"));
        assert_eq!(bridge_formula_limit(ny, 10.0, 1), 22400.0);
    }

    #[test]
    fn test_grows_with_span() {
        assert!(bridge_formula_max(40.0, 4) > bridge_formula_max(30.0, 4));
    }
}
