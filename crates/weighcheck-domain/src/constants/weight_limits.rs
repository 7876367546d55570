//! Federal and state weight limit profiles (pounds)

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::WeightLimits;

/// Federal interstate limits
pub static FEDERAL: WeightLimits = WeightLimits {
    code: Cow::Borrowed("US"),
    name: Cow::Borrowed("Federal"),
    single_axle: 20000.0,
    tandem_axle: 34000.0,
    tridem_axle: 42000.0,
    gross_vehicle: 80000.0,
    bridge_formula_enabled: true,
};

fn state(
    code: &'static str,
    name: &'static str,
    single_axle: f64,
    tandem_axle: f64,
    tridem_axle: f64,
    gross_vehicle: f64,
    bridge_formula_enabled: bool,
) -> (&'static str, WeightLimits) {
    let limits = WeightLimits {
        code: Cow::Borrowed(code),
        name: Cow::Borrowed(name),
        single_axle,
        tandem_axle,
        tridem_axle,
        gross_vehicle,
        bridge_formula_enabled,
    };
    (code, limits)
}

/// State profiles keyed by two-letter code
pub static STATE_LIMITS: LazyLock<HashMap<&'static str, WeightLimits>> = LazyLock::new(|| {
    [
        state("CA", "California", 20000.0, 34000.0, 42000.0, 80000.0, true),
        state("TX", "Texas", 20000.0, 34000.0, 42000.0, 80000.0, true),
        state("FL", "Florida", 22000.0, 44000.0, 66000.0, 80000.0, true),
        state("NY", "New York", 22400.0, 36000.0, 42000.0, 80000.0, true),
        state("OR", "Oregon", 20000.0, 34000.0, 42000.0, 105500.0, true),
        // Michigan axle limits follow its own spacing tables, not the bridge formula
        state("MI", "Michigan", 18000.0, 32000.0, 48000.0, 164000.0, false),
    ]
    .into_iter()
    .collect()
});

/// Look up the limits for a jurisdiction code.
///
/// Missing or unrecognized codes resolve to [`FEDERAL`].
pub fn lookup(code: Option<&str>) -> &'static WeightLimits {
    let Some(code) = code else {
        return &FEDERAL;
    };
    let normalized = code.trim().to_uppercase();
    if normalized == FEDERAL.code {
        return &FEDERAL;
    }
    match STATE_LIMITS.get(normalized.as_str()) {
        Some(limits) => limits,
        None => {
            tracing::debug!(code, "unknown jurisdiction, using federal limits");
            &FEDERAL
        }
    }
}

/// All known profiles, federal first then states by code
pub fn jurisdictions() -> Vec<&'static WeightLimits> {
    let mut states: Vec<&'static WeightLimits> = STATE_LIMITS.values().collect();
    states.sort_by(|a, b| a.code.cmp(&b.code));
    std::iter::once(&FEDERAL).chain(states).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_none_is_federal() {
        assert_eq!(lookup(None), &FEDERAL);
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        assert_eq!(lookup(Some("ZZ")), &FEDERAL);
        assert_eq!(lookup(Some("")), &FEDERAL);
    }

    #[test]
    fn test_lookup_state_case_insensitive() {
        let limits = lookup(Some(" mi "));
        assert_eq!(limits.code, "MI");
        assert!(!limits.bridge_formula_enabled);
    }

    #[test]
    fn test_federal_values() {
        assert_eq!(FEDERAL.single_axle, 20000.0);
        assert_eq!(FEDERAL.tandem_axle, 34000.0);
        assert_eq!(FEDERAL.tridem_axle, 42000.0);
        assert_eq!(FEDERAL.gross_vehicle, 80000.0);
        assert!(FEDERAL.bridge_formula_enabled);
    }

    #[test]
    fn test_jurisdictions_ordering() {
        let all = jurisdictions();
        assert_eq!(all.len(), STATE_LIMITS.len() + 1);
        assert_eq!(all[0].code, "US");
        assert!(all[1..].windows(2).all(|w| w[0].code < w[1].code));
    }
}
