//! Compliance evaluation against a weight limit profile

use weighcheck_types::Result;

use crate::constants::{lookup, FEDERAL};
use crate::model::{
    ComplianceDetails, ComplianceResult, VehicleConfig, Violation, ViolationKind, WeightLimits,
};
use crate::service::axle_groups::analyze_axle_groups;
use crate::service::bridge_formula::bridge_formula_limit;

/// Evaluate a vehicle against federal limits
pub fn check_federal_compliance(vehicle: &VehicleConfig) -> Result<ComplianceResult> {
    check_compliance(vehicle, &FEDERAL)
}

/// Evaluate a vehicle against a state's limits, or federal limits for an unknown code
pub fn check_state_compliance(
    vehicle: &VehicleConfig,
    jurisdiction_code: &str,
) -> Result<ComplianceResult> {
    check_compliance(vehicle, lookup(Some(jurisdiction_code)))
}

/// Evaluate a vehicle against the given limits.
///
/// Over-limit readings are reported as violations in the result; only a
/// structurally invalid vehicle returns an error.
pub fn check_compliance(vehicle: &VehicleConfig, limits: &WeightLimits) -> Result<ComplianceResult> {
    vehicle.validate()?;

    let axles = &vehicle.axles;
    let mut violations = Vec::new();
    let mut details = ComplianceDetails::default();

    for group in analyze_axle_groups(axles) {
        let limit = group.kind.limit(limits);
        if group.weight > limit {
            let violation = Violation::new(
                group.kind.violation_kind(),
                group.weight,
                limit,
                Some(group.first_axle),
            );
            details.axle_violations.push(violation.clone());
            violations.push(violation);
        }
    }

    if vehicle.gross_weight > limits.gross_vehicle {
        violations.push(Violation::new(
            ViolationKind::GrossWeight,
            vehicle.gross_weight,
            limits.gross_vehicle,
            None,
        ));
        details.gross_violation = true;
    }

    if limits.bridge_formula_enabled && axles.axle_count >= 2 {
        let bridge_max = bridge_formula_limit(limits, axles.total_span(), axles.axle_count);
        if vehicle.gross_weight > bridge_max {
            violations.push(Violation::new(
                ViolationKind::BridgeFormula,
                vehicle.gross_weight,
                bridge_max,
                None,
            ));
            details.bridge_formula_violation = true;
        }
    }

    // Measured against the overall vehicle length, not the summed spacing above
    let max_allowed_weight = if limits.bridge_formula_enabled {
        limits
            .gross_vehicle
            .min(bridge_formula_limit(limits, vehicle.total_length, axles.axle_count))
    } else {
        limits.gross_vehicle
    };
    let over_weight = (vehicle.gross_weight - max_allowed_weight).max(0.0);

    tracing::debug!(
        jurisdiction = %limits.code,
        axles = axles.axle_count,
        gross = vehicle.gross_weight,
        violations = violations.len(),
        max_allowed_weight,
        "evaluated vehicle"
    );

    Ok(ComplianceResult {
        is_compliant: violations.is_empty(),
        violations,
        max_allowed_weight,
        over_weight,
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxleConfig, VehicleType};
    use weighcheck_types::{ConfigurationError, Error};

    fn vehicle(weights: Vec<f64>, spacing: Vec<f64>, total_length: f64) -> VehicleConfig {
        let gross_weight: f64 = weights.iter().sum();
        VehicleConfig {
            vehicle_type: VehicleType::Semi,
            axles: AxleConfig::new(weights, spacing),
            total_length,
            gross_weight,
        }
    }

    #[test]
    fn test_single_overloaded_axle() {
        let v = vehicle(vec![25000.0], vec![], 20.0);
        let result = check_federal_compliance(&v).unwrap();
        assert!(!result.is_compliant);
        assert_eq!(result.violations.len(), 1);
        let violation = &result.violations[0];
        assert_eq!(violation.kind, ViolationKind::SingleAxle);
        assert_eq!(violation.over_weight, 5000.0);
        assert_eq!(violation.axle_index, Some(0));
        assert_eq!(result.details.axle_violations, result.violations);
    }

    #[test]
    fn test_single_axle_vehicle_capped_by_single_limit() {
        // Below two axles the bridge bound is the single-axle limit
        let v = vehicle(vec![25000.0], vec![], 20.0);
        let result = check_federal_compliance(&v).unwrap();
        assert_eq!(result.max_allowed_weight, 20000.0);
        assert_eq!(result.over_weight, 5000.0);
        assert!(!result.details.bridge_formula_violation);
    }

    #[test]
    fn test_overlapping_tandems_reported_twice() {
        let v = vehicle(vec![18000.0, 18000.0, 18000.0], vec![4.0, 4.5], 40.0);
        let result = check_federal_compliance(&v).unwrap();
        let tandem_starts: Vec<Option<usize>> = result
            .violations
            .iter()
            .filter(|v| v.kind == ViolationKind::TandemAxle)
            .map(|v| v.axle_index)
            .collect();
        assert_eq!(tandem_starts, vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_violation_order() {
        let limits = WeightLimits {
            single_axle: 10000.0,
            tandem_axle: 20000.0,
            tridem_axle: 30000.0,
            gross_vehicle: 30000.0,
            ..FEDERAL.clone()
        };
        let v = vehicle(vec![12000.0, 12000.0, 12000.0], vec![4.0, 4.0], 10.0);
        let result = check_compliance(&v, &limits).unwrap();
        let kinds: Vec<ViolationKind> = result.violations.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::SingleAxle,
                ViolationKind::SingleAxle,
                ViolationKind::SingleAxle,
                ViolationKind::TandemAxle,
                ViolationKind::TandemAxle,
                ViolationKind::TridemAxle,
                ViolationKind::GrossWeight,
            ]
        );
        assert!(result.details.gross_violation);
        assert_eq!(result.details.axle_violations.len(), 6);
    }

    #[test]
    fn test_bridge_formula_disabled() {
        let mi = lookup(Some("MI"));
        let v = vehicle(vec![12000.0, 17000.0, 17000.0], vec![4.0, 4.0], 20.0);
        let result = check_compliance(&v, mi).unwrap();
        assert!(!result.details.bridge_formula_violation);
        assert_eq!(result.max_allowed_weight, mi.gross_vehicle);
    }

    #[test]
    fn test_bridge_violation_on_short_span() {
        let v = vehicle(vec![12000.0, 16000.0, 16000.0, 16000.0], vec![10.0, 4.0, 4.0], 30.0);
        // 60000 lb across an 18 ft span: 500 * (18*4/3 + 48 + 36) = 54000
        let result = check_federal_compliance(&v).unwrap();
        assert!(result.details.bridge_formula_violation);
        let bridge = result
            .violations
            .iter()
            .find(|v| v.kind == ViolationKind::BridgeFormula)
            .unwrap();
        assert_eq!(bridge.limit, 54000.0);
        assert_eq!(bridge.over_weight, 6000.0);
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let mut v = vehicle(vec![12000.0, 17000.0], vec![4.0], 20.0);
        v.axles.axle_spacing.clear();
        let err = check_federal_compliance(&v).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfiguration(ConfigurationError::SpacingCountMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_state_matches_federal() {
        let v = vehicle(vec![12000.0, 17000.0, 17000.0], vec![14.0, 4.0], 40.0);
        assert_eq!(
            check_state_compliance(&v, "ZZ").unwrap(),
            check_federal_compliance(&v).unwrap()
        );
    }
}
