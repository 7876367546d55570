//! Compliance result types

use serde::{Deserialize, Serialize};

/// Which limit a violation breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    SingleAxle,
    TandemAxle,
    TridemAxle,
    GrossWeight,
    BridgeFormula,
}

impl ViolationKind {
    pub fn label(&self) -> &'static str {
        match self {
            ViolationKind::SingleAxle => "Single axle",
            ViolationKind::TandemAxle => "Tandem axle",
            ViolationKind::TridemAxle => "Tridem axle",
            ViolationKind::GrossWeight => "Gross weight",
            ViolationKind::BridgeFormula => "Bridge formula",
        }
    }

    /// Axle-level violations are tied to a specific axle or axle group
    pub fn is_axle_level(&self) -> bool {
        matches!(
            self,
            ViolationKind::SingleAxle | ViolationKind::TandemAxle | ViolationKind::TridemAxle
        )
    }
}

/// One exceeded limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub actual: f64,
    pub limit: f64,
    pub over_weight: f64,
    /// First axle of the offending group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_index: Option<usize>,
}

impl Violation {
    pub fn new(kind: ViolationKind, actual: f64, limit: f64, axle_index: Option<usize>) -> Self {
        Self {
            kind,
            actual,
            limit,
            over_weight: (actual - limit).max(0.0),
            axle_index,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceDetails {
    pub axle_violations: Vec<Violation>,
    pub gross_violation: bool,
    pub bridge_formula_violation: bool,
}

/// Outcome of one compliance evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub is_compliant: bool,
    pub violations: Vec<Violation>,
    pub max_allowed_weight: f64,
    pub over_weight: f64,
    pub details: ComplianceDetails,
}

/// Status stored alongside a weigh ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    /// Axle-level violations only, gross weight within the allowed maximum
    Warning,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

impl ComplianceStatus {
    pub fn from_result(result: &ComplianceResult) -> Self {
        if result.is_compliant {
            ComplianceStatus::Compliant
        } else if result.over_weight > 0.0
            || result.details.gross_violation
            || result.details.bridge_formula_violation
        {
            ComplianceStatus::NonCompliant
        } else {
            ComplianceStatus::Warning
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::Warning => "Warning",
            ComplianceStatus::NonCompliant => "Non-Compliant",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(violations: Vec<Violation>, over_weight: f64) -> ComplianceResult {
        let details = ComplianceDetails {
            axle_violations: violations
                .iter()
                .filter(|v| v.kind.is_axle_level())
                .cloned()
                .collect(),
            gross_violation: violations.iter().any(|v| v.kind == ViolationKind::GrossWeight),
            bridge_formula_violation: violations
                .iter()
                .any(|v| v.kind == ViolationKind::BridgeFormula),
        };
        ComplianceResult {
            is_compliant: violations.is_empty(),
            violations,
            max_allowed_weight: 80000.0,
            over_weight,
            details,
        }
    }

    #[test]
    fn test_violation_over_weight() {
        let v = Violation::new(ViolationKind::SingleAxle, 25000.0, 20000.0, Some(2));
        assert_eq!(v.over_weight, 5000.0);
        assert_eq!(v.axle_index, Some(2));
    }

    #[test]
    fn test_status_compliant() {
        let result = result_with(vec![], 0.0);
        assert_eq!(ComplianceStatus::from_result(&result), ComplianceStatus::Compliant);
    }

    #[test]
    fn test_status_warning_for_axle_only() {
        let result = result_with(
            vec![Violation::new(ViolationKind::TandemAxle, 36000.0, 34000.0, Some(1))],
            0.0,
        );
        assert_eq!(ComplianceStatus::from_result(&result), ComplianceStatus::Warning);
    }

    #[test]
    fn test_status_non_compliant_when_over_gross() {
        let result = result_with(
            vec![Violation::new(ViolationKind::GrossWeight, 84000.0, 80000.0, None)],
            4000.0,
        );
        assert_eq!(
            ComplianceStatus::from_result(&result),
            ComplianceStatus::NonCompliant
        );
    }

    #[test]
    fn test_status_serializes_with_hyphen() {
        let json = serde_json::to_string(&ComplianceStatus::NonCompliant).unwrap();
        assert_eq!(json, "\"Non-Compliant\"");
    }

    #[test]
    fn test_violation_serializes_type_key() {
        let v = Violation::new(ViolationKind::GrossWeight, 81000.0, 80000.0, None);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "GrossWeight");
        assert!(json.get("axle_index").is_none());
    }
}
