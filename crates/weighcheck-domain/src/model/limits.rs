//! Weight limit profile

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Weight limits for one jurisdiction, in pounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLimits {
    /// Jurisdiction code ("US" for the federal profile, otherwise a state code)
    pub code: Cow<'static, str>,
    /// Display name
    pub name: Cow<'static, str>,
    /// Maximum weight on any single axle
    pub single_axle: f64,
    /// Maximum combined weight of a tandem group
    pub tandem_axle: f64,
    /// Maximum combined weight of a tridem group
    pub tridem_axle: f64,
    /// Maximum gross vehicle weight
    pub gross_vehicle: f64,
    /// Whether the bridge formula applies
    pub bridge_formula_enabled: bool,
}

impl std::fmt::Display for WeightLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.name, self.code)?;
        writeln!(f, "  Single axle:     {:>9.0} lb", self.single_axle)?;
        writeln!(f, "  Tandem axle:     {:>9.0} lb", self.tandem_axle)?;
        writeln!(f, "  Tridem axle:     {:>9.0} lb", self.tridem_axle)?;
        writeln!(f, "  Gross vehicle:   {:>9.0} lb", self.gross_vehicle)?;
        write!(
            f,
            "  Bridge formula:  {}",
            if self.bridge_formula_enabled { "enabled" } else { "disabled" }
        )
    }
}
