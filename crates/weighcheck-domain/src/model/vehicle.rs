//! Vehicle and axle configuration

use serde::{Deserialize, Serialize};
use weighcheck_types::ConfigurationError;

/// Body type of the weighed vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    #[default]
    Semi,
    Dump,
    Tanker,
    Flatbed,
    Box,
    Other,
}

impl VehicleType {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Semi => "semi",
            VehicleType::Dump => "dump",
            VehicleType::Tanker => "tanker",
            VehicleType::Flatbed => "flatbed",
            VehicleType::Box => "box",
            VehicleType::Other => "other",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "semi" => Ok(VehicleType::Semi),
            "dump" => Ok(VehicleType::Dump),
            "tanker" => Ok(VehicleType::Tanker),
            "flatbed" => Ok(VehicleType::Flatbed),
            "box" => Ok(VehicleType::Box),
            "other" | "" => Ok(VehicleType::Other),
            other => Err(format!(
                "unknown vehicle type '{}' (semi, dump, tanker, flatbed, box, other)",
                other
            )),
        }
    }
}

/// Axle layout and per-axle weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxleConfig {
    pub axle_count: usize,
    /// Distance between consecutive axles in feet, `axle_count - 1` entries
    pub axle_spacing: Vec<f64>,
    /// Weight on each axle in pounds, `axle_count` entries
    pub axle_weights: Vec<f64>,
}

impl AxleConfig {
    pub fn new(axle_weights: Vec<f64>, axle_spacing: Vec<f64>) -> Self {
        Self {
            axle_count: axle_weights.len(),
            axle_spacing,
            axle_weights,
        }
    }

    /// Sum of all inter-axle spacings
    pub fn total_span(&self) -> f64 {
        self.axle_spacing.iter().sum()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.axle_count == 0 {
            return Err(ConfigurationError::NoAxles);
        }
        if self.axle_weights.len() != self.axle_count {
            return Err(ConfigurationError::WeightCountMismatch {
                expected: self.axle_count,
                actual: self.axle_weights.len(),
            });
        }
        if self.axle_spacing.len() != self.axle_count - 1 {
            return Err(ConfigurationError::SpacingCountMismatch {
                axle_count: self.axle_count,
                expected: self.axle_count - 1,
                actual: self.axle_spacing.len(),
            });
        }
        if let Some((index, &weight)) = self
            .axle_weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(ConfigurationError::InvalidAxleWeight { index, weight });
        }
        if let Some((index, &spacing)) = self
            .axle_spacing
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s <= 0.0)
        {
            return Err(ConfigurationError::InvalidSpacing { index, spacing });
        }
        Ok(())
    }
}

/// A vehicle as presented at the scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    #[serde(rename = "type", default)]
    pub vehicle_type: VehicleType,
    pub axles: AxleConfig,
    /// Overall vehicle length in feet
    pub total_length: f64,
    /// Gross weight in pounds, reported independently of the axle readings
    pub gross_weight: f64,
}

impl VehicleConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.axles.validate()?;
        if !self.gross_weight.is_finite() || self.gross_weight < 0.0 {
            return Err(ConfigurationError::InvalidGrossWeight(self.gross_weight));
        }
        if !self.total_length.is_finite() || self.total_length < 0.0 {
            return Err(ConfigurationError::InvalidTotalLength(self.total_length));
        }
        Ok(())
    }
}
