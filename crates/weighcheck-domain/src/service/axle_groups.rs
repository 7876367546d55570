//! Axle group identification
//!
//! Splits an axle configuration into the weight checks that apply to it:
//! every axle on its own, plus tandem and tridem groups whose axles sit
//! within [`GROUP_SPACING_FT`] of each other.

use serde::Serialize;

use crate::model::{AxleConfig, ViolationKind, WeightLimits};

/// Maximum span in feet for consecutive axles to count as a group
pub const GROUP_SPACING_FT: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxleGroupKind {
    Single,
    Tandem,
    Tridem,
}

impl AxleGroupKind {
    pub fn limit(&self, limits: &WeightLimits) -> f64 {
        match self {
            AxleGroupKind::Single => limits.single_axle,
            AxleGroupKind::Tandem => limits.tandem_axle,
            AxleGroupKind::Tridem => limits.tridem_axle,
        }
    }

    pub fn violation_kind(&self) -> ViolationKind {
        match self {
            AxleGroupKind::Single => ViolationKind::SingleAxle,
            AxleGroupKind::Tandem => ViolationKind::TandemAxle,
            AxleGroupKind::Tridem => ViolationKind::TridemAxle,
        }
    }
}

/// One weight check: a single axle or a run of grouped axles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxleGroup {
    pub kind: AxleGroupKind,
    pub first_axle: usize,
    pub weight: f64,
}

pub fn single_axles(axles: &AxleConfig) -> Vec<AxleGroup> {
    axles
        .axle_weights
        .iter()
        .enumerate()
        .map(|(i, &weight)| AxleGroup {
            kind: AxleGroupKind::Single,
            first_axle: i,
            weight,
        })
        .collect()
}

pub fn tandem_groups(axles: &AxleConfig) -> Vec<AxleGroup> {
    axles
        .axle_weights
        .windows(2)
        .zip(&axles.axle_spacing)
        .enumerate()
        .filter(|(_, (_, spacing))| **spacing <= GROUP_SPACING_FT)
        .map(|(i, (pair, _))| AxleGroup {
            kind: AxleGroupKind::Tandem,
            first_axle: i,
            weight: pair.iter().sum(),
        })
        .collect()
}

pub fn tridem_groups(axles: &AxleConfig) -> Vec<AxleGroup> {
    axles
        .axle_weights
        .windows(3)
        .zip(axles.axle_spacing.windows(2))
        .enumerate()
        .filter(|(_, (_, spans))| spans.iter().sum::<f64>() <= GROUP_SPACING_FT)
        .map(|(i, (triple, _))| AxleGroup {
            kind: AxleGroupKind::Tridem,
            first_axle: i,
            weight: triple.iter().sum(),
        })
        .collect()
}

/// All checks in evaluation order: singles, then tandems, then tridems.
///
/// Groups overlap freely; axle 2 can appear in both the (1,2) and (2,3)
/// tandem checks.
pub fn analyze_axle_groups(axles: &AxleConfig) -> Vec<AxleGroup> {
    let mut groups = single_axles(axles);
    groups.extend(tandem_groups(axles));
    groups.extend(tridem_groups(axles));
    groups
}
