//! Compliance Service - use cases behind the CLI
//!
//! 1. Resolve the jurisdiction (explicit, configured default, federal)
//! 2. Load the vehicle or weigh tickets
//! 3. Evaluate with the domain compliance checker
//! 4. Return results with derived ticket status

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use weighcheck_domain::constants::lookup;
use weighcheck_domain::model::{ComplianceResult, ComplianceStatus, VehicleConfig};
use weighcheck_domain::service::{check_compliance, check_tickets, BatchSummary, TicketOutcome};
use weighcheck_infra::load_tickets;
use weighcheck_types::Result;

use crate::config::Config;

/// Evaluation of one vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleCheck {
    pub jurisdiction: String,
    pub jurisdiction_name: String,
    pub status: ComplianceStatus,
    pub result: ComplianceResult,
}

/// Results of checking a ticket file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRun {
    pub source: PathBuf,
    pub started_at: DateTime<Utc>,
    pub default_jurisdiction: Option<String>,
    pub summary: BatchSummary,
    pub outcomes: Vec<TicketOutcome>,
}

impl BatchRun {
    pub fn has_non_compliant(&self) -> bool {
        self.summary.non_compliant > 0
    }
}

/// Evaluate a single vehicle
pub fn check_vehicle(
    config: &Config,
    vehicle: &VehicleConfig,
    jurisdiction: Option<&str>,
) -> Result<VehicleCheck> {
    let limits = lookup(config.resolve_jurisdiction(jurisdiction));
    let result = check_compliance(vehicle, limits)?;
    Ok(VehicleCheck {
        jurisdiction: limits.code.to_string(),
        jurisdiction_name: limits.name.to_string(),
        status: ComplianceStatus::from_result(&result),
        result,
    })
}

/// Load and evaluate every ticket in a CSV file
pub fn run_batch(config: &Config, csv_path: &Path, jurisdiction: Option<&str>) -> Result<BatchRun> {
    let started_at = Utc::now();
    let default_jurisdiction = config.resolve_jurisdiction(jurisdiction);
    let tickets = load_tickets(csv_path)?;
    let outcomes = check_tickets(&tickets, default_jurisdiction);
    let summary = BatchSummary::from_outcomes(&outcomes);

    tracing::info!(
        total = summary.total,
        non_compliant = summary.non_compliant,
        invalid = summary.invalid,
        "batch checked"
    );

    Ok(BatchRun {
        source: csv_path.to_path_buf(),
        started_at,
        default_jurisdiction: default_jurisdiction.map(str::to_string),
        summary,
        outcomes,
    })
}
