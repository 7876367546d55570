//! Batch compliance checking of weigh tickets

use serde::{Deserialize, Serialize};

use crate::constants::lookup;
use crate::model::{ComplianceResult, ComplianceStatus, WeighTicket};
use crate::service::compliance_checker::check_compliance;

/// Result of compliance check for a single ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketOutcome {
    pub ticket: WeighTicket,
    /// Code of the profile the ticket was evaluated against
    pub jurisdiction: String,
    pub result: Option<ComplianceResult>,
    pub status: Option<ComplianceStatus>,
    /// Validation error for tickets that could not be evaluated
    pub error: Option<String>,
}

impl TicketOutcome {
    pub fn is_invalid(&self) -> bool {
        self.result.is_none()
    }
}

/// Evaluate every ticket against its recorded jurisdiction, or `default_jurisdiction`
pub fn check_tickets(tickets: &[WeighTicket], default_jurisdiction: Option<&str>) -> Vec<TicketOutcome> {
    tickets
        .iter()
        .map(|ticket| {
            let code = ticket.jurisdiction.as_deref().or(default_jurisdiction);
            let limits = lookup(code);
            let (result, status, error) = match check_compliance(&ticket.vehicle, limits) {
                Ok(result) => {
                    let status = ComplianceStatus::from_result(&result);
                    (Some(result), Some(status), None)
                }
                Err(e) => {
                    tracing::warn!(ticket = %ticket.ticket_number, error = %e, "ticket skipped");
                    (None, None, Some(e.to_string()))
                }
            };
            TicketOutcome {
                ticket: ticket.clone(),
                jurisdiction: limits.code.to_string(),
                result,
                status,
                error,
            }
        })
        .collect()
}

/// Counts per status across a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub compliant: usize,
    pub warning: usize,
    pub non_compliant: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[TicketOutcome]) -> Self {
        outcomes.iter().fold(
            BatchSummary {
                total: outcomes.len(),
                ..Default::default()
            },
            |mut summary, outcome| {
                match outcome.status {
                    Some(ComplianceStatus::Compliant) => summary.compliant += 1,
                    Some(ComplianceStatus::Warning) => summary.warning += 1,
                    Some(ComplianceStatus::NonCompliant) => summary.non_compliant += 1,
                    None => summary.invalid += 1,
                }
                summary
            },
        )
    }

    /// Share of evaluated tickets that were non-compliant, in percent
    pub fn non_compliance_rate(&self) -> Option<f64> {
        let evaluated = self.total.saturating_sub(self.invalid);
        if evaluated == 0 {
            None
        } else {
            Some(self.non_compliant as f64 / evaluated as f64 * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxleConfig, VehicleConfig, VehicleType};

    fn ticket(number: &str, jurisdiction: Option<&str>, weights: Vec<f64>, spacing: Vec<f64>) -> WeighTicket {
        let gross_weight: f64 = weights.iter().sum();
        WeighTicket {
            ticket_number: number.to_string(),
            date: None,
            vehicle_id: "TRK-12".to_string(),
            jurisdiction: jurisdiction.map(str::to_string),
            vehicle: VehicleConfig {
                vehicle_type: VehicleType::Dump,
                axles: AxleConfig::new(weights, spacing),
                total_length: 40.0,
                gross_weight,
            },
        }
    }

    #[test]
    fn test_compliant_ticket() {
        let tickets = vec![ticket("001", None, vec![10000.0, 15000.0, 15000.0], vec![14.0, 4.5])];
        let outcomes = check_tickets(&tickets, None);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, Some(ComplianceStatus::Compliant));
        assert_eq!(outcomes[0].jurisdiction, "US");
    }

    #[test]
    fn test_ticket_jurisdiction_overrides_default() {
        // 21000 lb single axle passes in New York (22400) but not federally
        let tickets = vec![
            ticket("002", Some("NY"), vec![21000.0, 15000.0], vec![14.0]),
            ticket("003", None, vec![21000.0, 15000.0], vec![14.0]),
        ];
        let outcomes = check_tickets(&tickets, Some("CA"));
        assert_eq!(outcomes[0].jurisdiction, "NY");
        assert_eq!(outcomes[0].status, Some(ComplianceStatus::Compliant));
        assert_eq!(outcomes[1].jurisdiction, "CA");
        assert_eq!(outcomes[1].status, Some(ComplianceStatus::Warning));
    }

    #[test]
    fn test_invalid_ticket_is_kept() {
        let mut bad = ticket("004", None, vec![10000.0, 15000.0], vec![14.0]);
        bad.vehicle.axles.axle_weights[1] = -10.0;
        let outcomes = check_tickets(&[bad], None);
        assert!(outcomes[0].is_invalid());
        assert!(outcomes[0].error.as_deref().unwrap().contains("Axle 1"));
    }

    #[test]
    fn test_summary_counts() {
        let tickets = vec![
            ticket("001", None, vec![10000.0, 15000.0], vec![14.0]),
            ticket("002", None, vec![21000.0, 15000.0], vec![14.0]),
            ticket("003", None, vec![20000.0, 34000.0, 34000.0], vec![14.0, 4.0]),
            ticket("004", None, vec![], vec![]),
        ];
        let summary = BatchSummary::from_outcomes(&check_tickets(&tickets, None));
        assert_eq!(summary.total, 4);
        assert_eq!(summary.compliant, 1);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.non_compliant, 1);
        assert_eq!(summary.invalid, 1);
        let rate = summary.non_compliance_rate().unwrap();
        assert!((rate - 33.33).abs() < 0.01);
    }

    #[test]
    fn test_rate_with_inconsistent_counts() {
        let summary = BatchSummary {
            total: 1,
            invalid: 3,
            ..Default::default()
        };
        assert_eq!(summary.non_compliance_rate(), None);
    }
}
