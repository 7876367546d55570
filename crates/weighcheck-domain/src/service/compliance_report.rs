//! Text reports for batch compliance checks

use crate::model::ComplianceStatus;
use crate::service::ticket_checker::{BatchSummary, TicketOutcome};

pub fn generate_compliance_report(outcomes: &[TicketOutcome]) -> String {
    let summary = BatchSummary::from_outcomes(outcomes);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("             Weight Compliance Report             \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Total tickets:        {}\n", summary.total));
    report.push_str(&format!("  Compliant:            {}\n", summary.compliant));
    report.push_str(&format!("  Warning:              {}\n", summary.warning));
    report.push_str(&format!("  Non-Compliant:        {}\n", summary.non_compliant));
    report.push_str(&format!("  Invalid:              {}\n", summary.invalid));
    if let Some(rate) = summary.non_compliance_rate() {
        report.push_str(&format!("  Non-compliance rate:  {:.1}%\n", rate));
    }
    report.push('\n');

    let flagged: Vec<&TicketOutcome> = outcomes
        .iter()
        .filter(|o| matches!(o.status, Some(s) if s != ComplianceStatus::Compliant))
        .collect();

    if flagged.is_empty() {
        report.push_str("[No Violations]\n");
        report.push_str("  All evaluated tickets are within weight limits.\n\n");
    } else {
        report.push_str("[Flagged Tickets]\n");
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:<14} {:<4} {:>9} {:>9} {:>8} {:<14}\n",
            "Ticket", "Vehicle", "Jur", "Gross", "Max", "Over", "Status"
        ));
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        for outcome in flagged {
            let (Some(result), Some(status)) = (&outcome.result, outcome.status) else {
                continue;
            };
            report.push_str(&format!(
                "{:<12} {:<14} {:<4} {:>9.0} {:>9.0} {:>8.0} {:<14}\n",
                truncate_str(&outcome.ticket.ticket_number, 11),
                truncate_str(&outcome.ticket.vehicle_id, 13),
                outcome.jurisdiction,
                outcome.ticket.vehicle.gross_weight,
                result.max_allowed_weight,
                result.over_weight,
                status.label()
            ));
            for violation in &result.violations {
                let position = violation
                    .axle_index
                    .map(|i| format!(" @ axle {}", i + 1))
                    .unwrap_or_default();
                report.push_str(&format!(
                    "    - {}{}: {:.0} lb over {:.0} lb limit by {:.0} lb\n",
                    violation.kind.label(),
                    position,
                    violation.actual,
                    violation.limit,
                    violation.over_weight
                ));
            }
        }
        report.push('\n');
    }

    let invalid: Vec<&TicketOutcome> = outcomes.iter().filter(|o| o.is_invalid()).collect();
    if !invalid.is_empty() {
        report.push_str("[Invalid Tickets]\n");
        report.push_str("-".repeat(50).as_str());
        report.push('\n');
        for outcome in invalid {
            report.push_str(&format!(
                "{:<12} {}\n",
                truncate_str(&outcome.ticket.ticket_number, 11),
                outcome.error.as_deref().unwrap_or("unknown error")
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
