//! Domain services

pub mod axle_groups;
pub mod bridge_formula;
pub mod compliance_checker;
pub mod compliance_report;
pub mod ticket_checker;

pub use bridge_formula::bridge_formula_max;
pub use compliance_checker::{check_compliance, check_federal_compliance, check_state_compliance};
pub use compliance_report::generate_compliance_report;
pub use ticket_checker::{check_tickets, BatchSummary, TicketOutcome};
