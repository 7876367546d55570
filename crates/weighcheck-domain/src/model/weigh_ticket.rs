//! Weigh ticket type definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::VehicleConfig;

/// A single weighing of a vehicle at the scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeighTicket {
    /// Ticket number printed on the scale slip
    pub ticket_number: String,
    pub date: Option<NaiveDate>,
    /// Fleet unit number or license plate
    pub vehicle_id: String,
    /// Jurisdiction the vehicle was weighed in, if recorded
    pub jurisdiction: Option<String>,
    pub vehicle: VehicleConfig,
}
