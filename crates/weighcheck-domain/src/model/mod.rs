//! Domain model types

pub mod compliance;
pub mod limits;
pub mod vehicle;
pub mod weigh_ticket;

pub use compliance::{ComplianceDetails, ComplianceResult, ComplianceStatus, Violation, ViolationKind};
pub use limits::WeightLimits;
pub use vehicle::{AxleConfig, VehicleConfig, VehicleType};
pub use weigh_ticket::WeighTicket;
