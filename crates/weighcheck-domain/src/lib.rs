//! Weight compliance engine
//!
//! Evaluates a vehicle's axle weights and gross weight against federal or
//! state weight limits, including the federal bridge formula.

pub mod constants;
pub mod model;
pub mod service;

pub use constants::{lookup, FEDERAL, STATE_LIMITS};
pub use model::{
    AxleConfig, ComplianceDetails, ComplianceResult, ComplianceStatus, VehicleConfig,
    VehicleType, Violation, ViolationKind, WeighTicket, WeightLimits,
};
pub use service::{
    bridge_formula_max, check_compliance, check_federal_compliance, check_state_compliance,
};
