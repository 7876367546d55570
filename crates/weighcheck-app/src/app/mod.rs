//! Application use cases

pub mod compliance_service;

pub use compliance_service::{check_vehicle, run_batch, BatchRun, VehicleCheck};
