//! Jurisdiction limit tables

pub mod weight_limits;

pub use weight_limits::{jurisdictions, lookup, FEDERAL, STATE_LIMITS};
