//! File loaders for weigh tickets and vehicle configurations

pub mod ticket_csv;
pub mod vehicle_file;

pub use ticket_csv::load_tickets;
pub use vehicle_file::load_vehicle;
