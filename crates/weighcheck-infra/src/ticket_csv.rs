//! CSV loader for weigh tickets
//!
//! Expected header:
//! `ticket_number,date,vehicle_id,jurisdiction,vehicle_type,axle_weights,axle_spacing,total_length,gross_weight`
//!
//! `axle_weights` and `axle_spacing` hold `;`-separated numbers. `date`,
//! `jurisdiction`, `vehicle_type` and `gross_weight` may be left empty; an
//! empty gross weight is taken as the sum of the axle weights.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use weighcheck_domain::model::{AxleConfig, VehicleConfig, VehicleType, WeighTicket};
use weighcheck_types::{Error, Result};

#[derive(Debug, Deserialize)]
struct TicketRow {
    ticket_number: String,
    #[serde(default)]
    date: String,
    vehicle_id: String,
    #[serde(default)]
    jurisdiction: String,
    #[serde(default)]
    vehicle_type: String,
    axle_weights: String,
    #[serde(default)]
    axle_spacing: String,
    total_length: f64,
    #[serde(default)]
    gross_weight: Option<f64>,
}

/// Load weigh tickets from a CSV file with a header row
pub fn load_tickets<P: AsRef<Path>>(path: P) -> Result<Vec<WeighTicket>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Ticket file not found: {}",
            path.display()
        )));
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let tickets = read_tickets(reader)?;
    tracing::info!(count = tickets.len(), path = %path.display(), "loaded weigh tickets");
    Ok(tickets)
}

fn read_tickets<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<WeighTicket>> {
    let mut tickets = Vec::new();
    for (row_idx, record) in reader.deserialize::<TicketRow>().enumerate() {
        // +2: zero-based index plus the header row
        let row = row_idx + 2;
        let record = record.map_err(|e| Error::TicketParse {
            row,
            message: e.to_string(),
        })?;
        tickets.push(parse_row(record, row)?);
    }
    Ok(tickets)
}

fn parse_row(row: TicketRow, row_num: usize) -> Result<WeighTicket> {
    let parse_err = |message: String| Error::TicketParse {
        row: row_num,
        message,
    };

    let axle_weights = parse_list(&row.axle_weights)
        .map_err(|v| parse_err(format!("invalid axle weight '{}'", v)))?;
    let axle_spacing = parse_list(&row.axle_spacing)
        .map_err(|v| parse_err(format!("invalid axle spacing '{}'", v)))?;
    let vehicle_type = row
        .vehicle_type
        .parse::<VehicleType>()
        .map_err(parse_err)?;
    let date = parse_optional_date(&row.date)
        .map_err(|v| parse_err(format!("invalid date '{}'", v)))?;
    let gross_weight = row
        .gross_weight
        .unwrap_or_else(|| axle_weights.iter().sum());

    Ok(WeighTicket {
        ticket_number: row.ticket_number,
        date,
        vehicle_id: row.vehicle_id,
        jurisdiction: Some(row.jurisdiction).filter(|s| !s.is_empty()),
        vehicle: VehicleConfig {
            vehicle_type,
            axles: AxleConfig::new(axle_weights, axle_spacing),
            total_length: row.total_length,
            gross_weight,
        },
    })
}

/// An empty field is an empty list; one trailing `;` is tolerated, any other
/// empty entry is an error.
fn parse_list(s: &str) -> std::result::Result<Vec<f64>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    let s = s.strip_suffix(';').unwrap_or(s);
    s.split(';')
        .map(str::trim)
        .map(|v| v.parse::<f64>().map_err(|_| v.to_string()))
        .collect()
}

fn parse_optional_date(s: &str) -> std::result::Result<Option<NaiveDate>, String> {
    if s.trim().is_empty() {
        return Ok(None);
    }
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(Some)
        .ok_or_else(|| s.to_string())
}
