//! JSON vehicle configuration loader

use std::path::Path;

use weighcheck_domain::model::VehicleConfig;
use weighcheck_types::{Error, Result};

/// Load a single vehicle configuration from a JSON file
pub fn load_vehicle<P: AsRef<Path>>(path: P) -> Result<VehicleConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Vehicle file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let vehicle: VehicleConfig = serde_json::from_str(&content)?;
    Ok(vehicle)
}
