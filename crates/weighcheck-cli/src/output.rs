//! Output formatting module

use weighcheck_app::app::VehicleCheck;
use weighcheck_domain::model::{VehicleConfig, WeightLimits};
use weighcheck_types::{OutputFormat, Result};

pub fn output_vehicle_check(
    output_format: OutputFormat,
    vehicle: &VehicleConfig,
    check: &VehicleCheck,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(check)?;
        println!("{}", content);
        return Ok(());
    }

    let result = &check.result;
    println!("\nCompliance Result");
    println!("=================");
    println!("Jurisdiction:    {} ({})", check.jurisdiction_name, check.jurisdiction);
    println!("Vehicle type:    {}", vehicle.vehicle_type);
    println!("Axles:           {}", vehicle.axles.axle_count);

    println!("\n--- Axle Readings ---");
    for (i, weight) in vehicle.axles.axle_weights.iter().enumerate() {
        match vehicle.axles.axle_spacing.get(i) {
            Some(spacing) => println!("Axle {:<2}  {:>8.0} lb   then {:>5.1} ft", i + 1, weight, spacing),
            None => println!("Axle {:<2}  {:>8.0} lb", i + 1, weight),
        }
    }
    println!("---------------------");

    println!("Gross weight:    {:.0} lb", vehicle.gross_weight);
    println!("Max allowed:     {:.0} lb", result.max_allowed_weight);
    if result.over_weight > 0.0 {
        println!("Over by:         {:.0} lb", result.over_weight);
    }
    println!("Status:          {}", check.status);

    if !result.violations.is_empty() {
        println!("\nViolations:");
        for violation in &result.violations {
            let position = violation
                .axle_index
                .map(|i| format!(" (axle {})", i + 1))
                .unwrap_or_default();
            println!(
                "  {}{}: {:.0} lb, limit {:.0} lb, over by {:.0} lb",
                violation.kind.label(),
                position,
                violation.actual,
                violation.limit,
                violation.over_weight
            );
        }
    }

    Ok(())
}

pub fn output_limits(output_format: OutputFormat, limits: &[&WeightLimits]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(limits)?;
        println!("{}", content);
    } else {
        for profile in limits {
            println!("{}\n", profile);
        }
    }
    Ok(())
}

pub fn output_bridge(output_format: OutputFormat, length: f64, axles: usize, max: f64) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::json!({
            "length": length,
            "axle_count": axles,
            "max_weight": max,
        });
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        println!(
            "Bridge formula maximum for {} axles over {:.1} ft: {:.0} lb",
            axles, length, max
        );
    }
    Ok(())
}
