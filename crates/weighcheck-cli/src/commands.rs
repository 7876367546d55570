//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_bridge, output_limits, output_vehicle_check};
use std::path::{Path, PathBuf};
use weighcheck_app::app::{check_vehicle, run_batch};
use weighcheck_app::config::Config;
use weighcheck_app::export::export_to_excel;
use weighcheck_domain::constants::{jurisdictions, lookup};
use weighcheck_domain::model::{AxleConfig, VehicleConfig, VehicleType};
use weighcheck_domain::service::{bridge_formula_max, generate_compliance_report};
use weighcheck_infra::load_vehicle;
use weighcheck_types::{OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;

    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Check {
            file,
            weights,
            spacing,
            gross,
            length,
            vehicle_type,
            state,
        } => {
            let vehicle = match file {
                Some(path) => load_vehicle(path)?,
                None => inline_vehicle(weights, spacing, gross, length, vehicle_type),
            };
            cmd_check(&config, &vehicle, state.as_deref(), output_format)
        }
        Commands::Batch { csv, state, excel } => {
            cmd_batch(&config, csv, state.as_deref(), excel, output_format)
        }
        Commands::Bridge { length, axles } => {
            output_bridge(output_format, length, axles, bridge_formula_max(length, axles))
        }
        Commands::Limits { state } => cmd_limits(state.as_deref(), output_format),
        Commands::Config {
            show,
            set_jurisdiction,
            clear_jurisdiction,
            set_output,
            set_export_dir,
            reset,
        } => cmd_config(
            config,
            &config_path,
            show,
            set_jurisdiction,
            clear_jurisdiction,
            set_output,
            set_export_dir,
            reset,
        ),
    }
}

fn inline_vehicle(
    weights: Vec<f64>,
    spacing: Vec<f64>,
    gross: Option<f64>,
    length: Option<f64>,
    vehicle_type: VehicleType,
) -> VehicleConfig {
    let gross_weight = gross.unwrap_or_else(|| weights.iter().sum());
    let total_length = length.unwrap_or_else(|| spacing.iter().sum());
    VehicleConfig {
        vehicle_type,
        axles: AxleConfig::new(weights, spacing),
        total_length,
        gross_weight,
    }
}

fn cmd_check(
    config: &Config,
    vehicle: &VehicleConfig,
    state: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    let check = check_vehicle(config, vehicle, state)?;
    output_vehicle_check(output_format, vehicle, &check)
}

fn cmd_batch(
    config: &Config,
    csv_path: PathBuf,
    state: Option<&str>,
    excel: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    eprintln!("Loading weigh tickets from: {}", csv_path.display());
    let run = run_batch(config, &csv_path, state)?;
    eprintln!("  Checked {} tickets", run.summary.total);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&run)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", generate_compliance_report(&run.outcomes));
        }
    }

    if let Some(path) = excel {
        let path = match (&config.export_dir, path.is_relative()) {
            (Some(dir), true) => dir.join(path),
            _ => path,
        };
        export_to_excel(&run, &path)?;
        eprintln!("Exported to: {}", path.display());
    }

    if run.has_non_compliant() {
        eprintln!(
            "\nWarning: {} non-compliant ticket(s) detected",
            run.summary.non_compliant
        );
    }

    Ok(())
}

fn cmd_limits(state: Option<&str>, output_format: OutputFormat) -> Result<()> {
    match state {
        Some(code) => {
            let limits = lookup(Some(code));
            if !limits.code.eq_ignore_ascii_case(code.trim()) {
                eprintln!("Unknown jurisdiction '{}', showing federal limits", code);
            }
            output_limits(output_format, &[limits])
        }
        None => output_limits(output_format, &jurisdictions()),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    config_path: &Path,
    show: bool,
    set_jurisdiction: Option<String>,
    clear_jurisdiction: bool,
    set_output: Option<OutputFormat>,
    set_export_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(code) = set_jurisdiction {
        let limits = lookup(Some(code.as_str()));
        if !limits.code.eq_ignore_ascii_case(code.trim()) {
            eprintln!(
                "Warning: '{}' is not a known jurisdiction; federal limits will apply",
                code
            );
        }
        config.default_jurisdiction = Some(code.trim().to_uppercase());
        modified = true;
    }

    if clear_jurisdiction {
        config.default_jurisdiction = None;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(dir) = set_export_dir {
        config.export_dir = Some(dir);
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_vehicle_defaults() {
        let vehicle = inline_vehicle(
            vec![12000.0, 17000.0, 17000.0],
            vec![14.0, 4.5],
            None,
            None,
            VehicleType::Semi,
        );
        assert_eq!(vehicle.gross_weight, 46000.0);
        assert_eq!(vehicle.total_length, 18.5);
        assert_eq!(vehicle.axles.axle_count, 3);
    }

    #[test]
    fn test_inline_vehicle_overrides() {
        let vehicle = inline_vehicle(
            vec![12000.0, 17000.0],
            vec![14.0],
            Some(30000.0),
            Some(40.0),
            VehicleType::Box,
        );
        assert_eq!(vehicle.gross_weight, 30000.0);
        assert_eq!(vehicle.total_length, 40.0);
    }
}
