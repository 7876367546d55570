//! Excel export of batch compliance results

use crate::app::BatchRun;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use weighcheck_types::{Error, Result};

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a batch run to an Excel file
pub fn export_to_excel(run: &BatchRun, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, run)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, run)?;

    workbook.save(output_path).map_err(excel_err)?;
    tracing::info!(path = %output_path.display(), "exported batch results");

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, run: &BatchRun) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Weight Compliance Report", &header_format)
        .map_err(excel_err)?;

    let rows: [(&str, String); 3] = [
        ("Checked At:", run.started_at.to_rfc3339()),
        ("Source:", run.source.display().to_string()),
        (
            "Default Jurisdiction:",
            run.default_jurisdiction
                .clone()
                .unwrap_or_else(|| "US".to_string()),
        ),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let row = (i + 2) as u32;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        sheet.write_string(row, 1, value).map_err(excel_err)?;
    }

    sheet
        .write_string_with_format(6, 0, "Status Counts", &header_format)
        .map_err(excel_err)?;

    let summary = &run.summary;
    let counts = [
        ("Total", summary.total),
        ("Compliant", summary.compliant),
        ("Warning", summary.warning),
        ("Non-Compliant", summary.non_compliant),
        ("Invalid", summary.invalid),
    ];
    for (i, (label, count)) in counts.iter().enumerate() {
        let row = (i + 7) as u32;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        sheet.write_number(row, 1, *count as f64).map_err(excel_err)?;
    }

    sheet.set_column_width(0, 22).map_err(excel_err)?;
    sheet.set_column_width(1, 40).map_err(excel_err)?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, run: &BatchRun) -> Result<()> {
    sheet.set_name("Details").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Ticket",
        "Date",
        "Vehicle",
        "Type",
        "Jurisdiction",
        "Axles",
        "Gross (lb)",
        "Max Allowed (lb)",
        "Over (lb)",
        "Status",
        "Violations",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (row_idx, outcome) in run.outcomes.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let ticket = &outcome.ticket;

        sheet.write_string(row, 0, &ticket.ticket_number).map_err(excel_err)?;
        if let Some(date) = ticket.date {
            sheet
                .write_string(row, 1, date.format("%Y-%m-%d").to_string())
                .map_err(excel_err)?;
        }
        sheet.write_string(row, 2, &ticket.vehicle_id).map_err(excel_err)?;
        sheet
            .write_string(row, 3, ticket.vehicle.vehicle_type.label())
            .map_err(excel_err)?;
        sheet.write_string(row, 4, &outcome.jurisdiction).map_err(excel_err)?;
        sheet
            .write_number(row, 5, ticket.vehicle.axles.axle_count as f64)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 6, ticket.vehicle.gross_weight)
            .map_err(excel_err)?;

        match (&outcome.result, outcome.status) {
            (Some(result), Some(status)) => {
                sheet
                    .write_number(row, 7, result.max_allowed_weight)
                    .map_err(excel_err)?;
                sheet.write_number(row, 8, result.over_weight).map_err(excel_err)?;
                sheet.write_string(row, 9, status.label()).map_err(excel_err)?;
                let violations: Vec<String> = result
                    .violations
                    .iter()
                    .map(|v| format!("{} +{:.0}", v.kind.label(), v.over_weight))
                    .collect();
                sheet
                    .write_string(row, 10, violations.join("; "))
                    .map_err(excel_err)?;
            }
            _ => {
                sheet.write_string(row, 9, "Invalid").map_err(excel_err)?;
                sheet
                    .write_string(row, 10, outcome.error.as_deref().unwrap_or(""))
                    .map_err(excel_err)?;
            }
        }
    }

    sheet.set_column_width(0, 14).map_err(excel_err)?;
    sheet.set_column_width(2, 16).map_err(excel_err)?;
    sheet.set_column_width(10, 60).map_err(excel_err)?;

    Ok(())
}
