use crate::errors::ServerError;
use crate::pipeline::AnalysisReport;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], bold: &Format) -> Result<(), ServerError> {
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, bold)
            .map_err(xlsx_err("header"))?;
    }
    Ok(())
}

/// Builds the workbook: one sheet of owners and labels, one of label counts.
pub fn analysis_workbook(report: &AnalysisReport) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let owners = workbook.add_worksheet();
    owners.set_name("Owners").map_err(xlsx_err("sheet name"))?;
    write_headers(owners, &["Address", "Owner", "Predicted Origin"], &bold)?;

    for (i, row) in report.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        owners
            .write_string(r, 0, &row.address)
            .map_err(xlsx_err("address"))?;
        owners
            .write_string(r, 1, &row.owner_name)
            .map_err(xlsx_err("owner"))?;
        owners
            .write_string(r, 2, &row.label)
            .map_err(xlsx_err("label"))?;
    }

    let summary = workbook.add_worksheet();
    summary.set_name("Summary").map_err(xlsx_err("sheet name"))?;
    write_headers(summary, &["Label", "Count", "Share (%)"], &bold)?;

    for (i, slice) in report.chart.slices.iter().enumerate() {
        let r = (i + 1) as u32;
        summary
            .write_string(r, 0, &slice.label)
            .map_err(xlsx_err("label"))?;
        summary
            .write_number(r, 1, slice.count as f64)
            .map_err(xlsx_err("count"))?;
        summary
            .write_number(r, 2, (slice.percentage * 10.0).round() / 10.0)
            .map_err(xlsx_err("share"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_filename(zip_code: &str, date: chrono::NaiveDate) -> String {
    format!("zip_{zip_code}_{}.xlsx", date.format("%Y-%m-%d"))
}

pub fn export_analysis_xlsx(report: &AnalysisReport) -> ResultResp {
    let buffer = analysis_workbook(report)?;
    let today = chrono::Local::now().date_naive();
    xlsx_response(buffer, &export_filename(&report.zip_code, today))
}
