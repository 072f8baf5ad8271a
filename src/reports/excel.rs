//! Excel report generation.

use super::sheet::{Cell, Sheet, detail_sheet, summary_sheet};
use crate::error::WriteError;
use crate::metrics::{ReportRow, summarize_by_rule};
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Color, DocProperties, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "    report";

const INTEGER_FORMAT: &str = "#,##0";
const MONEY_FORMAT: &str = "#,##0.00";

/// Width given to the cost column, which autofit would size to its header only
const COST_COLUMN_WIDTH: f64 = 18.0;

/// Every cell format used by the report
struct Formats {
    header: Format,
    text: Format,
    integer: Format,
    input: Format,
    money: Format,
}

impl Formats {
    fn new(bold: bool) -> Self {
        let base = if bold { Format::new().set_bold() } else { Format::new() };

        Self {
            header: Format::new()
                .set_bold()
                .set_background_color(Color::RGB(0x00C8_E6C9))
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center),
            text: base.clone().set_align(FormatAlign::Left),
            integer: base.clone().set_num_format(INTEGER_FORMAT),
            input: base
                .clone()
                .set_num_format(MONEY_FORMAT)
                .set_background_color(Color::RGB(0x00FF_F9C4))
                .set_unlocked(),
            money: base.set_num_format(MONEY_FORMAT),
        }
    }
}

/// Generate the Excel workbook for `rows` into a writer.
///
/// The workbook has a detailed sheet, with a tech-debt formula per line, and a
/// per-rule summary sheet.
pub fn generate<W: Write>(rows: &[ReportRow], writer: &mut W) -> Result<(), WriteError> {
    let mut workbook = Workbook::new();

    let properties = DocProperties::new()
        .set_author("green-metrics")
        .set_title("Green Impact technical debt");
    let _ = workbook.set_properties(&properties);

    let body = Formats::new(false);
    let totals = Formats::new(true);

    render(workbook.add_worksheet(), &detail_sheet(rows), &body, &totals, true)?;
    render(
        workbook.add_worksheet(),
        &summary_sheet(&summarize_by_rule(rows)),
        &body,
        &totals,
        false,
    )?;

    let data = workbook.save_to_buffer()?;
    writer.write_all(&data)?;
    Ok(())
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
fn render(worksheet: &mut Worksheet, sheet: &Sheet, body: &Formats, totals: &Formats, has_cost_column: bool) -> Result<(), WriteError> {
    worksheet.set_name(sheet.name)?;

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, u16::try_from(col).unwrap_or(u16::MAX), *header, &body.header)?;
    }

    for (i, cells) in sheet.rows.iter().enumerate() {
        write_row(worksheet, row_index(i + 1), cells, body)?;
    }
    write_row(worksheet, row_index(sheet.rows.len() + 1), &sheet.totals, totals)?;

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();

    if has_cost_column {
        worksheet.set_column_width(4, COST_COLUMN_WIDTH)?;
    }

    Ok(())
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
fn write_row(worksheet: &mut Worksheet, row: u32, cells: &[Cell], formats: &Formats) -> Result<(), WriteError> {
    for (col, cell) in cells.iter().enumerate() {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        match cell {
            Cell::Text(s) => {
                worksheet.write_string_with_format(row, col, s, &formats.text)?;
            }
            Cell::Count(n) => {
                #[expect(clippy::cast_precision_loss, reason = "counts fit in f64")]
                worksheet.write_number_with_format(row, col, *n as f64, &formats.integer)?;
            }
            Cell::Input => {
                worksheet.write_blank(row, col, &formats.input)?;
            }
            Cell::Formula(f) => {
                worksheet.write_formula_with_format(row, col, f.as_str(), &formats.money)?;
            }
        }
    }
    Ok(())
}

fn row_index(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}

/// Name of the report file for a domain and application at a given time
#[must_use]
pub fn report_file_name(domain_id: u64, application_id: u64, timestamp: DateTime<Local>) -> String {
    format!(
        "green_metrics_d{domain_id}_a{application_id}_{}.xlsx",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Write the report into `output_dir`, creating the directory when needed.
///
/// Returns the path of the new file.
pub fn write_report(rows: &[ReportRow], domain_id: u64, application_id: u64, output_dir: &Path) -> Result<PathBuf, WriteError> {
    write_report_at(rows, domain_id, application_id, output_dir, Local::now())
}

/// Same as [`write_report`] with an explicit timestamp for the file name.
pub fn write_report_at(
    rows: &[ReportRow],
    domain_id: u64,
    application_id: u64,
    output_dir: &Path,
    timestamp: DateTime<Local>,
) -> Result<PathBuf, WriteError> {
    fs::create_dir_all(output_dir).map_err(|source| WriteError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut data = Vec::new();
    generate(rows, &mut data)?;

    let path = output_dir.join(report_file_name(domain_id, application_id, timestamp));
    fs::write(&path, data).map_err(|source| WriteError::WriteFile {
        path: path.clone(),
        source,
    })?;

    log::info!(target: LOG_TARGET, "wrote {} row(s) to '{}'", rows.len(), path.display());
    Ok(path)
}
