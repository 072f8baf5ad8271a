//! Spreadsheet report generation
//!
//! The report is laid out as plain cell data first (`sheet`) and then rendered to
//! .xlsx (`excel`). Tech-debt cells are always formulas over the effort column and the
//! cost column the reader fills in, so the workbook recalculates as costs are entered.

mod excel;
mod sheet;

pub use excel::{generate as generate_xlsx, report_file_name, write_report, write_report_at};
pub use sheet::{Cell, DETAIL_HEADERS, SUMMARY_HEADERS, Sheet, TOTAL_LABEL, detail_sheet, summary_sheet};
