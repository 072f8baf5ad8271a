//! Turns raw service records into report rows.
//!
//! Effort is reported in person-days of [`MINUTES_PER_DAY`] minutes. Tech debt is never
//! computed here: it stays a spreadsheet formula so it follows the cost the user types in.

mod report_row;
mod rule_summary;

pub use report_row::{MINUTES_PER_DAY, ReportRow, build_rows, effort_days};
pub use rule_summary::{RuleSummary, summarize_by_rule};
