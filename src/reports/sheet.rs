//! Cell layout of the report, independent of the spreadsheet library.
//!
//! Keeping the layout as plain data makes it possible to check formulas and totals
//! without reading an .xlsx file back.

use crate::metrics::{ReportRow, RuleSummary};

/// Column headers of the detailed sheet
pub const DETAIL_HEADERS: [&str; 6] = [
    "Rule/Pattern",
    "Technology",
    "Number of Occurrences",
    "Effort by Occurrence (Person-day)",
    "Cost per FTE/Day",
    "Tech Debt ($) Effort x Cost",
];

/// Column headers of the summary sheet
pub const SUMMARY_HEADERS: [&str; 3] = ["Rule/Pattern", "Technologies", "Number of Occurrences"];

pub const DETAIL_SHEET_NAME: &str = "Detailed Green Metrics";
pub const SUMMARY_SHEET_NAME: &str = "Summary by Rule";

/// Label of the first cell of every totals row
pub const TOTAL_LABEL: &str = "TOTAL";

// Column letters of the detailed sheet referenced by formulas
const EFFORT_COLUMN: char = 'D';
const COST_COLUMN: char = 'E';
const TECH_DEBT_COLUMN: char = 'F';

/// Spreadsheet row number (1-based) of the first data row, right below the header
const FIRST_DATA_ROW: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(u64),

    /// Left empty for the reader to fill in
    Input,

    /// Spreadsheet formula, including the leading `=`
    Formula(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
    pub totals: Vec<Cell>,
}

/// Lay out the detailed sheet: one line per row, then a totals line.
#[must_use]
pub fn detail_sheet(rows: &[ReportRow]) -> Sheet {
    let body = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let r = FIRST_DATA_ROW + i;
            vec![
                Cell::Text(row.rule.clone()),
                Cell::Text(row.technology.clone()),
                Cell::Count(row.occurrences),
                Cell::Count(row.effort_days),
                Cell::Input,
                Cell::Formula(format!("=ROUND({EFFORT_COLUMN}{r}*{COST_COLUMN}{r},2)")),
            ]
        })
        .collect();

    let tech_debt_total = if rows.is_empty() {
        "=0".to_string()
    } else {
        let last = FIRST_DATA_ROW + rows.len() - 1;
        format!("=SUM({TECH_DEBT_COLUMN}{FIRST_DATA_ROW}:{TECH_DEBT_COLUMN}{last})")
    };

    Sheet {
        name: DETAIL_SHEET_NAME,
        headers: &DETAIL_HEADERS,
        rows: body,
        totals: vec![
            Cell::Text(TOTAL_LABEL.to_string()),
            Cell::Text(String::new()),
            Cell::Count(rows.iter().map(|r| r.occurrences).sum()),
            Cell::Count(rows.iter().map(|r| r.effort_days).sum()),
            Cell::Text(String::new()),
            Cell::Formula(tech_debt_total),
        ],
    }
}

/// Lay out the per-rule summary sheet.
#[must_use]
pub fn summary_sheet(summaries: &[RuleSummary]) -> Sheet {
    Sheet {
        name: SUMMARY_SHEET_NAME,
        headers: &SUMMARY_HEADERS,
        rows: summaries
            .iter()
            .map(|s| {
                vec![
                    Cell::Text(s.rule.clone()),
                    Cell::Text(s.technologies.join(", ")),
                    Cell::Count(s.occurrences),
                ]
            })
            .collect(),
        totals: vec![
            Cell::Text(TOTAL_LABEL.to_string()),
            Cell::Text(String::new()),
            Cell::Count(summaries.iter().map(|s| s.occurrences).sum()),
        ],
    }
}
