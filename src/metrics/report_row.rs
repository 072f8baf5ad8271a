use crate::highlight::MetricRecord;

/// Length of one working day, in minutes
pub const MINUTES_PER_DAY: f64 = 480.0;

/// One line of the detailed sheet.
///
/// The cost and tech-debt columns have no field: cost is typed in by the reader and
/// tech debt is a formula over effort and cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub rule: String,
    pub technology: String,
    pub occurrences: u64,
    pub effort_days: u64,
}

/// Total remediation effort in whole person-days.
///
/// `occurrences * minutes_per_occurrence / 480`, rounded half away from zero
/// (so 1.5 days becomes 2 and 2.5 days becomes 3).
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "occurrence counts are far below 2^52")]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped to be non-negative first"
)]
pub fn effort_days(occurrences: u64, minutes_per_occurrence: f64) -> u64 {
    let minutes = occurrences as f64 * minutes_per_occurrence;
    if !minutes.is_finite() || minutes <= 0.0 {
        return 0;
    }

    (minutes / MINUTES_PER_DAY).round() as u64
}

/// Build report rows from service records, keeping response order.
///
/// Records without occurrences are dropped.
#[must_use]
pub fn build_rows(records: &[MetricRecord]) -> Vec<ReportRow> {
    records
        .iter()
        .filter(|r| r.occurrences > 0)
        .map(|r| ReportRow {
            rule: r.rule.clone(),
            technology: r.technology.clone(),
            occurrences: r.occurrences,
            effort_days: effort_days(r.occurrences, r.effort_minutes),
        })
        .collect()
}
