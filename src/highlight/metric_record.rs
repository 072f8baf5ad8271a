/// One Green Impact rule as reported for a single technology of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    /// Display name of the rule or pattern
    pub rule: String,
    pub technology: String,
    pub occurrences: u64,

    /// Estimated remediation effort for a single occurrence, in minutes
    pub effort_minutes: f64,
}

impl MetricRecord {
    #[must_use]
    pub fn new(rule: impl Into<String>, technology: impl Into<String>, occurrences: u64, effort_minutes: f64) -> Self {
        Self {
            rule: rule.into(),
            technology: technology.into(),
            occurrences,
            effort_minutes,
        }
    }
}
