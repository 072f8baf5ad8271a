use super::ReportRow;
use std::collections::HashMap;

/// Occurrences of one rule across every technology it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    pub rule: String,

    /// Distinct technologies, in the order they first appear
    pub technologies: Vec<String>,
    pub occurrences: u64,
}

/// Group rows by rule, most frequent rule first.
///
/// Rules with the same total keep the order in which they first appear.
#[must_use]
pub fn summarize_by_rule(rows: &[ReportRow]) -> Vec<RuleSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<RuleSummary> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.rule.as_str()).or_insert_with(|| {
            summaries.push(RuleSummary {
                rule: row.rule.clone(),
                technologies: Vec::new(),
                occurrences: 0,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.occurrences += row.occurrences;
        if !summary.technologies.contains(&row.technology) {
            summary.technologies.push(row.technology.clone());
        }
    }

    // stable sort
    summaries.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    summaries
}
