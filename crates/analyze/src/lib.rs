//! gedcom-analyze: read-only rules over a resolved record graph.
//!
//! Each rule is a separate module producing a serializable result struct.
//! The `analyze()` function runs all of them and aggregates results into an
//! `AnalysisReport`.

pub mod error;
pub mod r1_age_gap;
pub mod r2_recent_births;
pub mod r3_marital;
pub mod report;

pub use error::AnalysisError;
pub use r1_age_gap::{AgeGapAnomaly, R1Result};
pub use r2_recent_births::{R2Result, RecentBirth};
pub use r3_marital::R3Result;
pub use report::{AnalysisReport, Finding, FindingSeverity};

use gedcom_core::Genealogy;
use time::Date;

/// Names accepted by [`analyze_selected`].
pub const RULES: &[&str] = &["r1", "r2", "r3"];

/// Run all rules. `today` is the reference date for recent births.
pub fn analyze(genealogy: &Genealogy, today: Date) -> AnalysisReport {
    let mut report = AnalysisReport::new(today);
    run_rule(&mut report, genealogy, "r1");
    run_rule(&mut report, genealogy, "r2");
    run_rule(&mut report, genealogy, "r3");
    report.extract_findings();
    report
}

/// Run only the named rules, in R1-R3 order regardless of the order given.
pub fn analyze_selected(
    genealogy: &Genealogy,
    today: Date,
    rules: &[&str],
) -> Result<AnalysisReport, AnalysisError> {
    if let Some(unknown) = rules.iter().find(|r| !RULES.contains(*r)) {
        return Err(AnalysisError::UnknownRule(unknown.to_string()));
    }

    let mut report = AnalysisReport::new(today);
    for rule in RULES.iter().filter(|r| rules.contains(*r)) {
        run_rule(&mut report, genealogy, rule);
    }
    report.extract_findings();
    Ok(report)
}

fn run_rule(report: &mut AnalysisReport, genealogy: &Genealogy, rule: &str) {
    match rule {
        "r1" => report.r1_age_gap = Some(r1_age_gap::analyze_age_gaps(genealogy)),
        "r2" => {
            report.r2_recent_births = Some(r2_recent_births::analyze_recent_births(
                genealogy,
                report.today,
            ))
        }
        "r3" => report.r3_marital = Some(r3_marital::classify_marital_status(genealogy)),
        _ => return,
    }
    tracing::debug!(rule, "rule evaluated");
    report.analyses_run.push(rule.to_string());
}
