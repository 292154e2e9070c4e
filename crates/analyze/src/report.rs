//! AnalysisReport — aggregated output from the R1-R3 rules.
//!
//! The report collects results from each rule module and extracts
//! notable findings for summary display.

use crate::r1_age_gap::R1Result;
use crate::r2_recent_births::R2Result;
use crate::r3_marital::R3Result;
use serde::Serialize;
use time::Date;

/// Severity level for an analysis finding.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum FindingSeverity {
    Info,
    Warning,
}

/// A notable finding from analysis.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub analysis: String,
    pub severity: FindingSeverity,
    pub message: String,
    pub entity_id: Option<String>,
    pub details: Option<serde_json::Value>,
}

/// Aggregated analysis report containing all rule results and findings.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub today: Date,
    pub r1_age_gap: Option<R1Result>,
    pub r2_recent_births: Option<R2Result>,
    pub r3_marital: Option<R3Result>,
    pub analyses_run: Vec<String>,
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    /// Create a new empty report.
    pub fn new(today: Date) -> Self {
        AnalysisReport {
            today,
            r1_age_gap: None,
            r2_recent_births: None,
            r3_marital: None,
            analyses_run: Vec::new(),
            findings: Vec::new(),
        }
    }

    /// Extract findings from populated rule results.
    pub fn extract_findings(&mut self) {
        self.findings.clear();

        // R1: age gap anomalies
        if let Some(ref r1) = self.r1_age_gap {
            for a in &r1.anomalies {
                self.findings.push(Finding {
                    analysis: "r1".to_string(),
                    severity: FindingSeverity::Warning,
                    message: format!(
                        "Family {}: {} {} (age {}) is more than twice the age of {} {} (age {})",
                        a.family_id,
                        a.older_id,
                        a.older_name,
                        a.older_age,
                        a.younger_id,
                        a.younger_name,
                        a.younger_age
                    ),
                    entity_id: Some(a.family_id.clone()),
                    details: Some(serde_json::json!({
                        "older": a.older_id,
                        "younger": a.younger_id,
                    })),
                });
            }
        }

        // R2: recent births
        if let Some(ref r2) = self.r2_recent_births {
            for b in &r2.births {
                self.findings.push(Finding {
                    analysis: "r2".to_string(),
                    severity: FindingSeverity::Info,
                    message: format!(
                        "{} {} was born {} day(s) ago on {}",
                        b.individual_id, b.name, b.days_ago, b.birth
                    ),
                    entity_id: Some(b.individual_id.clone()),
                    details: None,
                });
            }
        }
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == FindingSeverity::Warning)
            .count()
    }
}
