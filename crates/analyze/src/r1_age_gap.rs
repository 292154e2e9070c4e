//! R1 — Spouse age gap anomaly.
//!
//! A family is flagged when one spouse is strictly more than twice as old as
//! the other. Families where either spouse is missing from the individual
//! table, or has no known age, are not evaluated. A negative age (birth
//! date after the reference date) counts as unknown here.

use gedcom_core::{Genealogy, Individual};
use serde::Serialize;

/// One flagged family. The older spouse is always named first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeGapAnomaly {
    pub family_id: String,
    pub older_id: String,
    pub older_name: String,
    pub older_age: i64,
    pub younger_id: String,
    pub younger_name: String,
    pub younger_age: i64,
}

/// Aggregated R1 result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct R1Result {
    pub families_checked: usize,
    pub anomalies: Vec<AgeGapAnomaly>,
}

/// R1 — Find families with a spouse more than twice the other's age.
pub fn analyze_age_gaps(genealogy: &Genealogy) -> R1Result {
    let mut families_checked = 0;
    let mut anomalies = Vec::new();

    for family in &genealogy.families {
        let husband = family.husband.as_deref().and_then(|id| genealogy.individual(id));
        let wife = family.wife.as_deref().and_then(|id| genealogy.individual(id));
        let (Some(husband), Some(wife)) = (husband, wife) else {
            continue;
        };
        let (Some(h_age), Some(w_age)) = (known_age(husband), known_age(wife)) else {
            continue;
        };
        families_checked += 1;

        let pair = if h_age > 2 * w_age {
            Some((husband, h_age, wife, w_age))
        } else if w_age > 2 * h_age {
            Some((wife, w_age, husband, h_age))
        } else {
            None
        };

        if let Some((older, older_age, younger, younger_age)) = pair {
            anomalies.push(anomaly(&family.id, older, older_age, younger, younger_age));
        }
    }

    R1Result {
        families_checked,
        anomalies,
    }
}

fn known_age(ind: &Individual) -> Option<i64> {
    ind.age.filter(|age| *age >= 0)
}

fn anomaly(
    family_id: &str,
    older: &Individual,
    older_age: i64,
    younger: &Individual,
    younger_age: i64,
) -> AgeGapAnomaly {
    AgeGapAnomaly {
        family_id: family_id.to_string(),
        older_id: older.id.clone(),
        older_name: older.name.clone(),
        older_age,
        younger_id: younger.id.clone(),
        younger_name: younger.name.clone(),
        younger_age,
    }
}
