//! R3 — Marital classification of living individuals.
//!
//! Living individuals with at least one family-as-spouse membership are
//! "living and married". Living individuals with none, and a known age over
//! 30, are "living, over 30, never married". The two sets cannot overlap.

use gedcom_core::Genealogy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Age a never-married individual must exceed to be listed.
pub const SINGLE_AGE_THRESHOLD: i64 = 30;

/// Aggregated R3 result. Both maps are identifier -> display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct R3Result {
    pub living_married: BTreeMap<String, String>,
    pub living_single_over_thirty: BTreeMap<String, String>,
}

/// R3 — Partition living individuals by marital status.
pub fn classify_marital_status(genealogy: &Genealogy) -> R3Result {
    let mut result = R3Result::default();

    for ind in genealogy.individuals.iter().filter(|i| i.living) {
        if ind.is_married() {
            result
                .living_married
                .insert(ind.id.clone(), ind.name.clone());
        } else if ind.age.is_some_and(|age| age > SINGLE_AGE_THRESHOLD) {
            result
                .living_single_over_thirty
                .insert(ind.id.clone(), ind.name.clone());
        }
    }

    result
}
