//! R2 — Recent births: individuals born within the last 30 days.

use gedcom_core::Genealogy;
use serde::Serialize;
use time::Date;

/// Inclusive upper bound of the recent-birth window, in days.
pub const RECENT_BIRTH_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentBirth {
    pub individual_id: String,
    pub name: String,
    pub birth: Date,
    pub days_ago: i64,
}

/// Aggregated R2 result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct R2Result {
    pub window_days: i64,
    pub births: Vec<RecentBirth>,
}

/// R2 — List individuals whose birth date is 0 to 30 days before `today`.
/// Births after `today` are not listed.
pub fn analyze_recent_births(genealogy: &Genealogy, today: Date) -> R2Result {
    let births = genealogy
        .individuals
        .iter()
        .filter_map(|ind| {
            let birth = ind.birth?;
            let days_ago = (today - birth).whole_days();
            (0..=RECENT_BIRTH_WINDOW_DAYS)
                .contains(&days_ago)
                .then(|| RecentBirth {
                    individual_id: ind.id.clone(),
                    name: ind.name.clone(),
                    birth,
                    days_ago,
                })
        })
        .collect();

    R2Result {
        window_days: RECENT_BIRTH_WINDOW_DAYS,
        births,
    }
}
