//! Pass 3: Cross-reference resolution -- back-fill the individual side of
//! every relationship a family declares.
//!
//! Families are visited in table order. For each one:
//! - a married (not divorced) couple get each other as current spouse, so an
//!   individual who is a spouse in several such families ends up with the
//!   partner from the last one;
//! - a divorced couple get each other appended to their ex-spouse lists;
//! - every listed child gets the family as its family-as-child;
//! - the spouses' display names are copied onto the family.
//!
//! Identifiers that do not resolve are skipped. Nothing is created on demand.
//! Running the pass twice is stable for spouses and children but appends the
//! ex-spouse entries again.

use crate::model::{Family, Genealogy, Individual, Table};

pub fn resolve_references(genealogy: &mut Genealogy) {
    let individuals = &mut genealogy.individuals;
    for family in genealogy.families.iter_mut() {
        resolve_family(family, individuals);
    }
}

fn resolve_family(family: &mut Family, individuals: &mut Table<Individual>) {
    family.husband_name = spouse_name(family, family.husband.as_deref(), individuals);
    family.wife_name = spouse_name(family, family.wife.as_deref(), individuals);

    if let (Some(husband), Some(wife)) = (family.husband.as_deref(), family.wife.as_deref()) {
        link_spouse(individuals, husband, wife, family.divorced);
        link_spouse(individuals, wife, husband, family.divorced);
    }

    for child in &family.children {
        match individuals.get_mut(child) {
            Some(ind) => ind.child_of = Some(family.id.clone()),
            None => {
                tracing::debug!(family = %family.id, child = %child, "unresolved child reference")
            }
        }
    }
}

fn spouse_name(family: &Family, id: Option<&str>, individuals: &Table<Individual>) -> Option<String> {
    let id = id?;
    match individuals.get(id) {
        Some(ind) => Some(ind.name.clone()),
        None => {
            tracing::debug!(family = %family.id, spouse = %id, "unresolved spouse reference");
            None
        }
    }
}

/// Record `partner` on `id`'s side of the relationship, if `id` resolves.
fn link_spouse(individuals: &mut Table<Individual>, id: &str, partner: &str, divorced: bool) {
    let Some(ind) = individuals.get_mut(id) else {
        return;
    };
    if divorced {
        ind.ex_spouses.push(partner.to_string());
    } else {
        ind.spouse = Some(partner.to_string());
    }
}
