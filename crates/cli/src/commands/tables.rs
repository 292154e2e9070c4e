use std::path::Path;

use gedcom_core::{Family, Genealogy, Individual};
use time::Date;

use crate::table::TextTable;
use crate::{elaborate_or_exit, print_json, OutputFormat};

const INDIVIDUAL_HEADERS: [&str; 9] = [
    "ID", "Name", "Gender", "Birthday", "Age", "Alive", "Death", "Child", "Spouse",
];

const FAMILY_HEADERS: [&str; 8] = [
    "ID",
    "Married",
    "Divorced",
    "Husband ID",
    "Husband Name",
    "Wife ID",
    "Wife Name",
    "Children",
];

pub(crate) fn cmd_tables(file: &Path, today: Option<Date>, output: OutputFormat, quiet: bool) {
    let out = elaborate_or_exit(file, today, output, quiet);
    let genealogy = out.genealogy();

    match output {
        OutputFormat::Json => print_json(genealogy),
        // --quiet drops the section titles and keeps the tables.
        OutputFormat::Text => {
            if !quiet {
                println!("Individuals");
            }
            println!("{}", individuals_table(genealogy));
            if !quiet {
                println!();
                println!("Families");
            }
            println!("{}", families_table(genealogy));
        }
    }
}

pub(crate) fn individuals_table(genealogy: &Genealogy) -> TextTable {
    let mut table = TextTable::new(&INDIVIDUAL_HEADERS);
    for ind in &genealogy.individuals {
        table.add_row(individual_row(ind));
    }
    table
}

pub(crate) fn families_table(genealogy: &Genealogy) -> TextTable {
    let mut table = TextTable::new(&FAMILY_HEADERS);
    for fam in &genealogy.families {
        table.add_row(family_row(fam));
    }
    table
}

fn individual_row(ind: &Individual) -> Vec<String> {
    vec![
        ind.id.clone(),
        ind.name.clone(),
        ind.sex.clone(),
        date_or_na(ind.birth),
        ind.age.map_or_else(|| "NA".to_string(), |a| a.to_string()),
        (if ind.living { "True" } else { "False" }).to_string(),
        date_or_na(ind.death),
        ind.child_of.clone().unwrap_or_else(|| "None".to_string()),
        join_or(ind.spouse_of.iter(), "NA"),
    ]
}

fn family_row(fam: &Family) -> Vec<String> {
    vec![
        fam.id.clone(),
        date_or_na(fam.marriage),
        date_or_na(fam.divorce),
        fam.husband.clone().unwrap_or_else(|| "NA".to_string()),
        fam.husband_name.clone().unwrap_or_else(|| "Unknown".to_string()),
        fam.wife.clone().unwrap_or_else(|| "NA".to_string()),
        fam.wife_name.clone().unwrap_or_else(|| "Unknown".to_string()),
        join_or(fam.children.iter(), "None"),
    ]
}

fn date_or_na(date: Option<Date>) -> String {
    date.map_or_else(|| "NA".to_string(), |d| d.to_string())
}

fn join_or<'a>(items: impl Iterator<Item = &'a String>, empty: &str) -> String {
    let joined: Vec<&str> = items.map(String::as_str).collect();
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined.join(", ")
    }
}
