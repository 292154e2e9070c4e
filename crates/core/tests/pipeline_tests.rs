//! End-to-end tests: run the full pipeline over the Smith family fixture and
//! check the resolved record graph.

use gedcom_core::{Pipeline, PipelineOptions};
use std::path::{Path, PathBuf};
use time::macros::date;

/// Locate the workspace root.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

fn elaborate_fixture(fixture: &str) -> gedcom_core::Elaborated {
    let path = workspace_root().join(fixture);
    Pipeline::new(PipelineOptions::with_today(date!(2024 - 06 - 15)))
        .run_path(&path)
        .unwrap_or_else(|e| panic!("pipeline failed for {}: {}", fixture, e))
}

#[test]
fn fixture_lines_are_all_kept() {
    let out = elaborate_fixture("fixtures/smith_family.ged");
    assert_eq!(out.lines().len(), 83);

    let invalid: Vec<String> = out
        .lines()
        .iter()
        .filter(|l| !l.valid)
        .map(|l| l.to_string())
        .collect();
    assert_eq!(
        invalid,
        vec![
            "<-- 2|PLAC|N|Springfield",
            "<-- 2|NAME|N|misplaced",
            "<-- 0|@S1@|N|SOUR",
            "<-- 1|TITL|N|Parish register",
        ]
    );
}

#[test]
fn fixture_tables_are_complete() {
    let out = elaborate_fixture("fixtures/smith_family.ged");
    let g = out.genealogy();

    let ids: Vec<&str> = g.individuals.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["@I1@", "@I2@", "@I3@", "@I4@", "@I5@", "@I6@", "@I7@", "@I8@", "@I9@"]
    );
    assert_eq!(g.families.len(), 4);
}

#[test]
fn fixture_individual_attributes() {
    let out = elaborate_fixture("fixtures/smith_family.ged");
    let g = out.genealogy();

    let john = g.individual("@I1@").unwrap();
    assert_eq!(john.name, "John /Smith/");
    assert_eq!(john.sex, "M");
    assert_eq!(john.birth, Some(date!(1950 - 01 - 10)));
    assert_eq!(john.age, Some(74));
    assert!(john.living);

    let walter = g.individual("@I4@").unwrap();
    assert!(!walter.living);
    assert_eq!(walter.death, Some(date!(1980 - 01 - 01)));
    assert_eq!(walter.age, Some(80));

    let kim = g.individual("@I8@").unwrap();
    assert_eq!(kim.name, "Kim /Young/");
    assert_eq!(kim.age, Some(24));
}

#[test]
fn fixture_relationships_are_resolved() {
    let out = elaborate_fixture("fixtures/smith_family.ged");
    let g = out.genealogy();

    let mary = g.individual("@I2@").unwrap();
    assert_eq!(mary.spouse.as_deref(), Some("@I1@"));
    assert_eq!(mary.ex_spouses, vec!["@I9@".to_string()]);
    assert_eq!(mary.spouse_of.len(), 2);

    let frank = g.individual("@I9@").unwrap();
    assert_eq!(frank.spouse, None);
    assert_eq!(frank.ex_spouses, vec!["@I2@".to_string()]);

    assert_eq!(g.individual("@I3@").unwrap().child_of.as_deref(), Some("@F1@"));
    assert_eq!(g.individual("@I8@").unwrap().child_of.as_deref(), Some("@F4@"));

    let f3 = g.family("@F3@").unwrap();
    assert!(f3.married && f3.divorced);
    assert_eq!(f3.divorce, Some(date!(1973 - 01 - 01)));
}

#[test]
fn fixture_broken_reference_is_skipped() {
    let out = elaborate_fixture("fixtures/smith_family.ged");
    let g = out.genealogy();

    let f4 = g.family("@F4@").unwrap();
    assert_eq!(f4.husband.as_deref(), Some("@I404@"));
    assert_eq!(f4.husband_name, None);
    assert!(g.individual("@I404@").is_none());
}
