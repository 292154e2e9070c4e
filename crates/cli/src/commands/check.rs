use std::collections::BTreeMap;
use std::path::Path;
use std::process;

use time::Date;

use crate::{elaborate_or_exit, print_json, report_error, OutputFormat};

pub(crate) fn cmd_check(
    file: &Path,
    rules: Option<&str>,
    today: Option<Date>,
    output: OutputFormat,
    quiet: bool,
) {
    // Step 1: Run the pipeline
    let out = elaborate_or_exit(file, today, output, quiet);

    // Step 2: Run the rules
    let report = match rules {
        None => gedcom_analyze::analyze(out.genealogy(), out.today()),
        Some(list) => {
            let selected: Vec<&str> = list.split(',').map(|s| s.trim()).collect();
            match gedcom_analyze::analyze_selected(out.genealogy(), out.today(), &selected) {
                Ok(r) => r,
                Err(e) => {
                    report_error(&e.to_string(), output, quiet);
                    process::exit(1);
                }
            }
        }
    };

    // Step 3: Format output
    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            if quiet {
                return;
            }
            println!("Rule Report ({})", report.today);
            println!("=======================");
            println!();

            if report.findings.is_empty() {
                println!("  No findings.");
            }
            for finding in &report.findings {
                let label = match finding.severity {
                    gedcom_analyze::FindingSeverity::Warning => "ANOMALY",
                    gedcom_analyze::FindingSeverity::Info => "INFO",
                };
                println!("  {} [{}]: {}", label, finding.analysis, finding.message);
            }

            if let Some(ref r3) = report.r3_marital {
                println!();
                print_people("Living and married", &r3.living_married);
                println!();
                print_people("Living, over 30, never married", &r3.living_single_over_thirty);
            }
        }
    }
}

fn print_people(title: &str, people: &BTreeMap<String, String>) {
    println!("{} ({}):", title, people.len());
    for (id, name) in people {
        println!("  {} {}", id, name);
    }
}
