use std::path::Path;
use std::process;

use gedcom_core::{Pipeline, PipelineOptions};

use crate::{print_json, report_gedcom_error, OutputFormat};

/// Print every non-blank line as a `<-- level|TAG|Y/N|argument` entry.
/// Only line validation runs, so invalid lines and malformed dates are
/// listed rather than treated as failures.
pub(crate) fn cmd_validate(file: &Path, output: OutputFormat, quiet: bool) {
    let lines = match Pipeline::new(PipelineOptions::default()).validate_path(file) {
        Ok(lines) => lines,
        Err(e) => {
            report_gedcom_error(&e, output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => print_json(&lines),
        OutputFormat::Text => {
            for line in &lines {
                println!("{}", line);
            }
            if !quiet {
                let invalid = lines.iter().filter(|l| !l.valid).count();
                eprintln!("{} line(s), {} invalid", lines.len(), invalid);
            }
        }
    }
}
