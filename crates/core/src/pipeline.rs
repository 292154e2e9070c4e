//! Pipeline orchestrator: validate -> assemble -> resolve.
//!
//! A [`Pipeline`] is constructed fresh per run and owns nothing but its
//! options. [`Pipeline::run`] returns an [`Elaborated`] value that owns the
//! validated lines and the finished tables and only hands out shared views.

use crate::error::GedcomError;
use crate::model::Genealogy;
use crate::pass1_validate::{self, ValidatedLine};
use crate::pass2_assemble;
use crate::pass3_resolve;
use crate::source::{FileSystemProvider, SourceProvider};
use std::path::Path;
use time::{Date, OffsetDateTime};

/// Options for a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Reference date for ages of living individuals. Defaults to the
    /// current UTC date.
    pub today: Option<Date>,
}

impl PipelineOptions {
    pub fn with_today(today: Date) -> Self {
        PipelineOptions { today: Some(today) }
    }
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    today: Date,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Pipeline {
            today: options
                .today
                .unwrap_or_else(|| OffsetDateTime::now_utc().date()),
        }
    }

    /// The reference date this pipeline computes ages against.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Run all passes over GEDCOM source text.
    pub fn run(&self, src: &str) -> Result<Elaborated, GedcomError> {
        // Pass 1: line validation
        let lines = pass1_validate::validate_lines(src);
        tracing::info!(
            lines = lines.len(),
            invalid = lines.iter().filter(|l| !l.valid).count(),
            "validated lines"
        );

        // Pass 2: record assembly (ages are computed as each individual closes)
        let mut genealogy = pass2_assemble::assemble(&lines, self.today)?;
        tracing::info!(
            individuals = genealogy.individuals.len(),
            families = genealogy.families.len(),
            "assembled records"
        );

        // Pass 3: cross-reference resolution
        pass3_resolve::resolve_references(&mut genealogy);

        Ok(Elaborated {
            today: self.today,
            lines,
            genealogy,
        })
    }

    /// Read `path` through `provider` and run all passes.
    pub fn run_path_with_provider(
        &self,
        path: &Path,
        provider: &dyn SourceProvider,
    ) -> Result<Elaborated, GedcomError> {
        let src = read_source(path, provider)?;
        self.run(&src)
    }

    /// Read `path` through `provider` and run pass 1 only. No dates are
    /// parsed, so this never fails on record content.
    pub fn validate_path_with_provider(
        &self,
        path: &Path,
        provider: &dyn SourceProvider,
    ) -> Result<Vec<ValidatedLine>, GedcomError> {
        let src = read_source(path, provider)?;
        Ok(pass1_validate::validate_lines(&src))
    }

    /// Read `path` from the filesystem and run pass 1 only.
    pub fn validate_path(&self, path: &Path) -> Result<Vec<ValidatedLine>, GedcomError> {
        self.validate_path_with_provider(path, &FileSystemProvider)
    }

    /// Read `path` from the filesystem and run all passes.
    pub fn run_path(&self, path: &Path) -> Result<Elaborated, GedcomError> {
        self.run_path_with_provider(path, &FileSystemProvider)
    }
}

fn read_source(path: &Path, provider: &dyn SourceProvider) -> Result<String, GedcomError> {
    provider
        .read_source(path)
        .map_err(|e| GedcomError::source(&path.to_string_lossy(), &e))
}

/// The output of a pipeline run.
#[derive(Debug, Clone)]
pub struct Elaborated {
    today: Date,
    lines: Vec<ValidatedLine>,
    genealogy: Genealogy,
}

impl Elaborated {
    pub fn today(&self) -> Date {
        self.today
    }

    /// Every non-blank input line, valid or not, in source order.
    pub fn lines(&self) -> &[ValidatedLine] {
        &self.lines
    }

    pub fn genealogy(&self) -> &Genealogy {
        &self.genealogy
    }

    pub fn into_genealogy(self) -> Genealogy {
        self.genealogy
    }
}

/// Run the pipeline over the file at `path`.
pub fn elaborate(path: &Path, options: PipelineOptions) -> Result<Elaborated, GedcomError> {
    Pipeline::new(options).run_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryProvider;
    use time::macros::date;

    const SRC: &str = "0 HEAD\n0 @I1@ INDI\n1 NAME Tom\n1 FAMS @F1@\n1 BOGUS x\n\n0 @F1@ FAM\n1 HUSB @I1@\n0 TRLR\n";

    fn pipeline() -> Pipeline {
        Pipeline::new(PipelineOptions::with_today(date!(2024 - 06 - 15)))
    }

    #[test]
    fn run_keeps_invalid_lines_and_builds_tables() {
        let out = pipeline().run(SRC).unwrap();
        assert_eq!(out.lines().len(), 8);
        assert_eq!(out.lines().iter().filter(|l| !l.valid).count(), 1);
        assert_eq!(out.genealogy().individuals.len(), 1);
        assert_eq!(
            out.genealogy().family("@F1@").unwrap().husband_name.as_deref(),
            Some("Tom")
        );
    }

    #[test]
    fn runs_are_independent() {
        let p = pipeline();
        let first = p.run(SRC).unwrap();
        let second = p.run("0 @I9@ INDI\n").unwrap();
        assert_eq!(first.genealogy().individuals.len(), 1);
        assert!(second.genealogy().individual("@I1@").is_none());
        assert!(second.genealogy().individual("@I9@").is_some());
    }

    #[test]
    fn default_today_is_current_date() {
        let p = Pipeline::new(PipelineOptions::default());
        assert_eq!(p.today(), OffsetDateTime::now_utc().date());
    }

    #[test]
    fn provider_errors_become_source_errors() {
        let provider = InMemoryProvider::single("/a.ged", SRC);
        let err = pipeline()
            .run_path_with_provider(Path::new("/b.ged"), &provider)
            .unwrap_err();
        assert!(matches!(err, GedcomError::Source { .. }));

        let ok = pipeline()
            .run_path_with_provider(Path::new("/a.ged"), &provider)
            .unwrap();
        assert_eq!(ok.genealogy().families.len(), 1);
    }

    #[test]
    fn validate_path_lists_lines_despite_malformed_date() {
        let provider = InMemoryProvider::single(
            "/bad.ged",
            "0 @I1@ INDI\n1 BIRT\n2 DATE 31 FEB 1981\n1 BOGUS x\n",
        );
        let lines = pipeline()
            .validate_path_with_provider(Path::new("/bad.ged"), &provider)
            .unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].valid);
        assert_eq!(lines[2].argument, "31 FEB 1981");
        assert!(!lines[3].valid);

        let err = pipeline()
            .validate_path_with_provider(Path::new("/other.ged"), &provider)
            .unwrap_err();
        assert!(matches!(err, GedcomError::Source { .. }));
    }

    #[test]
    fn malformed_date_aborts_run() {
        let err = pipeline()
            .run("0 @F1@ FAM\n1 MARR\n2 DATE 14 FOO 1980\n")
            .unwrap_err();
        assert!(err.to_string().contains("@F1@"));
        assert_eq!(err.to_json_value()["kind"], "malformed_date");
    }
}
