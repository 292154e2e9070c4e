//! gedcom-core: GEDCOM ingestion library.
//!
//! Provides the three-pass pipeline from GEDCOM text to a resolved
//! record graph:
//!
//! - Pass 1 ([`validate_lines`]) classifies every line against the fixed
//!   tag [`schema`].
//! - Pass 2 ([`assemble`]) folds valid lines into [`Individual`] and
//!   [`Family`] tables, computing ages as individuals close.
//! - Pass 3 ([`resolve_references`]) back-fills spouse, ex-spouse and
//!   child-of-family links from the family table.
//!
//! [`Pipeline`] runs all three in order.

pub mod age;
pub mod date;
pub mod error;
pub mod model;
pub mod pass1_validate;
pub mod pass2_assemble;
pub mod pass3_resolve;
pub mod pipeline;
pub mod schema;
pub mod source;

// ── Convenience re-exports: key types ────────────────────────────────

pub use error::GedcomError;
pub use model::{Family, Genealogy, Individual, Keyed, Table};
pub use pass1_validate::ValidatedLine;
pub use pipeline::{Elaborated, Pipeline, PipelineOptions};

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use age::compute_age;
pub use pass1_validate::validate_lines;
pub use pass2_assemble::assemble;
pub use pass3_resolve::resolve_references;
pub use pipeline::elaborate;
