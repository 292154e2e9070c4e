//! Pass 2: Record assembly -- fold the stream of valid lines into the
//! individual and family tables.
//!
//! The assembler is a small state machine. A level-0 line always closes the
//! record in progress; `INDI` and `FAM` then open a new one. Marker tags
//! (`BIRT`, `DEAT`, `MARR`, `DIV`) prime the next `DATE` line. A primed
//! marker survives other detail lines and is only dropped when its `DATE`
//! consumes it, when another marker replaces it, or when the record closes.

use crate::age;
use crate::date;
use crate::error::GedcomError;
use crate::model::{Family, Genealogy, Individual};
use crate::pass1_validate::ValidatedLine;
use time::Date;

/// Which individual field the next `DATE` line fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndividualDate {
    Birth,
    Death,
}

/// Which family field the next `DATE` line fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyDate {
    Marriage,
    Divorce,
}

/// The record currently being assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Idle,
    InIndividual {
        record: Individual,
        pending: Option<IndividualDate>,
    },
    InFamily {
        record: Family,
        pending: Option<FamilyDate>,
    },
}

/// Incremental record assembler. Feed it validated lines in source order,
/// then call [`Assembler::finish`].
#[derive(Debug)]
pub struct Assembler {
    today: Date,
    state: State,
    genealogy: Genealogy,
}

impl Assembler {
    /// `today` is the reference date for the age of living individuals.
    pub fn new(today: Date) -> Self {
        Assembler {
            today,
            state: State::Idle,
            genealogy: Genealogy::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Records closed so far.
    pub fn genealogy(&self) -> &Genealogy {
        &self.genealogy
    }

    /// Fold one line into the tables. Invalid lines are ignored.
    pub fn feed(&mut self, line: &ValidatedLine) -> Result<(), GedcomError> {
        if !line.valid {
            return Ok(());
        }

        if line.level_number() == Some(0) {
            self.close();
            self.open(line);
            return Ok(());
        }

        match &mut self.state {
            State::Idle => {}
            State::InIndividual { record, pending } => {
                individual_detail(record, pending, line)?;
            }
            State::InFamily { record, pending } => {
                family_detail(record, pending, line)?;
            }
        }
        Ok(())
    }

    /// Close any open record and return the assembled tables.
    pub fn finish(mut self) -> Genealogy {
        self.close();
        self.genealogy
    }

    fn open(&mut self, line: &ValidatedLine) {
        if !matches!(line.tag.as_str(), "INDI" | "FAM") {
            return;
        }
        if line.argument.is_empty() {
            tracing::warn!(line = line.line, tag = %line.tag, "record opener without identifier ignored");
            return;
        }
        tracing::debug!(line = line.line, id = %line.argument, tag = %line.tag, "open record");
        self.state = if line.tag == "INDI" {
            State::InIndividual {
                record: Individual::new(line.argument.as_str()),
                pending: None,
            }
        } else {
            State::InFamily {
                record: Family::new(line.argument.as_str()),
                pending: None,
            }
        };
    }

    fn close(&mut self) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::InIndividual { mut record, .. } => {
                age::compute_age(&mut record, self.today);
                tracing::debug!(id = %record.id, "close individual");
                self.genealogy.individuals.insert(record);
            }
            State::InFamily { record, .. } => {
                tracing::debug!(id = %record.id, "close family");
                self.genealogy.families.insert(record);
            }
        }
    }
}

/// Run the assembler over a whole line sequence.
pub fn assemble(lines: &[ValidatedLine], today: Date) -> Result<Genealogy, GedcomError> {
    let mut assembler = Assembler::new(today);
    for line in lines {
        assembler.feed(line)?;
    }
    Ok(assembler.finish())
}

fn individual_detail(
    record: &mut Individual,
    pending: &mut Option<IndividualDate>,
    line: &ValidatedLine,
) -> Result<(), GedcomError> {
    if line.tag == "DATE" {
        let Some(target) = pending.take() else {
            tracing::warn!(line = line.line, id = %record.id, "DATE without a preceding BIRT/DEAT ignored");
            return Ok(());
        };
        let date = parse_record_date(&record.id, line)?;
        match target {
            IndividualDate::Birth => record.birth = Some(date),
            IndividualDate::Death => {
                record.death = Some(date);
                record.living = false;
            }
        }
        return Ok(());
    }

    let arg = line.argument.as_str();
    match line.tag.as_str() {
        "NAME" => record.name = arg.to_string(),
        "SEX" => record.sex = arg.to_string(),
        "BIRT" => *pending = Some(IndividualDate::Birth),
        "DEAT" => *pending = Some(IndividualDate::Death),
        "FAMC" if !arg.is_empty() => record.child_of = Some(arg.to_string()),
        "FAMS" if !arg.is_empty() => {
            record.spouse_of.insert(arg.to_string());
        }
        _ => {}
    }
    Ok(())
}

fn family_detail(
    record: &mut Family,
    pending: &mut Option<FamilyDate>,
    line: &ValidatedLine,
) -> Result<(), GedcomError> {
    if line.tag == "DATE" {
        let Some(target) = pending.take() else {
            tracing::warn!(line = line.line, id = %record.id, "DATE without a preceding MARR/DIV ignored");
            return Ok(());
        };
        let date = parse_record_date(&record.id, line)?;
        match target {
            FamilyDate::Marriage => {
                record.marriage = Some(date);
                record.married = true;
            }
            FamilyDate::Divorce => {
                record.divorce = Some(date);
                record.divorced = true;
            }
        }
        return Ok(());
    }

    let arg = line.argument.as_str();
    match line.tag.as_str() {
        "HUSB" if !arg.is_empty() => record.husband = Some(arg.to_string()),
        "WIFE" if !arg.is_empty() => record.wife = Some(arg.to_string()),
        "CHIL" if !arg.is_empty() => {
            record.children.insert(arg.to_string());
        }
        "MARR" => *pending = Some(FamilyDate::Marriage),
        "DIV" => *pending = Some(FamilyDate::Divorce),
        _ => {}
    }
    Ok(())
}

fn parse_record_date(record_id: &str, line: &ValidatedLine) -> Result<Date, GedcomError> {
    date::parse_date(&line.argument)
        .map_err(|reason| GedcomError::malformed_date(record_id, line.line, &line.argument, reason))
}
