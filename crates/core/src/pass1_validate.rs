//! Pass 1: Line validation -- classify each raw line as a
//! `(level, tag, valid, argument)` quad against the tag schema.
//!
//! Record openers may be written with the identifier before the tag
//! (`0 @I1@ INDI`); those lines are normalized so the tag is `INDI` and the
//! argument is the identifier, exactly as if `0 INDI @I1@` had been written.
//! Invalid lines are kept and marked, never dropped.

use crate::schema;
use serde::Serialize;
use std::fmt;

/// One classified, non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedLine {
    /// 1-based line number in the source.
    pub line: u32,
    /// The level token as written.
    pub level: String,
    pub tag: String,
    pub valid: bool,
    pub argument: String,
}

impl ValidatedLine {
    /// The level as a number, if the level token is a plain decimal.
    pub fn level_number(&self) -> Option<u8> {
        parse_level(&self.level)
    }
}

impl fmt::Display for ValidatedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<-- {}|{}|{}|{}",
            self.level,
            self.tag,
            if self.valid { "Y" } else { "N" },
            self.argument
        )
    }
}

/// Validate every line of `src`. Blank lines produce no entry.
pub fn validate_lines(src: &str) -> Vec<ValidatedLine> {
    src.lines()
        .enumerate()
        .filter_map(|(i, raw)| validate_line(i as u32 + 1, raw))
        .collect()
}

/// Validate a single raw line, or `None` if it is blank.
pub fn validate_line(line: u32, raw: &str) -> Option<ValidatedLine> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let (level, rest) = tokens.split_first()?;

    let (tag, argument) = match rest {
        [id, tag] if schema::is_record_opener(tag) && schema::required_level(id).is_none() => {
            (tag.to_string(), id.to_string())
        }
        [tag, args @ ..] => (tag.to_string(), args.join(" ")),
        [] => (String::new(), String::new()),
    };

    let valid = match (parse_level(level), schema::required_level(&tag)) {
        (Some(declared), Some(required)) => declared == required,
        _ => false,
    };

    if !valid {
        tracing::debug!(line, level = *level, tag = %tag, "invalid line");
    }

    Some(ValidatedLine {
        line,
        level: level.to_string(),
        tag,
        valid,
        argument,
    })
}

fn parse_level(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
