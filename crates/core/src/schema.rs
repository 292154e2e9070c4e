//! The fixed tag schema: every modeled tag and the nesting level it must
//! appear at.

/// All tags the validator recognizes, paired with their required level.
pub const TAG_LEVELS: &[(&str, u8)] = &[
    ("INDI", 0),
    ("FAM", 0),
    ("HEAD", 0),
    ("TRLR", 0),
    ("NOTE", 0),
    ("NAME", 1),
    ("SEX", 1),
    ("BIRT", 1),
    ("DEAT", 1),
    ("FAMC", 1),
    ("FAMS", 1),
    ("MARR", 1),
    ("DIV", 1),
    ("HUSB", 1),
    ("WIFE", 1),
    ("CHIL", 1),
    ("DATE", 2),
];

/// The tags that open a record and may use the transposed
/// `<level> <identifier> <tag>` form.
pub const RECORD_OPENERS: &[&str] = &["INDI", "FAM"];

/// Required nesting level for `tag`, or `None` for an unknown tag.
/// Tags are case-sensitive.
pub fn required_level(tag: &str) -> Option<u8> {
    TAG_LEVELS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, level)| *level)
}

pub fn is_record_opener(tag: &str) -> bool {
    RECORD_OPENERS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_have_levels() {
        assert_eq!(required_level("INDI"), Some(0));
        assert_eq!(required_level("NAME"), Some(1));
        assert_eq!(required_level("DATE"), Some(2));
    }

    #[test]
    fn unknown_and_lowercase_tags_are_absent() {
        assert_eq!(required_level("PLAC"), None);
        assert_eq!(required_level("indi"), None);
        assert_eq!(required_level(""), None);
    }

    #[test]
    fn only_indi_and_fam_open_records() {
        assert!(is_record_opener("INDI"));
        assert!(is_record_opener("FAM"));
        assert!(!is_record_opener("HEAD"));
        assert!(!is_record_opener("FAMS"));
    }
}
