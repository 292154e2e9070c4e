//! Conversion of `D MON YYYY` date arguments into calendar dates.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::parsing::Parsed;
use time::Date;

/// Parse a date argument such as `7 MAR 1981`.
///
/// Each token is parsed on its own so the error names the bad component.
/// The error is a short reason suitable for `GedcomError::MalformedDate`.
pub fn parse_date(value: &str) -> Result<Date, String> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let [day, month, year] = tokens.as_slice() else {
        return Err(format!(
            "expected 'DAY MON YEAR', found {} token(s)",
            tokens.len()
        ));
    };

    let mut parsed = Parsed::new();
    parse_component(&mut parsed, day, "day", format_description!("[day padding:none]"))?;
    parse_component(
        &mut parsed,
        month,
        "month",
        format_description!("[month repr:short case_sensitive:false]"),
    )?;
    parse_component(&mut parsed, year, "year", format_description!("[year]"))?;

    Date::try_from(parsed).map_err(|e| e.to_string())
}

fn parse_component(
    parsed: &mut Parsed,
    token: &str,
    name: &str,
    items: &[BorrowedFormatItem<'_>],
) -> Result<(), String> {
    match parsed.parse_items(token.as_bytes(), items) {
        Ok(rest) if rest.is_empty() => Ok(()),
        _ => Err(format!("invalid {} '{}'", name, token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_gedcom_dates() {
        assert_eq!(parse_date("7 MAR 1981"), Ok(date!(1981 - 03 - 07)));
        assert_eq!(parse_date("31 DEC 1999"), Ok(date!(1999 - 12 - 31)));
        assert_eq!(parse_date("01 jan 2000"), Ok(date!(2000 - 01 - 01)));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert!(parse_date("MAR 1981").is_err());
        assert!(parse_date("1981").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("ABT 7 MAR 1981").is_err());
    }

    #[test]
    fn rejects_bad_components() {
        assert!(parse_date("x MAR 1981").unwrap_err().contains("day"));
        assert!(parse_date("7 MARCH 1981").unwrap_err().contains("month"));
        assert!(parse_date("7 MAR 19x1").unwrap_err().contains("year"));
        assert!(parse_date("7 MAR 81").unwrap_err().contains("year"));
        assert!(parse_date("123 MAR 1981").unwrap_err().contains("day"));
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(parse_date("31 FEB 2000").is_err());
        assert!(parse_date("0 JAN 2000").is_err());
        assert!(parse_date("29 FEB 2001").is_err());
        assert_eq!(parse_date("29 FEB 2000"), Ok(date!(2000 - 02 - 29)));
    }
}
