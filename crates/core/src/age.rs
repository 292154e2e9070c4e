//! Derived attributes: age and living status.

use crate::model::Individual;
use time::Date;

const DAYS_PER_YEAR: i64 = 365;

/// Whole-year age between `birth` and `reference`, using the 365-day
/// approximation and flooring toward negative infinity.
pub fn age_in_years(birth: Date, reference: Date) -> i64 {
    (reference - birth).whole_days().div_euclid(DAYS_PER_YEAR)
}

/// Set `individual.age` from its birth date. The reference date is the
/// death date for the deceased and `today` otherwise. Without a birth date
/// the age stays unknown.
pub fn compute_age(individual: &mut Individual, today: Date) {
    let Some(birth) = individual.birth else {
        return;
    };
    let reference = match (individual.living, individual.death) {
        (false, Some(death)) => death,
        _ => today,
    };
    individual.age = Some(age_in_years(birth, reference));
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2024 - 06 - 15);

    #[test]
    fn living_age_is_relative_to_today() {
        let mut ind = Individual::new("@I1@");
        ind.birth = Some(date!(1990 - 06 - 15));
        compute_age(&mut ind, TODAY);
        // 34 calendar years contain 9 leap days, which the approximation
        // counts as extra days but not as an extra year.
        assert_eq!(ind.age, Some(34));
    }

    #[test]
    fn deceased_age_is_relative_to_death() {
        let mut ind = Individual::new("@I1@");
        ind.birth = Some(date!(1900 - 01 - 01));
        ind.death = Some(date!(1950 - 01 - 01));
        ind.living = false;
        compute_age(&mut ind, TODAY);
        assert_eq!(ind.age, Some(50));
    }

    #[test]
    fn no_birth_date_keeps_age_unknown() {
        let mut ind = Individual::new("@I1@");
        ind.death = Some(date!(1950 - 01 - 01));
        ind.living = false;
        compute_age(&mut ind, TODAY);
        assert_eq!(ind.age, None);
    }

    #[test]
    fn approximation_ignores_leap_days() {
        // 365 * 4 days is one day short of four calendar years.
        assert_eq!(age_in_years(date!(2000 - 01 - 01), date!(2003 - 12 - 31)), 4);
        assert_eq!(age_in_years(date!(2000 - 01 - 01), date!(2000 - 12 - 30)), 0);
    }

    #[test]
    fn future_birth_floors_to_negative() {
        assert_eq!(age_in_years(date!(2024 - 06 - 16), TODAY), -1);
    }
}
