//! Traditional weekday assignment of mystery sets.
//!
//! Monday and Saturday carry the Joyful mysteries, Tuesday and Friday the
//! Sorrowful, Wednesday the Glorious and Thursday the Luminous. Sunday
//! follows the liturgical season, approximated here from the month the way
//! the traditional printed guides do.

use crate::MysterySet;
use chrono::{Datelike, Month, NaiveDate, Weekday};

/// Mystery set traditionally prayed on the given date.
pub fn suggested_mystery_for(date: NaiveDate) -> MysterySet {
    match date.weekday() {
        Weekday::Mon | Weekday::Sat => MysterySet::Joyful,
        Weekday::Tue | Weekday::Fri => MysterySet::Sorrowful,
        Weekday::Wed => MysterySet::Glorious,
        Weekday::Thu => MysterySet::Luminous,
        Weekday::Sun => sunday_mystery(date.month()),
    }
}

/// Sunday selection by season: Advent and Christmastide pray the Joyful
/// mysteries, Lent the Sorrowful, the rest of the year the Glorious.
fn sunday_mystery(month: u32) -> MysterySet {
    match Month::try_from(month as u8) {
        Ok(Month::December) | Ok(Month::January) => MysterySet::Joyful,
        Ok(Month::February) | Ok(Month::March) => MysterySet::Sorrowful,
        _ => MysterySet::Glorious,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_assignments() {
        assert_eq!(suggested_mystery_for(date(2026, 8, 3)), MysterySet::Joyful); // Monday
        assert_eq!(
            suggested_mystery_for(date(2026, 8, 4)),
            MysterySet::Sorrowful
        ); // Tuesday
        assert_eq!(
            suggested_mystery_for(date(2026, 8, 5)),
            MysterySet::Glorious
        ); // Wednesday
        assert_eq!(
            suggested_mystery_for(date(2026, 8, 6)),
            MysterySet::Luminous
        ); // Thursday
        assert_eq!(
            suggested_mystery_for(date(2026, 8, 7)),
            MysterySet::Sorrowful
        ); // Friday
        assert_eq!(suggested_mystery_for(date(2026, 8, 8)), MysterySet::Joyful); // Saturday
    }

    #[test]
    fn test_sunday_follows_the_season() {
        assert_eq!(
            suggested_mystery_for(date(2026, 12, 6)),
            MysterySet::Joyful
        ); // Advent
        assert_eq!(suggested_mystery_for(date(2027, 1, 3)), MysterySet::Joyful); // Christmastide
        assert_eq!(
            suggested_mystery_for(date(2026, 3, 1)),
            MysterySet::Sorrowful
        ); // Lent
        assert_eq!(
            suggested_mystery_for(date(2026, 8, 9)),
            MysterySet::Glorious
        ); // Ordinary Time
    }
}
