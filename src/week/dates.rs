use crate::error::InvalidDateError;
use crate::locale::WeekLocale;
use time::{Date, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

/// Returns the week anchor: the most recent date on or before `day` whose
/// weekday is the effective week start.
///
/// An explicit `calendar_start_day` takes precedence over the locale's
/// default; with neither supplied, weeks start on Sunday.
pub fn start_of_week(
    day: Date,
    locale: Option<&dyn WeekLocale>,
    calendar_start_day: Option<Weekday>,
) -> Result<Date, InvalidDateError> {
    let week_start = calendar_start_day
        .or_else(|| locale.map(WeekLocale::week_start))
        .unwrap_or(Weekday::Sunday);
    let mut anchor = day;
    while anchor.weekday() != week_start {
        anchor = anchor.previous_day().ok_or(InvalidDateError)?;
    }
    Ok(anchor)
}

/// The seven consecutive dates starting at `anchor`.
pub fn day_sequence(anchor: Date) -> Result<[Date; DAYS_IN_WEEK], InvalidDateError> {
    let mut days = [anchor; DAYS_IN_WEEK];
    let mut prev = anchor;
    for day in days.iter_mut().skip(1) {
        prev = prev.next_day().ok_or(InvalidDateError)?;
        *day = prev;
    }
    Ok(days)
}

/// Week number of `anchor`, delegating entirely to `custom` when supplied
/// (its output range is the caller's responsibility), ISO-8601 otherwise.
pub fn week_number(anchor: Date, custom: Option<&dyn Fn(Date) -> u8>) -> u8 {
    match custom {
        Some(formatter) => formatter(anchor),
        None => anchor.iso_week(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EnUsLocale, Iso8601Locale};
    use time::macros::date;
    use time::Weekday::{Monday, Sunday, Wednesday};

    #[test]
    fn monday_start_from_wednesday() {
        let anchor = start_of_week(date!(2023 - 11 - 15), None, Some(Monday)).unwrap();
        assert_eq!(anchor, date!(2023 - 11 - 13));
        let days = day_sequence(anchor).unwrap();
        assert_eq!(days[0], date!(2023 - 11 - 13));
        assert_eq!(days[6], date!(2023 - 11 - 19));
    }

    #[test]
    fn default_start_is_sunday() {
        let anchor = start_of_week(date!(2023 - 11 - 16), None, None).unwrap();
        assert_eq!(anchor, date!(2023 - 11 - 12));
    }

    #[test]
    fn locale_supplies_week_start() {
        let anchor = start_of_week(date!(2023 - 11 - 16), Some(&Iso8601Locale), None).unwrap();
        assert_eq!(anchor, date!(2023 - 11 - 13));
    }

    #[test]
    fn explicit_start_day_beats_locale() {
        let anchor =
            start_of_week(date!(2023 - 11 - 16), Some(&Iso8601Locale), Some(Sunday)).unwrap();
        assert_eq!(anchor, date!(2023 - 11 - 12));
    }

    #[test]
    fn anchor_has_start_weekday_and_contains_reference() {
        for day in [
            date!(2023 - 01 - 01),
            date!(2023 - 11 - 16),
            date!(2024 - 02 - 29),
            date!(2025 - 12 - 31),
        ] {
            for start in [Sunday, Monday, Wednesday] {
                let anchor = start_of_week(day, Some(&EnUsLocale), Some(start)).unwrap();
                assert_eq!(anchor.weekday(), start, "anchor weekday for {day}");
                let days = day_sequence(anchor).unwrap();
                assert!(days.contains(&day), "{day} not in its own week");
            }
        }
    }

    #[test]
    fn resolving_an_anchor_is_identity() {
        let anchor = start_of_week(date!(2023 - 11 - 16), None, Some(Monday)).unwrap();
        assert_eq!(start_of_week(anchor, None, Some(Monday)).unwrap(), anchor);
    }

    #[test]
    fn day_sequence_is_strictly_consecutive() {
        let days = day_sequence(date!(2023 - 12 - 28)).unwrap();
        assert_eq!(days.len(), DAYS_IN_WEEK);
        for pair in days.windows(2) {
            assert_eq!(pair[0].next_day(), Some(pair[1]));
        }
        assert_eq!(days[0], date!(2023 - 12 - 28));
        assert_eq!(days[6], date!(2024 - 01 - 03));
    }

    #[test]
    fn iso_week_boundaries() {
        // 2015-01-01 was a Thursday, so its week is week 1.
        assert_eq!(week_number(date!(2015 - 01 - 01), None), 1);
        // The Monday of that same week already counts as week 1 of 2015.
        assert_eq!(week_number(date!(2014 - 12 - 29), None), 1);
        // 2020 had 53 ISO weeks.
        assert_eq!(week_number(date!(2020 - 12 - 31), None), 53);
        assert_eq!(week_number(date!(2021 - 01 - 01), None), 53);
    }

    #[test]
    fn custom_formatter_is_trusted() {
        assert_eq!(week_number(date!(2015 - 01 - 01), Some(&|_| 99)), 99);
    }

    #[test]
    fn start_of_week_fails_at_calendar_floor() {
        let floor = Date::MIN;
        let unreachable_start = floor.weekday().next();
        assert_eq!(
            start_of_week(floor, None, Some(unreachable_start)),
            Err(InvalidDateError)
        );
    }

    #[test]
    fn day_sequence_fails_at_calendar_ceiling() {
        assert_eq!(day_sequence(Date::MAX), Err(InvalidDateError));
    }
}
