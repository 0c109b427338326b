use time::Weekday;

/// Caller-supplied locale collaborator.  Only the default first day of the
/// week is needed here; localization data itself stays with the caller.
pub trait WeekLocale {
    fn week_start(&self) -> Weekday;
}

impl<T: WeekLocale + ?Sized> WeekLocale for &T {
    fn week_start(&self) -> Weekday {
        (**self).week_start()
    }
}

/// Monday-start convention per ISO-8601.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Iso8601Locale;

impl WeekLocale for Iso8601Locale {
    fn week_start(&self) -> Weekday {
        Weekday::Monday
    }
}

/// Sunday-start convention.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnUsLocale;

impl WeekLocale for EnUsLocale {
    fn week_start(&self) -> Weekday {
        Weekday::Sunday
    }
}
