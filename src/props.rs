use crate::locale::WeekLocale;
use std::fmt;
use time::{Date, Weekday};

static CHOOSE_DAY_LABEL_PREFIX: &str = "Choose";
static DISABLED_DAY_LABEL_PREFIX: &str = "Not available";

/// Externally supplied configuration for one week row.  [`new`] applies the
/// fixed defaults; the remaining fields are set through chaining methods
/// before the row is computed.
///
/// [`new`]: WeekRowProps::new
pub struct WeekRowProps<'a> {
    pub(crate) day: Date,
    pub(crate) locale: Option<&'a dyn WeekLocale>,
    pub(crate) calendar_start_day: Option<Weekday>,
    pub(crate) selected: Option<Date>,
    pub(crate) pre_selection: Option<Date>,
    pub(crate) disabled_keyboard_navigation: bool,
    pub(crate) show_week_number: bool,
    pub(crate) show_week_picker: bool,
    pub(crate) should_close_on_select: bool,
    pub(crate) format_week_number: Option<&'a dyn Fn(Date) -> u8>,
    pub(crate) choose_day_label_prefix: &'a str,
    pub(crate) disabled_day_label_prefix: &'a str,
}

impl<'a> WeekRowProps<'a> {
    pub fn new(day: Date) -> WeekRowProps<'a> {
        WeekRowProps {
            day,
            locale: None,
            calendar_start_day: None,
            selected: None,
            pre_selection: None,
            disabled_keyboard_navigation: false,
            show_week_number: false,
            show_week_picker: false,
            should_close_on_select: true,
            format_week_number: None,
            choose_day_label_prefix: CHOOSE_DAY_LABEL_PREFIX,
            disabled_day_label_prefix: DISABLED_DAY_LABEL_PREFIX,
        }
    }

    pub fn locale(mut self, locale: &'a dyn WeekLocale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Overrides the locale's default week start.
    pub fn calendar_start_day(mut self, weekday: Weekday) -> Self {
        self.calendar_start_day = Some(weekday);
        self
    }

    pub fn selected(mut self, date: Date) -> Self {
        self.selected = Some(date);
        self
    }

    pub fn pre_selection(mut self, date: Date) -> Self {
        self.pre_selection = Some(date);
        self
    }

    pub fn disabled_keyboard_navigation(mut self, disabled: bool) -> Self {
        self.disabled_keyboard_navigation = disabled;
        self
    }

    pub fn show_week_number(mut self, show: bool) -> Self {
        self.show_week_number = show;
        self
    }

    pub fn show_week_picker(mut self, show: bool) -> Self {
        self.show_week_picker = show;
        self
    }

    pub fn should_close_on_select(mut self, close: bool) -> Self {
        self.should_close_on_select = close;
        self
    }

    pub fn format_week_number(mut self, formatter: &'a dyn Fn(Date) -> u8) -> Self {
        self.format_week_number = Some(formatter);
        self
    }

    pub fn day_label_prefixes(mut self, enabled: &'a str, disabled: &'a str) -> Self {
        self.choose_day_label_prefix = enabled;
        self.disabled_day_label_prefix = disabled;
        self
    }
}

impl fmt::Debug for WeekRowProps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeekRowProps")
            .field("day", &self.day)
            .field("calendar_start_day", &self.calendar_start_day)
            .field("selected", &self.selected)
            .field("pre_selection", &self.pre_selection)
            .field(
                "disabled_keyboard_navigation",
                &self.disabled_keyboard_navigation,
            )
            .field("show_week_number", &self.show_week_number)
            .field("show_week_picker", &self.show_week_picker)
            .field("should_close_on_select", &self.should_close_on_select)
            .field("choose_day_label_prefix", &self.choose_day_label_prefix)
            .field("disabled_day_label_prefix", &self.disabled_day_label_prefix)
            .finish_non_exhaustive()
    }
}
