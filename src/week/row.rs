use super::dates::{self, DAYS_IN_WEEK};
use crate::error::InvalidDateError;
use crate::props::WeekRowProps;
use time::Date;

/// Visual state of a week row relative to the externally tracked selection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SelectionFlags {
    /// The anchor is the committed selected date.
    pub selected: bool,
    /// The anchor is the keyboard focus target.  Suppressed whenever
    /// `selected` holds, so the two markers are never shown together.
    pub keyboard_selected: bool,
}

impl SelectionFlags {
    pub fn evaluate(
        anchor: Date,
        selected: Option<Date>,
        pre_selection: Option<Date>,
        disabled_keyboard_navigation: bool,
    ) -> SelectionFlags {
        let is_selected = selected == Some(anchor);
        let keyboard_selected =
            !disabled_keyboard_navigation && !is_selected && pre_selection == Some(anchor);
        SelectionFlags {
            selected: is_selected,
            keyboard_selected,
        }
    }
}

/// One computed row of a calendar grid: the week anchor, the seven dates of
/// the week, the week number, and the derived selection flags.  Recomputed
/// from props on every render; never mutated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeekRow<'a> {
    anchor: Date,
    days: [Date; DAYS_IN_WEEK],
    week_number: u8,
    flags: SelectionFlags,
    show_week_number: bool,
    choose_day_label_prefix: &'a str,
    disabled_day_label_prefix: &'a str,
}

impl<'a> WeekRow<'a> {
    /// Derives the full row from `props`, failing as a whole if any of the
    /// date arithmetic leaves the supported calendar range.
    pub fn compute(props: &WeekRowProps<'a>) -> Result<WeekRow<'a>, InvalidDateError> {
        let anchor = dates::start_of_week(props.day, props.locale, props.calendar_start_day)?;
        let days = dates::day_sequence(anchor)?;
        let week_number = dates::week_number(anchor, props.format_week_number);
        let flags = SelectionFlags::evaluate(
            anchor,
            props.selected,
            props.pre_selection,
            props.disabled_keyboard_navigation,
        );
        Ok(WeekRow {
            anchor,
            days,
            week_number,
            flags,
            show_week_number: props.show_week_number,
            choose_day_label_prefix: props.choose_day_label_prefix,
            disabled_day_label_prefix: props.disabled_day_label_prefix,
        })
    }

    pub fn anchor(&self) -> Date {
        self.anchor
    }

    /// The seven dates of the row in chronological order.
    pub fn days(&self) -> &[Date] {
        &self.days
    }

    pub fn week_number(&self) -> u8 {
        self.week_number
    }

    pub fn flags(&self) -> SelectionFlags {
        self.flags
    }

    pub fn show_week_number(&self) -> bool {
        self.show_week_number
    }

    pub fn contains(&self, date: Date) -> bool {
        self.days.contains(&date)
    }

    /// Accessible label for a day cell, e.g. "Choose 2023-11-15".
    pub fn day_label(&self, day: Date, disabled: bool) -> String {
        let prefix = if disabled {
            self.disabled_day_label_prefix
        } else {
            self.choose_day_label_prefix
        };
        format!("{prefix} {day}")
    }
}
