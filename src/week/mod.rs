mod dates;
mod row;
mod widget;

pub use self::dates::{day_sequence, start_of_week, week_number};
pub use self::row::{SelectionFlags, WeekRow};
pub use self::widget::WeekRowWidget;
use ratatui::style::Style;
use time::Date;

/// Caller-supplied per-day styling.  What makes a day disabled or
/// highlighted is the caller's concern; the widget only asks for the style.
pub trait DayStyler {
    fn day_style(&self, date: Date) -> Style;
}

impl<T: DayStyler + ?Sized> DayStyler for &T {
    fn day_style(&self, date: Date) -> Style {
        (**self).day_style(date)
    }
}
