//! Building blocks for one row of a calendar-grid date picker: resolving the
//! first day of a week under a locale-aware week-start convention, generating
//! the seven dates of the row, numbering the week, deriving selection state,
//! and routing cell interactions to caller-supplied callbacks.
//!
//! [`WeekRow::compute`] turns a [`WeekRowProps`] record into an immutable row
//! model, [`WeekRowWidget`] renders it as one terminal row, and
//! [`InteractionDispatcher`] forwards day and week activations.

mod dispatch;
mod error;
mod locale;
mod props;
pub mod theme;
mod week;

pub use crate::dispatch::InteractionDispatcher;
pub use crate::error::InvalidDateError;
pub use crate::locale::{EnUsLocale, Iso8601Locale, WeekLocale};
pub use crate::props::WeekRowProps;
pub use crate::week::{
    day_sequence, start_of_week, week_number, DayStyler, SelectionFlags, WeekRow, WeekRowWidget,
};
