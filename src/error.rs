use thiserror::Error;

/// Returned when week arithmetic would leave the range of dates that
/// [`time::Date`] can represent.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("date outside the supported calendar range")]
pub struct InvalidDateError;
