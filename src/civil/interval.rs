use jiff::Span;

use crate::error::Error;

/// Span arithmetic shared by the local value types.
///
/// Local values have no time zone, so every day is exactly 24 hours long.
/// [`LocalTime`](crate::civil::LocalTime) arithmetic wraps around midnight
/// and never fails.
///
/// # Example
///
/// ```
/// use jiff::ToSpan;
/// use jiff_wallclock::civil::{Interval, LocalDate};
///
/// let date = LocalDate::new(2013, 1, 31)?;
/// assert_eq!(date.checked_add(1.month())?.to_string(), "2013-02-28");
///
/// let later = LocalDate::new(2014, 4, 5)?;
/// let span = date.compare_to(later, false)?;
/// assert_eq!(
///     (span.get_years(), span.get_months(), span.get_days()),
///     (1, 2, 5),
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Interval: Copy + Sized {
    /// Adds a span.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    fn checked_add(self, span: Span) -> Result<Self, Error>;

    /// Subtracts a span.
    fn checked_sub(self, span: Span) -> Result<Self, Error> {
        self.checked_add(span.negate())
    }

    /// Returns the span from `self` until `other`.
    ///
    /// Dates and datetimes use years as their largest unit, times use hours.
    /// The span is negative when `other` is before `self`.
    fn until(self, other: Self) -> Result<Span, Error>;

    /// Returns the span from `self` until `other`, optionally as an
    /// absolute span.
    fn compare_to(self, other: Self, absolute: bool) -> Result<Span, Error> {
        let span = self.until(other)?;
        Ok(if absolute { span.abs() } else { span })
    }
}
