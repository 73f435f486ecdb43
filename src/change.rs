use jiff::{
    civil::{Date, DateTime, Time},
    Span,
};

use crate::error::{Error, ErrorContext};

/// A set of calendar fields to change on a wall clock datetime.
///
/// Every field is either absent, meaning "leave it as it is", or present with
/// a value. Zero is a present value like any other.
///
/// Values outside of a field's usual range carry into the next larger unit,
/// so `hour(25)` is 1am on the following day and `month(0)` is December of
/// the previous year.
///
/// # Cascading
///
/// When cascading is enabled, setting a coarser time unit resets the finer
/// ones: setting the hour without the minute sets the minute to `0`, and
/// setting the minute (explicitly or because of the hour) without the second
/// sets the second to `0`.
///
/// # Example
///
/// ```
/// use jiff_wallclock::{Change, DateTime, WallClock};
///
/// let dt: DateTime = "2001-01-01 01:01:01".parse()?;
/// assert_eq!(
///     dt.with(&Change::new().hour(2))?.as_db(),
///     "2001-01-01 02:01:01",
/// );
/// assert_eq!(
///     dt.with(&Change::new().hour(2).cascade(true))?.as_db(),
///     "2001-01-01 02:00:00",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Change {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
    cascade: bool,
}

impl Change {
    /// Creates an empty change. Applying it returns the datetime unchanged.
    pub fn new() -> Change {
        Change::default()
    }

    /// Builds a change from `(name, value)` pairs.
    ///
    /// The recognized names are `year`, `month`, `day`, `hour`, `minute` and
    /// `second`. Any other name is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_wallclock::Change;
    ///
    /// let change = Change::from_fields([("month", 2), ("fortnight", 1)]);
    /// assert_eq!(change, Change::new().month(2));
    /// ```
    pub fn from_fields<'a, I, V>(fields: I) -> Change
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<i64>,
    {
        let mut change = Change::new();
        for (name, value) in fields {
            let value = Some(value.into());
            match name {
                "year" => change.year = value,
                "month" => change.month = value,
                "day" => change.day = value,
                "hour" => change.hour = value,
                "minute" => change.minute = value,
                "second" => change.second = value,
                _ => {
                    trace!("ignoring unrecognized field `{name}` in change");
                }
            }
        }
        change
    }

    pub fn year(self, year: impl Into<i64>) -> Change {
        Change { year: Some(year.into()), ..self }
    }

    pub fn month(self, month: impl Into<i64>) -> Change {
        Change { month: Some(month.into()), ..self }
    }

    pub fn day(self, day: impl Into<i64>) -> Change {
        Change { day: Some(day.into()), ..self }
    }

    pub fn hour(self, hour: impl Into<i64>) -> Change {
        Change { hour: Some(hour.into()), ..self }
    }

    pub fn minute(self, minute: impl Into<i64>) -> Change {
        Change { minute: Some(minute.into()), ..self }
    }

    pub fn second(self, second: impl Into<i64>) -> Change {
        Change { second: Some(second.into()), ..self }
    }

    /// Whether setting a coarser time unit resets the finer ones.
    ///
    /// This is disabled by default.
    pub fn cascade(self, yes: bool) -> Change {
        Change { cascade: yes, ..self }
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        !self.touches_date() && !self.touches_time()
    }

    fn touches_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    fn touches_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    /// Returns this change with the cascade resets applied.
    fn cascaded(&self) -> Change {
        let mut change = *self;
        if !change.cascade {
            return change;
        }
        if change.hour.is_some() && change.minute.is_none() {
            change.minute = Some(0);
        }
        if change.minute.is_some() && change.second.is_none() {
            change.second = Some(0);
        }
        change
    }

    /// Applies this change to a civil datetime.
    ///
    /// Sub-second precision is dropped when any time field is set.
    pub(crate) fn apply(&self, dt: DateTime) -> Result<DateTime, Error> {
        let change = self.cascaded();
        let mut date = dt.date();
        let mut time = dt.time();
        if change.touches_date() {
            date = carry_date(
                change.year.unwrap_or_else(|| i64::from(date.year())),
                change.month.unwrap_or_else(|| i64::from(date.month())),
                change.day.unwrap_or_else(|| i64::from(date.day())),
            )?;
        }
        if change.touches_time() {
            let (days, carried) = carry_time(
                change.hour.unwrap_or_else(|| i64::from(time.hour())),
                change.minute.unwrap_or_else(|| i64::from(time.minute())),
                change.second.unwrap_or_else(|| i64::from(time.second())),
            )?;
            if days != 0 {
                date = date
                    .checked_add(Span::new().try_days(days)?)
                    .with_context(|| carry_error("day", days))?;
            }
            time = carried;
        }
        Ok(date.to_datetime(time))
    }
}

/// Builds a date from possibly out of range components.
///
/// The month carries into the year first, then the day is counted from the
/// first day of the resulting month. So `2013-02-30` is `2013-03-02` and day
/// `0` is the last day of the previous month.
fn carry_date(year: i64, month: i64, day: i64) -> Result<Date, Error> {
    let months = year
        .checked_mul(12)
        .and_then(|months| months.checked_add(month.checked_sub(1)?))
        .ok_or_else(|| carry_error("month", month))?;
    let year = i16::try_from(months.div_euclid(12))
        .map_err(|_| {
            Error::range("year", months.div_euclid(12), -9999, 9999)
        })?;
    // OK because `rem_euclid(12)` is always in `0..12`.
    let month = i8::try_from(months.rem_euclid(12) + 1).unwrap();
    let first = Date::new(year, month, 1)?;
    if day == 1 {
        return Ok(first);
    }
    let days = day.checked_sub(1).ok_or_else(|| carry_error("day", day))?;
    first
        .checked_add(Span::new().try_days(days)?)
        .with_context(|| carry_error("day", day))
}

/// Builds a time from possibly out of range components, returning the
/// number of whole days it carries over along with it.
fn carry_time(
    hour: i64,
    minute: i64,
    second: i64,
) -> Result<(i64, Time), Error> {
    let seconds = hour
        .checked_mul(3600)
        .and_then(|s| minute.checked_mul(60)?.checked_add(s))
        .and_then(|s| s.checked_add(second))
        .ok_or_else(|| carry_error("second", second))?;
    let days = seconds.div_euclid(86_400);
    let seconds = seconds.rem_euclid(86_400);
    // OK because `seconds` is in `0..86_400`, so each component is in
    // range for a `Time`.
    let time = Time::new(
        i8::try_from(seconds / 3600).unwrap(),
        i8::try_from(seconds % 3600 / 60).unwrap(),
        i8::try_from(seconds % 60).unwrap(),
        0,
    )?;
    Ok((days, time))
}

fn carry_error(what: &'static str, given: i64) -> Error {
    Error::adhoc(format_args!(
        "failed to carry {what} value {given} into a valid datetime",
    ))
}
