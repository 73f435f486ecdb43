use jiff::{civil::Date, Span, Unit, Zoned};

use crate::{
    civil::{DayOfWeek, IntoMonth, Interval, LocalDateTime, LocalTime, Month},
    datetime::{DateTime, MutableDateTime, WallClock},
    error::{civil::Error as E, Error, ErrorContext},
    fmt::pattern::{self, Subject},
    moment::Moment,
    tz,
};

/// A date without a time or a time zone.
///
/// # Example
///
/// ```
/// use jiff_wallclock::civil::{DayOfWeek, LocalDate, Month};
///
/// let date = LocalDate::new(2013, Month::February, 3)?;
/// assert_eq!(date.day_of_week(), DayOfWeek::Sunday);
/// assert_eq!(date.day_of_year(), 34);
/// assert_eq!(date.to_string(), "2013-02-03");
///
/// // Days past the end of the month carry into the next one.
/// assert_eq!(LocalDate::new(2023, 2, 30)?.to_string(), "2023-03-02");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalDate {
    date: Date,
}

impl LocalDate {
    /// The pattern used by the `Display` implementation.
    pub const DEFAULT_FORMAT: &'static str = "Y-m-d";

    /// Creates a new date.
    ///
    /// The day is counted from the first day of the month, so a day past the
    /// end of the month carries into the following month and day `0` is the
    /// last day of the previous month.
    ///
    /// # Errors
    ///
    /// This returns an error when the month isn't in `1..=12`, or when the
    /// resulting date is out of range.
    pub fn new(
        year: i16,
        month: impl IntoMonth,
        day: i8,
    ) -> Result<LocalDate, Error> {
        let month = month.into_month()?;
        let first = Date::new(year, month.number(), 1)?;
        let date = first
            .checked_add(Span::new().days(i64::from(day) - 1))
            .with_context(|| E::FailedAddSpanDate)?;
        Ok(LocalDate { date })
    }

    pub fn year(self) -> i16 {
        self.date.year()
    }

    /// The month, from `1` to `12`.
    pub fn month_number(self) -> i8 {
        self.date.month()
    }

    pub fn month(self) -> Month {
        // OK because a Jiff date always has a month in `1..=12`.
        Month::from_number(self.date.month()).unwrap()
    }

    pub fn day_of_month(self) -> i8 {
        self.date.day()
    }

    pub fn day_of_week(self) -> DayOfWeek {
        DayOfWeek::from(self.date.weekday())
    }

    /// The day of the year, from `1` to `366`.
    pub fn day_of_year(self) -> i16 {
        self.date.day_of_year()
    }

    pub fn is_leap_year(self) -> bool {
        self.date.in_leap_year()
    }

    pub fn days_in_month(self) -> i8 {
        self.date.days_in_month()
    }

    /// Combines this date with a time.
    ///
    /// # Errors
    ///
    /// This returns an error when a time component is out of range.
    pub fn at(
        self,
        hour: i8,
        minute: i8,
        second: i8,
        microsecond: i32,
    ) -> Result<LocalDateTime, Error> {
        Ok(self.at_time(LocalTime::new(hour, minute, second, microsecond)?))
    }

    pub fn at_time(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::from(self.date.to_datetime(time.to_jiff()))
    }

    pub fn to_jiff(self) -> Date {
        self.date
    }

    /// Renders this date with a pattern.
    ///
    /// Tokens that need a time render midnight. Tokens that need a time zone
    /// fail.
    pub fn format(self, pattern: &str) -> Result<String, Error> {
        pattern::render(&Subject::Date(self.date), pattern)
    }
}

impl Interval for LocalDate {
    fn checked_add(self, span: Span) -> Result<LocalDate, Error> {
        let date = self
            .date
            .checked_add(span)
            .with_context(|| E::FailedAddSpanDate)?;
        Ok(LocalDate { date })
    }

    fn until(self, other: LocalDate) -> Result<Span, Error> {
        self.date
            .until((Unit::Year, other.date))
            .with_context(|| E::FailedUntil)
    }
}

impl core::fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("LocalDate").field(&self.date).finish()
    }
}

impl core::fmt::Display for LocalDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let rendered = self
            .format(LocalDate::DEFAULT_FORMAT)
            .map_err(|_| core::fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Parses anything [`DateTime`] can parse, in the
/// [default time zone](crate::tz::default), and keeps its date.
impl core::str::FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<LocalDate, Error> {
        let moment = Moment::parse(input, &tz::default())?;
        Ok(LocalDate::from(moment.zoned().date()))
    }
}

impl From<Date> for LocalDate {
    fn from(date: Date) -> LocalDate {
        LocalDate { date }
    }
}

impl From<LocalDate> for Date {
    fn from(date: LocalDate) -> Date {
        date.date
    }
}

impl From<&Zoned> for LocalDate {
    fn from(zdt: &Zoned) -> LocalDate {
        LocalDate::from(zdt.date())
    }
}

impl From<LocalDateTime> for LocalDate {
    fn from(dt: LocalDateTime) -> LocalDate {
        dt.to_date()
    }
}

impl From<&DateTime> for LocalDate {
    fn from(dt: &DateTime) -> LocalDate {
        dt.to_local_date()
    }
}

impl From<&MutableDateTime> for LocalDate {
    fn from(dt: &MutableDateTime) -> LocalDate {
        dt.to_local_date()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LocalDate {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocalDate {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<LocalDate, D::Error> {
        deserializer.deserialize_str(super::FromStrVisitor::new("a date"))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for LocalDate {
    fn arbitrary(g: &mut quickcheck::Gen) -> LocalDate {
        let year = i16::arbitrary(g).rem_euclid(4000) + 1;
        let month = i8::arbitrary(g).rem_euclid(12) + 1;
        let day = i8::arbitrary(g).rem_euclid(28) + 1;
        // OK because every component is in range.
        LocalDate::new(year, month, day).unwrap()
    }
}
