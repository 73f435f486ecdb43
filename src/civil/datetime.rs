use jiff::{civil, Span, Unit, Zoned};

use crate::{
    civil::{DayOfWeek, IntoMonth, Interval, LocalDate, LocalTime, Month},
    datetime::{DateTime, MutableDateTime, WallClock},
    error::{civil::Error as E, Error, ErrorContext},
    fmt::pattern::{self, Subject},
    moment::Moment,
    tz,
};

/// A date and a time of day, without a time zone.
///
/// Since there is no time zone, every day is exactly 24 hours long.
///
/// # Example
///
/// ```
/// use jiff::ToSpan;
/// use jiff_wallclock::civil::{Interval, LocalDateTime};
///
/// let dt = LocalDateTime::new(2013, 3, 30, 12, 0, 0, 0)?;
/// let next = dt.checked_add(1.day())?;
/// assert_eq!(next.to_string(), "2013-03-31T12:00:00.000000");
/// assert_eq!(dt.compare_to(next, false)?.get_days(), 1);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalDateTime {
    dt: civil::DateTime,
}

impl LocalDateTime {
    /// The pattern used by the `Display` implementation.
    pub const DEFAULT_FORMAT: &'static str = "Y-m-d\\TH:i:s.u";

    /// Creates a new datetime.
    ///
    /// The date follows the rules of [`LocalDate::new`] and the time those of
    /// [`LocalTime::new`].
    pub fn new(
        year: i16,
        month: impl IntoMonth,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        microsecond: i32,
    ) -> Result<LocalDateTime, Error> {
        LocalDate::new(year, month, day)?.at(hour, minute, second, microsecond)
    }

    pub fn to_date(self) -> LocalDate {
        LocalDate::from(self.dt.date())
    }

    pub fn to_time(self) -> LocalTime {
        LocalTime::from(self.dt.time())
    }

    pub fn year(self) -> i16 {
        self.dt.year()
    }

    pub fn month_number(self) -> i8 {
        self.dt.month()
    }

    pub fn month(self) -> Month {
        self.to_date().month()
    }

    pub fn day_of_month(self) -> i8 {
        self.dt.day()
    }

    pub fn day_of_week(self) -> DayOfWeek {
        DayOfWeek::from(self.dt.weekday())
    }

    pub fn day_of_year(self) -> i16 {
        self.dt.day_of_year()
    }

    pub fn is_leap_year(self) -> bool {
        self.dt.in_leap_year()
    }

    pub fn days_in_month(self) -> i8 {
        self.dt.days_in_month()
    }

    pub fn hour(self) -> i8 {
        self.dt.hour()
    }

    pub fn minute(self) -> i8 {
        self.dt.minute()
    }

    pub fn second(self) -> i8 {
        self.dt.second()
    }

    pub fn microsecond(self) -> i32 {
        self.dt.subsec_nanosecond() / 1_000
    }

    pub fn to_jiff(self) -> civil::DateTime {
        self.dt
    }

    /// Renders this datetime with a pattern.
    ///
    /// Tokens that need a time zone fail.
    pub fn format(self, pattern: &str) -> Result<String, Error> {
        pattern::render(&Subject::DateTime(self.dt), pattern)
    }
}

impl Interval for LocalDateTime {
    fn checked_add(self, span: Span) -> Result<LocalDateTime, Error> {
        let dt = self
            .dt
            .checked_add(span)
            .with_context(|| E::FailedAddSpanDateTime)?;
        Ok(LocalDateTime::from(dt))
    }

    fn until(self, other: LocalDateTime) -> Result<Span, Error> {
        self.dt
            .until((Unit::Year, other.dt))
            .with_context(|| E::FailedUntil)
    }
}

impl core::fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("LocalDateTime").field(&self.dt).finish()
    }
}

impl core::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let rendered = self
            .format(LocalDateTime::DEFAULT_FORMAT)
            .map_err(|_| core::fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Parses anything [`DateTime`] can parse, in the
/// [default time zone](crate::tz::default), and keeps its civil datetime.
impl core::str::FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<LocalDateTime, Error> {
        let moment = Moment::parse(input, &tz::default())?;
        Ok(LocalDateTime::from(moment.zoned().datetime()))
    }
}

/// Converts a Jiff datetime, truncating it to microsecond precision.
impl From<civil::DateTime> for LocalDateTime {
    fn from(dt: civil::DateTime) -> LocalDateTime {
        let time = LocalTime::from(dt.time()).to_jiff();
        LocalDateTime { dt: dt.date().to_datetime(time) }
    }
}

impl From<LocalDateTime> for civil::DateTime {
    fn from(dt: LocalDateTime) -> civil::DateTime {
        dt.dt
    }
}

impl From<&Zoned> for LocalDateTime {
    fn from(zdt: &Zoned) -> LocalDateTime {
        LocalDateTime::from(zdt.datetime())
    }
}

impl From<&DateTime> for LocalDateTime {
    fn from(dt: &DateTime) -> LocalDateTime {
        dt.to_local_datetime()
    }
}

impl From<&MutableDateTime> for LocalDateTime {
    fn from(dt: &MutableDateTime) -> LocalDateTime {
        dt.to_local_datetime()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LocalDateTime {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocalDateTime {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<LocalDateTime, D::Error> {
        deserializer.deserialize_str(super::FromStrVisitor::new("a datetime"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::datetime;

    use super::*;

    #[test]
    fn split_and_join() {
        let dt = LocalDateTime::new(2013, 2, 3, 21, 3, 45, 500).unwrap();
        let (date, time) = (dt.to_date(), dt.to_time());
        assert_eq!(date.to_string(), "2013-02-03");
        assert_eq!(time.to_string(), "21:03:45.000500");
        assert_eq!(date.at_time(time), dt);
        assert_eq!(time.at_date(date), dt);
        assert_eq!(dt.year(), date.year());
        assert_eq!(dt.month(), Month::February);
        assert_eq!(dt.day_of_week(), DayOfWeek::Sunday);
    }

    #[test]
    fn calendar_fields() {
        let leap = LocalDateTime::new(2012, 12, 31, 23, 59, 59, 0).unwrap();
        let common = LocalDateTime::new(2013, 12, 31, 23, 59, 59, 0).unwrap();
        assert!(leap.is_leap_year());
        assert!(!common.is_leap_year());
        assert_eq!(leap.day_of_year(), 366);
        assert_eq!(common.day_of_year(), 365);
        assert_eq!(leap.is_leap_year(), leap.to_date().is_leap_year());

        let feb = LocalDateTime::new(2012, 2, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(feb.days_in_month(), 29);
        assert_eq!(feb.days_in_month(), feb.to_date().days_in_month());
    }

    #[test]
    fn from_wall_clock() {
        let paris = crate::tz::TimeZone::get("Europe/Paris").unwrap();
        let wall = DateTime::parse_in("2013-02-03 21:03:45", &paris).unwrap();
        let dt = LocalDateTime::from(&wall);
        assert_eq!(dt.to_jiff(), datetime(2013, 2, 3, 21, 3, 45, 0));
        assert_eq!(dt.to_date().year(), LocalDate::from(&wall).year());
        assert_eq!(dt.to_time(), LocalTime::from(&wall));
    }

    #[test]
    fn format() {
        let dt = LocalDateTime::new(2013, 2, 3, 21, 3, 45, 0).unwrap();
        insta::assert_snapshot!(dt, @"2013-02-03T21:03:45.000000");
        assert_eq!(dt.format("D, d M Y").unwrap(), "Sun, 03 Feb 2013");
        assert!(dt.format("O").is_err());
    }

    #[test]
    fn interval() {
        let dt = LocalDateTime::new(2013, 1, 31, 23, 0, 0, 0).unwrap();
        let next = dt.checked_add(Span::new().hours(2)).unwrap();
        assert_eq!(next.to_jiff(), datetime(2013, 2, 1, 1, 0, 0, 0));
        assert_eq!(next.checked_sub(Span::new().hours(2)).unwrap(), dt);

        let span = next.compare_to(dt, false).unwrap();
        assert_eq!(span.get_hours(), -2);
        let span = next.compare_to(dt, true).unwrap();
        assert_eq!(span.get_hours(), 2);

        let far = LocalDateTime::new(9999, 12, 31, 0, 0, 0, 0).unwrap();
        let err = far.checked_add(Span::new().days(1)).unwrap_err();
        assert!(err.is_range());
        assert!(err.to_string().starts_with("failed to add span to datetime"));
    }
}
