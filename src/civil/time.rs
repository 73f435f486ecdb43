use jiff::{civil::Time, Span, Zoned};

use crate::{
    civil::{IntoMonth, Interval, LocalDate, LocalDateTime},
    datetime::{DateTime, MutableDateTime, WallClock},
    error::{civil::Error as E, Error, ErrorContext},
    fmt::pattern::{self, Subject},
    moment::Moment,
    tz,
};

/// A time of day with microsecond precision, without a date or a time zone.
///
/// # Example
///
/// ```
/// use jiff_wallclock::civil::LocalTime;
///
/// let time = LocalTime::new(14, 30, 0, 0)?;
/// assert_eq!(time.to_second_of_day(), 52_200);
/// assert_eq!(time.to_millisecond_of_day(), 52_200_000);
/// assert_eq!(time.to_microsecond_of_day(), 52_200_000_000);
/// assert_eq!(time.to_string(), "14:30:00.000000");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalTime {
    time: Time,
}

impl LocalTime {
    /// The pattern used by the `Display` implementation.
    pub const DEFAULT_FORMAT: &'static str = "H:i:s.u";

    /// Creates a new time.
    ///
    /// # Errors
    ///
    /// This returns an error when a component is out of range. Unlike
    /// [`LocalDate::new`], nothing carries.
    pub fn new(
        hour: i8,
        minute: i8,
        second: i8,
        microsecond: i32,
    ) -> Result<LocalTime, Error> {
        check("hour", hour, 0, 23)?;
        check("minute", minute, 0, 59)?;
        check("second", second, 0, 59)?;
        check("microsecond", microsecond, 0, 999_999)?;
        let time = Time::new(hour, minute, second, microsecond * 1_000)?;
        Ok(LocalTime { time })
    }

    /// Returns midnight, `00:00:00`.
    pub fn midnight() -> LocalTime {
        LocalTime { time: Time::midnight() }
    }

    pub fn hour(self) -> i8 {
        self.time.hour()
    }

    pub fn minute(self) -> i8 {
        self.time.minute()
    }

    pub fn second(self) -> i8 {
        self.time.second()
    }

    pub fn microsecond(self) -> i32 {
        self.time.subsec_nanosecond() / 1_000
    }

    /// The number of whole seconds since midnight.
    pub fn to_second_of_day(self) -> i32 {
        i32::from(self.hour()) * 3_600
            + i32::from(self.minute()) * 60
            + i32::from(self.second())
    }

    /// The number of whole milliseconds since midnight.
    pub fn to_millisecond_of_day(self) -> i64 {
        i64::from(self.to_second_of_day()) * 1_000
            + i64::from(self.microsecond() / 1_000)
    }

    /// The number of microseconds since midnight.
    pub fn to_microsecond_of_day(self) -> i64 {
        i64::from(self.to_second_of_day()) * 1_000_000
            + i64::from(self.microsecond())
    }

    /// Combines this time with a date built from its components.
    ///
    /// The date follows the rules of [`LocalDate::new`].
    pub fn at(
        self,
        year: i16,
        month: impl IntoMonth,
        day: i8,
    ) -> Result<LocalDateTime, Error> {
        Ok(self.at_date(LocalDate::new(year, month, day)?))
    }

    pub fn at_date(self, date: LocalDate) -> LocalDateTime {
        date.at_time(self)
    }

    pub fn to_jiff(self) -> Time {
        self.time
    }

    /// Renders this time with a pattern.
    ///
    /// Tokens that need a date or a time zone fail.
    pub fn format(self, pattern: &str) -> Result<String, Error> {
        pattern::render(&Subject::Time(self.time), pattern)
    }
}

fn check(
    what: &'static str,
    given: impl Into<i64>,
    min: i64,
    max: i64,
) -> Result<(), Error> {
    let given = given.into();
    if !(min..=max).contains(&given) {
        return Err(E::invalid_component(what, given, min, max).into());
    }
    Ok(())
}

/// Time arithmetic wraps around midnight and never fails.
impl Interval for LocalTime {
    fn checked_add(self, span: Span) -> Result<LocalTime, Error> {
        Ok(LocalTime::from(self.time.wrapping_add(span)))
    }

    fn until(self, other: LocalTime) -> Result<Span, Error> {
        self.time.until(other.time).with_context(|| E::FailedUntil)
    }
}

impl Default for LocalTime {
    fn default() -> LocalTime {
        LocalTime::midnight()
    }
}

impl core::fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("LocalTime").field(&self.time).finish()
    }
}

impl core::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let rendered = self
            .format(LocalTime::DEFAULT_FORMAT)
            .map_err(|_| core::fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Parses anything [`DateTime`] can parse, in the
/// [default time zone](crate::tz::default), and keeps its time of day.
impl core::str::FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<LocalTime, Error> {
        let moment = Moment::parse(input, &tz::default())?;
        Ok(LocalTime::from(moment.zoned().time()))
    }
}

/// Converts a Jiff time, truncating it to microsecond precision.
impl From<Time> for LocalTime {
    fn from(time: Time) -> LocalTime {
        let nanos = time.subsec_nanosecond();
        // OK because truncating the sub-second part keeps it in range.
        let time = Time::new(
            time.hour(),
            time.minute(),
            time.second(),
            nanos - nanos % 1_000,
        )
        .unwrap();
        LocalTime { time }
    }
}

impl From<LocalTime> for Time {
    fn from(time: LocalTime) -> Time {
        time.time
    }
}

impl From<&Zoned> for LocalTime {
    fn from(zdt: &Zoned) -> LocalTime {
        LocalTime::from(zdt.time())
    }
}

impl From<LocalDateTime> for LocalTime {
    fn from(dt: LocalDateTime) -> LocalTime {
        dt.to_time()
    }
}

impl From<&DateTime> for LocalTime {
    fn from(dt: &DateTime) -> LocalTime {
        dt.to_local_time()
    }
}

impl From<&MutableDateTime> for LocalTime {
    fn from(dt: &MutableDateTime) -> LocalTime {
        dt.to_local_time()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LocalTime {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocalTime {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<LocalTime, D::Error> {
        deserializer.deserialize_str(super::FromStrVisitor::new("a time"))
    }
}
