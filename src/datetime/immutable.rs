use std::sync::{Arc, OnceLock};

use jiff::{Timestamp, Zoned};

use crate::{
    change::Change,
    clock,
    datetime::{private::WallClockInternal, MutableDateTime, WallClock},
    error::{property::Error as E, Error},
    fmt::Format,
    moment::Moment,
    property::{FieldValue, Property},
    tz::{self, TimeZone},
};

/// An immutable wall clock datetime.
///
/// A `DateTime` is an instant in a named time zone, or the empty date. It
/// never changes: every operation that would change it returns a new value.
/// Clones share their state, so cloning is cheap.
///
/// All of the fields, navigation helpers and formatters live on the
/// [`WallClock`] trait.
///
/// # Comparisons
///
/// Datetimes are equal and ordered by the instant they represent, regardless
/// of their time zones. The empty date is an instant like any other: it
/// compares as `-0001-11-30T00:00:00` in its time zone.
///
/// # Example
///
/// ```
/// use jiff_wallclock::{tz::TimeZone, Change, DateTime, WallClock};
///
/// let paris = TimeZone::get("Europe/Paris")?;
/// let dt = DateTime::parse_in("2013-02-03 21:03:45", &paris)?;
/// let changed = dt.change(&Change::new().hour(18).cascade(true))?;
/// assert_eq!(changed.as_db(), "2013-02-03 18:00:00");
/// // The original is untouched.
/// assert_eq!(dt.as_db(), "2013-02-03 21:03:45");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct DateTime {
    moment: Arc<Moment>,
}

impl DateTime {
    /// Returns the empty date in `UTC`.
    ///
    /// Every call returns a handle to the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_wallclock::{DateTime, WallClock};
    ///
    /// let dt = DateTime::none();
    /// assert!(dt.is_empty());
    /// assert!(dt.is_utc());
    /// assert_eq!(dt.as_db(), "0000-00-00 00:00:00");
    /// assert_eq!(dt.timestamp(), -62169984000);
    /// assert!(DateTime::ptr_eq(&dt, &DateTime::none()));
    /// ```
    pub fn none() -> DateTime {
        static NONE: OnceLock<DateTime> = OnceLock::new();
        NONE.get_or_init(|| {
            // OK because the empty date is well within the range of
            // instants that Jiff supports, in any time zone.
            DateTime::none_in(&TimeZone::utc()).unwrap()
        })
        .clone()
    }

    /// Returns the empty date in the given time zone.
    pub fn none_in(tz: &TimeZone) -> Result<DateTime, Error> {
        Ok(DateTime::from_moment(Moment::empty(tz)?))
    }

    /// Returns the current time of the process session, in the default time
    /// zone.
    ///
    /// The first call captures the current time. Every later call returns a
    /// handle to that same value, so that one unit of work sees one notion of
    /// "now". Use [`DateTime::right_now`] for the actual current time.
    ///
    /// See [`Session`](crate::clock::Session) for sessions with their own
    /// clock.
    pub fn now() -> DateTime {
        clock::process().now()
    }

    /// Returns the actual current time, in the default time zone.
    pub fn right_now() -> DateTime {
        clock::process().right_now()
    }

    /// Parses a datetime, interpreting strings without an offset in the
    /// given time zone.
    ///
    /// When the string carries its own offset or time zone annotation, the
    /// result is in that time zone rather than `tz`.
    ///
    /// # Errors
    ///
    /// This returns an error when the string isn't a recognized datetime.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_wallclock::{tz::TimeZone, DateTime, WallClock};
    ///
    /// let paris = TimeZone::get("Europe/Paris")?;
    ///
    /// let dt = DateTime::parse_in("2013-11-04 20:21:22", &paris)?;
    /// assert_eq!(dt.timezone(), paris);
    /// assert_eq!(dt.as_rfc3339(), "2013-11-04T20:21:22+01:00");
    ///
    /// let dt = DateTime::parse_in("2013-11-04T20:21:22Z", &paris)?;
    /// assert!(dt.is_utc());
    ///
    /// assert!(DateTime::parse_in("0000-00-00", &paris)?.is_empty());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_in(input: &str, tz: &TimeZone) -> Result<DateTime, Error> {
        Ok(DateTime::from_moment(Moment::parse(input, tz)?))
    }

    /// Returns the instant `seconds` after the Unix epoch in the given time
    /// zone.
    pub fn from_timestamp(
        seconds: i64,
        tz: &TimeZone,
    ) -> Result<DateTime, Error> {
        let ts = Timestamp::from_second(seconds)?;
        Ok(DateTime::from(ts.to_zoned(tz.as_jiff().clone())))
    }

    /// Returns a new datetime with the given change applied.
    ///
    /// This is the same as [`WallClock::with`].
    pub fn change(&self, change: &Change) -> Result<DateTime, Error> {
        self.with(change)
    }

    /// Returns true if both datetimes share the same state, as is the case
    /// for clones of the same value.
    pub fn ptr_eq(dt1: &DateTime, dt2: &DateTime) -> bool {
        Arc::ptr_eq(&dt1.moment, &dt2.moment)
    }

    fn instant(&self) -> Timestamp {
        self.moment.zoned().timestamp()
    }
}

impl WallClockInternal for DateTime {
    fn moment(&self) -> &Moment {
        &self.moment
    }

    fn from_moment(moment: Moment) -> DateTime {
        DateTime { moment: Arc::new(moment) }
    }

    fn into_field_value(self) -> FieldValue {
        FieldValue::Immutable(self)
    }
}

impl WallClock for DateTime {
    /// Always returns an error: no property of an immutable datetime can be
    /// written.
    fn set_field(
        &mut self,
        name: &str,
        _value: FieldValue,
    ) -> Result<(), Error> {
        Property::lookup(name)?;
        Err(E::not_writable(name).into())
    }
}

impl Default for DateTime {
    fn default() -> DateTime {
        DateTime::none()
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &DateTime) -> bool {
        self.instant() == other.instant()
    }
}

impl Eq for DateTime {}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &DateTime) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &DateTime) -> core::cmp::Ordering {
        self.instant().cmp(&other.instant())
    }
}

impl core::hash::Hash for DateTime {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.instant().hash(state);
    }
}

impl PartialEq<MutableDateTime> for DateTime {
    fn eq(&self, other: &MutableDateTime) -> bool {
        self.instant() == other.as_zoned().timestamp()
    }
}

impl PartialOrd<MutableDateTime> for DateTime {
    fn partial_cmp(
        &self,
        other: &MutableDateTime,
    ) -> Option<core::cmp::Ordering> {
        Some(self.instant().cmp(&other.as_zoned().timestamp()))
    }
}

impl core::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("DateTime").field(&*self.moment).finish()
    }
}

/// Renders the ISO 8601 format, or nothing for the empty date.
impl core::fmt::Display for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let rendered =
            self.format_as(Format::Iso8601).map_err(|_| core::fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Parses a datetime in the [default time zone](crate::tz::default).
impl core::str::FromStr for DateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<DateTime, Error> {
        DateTime::parse_in(input, &tz::default())
    }
}

impl From<Zoned> for DateTime {
    fn from(zdt: Zoned) -> DateTime {
        DateTime::from_moment(Moment::Present(zdt))
    }
}

impl From<&Zoned> for DateTime {
    fn from(zdt: &Zoned) -> DateTime {
        DateTime::from(zdt.clone())
    }
}

/// Converts a timestamp into a datetime in `UTC`.
impl From<Timestamp> for DateTime {
    fn from(ts: Timestamp) -> DateTime {
        DateTime::from(ts.to_zoned(jiff::tz::TimeZone::UTC))
    }
}

impl From<MutableDateTime> for DateTime {
    fn from(dt: MutableDateTime) -> DateTime {
        dt.to_immutable()
    }
}

impl From<&MutableDateTime> for DateTime {
    fn from(dt: &MutableDateTime) -> DateTime {
        dt.to_immutable()
    }
}

impl From<DateTime> for Zoned {
    fn from(dt: DateTime) -> Zoned {
        dt.as_zoned().clone()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateTime {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime, D::Error> {
        use serde::de;

        struct DateTimeVisitor;

        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a datetime string, or an empty string")
            }

            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<DateTime, E> {
                if value.is_empty() {
                    return Ok(DateTime::none());
                }
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DateTimeVisitor)
    }
}
