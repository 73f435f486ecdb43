use jiff::{Timestamp, Zoned};

use crate::{
    change::Change,
    datetime::{private::WallClockInternal, DateTime, WallClock},
    error::{property::Error as E, Error},
    fmt::Format,
    moment::Moment,
    property::{FieldValue, Property},
    tz::{self, TimeZone},
};

/// A wall clock datetime that changes in place.
///
/// This is the mutable sibling of [`DateTime`]. It has the same fields,
/// navigation helpers and formatters through [`WallClock`], but
/// [`MutableDateTime::change`] and the setters modify the value itself.
///
/// When a change fails, the value is left as it was.
///
/// # Example
///
/// ```
/// use jiff_wallclock::{tz::TimeZone, Change, MutableDateTime, WallClock};
///
/// let mut dt =
///     MutableDateTime::parse_in("2013-02-03 21:03:45", &TimeZone::utc())?;
/// dt.change(&Change::new().month(2).day(30))?.set_hour(8)?;
/// assert_eq!(dt.as_db(), "2013-03-02 08:03:45");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct MutableDateTime {
    moment: Moment,
}

impl MutableDateTime {
    /// Returns the empty date in `UTC`.
    pub fn none() -> MutableDateTime {
        DateTime::none().to_mutable()
    }

    /// Returns the empty date in the given time zone.
    pub fn none_in(tz: &TimeZone) -> Result<MutableDateTime, Error> {
        Ok(MutableDateTime::from_moment(Moment::empty(tz)?))
    }

    /// Returns a copy of the current time of the process session.
    ///
    /// The copy can be changed freely without affecting what later calls to
    /// [`DateTime::now`] or `MutableDateTime::now` return.
    pub fn now() -> MutableDateTime {
        DateTime::now().to_mutable()
    }

    /// Returns the actual current time, in the default time zone.
    pub fn right_now() -> MutableDateTime {
        DateTime::right_now().to_mutable()
    }

    /// Parses a datetime, interpreting strings without an offset in the
    /// given time zone.
    ///
    /// See [`DateTime::parse_in`].
    pub fn parse_in(
        input: &str,
        tz: &TimeZone,
    ) -> Result<MutableDateTime, Error> {
        Ok(MutableDateTime::from_moment(Moment::parse(input, tz)?))
    }

    /// Returns the instant `seconds` after the Unix epoch in the given time
    /// zone.
    pub fn from_timestamp(
        seconds: i64,
        tz: &TimeZone,
    ) -> Result<MutableDateTime, Error> {
        Ok(DateTime::from_timestamp(seconds, tz)?.to_mutable())
    }

    /// Applies a change in place.
    pub fn change(
        &mut self,
        change: &Change,
    ) -> Result<&mut MutableDateTime, Error> {
        self.moment = self.moment.change(change)?;
        Ok(self)
    }

    pub fn set_year(
        &mut self,
        year: impl Into<i64>,
    ) -> Result<&mut MutableDateTime, Error> {
        self.change(&Change::new().year(year))
    }

    pub fn set_month(
        &mut self,
        month: impl Into<i64>,
    ) -> Result<&mut MutableDateTime, Error> {
        self.change(&Change::new().month(month))
    }

    pub fn set_day(
        &mut self,
        day: impl Into<i64>,
    ) -> Result<&mut MutableDateTime, Error> {
        self.change(&Change::new().day(day))
    }

    pub fn set_hour(
        &mut self,
        hour: impl Into<i64>,
    ) -> Result<&mut MutableDateTime, Error> {
        self.change(&Change::new().hour(hour))
    }

    pub fn set_minute(
        &mut self,
        minute: impl Into<i64>,
    ) -> Result<&mut MutableDateTime, Error> {
        self.change(&Change::new().minute(minute))
    }

    pub fn set_second(
        &mut self,
        second: impl Into<i64>,
    ) -> Result<&mut MutableDateTime, Error> {
        self.change(&Change::new().second(second))
    }

    /// Moves to the instant `seconds` after the Unix epoch, keeping the time
    /// zone.
    pub fn set_timestamp(
        &mut self,
        seconds: i64,
    ) -> Result<&mut MutableDateTime, Error> {
        self.moment = self.moment.with_timestamp(seconds)?;
        Ok(self)
    }

    /// Moves to another time zone, keeping the instant.
    ///
    /// The empty date stays empty.
    pub fn set_timezone(
        &mut self,
        tz: &TimeZone,
    ) -> Result<&mut MutableDateTime, Error> {
        self.moment = self.moment.with_time_zone(tz)?;
        Ok(self)
    }

    fn instant(&self) -> Timestamp {
        self.moment.zoned().timestamp()
    }
}

impl WallClockInternal for MutableDateTime {
    fn moment(&self) -> &Moment {
        &self.moment
    }

    fn from_moment(moment: Moment) -> MutableDateTime {
        MutableDateTime { moment }
    }

    fn into_field_value(self) -> FieldValue {
        FieldValue::Mutable(self)
    }
}

impl WallClock for MutableDateTime {
    /// Writes `timestamp`, `year`, `month`, `day`, `hour`, `minute`,
    /// `second` or `timezone` (also spelled `zone` or `tz`).
    ///
    /// Calendar fields take integers and follow the carrying rules of
    /// [`Change`]. The time zone takes a [`TimeZone`] or a time zone name.
    fn set_field(
        &mut self,
        name: &str,
        value: FieldValue,
    ) -> Result<(), Error> {
        let int = |value: &FieldValue| {
            value.as_int().ok_or_else(|| {
                Error::adhoc(format_args!(
                    "property `{name}` requires an integer, \
                     but got {value:?}",
                ))
            })
        };
        let change = match Property::lookup(name)? {
            Property::Timestamp => {
                self.set_timestamp(int(&value)?)?;
                return Ok(());
            }
            Property::TimeZone => {
                let tz = match value {
                    FieldValue::TimeZone(tz) => tz,
                    FieldValue::Str(ref name) => TimeZone::get(name)?,
                    ref value => {
                        return Err(Error::adhoc(format_args!(
                            "property `{name}` requires a time zone \
                             or a time zone name, but got {value:?}",
                        )))
                    }
                };
                self.set_timezone(&tz)?;
                return Ok(());
            }
            Property::Year => Change::new().year(int(&value)?),
            Property::Month => Change::new().month(int(&value)?),
            Property::Day => Change::new().day(int(&value)?),
            Property::Hour => Change::new().hour(int(&value)?),
            Property::Minute => Change::new().minute(int(&value)?),
            Property::Second => Change::new().second(int(&value)?),
            _ => return Err(E::not_writable(name).into()),
        };
        self.change(&change)?;
        Ok(())
    }
}

impl Default for MutableDateTime {
    fn default() -> MutableDateTime {
        MutableDateTime::none()
    }
}

impl PartialEq for MutableDateTime {
    fn eq(&self, other: &MutableDateTime) -> bool {
        self.instant() == other.instant()
    }
}

impl Eq for MutableDateTime {}

impl PartialOrd for MutableDateTime {
    fn partial_cmp(
        &self,
        other: &MutableDateTime,
    ) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MutableDateTime {
    fn cmp(&self, other: &MutableDateTime) -> core::cmp::Ordering {
        self.instant().cmp(&other.instant())
    }
}

impl core::hash::Hash for MutableDateTime {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.instant().hash(state);
    }
}

impl PartialEq<DateTime> for MutableDateTime {
    fn eq(&self, other: &DateTime) -> bool {
        self.instant() == other.as_zoned().timestamp()
    }
}

impl PartialOrd<DateTime> for MutableDateTime {
    fn partial_cmp(&self, other: &DateTime) -> Option<core::cmp::Ordering> {
        Some(self.instant().cmp(&other.as_zoned().timestamp()))
    }
}

impl core::fmt::Debug for MutableDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("MutableDateTime").field(&self.moment).finish()
    }
}

/// Renders the ISO 8601 format, or nothing for the empty date.
impl core::fmt::Display for MutableDateTime {
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
impl core::str::FromStr for MutableDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<MutableDateTime, Error> {
        MutableDateTime::parse_in(input, &tz::default())
    }
}

impl From<Zoned> for MutableDateTime {
    fn from(zdt: Zoned) -> MutableDateTime {
        MutableDateTime::from_moment(Moment::Present(zdt))
    }
}

impl From<&Zoned> for MutableDateTime {
    fn from(zdt: &Zoned) -> MutableDateTime {
        MutableDateTime::from(zdt.clone())
    }
}

/// Converts a timestamp into a datetime in `UTC`.
impl From<Timestamp> for MutableDateTime {
    fn from(ts: Timestamp) -> MutableDateTime {
        MutableDateTime::from(ts.to_zoned(jiff::tz::TimeZone::UTC))
    }
}

impl From<DateTime> for MutableDateTime {
    fn from(dt: DateTime) -> MutableDateTime {
        dt.to_mutable()
    }
}

impl From<&DateTime> for MutableDateTime {
    fn from(dt: &DateTime) -> MutableDateTime {
        dt.to_mutable()
    }
}

impl From<MutableDateTime> for Zoned {
    fn from(dt: MutableDateTime) -> Zoned {
        match dt.moment {
            Moment::Empty(zdt) | Moment::Present(zdt) => zdt,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MutableDateTime {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MutableDateTime {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<MutableDateTime, D::Error> {
        <DateTime as serde::Deserialize>::deserialize(deserializer)
            .map(MutableDateTime::from)
    }
}
