use crate::{
    civil::DayOfWeek,
    datetime::{DateTime, MutableDateTime, WallClock},
    error::{property::Error as E, Error},
    fmt::Format,
    tz::TimeZone,
};

/// A named property of a wall clock datetime.
///
/// Every derived field, navigation and formatting helper of
/// [`WallClock`] can also be reached by name through
/// [`WallClock::get_field`], and the calendar fields can be written by name
/// through [`WallClock::set_field`]. This is the closed set of names that are
/// recognized.
///
/// # Example
///
/// ```
/// use jiff_wallclock::{fmt::Format, Property};
///
/// assert_eq!(Property::from_name("year_day"), Some(Property::YearDay));
/// assert_eq!(Property::from_name("tz"), Some(Property::TimeZone));
/// assert_eq!(
///     Property::from_name("as_rfc2822"),
///     Some(Property::As(Format::Rfc2822)),
/// );
/// assert_eq!(Property::from_name("fortnight"), None);
/// assert_eq!(Property::As(Format::Db).name(), "as_db");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Property {
    Timestamp,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Quarter,
    Week,
    Weekday,
    YearDay,
    IsMonday,
    IsTuesday,
    IsWednesday,
    IsThursday,
    IsFriday,
    IsSaturday,
    IsSunday,
    IsToday,
    IsPast,
    IsFuture,
    IsEmpty,
    Tomorrow,
    Yesterday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    TimeZone,
    Utc,
    Local,
    IsUtc,
    IsLocal,
    IsDst,
    Mutable,
    Immutable,
    /// One of the named formats, for example `as_rfc2822`.
    As(Format),
}

/// Every recognized name. The first name listed for a property is its
/// canonical name.
static NAMES: &[(&str, Property)] = &[
    ("timestamp", Property::Timestamp),
    ("year", Property::Year),
    ("month", Property::Month),
    ("day", Property::Day),
    ("hour", Property::Hour),
    ("minute", Property::Minute),
    ("second", Property::Second),
    ("quarter", Property::Quarter),
    ("week", Property::Week),
    ("weekday", Property::Weekday),
    ("year_day", Property::YearDay),
    ("is_monday", Property::IsMonday),
    ("is_tuesday", Property::IsTuesday),
    ("is_wednesday", Property::IsWednesday),
    ("is_thursday", Property::IsThursday),
    ("is_friday", Property::IsFriday),
    ("is_saturday", Property::IsSaturday),
    ("is_sunday", Property::IsSunday),
    ("is_today", Property::IsToday),
    ("is_past", Property::IsPast),
    ("is_future", Property::IsFuture),
    ("is_empty", Property::IsEmpty),
    ("tomorrow", Property::Tomorrow),
    ("yesterday", Property::Yesterday),
    ("monday", Property::Monday),
    ("tuesday", Property::Tuesday),
    ("wednesday", Property::Wednesday),
    ("thursday", Property::Thursday),
    ("friday", Property::Friday),
    ("saturday", Property::Saturday),
    ("sunday", Property::Sunday),
    ("timezone", Property::TimeZone),
    ("zone", Property::TimeZone),
    ("tz", Property::TimeZone),
    ("utc", Property::Utc),
    ("local", Property::Local),
    ("is_utc", Property::IsUtc),
    ("is_local", Property::IsLocal),
    ("is_dst", Property::IsDst),
    ("mutable", Property::Mutable),
    ("immutable", Property::Immutable),
    ("as_atom", Property::As(Format::Atom)),
    ("as_cookie", Property::As(Format::Cookie)),
    ("as_iso8601", Property::As(Format::Iso8601)),
    ("as_rfc822", Property::As(Format::Rfc822)),
    ("as_rfc850", Property::As(Format::Rfc850)),
    ("as_rfc1036", Property::As(Format::Rfc1036)),
    ("as_rfc1123", Property::As(Format::Rfc1123)),
    ("as_rfc2822", Property::As(Format::Rfc2822)),
    ("as_rfc3339", Property::As(Format::Rfc3339)),
    ("as_rss", Property::As(Format::Rss)),
    ("as_w3c", Property::As(Format::W3c)),
    ("as_db", Property::As(Format::Db)),
    ("as_number", Property::As(Format::Number)),
    ("as_date", Property::As(Format::Date)),
    ("as_time", Property::As(Format::Time)),
];

impl Property {
    /// Looks up a property by name. Names are case sensitive.
    pub fn from_name(name: &str) -> Option<Property> {
        NAMES.iter().find(|&&(n, _)| n == name).map(|&(_, p)| p)
    }

    /// Returns the canonical name of this property.
    pub fn name(self) -> &'static str {
        // OK because every property has at least one entry in `NAMES`.
        NAMES.iter().find(|&&(_, p)| p == self).map(|&(n, _)| n).unwrap()
    }

    /// Returns every recognized property name, aliases included.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMES.iter().map(|&(name, _)| name)
    }

    /// Returns true if this property can be written on a
    /// [`MutableDateTime`].
    pub fn is_writable(self) -> bool {
        matches!(
            self,
            Property::Timestamp
                | Property::Year
                | Property::Month
                | Property::Day
                | Property::Hour
                | Property::Minute
                | Property::Second
                | Property::TimeZone
        )
    }

    /// Like `from_name`, but returns an error for unrecognized names.
    pub(crate) fn lookup(name: &str) -> Result<Property, Error> {
        Property::from_name(name).ok_or_else(|| E::not_defined(name).into())
    }
}

impl core::fmt::Display for Property {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a property read by name.
///
/// Navigation properties like `tomorrow` produce a datetime of the same
/// variant as the one they're read from.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Bool(bool),
    Str(String),
    Immutable(DateTime),
    Mutable(MutableDateTime),
    TimeZone(TimeZone),
}

impl FieldValue {
    /// Returns the integer if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            FieldValue::Int(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            FieldValue::Bool(yes) => Some(yes),
            _ => None,
        }
    }

    /// Returns the string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            FieldValue::Str(ref s) => Some(s),
            _ => None,
        }
    }

    /// Returns the time zone if this is a time zone value.
    pub fn as_timezone(&self) -> Option<&TimeZone> {
        match *self {
            FieldValue::TimeZone(ref tz) => Some(tz),
            _ => None,
        }
    }

    /// Returns the datetime if this is a datetime value of either variant,
    /// as an immutable datetime.
    pub fn to_datetime(&self) -> Option<DateTime> {
        match *self {
            FieldValue::Immutable(ref dt) => Some(dt.clone()),
            FieldValue::Mutable(ref dt) => Some(DateTime::from(dt)),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> FieldValue {
        FieldValue::Int(n)
    }
}

impl From<bool> for FieldValue {
    fn from(yes: bool) -> FieldValue {
        FieldValue::Bool(yes)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> FieldValue {
        FieldValue::Str(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> FieldValue {
        FieldValue::Str(s.to_string())
    }
}

impl From<TimeZone> for FieldValue {
    fn from(tz: TimeZone) -> FieldValue {
        FieldValue::TimeZone(tz)
    }
}

impl From<DateTime> for FieldValue {
    fn from(dt: DateTime) -> FieldValue {
        FieldValue::Immutable(dt)
    }
}

impl From<MutableDateTime> for FieldValue {
    fn from(dt: MutableDateTime) -> FieldValue {
        FieldValue::Mutable(dt)
    }
}

/// Reads a property from a wall clock datetime.
pub(crate) fn read<D: WallClock>(
    dt: &D,
    property: Property,
) -> Result<FieldValue, Error> {
    use self::Property as P;

    let weekday_is =
        |day: DayOfWeek| FieldValue::Bool(dt.day_of_week() == day);
    Ok(match property {
        P::Timestamp => FieldValue::Int(dt.timestamp()),
        P::Year => FieldValue::Int(i64::from(dt.year())),
        P::Month => FieldValue::Int(i64::from(dt.month())),
        P::Day => FieldValue::Int(i64::from(dt.day())),
        P::Hour => FieldValue::Int(i64::from(dt.hour())),
        P::Minute => FieldValue::Int(i64::from(dt.minute())),
        P::Second => FieldValue::Int(i64::from(dt.second())),
        P::Quarter => FieldValue::Int(i64::from(dt.quarter())),
        P::Week => FieldValue::Int(i64::from(dt.week())),
        P::Weekday => FieldValue::Int(i64::from(dt.weekday())),
        P::YearDay => FieldValue::Int(i64::from(dt.year_day())),
        P::IsMonday => weekday_is(DayOfWeek::Monday),
        P::IsTuesday => weekday_is(DayOfWeek::Tuesday),
        P::IsWednesday => weekday_is(DayOfWeek::Wednesday),
        P::IsThursday => weekday_is(DayOfWeek::Thursday),
        P::IsFriday => weekday_is(DayOfWeek::Friday),
        P::IsSaturday => weekday_is(DayOfWeek::Saturday),
        P::IsSunday => weekday_is(DayOfWeek::Sunday),
        P::IsToday => FieldValue::Bool(dt.is_today()),
        P::IsPast => FieldValue::Bool(dt.is_past()),
        P::IsFuture => FieldValue::Bool(dt.is_future()),
        P::IsEmpty => FieldValue::Bool(dt.is_empty()),
        P::Tomorrow => dt.tomorrow()?.into_field_value(),
        P::Yesterday => dt.yesterday()?.into_field_value(),
        P::Monday => dt.monday()?.into_field_value(),
        P::Tuesday => dt.tuesday()?.into_field_value(),
        P::Wednesday => dt.wednesday()?.into_field_value(),
        P::Thursday => dt.thursday()?.into_field_value(),
        P::Friday => dt.friday()?.into_field_value(),
        P::Saturday => dt.saturday()?.into_field_value(),
        P::Sunday => dt.sunday()?.into_field_value(),
        P::TimeZone => FieldValue::TimeZone(dt.timezone()),
        P::Utc => dt.utc()?.into_field_value(),
        P::Local => dt.local()?.into_field_value(),
        P::IsUtc => FieldValue::Bool(dt.is_utc()),
        P::IsLocal => FieldValue::Bool(dt.is_local()),
        P::IsDst => FieldValue::Bool(dt.is_dst()),
        P::Mutable => FieldValue::Mutable(dt.to_mutable()),
        P::Immutable => FieldValue::Immutable(dt.to_immutable()),
        P::As(format) => FieldValue::Str(dt.format_as(format)?),
    })
}
