use std::{
    collections::HashMap,
    sync::{Arc, OnceLock, RwLock},
};

use jiff::{tz::Offset, Timestamp};

use crate::{
    error::{tz::Error as E, Error, ErrorContext},
    tz::location::{self, TimeZoneLocation},
};

/// An interned, named time zone.
///
/// A `TimeZone` wraps a [`jiff::tz::TimeZone`] together with its canonical
/// name. Values are interned by that name: asking for the same time zone
/// twice returns two handles to the same allocation, so cloning and
/// comparing time zones is cheap.
///
/// # Names
///
/// * `UTC`, in any case, is canonicalized to `UTC`.
/// * Fixed offsets may be written as `+HH`, `+HHMM` or `+HH:MM` (or with a
/// `-`) and are canonicalized to `+HH:MM`. The hour must be at most `23`.
/// * Everything else is looked up in the IANA time zone database, for
/// example `Europe/Paris`.
///
/// Note that only `UTC` is considered UTC by [`TimeZone::is_utc`]. In
/// particular, `GMT` is a distinct time zone.
///
/// # Example
///
/// ```
/// use jiff_wallclock::tz::TimeZone;
///
/// let tz1 = TimeZone::get("utc")?;
/// let tz2 = TimeZone::get("UTC")?;
/// assert!(TimeZone::ptr_eq(&tz1, &tz2));
/// assert_eq!(tz1.name(), "UTC");
/// assert!(tz1.is_utc());
///
/// let paris = TimeZone::get("Europe/Paris")?;
/// assert!(!paris.is_utc());
/// assert_eq!(paris.to_string(), "Europe/Paris");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct TimeZone {
    inner: Arc<TimeZoneInner>,
}

struct TimeZoneInner {
    name: Box<str>,
    tz: jiff::tz::TimeZone,
    offset: OnceLock<i32>,
    location: OnceLock<Arc<TimeZoneLocation>>,
}

impl TimeZone {
    /// Returns the time zone with the given name.
    ///
    /// # Errors
    ///
    /// This returns an error when the name is neither `UTC`, a fixed offset
    /// nor a time zone in the IANA time zone database.
    pub fn get(name: &str) -> Result<TimeZone, Error> {
        {
            let zones = cache().read().unwrap();
            if let Some(tz) = zones.get(name) {
                return Ok(tz.clone());
            }
        }
        let (canonical, tz) = resolve(name)?;
        debug!("interning time zone `{canonical}` requested as `{name}`");
        let mut zones = cache().write().unwrap();
        // Another thread may have interned the same time zone while we were
        // resolving it. In that case, the value we just built is dropped.
        let interned = zones
            .entry(canonical.clone())
            .or_insert_with(|| TimeZone::new(canonical, tz))
            .clone();
        if interned.name() != name {
            zones.entry(name.into()).or_insert_with(|| interned.clone());
        }
        Ok(interned)
    }

    /// Returns the interned `UTC` time zone.
    pub fn utc() -> TimeZone {
        static UTC: OnceLock<TimeZone> = OnceLock::new();
        UTC.get_or_init(|| TimeZone::from_jiff(&jiff::tz::TimeZone::UTC))
            .clone()
    }

    /// Interns a Jiff time zone.
    ///
    /// The name of the time zone is its IANA name if it has one, or its
    /// offset if it is a fixed offset time zone. If a time zone with the
    /// same name is already interned, that one is returned.
    ///
    /// Time zones with neither, like those built from a POSIX `TZ` string
    /// or a system time zone whose name couldn't be determined, are not
    /// interned. They are named `Etc/Unknown`, and only compare equal to
    /// time zones with the same rules.
    pub fn from_jiff(tz: &jiff::tz::TimeZone) -> TimeZone {
        let Some(name) = canonical_name(tz) else {
            trace!("not interning a Jiff time zone without a name");
            return TimeZone::new(UNKNOWN.into(), tz.clone());
        };
        {
            let zones = cache().read().unwrap();
            if let Some(tz) = zones.get(name.as_str()) {
                return tz.clone();
            }
        }
        debug!("interning time zone `{name}` from a Jiff time zone");
        let mut zones = cache().write().unwrap();
        zones
            .entry(name.clone().into_boxed_str())
            .or_insert_with(|| {
                TimeZone::new(name.into_boxed_str(), tz.clone())
            })
            .clone()
    }

    fn new(name: Box<str>, tz: jiff::tz::TimeZone) -> TimeZone {
        TimeZone {
            inner: Arc::new(TimeZoneInner {
                name,
                tz,
                offset: OnceLock::new(),
                location: OnceLock::new(),
            }),
        }
    }

    /// Returns true if both time zones are the same interned value.
    pub fn ptr_eq(tz1: &TimeZone, tz2: &TimeZone) -> bool {
        Arc::ptr_eq(&tz1.inner, &tz2.inner)
    }

    /// The canonical name of this time zone.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The underlying Jiff time zone.
    pub fn as_jiff(&self) -> &jiff::tz::TimeZone {
        &self.inner.tz
    }

    /// The offset from UTC, in seconds.
    ///
    /// The offset is computed once per time zone value against a snapshot of
    /// the current time that is taken once per process. This means the
    /// offset reported by a long running process doesn't change when a
    /// daylight saving time transition passes. Use [`TimeZone::offset_at`]
    /// for the offset at a specific instant.
    pub fn offset(&self) -> i32 {
        *self
            .inner
            .offset
            .get_or_init(|| self.offset_at(reference_now()).seconds())
    }

    /// The offset from UTC at the given instant.
    pub fn offset_at(&self, timestamp: Timestamp) -> Offset {
        self.inner.tz.to_offset(timestamp)
    }

    /// Returns true if daylight saving time is in effect at the given
    /// instant.
    pub fn is_dst_at(&self, timestamp: Timestamp) -> bool {
        self.inner.tz.to_offset_info(timestamp).dst().is_dst()
    }

    /// The geographical location of this time zone.
    ///
    /// This is looked up once per time zone value, and locations are shared
    /// between values with the same canonical name.
    pub fn location(&self) -> Arc<TimeZoneLocation> {
        Arc::clone(
            self.inner.location.get_or_init(|| location::lookup(self.name())),
        )
    }

    /// Returns true if this is the `UTC` time zone.
    pub fn is_utc(&self) -> bool {
        self.name() == "UTC"
    }

    /// Returns true if this is the current default time zone.
    ///
    /// See [`tz::default`](crate::tz::default).
    pub fn is_local(&self) -> bool {
        *self == crate::tz::default()
    }
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &TimeZone) -> bool {
        if TimeZone::ptr_eq(self, other) {
            return true;
        }
        // Named time zones are interned, so only unnamed ones can share a
        // name without sharing their rules.
        self.name() == other.name() && self.inner.tz == other.inner.tz
    }
}

impl Eq for TimeZone {}

impl core::hash::Hash for TimeZone {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl core::fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("TimeZone").field(&self.name()).finish()
    }
}

impl core::fmt::Display for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for TimeZone {
    type Err = Error;

    fn from_str(name: &str) -> Result<TimeZone, Error> {
        TimeZone::get(name)
    }
}

impl From<&jiff::tz::TimeZone> for TimeZone {
    fn from(tz: &jiff::tz::TimeZone) -> TimeZone {
        TimeZone::from_jiff(tz)
    }
}

impl From<jiff::tz::TimeZone> for TimeZone {
    fn from(tz: jiff::tz::TimeZone) -> TimeZone {
        TimeZone::from_jiff(&tz)
    }
}

impl From<&TimeZone> for TimeZone {
    fn from(tz: &TimeZone) -> TimeZone {
        tz.clone()
    }
}

impl From<TimeZone> for jiff::tz::TimeZone {
    fn from(tz: TimeZone) -> jiff::tz::TimeZone {
        tz.inner.tz.clone()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeZone {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeZone {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimeZone, D::Error> {
        use serde::de;

        struct TimeZoneVisitor;

        impl<'de> de::Visitor<'de> for TimeZoneVisitor {
            type Value = TimeZone;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a time zone name")
            }

            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<TimeZone, E> {
                TimeZone::get(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimeZoneVisitor)
    }
}

fn cache() -> &'static RwLock<HashMap<Box<str>, TimeZone>> {
    static CACHE: OnceLock<RwLock<HashMap<Box<str>, TimeZone>>> =
        OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// The instant every memoized offset is computed against.
fn reference_now() -> Timestamp {
    static NOW: OnceLock<Timestamp> = OnceLock::new();
    *NOW.get_or_init(Timestamp::now)
}

fn resolve(name: &str) -> Result<(Box<str>, jiff::tz::TimeZone), Error> {
    if name.eq_ignore_ascii_case("utc") {
        return Ok(("UTC".into(), jiff::tz::TimeZone::UTC));
    }
    if name.starts_with(|c| c == '+' || c == '-') {
        let offset = parse_offset(name)?;
        let canonical = offset_name(offset).into_boxed_str();
        return Ok((canonical, jiff::tz::TimeZone::fixed(offset)));
    }
    let tz = jiff::tz::TimeZone::get(name)
        .with_context(|| E::FailedLookup { name: name.into() })?;
    let canonical = tz.iana_name().unwrap_or(name).into();
    Ok((canonical, tz))
}

/// The name given to time zones that have neither an IANA name nor a fixed
/// offset. This is the name Jiff itself uses for a time zone it couldn't
/// identify.
pub(crate) const UNKNOWN: &str = "Etc/Unknown";

/// Returns the name a Jiff time zone is interned under, if it has one.
pub(crate) fn canonical_name(tz: &jiff::tz::TimeZone) -> Option<String> {
    if let Some(name) = tz.iana_name() {
        if name.eq_ignore_ascii_case("utc") {
            return Some("UTC".to_string());
        }
        return Some(name.to_string());
    }
    tz.to_fixed_offset().ok().map(offset_name)
}

fn offset_name(offset: Offset) -> String {
    let seconds = offset.seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// The largest hour accepted in a fixed offset name. Jiff supports offsets
/// up to `25:59:59`, but an offset name reads as a time of day.
const MAX_OFFSET_HOURS: i32 = 23;

fn parse_offset(name: &str) -> Result<Offset, Error> {
    let invalid = || Error::from(E::InvalidOffsetName { name: name.into() });
    let (sign, rest) = match name.as_bytes().first() {
        Some(b'+') => (1, &name[1..]),
        Some(b'-') => (-1, &name[1..]),
        _ => return Err(invalid()),
    };
    if !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return Err(invalid());
    }
    let (hours, minutes) = match rest.len() {
        2 => (rest, "00"),
        4 => (&rest[..2], &rest[2..]),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return Err(invalid()),
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > MAX_OFFSET_HOURS || minutes >= 60 {
        return Err(invalid());
    }
    Offset::from_seconds(sign * (hours * 3600 + minutes * 60))
        .with_context(|| E::InvalidOffsetName { name: name.into() })
}
