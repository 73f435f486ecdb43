/*!
Interned time zones, their locations and the default time zone.

The default time zone is what strings without an offset are interpreted in,
what [`DateTime::local`](crate::DateTime::local) converts to and what
[`TimeZone::is_local`] compares against. It is the time zone set with
[`set_default`] if any, and otherwise the system time zone as reported by
Jiff (which honors the `TZ` environment variable). If the system time zone
can't be determined, `UTC` is used.
*/

use std::sync::{OnceLock, RwLock};

pub use self::{location::TimeZoneLocation, timezone::TimeZone};

pub(crate) use self::timezone::{canonical_name, UNKNOWN};

mod location;
mod timezone;

static DEFAULT: RwLock<Option<TimeZone>> = RwLock::new(None);

/// Returns the current default time zone.
///
/// # Example
///
/// ```
/// use jiff_wallclock::tz;
///
/// assert!(tz::default().is_local());
/// ```
pub fn default() -> TimeZone {
    if let Some(ref tz) = *DEFAULT.read().unwrap() {
        return tz.clone();
    }
    system()
}

/// Sets the process-wide default time zone, returning the previous override
/// if one was set.
///
/// This affects every thread. It is meant to be called once at startup, in
/// the same way one would set the `TZ` environment variable.
pub fn set_default(tz: TimeZone) -> Option<TimeZone> {
    debug!("setting default time zone to `{}`", tz.name());
    DEFAULT.write().unwrap().replace(tz)
}

/// Removes the override set by [`set_default`], returning it.
///
/// After this, the default time zone is the system time zone again.
pub fn reset_default() -> Option<TimeZone> {
    DEFAULT.write().unwrap().take()
}

fn system() -> TimeZone {
    static SYSTEM: OnceLock<TimeZone> = OnceLock::new();
    SYSTEM
        .get_or_init(|| match jiff::tz::TimeZone::try_system() {
            Ok(tz) => {
                let tz = TimeZone::from_jiff(&tz);
                debug!("using system time zone `{}` as default", tz.name());
                tz
            }
            Err(_err) => {
                warn!(
                    "failed to find system time zone, \
                     falling back to UTC as the default: {_err}",
                );
                TimeZone::utc()
            }
        })
        .clone()
}
