/*!
Hooks for rendering datetimes in a human language.

This crate doesn't know anything about locales. Instead, applications either
pass a [`Localize`] implementation explicitly, with
[`WallClock::localize_with`](crate::WallClock::localize_with), or define a
process-wide localizer with [`define`] that
[`WallClock::localize`](crate::WallClock::localize) uses.

# Example

```
use jiff_wallclock::{localize, tz::TimeZone, DateTime, WallClock};

let dt = DateTime::parse_in("2013-11-04 20:21:22", &TimeZone::utc())?;

let shout = |dt: &DateTime, locale: &str| {
    format!("{}:{}", locale, dt.as_date())
};
assert_eq!(dt.localize_with(&shout, "fr"), "fr:2013-11-04");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use std::sync::{Arc, RwLock};

use crate::{
    datetime::DateTime,
    error::{localize::Error as E, Error},
};

/// The locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en";

/// A way of rendering a datetime for a locale.
///
/// This is implemented for every function or closure taking a datetime and a
/// locale.
pub trait Localize {
    type Output;

    fn localize(&self, dt: &DateTime, locale: &str) -> Self::Output;
}

impl<F, T> Localize for F
where
    F: Fn(&DateTime, &str) -> T,
{
    type Output = T;

    fn localize(&self, dt: &DateTime, locale: &str) -> T {
        self(dt, locale)
    }
}

/// The type of the process-wide localizer.
pub type Localizer = Arc<dyn Fn(&DateTime, &str) -> String + Send + Sync>;

static LOCALIZER: RwLock<Option<Localizer>> = RwLock::new(None);

/// Defines the process-wide localizer, returning the previous one.
///
/// # Example
///
/// ```
/// use jiff_wallclock::{localize, DateTime, WallClock};
///
/// let previous = localize::define(|dt: &DateTime, locale: &str| {
///     format!("[{locale}] {}", dt.as_db())
/// });
/// assert!(previous.is_none());
/// assert_eq!(
///     DateTime::none().localize("de")?,
///     "[de] 0000-00-00 00:00:00",
/// );
/// localize::undefine();
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn define<F>(localizer: F) -> Option<Localizer>
where
    F: Fn(&DateTime, &str) -> String + Send + Sync + 'static,
{
    debug!("defining the global localizer");
    LOCALIZER.write().unwrap().replace(Arc::new(localizer))
}

/// Returns the process-wide localizer, if one is defined.
pub fn defined() -> Option<Localizer> {
    LOCALIZER.read().unwrap().clone()
}

/// Removes the process-wide localizer, returning it.
pub fn undefine() -> Option<Localizer> {
    debug!("removing the global localizer");
    LOCALIZER.write().unwrap().take()
}

/// Localizes a datetime with the process-wide localizer.
///
/// # Errors
///
/// This returns an error when no localizer is defined.
pub fn localize(dt: &DateTime, locale: &str) -> Result<String, Error> {
    // The lock is released before calling the localizer, so that a
    // localizer may itself define or localize.
    let localizer = defined().ok_or(E::NotConfigured)?;
    Ok(localizer(dt, locale))
}
