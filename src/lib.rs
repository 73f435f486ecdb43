/*!
Wall clock datetimes, interned time zones and local date and time values,
built on top of [Jiff](https://docs.rs/jiff).

The main types are [`DateTime`] and its in-place counterpart
[`MutableDateTime`]. Both pair an instant with a [`tz::TimeZone`], expose
calendar derived fields through the [`WallClock`] trait and render themselves
with a small catalog of named formats. Either one may also be "empty", which
is how the zero date `0000-00-00 00:00:00` is represented.

# Example

```
use jiff_wallclock::{tz::TimeZone, Change, DateTime, WallClock};

let paris = TimeZone::get("Europe/Paris")?;
let dt = DateTime::parse_in("2013-02-03 21:03:45", &paris)?;
assert_eq!(dt.as_iso8601(), "2013-02-03T21:03:45+0100");

// With cascading, changing the hour resets the finer fields to zero.
let changed = dt.change(&Change::new().hour(9).cascade(true))?;
assert_eq!(changed.as_db(), "2013-02-03 09:00:00");

// The empty date renders specially in the formats that know about it.
let empty = DateTime::none();
assert!(empty.is_empty());
assert_eq!(empty.as_db(), "0000-00-00 00:00:00");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - Required. The time zone cache, the default
time zone override and the localizer slot are all process-wide and rely on
`std::sync`.
* **serde** (enabled by default) - Implements `Serialize` and `Deserialize`
for the datetime, time zone and local value types.
* **logging** - Emits messages through the [`log`](https://docs.rs/log) crate
about time zone interning, location table loading and default time zone
resolution.
*/

#![deny(rustdoc::broken_intra_doc_links)]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

pub use crate::{
    change::Change,
    datetime::{DateTime, MutableDateTime, WallClock},
    error::Error,
    property::{FieldValue, Property},
};

#[macro_use]
mod logging;

mod change;
pub mod civil;
pub mod clock;
mod datetime;
mod error;
pub mod fmt;
pub mod localize;
mod moment;
mod property;
pub mod tz;
