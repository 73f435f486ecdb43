/*!
Clocks and the sessions that memoize "now".

A [`Session`] answers the question "what time is it?" once and then keeps
giving the same answer, so that everything done as part of one unit of work
(a request, a batch job) agrees on the current time. [`DateTime::now`]
uses a process-wide session backed by the [`SystemClock`].

Tests that need a predictable "now" can build their own session around a
[`FixedClock`].

# Example

```
use jiff::Timestamp;
use jiff_wallclock::{clock::{FixedClock, Session}, WallClock};

let clock = FixedClock::new(Timestamp::from_second(1_383_596_482)?);
let session = Session::new(clock);
let now = session.now();
assert_eq!(now.timestamp(), 1_383_596_482);
assert!(jiff_wallclock::DateTime::ptr_eq(&now, &session.now()));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use std::sync::OnceLock;

use jiff::Timestamp;

use crate::{datetime::DateTime, tz};

/// A source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// The system clock, as read by [`Timestamp::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock that is stopped at a fixed instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    pub fn new(timestamp: Timestamp) -> FixedClock {
        FixedClock { timestamp }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// A unit of work with a stable notion of "now".
///
/// The first call to [`Session::now`] reads the clock. Later calls return
/// handles to that same datetime, in the time zone that was the default at
/// the time of the first call.
#[derive(Debug)]
pub struct Session<C = SystemClock> {
    clock: C,
    now: OnceLock<DateTime>,
}

impl<C: Clock> Session<C> {
    pub fn new(clock: C) -> Session<C> {
        Session { clock, now: OnceLock::new() }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the memoized current time of this session.
    pub fn now(&self) -> DateTime {
        self.now
            .get_or_init(|| {
                let now = self.right_now();
                trace!("session time fixed at {now}");
                now
            })
            .clone()
    }

    /// Reads the clock, bypassing the memoized value.
    pub fn right_now(&self) -> DateTime {
        let tz = tz::default();
        DateTime::from(self.clock.now().to_zoned(tz.as_jiff().clone()))
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Session<SystemClock> {
        Session::new(SystemClock)
    }
}

/// The session backing [`DateTime::now`].
pub(crate) fn process() -> &'static Session {
    static PROCESS: OnceLock<Session> = OnceLock::new();
    PROCESS.get_or_init(Session::default)
}
