/*!
Dates, times and datetimes without a time zone.

The types in this module are thin wrappers around their Jiff counterparts.
Compared to Jiff, they have microsecond precision, render with the pattern
language in [`crate::fmt`] and build dates with carrying days, so that
`2023-02-30` is `2023-03-02`.

Every local type can be extracted from a wall clock datetime:

```
use jiff_wallclock::{
    civil::{LocalDate, LocalDateTime, LocalTime},
    tz::TimeZone,
    DateTime,
};

let dt = DateTime::parse_in("2013-02-03 21:03:45", &TimeZone::utc())?;
assert_eq!(LocalDate::from(&dt).to_string(), "2013-02-03");
assert_eq!(LocalTime::from(&dt).to_string(), "21:03:45.000000");
assert_eq!(
    LocalDateTime::from(&dt).to_string(),
    "2013-02-03T21:03:45.000000",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{
    date::LocalDate,
    datetime::LocalDateTime,
    interval::Interval,
    month::{IntoMonth, Month},
    time::LocalTime,
    weekday::DayOfWeek,
};

mod date;
mod datetime;
mod interval;
mod month;
mod time;
mod weekday;

/// A visitor for the local types, which all deserialize from the same strings
/// their `FromStr` implementations accept.
#[cfg(feature = "serde")]
pub(crate) struct FromStrVisitor<T> {
    expecting: &'static str,
    _marker: core::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> FromStrVisitor<T> {
    pub(crate) fn new(expecting: &'static str) -> FromStrVisitor<T> {
        FromStrVisitor { expecting, _marker: core::marker::PhantomData }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for FromStrVisitor<T>
where
    T: core::str::FromStr<Err = crate::Error>,
{
    type Value = T;

    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<T, E> {
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let date = LocalDate::new(2013, 2, 3).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2013-02-03""#);
        let got: LocalDate = serde_json::from_str(&json).unwrap();
        assert_eq!(got, date);

        let time = LocalTime::new(21, 3, 45, 12).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, r#""21:03:45.000012""#);
        let got: LocalTime = serde_json::from_str(&json).unwrap();
        assert_eq!(got, time);

        let dt = date.at_time(time);
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, r#""2013-02-03T21:03:45.000012""#);
        let got: LocalDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(got, dt);
    }

    #[test]
    fn serde_rejects_garbage() {
        let err = serde_json::from_str::<LocalDate>(r#""not a date""#)
            .unwrap_err();
        assert!(err.to_string().contains("failed to parse `not a date`"));
        let err = serde_json::from_str::<LocalTime>("42").unwrap_err();
        assert!(err.to_string().contains("expected a time"));
    }
}
