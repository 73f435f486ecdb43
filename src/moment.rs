use jiff::{
    civil::{Date, Time, Weekday},
    Span, Timestamp, Zoned,
};

use crate::{
    change::Change,
    civil::DayOfWeek,
    error::Error,
    fmt::{
        parse::{self, Parsed},
        pattern::{self, Subject},
        Format,
    },
    tz::TimeZone,
};

/// The calendar value the empty date is rendered as by patterns that don't
/// special case it.
///
/// This is what `0000-00-00 00:00:00` normalizes to when the zero month and
/// zero day carry backwards: November 30 of the year before year zero.
const EMPTY_DATE: Date = jiff::civil::date(-1, 11, 30);

/// The state shared by the immutable and mutable wall clock datetimes.
///
/// Both variants are thin wrappers around this type: every derived field,
/// the change algorithm and formatting are implemented here once.
///
/// The empty date is an explicit tag rather than a magic calendar value.
/// It still carries a zoned datetime, at `-0001-11-30 00:00:00` in its time
/// zone, which is what formats that don't special case the empty date
/// render.
#[derive(Clone)]
pub enum Moment {
    Empty(Zoned),
    Present(Zoned),
}

impl Moment {
    pub(crate) fn empty(tz: &TimeZone) -> Result<Moment, Error> {
        let zdt = EMPTY_DATE.to_zoned(tz.as_jiff().clone())?;
        Ok(Moment::Empty(zdt))
    }

    pub(crate) fn parse(input: &str, tz: &TimeZone) -> Result<Moment, Error> {
        match parse::parse(input, tz.as_jiff())? {
            Parsed::Empty => Moment::empty(tz),
            Parsed::Zoned(zdt) => Ok(Moment::Present(zdt)),
        }
    }

    pub(crate) fn zoned(&self) -> &Zoned {
        match *self {
            Moment::Empty(ref zdt) | Moment::Present(ref zdt) => zdt,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(*self, Moment::Empty(_))
    }

    pub(crate) fn timezone(&self) -> TimeZone {
        TimeZone::from_jiff(self.zoned().time_zone())
    }

    /// Returns the ISO day of the week, `1` for Monday to `7` for Sunday.
    pub(crate) fn weekday(&self) -> i8 {
        // Jiff can give us the ISO number directly, but the Sunday-zero
        // numbering is the one that needs care: Sunday must become 7.
        match self.jiff_weekday().to_sunday_zero_offset() {
            0 => 7,
            n => n,
        }
    }

    pub(crate) fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from(self.jiff_weekday())
    }

    /// The empty date is named as its normalized value is in rendered
    /// formats, not as Jiff's proleptic calendar has it.
    fn jiff_weekday(&self) -> Weekday {
        match *self {
            Moment::Empty(_) => pattern::EMPTY_WEEKDAY,
            Moment::Present(ref zdt) => zdt.weekday(),
        }
    }

    fn subject(&self) -> Subject<'_> {
        match *self {
            Moment::Empty(ref zdt) => Subject::Empty(zdt),
            Moment::Present(ref zdt) => Subject::Zoned(zdt),
        }
    }

    /// Returns the quarter of the year, from `1` to `4`.
    pub(crate) fn quarter(&self) -> i8 {
        (self.zoned().month() - 1) / 3 + 1
    }

    /// Returns the ISO 8601 week number.
    pub(crate) fn week(&self) -> i8 {
        self.zoned().date().iso_week_date().week()
    }

    pub(crate) fn is_dst(&self) -> bool {
        let zdt = self.zoned();
        zdt.time_zone().to_offset_info(zdt.timestamp()).dst().is_dst()
    }

    pub(crate) fn is_today(&self) -> bool {
        let zdt = self.zoned();
        let today = Timestamp::now().to_zoned(zdt.time_zone().clone()).date();
        zdt.date() == today
    }

    pub(crate) fn is_past(&self) -> bool {
        self.zoned().timestamp() < Timestamp::now()
    }

    pub(crate) fn is_future(&self) -> bool {
        self.zoned().timestamp() > Timestamp::now()
    }

    /// Applies a change, keeping the time zone.
    ///
    /// An empty change returns this moment unchanged, including the empty
    /// tag. Any other change produces a present moment.
    pub(crate) fn change(&self, change: &Change) -> Result<Moment, Error> {
        if change.is_empty() {
            return Ok(self.clone());
        }
        let zdt = self.zoned();
        let dt = change.apply(zdt.datetime())?;
        Ok(Moment::Present(dt.to_zoned(zdt.time_zone().clone())?))
    }

    /// Returns the same instant in another time zone.
    ///
    /// The empty date stays empty, and is rebuilt in the new time zone.
    pub(crate) fn with_time_zone(
        &self,
        tz: &TimeZone,
    ) -> Result<Moment, Error> {
        match *self {
            Moment::Empty(_) => Moment::empty(tz),
            Moment::Present(ref zdt) => {
                Ok(Moment::Present(zdt.with_time_zone(tz.as_jiff().clone())))
            }
        }
    }

    pub(crate) fn with_timestamp(
        &self,
        seconds: i64,
    ) -> Result<Moment, Error> {
        let ts = Timestamp::from_second(seconds)?;
        Ok(Moment::Present(ts.to_zoned(self.zoned().time_zone().clone())))
    }

    /// Returns midnight of the day `days` away from this moment's date.
    pub(crate) fn midnight_plus(&self, days: i64) -> Result<Moment, Error> {
        let zdt = self.zoned();
        let date = zdt.date().checked_add(Span::new().try_days(days)?)?;
        let midnight =
            date.to_datetime(Time::midnight())
                .to_zoned(zdt.time_zone().clone())?;
        Ok(Moment::Present(midnight))
    }

    /// Returns midnight of the given day of the week, within the same ISO
    /// week as this moment.
    pub(crate) fn in_week(&self, day: DayOfWeek) -> Result<Moment, Error> {
        self.midnight_plus(i64::from(day.number() - self.weekday()))
    }

    pub(crate) fn format(&self, pattern: &str) -> Result<String, Error> {
        if self.is_empty() {
            let special = Format::empty_special_case(pattern)
                .and_then(Format::empty_rendering);
            if let Some(rendered) = special {
                return Ok(rendered.to_string());
            }
        }
        pattern::render(&self.subject(), pattern)
    }

    pub(crate) fn format_as(&self, format: Format) -> Result<String, Error> {
        if self.is_empty() {
            if let Some(rendered) = format.empty_rendering() {
                return Ok(rendered.to_string());
            }
        }
        pattern::render_format(&self.subject(), format)
    }
}

impl core::fmt::Debug for Moment {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Moment::Empty(ref zdt) => {
                f.debug_tuple("Empty").field(zdt).finish()
            }
            Moment::Present(ref zdt) => {
                core::fmt::Debug::fmt(zdt, f)
            }
        }
    }
}
