use core::fmt::Write;

use jiff::{
    civil::{Date, Time, Weekday},
    fmt::strtime::BrokenDownTime,
    Zoned,
};

use crate::{
    error::{fmt::Error as E, Error, ErrorContext},
    fmt::Format,
};

/// The day of the week the empty date's normalized value is named as.
pub(crate) const EMPTY_WEEKDAY: Weekday = Weekday::Wednesday;

/// The value being rendered by a pattern.
///
/// Zoned values can render every token. Civil values can't render tokens
/// that need an offset or a time zone, and a time can't render tokens that
/// need a date.
///
/// `Empty` is the zoned value carried by the empty date. It renders like
/// `Zoned`, except that day names are those of the zero date's normalized
/// value, which is a Wednesday. Jiff's proleptic calendar puts
/// `-0001-11-30` on a Tuesday.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Subject<'a> {
    Zoned(&'a Zoned),
    Empty(&'a Zoned),
    DateTime(jiff::civil::DateTime),
    Date(Date),
    Time(Time),
}

impl<'a> Subject<'a> {
    fn date(&self, token: char) -> Result<Date, Error> {
        match *self {
            Subject::Zoned(zdt) | Subject::Empty(zdt) => Ok(zdt.date()),
            Subject::DateTime(dt) => Ok(dt.date()),
            Subject::Date(date) => Ok(date),
            Subject::Time(_) => Err(E::RequiresDate { token }.into()),
        }
    }

    fn weekday(&self, token: char) -> Result<Weekday, Error> {
        match *self {
            Subject::Empty(_) => Ok(EMPTY_WEEKDAY),
            _ => Ok(self.date(token)?.weekday()),
        }
    }

    fn time(&self) -> Time {
        match *self {
            Subject::Zoned(zdt) | Subject::Empty(zdt) => zdt.time(),
            Subject::DateTime(dt) => dt.time(),
            Subject::Date(_) => Time::midnight(),
            Subject::Time(time) => time,
        }
    }

    fn zoned(&self, token: char) -> Result<&'a Zoned, Error> {
        match *self {
            Subject::Zoned(zdt) | Subject::Empty(zdt) => Ok(zdt),
            _ => Err(E::RequiresZone { token }.into()),
        }
    }

    /// Builds the broken down time used for the glyphs that are delegated to
    /// Jiff's `strftime` implementation.
    fn broken_down(&self, token: char) -> Result<BrokenDownTime, Error> {
        let mut tm = match *self {
            Subject::Zoned(zdt) | Subject::Empty(zdt) => {
                BrokenDownTime::from(zdt)
            }
            Subject::DateTime(dt) => BrokenDownTime::from(dt),
            Subject::Date(date) => BrokenDownTime::from(date),
            Subject::Time(_) => {
                return Err(E::RequiresDate { token }.into());
            }
        };
        tm.set_weekday(Some(self.weekday(token)?));
        Ok(tm)
    }
}

/// Renders `pattern` for the given subject.
///
/// See the [module documentation](crate::fmt) for the recognized tokens.
pub(crate) fn render(
    subject: &Subject<'_>,
    pattern: &str,
) -> Result<String, Error> {
    let mut out = Out(String::with_capacity(pattern.len() * 2));
    let mut chars = pattern.chars();
    while let Some(token) = chars.next() {
        match token {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.0.push(escaped);
                }
            }
            'd' => out.fmt(format_args!("{:02}", subject.date(token)?.day())),
            'D' => out.strftime(subject, token, "%a")?,
            'j' => out.fmt(format_args!("{}", subject.date(token)?.day())),
            'l' => out.strftime(subject, token, "%A")?,
            'N' => {
                let weekday = subject.weekday(token)?;
                out.fmt(format_args!("{}", weekday.to_monday_one_offset()))
            }
            'S' => out.0.push_str(ordinal_suffix(subject.date(token)?.day())),
            'w' => {
                let weekday = subject.weekday(token)?;
                out.fmt(format_args!("{}", weekday.to_sunday_zero_offset()))
            }
            'z' => {
                let day = subject.date(token)?.day_of_year() - 1;
                out.fmt(format_args!("{day}"))
            }
            'W' => {
                let week = subject.date(token)?.iso_week_date().week();
                out.fmt(format_args!("{week:02}"))
            }
            'F' => out.strftime(subject, token, "%B")?,
            'm' => {
                out.fmt(format_args!("{:02}", subject.date(token)?.month()))
            }
            'M' => out.strftime(subject, token, "%b")?,
            'n' => out.fmt(format_args!("{}", subject.date(token)?.month())),
            't' => {
                let days = subject.date(token)?.days_in_month();
                out.fmt(format_args!("{days}"))
            }
            'L' => {
                let leap = subject.date(token)?.in_leap_year();
                out.0.push(if leap { '1' } else { '0' })
            }
            'o' => {
                let year = subject.date(token)?.iso_week_date().year();
                out.year(year)
            }
            'Y' => out.year(subject.date(token)?.year()),
            'y' => {
                let year = subject.date(token)?.year().rem_euclid(100);
                out.fmt(format_args!("{year:02}"))
            }
            'a' => out.0.push_str(meridiem(subject.time(), false)),
            'A' => out.0.push_str(meridiem(subject.time(), true)),
            'g' => out.fmt(format_args!("{}", hour12(subject.time()))),
            'G' => out.fmt(format_args!("{}", subject.time().hour())),
            'h' => out.fmt(format_args!("{:02}", hour12(subject.time()))),
            'H' => out.fmt(format_args!("{:02}", subject.time().hour())),
            'i' => out.fmt(format_args!("{:02}", subject.time().minute())),
            's' => out.fmt(format_args!("{:02}", subject.time().second())),
            'u' => {
                let micros = subject.time().subsec_nanosecond() / 1_000;
                out.fmt(format_args!("{micros:06}"))
            }
            'v' => {
                let millis = subject.time().millisecond();
                out.fmt(format_args!("{millis:03}"))
            }
            'e' => {
                let zdt = subject.zoned(token)?;
                let name = crate::tz::canonical_name(zdt.time_zone());
                out.0.push_str(name.as_deref().unwrap_or(crate::tz::UNKNOWN))
            }
            'I' => {
                let zdt = subject.zoned(token)?;
                let info = zdt.time_zone().to_offset_info(zdt.timestamp());
                out.0.push(if info.dst().is_dst() { '1' } else { '0' })
            }
            'O' => out.offset(subject.zoned(token)?.offset(), false),
            'P' => out.offset(subject.zoned(token)?.offset(), true),
            'p' => {
                let offset = subject.zoned(token)?.offset();
                if offset.seconds() == 0 {
                    out.0.push('Z');
                } else {
                    out.offset(offset, true);
                }
            }
            'T' => {
                subject.zoned(token)?;
                out.strftime(subject, token, "%Z")?
            }
            'Z' => {
                let seconds = subject.zoned(token)?.offset().seconds();
                out.fmt(format_args!("{seconds}"))
            }
            'c' => out.0.push_str(&render(subject, "Y-m-d\\TH:i:sP")?),
            'r' => out.0.push_str(&render(subject, "D, d M Y H:i:s O")?),
            'U' => {
                let seconds = subject.zoned(token)?.timestamp().as_second();
                out.fmt(format_args!("{seconds}"))
            }
            _ => out.0.push(token),
        }
    }
    Ok(out.0)
}

/// Renders one of the named formats, including its zero offset special
/// case.
///
/// The empty date special cases are handled by the caller, since only the
/// caller knows whether its value is empty.
pub(crate) fn render_format(
    subject: &Subject<'_>,
    format: Format,
) -> Result<String, Error> {
    let rendered = render(subject, format.pattern())?;
    let Some(replacement) = format.zero_offset_rendering() else {
        return Ok(rendered);
    };
    match *subject {
        Subject::Zoned(zdt) | Subject::Empty(zdt)
            if zdt.offset().seconds() == 0 =>
        {
            Ok(rendered.replace("+0000", replacement))
        }
        _ => Ok(rendered),
    }
}

struct Out(String);

impl Out {
    fn fmt(&mut self, args: core::fmt::Arguments<'_>) {
        // Writing to a `String` never fails.
        let _ = self.0.write_fmt(args);
    }

    fn year(&mut self, year: i16) {
        if year < 0 {
            self.fmt(format_args!("-{:04}", year.unsigned_abs()));
        } else {
            self.fmt(format_args!("{year:04}"));
        }
    }

    fn offset(&mut self, offset: jiff::tz::Offset, colon: bool) {
        let seconds = offset.seconds();
        let sign = if seconds < 0 { '-' } else { '+' };
        let minutes = seconds.unsigned_abs() / 60;
        let (hours, minutes) = (minutes / 60, minutes % 60);
        if colon {
            self.fmt(format_args!("{sign}{hours:02}:{minutes:02}"));
        } else {
            self.fmt(format_args!("{sign}{hours:02}{minutes:02}"));
        }
    }

    fn strftime(
        &mut self,
        subject: &Subject<'_>,
        token: char,
        directive: &str,
    ) -> Result<(), Error> {
        let tm = subject.broken_down(token)?;
        let glyph = tm
            .to_string(directive)
            .context(E::FailedRender { token })?;
        self.0.push_str(&glyph);
        Ok(())
    }
}

fn hour12(time: Time) -> i8 {
    match time.hour() % 12 {
        0 => 12,
        hour => hour,
    }
}

fn meridiem(time: Time, upper: bool) -> &'static str {
    match (time.hour() < 12, upper) {
        (true, false) => "am",
        (true, true) => "AM",
        (false, false) => "pm",
        (false, true) => "PM",
    }
}

fn ordinal_suffix(day: i8) -> &'static str {
    match (day % 10, day) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
