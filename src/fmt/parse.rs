use jiff::{
    civil::{Date, Time},
    fmt::temporal::{Pieces, PiecesOffset},
    tz::TimeZone,
    Span, Timestamp, Zoned,
};

use crate::error::{fmt::Error as E, Error, ErrorContext};

/// The result of parsing a free-form datetime string.
#[derive(Clone, Debug)]
pub(crate) enum Parsed {
    /// The zero date, `0000-00-00` with an optional zero time.
    Empty,
    Zoned(Zoned),
}

/// Parses `input` into a zoned datetime.
///
/// Strings without an offset or a time zone annotation are interpreted in
/// `tz`. The following are accepted, in the order they're tried:
///
/// * `now`, `today`, `tomorrow` and `yesterday`, ignoring ASCII case.
/// * `@` followed by a number of seconds since the Unix epoch, in UTC.
/// * `0000-00-00` and `0000-00-00 00:00:00`, the empty date.
/// * RFC 9557 strings with a bracketed time zone annotation, like
/// `2024-03-10T02:30-05[America/New_York]`.
/// * ISO 8601 dates and datetimes, with or without an offset. A string with
/// an offset gets a fixed offset time zone.
/// * ISO 8601 times, on today's date in `tz`.
/// * RFC 2822 datetimes, like `Sat, 13 Jul 2024 15:09:59 -0400`.
pub(crate) fn parse(input: &str, tz: &TimeZone) -> Result<Parsed, Error> {
    let input = input.trim();
    if let Some(zdt) = relative(input, tz)? {
        return Ok(Parsed::Zoned(zdt));
    }
    if let Some(seconds) = input.strip_prefix('@') {
        let seconds: i64 = seconds
            .trim()
            .parse()
            .map_err(|_| Error::from(E::FailedParse { input: input.into() }))?;
        let ts = Timestamp::from_second(seconds)
            .with_context(|| E::FailedParse { input: input.into() })?;
        return Ok(Parsed::Zoned(ts.to_zoned(TimeZone::UTC)));
    }
    if matches!(input, "0000-00-00" | "0000-00-00 00:00:00") {
        return Ok(Parsed::Empty);
    }
    if input.contains('[') {
        let zdt = input
            .parse::<Zoned>()
            .with_context(|| E::FailedParse { input: input.into() })?;
        return Ok(Parsed::Zoned(zdt));
    }
    let pieces_err = match Pieces::parse(input) {
        Ok(pieces) => return from_pieces(&pieces, tz).map(Parsed::Zoned),
        Err(err) => err,
    };
    if let Ok(time) = input.parse::<Time>() {
        let today = Timestamp::now().to_zoned(tz.clone()).date();
        let zdt = today.to_datetime(time).to_zoned(tz.clone())?;
        return Ok(Parsed::Zoned(zdt));
    }
    if let Ok(zdt) = jiff::fmt::rfc2822::parse(input) {
        return Ok(Parsed::Zoned(zdt));
    }
    Err(Error::from(pieces_err)
        .context(E::FailedParse { input: input.into() }))
}

fn relative(input: &str, tz: &TimeZone) -> Result<Option<Zoned>, Error> {
    let days = if input.eq_ignore_ascii_case("now") {
        return Ok(Some(Timestamp::now().to_zoned(tz.clone())));
    } else if input.eq_ignore_ascii_case("today") {
        0
    } else if input.eq_ignore_ascii_case("tomorrow") {
        1
    } else if input.eq_ignore_ascii_case("yesterday") {
        -1
    } else {
        return Ok(None);
    };
    let today = Timestamp::now().to_zoned(tz.clone()).date();
    let date = today.checked_add(Span::new().days(days))?;
    Ok(Some(date.to_zoned(tz.clone())?))
}

fn from_pieces(pieces: &Pieces<'_>, tz: &TimeZone) -> Result<Zoned, Error> {
    let date: Date = pieces.date();
    let time = pieces.time().unwrap_or(Time::midnight());
    let dt = date.to_datetime(time);
    let zdt = match pieces.offset() {
        Some(PiecesOffset::Zulu) => dt.to_zoned(TimeZone::UTC)?,
        Some(PiecesOffset::Numeric(ref numeric)) => {
            dt.to_zoned(TimeZone::fixed(numeric.offset()))?
        }
        _ => dt.to_zoned(tz.clone())?,
    };
    Ok(zdt)
}
