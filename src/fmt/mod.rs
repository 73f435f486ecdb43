/*!
Named date patterns, the pattern renderer and free-form parsing.

A pattern is a string of single character tokens, like `Y-m-d H:i:s`. Each
recognized character is replaced by a piece of the value being formatted and
every other character is copied as is. A backslash escapes the character
following it, so `\T` renders a literal `T`.

| Token | Renders |
|---|---|
| `d` | day of the month, two digits |
| `D` | abbreviated day name, `Mon` |
| `j` | day of the month |
| `l` | full day name, `Monday` |
| `N` | ISO day of the week, `1` (Monday) to `7` (Sunday) |
| `S` | English ordinal suffix for the day of the month, `st` |
| `w` | day of the week, `0` (Sunday) to `6` (Saturday) |
| `z` | day of the year starting at `0` |
| `W` | ISO week number, two digits |
| `F` | full month name, `January` |
| `m` | month, two digits |
| `M` | abbreviated month name, `Jan` |
| `n` | month |
| `t` | number of days in the month |
| `L` | `1` in a leap year, `0` otherwise |
| `o` | ISO week-numbering year |
| `Y` | year, at least four digits, `-0001` |
| `y` | year, two digits |
| `a` / `A` | `am`/`pm`, `AM`/`PM` |
| `g` / `G` | hour, 12 hour and 24 hour clock |
| `h` / `H` | hour, 12 hour and 24 hour clock, two digits |
| `i` | minutes, two digits |
| `s` | seconds, two digits |
| `u` | microseconds, six digits |
| `v` | milliseconds, three digits |
| `e` | time zone name, `Europe/Paris` |
| `I` | `1` during daylight saving time, `0` otherwise |
| `O` | offset, `+0200` |
| `P` | offset, `+02:00` |
| `p` | like `P`, but `Z` for a zero offset |
| `T` | time zone abbreviation, `CEST` |
| `Z` | offset in seconds |
| `c` | ISO 8601 datetime, `2004-02-12T15:19:21+00:00` |
| `r` | RFC 2822 datetime, `Thu, 21 Dec 2000 16:01:07 +0200` |
| `U` | seconds since the Unix epoch |
*/

pub(crate) mod parse;
pub(crate) mod pattern;

/// `Y-m-d\TH:i:sP`, e.g. `2013-11-04T20:21:22+01:00`.
pub const ATOM: &str = "Y-m-d\\TH:i:sP";
/// `l, d-M-Y H:i:s T`, e.g. `Monday, 04-Nov-2013 20:21:22 UTC`.
pub const COOKIE: &str = "l, d-M-Y H:i:s T";
/// `Y-m-d\TH:i:sO`, e.g. `2013-11-04T20:21:22+0100`.
pub const ISO8601: &str = "Y-m-d\\TH:i:sO";
/// `D, d M y H:i:s O`, e.g. `Mon, 04 Nov 13 20:21:22 +0100`.
pub const RFC822: &str = "D, d M y H:i:s O";
/// `l, d-M-y H:i:s T`, e.g. `Monday, 04-Nov-13 20:21:22 CET`.
pub const RFC850: &str = "l, d-M-y H:i:s T";
/// `D, d M y H:i:s O`, e.g. `Mon, 04 Nov 13 20:21:22 +0100`.
pub const RFC1036: &str = "D, d M y H:i:s O";
/// `D, d M Y H:i:s O`, e.g. `Mon, 04 Nov 2013 20:21:22 +0100`.
pub const RFC1123: &str = "D, d M Y H:i:s O";
/// `D, d M Y H:i:s O`, e.g. `Mon, 04 Nov 2013 20:21:22 +0100`.
pub const RFC2822: &str = "D, d M Y H:i:s O";
/// `Y-m-d\TH:i:sP`, e.g. `2013-11-04T20:21:22+01:00`.
pub const RFC3339: &str = "Y-m-d\\TH:i:sP";
/// `D, d M Y H:i:s O`, e.g. `Mon, 04 Nov 2013 20:21:22 +0100`.
pub const RSS: &str = "D, d M Y H:i:s O";
/// `Y-m-d\TH:i:sP`, e.g. `2013-11-04T20:21:22+01:00`.
pub const W3C: &str = "Y-m-d\\TH:i:sP";
/// `Y-m-d H:i:s`, e.g. `2013-11-04 20:21:22`.
pub const DB: &str = "Y-m-d H:i:s";
/// `YmdHis`, e.g. `20131104202122`.
pub const NUMBER: &str = "YmdHis";
/// `Y-m-d`, e.g. `2013-11-04`.
pub const DATE: &str = "Y-m-d";
/// `H:i:s`, e.g. `20:21:22`.
pub const TIME: &str = "H:i:s";

/// One of the named patterns.
///
/// Every named pattern is also exposed as a constant in this module, and as
/// an `as_*` method on the wall clock datetime types.
///
/// # Example
///
/// ```
/// use jiff_wallclock::fmt::{self, Format};
///
/// assert_eq!(Format::Cookie.pattern(), fmt::COOKIE);
/// assert_eq!(Format::from_name("rfc2822"), Some(Format::Rfc2822));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    Atom,
    Cookie,
    Iso8601,
    Rfc822,
    Rfc850,
    Rfc1036,
    Rfc1123,
    Rfc2822,
    Rfc3339,
    Rss,
    W3c,
    Db,
    Number,
    Date,
    Time,
}

impl Format {
    /// Every named pattern.
    pub const ALL: [Format; 15] = [
        Format::Atom,
        Format::Cookie,
        Format::Iso8601,
        Format::Rfc822,
        Format::Rfc850,
        Format::Rfc1036,
        Format::Rfc1123,
        Format::Rfc2822,
        Format::Rfc3339,
        Format::Rss,
        Format::W3c,
        Format::Db,
        Format::Number,
        Format::Date,
        Format::Time,
    ];

    /// Returns the pattern string for this format.
    pub fn pattern(self) -> &'static str {
        match self {
            Format::Atom => ATOM,
            Format::Cookie => COOKIE,
            Format::Iso8601 => ISO8601,
            Format::Rfc822 => RFC822,
            Format::Rfc850 => RFC850,
            Format::Rfc1036 => RFC1036,
            Format::Rfc1123 => RFC1123,
            Format::Rfc2822 => RFC2822,
            Format::Rfc3339 => RFC3339,
            Format::Rss => RSS,
            Format::W3c => W3C,
            Format::Db => DB,
            Format::Number => NUMBER,
            Format::Date => DATE,
            Format::Time => TIME,
        }
    }

    /// Returns the lowercase name of this format, as used by the `as_*`
    /// properties.
    pub fn name(self) -> &'static str {
        match self {
            Format::Atom => "atom",
            Format::Cookie => "cookie",
            Format::Iso8601 => "iso8601",
            Format::Rfc822 => "rfc822",
            Format::Rfc850 => "rfc850",
            Format::Rfc1036 => "rfc1036",
            Format::Rfc1123 => "rfc1123",
            Format::Rfc2822 => "rfc2822",
            Format::Rfc3339 => "rfc3339",
            Format::Rss => "rss",
            Format::W3c => "w3c",
            Format::Db => "db",
            Format::Number => "number",
            Format::Date => "date",
            Format::Time => "time",
        }
    }

    /// Looks up a format by its name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Format> {
        Format::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }

    /// Returns the format whose pattern is exactly `pattern`, when that
    /// pattern renders the empty date specially.
    pub(crate) fn empty_special_case(pattern: &str) -> Option<Format> {
        match pattern {
            DATE => Some(Format::Date),
            DB => Some(Format::Db),
            _ => None,
        }
    }

    /// What the empty date renders as for this format, if it is special
    /// cased.
    pub(crate) fn empty_rendering(self) -> Option<&'static str> {
        match self {
            Format::Date => Some("0000-00-00"),
            Format::Db => Some("0000-00-00 00:00:00"),
            _ => None,
        }
    }

    /// What a zero offset renders as for this format, if it is special
    /// cased.
    pub(crate) fn zero_offset_rendering(self) -> Option<&'static str> {
        match self {
            Format::Rfc822 | Format::Rfc1123 => Some("GMT"),
            Format::Iso8601 => Some("Z"),
            _ => None,
        }
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
