/*!
The wall clock datetime types and the behavior they share.

A wall clock datetime is an instant paired with a time zone, plus an "empty"
flag for the zero date `0000-00-00 00:00:00` that legacy databases use in
place of `NULL`. Both [`DateTime`] and [`MutableDateTime`] implement
[`WallClock`], which provides every derived field, navigation helper and
formatter. The two types only differ in how they are changed: a `DateTime`
returns a new value while a `MutableDateTime` changes in place.
*/

use jiff::Zoned;

use crate::{
    change::Change,
    civil::{DayOfWeek, LocalDate, LocalDateTime, LocalTime},
    error::Error,
    fmt::Format,
    localize::Localize,
    property::{self, FieldValue, Property},
    tz::{self, TimeZone},
};

use self::private::WallClockInternal;

pub use self::{immutable::DateTime, mutable::MutableDateTime};

mod immutable;
mod mutable;

pub(crate) mod private {
    use crate::{moment::Moment, property::FieldValue};

    pub trait WallClockInternal {
        fn moment(&self) -> &Moment;

        fn from_moment(moment: Moment) -> Self;

        fn into_field_value(self) -> FieldValue;
    }
}

/// The behavior shared by [`DateTime`] and [`MutableDateTime`].
///
/// This trait is sealed. Bring it into scope to read fields, navigate and
/// format either datetime type.
///
/// # Example
///
/// ```
/// use jiff_wallclock::{tz::TimeZone, DateTime, WallClock};
///
/// let paris = TimeZone::get("Europe/Paris")?;
/// let dt = DateTime::parse_in("2013-02-03 21:03:45", &paris)?;
/// assert_eq!(dt.year(), 2013);
/// assert_eq!(dt.quarter(), 1);
/// assert_eq!(dt.weekday(), 7);
/// assert!(dt.is_sunday());
/// assert_eq!(dt.as_iso8601(), "2013-02-03T21:03:45+0100");
/// assert_eq!(dt.utc()?.as_db(), "2013-02-03 20:03:45");
/// assert_eq!(dt.tomorrow()?.as_db(), "2013-02-04 00:00:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait WallClock:
    private::WallClockInternal + Clone + core::fmt::Debug + Sized
{
    /// Writes a property by name.
    ///
    /// # Errors
    ///
    /// This returns an error when the name isn't a recognized property, when
    /// the property can't be written (every property of an immutable
    /// [`DateTime`], and the derived properties of a [`MutableDateTime`]) or
    /// when the value doesn't fit the property.
    fn set_field(
        &mut self,
        name: &str,
        value: FieldValue,
    ) -> Result<(), Error>;

    /// Reads a property by name.
    ///
    /// See [`Property`] for the recognized names.
    ///
    /// # Errors
    ///
    /// This returns an error when the name isn't a recognized property, or
    /// when computing the property fails.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_wallclock::{tz::TimeZone, DateTime, FieldValue, WallClock};
    ///
    /// let dt = DateTime::parse_in("2013-11-04 20:21:22", &TimeZone::utc())?;
    /// assert_eq!(dt.get_field("year")?, FieldValue::Int(2013));
    /// assert_eq!(dt.get_field("is_monday")?, FieldValue::Bool(true));
    /// assert_eq!(
    ///     dt.get_field("as_date")?,
    ///     FieldValue::Str("2013-11-04".to_string()),
    /// );
    /// assert!(
    ///     dt.get_field("fortnight").unwrap_err().is_property_not_defined(),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    fn get_field(&self, name: &str) -> Result<FieldValue, Error> {
        self.get(Property::lookup(name)?)
    }

    /// Reads a property.
    fn get(&self, property: Property) -> Result<FieldValue, Error> {
        property::read(self, property)
    }

    /// Returns a copy of this datetime with the given change applied.
    ///
    /// An empty change returns an identical copy, including the empty flag.
    fn with(&self, change: &Change) -> Result<Self, Error> {
        Ok(Self::from_moment(self.moment().change(change)?))
    }

    /// Returns the underlying Jiff zoned datetime.
    ///
    /// For the empty date, this is `-0001-11-30T00:00:00` in this datetime's
    /// time zone.
    fn as_zoned(&self) -> &Zoned {
        self.moment().zoned()
    }

    /// Seconds since the Unix epoch.
    fn timestamp(&self) -> i64 {
        self.as_zoned().timestamp().as_second()
    }

    fn year(&self) -> i16 {
        self.as_zoned().year()
    }

    fn month(&self) -> i8 {
        self.as_zoned().month()
    }

    fn day(&self) -> i8 {
        self.as_zoned().day()
    }

    fn hour(&self) -> i8 {
        self.as_zoned().hour()
    }

    fn minute(&self) -> i8 {
        self.as_zoned().minute()
    }

    fn second(&self) -> i8 {
        self.as_zoned().second()
    }

    /// The quarter of the year, from `1` to `4`.
    fn quarter(&self) -> i8 {
        self.moment().quarter()
    }

    /// The ISO 8601 week number, from `1` to `53`.
    fn week(&self) -> i8 {
        self.moment().week()
    }

    /// The ISO 8601 day of the week, `1` for Monday through `7` for Sunday.
    fn weekday(&self) -> i8 {
        self.moment().weekday()
    }

    fn day_of_week(&self) -> DayOfWeek {
        self.moment().day_of_week()
    }

    /// The day of the year, from `1` to `366`.
    fn year_day(&self) -> i16 {
        self.as_zoned().day_of_year()
    }

    fn is_monday(&self) -> bool {
        self.day_of_week() == DayOfWeek::Monday
    }

    fn is_tuesday(&self) -> bool {
        self.day_of_week() == DayOfWeek::Tuesday
    }

    fn is_wednesday(&self) -> bool {
        self.day_of_week() == DayOfWeek::Wednesday
    }

    fn is_thursday(&self) -> bool {
        self.day_of_week() == DayOfWeek::Thursday
    }

    fn is_friday(&self) -> bool {
        self.day_of_week() == DayOfWeek::Friday
    }

    fn is_saturday(&self) -> bool {
        self.day_of_week() == DayOfWeek::Saturday
    }

    fn is_sunday(&self) -> bool {
        self.day_of_week() == DayOfWeek::Sunday
    }

    /// Returns true if this datetime falls on the current date in its own
    /// time zone.
    fn is_today(&self) -> bool {
        self.moment().is_today()
    }

    fn is_past(&self) -> bool {
        self.moment().is_past()
    }

    fn is_future(&self) -> bool {
        self.moment().is_future()
    }

    /// Returns true if this is the empty date.
    fn is_empty(&self) -> bool {
        self.moment().is_empty()
    }

    fn timezone(&self) -> TimeZone {
        self.moment().timezone()
    }

    fn is_utc(&self) -> bool {
        self.timezone().is_utc()
    }

    /// Returns true if this datetime is in the default time zone.
    fn is_local(&self) -> bool {
        self.timezone().is_local()
    }

    /// Returns true if daylight saving time is in effect at this instant.
    fn is_dst(&self) -> bool {
        self.moment().is_dst()
    }

    /// Midnight of the following day, in the same time zone.
    fn tomorrow(&self) -> Result<Self, Error> {
        Ok(Self::from_moment(self.moment().midnight_plus(1)?))
    }

    /// Midnight of the previous day, in the same time zone.
    fn yesterday(&self) -> Result<Self, Error> {
        Ok(Self::from_moment(self.moment().midnight_plus(-1)?))
    }

    /// Midnight of the Monday of this datetime's ISO week.
    fn monday(&self) -> Result<Self, Error> {
        self.in_week(DayOfWeek::Monday)
    }

    fn tuesday(&self) -> Result<Self, Error> {
        self.in_week(DayOfWeek::Tuesday)
    }

    fn wednesday(&self) -> Result<Self, Error> {
        self.in_week(DayOfWeek::Wednesday)
    }

    fn thursday(&self) -> Result<Self, Error> {
        self.in_week(DayOfWeek::Thursday)
    }

    fn friday(&self) -> Result<Self, Error> {
        self.in_week(DayOfWeek::Friday)
    }

    fn saturday(&self) -> Result<Self, Error> {
        self.in_week(DayOfWeek::Saturday)
    }

    /// Midnight of the Sunday of this datetime's ISO week. Weeks start on
    /// Monday, so this is never before this datetime's date.
    fn sunday(&self) -> Result<Self, Error> {
        self.in_week(DayOfWeek::Sunday)
    }

    /// Midnight of the given day within this datetime's ISO week.
    fn in_week(&self, day: DayOfWeek) -> Result<Self, Error> {
        Ok(Self::from_moment(self.moment().in_week(day)?))
    }

    /// The same instant in another time zone.
    ///
    /// The empty date stays empty.
    fn in_time_zone(&self, tz: &TimeZone) -> Result<Self, Error> {
        Ok(Self::from_moment(self.moment().with_time_zone(tz)?))
    }

    /// The same instant in `UTC`.
    fn utc(&self) -> Result<Self, Error> {
        self.in_time_zone(&TimeZone::utc())
    }

    /// The same instant in the [default time zone](crate::tz::default).
    fn local(&self) -> Result<Self, Error> {
        self.in_time_zone(&tz::default())
    }

    fn to_immutable(&self) -> DateTime {
        DateTime::from_moment(self.moment().clone())
    }

    fn to_mutable(&self) -> MutableDateTime {
        MutableDateTime::from_moment(self.moment().clone())
    }

    /// The civil date and time of this datetime, without its time zone.
    fn to_local_datetime(&self) -> LocalDateTime {
        LocalDateTime::from(self.as_zoned().datetime())
    }

    fn to_local_date(&self) -> LocalDate {
        LocalDate::from(self.as_zoned().date())
    }

    fn to_local_time(&self) -> LocalTime {
        LocalTime::from(self.as_zoned().time())
    }

    /// Renders this datetime with a pattern.
    ///
    /// See the [`fmt`](crate::fmt) module for the recognized tokens. The
    /// empty date renders as `0000-00-00` with the [`fmt::DATE`] pattern and
    /// as `0000-00-00 00:00:00` with the [`fmt::DB`] pattern.
    ///
    /// [`fmt::DATE`]: crate::fmt::DATE
    /// [`fmt::DB`]: crate::fmt::DB
    fn format(&self, pattern: &str) -> Result<String, Error> {
        self.moment().format(pattern)
    }

    /// Renders this datetime with one of the named formats.
    fn format_as(&self, format: Format) -> Result<String, Error> {
        self.moment().format_as(format)
    }

    fn as_atom(&self) -> String {
        self.render_named(Format::Atom)
    }

    fn as_cookie(&self) -> String {
        self.render_named(Format::Cookie)
    }

    /// The ISO 8601 rendering. A zero offset renders as `Z`.
    fn as_iso8601(&self) -> String {
        self.render_named(Format::Iso8601)
    }

    /// The RFC 822 rendering. A zero offset renders as `GMT`.
    fn as_rfc822(&self) -> String {
        self.render_named(Format::Rfc822)
    }

    fn as_rfc850(&self) -> String {
        self.render_named(Format::Rfc850)
    }

    fn as_rfc1036(&self) -> String {
        self.render_named(Format::Rfc1036)
    }

    /// The RFC 1123 rendering. A zero offset renders as `GMT`.
    fn as_rfc1123(&self) -> String {
        self.render_named(Format::Rfc1123)
    }

    fn as_rfc2822(&self) -> String {
        self.render_named(Format::Rfc2822)
    }

    fn as_rfc3339(&self) -> String {
        self.render_named(Format::Rfc3339)
    }

    fn as_rss(&self) -> String {
        self.render_named(Format::Rss)
    }

    fn as_w3c(&self) -> String {
        self.render_named(Format::W3c)
    }

    /// The `Y-m-d H:i:s` rendering, `0000-00-00 00:00:00` for the empty
    /// date.
    fn as_db(&self) -> String {
        self.render_named(Format::Db)
    }

    fn as_number(&self) -> String {
        self.render_named(Format::Number)
    }

    /// The `Y-m-d` rendering, `0000-00-00` for the empty date.
    fn as_date(&self) -> String {
        self.render_named(Format::Date)
    }

    fn as_time(&self) -> String {
        self.render_named(Format::Time)
    }

    #[doc(hidden)]
    fn render_named(&self, format: Format) -> String {
        // OK because the named patterns only use tokens that a zoned
        // datetime can always render.
        self.format_as(format).unwrap()
    }

    /// Localizes this datetime with the global localizer.
    ///
    /// # Errors
    ///
    /// This returns an error when no localizer has been defined with
    /// [`localize::define`](crate::localize::define).
    fn localize(&self, locale: &str) -> Result<String, Error> {
        crate::localize::localize(&self.to_immutable(), locale)
    }

    /// Localizes this datetime with the global localizer, for the
    /// [default locale](crate::localize::DEFAULT_LOCALE).
    fn localize_default(&self) -> Result<String, Error> {
        self.localize(crate::localize::DEFAULT_LOCALE)
    }

    /// Localizes this datetime with an explicit localizer.
    fn localize_with<L: Localize>(
        &self,
        localizer: &L,
        locale: &str,
    ) -> L::Output {
        localizer.localize(&self.to_immutable(), locale)
    }
}
