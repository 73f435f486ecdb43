use crate::error::{civil::Error as E, Error};

/// A day of the week, numbered the ISO 8601 way.
///
/// `Monday` is `1` and `Sunday` is `7`. Note that this differs from the
/// Sunday-zero numbering used by some calendar APIs, where Sunday is `0`.
///
/// # Example
///
/// ```
/// use jiff_wallclock::civil::DayOfWeek;
///
/// assert_eq!(DayOfWeek::Monday.number(), 1);
/// assert_eq!(DayOfWeek::Sunday.number(), 7);
/// assert_eq!(DayOfWeek::from_sunday_zero(0)?, DayOfWeek::Sunday);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(i8)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl DayOfWeek {
    const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Returns the day corresponding to the given ISO number, where Monday
    /// is `1`.
    ///
    /// # Errors
    ///
    /// This returns an error when `number` is not in the range `1..=7`.
    pub fn from_number(number: i8) -> Result<DayOfWeek, Error> {
        if !(1..=7).contains(&number) {
            return Err(
                E::invalid_component("day of week", number, 1, 7).into()
            );
        }
        Ok(DayOfWeek::ALL[usize::from(number.unsigned_abs()) - 1])
    }

    /// Returns the day corresponding to the given Sunday-zero number.
    ///
    /// `0` is Sunday, `1` is Monday and `6` is Saturday.
    ///
    /// # Errors
    ///
    /// This returns an error when `number` is not in the range `0..=6`.
    pub fn from_sunday_zero(number: i8) -> Result<DayOfWeek, Error> {
        match number {
            0 => Ok(DayOfWeek::Sunday),
            1..=6 => DayOfWeek::from_number(number),
            _ => Err(E::invalid_component("day of week", number, 0, 6).into()),
        }
    }

    /// Returns this day's ISO number, from `1` (Monday) to `7` (Sunday).
    #[inline]
    pub fn number(self) -> i8 {
        self as i8
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }
}

impl From<jiff::civil::Weekday> for DayOfWeek {
    fn from(weekday: jiff::civil::Weekday) -> DayOfWeek {
        let index = weekday.to_monday_zero_offset().unsigned_abs();
        DayOfWeek::ALL[usize::from(index)]
    }
}

impl From<DayOfWeek> for jiff::civil::Weekday {
    fn from(day: DayOfWeek) -> jiff::civil::Weekday {
        use jiff::civil::Weekday::*;

        match day {
            DayOfWeek::Monday => Monday,
            DayOfWeek::Tuesday => Tuesday,
            DayOfWeek::Wednesday => Wednesday,
            DayOfWeek::Thursday => Thursday,
            DayOfWeek::Friday => Friday,
            DayOfWeek::Saturday => Saturday,
            DayOfWeek::Sunday => Sunday,
        }
    }
}

impl TryFrom<i8> for DayOfWeek {
    type Error = Error;

    fn try_from(number: i8) -> Result<DayOfWeek, Error> {
        DayOfWeek::from_number(number)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for DayOfWeek {
    fn arbitrary(g: &mut quickcheck::Gen) -> DayOfWeek {
        *g.choose(&DayOfWeek::ALL).unwrap()
    }
}
