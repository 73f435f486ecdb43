use crate::error::{civil::Error as E, Error};

/// A month of the Gregorian calendar.
///
/// The discriminant of each variant is its conventional number, where
/// `January` is `1` and `December` is `12`.
///
/// # Example
///
/// ```
/// use jiff_wallclock::civil::Month;
///
/// assert_eq!(Month::February.number(), 2);
/// assert_eq!(Month::February.days(true), 29);
/// assert_eq!(Month::from_number(12)?, Month::December);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(i8)]
pub enum Month {
    /// 31 days.
    January = 1,
    /// 28 days, or 29 in a leap year.
    February = 2,
    /// 31 days.
    March = 3,
    /// 30 days.
    April = 4,
    /// 31 days.
    May = 5,
    /// 30 days.
    June = 6,
    /// 31 days.
    July = 7,
    /// 31 days.
    August = 8,
    /// 30 days.
    September = 9,
    /// 31 days.
    October = 10,
    /// 30 days.
    November = 11,
    /// 31 days.
    December = 12,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the month corresponding to the given number.
    ///
    /// # Errors
    ///
    /// This returns an error when `number` is not in the range `1..=12`.
    pub fn from_number(number: i8) -> Result<Month, Error> {
        if !(1..=12).contains(&number) {
            return Err(E::invalid_component("month", number, 1, 12).into());
        }
        Ok(Month::ALL[usize::from(number.unsigned_abs()) - 1])
    }

    /// Returns this month's number, from `1` to `12`.
    #[inline]
    pub fn number(self) -> i8 {
        self as i8
    }

    /// Returns the number of days in this month.
    ///
    /// The `leap_year` flag only matters for February.
    pub fn days(self, leap_year: bool) -> i8 {
        match self {
            Month::February if leap_year => 29,
            Month::February => 28,
            Month::April
            | Month::June
            | Month::September
            | Month::November => 30,
            _ => 31,
        }
    }

    /// Returns the month following this one, wrapping from December to
    /// January.
    pub fn next(self) -> Month {
        Month::ALL[usize::from(self.number().unsigned_abs()) % 12]
    }

    /// Returns the month preceding this one, wrapping from January to
    /// December.
    pub fn previous(self) -> Month {
        Month::ALL[(usize::from(self.number().unsigned_abs()) + 10) % 12]
    }
}

impl TryFrom<i8> for Month {
    type Error = Error;

    fn try_from(number: i8) -> Result<Month, Error> {
        Month::from_number(number)
    }
}

impl From<Month> for i8 {
    fn from(month: Month) -> i8 {
        month.number()
    }
}

/// A trait for values that can be used as a month component.
///
/// This is what lets [`LocalDate::new`](crate::civil::LocalDate::new) accept
/// either a [`Month`] or its number.
pub trait IntoMonth {
    /// Converts this value into a month.
    ///
    /// # Errors
    ///
    /// This returns an error when the value doesn't correspond to a month.
    fn into_month(self) -> Result<Month, Error>;
}

impl IntoMonth for Month {
    fn into_month(self) -> Result<Month, Error> {
        Ok(self)
    }
}

impl IntoMonth for i8 {
    fn into_month(self) -> Result<Month, Error> {
        Month::from_number(self)
    }
}

impl IntoMonth for i32 {
    fn into_month(self) -> Result<Month, Error> {
        let number = i8::try_from(self)
            .map_err(|_| E::invalid_component("month", self, 1, 12))?;
        Month::from_number(number)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Month {
    fn arbitrary(g: &mut quickcheck::Gen) -> Month {
        *g.choose(&Month::ALL).unwrap()
    }
}
