use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAddSpanDate,
    FailedAddSpanDateTime,
    FailedUntil,
    InvalidComponent { what: &'static str, given: i64, min: i64, max: i64 },
}

impl Error {
    pub(crate) fn invalid_component(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Error {
        Error::InvalidComponent {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            FailedAddSpanDate => f.write_str("failed to add span to date"),
            FailedAddSpanDateTime => {
                f.write_str("failed to add span to datetime")
            }
            FailedUntil => {
                f.write_str("failed to compute span between local values")
            }
            InvalidComponent { what, given, min, max } => write!(
                f,
                "invalid {what} component {given}, \
                 expected a value in {min}..={max}",
            ),
        }
    }
}
