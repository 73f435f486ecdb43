use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedLookup { name: Box<str> },
    InvalidOffsetName { name: Box<str> },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Tz(err).into()
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
            FailedLookup { ref name } => {
                write!(f, "failed to find time zone `{name}`")
            }
            InvalidOffsetName { ref name } => write!(
                f,
                "`{name}` is not a valid fixed offset, \
                 expected `+HH`, `+HHMM` or `+HH:MM`",
            ),
        }
    }
}
