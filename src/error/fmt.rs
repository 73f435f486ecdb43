use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedParse { input: Box<str> },
    FailedRender { token: char },
    RequiresDate { token: char },
    RequiresZone { token: char },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
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
            FailedParse { ref input } => {
                write!(f, "failed to parse `{input}` as a datetime")
            }
            FailedRender { token } => {
                write!(f, "failed to render pattern token `{token}`")
            }
            RequiresDate { token } => write!(
                f,
                "pattern token `{token}` requires a date, \
                 but the value being formatted has none",
            ),
            RequiresZone { token } => write!(
                f,
                "pattern token `{token}` requires a time zone, \
                 but the value being formatted has none",
            ),
        }
    }
}
