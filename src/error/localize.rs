use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    NotConfigured,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Localize(err).into()
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
            NotConfigured => f.write_str(
                "no localizer has been defined, \
                 use `localize::define` to define one",
            ),
        }
    }
}
