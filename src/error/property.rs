use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    NotDefined { name: Box<str> },
    NotWritable { name: Box<str> },
}

impl Error {
    pub(crate) fn not_defined(name: &str) -> Error {
        Error::NotDefined { name: name.into() }
    }

    pub(crate) fn not_writable(name: &str) -> Error {
        Error::NotWritable { name: name.into() }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Property(err).into()
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
            NotDefined { ref name } => {
                write!(f, "property `{name}` is not defined")
            }
            NotWritable { ref name } => {
                write!(f, "property `{name}` is not writable")
            }
        }
    }
}
