use std::sync::Arc;

pub(crate) mod civil;
pub(crate) mod fmt;
pub(crate) mod localize;
pub(crate) mod property;
pub(crate) mod tz;

/// An error that can occur in this crate.
///
/// The errors that can occur are:
///
/// * Reading a property that doesn't exist, or writing one that can't be
/// written. See [`Error::is_property_not_defined`] and
/// [`Error::is_property_not_writable`].
/// * Localizing a datetime when no localizer has been defined. See
/// [`Error::is_localizer_not_configured`].
/// * Building a local value from an invalid component, like month `13` or
/// hour `24`. See [`Error::is_invalid_component`].
/// * A change that carries a datetime outside of the supported range. See
/// [`Error::is_range`].
/// * Time zone lookup failures and parse failures, usually originating from
/// [`jiff::Error`].
///
/// # Design
///
/// Like Jiff itself, this crate uses a single error type for all of its
/// operations. Errors form a causal chain that is printed from the most
/// general context down to the root cause, separated by `: `. The `is_*`
/// predicates always inspect the root cause.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cloneable even though it may
    /// embed a `jiff::Error`. It also keeps an `Error` one word in size.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_wallclock::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error is the result of reading or writing a
    /// property name that isn't recognized.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_wallclock::{DateTime, WallClock};
    ///
    /// let dt = DateTime::none();
    /// assert!(
    ///     dt.get_field("fortnight").unwrap_err().is_property_not_defined(),
    /// );
    /// ```
    pub fn is_property_not_defined(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Property(property::Error::NotDefined { .. })
        )
    }

    /// Returns true when this error is the result of writing a property that
    /// can only be read.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_wallclock::{DateTime, FieldValue, WallClock};
    ///
    /// let mut dt = DateTime::none();
    /// let err = dt.set_field("quarter", FieldValue::Int(2)).unwrap_err();
    /// assert!(err.is_property_not_writable());
    /// ```
    pub fn is_property_not_writable(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Property(property::Error::NotWritable { .. })
        )
    }

    /// Returns true when this error is the result of localizing a datetime
    /// while no global localizer is defined.
    pub fn is_localizer_not_configured(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Localize(localize::Error::NotConfigured)
        )
    }

    /// Returns true when this error is the result of building a local value
    /// from a component outside of its allowed range.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_wallclock::civil::LocalTime;
    ///
    /// assert!(
    ///     LocalTime::new(24, 0, 0, 0).unwrap_err().is_invalid_component(),
    /// );
    /// ```
    pub fn is_invalid_component(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Civil(civil::Error::InvalidComponent { .. })
        )
    }

    /// Returns true when this error originated from a value being outside of
    /// the supported range, either here or in Jiff.
    pub fn is_range(&self) -> bool {
        match *self.root().kind() {
            ErrorKind::Range(_) => true,
            ErrorKind::Jiff(ref err) => err.is_range(),
            _ => false,
        }
    }
}

impl Error {
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn io(err: std::io::Error) -> Error {
        Error::from(ErrorKind::IO(IOError { err }))
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn path(self, path: impl Into<std::path::PathBuf>) -> Error {
        let err = Error::from(ErrorKind::FilePath(FilePathError {
            path: path.into(),
        }));
        self.context(err)
    }

    #[inline(never)]
    #[cold]
    pub(crate) fn adhoc(message: core::fmt::Arguments<'_>) -> Error {
        Error::from_args(message)
    }

    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        // OK because we just made sure `inner` is populated.
        let inner = err.inner.as_mut().unwrap();
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        // OK because we just created this error so the Arc
        // has one reference.
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn root(&self) -> &Error {
        // OK because `Error::chain` is guaranteed to return a non-empty
        // iterator.
        self.chain().last().unwrap()
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Civil(self::civil::Error),
    FilePath(FilePathError),
    Fmt(self::fmt::Error),
    IO(IOError),
    Jiff(jiff::Error),
    Localize(self::localize::Error),
    Property(self::property::Error),
    Range(RangeError),
    Tz(self::tz::Error),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Civil(ref err) => err.fmt(f),
            FilePath(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            IO(ref err) => err.fmt(f),
            Jiff(ref err) => err.fmt(f),
            Localize(ref err) => err.fmt(f),
            Property(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Tz(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown jiff-wallclock error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

impl From<jiff::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: jiff::Error) -> Error {
        ErrorKind::Jiff(err).into()
    }
}

impl IntoError for jiff::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        AdhocError { message: message.to_string().into_boxed_str() }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl std::error::Error for RangeError {}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

struct IOError {
    err: std::io::Error,
}

impl std::error::Error for IOError {}

impl core::fmt::Display for IOError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl core::fmt::Debug for IOError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("IOError").field("err", &self.err).finish()
    }
}

struct FilePathError {
    path: std::path::PathBuf,
}

impl std::error::Error for FilePathError {}

impl core::fmt::Display for FilePathError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl core::fmt::Debug for FilePathError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("FilePathError").field("path", &self.path).finish()
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls for every sub-error type.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`
/// (and `Result<T, jiff::Error>`). It absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
