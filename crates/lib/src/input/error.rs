use core::fmt;
use core::ops::Range;

use bstr::BStr;

use crate::env::Size;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static BStr),
    ExpectedInteger,
    MissingSeparator,
    TrailingInput(&'static BStr),
    UnexpectedEof,
    Boxed(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::ExpectedInteger => write!(f, "expected integer"),
            ErrorKind::MissingSeparator => write!(f, "missing three space column separator"),
            ErrorKind::TrailingInput(rest) => write!(f, "unexpected trailing input `{rest}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::Boxed(e) => write!(f, "{e}"),
        }
    }
}

/// Error raised through string processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Access the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte span of input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<Size> {
        self.span.clone()
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IStrError {}
