use core::fmt;
use core::ops::Range;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Associate the path and, for errors raised while parsing `data`, the
/// position of the error.
pub fn error_context<E>(path: &str, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let pos = find_range(&error).map(|span| crate::env::pos_from(data.as_data(), span));

    let cli_error = ErrorContext {
        path: path.into(),
        pos,
    };

    error.context(cli_error)
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    start: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, start: usize) -> Self {
        Self { line, start }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.start + 1)
    }
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Option<Range<Size>> {
    let e = error.chain().find_map(|e| e.downcast_ref::<IStrError>())?;
    Some(e.span())
}

#[derive(Debug)]
struct ErrorContext {
    path: Box<str>,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}", path = self.path),
            None => write!(f, "{path}", path = self.path),
        }
    }
}
