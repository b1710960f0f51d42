//! Input parser.

mod error;
mod iter;


use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Iter;

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Separator between the two columns of a record.
pub const SEPARATOR: &[u8] = b"   ";

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Absolute index of the start of `data`.
    index: Size,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Construct an iterator parsing each remaining line as `T`.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the next
    /// line is not a valid value of type `T`, returns `Ok(None)` once the
    /// input is exhausted.
    ///
    /// Lines are parsed in full, so `T` sees an empty line rather than the
    /// line after it.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        Ok(Some(line.next()?))
    }

    /// Test that only whitespace remains, consuming it.
    pub fn finish(&mut self) -> Result<()> {
        let n = self.find(0, |b| !b.is_ascii_whitespace());

        if n != self.data.len() {
            let start = self.index.saturating_add(Size::new(n));
            let end = self.index.saturating_add(Size::new(self.data.len()));
            let rest = BStr::new(self.data.get(n..).unwrap_or_default());
            return Err(IStrError::new(start..end, ErrorKind::TrailingInput(rest)));
        }

        self.advance(n);
        Ok(())
    }

    /// Try to parse the next word.
    pub fn try_next_word(&mut self) -> Option<(Size, &'static [u8])> {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return None;
        }

        let word = self.data.get(s..n)?;
        let index = self.index.saturating_add(Size::new(s));
        self.advance(n);
        Some((index, word))
    }

    /// Split on the first occurrence of `sep`, without consuming anything.
    fn split_on(&self, sep: &[u8]) -> Option<(IStr, IStr)> {
        let at = memchr::memmem::find(self.data, sep)?;
        let head = self.slice(0..at)?;
        let tail = self.slice(at.checked_add(sep.len())?..self.data.len())?;
        Some((head, tail))
    }

    /// Split once at the given byte or until the end of string, returning the
    /// new IStr associated with the split.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let line = *self;
            self.advance(self.data.len());
            return Some(line);
        };

        let line = self.slice(0..at)?;
        self.advance(at.checked_add(1)?);
        Some(line)
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    /// Span covering the remaining input.
    #[inline]
    fn span(&self) -> core::ops::Range<Size> {
        self.index..self.index.saturating_add(Size::new(self.data.len()))
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(Size::new(n));
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: core::ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Optionally try to consume input, returning `Ok(None)` if there is
    /// nothing to consume.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

impl FromInput for i64 {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedInteger
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((start, word)) = p.try_next_word() else {
            return Ok(None);
        };

        let Some(n) = from_utf8(word).ok().and_then(|s| s.parse().ok()) else {
            return Err(IStrError::new(
                start..p.index,
                ErrorKind::NotInteger(BStr::new(word)),
            ));
        };

        Ok(Some(n))
    }
}

/// Two fields separated by [SEPARATOR].
///
/// Everything after the first separator belongs to the second field, and each
/// field must hold exactly one value optionally surrounded by whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Columns<A, B>(pub A, pub B);

impl<A, B> FromInput for Columns<A, B>
where
    A: FromInput,
    B: FromInput,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::MissingSeparator
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((mut a, mut b)) = p.split_on(SEPARATOR) else {
            return Err(IStrError::new(p.span(), ErrorKind::MissingSeparator));
        };

        let left = a.next::<A>()?;
        a.finish()?;
        let right = b.next::<B>()?;
        b.finish()?;

        p.advance(p.data.len());
        Ok(Some(Self(left, right)))
    }
}
