use core::ops::Range;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::cli::error::LineCol;
use crate::input::{IStr, NL};

/// An absolute byte offset into the loaded input.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column at the start of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let span = Size::usize_range(span);

    let Some(before) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, before).count();

    let start = match memchr::memrchr(NL, before) {
        Some(n) => span.start - n - 1,
        None => span.start,
    };

    LineCol::new(line, start)
}

/// Load the input at the given path.
///
/// The loaded data is leaked since it's needed for the remainder of the
/// process and memory for it will be freed once the process exits *anyway*.
/// This lets [IStr] stay `Copy` instead of carrying a lifetime around.
pub fn input<P>(path: P) -> anyhow::Result<IStr>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    return inner(path).with_context(|| path.display().to_string());

    #[inline]
    fn inner(path: &Path) -> anyhow::Result<IStr> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        let data: &'static [u8] = Vec::leak(buf);
        log::debug!("loaded {} bytes", data.len());
        Ok(IStr::new(data, Size::ZERO))
    }
}
