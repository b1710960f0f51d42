use std::io::{self, Write};

use crate::lists::Answer;

/// Writes answers to an output stream.
pub struct Output<O> {
    out: O,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O) -> Self {
        Self { out }
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> O {
        self.out
    }

    /// Write the answer.
    ///
    /// The distance is followed by a newline and then the similarity, without
    /// a trailing newline.
    pub fn answer(&mut self, answer: &Answer) -> io::Result<()> {
        write!(self.out, "{}\n{}", answer.distance, answer.similarity)?;
        self.out.flush()
    }
}
