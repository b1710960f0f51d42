//! Distance and similarity between two columns of location ids.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use thiserror::Error;

use crate::input::{Columns, IStr, IStrError};

/// An aggregate does not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Overflow {
    #[error("total distance overflows a 64-bit integer")]
    Distance,
    #[error("similarity score overflows a 64-bit integer")]
    Similarity,
}

/// A single input line, one value for each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub left: i64,
    pub right: i64,
}

from_input!(|(Columns(left, right)): Columns<i64, i64>| -> Record {
    Ok(Record { left, right })
});

/// Both aggregates computed over a pair of columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    /// Sum of absolute differences between rank-matched values.
    pub distance: i64,
    /// Sum of left values weighted by their count in the right column.
    pub similarity: i64,
}

/// The two columns read from input.
///
/// Both columns always have the same length since each record contributes
/// exactly one value to each.
#[derive(Debug, Default, Clone)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Lists {
    /// Construct an empty pair of columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every remaining line of input as a [Record].
    ///
    /// Stops at the first malformed line, no partial result is returned.
    pub fn parse(input: &mut IStr) -> Result<Self, IStrError> {
        let mut lists = Self::new();

        for record in input.iter::<Record>() {
            lists.push(record?);
        }

        log::debug!("read {} records", lists.len());
        Ok(lists)
    }

    /// Add a record to the end of both columns.
    #[inline]
    pub fn push(&mut self, record: Record) {
        self.left.push(record.left);
        self.right.push(record.right);
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Test if no records have been read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// The left column, in its current order.
    #[inline]
    pub fn left(&self) -> &[i64] {
        &self.left
    }

    /// The right column, in its current order.
    #[inline]
    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Compute both aggregates.
    ///
    /// This sorts the columns in place.
    pub fn answer(&mut self) -> Result<Answer, Overflow> {
        let distance = distance(&mut self.left, &mut self.right)?;
        let similarity = similarity(&self.left, &self.right)?;
        log::info!("distance: {distance}, similarity: {similarity}");

        Ok(Answer {
            distance,
            similarity,
        })
    }
}

/// Sort both columns and sum the absolute differences of values at the same
/// rank.
///
/// Only the first `min(left.len(), right.len())` ranks are paired.
pub fn distance(left: &mut [i64], right: &mut [i64]) -> Result<i64, Overflow> {
    left.sort_unstable();
    right.sort_unstable();

    let sum = left
        .iter()
        .zip(right.iter())
        .try_fold(0i128, |sum, (&l, &r)| {
            sum.checked_add((i128::from(l) - i128::from(r)).abs())
        })
        .ok_or(Overflow::Distance)?;

    i64::try_from(sum).map_err(|_| Overflow::Distance)
}

/// Count the occurrences of each value.
pub fn frequencies(values: &[i64]) -> HashMap<i64, i64> {
    let mut counts = HashMap::with_capacity(values.len());

    for &value in values {
        *counts.entry(value).or_default() += 1;
    }

    counts
}

/// Sum every left value multiplied by the number of times it occurs in the
/// right column.
pub fn similarity(left: &[i64], right: &[i64]) -> Result<i64, Overflow> {
    let counts = frequencies(right);

    let sum = left
        .iter()
        .try_fold(0i128, |sum, &value| {
            let count = counts.get(&value).copied().unwrap_or_default();
            sum.checked_add(i128::from(value) * i128::from(count))
        })
        .ok_or(Overflow::Similarity)?;

    i64::try_from(sum).map_err(|_| Overflow::Similarity)
}
