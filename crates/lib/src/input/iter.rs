use std::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError};

/// Iterator over the lines of an [IStr], parsing each as `T`.
pub struct Iter<'a, T> {
    input: &'a mut IStr,
    _marker: PhantomData<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_line().transpose()
    }
}
