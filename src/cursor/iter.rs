use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::{CursorError, Value};

/// An iterator over a half-open range `front..back` of cursors.
///
/// This is what `iter()` returns for both containers, and what
/// [`Cursor::range_to`] builds for arbitrary ranges.
#[derive(Clone)]
pub struct Iter<'a> {
    front: Cursor<'a>,
    back: Cursor<'a>,
    len: usize,
}

impl<'a> Iter<'a> {
    /// It is the caller's duty to make sure `len == back - front`.
    pub(crate) fn new(front: Cursor<'a>, back: Cursor<'a>, len: usize) -> Self {
        Self { front, back, len }
    }

    pub(crate) fn between(front: Cursor<'a>, back: Cursor<'a>) -> Result<Self, CursorError> {
        let len = back.offset_from(&front)?;
        let len = usize::try_from(len).map_err(|_| CursorError::InvertedRange)?;
        Ok(Self::new(front, back, len))
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    /// Return `*front` and advance `front`, or return `None` if `front..back`
    /// is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.front.current()?;
        self.front.move_next().ok()?;
        self.len -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    /// Step `back` backward and return `*back`, or return `None` if
    /// `front..back` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.back.move_prev().ok()?;
        self.len -= 1;
        self.back.current()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
