//! The uniform cursor type shared by [`List`] and [`Vector`].
//!
//! A cursor is a position in a container. Both containers hand out the same
//! [`Cursor`] (read-only) and [`CursorMut`] (with editing operations), so code
//! can walk, compare and do arithmetic on positions without knowing which
//! container they came from:
//!
//! ```
//! use polyseq::{Cursor, List, Value, Vector};
//!
//! fn middle(begin: Cursor<'_>, end: Cursor<'_>) -> Option<Value> {
//!     let len = end - begin;
//!     (begin + len / 2).current().copied()
//! }
//!
//! let list: List = (1u8..=5).map(Value::from).collect();
//! let vector: Vector = (1u8..=5).map(Value::from).collect();
//! assert_eq!(middle(list.begin(), list.end()), Some(Value::from(3u8)));
//! assert_eq!(middle(vector.begin(), vector.end()), Some(Value::from(3u8)));
//! ```
//!
//! # Cost model
//!
//! For a [`Vector`], every operation is *O*(1) index arithmetic.
//!
//! For a [`List`], moving by `n` takes *O*(|*n*|) time, equality is *O*(1),
//! and difference or ordering take *O*(*d*) time where *d* is the distance
//! between the two cursors: the chain is searched in both directions at once.
//!
//! # Errors
//!
//! Movement is bounded to `begin..=end`. Mixing a list cursor with a vector
//! cursor, or cursors of two different containers, is reported as a
//! [`CursorError`]. The named methods return `Result`/`Option`; the operator
//! forms (`+`, `-`, `+=`, `-=`, `[]`) panic instead.
//!
//! [`List`]: crate::List
//! [`Vector`]: crate::Vector

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use crate::{CursorError, List, Value, Vector};

pub(crate) use self::backend::Backend;
pub use self::iter::Iter;
pub use self::position::{Position, PositionKind};

mod backend;
mod iter;
pub(crate) mod position;

/// A read-only cursor over a [`List`] or a [`Vector`].
///
/// `Cursor` is `Copy`: copying a cursor copies its position, and the copies
/// move independently.
///
/// In a container with length *n* there are *n* + 1 valid positions,
/// `begin()` through `end()`. The `end()` position holds no element.
///
/// # Examples
///
/// ```
/// use polyseq::{List, Value};
///
/// let list: List = [5u8, 7, 3].map(Value::from).into_iter().collect();
/// let mut cursor = list.begin();
/// assert_eq!(cursor.current(), Some(&Value::from(5u8)));
///
/// let saved = cursor;
/// cursor += 2;
/// assert_eq!(cursor.current(), Some(&Value::from(3u8)));
/// assert_eq!(cursor - saved, 2);
/// assert!(saved < cursor);
///
/// cursor.move_next().unwrap();
/// assert_eq!(cursor, list.end());
/// assert!(cursor.move_next().is_err());
/// ```
///
/// [`List`]: crate::List
/// [`Vector`]: crate::Vector
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    backend: Backend<'a>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn array(vector: &'a Vector, slot: usize) -> Self {
        Self {
            backend: Backend::Array { vector, slot },
        }
    }

    pub(crate) fn list(list: &'a List, node: usize) -> Self {
        Self {
            backend: Backend::List { list, node },
        }
    }

    /// Takes a detached snapshot of the position, to be passed to container
    /// mutators.
    pub fn position(&self) -> Position {
        self.backend.position()
    }

    /// Returns the kind of container the cursor walks.
    pub fn kind(&self) -> PositionKind {
        self.position().kind()
    }

    /// Returns the element under the cursor, or `None` at `end()`.
    pub fn current(&self) -> Option<&'a Value> {
        self.backend.current()
    }

    /// Returns the element `offset` steps away from the cursor, or `None` if
    /// that position is `end()` or outside the container.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{Value, Vector};
    ///
    /// let vector: Vector = (10u8..15).map(Value::from).collect();
    /// let cursor = vector.begin() + 2;
    /// assert_eq!(cursor.at(-2), Some(&Value::from(10u8)));
    /// assert_eq!(cursor.at(2), Some(&Value::from(14u8)));
    /// assert_eq!(cursor.at(3), None);
    /// ```
    pub fn at(&self, offset: isize) -> Option<&'a Value> {
        self.backend.moved(offset).ok()?.current()
    }

    /// Returns `true` if the cursor is at `end()`.
    pub fn is_end(&self) -> bool {
        self.backend.is_end()
    }

    /// Moves the cursor one step forward.
    ///
    /// Fails, leaving the cursor in place, if it is already at `end()`.
    pub fn move_next(&mut self) -> Result<(), CursorError> {
        self.seek(1)
    }

    /// Moves the cursor one step backward.
    ///
    /// Fails, leaving the cursor in place, if it is already at `begin()`.
    pub fn move_prev(&mut self) -> Result<(), CursorError> {
        self.seek(-1)
    }

    /// Moves the cursor by `offset` steps, backward if `offset` is negative.
    ///
    /// Fails, leaving the cursor in place, if the target is outside
    /// `begin..=end`.
    ///
    /// # Complexity
    ///
    /// *O*(1) for a vector, *O*(|`offset`|) for a list.
    pub fn seek(&mut self, offset: isize) -> Result<(), CursorError> {
        self.backend = self.backend.moved(offset)?;
        Ok(())
    }

    /// Returns the number of steps from `origin` to `self`, negative if
    /// `self` comes first.
    ///
    /// # Errors
    ///
    /// [`CursorError::KindMismatch`] if one cursor walks a list and the other a
    /// vector, [`CursorError::ForeignContainer`] if they walk different
    /// containers.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{CursorError, List, Value, Vector};
    ///
    /// let list: List = (0u8..4).map(Value::from).collect();
    /// let vector: Vector = (0u8..4).map(Value::from).collect();
    /// assert_eq!(list.begin().offset_from(&list.end()), Ok(-4));
    /// assert_eq!(
    ///     list.begin().offset_from(&vector.begin()),
    ///     Err(CursorError::KindMismatch)
    /// );
    /// ```
    pub fn offset_from(&self, origin: &Cursor<'_>) -> Result<isize, CursorError> {
        self.backend.offset_from(&origin.backend)
    }

    /// Returns an iterator over the half-open range from `self` to `last`.
    ///
    /// # Errors
    ///
    /// Fails if the cursors cannot be compared (see [`Cursor::offset_from`]),
    /// or with [`CursorError::InvertedRange`] if `last` comes before `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{List, Value};
    ///
    /// let list: List = (0u8..6).map(Value::from).collect();
    /// let middle = (list.begin() + 1).range_to(list.end() - 2).unwrap();
    /// let values: Vec<Value> = middle.copied().collect();
    /// assert_eq!(values, [1u8, 2, 3].map(Value::from));
    /// ```
    pub fn range_to(self, last: Cursor<'a>) -> Result<Iter<'a>, CursorError> {
        Iter::between(self, last)
    }
}

impl<'a> Add<isize> for Cursor<'a> {
    type Output = Cursor<'a>;

    /// # Panics
    ///
    /// Panics if the result is outside `begin..=end`.
    fn add(mut self, offset: isize) -> Self::Output {
        self += offset;
        self
    }
}

impl<'a> Sub<isize> for Cursor<'a> {
    type Output = Cursor<'a>;

    /// # Panics
    ///
    /// Panics if the result is outside `begin..=end`.
    fn sub(mut self, offset: isize) -> Self::Output {
        self -= offset;
        self
    }
}

impl AddAssign<isize> for Cursor<'_> {
    fn add_assign(&mut self, offset: isize) {
        if let Err(err) = self.seek(offset) {
            panic!("{}", err);
        }
    }
}

impl SubAssign<isize> for Cursor<'_> {
    fn sub_assign(&mut self, offset: isize) {
        if let Err(err) = negate(offset).and_then(|offset| self.seek(offset)) {
            panic!("{}", err);
        }
    }
}

impl<'b> Sub<Cursor<'b>> for Cursor<'_> {
    type Output = isize;

    /// # Panics
    ///
    /// Panics if the cursors cannot be compared, see [`Cursor::offset_from`].
    fn sub(self, origin: Cursor<'b>) -> isize {
        match self.offset_from(&origin) {
            Ok(steps) => steps,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Index<isize> for Cursor<'_> {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the indexed position holds no element.
    fn index(&self, offset: isize) -> &Value {
        match self.at(offset) {
            Some(value) => value,
            None => panic!("no element {} steps away from the cursor", offset),
        }
    }
}

/// Cursors are equal when they point at the same position of the same
/// container.
impl<'b> PartialEq<Cursor<'b>> for Cursor<'_> {
    fn eq(&self, other: &Cursor<'b>) -> bool {
        self.backend.same_position(&other.backend)
    }
}

/// Only cursors of the same container can be ordered, so this is
/// `PartialOrd` but not `Ord`.
///
/// ```
/// use polyseq::{List, Value};
///
/// let list: List = (0u8..3).map(Value::from).collect();
/// let other = list.clone();
/// assert!(list.begin() < list.end());
/// assert_eq!(list.begin().partial_cmp(&other.end()), None);
/// ```
impl<'b> PartialOrd<Cursor<'b>> for Cursor<'_> {
    fn partial_cmp(&self, other: &Cursor<'b>) -> Option<Ordering> {
        self.backend.partial_cmp(&other.backend)
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("kind", &self.kind())
            .field("position", &self.backend.raw())
            .field("current", &self.current())
            .finish()
    }
}

pub(crate) enum BackendMut<'a> {
    Array { vector: &'a mut Vector, slot: usize },
    List { list: &'a mut List, node: usize },
}

impl<'a> BackendMut<'a> {
    fn as_backend(&self) -> Backend<'_> {
        match self {
            BackendMut::Array { vector, slot } => Backend::Array {
                vector,
                slot: *slot,
            },
            BackendMut::List { list, node } => Backend::List { list, node: *node },
        }
    }

    fn into_backend(self) -> Backend<'a> {
        match self {
            BackendMut::Array { vector, slot } => Backend::Array { vector, slot },
            BackendMut::List { list, node } => Backend::List { list, node },
        }
    }

    fn relocate(&mut self, raw: usize) {
        match self {
            BackendMut::Array { slot, .. } => *slot = raw,
            BackendMut::List { node, .. } => *node = raw,
        }
    }

    fn element_mut(&mut self, raw: usize) -> Option<&mut Value> {
        match self {
            BackendMut::Array { vector, .. } => vector.as_mut_slice().get_mut(raw),
            BackendMut::List { list, .. } => list.element_mut(raw),
        }
    }
}

/// A cursor over a [`List`] or a [`Vector`] with editing operations.
///
/// It walks exactly like a [`Cursor`], and in addition can write through the
/// position and insert or remove elements there. Since it holds a unique
/// borrow of its container it is not `Clone`; use [`CursorMut::as_cursor`]
/// for a read-only copy.
///
/// # Examples
///
/// ```
/// use polyseq::{Value, Vector};
///
/// let mut vector: Vector = (1u8..=4).map(Value::from).collect();
/// let mut cursor = vector.begin_mut();
/// while let Some(value) = cursor.current_mut() {
///     *value *= Value::from(10u8);
///     cursor.move_next().unwrap();
/// }
/// assert_eq!(vector.as_slice(), [10u8, 20, 30, 40].map(Value::from));
/// ```
///
/// [`List`]: crate::List
/// [`Vector`]: crate::Vector
pub struct CursorMut<'a> {
    backend: BackendMut<'a>,
}

impl<'a> CursorMut<'a> {
    pub(crate) fn array(vector: &'a mut Vector, slot: usize) -> Self {
        Self {
            backend: BackendMut::Array { vector, slot },
        }
    }

    pub(crate) fn list(list: &'a mut List, node: usize) -> Self {
        Self {
            backend: BackendMut::List { list, node },
        }
    }

    /// Re-borrows the mutable cursor as a short-lived read-only one.
    pub fn as_cursor(&self) -> Cursor<'_> {
        Cursor {
            backend: self.backend.as_backend(),
        }
    }

    /// Converts the mutable cursor into a read-only one.
    pub fn into_cursor(self) -> Cursor<'a> {
        Cursor {
            backend: self.backend.into_backend(),
        }
    }

    /// See [`Cursor::position`].
    pub fn position(&self) -> Position {
        self.as_cursor().position()
    }

    /// Returns the element under the cursor, or `None` at `end()`.
    pub fn current(&self) -> Option<&Value> {
        self.as_cursor().current()
    }

    /// Returns a mutable reference to the element under the cursor, or
    /// `None` at `end()`.
    pub fn current_mut(&mut self) -> Option<&mut Value> {
        let raw = self.as_cursor().backend.raw();
        self.backend.element_mut(raw)
    }

    /// Like [`Cursor::at`], with a mutable reference.
    pub fn at_mut(&mut self, offset: isize) -> Option<&mut Value> {
        let raw = self.as_cursor().backend.moved(offset).ok()?.raw();
        self.backend.element_mut(raw)
    }

    /// Returns `true` if the cursor is at `end()`.
    pub fn is_end(&self) -> bool {
        self.as_cursor().is_end()
    }

    /// See [`Cursor::move_next`].
    pub fn move_next(&mut self) -> Result<(), CursorError> {
        self.seek(1)
    }

    /// See [`Cursor::move_prev`].
    pub fn move_prev(&mut self) -> Result<(), CursorError> {
        self.seek(-1)
    }

    /// See [`Cursor::seek`].
    pub fn seek(&mut self, offset: isize) -> Result<(), CursorError> {
        let raw = self.as_cursor().backend.moved(offset)?.raw();
        self.backend.relocate(raw);
        Ok(())
    }

    /// See [`Cursor::offset_from`].
    pub fn offset_from(&self, origin: &Cursor<'_>) -> Result<isize, CursorError> {
        self.as_cursor().offset_from(origin)
    }

    /// Inserts `value` before the cursor. The cursor keeps pointing at the
    /// same element (or at `end()`).
    ///
    /// # Complexity
    ///
    /// *O*(1) for a list, *O*(*n*) for a vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{List, Value};
    ///
    /// let mut list: List = [1u8, 3].map(Value::from).into_iter().collect();
    /// let mut cursor = list.begin_mut();
    /// cursor.move_next().unwrap();
    /// cursor.insert(Value::from(2u8));
    /// assert_eq!(cursor.current(), Some(&Value::from(3u8)));
    /// let values: Vec<Value> = list.iter().copied().collect();
    /// assert_eq!(values, [1u8, 2, 3].map(Value::from));
    /// ```
    pub fn insert(&mut self, value: Value) {
        match &mut self.backend {
            BackendMut::Array { vector, slot } => {
                vector.open_gap(*slot, 1).fill(value);
                *slot += 1;
            }
            BackendMut::List { list, node } => {
                list.splice_before(*node, std::iter::once(value));
            }
        }
    }

    /// Removes the element under the cursor and returns it, or returns `None`
    /// at `end()`. The cursor moves to the following element.
    ///
    /// # Complexity
    ///
    /// *O*(1) for a list, *O*(*n*) for a vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{Value, Vector};
    ///
    /// let mut vector: Vector = (0u8..5).map(Value::from).collect();
    /// let mut cursor = vector.cursor_mut(1);
    /// assert_eq!(cursor.remove(), Some(Value::from(1u8)));
    /// assert_eq!(cursor.remove(), Some(Value::from(2u8)));
    /// assert_eq!(cursor.current(), Some(&Value::from(3u8)));
    /// assert_eq!(vector.as_slice(), [0u8, 3, 4].map(Value::from));
    /// ```
    pub fn remove(&mut self) -> Option<Value> {
        match &mut self.backend {
            BackendMut::Array { vector, slot } => {
                let value = vector.get(*slot).copied()?;
                vector.close_gap(*slot, *slot + 1);
                Some(value)
            }
            BackendMut::List { list, node } => {
                let next = list.next_node(*node)?;
                let value = list.detach_node(*node);
                *node = next;
                Some(value)
            }
        }
    }
}

impl AddAssign<isize> for CursorMut<'_> {
    /// # Panics
    ///
    /// Panics if the result is outside `begin..=end`.
    fn add_assign(&mut self, offset: isize) {
        if let Err(err) = self.seek(offset) {
            panic!("{}", err);
        }
    }
}

impl SubAssign<isize> for CursorMut<'_> {
    /// # Panics
    ///
    /// Panics if the result is outside `begin..=end`.
    fn sub_assign(&mut self, offset: isize) {
        if let Err(err) = negate(offset).and_then(|offset| self.seek(offset)) {
            panic!("{}", err);
        }
    }
}

impl Index<isize> for CursorMut<'_> {
    type Output = Value;

    fn index(&self, offset: isize) -> &Value {
        match self.as_cursor().at(offset) {
            Some(value) => value,
            None => panic!("no element {} steps away from the cursor", offset),
        }
    }
}

impl IndexMut<isize> for CursorMut<'_> {
    fn index_mut(&mut self, offset: isize) -> &mut Value {
        match self.at_mut(offset) {
            Some(value) => value,
            None => panic!("no element {} steps away from the cursor", offset),
        }
    }
}

impl fmt::Debug for CursorMut<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cursor = self.as_cursor();
        f.debug_struct("CursorMut")
            .field("kind", &cursor.kind())
            .field("position", &cursor.backend.raw())
            .field("current", &cursor.current())
            .finish()
    }
}

fn negate(offset: isize) -> Result<isize, CursorError> {
    offset
        .checked_neg()
        .ok_or(CursorError::OutOfBounds { offset })
}

#[cfg(test)]
mod tests {
    use crate::{CursorError, List, PositionKind, Value, Vector};

    fn val(x: u8) -> Value {
        Value::from(x)
    }

    fn list_of(values: &[u8]) -> List {
        values.iter().map(|&x| val(x)).collect()
    }

    fn vector_of(values: &[u8]) -> Vector {
        values.iter().map(|&x| val(x)).collect()
    }

    #[test]
    fn cursor_arithmetic_agrees_across_kinds() {
        let list = list_of(&[1, 2, 3, 4, 5]);
        let vector = vector_of(&[1, 2, 3, 4, 5]);
        let cursors = [
            (list.begin(), list.end()),
            (vector.begin(), vector.end()),
        ];
        for (begin, end) in cursors {
            assert_eq!(end - begin, 5);
            assert_eq!(begin - end, -5);
            assert_eq!((begin + 2).current(), Some(&val(3)));
            assert_eq!((end - 1).current(), Some(&val(5)));
            assert_eq!(begin[4], val(5));
            assert_eq!((end - 2)[-1], val(3));
            assert!(begin < end);
            assert!(begin <= begin);
            assert!(end > begin + 4);
            assert!(end >= end);
            assert_ne!(begin, end);
            assert_eq!(begin + 5, end);
            assert!((begin + 5).is_end());
        }
    }

    #[test]
    fn cursor_moves_are_bounded() {
        let list = list_of(&[1, 2]);
        let vector = vector_of(&[1, 2]);
        for (begin, end) in [(list.begin(), list.end()), (vector.begin(), vector.end())] {
            let mut cursor = begin;
            assert_eq!(
                cursor.move_prev(),
                Err(CursorError::OutOfBounds { offset: -1 })
            );
            assert_eq!(cursor, begin);
            assert_eq!(cursor.seek(3), Err(CursorError::OutOfBounds { offset: 3 }));
            assert_eq!(cursor, begin);
            assert!(cursor.seek(2).is_ok());
            assert_eq!(cursor, end);
            assert!(cursor.move_next().is_err());
            assert_eq!(cursor.current(), None);
            assert_eq!(cursor.at(-2), Some(&val(1)));
            assert_eq!(cursor.at(1), None);
        }
    }

    #[test]
    #[should_panic(expected = "leaves the `begin..=end` range")]
    fn cursor_add_past_end_panics() {
        let vector = vector_of(&[1]);
        let _ = vector.begin() + 2;
    }

    #[test]
    #[should_panic(expected = "leaves the `begin..=end` range")]
    fn cursor_sub_before_begin_panics() {
        let list = list_of(&[1]);
        let _ = list.end() - 2;
    }

    #[test]
    fn cursor_mixed_kinds_are_rejected() {
        let list = list_of(&[1, 2]);
        let vector = vector_of(&[1, 2]);
        assert_eq!(list.begin().kind(), PositionKind::List);
        assert_eq!(vector.begin().kind(), PositionKind::Array);
        assert_eq!(
            list.begin().offset_from(&vector.begin()),
            Err(CursorError::KindMismatch)
        );
        assert_ne!(list.begin(), vector.begin());
        assert_eq!(list.begin().partial_cmp(&vector.begin()), None);
    }

    #[test]
    fn cursor_foreign_containers_are_rejected() {
        let a = list_of(&[1, 2]);
        let b = a.clone();
        assert_eq!(
            a.end().offset_from(&b.begin()),
            Err(CursorError::ForeignContainer)
        );
        assert_ne!(a.begin(), b.begin());
        assert!(!(a.begin() < b.end()));
        assert!(!(a.begin() > b.end()));

        let x = vector_of(&[]);
        let y = vector_of(&[]);
        assert_ne!(x.begin(), y.begin());
        assert_eq!(
            x.begin().offset_from(&y.end()),
            Err(CursorError::ForeignContainer)
        );
    }

    #[test]
    #[should_panic(expected = "cursors belong to different containers")]
    fn cursor_sub_foreign_panics() {
        let a = vector_of(&[1, 2]);
        let b = a.clone();
        let _ = a.end() - b.begin();
    }

    #[test]
    fn cursor_list_ordering_searches_both_ways() {
        let list = list_of(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let begin = list.begin();
        let end = list.end();
        for i in 0..=8 {
            for j in 0..=8 {
                let a = begin + i;
                let b = begin + j;
                assert_eq!(a - b, i - j);
                assert_eq!(a.partial_cmp(&b), Some(i.cmp(&j)));
            }
        }
        assert_eq!(end - begin, 8);
    }

    #[test]
    fn cursor_copies_are_independent() {
        let list = list_of(&[1, 2, 3]);
        let mut a = list.begin();
        let b = a;
        a += 2;
        assert_eq!(b.current(), Some(&val(1)));
        assert_eq!(a.current(), Some(&val(3)));
    }

    #[test]
    fn cursor_mut_edits_through_position() {
        let mut list = list_of(&[1, 2, 3]);
        {
            let mut cursor = list.begin_mut();
            cursor += 1;
            cursor[0] = val(20);
            cursor[1] = val(30);
            assert_eq!(cursor[-1], val(1));
            assert_eq!(cursor.remove(), Some(val(20)));
            assert_eq!(cursor.current(), Some(&val(30)));
            cursor.insert(val(25));
            assert_eq!(cursor.current(), Some(&val(30)));
            cursor.move_next().unwrap();
            assert!(cursor.is_end());
            assert_eq!(cursor.remove(), None);
            cursor.insert(val(40));
            assert!(cursor.is_end());
        }
        assert_eq!(list, list_of(&[1, 25, 30, 40]));

        let mut vector = vector_of(&[1, 2, 3]);
        {
            let mut cursor = vector.end_mut();
            cursor -= 1;
            assert_eq!(cursor.current(), Some(&val(3)));
            cursor.insert(val(9));
            assert_eq!(cursor.current(), Some(&val(3)));
            assert_eq!(cursor.as_cursor().at(-1), Some(&val(9)));
            *cursor.at_mut(-3).unwrap() = val(0);
            let read = cursor.into_cursor();
            assert_eq!(read.current(), Some(&val(3)));
        }
        assert_eq!(vector.as_slice(), &[val(0), val(2), val(9), val(3)]);
    }

    #[test]
    fn cursor_range_iteration() {
        let list = list_of(&[0, 1, 2, 3, 4]);
        let forward: Vec<Value> = (list.begin() + 1)
            .range_to(list.end() - 1)
            .unwrap()
            .copied()
            .collect();
        assert_eq!(forward, vec![val(1), val(2), val(3)]);
        assert_eq!(
            list.end().range_to(list.begin()).map(|iter| iter.len()),
            Err(CursorError::InvertedRange)
        );
        let backward: Vec<Value> = list.iter().rev().copied().collect();
        assert_eq!(backward, vec![val(4), val(3), val(2), val(1), val(0)]);
    }
}
