use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::cursor::position::ContainerId;
use crate::{Cursor, CursorError, CursorMut, Iter, Position, PositionKind, Value};

mod algorithms;

/// Factor by which a full `Vector` multiplies its capacity when it grows.
pub const GROWTH_FACTOR: usize = 3;

/// An owning iterator over the elements of a `Vector`.
pub type IntoIter = std::vec::IntoIter<Value>;

/// The `Vector` is a contiguous, growable array with an explicit capacity.
///
/// Capacity only changes at well-defined points: when an insertion needs more
/// room than is left (the capacity becomes
/// `max(capacity + needed, capacity * GROWTH_FACTOR)`), on [`reserve`] and on
/// [`shrink_to_fit`]. Between those points the buffer never moves, so
/// positions and slice pointers taken earlier stay valid.
///
/// ```text
///   slots
///  ┌───┬───┬───┬───┬───┬ ─ ─ ─ ─ ─ ─ ┐
///  │ 0 │ 1 │ 2 │ 3 │ 4 │   spare       capacity = 9
///  └───┴───┴───┴───┴───┴ ─ ─ ─ ─ ─ ─ ┘
///    ↑                   ↑
///  begin()             end()
/// ```
///
/// Insertion and erasure shift the elements after the position, so they take
/// *O*(*n*) time, including at the front.
///
/// [`reserve`]: Vector::reserve
/// [`shrink_to_fit`]: Vector::shrink_to_fit
pub struct Vector {
    slots: Vec<Value>,
    /// The logical capacity. The buffer of `slots` is at least this large.
    capacity: usize,
    id: ContainerId,
}

// private methods
impl Vector {
    pub(crate) fn id(&self) -> ContainerId {
        self.id
    }

    /// Moves the elements into a buffer of exactly `capacity` slots.
    fn reallocate(&mut self, capacity: usize, reason: &'static str) {
        debug_assert!(capacity >= self.slots.len());
        debug!(old = self.capacity, new = capacity, reason, "reallocating vector");
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(self.slots.drain(..));
        self.slots = slots;
        self.capacity = capacity;
    }

    /// Makes room for `needed` more elements, following the growth policy.
    fn grow_for(&mut self, needed: usize) {
        if self.slots.len() + needed <= self.capacity {
            return;
        }
        let capacity = (self.capacity + needed).max(self.capacity * GROWTH_FACTOR);
        self.reallocate(capacity, "grow");
    }

    /// Opens `count` slots before `slot` and returns them.
    ///
    /// The new slots are created at the tail, then the elements of
    /// `slot..len` are shifted up by `count`. `slot` must be `<= len`.
    pub(crate) fn open_gap(&mut self, slot: usize, count: usize) -> &mut [Value] {
        let len = self.slots.len();
        debug_assert!(slot <= len);
        self.grow_for(count);
        self.slots.resize(len + count, Value::default());
        self.slots.copy_within(slot..len, slot + count);
        &mut self.slots[slot..slot + count]
    }

    /// Removes the slots `first..last`, shifting the tail down.
    ///
    /// `first..last` must be a valid range of slots.
    pub(crate) fn close_gap(&mut self, first: usize, last: usize) {
        let len = self.slots.len();
        debug_assert!(first <= last && last <= len);
        if first == 0 && last == len {
            self.clear();
            return;
        }
        self.slots.copy_within(last..len, first);
        self.slots.truncate(len - (last - first));
    }

    /// Resolves a detached position to a slot of this vector.
    fn slot_of(&self, pos: Position) -> Result<usize, CursorError> {
        if pos.kind != PositionKind::Array {
            return Err(CursorError::KindMismatch);
        }
        if pos.owner != self.id {
            return Err(CursorError::ForeignContainer);
        }
        if pos.raw > self.slots.len() {
            return Err(CursorError::Dangling);
        }
        Ok(pos.raw)
    }
}

impl Vector {
    /// Creates an empty `Vector` with no capacity.
    ///
    /// # Examples
    /// ```
    /// use polyseq::Vector;
    /// let vector = Vector::new();
    /// assert!(vector.is_empty());
    /// assert_eq!(vector.capacity(), 0);
    /// assert_eq!(vector.begin(), vector.end());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty `Vector` with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            id: ContainerId::next(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the `Vector` holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of elements the `Vector` can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reallocates to exactly `capacity` slots if that is more than the
    /// current capacity. Does nothing otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::Vector;
    ///
    /// let mut vector = Vector::new();
    /// vector.reserve(10);
    /// assert_eq!(vector.capacity(), 10);
    /// vector.reserve(4);
    /// assert_eq!(vector.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity {
            self.reallocate(capacity, "reserve");
        }
    }

    /// Reallocates to exactly `len()` slots if there is spare capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{Value, Vector};
    ///
    /// let mut vector: Vector = (0u8..4).map(Value::from).collect();
    /// assert_eq!(vector.capacity(), 9);
    /// vector.shrink_to_fit();
    /// assert_eq!(vector.capacity(), 4);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.capacity > self.slots.len() {
            self.reallocate(self.slots.len(), "shrink");
        }
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.slots
    }

    /// Extracts a mutable slice of the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.slots
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.slots.get_mut(index)
    }

    /// Provides a reference to the first element, or `None` if empty.
    pub fn front(&self) -> Option<&Value> {
        self.slots.first()
    }

    /// Provides a mutable reference to the first element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut Value> {
        self.slots.first_mut()
    }

    /// Provides a reference to the last element, or `None` if empty.
    pub fn back(&self) -> Option<&Value> {
        self.slots.last()
    }

    /// Provides a mutable reference to the last element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut Value> {
        self.slots.last_mut()
    }

    /// Appends an element, growing the capacity if the vector is full.
    pub fn push_back(&mut self, value: Value) {
        let len = self.slots.len();
        self.open_gap(len, 1).fill(value);
    }

    /// Prepends an element.
    ///
    /// # Complexity
    ///
    /// Every element is shifted, so this takes *O*(*n*) time.
    pub fn push_front(&mut self, value: Value) {
        self.open_gap(0, 1).fill(value);
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<Value> {
        let value = *self.slots.last()?;
        let len = self.slots.len();
        self.close_gap(len - 1, len);
        Some(value)
    }

    /// Removes the first element and returns it, or `None` if empty.
    ///
    /// # Complexity
    ///
    /// Every element is shifted, so this takes *O*(*n*) time.
    pub fn pop_front(&mut self) -> Option<Value> {
        let value = *self.slots.first()?;
        self.close_gap(0, 1);
        Some(value)
    }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Provides a cursor at the first slot, or at `end()` if empty.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::array(self, 0)
    }

    /// Provides a cursor one past the last element.
    pub fn end(&self) -> Cursor<'_> {
        Cursor::array(self, self.slots.len())
    }

    /// Provides a cursor with editing operations at the first slot.
    pub fn begin_mut(&mut self) -> CursorMut<'_> {
        CursorMut::array(self, 0)
    }

    /// Provides a cursor with editing operations one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_> {
        let len = self.slots.len();
        CursorMut::array(self, len)
    }

    /// Provides a cursor at the given index; `at == len` gives `end()`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    pub fn cursor(&self, at: usize) -> Cursor<'_> {
        assert!(at <= self.len(), "Cannot create cursor at a nonexistent index");
        Cursor::array(self, at)
    }

    /// Provides a cursor with editing operations at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_> {
        assert!(at <= self.len(), "Cannot create cursor at a nonexistent index");
        CursorMut::array(self, at)
    }

    /// Provides a forward iterator.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.begin(), self.end(), self.len())
    }

    /// Inserts `count` copies of `value` before `pos`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + `count`) time.
    ///
    /// # Errors
    ///
    /// Fails, leaving the vector untouched, if `pos` is not a position of this
    /// vector or lies past `end()`. `count == 0` is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{Value, Vector};
    ///
    /// let mut vector: Vector = [5u8, 7, 3].map(Value::from).into_iter().collect();
    /// vector.insert((vector.begin() + 1).position(), 2, Value::from(9u8)).unwrap();
    /// assert_eq!(vector.as_slice(), [5u8, 9, 9, 7, 3].map(Value::from));
    /// ```
    pub fn insert(&mut self, pos: Position, count: usize, value: Value) -> Result<(), CursorError> {
        let slot = self.slot_of(pos)?;
        if count > 0 {
            self.open_gap(slot, count).fill(value);
        }
        Ok(())
    }

    /// Inserts copies of the elements in `first..last` before `pos`.
    ///
    /// The source range is copied into a temporary buffer before anything is
    /// moved. It may come from either kind of container.
    ///
    /// # Errors
    ///
    /// Fails, leaving the vector untouched, if `pos` is not a position of this
    /// vector or `first..last` is not a valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{List, Value, Vector};
    ///
    /// let source: List = (1u8..=3).map(Value::from).collect();
    /// let mut vector: Vector = [0u8, 9].map(Value::from).into_iter().collect();
    /// let pos = vector.cursor(1).position();
    /// vector.insert_range(pos, source.begin(), source.end()).unwrap();
    /// assert_eq!(vector.as_slice(), [0u8, 1, 2, 3, 9].map(Value::from));
    /// ```
    pub fn insert_range(
        &mut self,
        pos: Position,
        first: Cursor<'_>,
        last: Cursor<'_>,
    ) -> Result<(), CursorError> {
        let slot = self.slot_of(pos)?;
        let staged: Vec<Value> = first.range_to(last)?.copied().collect();
        self.insert_staged(slot, &staged);
        Ok(())
    }

    /// Inserts the elements of `values` before `pos`, in order.
    ///
    /// A range of this same vector can be inserted this way, since `values`
    /// is collected before the vector is touched:
    ///
    /// ```
    /// use polyseq::{Value, Vector};
    ///
    /// let mut vector: Vector = (0u8..3).map(Value::from).collect();
    /// let copy = vector.as_slice()[1..].to_vec();
    /// vector.insert_iter(vector.begin().position(), copy).unwrap();
    /// assert_eq!(vector.as_slice(), [1u8, 2, 0, 1, 2].map(Value::from));
    /// ```
    ///
    /// # Errors
    ///
    /// Fails, leaving the vector untouched, if `pos` is not a position of this
    /// vector.
    pub fn insert_iter<I>(&mut self, pos: Position, values: I) -> Result<(), CursorError>
    where
        I: IntoIterator<Item = Value>,
    {
        let slot = self.slot_of(pos)?;
        let staged: Vec<Value> = values.into_iter().collect();
        self.insert_staged(slot, &staged);
        Ok(())
    }

    fn insert_staged(&mut self, slot: usize, staged: &[Value]) {
        if !staged.is_empty() {
            self.open_gap(slot, staged.len()).copy_from_slice(staged);
        }
    }

    /// Removes the element at `pos` and returns it, or returns `None` if `pos`
    /// is `end()` or not a position of this vector.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn erase(&mut self, pos: Position) -> Option<Value> {
        let slot = self.slot_of(pos).ok()?;
        let value = *self.slots.get(slot)?;
        self.close_gap(slot, slot + 1);
        Some(value)
    }

    /// Removes the elements in `first..last`. Erasing `begin()..end()` is a
    /// [`clear`](Vector::clear).
    ///
    /// # Errors
    ///
    /// Fails, leaving the vector untouched, if either position is not a
    /// position of this vector, or with [`CursorError::InvertedRange`] if
    /// `last` comes before `first`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{Value, Vector};
    ///
    /// let mut vector: Vector = (0u8..6).map(Value::from).collect();
    /// let (first, last) = (vector.cursor(1).position(), vector.cursor(4).position());
    /// vector.erase_range(first, last).unwrap();
    /// assert_eq!(vector.as_slice(), [0u8, 4, 5].map(Value::from));
    /// ```
    pub fn erase_range(&mut self, first: Position, last: Position) -> Result<(), CursorError> {
        let first = self.slot_of(first)?;
        let last = self.slot_of(last)?;
        if last < first {
            return Err(CursorError::InvertedRange);
        }
        if first < last {
            self.close_gap(first, last);
        }
        Ok(())
    }
}

impl Index<usize> for Vector {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &Value {
        &self.slots[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.slots[index]
    }
}

impl Debug for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Vector {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Value> for Vector {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut vector = Vector::new();
        vector.extend(iter);
        vector
    }
}

impl Extend<Value> for Vector {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a> Extend<&'a Value> for Vector {
    fn extend<I: IntoIterator<Item = &'a Value>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
