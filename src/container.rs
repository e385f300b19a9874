//! Capability traits shared by the containers.
//!
//! The traits form a ladder; each level adds operations to the one below:
//!
//! | trait                     | adds                                 | [`List`] | [`Vector`] |
//! |---------------------------|--------------------------------------|:--------:|:----------:|
//! | [`Container`]             | `len`, `is_empty`                    | ✓        | ✓          |
//! | [`SequenceContainer`]     | cursors, positional edits, `clear`   | ✓        | ✓          |
//! | [`OrderedContainer`]      | `front`/`back`, push and pop at ends | ✓        | ✓          |
//! | [`RandomAccessContainer`] | indexing, capacity management        |          | ✓          |
//!
//! Everything is dispatched statically; write generic code against the lowest
//! level it needs:
//!
//! ```
//! use polyseq::{List, OrderedContainer, Vector};
//!
//! fn fill<C: OrderedContainer + Default>(values: &[u8]) -> C {
//!     let mut container = C::default();
//!     for &value in values {
//!         container.push_back(value.into());
//!     }
//!     container
//! }
//!
//! let list: List = fill(&[1, 2, 3]);
//! let vector: Vector = fill(&[1, 2, 3]);
//! assert_eq!(list.back(), vector.back());
//! ```
//!
//! [`List`]: crate::List
//! [`Vector`]: crate::Vector

use std::ops::{Index, IndexMut};

use crate::{Cursor, CursorError, CursorMut, List, Position, Value, Vector};

/// A container of [`Value`]s with a known length.
pub trait Container {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container whose elements form a sequence walked by cursors, with
/// insertion and erasure at any position.
pub trait SequenceContainer: Container {
    /// A cursor at the first element, or at `end()` if empty.
    fn begin(&self) -> Cursor<'_>;

    /// A cursor one past the last element.
    fn end(&self) -> Cursor<'_>;

    /// A cursor with editing operations at the first element.
    fn begin_mut(&mut self) -> CursorMut<'_>;

    /// A cursor with editing operations one past the last element.
    fn end_mut(&mut self) -> CursorMut<'_>;

    /// Removes every element.
    fn clear(&mut self);

    /// Inserts `count` copies of `value` before `pos`.
    fn insert(&mut self, pos: Position, count: usize, value: Value) -> Result<(), CursorError>;

    /// Inserts copies of `first..last` before `pos`.
    fn insert_range(
        &mut self,
        pos: Position,
        first: Cursor<'_>,
        last: Cursor<'_>,
    ) -> Result<(), CursorError>;

    /// Removes and returns the element at `pos`; `None` at `end()`.
    fn erase(&mut self, pos: Position) -> Option<Value>;

    /// Removes the elements of `first..last`.
    fn erase_range(&mut self, first: Position, last: Position) -> Result<(), CursorError>;
}

/// A sequence with access to both of its ends.
pub trait OrderedContainer: SequenceContainer {
    fn front(&self) -> Option<&Value>;

    fn front_mut(&mut self) -> Option<&mut Value>;

    fn back(&self) -> Option<&Value>;

    fn back_mut(&mut self) -> Option<&mut Value>;

    fn push_front(&mut self, value: Value);

    fn push_back(&mut self, value: Value);

    fn pop_front(&mut self) -> Option<Value>;

    fn pop_back(&mut self) -> Option<Value>;
}

/// A sequence stored contiguously, indexable in *O*(1) time.
pub trait RandomAccessContainer:
    OrderedContainer + Index<usize, Output = Value> + IndexMut<usize>
{
    fn get(&self, index: usize) -> Option<&Value>;

    fn get_mut(&mut self, index: usize) -> Option<&mut Value>;

    /// Number of elements storable without reallocating.
    fn capacity(&self) -> usize;

    fn reserve(&mut self, capacity: usize);

    fn shrink_to_fit(&mut self);
}

macro_rules! impl_sequence_container {
    ($($container:ident),*) => {$(
        impl Container for $container {
            fn len(&self) -> usize {
                $container::len(self)
            }

            fn is_empty(&self) -> bool {
                $container::is_empty(self)
            }
        }

        impl SequenceContainer for $container {
            fn begin(&self) -> Cursor<'_> {
                $container::begin(self)
            }

            fn end(&self) -> Cursor<'_> {
                $container::end(self)
            }

            fn begin_mut(&mut self) -> CursorMut<'_> {
                $container::begin_mut(self)
            }

            fn end_mut(&mut self) -> CursorMut<'_> {
                $container::end_mut(self)
            }

            fn clear(&mut self) {
                $container::clear(self)
            }

            fn insert(
                &mut self,
                pos: Position,
                count: usize,
                value: Value,
            ) -> Result<(), CursorError> {
                $container::insert(self, pos, count, value)
            }

            fn insert_range(
                &mut self,
                pos: Position,
                first: Cursor<'_>,
                last: Cursor<'_>,
            ) -> Result<(), CursorError> {
                $container::insert_range(self, pos, first, last)
            }

            fn erase(&mut self, pos: Position) -> Option<Value> {
                $container::erase(self, pos)
            }

            fn erase_range(&mut self, first: Position, last: Position) -> Result<(), CursorError> {
                $container::erase_range(self, first, last)
            }
        }

        impl OrderedContainer for $container {
            fn front(&self) -> Option<&Value> {
                $container::front(self)
            }

            fn front_mut(&mut self) -> Option<&mut Value> {
                $container::front_mut(self)
            }

            fn back(&self) -> Option<&Value> {
                $container::back(self)
            }

            fn back_mut(&mut self) -> Option<&mut Value> {
                $container::back_mut(self)
            }

            fn push_front(&mut self, value: Value) {
                $container::push_front(self, value)
            }

            fn push_back(&mut self, value: Value) {
                $container::push_back(self, value)
            }

            fn pop_front(&mut self) -> Option<Value> {
                $container::pop_front(self)
            }

            fn pop_back(&mut self) -> Option<Value> {
                $container::pop_back(self)
            }
        }
    )*};
}

impl_sequence_container!(List, Vector);

impl RandomAccessContainer for Vector {
    fn get(&self, index: usize) -> Option<&Value> {
        Vector::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        Vector::get_mut(self, index)
    }

    fn capacity(&self) -> usize {
        Vector::capacity(self)
    }

    fn reserve(&mut self, capacity: usize) {
        Vector::reserve(self, capacity)
    }

    fn shrink_to_fit(&mut self) {
        Vector::shrink_to_fit(self)
    }
}


#[cfg(test)]
mod differential {
    use proptest::prelude::*;
    use proptest::sample::Index;

    use super::OrderedContainer;
    use crate::{List, Value, Vector};

    #[derive(Clone, Debug)]
    enum Op {
        PushBack(u8),
        PushFront(u8),
        PopBack,
        PopFront,
        Insert { at: Index, count: usize, value: u8 },
        InsertRange { at: Index, values: Vec<u8> },
        Erase { at: Index },
        EraseRange { first: Index, last: Index },
        Assign { at: Index, value: u8 },
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<u8>().prop_map(Op::PushBack),
            2 => any::<u8>().prop_map(Op::PushFront),
            2 => Just(Op::PopBack),
            2 => Just(Op::PopFront),
            2 => (any::<Index>(), 0usize..4, any::<u8>())
                .prop_map(|(at, count, value)| Op::Insert { at, count, value }),
            2 => (any::<Index>(), prop::collection::vec(any::<u8>(), 0..5))
                .prop_map(|(at, values)| Op::InsertRange { at, values }),
            2 => any::<Index>().prop_map(|at| Op::Erase { at }),
            1 => (any::<Index>(), any::<Index>())
                .prop_map(|(first, last)| Op::EraseRange { first, last }),
            2 => (any::<Index>(), any::<u8>()).prop_map(|(at, value)| Op::Assign { at, value }),
            1 => Just(Op::Clear),
        ]
    }

    /// Offset of the cursor `at` steps from `begin()`.
    fn offset(at: usize) -> isize {
        at as isize
    }

    fn apply<C: OrderedContainer>(container: &mut C, reference: &mut Vec<Value>, op: &Op) {
        let len = reference.len();
        match op {
            Op::PushBack(value) => {
                container.push_back(Value::from(*value));
                reference.push(Value::from(*value));
            }
            Op::PushFront(value) => {
                container.push_front(Value::from(*value));
                reference.insert(0, Value::from(*value));
            }
            Op::PopBack => assert_eq!(container.pop_back(), reference.pop()),
            Op::PopFront => {
                let expected = (len > 0).then(|| reference.remove(0));
                assert_eq!(container.pop_front(), expected);
            }
            Op::Insert { at, count, value } => {
                let at = at.index(len + 1);
                let pos = (container.begin() + offset(at)).position();
                container.insert(pos, *count, Value::from(*value)).unwrap();
                reference.splice(at..at, std::iter::repeat_n(Value::from(*value), *count));
            }
            Op::InsertRange { at, values } => {
                let at = at.index(len + 1);
                let source: Vector = values.iter().map(|&x| Value::from(x)).collect();
                let pos = (container.begin() + offset(at)).position();
                container
                    .insert_range(pos, source.begin(), source.end())
                    .unwrap();
                reference.splice(at..at, source.iter().copied());
            }
            Op::Erase { at } => {
                let at = at.index(len + 1);
                let pos = (container.begin() + offset(at)).position();
                let expected = (at < len).then(|| reference.remove(at));
                assert_eq!(container.erase(pos), expected);
            }
            Op::EraseRange { first, last } => {
                let (mut first, mut last) = (first.index(len + 1), last.index(len + 1));
                if last < first {
                    std::mem::swap(&mut first, &mut last);
                }
                let begin = container.begin();
                let (first_pos, last_pos) =
                    ((begin + offset(first)).position(), (begin + offset(last)).position());
                container.erase_range(first_pos, last_pos).unwrap();
                reference.drain(first..last);
            }
            Op::Assign { at, value } => {
                if len == 0 {
                    return;
                }
                let at = at.index(len);
                let mut cursor = container.begin_mut();
                cursor += offset(at);
                cursor[0] = Value::from(*value);
                reference[at] = Value::from(*value);
            }
            Op::Clear => {
                container.clear();
                reference.clear();
            }
        }
    }

    fn check_agrees<C: OrderedContainer>(container: &C, reference: &[Value]) {
        let walked: Vec<Value> = match container.begin().range_to(container.end()) {
            Ok(iter) => iter.copied().collect(),
            Err(err) => panic!("{}", err),
        };
        assert_eq!(walked, reference);
        assert_eq!(container.len(), reference.len());
        assert_eq!(container.is_empty(), reference.is_empty());
        assert_eq!(container.front(), reference.first());
        assert_eq!(container.back(), reference.last());
        assert_eq!(container.end() - container.begin(), offset(reference.len()));
    }

    fn run<C: OrderedContainer + Clone + Default>(ops: &[Op]) {
        let mut container = C::default();
        let mut reference = Vec::new();
        for op in ops {
            apply(&mut container, &mut reference, op);
            check_agrees(&container, &reference);
        }
        let mut copy = container.clone();
        check_agrees(&copy, &reference);
        copy.push_back(Value::from(1u8));
        copy.clear();
        check_agrees(&container, &reference);
    }

    proptest! {
        #[test]
        fn list_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
            run::<List>(&ops);
        }

        #[test]
        fn vector_matches_vec(ops in prop::collection::vec(op(), 0..64)) {
            run::<Vector>(&ops);
        }

        #[test]
        fn vector_capacity_only_grows(ops in prop::collection::vec(op(), 0..64)) {
            let mut vector = Vector::new();
            let mut reference = Vec::new();
            for op in &ops {
                let capacity = vector.capacity();
                apply(&mut vector, &mut reference, op);
                prop_assert!(vector.capacity() >= capacity);
                prop_assert!(vector.len() <= vector.capacity());
            }
            vector.shrink_to_fit();
            prop_assert_eq!(vector.capacity(), vector.len());
        }
    }
}
