use std::cmp::Ordering;

use crate::cursor::position::{Position, PositionKind};
use crate::{CursorError, List, Value, Vector};

/// The traversal strategy behind a cursor, with the position it points at.
///
/// - `Array`: a slot index into a vector, valid in `0..=len`. Every operation
///   is index arithmetic.
/// - `List`: a node key of a list, either a live node or the tail sentinel.
///   Steps follow links one at a time, and distances are found by walking
///   the chain.
#[derive(Clone, Copy)]
pub(crate) enum Backend<'a> {
    Array { vector: &'a Vector, slot: usize },
    List { list: &'a List, node: usize },
}

impl<'a> Backend<'a> {
    pub(crate) fn position(&self) -> Position {
        match *self {
            Backend::Array { vector, slot } => {
                Position::new(PositionKind::Array, vector.id(), slot, 0)
            }
            Backend::List { list, node } => {
                Position::new(PositionKind::List, list.id(), node, list.stamp(node))
            }
        }
    }

    pub(crate) fn raw(&self) -> usize {
        match *self {
            Backend::Array { slot, .. } => slot,
            Backend::List { node, .. } => node,
        }
    }

    pub(crate) fn current(&self) -> Option<&'a Value> {
        match *self {
            Backend::Array { vector, slot } => vector.as_slice().get(slot),
            Backend::List { list, node } => list.element(node),
        }
    }

    pub(crate) fn is_end(&self) -> bool {
        match *self {
            Backend::Array { vector, slot } => slot == vector.len(),
            Backend::List { node, .. } => List::is_tail(node),
        }
    }

    /// Returns the backend moved by `offset` steps, or an error if the move
    /// would leave `begin..=end`.
    pub(crate) fn moved(self, offset: isize) -> Result<Self, CursorError> {
        match self {
            Backend::Array { vector, slot } => {
                let target = slot
                    .checked_add_signed(offset)
                    .filter(|&target| target <= vector.len())
                    .ok_or(CursorError::OutOfBounds { offset })?;
                Ok(Backend::Array { vector, slot: target })
            }
            Backend::List { list, node } => {
                let node = list.walk(node, offset)?;
                Ok(Backend::List { list, node })
            }
        }
    }

    /// Number of steps from `origin` to `self`.
    pub(crate) fn offset_from(&self, origin: &Backend<'_>) -> Result<isize, CursorError> {
        match (*self, *origin) {
            (Backend::Array { vector, slot }, Backend::Array { vector: other, slot: from }) => {
                if vector.id() != other.id() {
                    return Err(CursorError::ForeignContainer);
                }
                // Slots are bounded by `len`, which never exceeds `isize::MAX`.
                Ok(slot as isize - from as isize)
            }
            (Backend::List { list, node }, Backend::List { list: other, node: from }) => {
                if list.id() != other.id() {
                    return Err(CursorError::ForeignContainer);
                }
                list.distance(from, node)
            }
            _ => Err(CursorError::KindMismatch),
        }
    }

    pub(crate) fn same_position(&self, other: &Backend<'_>) -> bool {
        self.position() == other.position()
    }

    pub(crate) fn partial_cmp(&self, other: &Backend<'_>) -> Option<Ordering> {
        if self.same_position(other) {
            return Some(Ordering::Equal);
        }
        self.offset_from(other).ok().map(|steps| steps.cmp(&0))
    }
}
