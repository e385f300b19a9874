use std::sync::atomic::{AtomicUsize, Ordering};

/// Identity of one container instance, assigned at construction.
///
/// Clones get a fresh identity, so positions taken from the source are
/// rejected by the copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ContainerId(usize);

impl ContainerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Which traversal strategy a position belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionKind {
    /// A slot index into a [`Vector`](crate::Vector).
    Array,
    /// A node of a [`List`](crate::List).
    List,
}

/// A detached snapshot of a cursor position.
///
/// Cursors borrow their container, so they cannot be handed to a method that
/// mutates the same container. A `Position` does not borrow: take it with
/// [`Cursor::position`](crate::Cursor::position) and pass it to `erase`,
/// `insert` and friends.
///
/// ```
/// use polyseq::{List, Value};
///
/// let mut list: List = [5u8, 7, 3].map(Value::from).into_iter().collect();
/// list.erase((list.begin() + 1).position());
/// assert_eq!(list.len(), 2);
/// ```
///
/// A position is re-validated every time it is resolved: using it with the
/// wrong kind of container or with another container instance is reported as
/// an error, and so is a list position whose node has been erased, even once
/// the list has allocated new nodes in its place. A vector position is a
/// plain slot index, so it keeps resolving as long as the slot is inside
/// `0..=len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) kind: PositionKind,
    pub(crate) owner: ContainerId,
    pub(crate) raw: usize,
    /// Node stamp for list positions, 0 for vector positions.
    pub(crate) stamp: u64,
}

impl Position {
    pub(crate) fn new(kind: PositionKind, owner: ContainerId, raw: usize, stamp: u64) -> Self {
        Self {
            kind,
            owner,
            raw,
            stamp,
        }
    }

    /// Returns the kind of container this position was taken from.
    pub fn kind(&self) -> PositionKind {
        self.kind
    }
}
