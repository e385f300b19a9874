use std::fmt::{Debug, Formatter};

use slab::Slab;
use tracing::trace;

use crate::cursor::position::ContainerId;
use crate::{Cursor, CursorError, CursorMut, Iter, Position, PositionKind, Value};

pub mod iterator;

mod algorithms;

/// Arena key of the head sentinel.
const HEAD: usize = 0;
/// Arena key of the tail sentinel, which is also the `end()` position.
const TAIL: usize = 1;
/// Link value for "no node", found only in `head.prev` and `tail.next`.
const NIL: usize = usize::MAX;

/// The `List` is a doubly-linked list bounded by two sentinel nodes.
/// It allows inserting and removing elements at any given position in
/// constant time. In compromise, reaching a position takes *O*(*n*) time.
///
/// The nodes live in an arena and link to each other by arena key:
/// ```text
///   key 0 (head)                                               key 1 (tail)
///  ┌───────────┐     ┌───────────┐     ┌───────────┐     ┌───────────┐
///  │ next      │ ──→ │ next      │ ──→ │ next      │ ──→ │ next: NIL │
///  │ prev: NIL │ ←── │ prev      │ ←── │ prev      │ ←── │ prev      │
///  │ (unused)  │     │ element   │     │ element   │     │ (unused)  │
///  └───────────┘     └───────────┘     └───────────┘     └───────────┘
///                       begin()                              end()
/// ```
/// The sentinels are allocated first and are never removed, so they always
/// hold keys 0 and 1. Keys of erased nodes are recycled for new nodes.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the tail sentinel).
pub struct List {
    nodes: Slab<Node>,
    /// the length of the list
    len: usize,
    id: ContainerId,
    /// Stamp for the next allocated node. Sentinels are stamped 0.
    next_stamp: u64,
}

#[derive(Debug)]
struct Node {
    next: usize,
    prev: usize,
    /// Tells apart nodes that reuse the same arena key.
    stamp: u64,
    element: Value,
}

/// A run of nodes allocated in the arena but not linked into the list, used
/// while splicing.
///
/// `front.prev` and `back.next` are `NIL` until the run is attached.
struct DetachedNodes {
    front: usize,
    back: usize,
    len: usize,
}

// private methods
impl List {
    pub(crate) fn id(&self) -> ContainerId {
        self.id
    }

    pub(crate) fn is_tail(node: usize) -> bool {
        node == TAIL
    }

    fn front_node(&self) -> usize {
        self.nodes[HEAD].next
    }

    fn back_node(&self) -> usize {
        self.nodes[TAIL].prev
    }

    /// Returns `true` if `node` is a live, non-sentinel node.
    fn is_element(&self, node: usize) -> bool {
        node != HEAD && node != TAIL && self.nodes.contains(node)
    }

    pub(crate) fn element(&self, node: usize) -> Option<&Value> {
        if !self.is_element(node) {
            return None;
        }
        Some(&self.nodes[node].element)
    }

    pub(crate) fn element_mut(&mut self, node: usize) -> Option<&mut Value> {
        if !self.is_element(node) {
            return None;
        }
        Some(&mut self.nodes[node].element)
    }

    /// The node after `node`, or `None` if `node` is the tail or not live.
    pub(crate) fn next_node(&self, node: usize) -> Option<usize> {
        if !self.is_element(node) {
            return None;
        }
        Some(self.nodes[node].next)
    }

    /// The node before `node`, or `None` if `node` is the first element or
    /// not live.
    fn prev_node(&self, node: usize) -> Option<usize> {
        if node != TAIL && !self.is_element(node) {
            return None;
        }
        Some(self.nodes[node].prev).filter(|&prev| prev != HEAD)
    }

    /// Checks that `node` is a position of this list: a live node or the
    /// tail sentinel.
    fn check_node(&self, node: usize) -> Result<usize, CursorError> {
        if node == TAIL || self.is_element(node) {
            Ok(node)
        } else {
            Err(CursorError::Dangling)
        }
    }

    /// The stamp of a live node or sentinel, stored in positions taken there.
    pub(crate) fn stamp(&self, node: usize) -> u64 {
        self.nodes.get(node).map_or(0, |node| node.stamp)
    }

    /// Resolves a detached position to a node key of this list.
    ///
    /// A position whose node was erased is `Dangling`, even after its arena
    /// key has been reused for a new node.
    fn node_of(&self, pos: Position) -> Result<usize, CursorError> {
        if pos.kind != PositionKind::List {
            return Err(CursorError::KindMismatch);
        }
        if pos.owner != self.id {
            return Err(CursorError::ForeignContainer);
        }
        let node = self.check_node(pos.raw)?;
        if self.nodes[node].stamp != pos.stamp {
            return Err(CursorError::Dangling);
        }
        Ok(node)
    }

    /// Follows `offset` links from `node`, forward if positive. The walk may
    /// stop at the tail sentinel but never go past it, nor before the first
    /// element.
    pub(crate) fn walk(&self, node: usize, offset: isize) -> Result<usize, CursorError> {
        let mut current = self.check_node(node)?;
        let out_of_bounds = CursorError::OutOfBounds { offset };
        if offset >= 0 {
            for _ in 0..offset {
                current = self.next_node(current).ok_or(out_of_bounds)?;
            }
        } else {
            for _ in 0..offset.unsigned_abs() {
                current = self.prev_node(current).ok_or(out_of_bounds)?;
            }
        }
        Ok(current)
    }

    /// Number of links from `from` to `to`, negative if `to` comes first.
    ///
    /// A node carries no index, so the chain is searched: one walker goes
    /// forward and one backward from `from`, one step each per round, until
    /// one of them meets `to`. This costs *O*(distance) rather than *O*(*n*).
    pub(crate) fn distance(&self, from: usize, to: usize) -> Result<isize, CursorError> {
        let from = self.check_node(from)?;
        let to = self.check_node(to)?;
        let mut forward = Some(from);
        let mut backward = Some(from);
        let mut steps: isize = 0;
        loop {
            if forward == Some(to) {
                return Ok(steps);
            }
            if backward == Some(to) {
                return Ok(-steps);
            }
            if forward.is_none() && backward.is_none() {
                return Err(CursorError::Unreachable);
            }
            forward = forward.and_then(|node| self.next_node(node));
            backward = backward.and_then(|node| self.prev_node(node));
            steps += 1;
        }
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Detach a single live node from the list, free it, and return its
    /// element.
    pub(crate) fn detach_node(&mut self, node: usize) -> Value {
        debug_assert!(self.is_element(node), "cannot detach a sentinel");
        let node = self.nodes.remove(node);
        self.connect(node.prev, node.next);
        self.len -= 1;
        node.element
    }

    /// Allocate a detached run holding `values` in order, or return `None` if
    /// `values` is empty.
    fn new_detached<I>(&mut self, values: I) -> Option<DetachedNodes>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut run: Option<DetachedNodes> = None;
        for element in values {
            let prev = run.as_ref().map_or(NIL, |run| run.back);
            let stamp = self.next_stamp;
            self.next_stamp += 1;
            let node = self.nodes.insert(Node {
                next: NIL,
                prev,
                stamp,
                element,
            });
            match run.as_mut() {
                Some(run) => {
                    self.nodes[run.back].next = node;
                    run.back = node;
                    run.len += 1;
                }
                None => {
                    run = Some(DetachedNodes {
                        front: node,
                        back: node,
                        len: 1,
                    })
                }
            }
        }
        run
    }

    /// Attach a detached run to the list, between the adjacent nodes `prev`
    /// and `next`.
    fn attach_nodes(&mut self, prev: usize, next: usize, detached: DetachedNodes) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, detached.front);
        self.connect(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, detached.front);
            self.assert_adjacent(detached.back, next);
        }
    }

    /// Detach the range `front..=back` from the list and free its nodes.
    ///
    /// `front..=back` must be a valid range of `len` nodes.
    fn free_nodes(&mut self, front: usize, back: usize, len: usize) {
        let before = self.nodes[front].prev;
        let after = self.nodes[back].next;
        self.connect(before, after);
        let mut node = front;
        for _ in 0..len {
            node = self.nodes.remove(node).next;
        }
        debug_assert_eq!(node, after);
        self.len -= len;
    }

    /// Splice `values` in before `next`, returning how many were inserted.
    pub(crate) fn splice_before<I>(&mut self, next: usize, values: I) -> usize
    where
        I: IntoIterator<Item = Value>,
    {
        match self.new_detached(values) {
            Some(detached) => {
                let len = detached.len;
                self.attach_nodes(self.nodes[next].prev, next, detached);
                trace!(len, "spliced nodes into list");
                len
            }
            None => 0,
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.nodes[prev].next, next);
        assert_eq!(self.nodes[next].prev, prev);
    }
}

impl List {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use polyseq::List;
    /// let list = List::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.begin(), list.end());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let mut nodes = Slab::with_capacity(2);
        let head = nodes.insert(Node {
            next: TAIL,
            prev: NIL,
            stamp: 0,
            element: Value::default(),
        });
        let tail = nodes.insert(Node {
            next: NIL,
            prev: HEAD,
            stamp: 0,
            element: Value::default(),
        });
        debug_assert_eq!((head, tail), (HEAD, TAIL));
        Self {
            nodes,
            len: 0,
            id: ContainerId::next(),
            next_stamp: 1,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == TAIL
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2u8.into());
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1u8.into());
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3u8.into());
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`. Both sentinels stay, linked to
    /// each other.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let len = self.len;
        self.nodes.retain(|node, _| node == HEAD || node == TAIL);
        self.connect(HEAD, TAIL);
        self.len = 0;
        trace!(len, "cleared list");
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&Value> {
        self.element(self.front_node())
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1u8.into());
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5u8.into();
    /// }
    /// assert_eq!(list.front(), Some(&5u8.into()));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut Value> {
        self.element_mut(self.front_node())
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&Value> {
        self.element(self.back_node())
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut Value> {
        self.element_mut(self.back_node())
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, value: Value) {
        self.splice_before(self.front_node(), Some(value));
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1u8.into());
    /// list.push_front(3u8.into());
    /// assert_eq!(list.pop_front(), Some(3u8.into()));
    /// assert_eq!(list.pop_front(), Some(1u8.into()));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_node(self.front_node()))
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, value: Value) {
        self.splice_before(TAIL, Some(value));
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_node(self.back_node()))
    }

    /// Provides a cursor at the first node, or at `end()` if the list is
    /// empty.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::list(self, self.front_node())
    }

    /// Provides a cursor at the tail sentinel, one past the last element.
    pub fn end(&self) -> Cursor<'_> {
        Cursor::list(self, TAIL)
    }

    /// Provides a cursor with editing operations at the first node.
    pub fn begin_mut(&mut self) -> CursorMut<'_> {
        let node = self.front_node();
        CursorMut::list(self, node)
    }

    /// Provides a cursor with editing operations at the tail sentinel.
    pub fn end_mut(&mut self) -> CursorMut<'_> {
        CursorMut::list(self, TAIL)
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is at `end()` if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{List, Value};
    ///
    /// let list: List = (1u8..=3).map(Value::from).collect();
    /// assert_eq!(list.cursor(1).current(), Some(&Value::from(2u8)));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        Cursor::list(self, self.nth_node(at))
    }

    /// Provides a cursor with editing operations at the node with given
    /// index.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        let node = self.nth_node(at);
        CursorMut::list(self, node)
    }

    /// Walks from whichever end is nearer. `at` must be `<= len`.
    fn nth_node(&self, at: usize) -> usize {
        if at <= self.len / 2 {
            (0..at).fold(self.front_node(), |node, _| self.nodes[node].next)
        } else {
            (at..self.len).fold(TAIL, |node, _| self.nodes[node].prev)
        }
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(0u8.into());
    /// list.push_back(1u8.into());
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0u8.into()));
    /// assert_eq!(iter.next(), Some(&1u8.into()));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.begin(), self.end(), self.len)
    }

    /// Inserts `count` copies of `value` before `pos`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`count`) time.
    ///
    /// # Errors
    ///
    /// Fails, leaving the list untouched, if `pos` is not a position of this
    /// list. `count == 0` is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{List, Value};
    ///
    /// let mut list: List = [5u8, 7, 3].map(Value::from).into_iter().collect();
    /// list.insert((list.begin() + 1).position(), 2, Value::from(9u8)).unwrap();
    /// let values: Vec<Value> = list.iter().copied().collect();
    /// assert_eq!(values, [5u8, 9, 9, 7, 3].map(Value::from));
    /// ```
    pub fn insert(&mut self, pos: Position, count: usize, value: Value) -> Result<(), CursorError> {
        let next = self.node_of(pos)?;
        self.splice_before(next, std::iter::repeat_n(value, count));
        Ok(())
    }

    /// Inserts copies of the elements in `first..last` before `pos`. The
    /// source range is walked with its own cursors and may come from either
    /// kind of container.
    ///
    /// # Errors
    ///
    /// Fails, leaving the list untouched, if `pos` is not a position of this
    /// list or `first..last` is not a valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{List, Value, Vector};
    ///
    /// let source: Vector = (1u8..=4).map(Value::from).collect();
    /// let mut list: List = [0u8, 9].map(Value::from).into_iter().collect();
    /// let pos = (list.end() - 1).position();
    /// list.insert_range(pos, source.begin() + 1, source.end()).unwrap();
    /// let values: Vec<Value> = list.iter().copied().collect();
    /// assert_eq!(values, [0u8, 2, 3, 4, 9].map(Value::from));
    /// ```
    pub fn insert_range(
        &mut self,
        pos: Position,
        first: Cursor<'_>,
        last: Cursor<'_>,
    ) -> Result<(), CursorError> {
        let next = self.node_of(pos)?;
        let source = first.range_to(last)?;
        self.splice_before(next, source.copied());
        Ok(())
    }

    /// Inserts the elements of `values` before `pos`, in order.
    ///
    /// # Errors
    ///
    /// Fails, leaving the list untouched, if `pos` is not a position of this
    /// list.
    pub fn insert_iter<I>(&mut self, pos: Position, values: I) -> Result<(), CursorError>
    where
        I: IntoIterator<Item = Value>,
    {
        let next = self.node_of(pos)?;
        self.splice_before(next, values);
        Ok(())
    }

    /// Removes the element at `pos` and returns it, or returns `None` if `pos`
    /// is `end()` or not a position of this list.
    ///
    /// Cursors and positions of other nodes stay valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn erase(&mut self, pos: Position) -> Option<Value> {
        let node = self.node_of(pos).ok()?;
        if node == TAIL {
            return None;
        }
        Some(self.detach_node(node))
    }

    /// Removes the elements in `first..last`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(distance) time.
    ///
    /// # Errors
    ///
    /// Fails, leaving the list untouched, if either position is not a
    /// position of this list, or with [`CursorError::InvertedRange`] if
    /// `last` comes before `first`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{List, Value};
    ///
    /// let mut list: List = (0u8..6).map(Value::from).collect();
    /// let (first, last) = ((list.begin() + 1).position(), (list.end() - 1).position());
    /// list.erase_range(first, last).unwrap();
    /// let values: Vec<Value> = list.iter().copied().collect();
    /// assert_eq!(values, [0u8, 5].map(Value::from));
    /// ```
    pub fn erase_range(&mut self, first: Position, last: Position) -> Result<(), CursorError> {
        let front = self.node_of(first)?;
        let end = self.node_of(last)?;
        let len = usize::try_from(self.distance(front, end)?)
            .map_err(|_| CursorError::InvertedRange)?;
        if len == 0 {
            return Ok(());
        }
        let back = self.nodes[end].prev;
        self.free_nodes(front, back, len);
        trace!(len, "erased run of list nodes");
        Ok(())
    }
}

impl Debug for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{List, HEAD, TAIL};
    use crate::{CursorError, Value, Vector};

    fn val(x: u8) -> Value {
        Value::from(x)
    }

    fn list_eq<I>(list: &List, expected: I)
    where
        I: IntoIterator<Item = u8>,
    {
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            expected.into_iter().map(val).collect::<Vec<_>>()
        );
        assert_eq!(list.len(), list.iter().count());
    }

    /// Walks the chain both ways and checks every link against the arena.
    fn assert_well_formed(list: &List) {
        let mut node = HEAD;
        let mut forward = 0;
        while list.nodes[node].next != TAIL {
            let next = list.nodes[node].next;
            assert_eq!(list.nodes[next].prev, node);
            node = next;
            forward += 1;
        }
        assert_eq!(list.nodes[TAIL].prev, node);
        assert_eq!(forward, list.len());
        assert_eq!(list.nodes.len(), list.len() + 2);
    }

    #[test]
    fn list_create() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.begin(), list.end());
        list.push_back(val(1));
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(val(1)));
        assert!(list.is_empty());
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(val(5));
        list.push_back(val(7));
        list.push_back(val(3));
        list_eq(&list, [5, 7, 3]);
        assert_eq!(list.front(), Some(&val(5)));
        assert_eq!(list.back(), Some(&val(3)));

        list.push_front(val(1));
        assert_eq!(list.front(), Some(&val(1)));
        assert_eq!(list.pop_front(), Some(val(1)));
        assert_eq!(list.pop_back(), Some(val(3)));
        list_eq(&list, [5, 7]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_pop_front_single() {
        let mut list = List::new();
        list.push_back(val(4));
        assert_eq!(list.pop_front(), Some(val(4)));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.begin(), list.end());
        assert_well_formed(&list);
    }

    #[test]
    fn list_erase() {
        let mut list: List = [5, 7, 3].iter().map(|&x| val(x)).collect();
        assert_eq!(list.erase((list.begin() + 1).position()), Some(val(7)));
        list_eq(&list, [5, 3]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.erase(list.end().position()), None);
        list_eq(&list, [5, 3]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_insert_count() {
        let mut list: List = [5, 7, 3].iter().map(|&x| val(x)).collect();
        list.insert((list.begin() + 1).position(), 2, val(9)).unwrap();
        list_eq(&list, [5, 9, 9, 7, 3]);
        assert_eq!(list.len(), 5);

        list.insert(list.begin().position(), 0, val(1)).unwrap();
        list_eq(&list, [5, 9, 9, 7, 3]);

        list.insert(list.end().position(), 1, val(8)).unwrap();
        list_eq(&list, [5, 9, 9, 7, 3, 8]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_insert_range_and_iter() {
        let source: Vector = (10..14).map(val).collect();
        let mut list: List = (0..3).map(val).collect();
        list.insert_range(list.cursor(1).position(), source.begin(), source.end())
            .unwrap();
        list_eq(&list, [0, 10, 11, 12, 13, 1, 2]);

        let empty = source.begin();
        list.insert_range(list.begin().position(), empty, empty).unwrap();
        assert_eq!(list.len(), 7);

        assert_eq!(
            list.insert_range(list.begin().position(), source.end(), source.begin()),
            Err(CursorError::InvertedRange)
        );
        assert_eq!(list.len(), 7);

        list.insert_iter(list.end().position(), (20..22).map(val)).unwrap();
        list_eq(&list, [0, 10, 11, 12, 13, 1, 2, 20, 21]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_erase_range() {
        let mut list: List = (0..10).map(val).collect();
        list.erase_range(list.cursor(2).position(), list.cursor(5).position())
            .unwrap();
        list_eq(&list, [0, 1, 5, 6, 7, 8, 9]);

        list.erase_range(list.cursor(3).position(), list.cursor(3).position())
            .unwrap();
        assert_eq!(list.len(), 7);

        assert_eq!(
            list.erase_range(list.end().position(), list.begin().position()),
            Err(CursorError::InvertedRange)
        );
        list_eq(&list, [0, 1, 5, 6, 7, 8, 9]);

        list.erase_range(list.begin().position(), list.end().position())
            .unwrap();
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn list_rejects_foreign_positions() {
        let mut list: List = (0..3).map(val).collect();
        let other = list.clone();
        let vector: Vector = (0..3).map(val).collect();
        assert_eq!(
            list.insert(other.begin().position(), 1, val(1)),
            Err(CursorError::ForeignContainer)
        );
        assert_eq!(
            list.insert(vector.begin().position(), 1, val(1)),
            Err(CursorError::KindMismatch)
        );
        assert_eq!(list.erase(other.begin().position()), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_positions_survive_other_edits() {
        let mut list: List = (0..5).map(val).collect();
        let kept = list.cursor(2).position();
        let erased = list.cursor(3).position();
        list.push_front(val(100));
        list.erase(list.cursor(1).position());
        list.insert(list.end().position(), 3, val(7)).unwrap();
        assert_eq!(list.erase(erased), Some(val(3)));
        assert_eq!(list.erase(erased), None);
        assert_eq!(
            list.insert(erased, 1, val(1)),
            Err(CursorError::Dangling)
        );
        assert_eq!(list.erase(kept), Some(val(2)));
        list_eq(&list, [100, 1, 4, 7, 7, 7]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_erased_position_stays_dangling_after_key_reuse() {
        let mut list: List = (0..3).map(val).collect();
        let stale = list.cursor(1).position();
        assert_eq!(list.erase(stale), Some(val(1)));
        list.push_back(val(99));
        // the new node takes the freed arena key
        assert_eq!(list.cursor(2).position().raw, stale.raw);
        assert_ne!(list.cursor(2).position(), stale);
        assert_eq!(list.erase(stale), None);
        assert_eq!(list.insert(stale, 1, val(5)), Err(CursorError::Dangling));
        assert_eq!(
            list.erase_range(stale, list.end().position()),
            Err(CursorError::Dangling)
        );
        list_eq(&list, [0, 2, 99]);

        let cleared = list.begin().position();
        list.clear();
        list.push_back(val(4));
        assert_eq!(list.erase(cleared), None);
        list_eq(&list, [4]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_clear_recycles_nodes() {
        let mut list: List = (0..10).map(val).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        assert_well_formed(&list);
        list.push_back(val(1));
        list.push_front(val(0));
        list_eq(&list, [0, 1]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_cursor_at_index() {
        let list: List = (0..9).map(val).collect();
        for at in 0..=9 {
            let cursor = list.cursor(at);
            assert_eq!(cursor - list.begin(), at as isize);
            assert_eq!(cursor.current(), list.iter().nth(at));
        }
    }

    #[test]
    #[should_panic(expected = "Cannot create cursor at a nonexistent index")]
    fn list_cursor_past_end_panics() {
        let list: List = (0..2).map(val).collect();
        list.cursor(3);
    }
}
