//! This crate provides two sequence containers, a doubly-linked [`List`] and a
//! growable contiguous [`Vector`], that share one cursor type.
//!
//! The [`List`] allows inserting and removing elements at any given position
//! in constant time. The [`Vector`] gives constant-time indexing and manages
//! its capacity with a fixed growth policy. Both hand out the same [`Cursor`],
//! which supports random-access arithmetic: `+`, `-`, `[]` and ordering. These
//! are index arithmetic on a vector and emulated by walking the chain on a
//! list.
//!
//! Here is a quick example showing how the containers work.
//!
//! ```
//! use polyseq::{List, Value, Vector};
//!
//! let mut list: List = (1u8..=4).map(Value::from).collect();
//! let mut vector: Vector = (1u8..=4).map(Value::from).collect();
//!
//! // the same cursor arithmetic on both
//! assert_eq!(list.end() - list.begin(), 4);
//! assert_eq!(vector.end() - vector.begin(), 4);
//! assert_eq!((list.begin() + 2)[1], Value::from(4u8));
//! assert_eq!((vector.begin() + 2)[1], Value::from(4u8));
//!
//! // mutators take a detached position
//! list.insert((list.begin() + 1).position(), 2, Value::from(0u8)).unwrap();
//! let values: Vec<Value> = list.iter().copied().collect();
//! assert_eq!(values, [1u8, 0, 0, 2, 3, 4].map(Value::from));
//!
//! vector.erase((vector.end() - 1).position());
//! assert_eq!(vector.as_slice(), [1u8, 2, 3].map(Value::from));
//! ```
//!
//! # Element Type
//!
//! The containers are not generic: they hold [`Value`], a primitive numeric
//! type chosen at build time by Cargo feature.
//!
//! | feature    | `Value` |
//! |------------|---------|
//! | (none)     | `u8`    |
//! | `int64`    | `i64`   |
//! | `double`   | `f64`   |
//!
//! ```text
//! [dependencies]
//! polyseq = { features = ["int64"] }
//! ```
//!
//! # Memory Layout
//!
//! The list keeps its nodes in an arena and links them by key. Two sentinel
//! nodes bound the chain:
//! ```text
//!    ╔═══════════╗     ┌───────────┐                    ┌───────────┐     ╔═══════════╗
//!    ║ next      ║ ──→ │ next      │ ──→ ┄┄ ──────────→ │ next      │ ──→ ║ next: NIL ║
//!    ║ prev: NIL ║ ←── │ prev      │ ←── ┄┄ ←────────── │ prev      │ ←── ║ prev      ║
//!    ║ (unused)  ║     │ element   │                    │ element   │     ║ (unused)  ║
//!    ╚═══════════╝     └───────────┘                    └───────────┘     ╚═══════════╝
//!     head, key 0         begin()                                          tail, key 1
//!                                                                            end()
//! ```
//! A list cursor is a node key. It stays valid across insertions and erasures
//! of other nodes.
//!
//! The vector keeps its elements in one buffer with spare room at the end:
//! ```text
//!  ┌───┬───┬───┬───┬ ─ ─ ─ ─ ─ ┐
//!  │ 0 │ 1 │ 2 │ 3 │   spare      len = 4, capacity = 9
//!  └───┴───┴───┴───┴ ─ ─ ─ ─ ─ ┘
//! ```
//! A vector cursor is a slot index. The buffer only moves when an insertion
//! does not fit, on [`Vector::reserve`] and on [`Vector::shrink_to_fit`].
//!
//! # Cursors and Positions
//!
//! A [`Cursor`] borrows its container, so it cannot be passed to a method that
//! mutates the same container. [`Cursor::position`] takes a detached
//! [`Position`], which is what `insert`, `erase` and friends accept. Positions
//! are checked when they are used: a position of the wrong kind or of another
//! container is rejected with a [`CursorError`], and the container is left
//! untouched.
//!
//! A [`CursorMut`] edits in place instead, without detaching:
//!
//! ```
//! use polyseq::{List, Value};
//!
//! let mut list: List = (1u8..=4).map(Value::from).collect();
//! let mut cursor = list.begin_mut();
//! cursor += 2;
//! assert_eq!(cursor.remove(), Some(Value::from(3u8))); // becomes [1, 2, 4], points to 4
//! cursor.insert(Value::from(9u8)); // becomes [1, 2, 9, 4], points to 4
//! cursor[-2] = Value::from(0u8);
//! let values: Vec<Value> = list.iter().copied().collect();
//! assert_eq!(values, [1u8, 0, 9, 4].map(Value::from));
//! ```
//!
//! # Generic Code
//!
//! The traits in [`container`] describe what each container can do, from
//! [`Container`] up to [`RandomAccessContainer`].

#[cfg(all(feature = "int64", feature = "double"))]
compile_error!("features `int64` and `double` select the element type and are mutually exclusive");

/// The element type of every container, selected by Cargo feature.
#[cfg(not(any(feature = "int64", feature = "double")))]
pub type Value = u8;

/// The element type of every container, selected by Cargo feature.
#[cfg(feature = "int64")]
pub type Value = i64;

/// The element type of every container, selected by Cargo feature.
#[cfg(all(feature = "double", not(feature = "int64")))]
pub type Value = f64;

#[doc(inline)]
pub use container::{Container, OrderedContainer, RandomAccessContainer, SequenceContainer};
#[doc(inline)]
pub use cursor::{Cursor, CursorMut, Iter, Position, PositionKind};
pub use error::CursorError;
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use vector::Vector;

pub mod container;
pub mod cursor;
pub mod list;
pub mod vector;

mod error;
