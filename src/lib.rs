//! This crate provides a small set of generic collections built from owned,
//! linked nodes, and a few sorting and searching algorithms over slices.
//!
//! - [`Sequence`]: a doubly-linked list. Inserting and removing at both ends
//!   takes constant time; positional access takes *O*(*n*) time.
//! - [`CompleteTree`]: a binary tree that stays complete after every
//!   insertion and removal, so its height is always ⌊log₂ *n*⌋.
//! - [`array`]: quicksort, selection sort and binary search over slices.
//!
//! Both collections implement the [`Collection`] trait, and the tree walks
//! itself breadth-first through the [`Queue`] trait.
//!
//! Here is a quick example showing how the sequence works.
//!
//! ```
//! use linked_collections::Sequence;
//!
//! let mut sequence = Sequence::from_iter([3, 1, 2]);
//! sequence.push_front(4).unwrap();
//! sequence.insert_at(2, 5).unwrap();
//! assert_eq!(sequence.to_string(), "[4, 3, 5, 1, 2]");
//!
//! let sorted = sequence.merge_sort(|a, b| a.cmp(b));
//! assert_eq!(sorted.to_string(), "[1, 2, 3, 4, 5]");
//! assert!(sorted.linear_search_sorted_ord(&5));
//! ```
//!
//! # Absent Elements
//!
//! Inserting methods take `impl Into<Option<T>>`, so both `push_back(1)` and
//! `push_back(Some(1))` work, while `push_back(None)` is refused with
//! [`CollectionError::InvalidArgument`] before anything changes. Queries that
//! accept an absent value (such as [`array::binary_search`]) answer "not
//! found" for `None`.
//!
//! # Memory Layout
//!
//! The memory layout of the sequence is like the following graph:
//! ```text
//!                 ╔═══════════╗           ╔═══════════╗           ╔═══════════╗
//!                 ║   next    ║ ────────→ ║   next    ║ ────────→ ║   next    ║ ──→ None
//!                 ╟───────────╢           ╟───────────╢           ╟───────────╢
//!      None ←──── ║   prev    ║ ←──────── ║   prev    ║ ←──────── ║   prev    ║
//!                 ╟───────────╢           ╟───────────╢           ╟───────────╢
//!                 ║ element T ║           ║ element T ║           ║ element T ║
//!                 ╚═══════════╝           ╚═══════════╝           ╚═══════════╝
//!                     Node 0                 Node 1                 Node n-1
//!                       ↑                                              ↑
//! ╔═══════════╗         │                                              │
//! ║   head    ║ ────────┘                                              │
//! ╟───────────╢                                                        │
//! ║   tail    ║ ───────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!   Sequence
//! ```
//!
//! The vertices of a [`CompleteTree`] live in an arena owned by the tree. Each
//! vertex holds the indices of its children and of its parent; removing a
//! vertex frees its arena slot.
//!
//! # Iteration
//!
//! Iterating over a sequence is by the [`Iter`] iterator, which is
//! double-ended, exact-size and fused. A [`Cursor`] walks the sequence in both
//! directions and reports an exhausted direction as
//! [`CollectionError::NoSuchElement`].
//!
//! ```
//! use linked_collections::{CollectionError, Sequence};
//!
//! let sequence = Sequence::from_iter(['a', 'b']);
//! let mut cursor = sequence.cursor();
//! assert_eq!(cursor.try_next(), Ok(&'a'));
//! assert_eq!(cursor.try_next(), Ok(&'b'));
//! assert_eq!(cursor.try_next(), Err(CollectionError::NoSuchElement));
//! assert_eq!(cursor.try_previous(), Ok(&'b'));
//! ```
//!
//! Both iterators and cursors borrow the sequence, so structural mutation
//! while one is alive does not compile.
//!
//! # Features
//!
//! - `explicit-stack` (default): quicksort, binary search and merge sort keep
//!   their pending work on an explicit stack (or in a loop) instead of
//!   recursing, so deep inputs cannot overflow the call stack. Disabling it
//!   selects the recursive forms, which split the input at the same points.
//!
//! # Logging
//!
//! The sorts emit `trace`-level spans and the tree emits `trace`-level events
//! through [`tracing`]. Nothing is printed unless the application installs a
//! subscriber.

#[doc(inline)]
pub use collection::Collection;
#[doc(inline)]
pub use error::{CollectionError, Result};
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use sequence::cursor::Cursor;
#[doc(inline)]
pub use sequence::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use sequence::Sequence;
#[doc(inline)]
pub use tree::{CompleteTree, VertexRef};

pub mod array;
pub mod collection;
pub mod error;
pub mod queue;
pub mod sequence;
pub mod tree;
