//! This crate provides a doubly-linked list with list-style positional
//! operations (signed indexing, slicing, ordered insertion and deletion),
//! implemented over a slot arena.
//!
//! The [`List`] finds positions by walking the chain from the front, so
//! positional operations take *O*(*n*) time. In compromise, pushing and
//! popping at either end take *O*(1), and splicing an element in or out of
//! the middle is constant-time once its position is reached.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use arena_list::{List, Slice};
//!
//! let mut list = List::from_iter([1, 2, 4]);
//!
//! list.insert(2, 3)?;             // becomes [1, 2, 3, 4]
//! list.push_front(0);             // becomes [0, 1, 2, 3, 4]
//!
//! assert_eq!(list.get(-1)?, &4);  // negative positions count from the back
//! assert_eq!(list.remove(0)?, 0); // becomes [1, 2, 3, 4]
//!
//! assert_eq!(list.slice(Slice::new().step(2))?, vec![1, 3]);
//! assert_eq!(list.to_string(), "1, 2, 3, 4");
//! # Ok::<(), arena_list::Error>(())
//! ```
//!
//! # Memory Layout
//!
//! The nodes of the list live in slots of a growable arena owned by the
//! list, and name their neighbors by slot index instead of by pointer:
//!
//! ```text
//!            head ─┐                                 ┌─ tail
//!                  ↓                                 ↓
//!          ┌───────────────┬───────────────┬───────────────┐
//!          │    Slot 0     │    Slot 1     │    Slot 2     │
//!          │ ╔═══════════╗ │ ╔═══════════╗ │ ╔═══════════╗ │
//!   arena  │ ║ next: 1   ║ │ ║ next: 2   ║ │ ║ next: ─   ║ │
//!          │ ║ prev: ─   ║ │ ║ prev: 0   ║ │ ║ prev: 1   ║ │
//!          │ ║ element T ║ │ ║ element T ║ │ ║ element T ║ │
//!          │ ╚═══════════╝ │ ╚═══════════╝ │ ╚═══════════╝ │
//!          └───────────────┴───────────────┴───────────────┘
//! ```
//!
//! Removing an element vacates its slot; vacant slots form a free list and
//! are reused by later insertions, so chain order and slot order drift
//! apart as the list is edited. Because neighbors are plain indices into
//! an arena the list owns, the whole crate contains no `unsafe` code, and
//! a stale handle is structurally impossible to observe from outside.
//!
//! # Indexing
//!
//! Positional operations ([`get`], [`set`], [`insert`], [`remove`], and
//! the bounds of [`slice`]) take signed indices. A negative index gets the
//! current length added, so `-1` names the last element. The translated
//! position is then looked up by the walk; anything the walk cannot reach,
//! either too large or still negative after translation, is reported as
//! [`Error::OutOfRange`] and leaves the list untouched:
//!
//! ```
//! use arena_list::{Error, List};
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//! assert_eq!(list.get(-4), Ok(&1));
//! assert_eq!(list.get(-5), Err(Error::OutOfRange));
//! assert_eq!(list.set(9, 0), Err(Error::OutOfRange));
//! ```
//!
//! Note that [`insert`] only accepts positions of existing elements: the
//! position one past the last element fails with [`Error::OutOfRange`]
//! even though [`push_back`] would extend the list there. See the method
//! documentation for details.
//!
//! # Iteration
//!
//! Iterating over the list is by the [`Iter`] iterator, a fused
//! double-ended iterator over references. Each call to [`List::iter`]
//! starts an independent traversal, and reverse traversal is
//! [`Iterator::rev`]:
//!
//! ```
//! use arena_list::List;
//!
//! let list = List::from_iter([1, 2, 3]);
//! assert!(list.iter().eq([1, 2, 3].iter()));
//! assert!(list.iter().rev().eq([3, 2, 1].iter()));
//! ```
//!
//! # Slicing
//!
//! [`slice`] copies a selection of elements out into a `Vec`, driven by a
//! [`Slice`] value holding optional start, stop, and step bounds. The
//! bounds follow the same signed-index rules as single positions; the
//! step, when supplied, must be greater than 1 (an absent step selects
//! every element):
//!
//! ```
//! use arena_list::{List, Slice};
//!
//! let list = List::from_iter([0, 1, 2, 3, 4, 5]);
//! assert_eq!(list.slice(Slice::new().start(1).stop(-1))?, vec![1, 2, 3, 4]);
//! assert_eq!(list.slice(Slice::new().step(2))?, vec![0, 2, 4]);
//! # Ok::<(), arena_list::Error>(())
//! ```
//!
//! [`get`]: List::get
//! [`set`]: List::set
//! [`insert`]: List::insert
//! [`remove`]: List::remove
//! [`slice`]: List::slice
//! [`push_back`]: List::push_back

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{List, Slice};

pub(crate) mod arena;
pub mod error;
pub mod list;
