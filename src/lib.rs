//! A doubly-linked list with owned nodes, organized as a cyclic list through
//! a payload-less ghost node.
//!
//! The [`List`] keeps the usual doubly-linked-list promises: *O*(1) pushes
//! and pops at either end, *O*(1) removal and insertion *at a known node*
//! through a [cursor](list::cursor::CursorMut), and *O*(*n*) access anywhere
//! else. On top of the container it carries the classic whole-list
//! algorithms: in-place [reversal](List::reverse) (iterative and
//! [recursive](List::reverse_recursive)), single-pass
//! [removal of the *n*-th node from the back](List::remove_nth_from_end),
//! [stable three-way partitioning](List::partition3), and
//! [digit-wise addition](add_reversed_digits) of numbers stored as digit
//! lists.
//!
//! # Memory layout
//!
//! The list owns one heap node per element plus a ghost node with no
//! payload; the ghost's `next` is the front and its `prev` is the back, so
//! the nodes form a single cycle and no link is ever null:
//!
//! ```text
//!          ┌───────────────────────────────────────────────┐
//!          ↓                                               │
//!       ┌──────┐ next ┌─────┐ next ┌─────┐ next ┌─────┐    │
//!       │      │ ───> │     │ ───> │     │ ───> │     │ ───┘
//!       │ Ghost│      │  1  │      │  2  │      │  3  │
//!  ┌─── │      │ <─── │     │ <─── │     │ <─── │     │ <──┐
//!  │    └──────┘ prev └─────┘ prev └─────┘ prev └─────┘    │
//!  │                                                       │
//!  └───────────────────────────────────────────────────────┘
//! ```
//!
//! An empty list is the ghost linked to itself. The cycle removes every
//! front/back special case from the link algebra: attaching or detaching a
//! node is the same two-link update anywhere in the list.
//!
//! # Example
//!
//! ```
//! use splice_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! list.push_front(0);
//! list.insert(4, 4);
//! assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
//!
//! list.reverse();
//! assert_eq!(list.remove_nth_from_end(5), Ok(4));
//! assert_eq!(list.into_vec(), vec![3, 2, 1, 0]);
//! ```
//!
//! # Errors
//!
//! Operations addressed by position come in two flavors: `try_*` methods
//! return [`Error`] and leave the list untouched when the position is out of
//! range, and their plain counterparts panic, matching the slice-indexing
//! convention. See [`Error`] for the two ways a position can be bad.
//!
//! # Feature flags
//!
//! - `length` (default): cache the length in the list so that
//!   [`len`](List::len) is *O*(1), cursors know their
//!   [`index`](list::cursor::Cursor::index), and iterators are
//!   [`ExactSizeIterator`]. Without it the list is one `usize` smaller and
//!   `len` counts in *O*(*n*).

pub mod list;

pub use list::iterator::{IntoIter, Iter, IterMut};
pub use list::{add_reversed_digits, Error, List};
