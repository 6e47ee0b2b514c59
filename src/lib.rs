//! This crate provides an indexable doubly-linked sequence with owned
//! nodes, built on a circular sentinel ring.
//!
//! The [`Sequence`] supports the standard sequential-collection contract:
//! insertion, deletion, indexed access, iteration and search. Endpoint
//! operations compute in *O*(1) time; index-addressed operations walk the
//! ring and compute in *O*(*n*) time.
//!
//! Here is a quick example showing how the sequence works.
//!
//! ```
//! use ring_sequence::Sequence;
//!
//! let mut seq = Sequence::new();
//!
//! seq.push_back("apple");
//! seq.push_back("banana");
//! seq.push_front("phone");
//!
//! assert_eq!(seq.first(), Ok(&"phone"));
//! assert_eq!(seq.last(), Ok(&"banana"));
//!
//! assert_eq!(seq.pop_back(), Ok("banana"));
//! assert_eq!(seq.last(), Ok(&"apple"));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the sequence is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────┐
//!          ↓                                             sentinel        │
//!    ╔═══════════╗           ╔═══════════╗            ┌───────────┐      │
//!    ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ──→ │   next    │ ─────┘
//!    ╟───────────╢           ╟───────────╢            ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ←── │   prev    │
//! │  ╟───────────╢           ╟───────────╢            ├───────────┤
//! │  ║ element T ║           ║ element T ║            ┊no element ┊
//! │  ╚═══════════╝           ╚═══════════╝            └╌╌╌╌╌╌╌╌╌╌╌┘
//! │   position 0              position 1                  ↑   ↑
//! └───────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                │
//! ║ sentinel  ║ ───────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!   Sequence
//! ```
//! The `Sequence` owns the sentinel node and, transitively, the whole ring
//! reachable from it, plus a length counter `len`. Every node is allocated
//! on the heap and carries a `next` and a `prev` link; only real nodes
//! carry an element. Whether a node is the sentinel is decided by pointer
//! identity, never by inspecting element values, so any `T` value
//! whatsoever can be stored.
//!
//! In an empty sequence the sentinel's `next` and `prev` point at itself.
//! As elements are inserted, `sentinel.next` points at the first element
//! and `sentinel.prev` at the last. In a sequence of length *n*, real
//! nodes occupy positions 0, 1, ..., *n* - 1; the sentinel sits at the
//! past-the-end position *n*, which only insertion may address.
//!
//! # Iteration
//!
//! Iterating over a sequence is by the [`Iter`] and [`IntoIter`]
//! iterators: forward-only, lazy, one-pass and read-only. [`Iter`]
//! borrows the sequence, so structural mutation during traversal is
//! rejected by the borrow checker rather than left undefined. Backward
//! iteration and iteration from an arbitrary position are part of the
//! unsupported surface (see below).
//!
//! ```
//! use ring_sequence::Sequence;
//!
//! let seq: Sequence<i32> = (1..4).collect();
//! let mut iter = seq.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Error`] values instead of panicking, and
//! always fail before any mutation has happened:
//! - [`Error::OutOfRange`] from index-addressed operations given a
//!   position outside their valid interval;
//! - [`Error::Empty`] from endpoint operations on an empty sequence;
//! - [`Error::Unsupported`] from the operations of the collection
//!   contract this container deliberately does not provide: bulk append,
//!   bulk remove, bulk retain, export into a caller-provided buffer, and
//!   positioned bidirectional iteration.
//!
//! ```
//! use ring_sequence::{Error, Sequence};
//!
//! let mut seq: Sequence<i32> = Sequence::new();
//! assert_eq!(seq.pop_front(), Err(Error::Empty));
//! assert_eq!(seq.insert(1, 7), Err(Error::OutOfRange { index: 1, len: 0 }));
//! ```
//!
//! The sequence is not safe for concurrent mutation; wrap it in a lock if
//! that is ever needed.

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use sequence::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use sequence::Sequence;

pub mod error;
pub mod sequence;

mod experiments;
