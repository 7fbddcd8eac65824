//! Fixed-capacity, heap-free ring buffer for embedded and interrupt-driven
//! environments.
//!
//! [`RingBuffer`] owns a contiguous, stack-allocated backing store and never
//! touches the heap. All operations are non-blocking and bounded; fallible
//! operations report outcomes as counts, flags or [`Option`] instead of
//! unwinding, so the buffer stays usable from contexts that cannot panic
//! safely.
//!
//! The buffer is designed around exactly one producer context and one
//! consumer context per instance (e.g. an interrupt handler pushing and a
//! background task popping). Mutation of the shared element count is guarded
//! by a caller-supplied [`CriticalSection`] policy; the default [`NopLock`]
//! does nothing and suits uniprocessor or uncontended use.
//!
//! ```
//! use ringcell::RingBuffer;
//!
//! let ring = RingBuffer::<u32, 4>::new();
//! assert_eq!(ring.push_many(1..=6), 4);
//! assert_eq!(ring.try_pop(), Some(1));
//! assert!(ring.push_one(5));
//! let drained: [u32; 4] = core::array::from_fn(|_| ring.try_pop().unwrap());
//! assert_eq!(drained, [2, 3, 4, 5]);
//! ```
#![cfg_attr(not(loom), no_std)]

mod lock;
mod loom;
mod raw_ring;
mod ring_buffer;

pub use crate::lock::{CriticalSection, NopLock, SectionGuard};
pub use crate::ring_buffer::{Iter, RingBuffer};
