//! A growable contiguous sequence built from raw memory upward.
//!
//! `growvec` implements the full mechanics of a dynamic array on top of the
//! untyped [`RawBuf`] allocation handle from `growvec-raw`: size vs.
//! capacity, doubling growth, construction and destruction of elements in
//! raw storage, and positional insertion and erasure — with the panic-safety
//! protocol spelled out instead of hidden behind a library.
//!
//! # Architecture
//!
//! ```text
//! GrowVec<T>   (element lifetimes, growth policy, panic safety)
//! └── RawBuf<T>   (one untyped allocation, capacity, nothing else)
//! ```
//!
//! Slots `[0, len)` of the buffer hold live elements; `[len, capacity)` are
//! raw storage. Every operation that needs more room builds the replacement
//! buffer completely — on insertion paths the new element is written into
//! its final slot first — then commits with an O(1) buffer swap and releases
//! the old allocation afterwards.
//!
//! # Panic safety
//!
//! Relocating elements between buffers is a bitwise move and cannot fail
//! partway, so reallocation never runs element code. The operations that do
//! run element code (default-filling, cloning) unwind by dropping exactly
//! what they had built, in reverse order, leaving the original sequence
//! intact wherever the strong guarantee is documented.
//!
//! # Invalidation
//!
//! References and iterators are plain positions into the buffer. Any
//! operation that reallocates or shifts elements invalidates them; the
//! borrow checker enforces that contract rather than leaving it to
//! documentation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod clone;
mod guard;
pub mod iter;
mod shift;
pub mod vec;

pub use growvec_raw::{AllocError, RawBuf};
pub use iter::IntoIter;
pub use vec::GrowVec;
