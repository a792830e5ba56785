//! Raw untyped buffer primitive for the `growvec` container.
//!
//! This is the leaf crate of the workspace: it owns allocations, not
//! elements. [`RawBuf`] holds storage for a fixed number of elements of `T`
//! without ever constructing or destroying one — element lifetimes belong
//! to the managed sequence in the `growvec` crate.
//!
//! The workspace's `unsafe` code is confined to this crate and `growvec`;
//! every unsafe block carries a `SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod buf;
pub mod error;

pub use buf::RawBuf;
pub use error::AllocError;
