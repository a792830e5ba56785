//! Probe element types for growvec container tests.
//!
//! Provides instrumented elements for exercising lifetime contracts:
//! [`Tracked`] reports constructions and drops to a shared [`Tally`],
//! [`FlakyClone`] and [`FlakyDefault`] panic on a scheduled element
//! operation, and [`MoveOnly`] proves that a code path never clones.
//!
//! The container under test is single-threaded by contract, and so are
//! these probes.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{FlakyClone, FlakyDefault, MoveOnly, Tally, Tracked};
