//! Instrumented element types for tessera development.
//!
//! Containers are judged by what they do to their elements: how many are
//! built, copied, assigned and dropped, and what survives a panic halfway
//! through an operation. This crate provides element types that keep
//! score:
//!
//! - [`Probe`]: counts constructions, clones, assignments and drops.
//! - [`Fragile`]: a [`Probe`] whose `Clone` and `Default` panic once an
//!   armed budget runs out.
//!
//! Counters are thread-local, so tests running in parallel do not see each
//! other. Call [`probe::reset`] (and [`fragile::disarm`]) at the start of a
//! test, since the harness may reuse threads.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fragile;
pub mod probe;

pub use fragile::Fragile;
pub use probe::{Probe, ProbeStats};
