//! Untyped slot storage for the tessera dynamic array.
//!
//! A [`RawBuffer<T>`] owns one block of uninitialized memory sized for a
//! fixed number of `T` slots. It allocates and releases that block and
//! nothing else: it never constructs, drops, or reads an element. Element
//! lifetimes are the business of the container built on top of it.
//!
//! # Ownership
//!
//! A buffer is never cloned. Ownership moves between buffers by exchange
//! ([`RawBuffer::swap`], [`RawBuffer::take`]), so any chain of transfers
//! leaves exactly one owner per block.
//!
//! # Safety
//!
//! `unsafe` is confined to the `buffer` module. Every block it hands out
//! was produced by the global allocator with the layout it is released
//! with.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod error;

pub use buffer::RawBuffer;
pub use error::{handle_alloc_failure, AllocError};
