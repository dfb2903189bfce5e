//! A contiguous, growable array built on explicit slot storage.
//!
//! tessera keeps raw memory and object lifetimes in separate layers:
//!
//! ```text
//! Vector<T>                 (typed: construct, move, drop, grow)
//! ├── len                   slots [0, len) are live
//! ├── VectorConfig          append / insert growth policies
//! └── RawBuffer<T>          (untyped: allocate, release, swap)
//!     └── [T; capacity]     uninitialized block
//! ```
//!
//! The storage layer lives in the `tessera-raw` crate and is never exposed
//! through [`Vector`]. Only allocation failure crosses the API as an error
//! ([`AllocError`], from the `try_*` methods); misuse such as an
//! out-of-range position is a contract violation and panics.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::{vector, Vector};
//!
//! let mut v = Vector::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!(v.capacity(), 4);
//!
//! let pos = v.insert(1, 42);
//! assert_eq!(v, [1, 42, 2, 3]);
//! v.erase(pos);
//! assert_eq!(v, vector![1, 2, 3]);
//! ```
//!
//! # Growth
//!
//! | Operation | Default policy | Capacity after growth |
//! |-----------|----------------|-----------------------|
//! | `push`, `emplace_back_with`, `extend` | [`GrowthPolicy::Doubling`] | `max(1, 2 * capacity)` |
//! | `insert`, `emplace_with` | [`GrowthPolicy::ExactFit`] | `len + 1` |
//! | `reserve(n)`, `resize(n)` | exact | `n` |
//!
//! Build with [`VectorConfig::amortized`] to make inserts double as well.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod config;
pub mod iter;
pub mod position;
pub mod vector;

// Public re-exports for the primary API surface.
pub use config::{GrowthPolicy, VectorConfig};
pub use iter::IntoIter;
pub use position::Position;
pub use tessera_raw::AllocError;
pub use vector::Vector;
