//! Shared workloads for the tessera benchmarks.
//!
//! Each builder produces the same contents every run so benchmark numbers
//! are comparable across commits.

#![forbid(unsafe_code)]

use tessera::{Vector, VectorConfig};

/// Element count for the large workloads.
pub const LARGE: usize = 10_000;

/// Element count for workloads whose cost is quadratic in length.
pub const SMALL: usize = 1_000;

/// A vector of `0..n` built by pushing onto an empty vector.
pub fn ascending(n: usize) -> Vector<u64> {
    let mut v = Vector::new();
    for i in 0..n as u64 {
        v.push(i);
    }
    v
}

/// A vector of `n` short heap-allocated strings.
pub fn labels(n: usize) -> Vector<String> {
    (0..n).map(|i| format!("label-{i}")).collect()
}

/// Insert `n` values at the front of an empty vector built with `config`.
pub fn front_inserts(n: usize, config: VectorConfig) -> Vector<u64> {
    let mut v = Vector::with_config(config);
    for i in 0..n as u64 {
        v.insert(0, i);
    }
    v
}

/// Insert `n` values at the midpoint of an empty vector built with `config`.
pub fn middle_inserts(n: usize, config: VectorConfig) -> Vector<u64> {
    let mut v = Vector::with_config(config);
    for i in 0..n as u64 {
        let mid = v.len() / 2;
        v.insert(mid, i);
    }
    v
}
