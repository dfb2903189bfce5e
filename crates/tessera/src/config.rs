//! Growth configuration for [`Vector`](crate::Vector).

use tessera_raw::AllocError;

/// How a full vector chooses its next capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GrowthPolicy {
    /// Double the current capacity (minimum 1). Amortized O(1) per
    /// element across a run of growths.
    #[default]
    Doubling,
    /// Grow to exactly the number of slots required. Every growth
    /// relocates the whole vector.
    ExactFit,
}

impl GrowthPolicy {
    /// Capacity to grow to when `required` slots are needed and the vector
    /// currently holds `capacity`.
    ///
    /// Never returns less than `required`. Doubling saturates instead of
    /// overflowing; the allocator reports the oversized request.
    pub fn next_capacity(self, capacity: usize, required: usize) -> usize {
        match self {
            Self::Doubling => capacity.saturating_mul(2).max(1).max(required),
            Self::ExactFit => required,
        }
    }

    /// `len + additional`, or [`AllocError::CapacityOverflow`] if the sum
    /// does not fit in `usize`.
    pub(crate) fn required(len: usize, additional: usize) -> Result<usize, AllocError> {
        len.checked_add(additional)
            .ok_or(AllocError::CapacityOverflow {
                requested: usize::MAX,
            })
    }
}

/// Growth behaviour of a [`Vector`](crate::Vector).
///
/// Appends and positional inserts grow independently. By default appends
/// double and inserts grow by exactly one slot, so a long run of inserts
/// into a full vector without a prior `reserve` costs O(N) per insert.
/// [`VectorConfig::amortized`] switches inserts to doubling as well.
///
/// A config is fixed at construction and travels with the vector through
/// clone and swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VectorConfig {
    /// Policy used by `push` and `emplace_back_with` when full.
    ///
    /// Default: [`GrowthPolicy::Doubling`].
    pub append_growth: GrowthPolicy,

    /// Policy used by `insert` and `emplace_with` when full.
    ///
    /// Default: [`GrowthPolicy::ExactFit`].
    pub insert_growth: GrowthPolicy,
}

impl VectorConfig {
    /// Default append policy.
    pub const DEFAULT_APPEND_GROWTH: GrowthPolicy = GrowthPolicy::Doubling;

    /// Default insert policy.
    pub const DEFAULT_INSERT_GROWTH: GrowthPolicy = GrowthPolicy::ExactFit;

    /// Default config: doubling appends, exact-fit inserts.
    pub const fn new() -> Self {
        Self {
            append_growth: Self::DEFAULT_APPEND_GROWTH,
            insert_growth: Self::DEFAULT_INSERT_GROWTH,
        }
    }

    /// Doubling growth for both appends and inserts.
    pub const fn amortized() -> Self {
        Self {
            append_growth: GrowthPolicy::Doubling,
            insert_growth: GrowthPolicy::Doubling,
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
