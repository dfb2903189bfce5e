//! Counting element type.

use std::cell::Cell;

thread_local! {
    static STATS: Cell<ProbeStats> = const { Cell::new(ProbeStats::ZERO) };
}

/// Per-thread tallies of [`Probe`] lifecycle events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeStats {
    /// Values built with [`Probe::new`].
    pub created: usize,
    /// Values built with `Default`.
    pub defaults: usize,
    /// Values built with `Clone::clone`.
    pub clones: usize,
    /// Existing values overwritten with `Clone::clone_from`.
    pub assigns: usize,
    /// Values dropped.
    pub drops: usize,
}

impl ProbeStats {
    const ZERO: Self = Self {
        created: 0,
        defaults: 0,
        clones: 0,
        assigns: 0,
        drops: 0,
    };

    /// Values constructed by any route.
    pub fn constructed(&self) -> usize {
        self.created + self.defaults + self.clones
    }

    /// Values constructed and not yet dropped.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than constructed, which means
    /// something was dropped twice.
    pub fn live(&self) -> usize {
        self.constructed()
            .checked_sub(self.drops)
            .unwrap_or_else(|| panic!("double drop detected: {self:?}"))
    }
}

fn record(update: impl FnOnce(&mut ProbeStats)) {
    STATS.with(|cell| {
        let mut stats = cell.get();
        update(&mut stats);
        cell.set(stats);
    });
}

/// Zero this thread's counters.
pub fn reset() {
    STATS.with(|cell| cell.set(ProbeStats::ZERO));
}

/// Snapshot of this thread's counters.
pub fn stats() -> ProbeStats {
    STATS.with(Cell::get)
}

/// An element that records every construction, clone, assignment and drop.
///
/// Compares and orders by its value only.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probe {
    value: i64,
}

impl Probe {
    pub fn new(value: i64) -> Self {
        record(|s| s.created += 1);
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Default for Probe {
    fn default() -> Self {
        record(|s| s.defaults += 1);
        Self { value: 0 }
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        record(|s| s.clones += 1);
        Self { value: self.value }
    }

    fn clone_from(&mut self, source: &Self) {
        record(|s| s.assigns += 1);
        self.value = source.value;
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        record(|s| s.drops += 1);
    }
}
