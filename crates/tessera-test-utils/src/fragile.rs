//! Element type whose construction can be made to panic.

use std::cell::Cell;

use crate::probe::Probe;

thread_local! {
    static BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Allow `remaining` more clones or defaults on this thread, then panic on
/// the next one.
///
/// The budget disarms itself when it fires, so cleanup after the panic
/// runs normally.
pub fn arm(remaining: usize) {
    BUDGET.with(|b| b.set(Some(remaining)));
}

/// Remove any armed budget on this thread.
pub fn disarm() {
    BUDGET.with(|b| b.set(None));
}

/// Whether a budget is currently armed on this thread.
pub fn is_armed() -> bool {
    BUDGET.with(|b| b.get().is_some())
}

fn spend(what: &str) {
    BUDGET.with(|b| match b.get() {
        None => {}
        Some(0) => {
            b.set(None);
            panic!("fragile {what} budget exhausted");
        }
        Some(n) => b.set(Some(n - 1)),
    });
}

/// A [`Probe`] whose `Clone` and `Default` panic when the armed budget is
/// exhausted.
///
/// Drops are never fallible, so a panicking operation can still be
/// checked for leaks through [`probe::stats`](crate::probe::stats).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fragile {
    probe: Probe,
}

impl Fragile {
    pub fn new(value: i64) -> Self {
        Self {
            probe: Probe::new(value),
        }
    }

    pub fn value(&self) -> i64 {
        self.probe.value()
    }
}

impl Default for Fragile {
    fn default() -> Self {
        spend("default");
        Self {
            probe: Probe::default(),
        }
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        spend("clone");
        Self {
            probe: self.probe.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        spend("clone_from");
        self.probe.clone_from(&source.probe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn unarmed_never_panics() {
        disarm();
        let a = Fragile::new(3);
        let b = a.clone();
        assert_eq!(b.value(), 3);
        assert_eq!(Fragile::default().value(), 0);
    }

    #[test]
    fn fires_after_budget_and_disarms() {
        disarm();
        let a = Fragile::new(1);
        arm(2);
        let _b = a.clone();
        let _c = a.clone();
        let result = panic::catch_unwind(AssertUnwindSafe(|| a.clone()));
        assert!(result.is_err());
        assert!(!is_armed());
        let _d = a.clone();
    }
}
