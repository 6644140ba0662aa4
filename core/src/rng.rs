//! Seeded streams for the demo books.
//!
//! Every ledger the demo firm fills draws from its own `Pcg64Mcg`, keyed by
//! the firm seed and the ledger's slot. Growing one ledger (more rows, more
//! draws per row) leaves the rows of every other ledger untouched.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Row generator for one demo ledger.
pub struct DemoRng(Pcg64Mcg);

impl DemoRng {
    pub fn new(seed: u64, slot: LedgerSlot) -> Self {
        let mixed = seed ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self(Pcg64Mcg::seed_from_u64(mixed))
    }

    /// Uniform in `0..n`; `n == 0` yields 0.
    pub fn below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.0.gen_range(0..n)
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Whole amount in `[min, max]` on a `step` grid, so demo totals stay
    /// exact in `f64`.
    pub fn amount(&mut self, min: u64, max: u64, step: u64) -> f64 {
        let step = step.max(1);
        let steps = max.saturating_sub(min) / step + 1;
        (min + self.below(steps) * step) as f64
    }

    /// One element of a non-empty pool.
    pub fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.below(pool.len() as u64) as usize]
    }
}

/// Streams for every ledger of one demo firm.
pub struct RngBank {
    seed: u64,
}

impl RngBank {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn for_ledger(&self, slot: LedgerSlot) -> DemoRng {
        DemoRng::new(self.seed, slot)
    }
}

/// Slot numbers are part of the demo output: append new ledgers, never
/// renumber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum LedgerSlot {
    Events = 0,
    Payments = 1,
    Expenses = 2,
    StaffPayments = 3,
    FreelancerPayments = 4,
    AccountingEntries = 5,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_draw_independent_streams() {
        let bank = RngBank::new(42);
        let mut events = bank.for_ledger(LedgerSlot::Events);
        let mut expenses = bank.for_ledger(LedgerSlot::Expenses);
        let a: Vec<u64> = (0..8).map(|_| events.below(1_000_000)).collect();
        let b: Vec<u64> = (0..8).map(|_| expenses.below(1_000_000)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn amounts_stay_on_the_grid() {
        let mut rng = RngBank::new(3).for_ledger(LedgerSlot::Payments);
        for _ in 0..200 {
            let v = rng.amount(2_000, 9_000, 500);
            assert!((2_000.0..=9_000.0).contains(&v));
            assert_eq!(v % 500.0, 0.0);
        }
        assert_eq!(rng.below(0), 0);
    }
}
