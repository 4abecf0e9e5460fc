//! # Ledger
//!
//! In-memory label to total map.
//!
//! ## Requirements
//!
//! - Exact decimal sums, never floats
//! - Atomic read-modify-write per increment so concurrent posts to the same label are never lost
//! - Entries created on first increment at zero, never evicted
//!
//! ## Implementation
//!
//! - One `HashMap<String, Decimal>` behind a `Mutex`, the lock only lives for a single insert or a clone
//! - Snapshots copy the map out so readers never hold the lock while sorting or serializing
//! - State is lost on restart
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("Total for {label} overflowed")]
    Overflow { label: String },
}

#[derive(Debug, Default)]
pub struct Ledger {
    totals: Mutex<HashMap<String, Decimal>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `label`, returning the new total. On overflow nothing is written.
    pub fn increment(&self, label: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        let mut totals = self.lock();

        let current = totals.get(label).copied().unwrap_or(Decimal::ZERO);
        let total = current
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow {
                label: label.to_string(),
            })?;

        totals.insert(label.to_string(), total);

        #[cfg(feature = "verbose")]
        tracing::info!("Ledger {label} += {amount} -> {total}");

        Ok(total)
    }

    pub fn snapshot(&self) -> Vec<(String, Decimal)> {
        self.lock()
            .iter()
            .map(|(label, total)| (label.clone(), *total))
            .collect()
    }

    #[cfg(test)]
    fn total(&self, label: &str) -> Option<Decimal> {
        self.lock().get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Increments never panic while holding the guard, poisoning only comes from elsewhere.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Decimal>> {
        self.totals.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
