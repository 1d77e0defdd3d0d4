//! State-value table for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Fingerprint;

/// Value table mapping board fingerprints to learned value estimates
///
/// Fingerprints that have never been written read as `default_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTable {
    values: HashMap<Fingerprint, f64>,
    default_value: f64,
}

impl ValueTable {
    /// Create an empty table
    pub fn new(default_value: f64) -> Self {
        Self {
            values: HashMap::new(),
            default_value,
        }
    }

    /// Value of a fingerprint, or the default when it has not been seen
    pub fn get_or_default(&self, fingerprint: Fingerprint) -> f64 {
        self.values
            .get(&fingerprint)
            .copied()
            .unwrap_or(self.default_value)
    }

    /// Set the value of a fingerprint
    pub fn set(&mut self, fingerprint: Fingerprint, value: f64) {
        self.values.insert(fingerprint, value);
    }

    /// Backward pass over an episode trace.
    ///
    /// Walks `trace` from the last state to the first. Each state moves a
    /// fraction `learning_rate` of the way toward `discount * target`, and its
    /// new value becomes the target for the state before it. The first target
    /// is `reward`.
    ///
    /// V(s) ← V(s) + α[γ·target − V(s)], target ← V(s)
    pub fn backup(
        &mut self,
        trace: &[Fingerprint],
        reward: f64,
        learning_rate: f64,
        discount: f64,
    ) {
        let mut target = reward;
        for &fingerprint in trace.iter().rev() {
            let current = self.get_or_default(fingerprint);
            let updated = current + learning_rate * (discount * target - current);
            self.set(fingerprint, updated);
            target = updated;
        }
    }

    /// Copy of every stored entry
    pub fn export(&self) -> HashMap<Fingerprint, f64> {
        self.values.clone()
    }

    /// Replace all entries with `entries`
    pub fn import(&mut self, entries: HashMap<Fingerprint, f64>) {
        self.values = entries;
    }

    /// Iterate over stored entries
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &f64)> {
        self.values.iter()
    }

    /// Get total number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for ValueTable {
    fn default() -> Self {
        Self::new(0.0)
    }
}
