//! One-shot reveal bookkeeping for `[data-animate]` elements.
//!
//! Elements are identified by their position in the initial query. The
//! observer also unobserves on first reveal; the ledger guards against a
//! late duplicate entry from the same callback batch.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Debug, Default)]
pub struct RevealLedger {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealLedger {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self { threshold, revealed: vec![false; count] }
    }

    /// Handle an intersection report for element `index`.
    ///
    /// Returns `true` exactly once per element: the first time it is seen
    /// intersecting with at least `threshold` of its area visible. The
    /// browser also reports the moment an element starts intersecting, at
    /// whatever ratio that is. Out-of-range indices never reveal.
    pub fn observe(&mut self, index: usize, intersecting: bool, ratio: f64) -> bool {
        if !intersecting || ratio < self.threshold {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    /// Mark every element revealed (reduced-motion path). Returns how many
    /// were newly revealed.
    pub fn reveal_all(&mut self) -> usize {
        let fresh = self.revealed.iter().filter(|seen| !**seen).count();
        self.revealed.fill(true);
        fresh
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|seen| !**seen).count()
    }
}
