//! Reveal-on-scroll bookkeeping. Elements are identified by their slot in the
//! list collected at startup.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for each visibility notification; `true` means "reveal now".
    /// Later notifications for an already revealed slot are ignored.
    pub fn observe(&mut self, slot: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(slot)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, slot: usize) -> bool {
        self.revealed.contains(&slot)
    }

    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_slot_reveals_once() {
        let mut t = RevealTracker::new();
        assert!(!t.observe(0, false));
        assert!(t.observe(0, true));
        assert!(!t.observe(0, true));
        assert!(t.observe(3, true));
        assert!(t.is_revealed(3) && !t.is_revealed(1));
        assert_eq!(t.revealed_count(), 2);
    }
}
