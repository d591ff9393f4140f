//! Runtime diagnostics.
//!
//! There is no persistent storage on this board, so diagnostics are a
//! bounded in-memory record: the most recent actuator transitions with
//! their tick stamps, plus a lifetime switch counter.  The history is a
//! fixed-capacity ring (`heapless`, no heap) sized for a full open/close
//! cycle of every output with room to spare.

use heapless::Deque;

use crate::clock::Ticks;
use crate::signals::Actuator;

/// Ring capacity.  16 records cover three full gate reconfigurations.
pub const HISTORY_SLOTS: usize = 16;

/// One recorded actuator transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchRecord {
    pub actuator: Actuator,
    pub on: bool,
    pub at: Ticks,
}

/// Bounded history of actuator transitions.
#[derive(Default)]
pub struct SwitchHistory {
    ring: Deque<SwitchRecord, HISTORY_SLOTS>,
    total: u32,
}

impl SwitchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition, evicting the oldest entry when full.
    pub fn record(&mut self, actuator: Actuator, on: bool, at: Ticks) {
        if self.ring.is_full() {
            let _ = self.ring.pop_front();
        }
        let _ = self.ring.push_back(SwitchRecord { actuator, on, at });
        self.total = self.total.wrapping_add(1);
    }

    /// Lifetime transition count (wraps at `u32::MAX`).
    pub fn total_switches(&self) -> u32 {
        self.total
    }

    /// Oldest-first iterator over the retained records.
    pub fn recent(&self) -> impl Iterator<Item = &SwitchRecord> {
        self.ring.iter()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_bounded_by_capacity() {
        let mut history = SwitchHistory::new();
        for i in 0..(HISTORY_SLOTS as u32 + 9) {
            history.record(Actuator::MainTrunkGate, i % 2 == 0, Ticks::new(i));
        }
        assert_eq!(history.len(), HISTORY_SLOTS);
        assert_eq!(history.total_switches(), HISTORY_SLOTS as u32 + 9);
    }

    #[test]
    fn eviction_drops_oldest_first() {
        let mut history = SwitchHistory::new();
        for i in 0..(HISTORY_SLOTS as u32 + 1) {
            history.record(Actuator::CollectorMotor, true, Ticks::new(i));
        }
        let first = history.recent().next().unwrap();
        assert_eq!(first.at, Ticks::new(1));
    }

    #[test]
    fn empty_history_reports_empty() {
        let history = SwitchHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.total_switches(), 0);
    }
}
