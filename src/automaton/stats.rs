//! Size and occupancy statistics for a built automaton.

use crate::automaton::types::{Automaton, ROOT_INDEX};

/// Summary counters for one automaton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutomatonStats {
    /// Total slots in the state arrays, occupied or not.
    pub slots: usize,
    /// Occupied states, including the root.
    pub states: usize,
    /// States ending at least one keyword.
    pub patterns: usize,
    /// Length of the longest keyword path.
    pub max_depth: usize,
    /// Occupied fraction of the arrays.
    pub occupancy: f64,
    /// Approximate heap usage in bytes.
    pub memory_usage: usize,
}

impl Automaton {
    /// Gather statistics; informational only.
    pub fn stats(&self) -> AutomatonStats {
        let slots = self.len();
        let mut states = 0;
        let mut patterns = 0;
        let mut max_depth = 0;

        if slots > ROOT_INDEX {
            states += 1; // root
            for slot in ROOT_INDEX + 1..slots {
                if self.check[slot] == 0 {
                    continue;
                }
                states += 1;
                if self.is_pattern(slot) {
                    patterns += 1;
                }
                // Depth equals the reconstructed keyword-path length,
                // bounded by the longest keyword.
                max_depth = max_depth.max(self.pattern_bytes(slot).len());
            }
        }

        AutomatonStats {
            slots,
            states,
            patterns,
            max_depth,
            occupancy: if slots > 0 {
                states as f64 / slots as f64
            } else {
                0.0
            },
            memory_usage: 5 * slots * std::mem::size_of::<i32>() + std::mem::size_of::<Self>(),
        }
    }
}
