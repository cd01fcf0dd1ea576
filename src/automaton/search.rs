//! Single-pass keyword search over a built automaton.

use std::collections::BTreeSet;

use crate::automaton::types::{Automaton, ROOT_INDEX, StateIndex};

impl Automaton {
    /// Scan `text` once, left to right, and return every keyword that
    /// occurs in it - including overlapping and nested occurrences -
    /// deduplicated and sorted.
    ///
    /// Matching is over raw UTF-8 bytes; the scan is amortized linear in
    /// the text length and never fails. All mutable state lives in the
    /// call, so one automaton can serve any number of concurrent callers.
    pub fn search(&self, text: &str) -> Vec<String> {
        if self.len() <= ROOT_INDEX {
            return Vec::new();
        }

        let mut found: BTreeSet<Vec<u8>> = BTreeSet::new();
        let mut state = ROOT_INDEX;

        for &code in text.as_bytes() {
            state = match self.transition(state, code) {
                Some(next) => next,
                None => self.next_via_failure(state, code),
            };

            // The state's own keyword: negative base, or an occupied slot
            // whose base never got assigned (terminal leaf).
            if self.is_pattern(state) {
                found.insert(self.pattern_bytes(state));
            }

            // Keywords ending here as suffixes of the current path.
            if state != ROOT_INDEX {
                let mut link = self.output[state];
                while link != 0 {
                    found.insert(self.pattern_bytes(link as StateIndex));
                    link = self.output[link as StateIndex];
                }
            }
        }

        found
            .into_iter()
            .map(|codes| String::from_utf8_lossy(&codes).into_owned())
            .collect()
    }

    /// Resolve a mismatch by walking the failure chain until some
    /// ancestor state accepts `code`; the root absorbs anything it cannot
    /// match by looping on itself.
    fn next_via_failure(&self, mut state: StateIndex, code: u8) -> StateIndex {
        loop {
            let link = match self.failurelink[state] {
                0 => ROOT_INDEX,
                f => f as StateIndex,
            };
            if let Some(target) = self.transition(link, code) {
                return target;
            }
            if state == ROOT_INDEX {
                return ROOT_INDEX;
            }
            state = link;
        }
    }
}
