//! Double-array encoding: assign every trie node a state index and fill
//! `base`, `check`, and `codemap`.

use crate::automaton::trie::{NodeId, ROOT_NODE, Trie};
use crate::automaton::types::{Automaton, ROOT_INDEX, StateIndex};

/// Fraction of scanned slots that must be occupied before the allocator
/// gives up on a region and moves its cursor past it. Tuning knob with no
/// correctness impact.
const DENSITY_THRESHOLD: f64 = 0.95;

/// Finds collision-free `base` values for nodes as they are encoded.
///
/// A fresh linear scan from slot 1 for every node is correct but degrades
/// on dense arrays, so the allocator keeps a persistent cursor across
/// calls: when a scan finds the region ahead of the cursor mostly
/// occupied, the cursor jumps to the end of that scan instead of returning
/// to the first free slot. Build-time only; the cursor never appears in
/// the finished automaton.
pub(crate) struct BaseAllocator {
    position: usize,
}

impl BaseAllocator {
    pub(crate) fn new() -> Self {
        Self { position: 1 }
    }

    /// Smallest `base >= 1` such that every slot `base + code` is free.
    /// Always succeeds; the arrays grow as far as needed.
    pub(crate) fn find_base(&mut self, check: &[i32], codes: &[u8]) -> usize {
        let first = codes[0] as usize;
        let mut base = if self.position > first {
            self.position - first
        } else {
            1
        };
        let mut end = self.position;
        let mut next = self.position;
        let mut unavailable = 0usize;
        let mut advance_next = true;
        loop {
            let collides = codes
                .iter()
                .any(|&code| occupied(check, base + code as usize));
            if !collides {
                break;
            }
            if occupied(check, end) {
                unavailable += 1;
                advance_next = false;
            }
            if advance_next {
                next += 1;
            }
            end += 1;
            base += 1;
        }
        let scanned = end - self.position;
        if scanned > 0 && unavailable as f64 / scanned as f64 > DENSITY_THRESHOLD {
            self.position = end;
        } else {
            self.position = next;
        }
        base
    }
}

/// Whether `slot` is already reserved. Slots 0 (sentinel) and 1 (root)
/// are never handed out, so a NUL edge code cannot collide with them.
#[inline]
fn occupied(check: &[i32], slot: usize) -> bool {
    slot <= ROOT_INDEX || check.get(slot).is_some_and(|&parent| parent != 0)
}

/// Encode the trie into `base`/`check`/`codemap` via depth-first
/// traversal. The root is pre-assigned index 1 with `base[1] = 1`;
/// traversal order only affects array density, never correctness.
pub(crate) fn encode(trie: &mut Trie, automaton: &mut Automaton) {
    automaton.grow_to(ROOT_INDEX + 1);
    automaton.base[ROOT_INDEX] = 1;

    let mut allocator = BaseAllocator::new();
    let mut stack: Vec<(NodeId, StateIndex)> = vec![(ROOT_NODE, ROOT_INDEX)];

    while let Some((node, index)) = stack.pop() {
        trie.nodes[node].state = index;
        if trie.nodes[node].children.is_empty() {
            // Leaves keep base at 0; search infers terminality from the
            // absent base.
            continue;
        }

        let edges: Vec<(NodeId, u8)> = trie.nodes[node]
            .children
            .iter()
            .map(|&child| (child, trie.nodes[child].code))
            .collect();
        let codes: Vec<u8> = edges.iter().map(|&(_, code)| code).collect();

        let base = allocator.find_base(&automaton.check, &codes);
        automaton.base[index] = if trie.nodes[node].pattern {
            -(base as i32)
        } else {
            base as i32
        };

        for &(child, code) in &edges {
            let target = base + code as usize;
            automaton.grow_to(target + 1);
            automaton.check[target] = index as i32;
            automaton.codemap[target] = code as i32;
            stack.push((child, target));
        }
    }
}
