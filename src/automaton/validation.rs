//! Structural validation for untrusted automaton arrays.
//!
//! A freshly built automaton satisfies these invariants by construction;
//! a deserialized one may not. Import runs every check below and rejects
//! the arrays on any violation, so search itself can stay free of
//! defensive code.

use crate::automaton::types::{Automaton, ROOT_INDEX, StateIndex};

/// Outcome of validating a decoded automaton.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Every invariant violation found, in slot order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate the five state arrays against the automaton's invariants:
///
/// 1. sentinel and root conventions (slot 0 empty, root parentless with a
///    positive child offset and no failure/output data),
/// 2. every occupied slot's parent chain reaches the root without cycles,
///    and its `codemap` entry is consistent with the parent's base,
/// 3. failure links land on occupied states of strictly smaller depth,
/// 4. output links land on occupied pattern states of strictly smaller
///    depth,
/// 5. unoccupied slots carry no data at all.
pub fn validate_automaton(automaton: &Automaton) -> ValidationReport {
    let mut report = ValidationReport::default();
    let len = automaton.len();

    if len <= ROOT_INDEX {
        report.errors.push("missing root state".to_string());
        return report;
    }

    if automaton.base[0] != 0 || automaton.check[0] != 0 {
        report.errors.push("sentinel slot 0 must be empty".to_string());
    }
    if automaton.check[ROOT_INDEX] != 0 {
        report.errors.push("root must not have a parent".to_string());
    }
    if automaton.base[ROOT_INDEX] < 1 {
        report
            .errors
            .push("root base must be a positive offset".to_string());
    }
    if automaton.codemap[ROOT_INDEX] != 0
        || automaton.failurelink[ROOT_INDEX] != 0
        || automaton.output[ROOT_INDEX] != 0
    {
        report
            .errors
            .push("root slot must not carry edge or link data".to_string());
    }

    // Depths double as the cycle/termination proof for parent chains.
    let mut depths: Vec<Option<u32>> = vec![None; len];
    depths[ROOT_INDEX] = Some(0);

    for slot in ROOT_INDEX + 1..len {
        if automaton.check[slot] == 0 {
            if automaton.base[slot] != 0
                || automaton.codemap[slot] != 0
                || automaton.failurelink[slot] != 0
                || automaton.output[slot] != 0
            {
                report
                    .errors
                    .push(format!("unoccupied slot {slot} carries data"));
            }
            continue;
        }

        let Some(depth) = resolve_depth(automaton, &mut depths, slot, &mut report) else {
            continue;
        };

        let parent = automaton.check[slot] as StateIndex;
        let code = automaton.codemap[slot];
        if !(0..=255).contains(&code) {
            report
                .errors
                .push(format!("slot {slot} has out-of-range edge code {code}"));
        } else if automaton.base[parent] == 0 {
            report
                .errors
                .push(format!("slot {slot} hangs off parent {parent} with no child offset"));
        } else if automaton.abs_base(parent) + code as usize != slot {
            report.errors.push(format!(
                "slot {slot} is inconsistent with parent {parent}'s base and its edge code {code}"
            ));
        }

        let failure = automaton.failurelink[slot];
        if failure < ROOT_INDEX as i32 || failure as usize >= len || !occupied(automaton, failure as StateIndex) {
            report
                .errors
                .push(format!("slot {slot} has invalid failure link {failure}"));
        } else if let Some(failure_depth) =
            resolve_depth(automaton, &mut depths, failure as StateIndex, &mut report)
            && failure_depth >= depth
        {
            report
                .errors
                .push(format!("slot {slot}'s failure link does not decrease depth"));
        }

        let output = automaton.output[slot];
        if output != 0 {
            if output < 0 || output as usize >= len || !occupied(automaton, output as StateIndex) {
                report
                    .errors
                    .push(format!("slot {slot} has invalid output link {output}"));
            } else if output as StateIndex == ROOT_INDEX
                || !automaton.is_pattern(output as StateIndex)
            {
                report.errors.push(format!(
                    "slot {slot}'s output link {output} is not a pattern state"
                ));
            } else if let Some(output_depth) =
                resolve_depth(automaton, &mut depths, output as StateIndex, &mut report)
                && output_depth >= depth
            {
                report
                    .errors
                    .push(format!("slot {slot}'s output link does not decrease depth"));
            }
        }
    }

    report
}

#[inline]
fn occupied(automaton: &Automaton, slot: StateIndex) -> bool {
    slot == ROOT_INDEX || automaton.check[slot] != 0
}

/// Depth of `slot` via its parent chain, memoized. Returns `None` (and
/// records the error once) when the chain leaves the arrays, hits an
/// unoccupied slot, or cycles.
fn resolve_depth(
    automaton: &Automaton,
    depths: &mut [Option<u32>],
    slot: StateIndex,
    report: &mut ValidationReport,
) -> Option<u32> {
    let len = automaton.len();
    let mut path = Vec::new();
    let mut current = slot;
    loop {
        if let Some(base_depth) = depths[current] {
            let mut depth = base_depth;
            for &ancestor in path.iter().rev() {
                depth += 1;
                depths[ancestor] = Some(depth);
            }
            return depths[slot];
        }
        path.push(current);
        if path.len() > len {
            report
                .errors
                .push(format!("slot {slot} has a cyclic parent chain"));
            return None;
        }
        let parent = automaton.check[current];
        if parent <= 0 || parent as usize >= len {
            report
                .errors
                .push(format!("slot {slot} has a broken parent chain"));
            return None;
        }
        current = parent as StateIndex;
    }
}
