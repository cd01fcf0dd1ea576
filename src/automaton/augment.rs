//! Failure- and output-link computation (classic Aho-Corasick, BFS).

use std::collections::VecDeque;

use crate::automaton::trie::{NodeId, ROOT_NODE, Trie};
use crate::automaton::types::{Automaton, ROOT_INDEX};

/// Fill `failurelink` and `output` for every non-root state.
///
/// Breadth-first order guarantees a node is processed only after its
/// parent's failure link is known, and that a failure target (always of
/// strictly smaller depth) already carries its own output link when it is
/// inherited.
pub(crate) fn augment(trie: &mut Trie, automaton: &mut Automaton) {
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    // Depth-1 nodes fail to the root.
    let root_children = trie.nodes[ROOT_NODE].children.clone();
    for child in root_children {
        trie.nodes[child].failure = ROOT_NODE;
        automaton.failurelink[trie.nodes[child].state] = ROOT_INDEX as i32;
        queue.push_back(child);
    }

    while let Some(node) = queue.pop_front() {
        let children = trie.nodes[node].children.clone();
        for child in children {
            let code = trie.nodes[child].code;

            let link = find_failure(trie, node, code);
            trie.nodes[child].failure = link;
            automaton.failurelink[trie.nodes[child].state] = trie.nodes[link].state as i32;

            let output = if trie.nodes[link].pattern {
                Some(link)
            } else {
                trie.nodes[link].output
            };
            trie.nodes[child].output = output;
            if let Some(out) = output {
                automaton.output[trie.nodes[child].state] = trie.nodes[out].state as i32;
            }

            queue.push_back(child);
        }
    }
}

/// Failure target for the child of `node` along `code`: look the code up
/// among the children of `node`'s failure node, walking further up the
/// failure chain until a match or the root. Iterative; bounded by the
/// depth of `node`.
fn find_failure(trie: &Trie, node: NodeId, code: u8) -> NodeId {
    let mut current = node;
    loop {
        let link = trie.nodes[current].failure;
        if let Some(target) = trie.child(link, code) {
            return target;
        }
        if link == ROOT_NODE {
            return ROOT_NODE;
        }
        current = link;
    }
}
