//! The double-array Aho-Corasick automaton: construction internals,
//! search, serialization, validation, and statistics.

pub(crate) mod augment;
pub(crate) mod encode;
mod search;
pub mod serialize;
pub mod stats;
pub(crate) mod trie;
pub mod types;
pub mod validation;

pub use serialize::SerializedAutomaton;
pub use stats::AutomatonStats;
pub use types::{Automaton, ROOT_INDEX, StateIndex};
pub use validation::{ValidationReport, validate_automaton};
