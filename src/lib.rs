//! # KWX - Compact Keyword Search Engine
//!
//! KWX builds a compact Aho-Corasick automaton over a set of keywords and
//! scans arbitrary text in a single left-to-right pass, reporting every
//! keyword occurrence - overlapping and nested occurrences included. The
//! automaton lives in five parallel integer arrays (a double-array trie
//! plus failure and output links), so it serializes into a handful of
//! hex-encoded blocks and reloads without rebuilding.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`builder`] - Keyword staging and the build pipeline
//!   (trie -> double-array encoding -> failure/output links)
//! - [`automaton`] - The immutable automaton: search, serialization,
//!   import validation, statistics
//! - [`error`] - Deserialization and persistence error types
//! - [`utils`] - Hex and fixed-width integer encoding helpers
//!
//! ## Quick Start
//!
//! ```
//! use kwx::{Automaton, Builder};
//!
//! let mut builder = Builder::new();
//! builder.add("oars");
//! builder.add("soar");
//! let automaton = builder.build();
//!
//! assert_eq!(automaton.search("soars"), vec!["oars", "soar"]);
//!
//! // Persist and reload without rebuilding
//! let record = automaton.export();
//! let restored = Automaton::import(&record).unwrap();
//! assert_eq!(restored.search("soars"), automaton.search("soars"));
//! ```
//!
//! ## Concurrency
//!
//! Building is synchronous and single-threaded. A built [`Automaton`] is
//! immutable - searching keeps all mutable state local to the call - so a
//! single instance can be shared across any number of threads without
//! locking. Replacing an automaton is a wholesale swap, never an in-place
//! mutation.

pub mod automaton;
pub mod builder;
pub mod error;
pub mod utils;

pub use automaton::{Automaton, AutomatonStats, SerializedAutomaton};
pub use builder::Builder;
pub use error::{KwxError, Result};
