//! Keyword staging and the build pipeline.

use crate::automaton::augment::augment;
use crate::automaton::encode::encode;
use crate::automaton::trie::Trie;
use crate::automaton::types::Automaton;

/// Stages keywords and builds an immutable [`Automaton`] from them.
///
/// Building runs trie construction, double-array encoding, and
/// failure/output-link augmentation in one synchronous pass. It cannot
/// fail: an empty keyword set just yields a root-only automaton that
/// matches nothing. Calling [`build`](Self::build) again without adding
/// keywords re-runs the pipeline and yields an identical automaton.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    keywords: Vec<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-loaded with `keywords`.
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = Self::new();
        for keyword in keywords {
            builder.add(keyword);
        }
        builder
    }

    /// Stage a keyword. Empty keywords are ignored; anything else is
    /// accepted as-is, duplicates included.
    pub fn add(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if !keyword.is_empty() {
            self.keywords.push(keyword);
        }
    }

    /// Number of staged keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Run the full build: sort the staged keywords' byte sequences
    /// (children must accumulate in ascending code order), grow the trie,
    /// encode it into the double arrays, and wire failure/output links.
    pub fn build(&self) -> Automaton {
        let mut keys: Vec<Vec<u8>> = self
            .keywords
            .iter()
            .map(|keyword| keyword.as_bytes().to_vec())
            .collect();
        keys.sort_unstable();

        let mut trie = Trie::from_sorted_keys(&keys);
        let mut automaton = Automaton::default();
        encode(&mut trie, &mut automaton);
        augment(&mut trie, &mut automaton);
        automaton
    }
}
