//! Error types for automaton deserialization and persistence.
//!
//! Building an automaton and searching with one never fail; every error in
//! this crate comes from loading a serialized automaton (malformed blocks,
//! invariant violations) or from the file system.

/// Crate-wide result type defaulting to [`KwxError`].
pub type Result<T, E = KwxError> = std::result::Result<T, E>;

/// Errors surfaced by [`Automaton::import`](crate::Automaton::import) and
/// the file persistence helpers.
#[derive(Debug, thiserror::Error)]
pub enum KwxError {
    /// A serialized block could not be decoded, or the five blocks decode
    /// to differing element counts.
    #[error("invalid `{field}` block: {reason}")]
    Format {
        /// Name of the offending array field.
        field: &'static str,
        /// What went wrong while decoding.
        reason: String,
    },

    /// The decoded arrays violate the automaton's structural invariants.
    /// Searching such an automaton would be undefined, so it is rejected
    /// at import time.
    #[error("corrupt automaton: {0}")]
    Corrupt(String),

    /// File persistence failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The persisted record is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl KwxError {
    pub(crate) fn format<S>(field: &'static str, reason: S) -> Self
    where
        S: Into<String>,
    {
        Self::Format {
            field,
            reason: reason.into(),
        }
    }
}
