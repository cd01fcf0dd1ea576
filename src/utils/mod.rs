//! Shared encoding utilities.
//!
//! - [`encoding`] - hex and fixed-width 32-bit little-endian conversion
//!   used by the automaton serializer

pub mod encoding;

pub use encoding::*;
