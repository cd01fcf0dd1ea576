//! Automaton serialization: fixed-width binary blocks, hex transport
//! encoding, and JSON file persistence.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::automaton::types::Automaton;
use crate::automaton::validation::validate_automaton;
use crate::error::{KwxError, Result};
use crate::utils::{bytes_to_int32s, decode_hex, encode_hex, int32s_to_bytes};

/// Transport form of an automaton: one hex string per state array.
///
/// Each block is the little-endian encoding of 32-bit signed elements;
/// all five blocks carry the same element count. The record has no
/// version or checksum field; [`Automaton::import`] instead validates the
/// decoded arrays structurally before accepting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedAutomaton {
    pub base: String,
    pub check: String,
    pub codemap: String,
    pub failurelink: String,
    pub output: String,
}

impl Automaton {
    /// Serialize into five hex-encoded blocks.
    pub fn export(&self) -> SerializedAutomaton {
        SerializedAutomaton {
            base: encode_hex(&int32s_to_bytes(&self.base)),
            check: encode_hex(&int32s_to_bytes(&self.check)),
            codemap: encode_hex(&int32s_to_bytes(&self.codemap)),
            failurelink: encode_hex(&int32s_to_bytes(&self.failurelink)),
            output: encode_hex(&int32s_to_bytes(&self.output)),
        }
    }

    /// Inverse of [`export`](Self::export).
    ///
    /// Rejects records whose blocks fail to decode or decode to differing
    /// element counts ([`KwxError::Format`]), and records whose arrays
    /// violate the structural invariants ([`KwxError::Corrupt`]) - a
    /// tampered automaton is refused here rather than misbehaving during
    /// search.
    pub fn import(record: &SerializedAutomaton) -> Result<Self> {
        let base = decode_block("base", &record.base)?;
        let check = decode_block("check", &record.check)?;
        let codemap = decode_block("codemap", &record.codemap)?;
        let failurelink = decode_block("failurelink", &record.failurelink)?;
        let output = decode_block("output", &record.output)?;

        let expected = base.len();
        for (field, len) in [
            ("check", check.len()),
            ("codemap", codemap.len()),
            ("failurelink", failurelink.len()),
            ("output", output.len()),
        ] {
            if len != expected {
                return Err(KwxError::format(
                    field,
                    format!("expected {expected} elements, found {len}"),
                ));
            }
        }

        let automaton = Self {
            base,
            check,
            codemap,
            failurelink,
            output,
        };

        let report = validate_automaton(&automaton);
        if !report.is_valid() {
            return Err(KwxError::Corrupt(report.errors.join("; ")));
        }

        Ok(automaton)
    }

    /// Persist the exported record as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), &self.export())?;
        Ok(())
    }

    /// Load a previously saved record, running full import validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let record: SerializedAutomaton = serde_json::from_reader(BufReader::new(file))?;
        Self::import(&record)
    }
}

fn decode_block(field: &'static str, hex: &str) -> Result<Vec<i32>> {
    let bytes = decode_hex(hex).map_err(|reason| KwxError::format(field, reason))?;
    bytes_to_int32s(&bytes).map_err(|reason| KwxError::format(field, reason))
}
