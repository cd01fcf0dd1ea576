#![no_main]

use kwx::{Automaton, SerializedAutomaton};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|blocks: (String, String, String, String, String)| {
    let record = SerializedAutomaton {
        base: blocks.0,
        check: blocks.1,
        codemap: blocks.2,
        failurelink: blocks.3,
        output: blocks.4,
    };

    // Import must reject malformed records with an error, never panic;
    // anything it accepts must be searchable.
    if let Ok(automaton) = Automaton::import(&record) {
        let _ = automaton.search("the quick brown fox");
    }
});
