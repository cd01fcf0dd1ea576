#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<String>, String)| {
    let (keywords, text) = input;

    // Build + search over arbitrary keyword sets and text: every reported
    // match must be an added keyword and a substring of the text.
    let builder = kwx::Builder::with_keywords(keywords.iter().cloned());
    let automaton = builder.build();

    for matched in automaton.search(&text) {
        assert!(keywords.iter().any(|k| k == &matched));
        assert!(text.contains(matched.as_str()));
    }
});
