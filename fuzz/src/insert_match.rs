#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<Vec<u8>>, Vec<u8>)| {
    let (patterns, input) = data;

    let mut builder = daac::Builder::new();
    let mut inserted = Vec::new();
    for pattern in patterns {
        if pattern.is_empty() {
            continue;
        }
        if builder.insert(&pattern).is_ok() {
            inserted.push(pattern);
        }
    }

    let ac = builder.build();

    for m in ac.match_all(&input) {
        let got = m.as_slice(&input);
        assert!(
            inserted.iter().any(|p| p.as_slice() == got),
            "match {got:?} at {} does not correspond to any inserted pattern",
            m.position(),
        );
    }
});
