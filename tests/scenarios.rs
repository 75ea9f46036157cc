//! The concrete end-to-end scenarios from the design specification.

use daac::Builder;

fn build(patterns: &[&str]) -> daac::Automaton {
    let mut b = Builder::new();
    b.insert_all(patterns.iter().copied()).unwrap();
    b.build()
}

fn matches(ac: &daac::Automaton, input: &[u8]) -> Vec<(u64, u64)> {
    ac.match_all(input)
        .into_iter()
        .map(|m| (m.position(), m.len()))
        .collect()
}

#[test]
fn wikipedia_example() {
    let ac = build(&["a", "ab", "bab", "bc", "bca", "c", "caa"]);
    let got = matches(&ac, b"abccab");
    assert_eq!(
        got,
        vec![(0, 1), (0, 2), (1, 2), (2, 1), (3, 1), (4, 1), (4, 2)]
    );
}

#[test]
fn classic_hershey() {
    let ac = build(&["he", "she", "his", "hers"]);
    let got = matches(&ac, b"I have never tasted a hershey bar.");
    assert_eq!(got, vec![(22, 2), (22, 4), (25, 3), (26, 2)]);
}

#[test]
fn zero_bytes() {
    let ac = build(&["\x00\x00"]);
    let input = b"\x00\x00Aho\x00\x00-\x00\x00Corasick\x00\x00";
    let got: Vec<u64> = matches(&ac, input).into_iter().map(|(pos, _)| pos).collect();
    assert_eq!(got, vec![0, 5, 8, 18]);
}

#[test]
fn high_byte_boundary() {
    let mut b = Builder::new();
    b.insert(&[0xff, 0xff]).unwrap();
    let ac = b.build();

    let input: Vec<u8> = {
        let mut v = vec![0xff, 0xff];
        v.extend_from_slice(b"Aho");
        v.extend_from_slice(&[0xfe, 0xfe]);
        v.push(b'-');
        v.extend_from_slice(&[0xff, 0xff]);
        v.extend_from_slice(b"Corasick");
        v.extend_from_slice(&[0xff, 0xff, 0xff]);
        v
    };

    let got: Vec<u64> = matches(&ac, &input).into_iter().map(|(pos, _)| pos).collect();
    assert_eq!(got, vec![0, 8, 18, 19]);
}

#[test]
fn overlapping_patterns() {
    let ac = build(&["Aho-Co", "ho-Cora", "o-Coras", "-Corasick"]);
    let got = matches(&ac, b"Aho-Corasick");
    assert_eq!(got, vec![(0, 6), (1, 7), (2, 7), (3, 9)]);
}

#[test]
fn single_symbol_multi_occurrence() {
    let ac = build(&["o"]);
    let got = matches(&ac, b"Aho-Corasick");
    assert_eq!(got, vec![(2, 1), (5, 1)]);
}
