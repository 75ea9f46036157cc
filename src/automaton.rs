//! The finalized, immutable Aho-Corasick automaton and its matching driver.

use crate::store::{enc, DoubleArrayStore, EMPTY, ROOT};

/// A finalized double-array Aho-Corasick automaton.
///
/// An `Automaton` is built with [`Builder::build`][crate::Builder::build] or
/// loaded from a previously saved one with [`Automaton::load`]. It is
/// read-only: every method takes `&self`, so a single automaton can be
/// shared across threads and matched against many inputs concurrently.
#[derive(Clone, Debug)]
pub struct Automaton {
    pub(crate) base: Vec<i64>,
    pub(crate) check: Vec<i64>,
    pub(crate) dict: Vec<i64>,
    pub(crate) fail: Vec<i64>,
    pub(crate) suff: Vec<i64>,
}

/// A single pattern occurrence found by [`Automaton::match_all`] or
/// [`Automaton::match_first`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Match {
    position: u64,
    length: u64,
}

impl Match {
    #[inline]
    fn new(position: i64, length: i64) -> Self {
        Self {
            position: position as u64,
            length: length as u64,
        }
    }

    /// The zero-based byte offset of the match's first byte.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// An alias for [`Match::position`].
    #[inline]
    pub fn start(&self) -> u64 {
        self.position
    }

    /// The length in bytes of the matched pattern.
    #[inline]
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Returns true if and only if this match is empty.
    ///
    /// Since [`crate::Builder::insert`] rejects empty patterns, this is
    /// always false for matches produced by this crate, but the accessor is
    /// provided for symmetry with [`Match::len`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The exclusive end offset of the match.
    #[inline]
    pub fn end(&self) -> u64 {
        self.position + self.length
    }

    /// Recovers the matched sub-slice of `input`.
    ///
    /// `input` must be the same byte sequence (or a sequence with the same
    /// bytes in the matched range) that was passed to [`Automaton::match_all`]
    /// or [`Automaton::match_first`].
    #[inline]
    pub fn as_slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.position as usize..self.end() as usize]
    }
}

impl Automaton {
    /// Lifts a finished trie into a full Aho-Corasick automaton by computing
    /// fail links and dictionary-suffix links over every reachable state.
    pub(crate) fn finalize(store: DoubleArrayStore) -> Self {
        let n = store.len();
        let DoubleArrayStore { base, check, dict } = store;

        let mut fail = vec![EMPTY; n];
        fail[ROOT as usize] = ROOT;

        let mut automaton = Automaton {
            base,
            check,
            dict,
            fail,
            suff: vec![EMPTY; n],
        };

        for s in 0..n as i64 {
            automaton.compute_fail_link(s);
        }
        for s in 0..n as i64 {
            automaton.compute_suff_link(s);
        }

        automaton
    }

    /// Computes `fail[s]`, memoized so that a state's fail link is computed
    /// at most once regardless of visitation order.
    fn compute_fail_link(&mut self, s: i64) {
        if self.fail[s as usize] != EMPTY {
            return;
        }

        let p = self.check[s as usize];
        if p == EMPTY || p == s {
            // Unused cell, or the self-loop that only the root can have.
            return;
        }

        self.compute_fail_link(p);
        let c = s - self.base[p as usize];

        if p == ROOT {
            self.fail[s as usize] = ROOT;
            return;
        }

        let mut f = self.fail[p as usize];
        while f > 0 {
            if let Some(t) = self.goto(f, c) {
                self.fail[s as usize] = t;
                return;
            }
            self.compute_fail_link(f);
            f = self.fail[f as usize];
        }

        self.fail[s as usize] = self.goto(ROOT, c).unwrap_or(ROOT);
    }

    /// Computes `suff[s]`: the nearest proper fail-ancestor of `s` that is a
    /// dictionary state, or leaves it `EMPTY` if none exists.
    fn compute_suff_link(&mut self, s: i64) {
        let mut f = self.fail[s as usize];
        while f > 0 {
            if self.dict[f as usize] > 0 {
                self.suff[s as usize] = f;
                return;
            }
            f = self.fail[f as usize];
        }
    }

    #[inline]
    fn goto(&self, s: i64, k: i64) -> Option<i64> {
        let t = self.base[s as usize] + k;
        if t >= 0 && (t as usize) < self.check.len() && self.check[t as usize] == s {
            Some(t)
        } else {
            None
        }
    }

    #[inline]
    fn has_transition(&self, s: i64, c: u8) -> Option<i64> {
        self.goto(s, enc(c))
    }

    /// Lists every `(byte, target state)` pair that `s` transitions on.
    pub(crate) fn children(&self, s: i64) -> Vec<(u8, i64)> {
        let mut out = Vec::new();
        for c in 0u8..=255 {
            if let Some(t) = self.has_transition(s, c) {
                out.push((c, t));
            }
        }
        out
    }

    /// The number of states in the automaton, including the root.
    pub(crate) fn num_states(&self) -> usize {
        self.base.len()
    }

    /// The number of patterns stored in the automaton, i.e. the number of
    /// states with a positive dictionary marker.
    #[inline]
    pub fn num_patterns(&self) -> usize {
        self.dict.iter().filter(|&&d| d > 0).count()
    }

    /// The goto-fail composition: the next state for the current state `s`
    /// and input byte `c`.
    #[inline]
    fn step(&self, s: i64, c: u8) -> i64 {
        if let Some(t) = self.has_transition(s, c) {
            return t;
        }

        let mut f = self.fail[s as usize];
        while f > 0 {
            if let Some(t) = self.has_transition(f, c) {
                return t;
            }
            f = self.fail[f as usize];
        }

        self.has_transition(ROOT, c).unwrap_or(ROOT)
    }

    /// Finds every occurrence of every pattern in `input`.
    ///
    /// Matches are overlap-inclusive: every pattern occurrence is reported,
    /// even when it overlaps another. At a given end position, the direct
    /// terminal is emitted before the dictionary-suffix chain, longest to
    /// shortest.
    pub fn match_all(&self, input: &[u8]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut s = ROOT;

        for (i, &c) in input.iter().enumerate() {
            s = self.step(s, c);
            let end = i as i64 + 1;

            if self.dict[s as usize] > 0 {
                let len = self.dict[s as usize];
                matches.push(Match::new(end - len, len));
            }

            let mut f = self.suff[s as usize];
            while f != EMPTY {
                let len = self.dict[f as usize];
                matches.push(Match::new(end - len, len));
                f = self.suff[f as usize];
            }
        }

        matches
    }

    /// Finds the first match in `input`, scanning left to right, or `None`
    /// if no pattern occurs.
    ///
    /// This is the first emission that [`Automaton::match_all`] would
    /// produce, i.e. whichever of the direct terminal or its dictionary
    /// suffixes comes first at the earliest matching position.
    pub fn match_first(&self, input: &[u8]) -> Option<Match> {
        let mut s = ROOT;

        for (i, &c) in input.iter().enumerate() {
            s = self.step(s, c);
            let end = i as i64 + 1;

            if self.dict[s as usize] > 0 {
                let len = self.dict[s as usize];
                return Some(Match::new(end - len, len));
            }

            let f = self.suff[s as usize];
            if f != EMPTY {
                let len = self.dict[f as usize];
                return Some(Match::new(end - len, len));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::builder::Builder;
    use crate::store::{EMPTY, ROOT};

    fn pattern_set() -> impl Strategy<Value = Vec<Vec<u8>>> {
        prop::collection::vec(prop::collection::vec(any::<u8>(), 1..6), 1..12)
    }

    proptest! {
        /// Property 6: no non-root state fails to itself, and every fail
        /// chain reaches the root in a bounded number of steps.
        #[test]
        fn fail_chains_terminate_at_root(patterns in pattern_set()) {
            let mut b = Builder::new();
            b.insert_all(patterns.iter()).unwrap();
            let ac = b.build();

            for s in 1..ac.num_states() as i64 {
                if ac.check[s as usize] == EMPTY {
                    continue;
                }
                prop_assert_ne!(ac.fail[s as usize], s);

                let mut f = ac.fail[s as usize];
                let mut steps: usize = 0;
                while f != ROOT {
                    prop_assert!(steps < ac.num_states(), "fail chain from {} never reached root", s);
                    f = ac.fail[f as usize];
                    steps += 1;
                }
            }
        }
    }
}
