//! Incremental construction of a double-array Aho-Corasick automaton.
//!
//! [`Builder`] inserts patterns one byte at a time into a
//! [`DoubleArrayStore`], relocating states that collide with an existing
//! transition so that every previously-recorded transition survives the
//! move. Calling [`Builder::build`] lifts the finished trie into a full
//! Aho-Corasick automaton by computing fail links and dictionary-suffix
//! links over every reachable state.

use crate::automaton::Automaton;
use crate::error::Error;
use crate::store::{enc, DoubleArrayStore, EMPTY, ROOT};

/// Builds a [`DoubleArrayAutomaton`] (returned as [`Automaton`]) from a set of
/// byte patterns.
///
/// [`DoubleArrayAutomaton`]: crate::Automaton
#[derive(Clone, Debug, Default)]
pub struct Builder {
    store: DoubleArrayStore,
}

impl Builder {
    /// Constructs a new, empty builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            store: DoubleArrayStore::new(),
        }
    }

    /// Inserts a single pattern into the trie.
    ///
    /// # Errors
    ///
    /// Returns [`Error::empty_pattern`] if `pattern` is empty: an empty
    /// pattern would mark the root as a dictionary state, which would
    /// trivially match at every position.
    pub fn insert(&mut self, pattern: &[u8]) -> Result<(), Error> {
        if pattern.is_empty() {
            return Err(Error::empty_pattern());
        }

        let mut s = ROOT;
        for &c in pattern {
            let k = enc(c);
            let t = self.store.base[s as usize] + k;
            debug_assert!(t >= 0, "base[s] + enc(c) is always non-negative");

            if t as usize >= self.store.check.len() || self.store.check[t as usize] == EMPTY {
                // Case A: the cell is free.
                self.store.ensure_capacity(t);
                self.store.check[t as usize] = s;
                s = t;
            } else if self.store.check[t as usize] == s {
                // Case B: s already owns this cell.
                s = t;
            } else {
                // Case C: collision with some other state `o`.
                let o = self.store.check[t as usize];

                // `o` may itself have a transition into `s`. Record the
                // offset so we can recover `s`'s (possibly new) index after
                // relocating `o`.
                let oc = s - self.store.base[o as usize];
                let oc = self.store.goto(o, oc).map(|_| oc);

                self.relocate(o);

                let mut s2 = s;
                let mut t2 = t;
                if let Some(oc) = oc {
                    s2 = self.store.base[o as usize] + oc;
                    t2 = self.store.base[s2 as usize] + k;
                }

                self.store.ensure_capacity(t2);
                self.store.check[t2 as usize] = s2;
                s = t2;
            }
        }

        self.store.dict[s as usize] = pattern.len() as i64;
        Ok(())
    }

    /// Inserts every pattern yielded by `patterns`.
    pub fn insert_all<I, P>(&mut self, patterns: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        for pattern in patterns {
            self.insert(pattern.as_ref())?;
        }
        Ok(())
    }

    /// Relocates state `o` to a new `base` offset, preserving every existing
    /// incoming and outgoing transition.
    fn relocate(&mut self, o: i64) {
        let base_o = self.store.base[o as usize];

        let cs: Vec<i64> = (1i64..=256)
            .filter(|&k| self.store.goto(o, k).is_some())
            .collect();

        let b = self.find_base(&cs);

        for k in cs {
            let t_old = base_o + k;
            let t_new = b + k;

            self.store.ensure_capacity(t_new);

            self.store.check[t_new as usize] = o;
            self.store.base[t_new as usize] = self.store.base[t_old as usize];
            self.store.dict[t_new as usize] = self.store.dict[t_old as usize];

            // Rewire t_old's own children: they are the only cells whose
            // check currently points at t_old.
            let base_t_old = self.store.base[t_old as usize];
            for j in 1i64..=256 {
                let u = base_t_old + j;
                if u >= 0 && (u as usize) < self.store.check.len() && self.store.check[u as usize] == t_old {
                    self.store.check[u as usize] = t_new;
                }
            }

            self.store.check[t_old as usize] = EMPTY;
            self.store.dict[t_old as usize] = 0;
        }

        self.store.base[o as usize] = b;
    }

    /// Finds the smallest non-negative base `b` such that every offset in
    /// `cs` lands on a free or out-of-bounds cell.
    fn find_base(&self, cs: &[i64]) -> i64 {
        let mut b = 0i64;
        loop {
            let fits = cs.iter().all(|&k| {
                let t = b + k;
                t as usize >= self.store.check.len() || self.store.check[t as usize] == EMPTY
            });
            if fits {
                return b;
            }
            b += 1;
        }
    }

    /// Consumes the builder, computing fail links and dictionary-suffix
    /// links over every reachable state, and returns the finalized,
    /// immutable automaton.
    pub fn build(self) -> Automaton {
        Automaton::finalize(self.store)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn pattern_set() -> impl Strategy<Value = Vec<Vec<u8>>> {
        prop::collection::vec(prop::collection::vec(any::<u8>(), 1..6), 1..12)
    }

    proptest! {
        /// Property 2: every owned cell `t` sits at a valid alphabet offset
        /// from its parent's `base`, i.e. `t - base[check[t]]` is a real
        /// alphabet index (`1..=256`) and not an artifact of a relocation
        /// gone wrong.
        #[test]
        fn check_entries_are_parent_child_consistent(patterns in pattern_set()) {
            let mut b = Builder::new();
            b.insert_all(patterns.iter()).unwrap();

            for t in 1..b.store.len() as i64 {
                let p = b.store.check[t as usize];
                if p == EMPTY {
                    continue;
                }
                let k = t - b.store.base[p as usize];
                prop_assert!((1..=256).contains(&k));
                prop_assert_eq!(b.store.base[p as usize] + k, t);
            }
        }
    }
}
