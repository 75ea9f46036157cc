//! The raw double-array storage backing a trie under construction.
//!
//! A [`DoubleArrayStore`] owns three parallel arrays (`base`, `check`, `dict`)
//! indexed by state. It knows nothing about patterns, fail links, or
//! dictionary-suffix links — it only provides the primitive operations needed
//! to allocate states and probe/record transitions. [`crate::builder::Builder`]
//! is the only thing that mutates it.

/// The sentinel value for an unused `check` cell.
pub(crate) const EMPTY: i64 = -1;

/// The root state always has this index.
pub(crate) const ROOT: i64 = 0;

/// Maps a byte to its positive alphabet index.
///
/// The `+1` offset means the byte `0x00` still produces a non-zero offset
/// from `base`, so `base[s] == 0` can mean "no children yet" without
/// colliding with a real transition at offset 0.
#[inline(always)]
pub(crate) fn enc(c: u8) -> i64 {
    i64::from(c) + 1
}

/// The raw column storage for a trie under construction.
///
/// For every state `s` and byte `c`, the transition `s --c--> t` exists if
/// and only if `t = base[s] + enc(c)`, `t` is within bounds, and
/// `check[t] == s`. `check[t] == EMPTY` marks a free cell.
#[derive(Clone, Debug, Default)]
pub(crate) struct DoubleArrayStore {
    pub(crate) base: Vec<i64>,
    pub(crate) check: Vec<i64>,
    pub(crate) dict: Vec<i64>,
}

impl DoubleArrayStore {
    /// Creates a store containing only the root state.
    pub(crate) fn new() -> Self {
        let mut store = Self {
            base: Vec::new(),
            check: Vec::new(),
            dict: Vec::new(),
        };
        let root = store.new_state();
        debug_assert_eq!(root, ROOT);
        store
    }

    /// The number of states currently allocated.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.base.len()
    }

    /// Allocates a new, empty state and returns its index.
    pub(crate) fn new_state(&mut self) -> i64 {
        let id = self.base.len() as i64;
        self.base.push(0);
        self.check.push(EMPTY);
        self.dict.push(0);
        id
    }

    /// Ensures that state `idx` exists, allocating states up to it if
    /// necessary.
    pub(crate) fn ensure_capacity(&mut self, idx: i64) {
        while (self.base.len() as i64) <= idx {
            self.new_state();
        }
    }

    /// Returns the target state of the transition `s --c-->` if it exists.
    #[inline]
    pub(crate) fn has_transition(&self, s: i64, c: u8) -> Option<i64> {
        self.goto(s, enc(c))
    }

    /// Returns the target state of the transition out of `s` at alphabet
    /// index `k` (`1..=256`), if it exists.
    #[inline]
    pub(crate) fn goto(&self, s: i64, k: i64) -> Option<i64> {
        let t = self.base[s as usize] + k;
        if t >= 0 && (t as usize) < self.check.len() && self.check[t as usize] == s {
            Some(t)
        } else {
            None
        }
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
}
