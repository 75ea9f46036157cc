//! A multi-pattern byte-string matcher for Rust, built on a double-array
//! Aho-Corasick automaton.
//!
//! # Overview
//!
//! Given a finite set of byte patterns, [`Builder`] constructs a
//! deterministic finite automaton — backed by a double-array trie rather
//! than a hash map or a dense per-state transition table — augmented with
//! failure and dictionary-suffix links. The resulting [`Automaton`] then
//! scans an input byte sequence once, reporting every occurrence of every
//! pattern, including overlapping ones.
//!
//! - Patterns are arbitrary byte strings; the alphabet is the full 256 byte
//!   values, not Unicode code points.
//! - Matching is a single linear scan of the input plus the time spent
//!   emitting matches.
//! - A built automaton is immutable and `Send + Sync`: share one across
//!   threads and match distinct inputs concurrently.
//! - Automatons can be saved to and loaded from a compact binary format
//!   without recomputing fail links, and exported as a DOT graph for
//!   debugging.
//!
//! # Getting started
//!
//! ```
//! let mut builder = daac::Builder::new();
//! builder.insert_all(["he", "she", "his", "hers"]).unwrap();
//! let ac = builder.build();
//!
//! let matches: Vec<_> = ac
//!     .match_all(b"I have never tasted a hershey bar.")
//!     .into_iter()
//!     .map(|m| (m.position(), m.len()))
//!     .collect();
//!
//! assert_eq!(matches, vec![(22, 2), (22, 4), (25, 3), (26, 2)]);
//! ```
//!
//! # Non-goals
//!
//! This crate does not support incremental deletion of patterns,
//! case-insensitive or Unicode-aware matching, regular-expression semantics,
//! concurrent mutation of a trie under construction, or streaming match
//! reporting with suspension — matches are always produced eagerly by
//! [`Automaton::match_all`] or [`Automaton::match_first`].

#![deny(unsafe_op_in_unsafe_fn)]

mod automaton;
mod builder;
mod dot;
mod error;
mod loader;
mod persist;
mod store;

pub use crate::automaton::{Automaton, Match};
pub use crate::builder::Builder;
pub use crate::error::Error;
pub use crate::loader::load_patterns;

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;
