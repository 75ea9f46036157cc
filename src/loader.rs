//! Reading patterns out of a plain-text pattern file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Reads newline-delimited patterns from a text file, one pattern per line.
///
/// Each line has leading and trailing whitespace trimmed before being
/// turned into a pattern.
pub fn load_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, Error> {
    let f = File::open(path)?;
    let reader = BufReader::new(f);

    let mut patterns = Vec::new();
    for line in reader.lines() {
        patterns.push(line?.trim().as_bytes().to_vec());
    }
    Ok(patterns)
}
