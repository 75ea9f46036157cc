//! Binary persistence for a finalized automaton.
//!
//! The on-disk layout is a 32-bit magic number followed by the five state
//! arrays (`base`, `check`, `dict`, `fail`, `suff`), each as little-endian
//! 64-bit integers and each preceded by its own 64-bit length:
//!
//! ```text
//! magic | len(base) base[] | len(check) check[] | len(dict) dict[] | len(fail) fail[] | len(suff) suff[]
//! ```
//!
//! Loading validates the magic number and the internal consistency of the
//! arrays, and reconstructs the automaton directly without recomputing fail
//! or dictionary-suffix links.

use std::io::{self, Read, Write};

use crate::automaton::Automaton;
use crate::error::Error;
use crate::store::EMPTY;

/// The magic number ("TRIE" as ASCII, read big-endian) identifying a
/// serialized automaton.
const MAGIC: u32 = 0x4549_5254;

impl Automaton {
    /// Serializes this automaton to `writer`.
    pub fn save<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(&MAGIC.to_le_bytes())?;
        write_array(&mut writer, &self.base)?;
        write_array(&mut writer, &self.check)?;
        write_array(&mut writer, &self.dict)?;
        write_array(&mut writer, &self.fail)?;
        write_array(&mut writer, &self.suff)?;
        Ok(())
    }

    /// Deserializes an automaton previously written by [`Automaton::save`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::corrupt`][crate::Error] if the magic number doesn't
    /// match, the stream ends early, or the arrays fail an internal
    /// consistency check (e.g. a `check` entry referring to a state that
    /// doesn't exist).
    pub fn load<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut magic_bytes = [0u8; 4];
        reader.read_exact(&mut magic_bytes)?;
        let magic = u32::from_le_bytes(magic_bytes);
        if magic != MAGIC {
            return Err(Error::corrupt(format!(
                "bad magic number: 0x{magic:08x}"
            )));
        }

        let base = read_array(&mut reader)?;
        let check = read_array(&mut reader)?;
        let dict = read_array(&mut reader)?;
        let fail = read_array(&mut reader)?;
        let suff = read_array(&mut reader)?;

        let n = base.len();
        if check.len() != n || dict.len() != n || fail.len() != n || suff.len() != n {
            return Err(Error::corrupt("array length mismatch"));
        }
        if n == 0 {
            return Err(Error::corrupt("no states"));
        }

        let in_bounds = |v: i64| v == EMPTY || (v >= 0 && (v as usize) < n);
        if !check.iter().all(|&v| in_bounds(v))
            || !fail.iter().all(|&v| in_bounds(v))
            || !suff.iter().all(|&v| in_bounds(v))
        {
            return Err(Error::corrupt("a link or check entry is out of bounds"));
        }

        Ok(Automaton {
            base,
            check,
            dict,
            fail,
            suff,
        })
    }
}

fn write_array<W: Write>(writer: &mut W, arr: &[i64]) -> io::Result<()> {
    writer.write_all(&(arr.len() as u64).to_le_bytes())?;
    for &v in arr {
        writer.write_all(&v.to_le_bytes())?;
    }
    Ok(())
}

fn read_array<R: Read>(reader: &mut R) -> Result<Vec<i64>, Error> {
    let mut len_bytes = [0u8; 8];
    reader.read_exact(&mut len_bytes)?;
    let len = u64::from_le_bytes(len_bytes);

    // A maliciously large length shouldn't cause an attempted multi-exabyte
    // allocation before we've even tried to read the data.
    const MAX_REASONABLE_LEN: u64 = 1 << 40;
    if len > MAX_REASONABLE_LEN {
        return Err(Error::corrupt("array length is implausibly large"));
    }

    let mut arr = Vec::with_capacity(len as usize);
    let mut buf = [0u8; 8];
    for _ in 0..len {
        reader.read_exact(&mut buf)?;
        arr.push(i64::from_le_bytes(buf));
    }
    Ok(arr)
}
