//! DOT-format graph export, for visually debugging a built automaton.

use std::io::{self, Write};

use crate::automaton::Automaton;
use crate::store::{EMPTY, ROOT};

impl Automaton {
    /// Writes this automaton as a DOT digraph to `writer`.
    ///
    /// Trie transitions are drawn as plain black edges. When
    /// `draw_fail_links` is set, non-trivial fail links are drawn in red and
    /// dictionary-suffix links in dark green.
    pub fn to_dot<W: Write>(&self, mut writer: W, draw_fail_links: bool) -> io::Result<()> {
        writeln!(writer, "digraph T {{")?;
        writeln!(
            writer,
            "\tnodesep=0.2; ranksep=0.4; splines=false; outputorder=edgesfirst;"
        )?;
        writeln!(
            writer,
            "\tnode [shape=circle, style=filled, fillcolor=white, fixedsize=true];"
        )?;
        writeln!(writer, "\tedge [arrowsize=0.5];")?;

        self.graph_state(&mut writer, ROOT, None, draw_fail_links)?;

        writeln!(writer, "}}")
    }

    fn graph_state<W: Write>(
        &self,
        writer: &mut W,
        s: i64,
        incoming: Option<u8>,
        draw_fail_links: bool,
    ) -> io::Result<()> {
        let label = label(incoming);
        if self.dict[s as usize] > 0 {
            writeln!(writer, "\t{s} [label=\"{label}\", shape=doublecircle];")?;
        } else {
            writeln!(writer, "\t{s} [label=\"{label}\"];")?;
        }

        for (c, t) in self.children(s) {
            self.graph_state(writer, t, Some(c), draw_fail_links)?;
            writeln!(writer, "\t{s} -> {t};")?;
        }

        if draw_fail_links {
            let f = self.fail[s as usize];
            if f != EMPTY && f != ROOT {
                writeln!(writer, "\t{s} -> {f} [color=red, constraint=false];")?;
            }
        }

        let f = self.suff[s as usize];
        if f != EMPTY {
            writeln!(writer, "\t{s} -> {f} [color=darkgreen, constraint=false];")?;
        }

        Ok(())
    }
}

fn label(incoming: Option<u8>) -> String {
    let b = match incoming {
        Some(b) => b,
        None => return String::new(),
    };
    if (0x20..=0x7e).contains(&b) {
        (b as char).to_string()
    } else {
        format!("0x{b:02x}")
    }
}
