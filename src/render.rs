//! # Renderer
//!
//! Turns a completed stack of per-row horizontal patterns into the ASCII
//! diagram described by the external interface: dot rows of `+`/`-`/space,
//! cell rows of `|`/space, and an `=` separator after each solution.

use std::fmt::Write as _;

use crate::frontier::{Column, Pair};

/// Render one solution's row patterns (`rows.len()` must equal `height`)
/// into the ASCII diagram, appended to `out`.
pub fn render_ascii(rows: &[Vec<Pair>], width: Column, height: usize, out: &mut String) {
    let w = width as usize;
    let mut active = vec![false; w + 1];

    for y in 0..=height {
        let horz: &[Pair] = rows.get(y).map(Vec::as_slice).unwrap_or(&[]);
        for &(a, b) in horz {
            active[a as usize] = !active[a as usize];
            active[b as usize] = !active[b as usize];
        }
        write_dot_row(horz, w, out);
        if y < height {
            write_cell_row(&active, out);
        }
    }

    out.push('\n');
    writeln!(out, "{}", "=".repeat(2 * (w + 1))).expect("writing to String never fails");
    out.push('\n');
}

fn write_dot_row(horz: &[Pair], width: usize, out: &mut String) {
    let mut cells = vec![' '; width];
    for &(a, b) in horz {
        for x in a as usize..b as usize {
            cells[x] = '-';
        }
    }
    out.push('+');
    for (i, ch) in cells.iter().enumerate() {
        if i > 0 {
            out.push('+');
        }
        out.push(*ch);
    }
    out.push('+');
    out.push('\n');
}

fn write_cell_row(active: &[bool], out: &mut String) {
    for (i, &a) in active.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(if a { '|' } else { ' ' });
    }
    out.push('\n');
}
