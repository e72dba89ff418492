//! # Row Pattern Generator
//!
//! Enumerates every legal horizontal edge placement for a single row: all
//! sorted sequences of disjoint, non-touching segments over `[0, width]`.
//! The set of columns already carrying a vertical edge from the row above is
//! used only as a generation shortcut (§4.2 of the design notes) — a segment
//! may stop growing once it reaches such a column, since any further growth
//! up to the next live column describes the same edge set after
//! canonicalization.

use ahash::AHashSet;

use crate::frontier::{Column, Pair};

/// One row's worth of horizontal segments, sorted and non-touching.
pub type RowPattern = Vec<Pair>;

/// Enumerate all legal row patterns for a row of the given `width`, given
/// the columns `verticals` where a vertical edge enters from above.
///
/// # Examples
///
/// ```
/// use slitherlink::pattern::generate;
///
/// let patterns = generate(&[], 2);
/// assert_eq!(patterns, vec![
///     vec![],
///     vec![(0, 1)],
///     vec![(0, 2)],
///     vec![(1, 2)],
/// ]);
/// ```
pub fn generate(verticals: &[Column], width: Column) -> Vec<RowPattern> {
    let live: AHashSet<Column> = verticals.iter().copied().collect();
    let mut results = Vec::new();
    let mut current = Vec::new();
    generate_rec(0, width, &live, &mut current, &mut results);
    results.sort();
    results
}

fn generate_rec(
    x: Column,
    width: Column,
    live: &AHashSet<Column>,
    current: &mut RowPattern,
    results: &mut Vec<RowPattern>,
) {
    if x >= width {
        results.push(current.clone());
        return;
    }

    // Skip: no segment starts at x.
    generate_rec(x + 1, width, live, current, results);

    // Start a segment at x, growing its right endpoint until it must stop.
    let mut nx = x + 1;
    current.push((x, nx));
    generate_rec(nx + 1, width, live, current, results);
    while !live.contains(&nx) && nx < width {
        current.pop();
        nx += 1;
        current.push((x, nx));
        generate_rec(nx + 1, width, live, current, results);
    }
    current.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_width_two_no_verticals() {
        assert_eq!(
            generate(&[], 2),
            vec![vec![], vec![(0, 1)], vec![(0, 2)], vec![(1, 2)]]
        );
    }

    #[test]
    fn generate_width_four_no_verticals() {
        assert_eq!(
            generate(&[], 4),
            vec![
                vec![],
                vec![(0, 1)],
                vec![(0, 1), (2, 3)],
                vec![(0, 1), (2, 4)],
                vec![(0, 1), (3, 4)],
                vec![(0, 2)],
                vec![(0, 2), (3, 4)],
                vec![(0, 3)],
                vec![(0, 4)],
                vec![(1, 2)],
                vec![(1, 2), (3, 4)],
                vec![(1, 3)],
                vec![(1, 4)],
                vec![(2, 3)],
                vec![(2, 4)],
                vec![(3, 4)],
            ]
        );
    }

    #[test]
    fn generate_width_four_with_verticals() {
        assert_eq!(
            generate(&[1, 3], 4),
            vec![
                vec![],
                vec![(0, 1)],
                vec![(0, 1), (2, 3)],
                vec![(0, 1), (3, 4)],
                vec![(1, 2)],
                vec![(1, 2), (3, 4)],
                vec![(1, 3)],
                vec![(2, 3)],
                vec![(3, 4)],
            ]
        );
    }

    #[test]
    fn generate_zero_width_yields_empty_pattern_only() {
        assert_eq!(generate(&[], 0), vec![vec![]]);
    }
}
