//! # Constraint Propagator
//!
//! Turns a candidate row into either a refusal (some clue in the row just
//! completed cannot be satisfied) or a pair of obligations that the *next*
//! row's top edge must honor.

use crate::frontier::{Column, Frontier, Pair};

/// Forced (`must_x`) and forbidden (`must_not_x`) top-edge columns for the
/// row about to be processed. Both lists are kept in ascending column order
/// so two `Obligations` values compare and hash equal iff they impose the
/// same constraints — this is load-bearing for memoization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Obligations {
    pub must_x: Vec<Column>,
    pub must_not_x: Vec<Column>,
}

impl Obligations {
    pub fn is_empty(&self) -> bool {
        self.must_x.is_empty() && self.must_not_x.is_empty()
    }
}

/// Cheap pre-merge check: does `pattern`'s top edge already satisfy
/// `obligations`? Kept separate from [`propagate`] purely as a short-circuit
/// so branches that are obviously dead don't pay for a `merge` call first.
pub fn satisfies(pattern: &[Pair], obligations: &Obligations) -> bool {
    if obligations.is_empty() {
        return true;
    }
    let covers = |x: Column| pattern.iter().any(|&(a, b)| a <= x && x < b);
    obligations.must_x.iter().all(|&x| covers(x)) && obligations.must_not_x.iter().all(|&x| !covers(x))
}

/// Check the row just completed against its clues (if any) and the
/// obligations inherited from the row above, and derive obligations for the
/// row below. Returns `None` if the row is unsatisfiable regardless of what
/// comes next.
pub fn propagate(
    row_pattern: &[Pair],
    new_frontier: &Frontier,
    width: Column,
    row_clues: Option<&[Option<u8>]>,
    obligations: &Obligations,
) -> Option<Obligations> {
    let w = width as usize;
    // count[x] accumulates, for cell x, how many of its top/left/right
    // edges are already known to be present.
    let mut count = vec![0u8; w + 1];
    for &(a, b) in row_pattern {
        for x in a..b {
            count[x as usize] += 1;
        }
    }

    if obligations.must_x.iter().any(|&m| count[m as usize] == 0) {
        return None;
    }
    if obligations.must_not_x.iter().any(|&m| count[m as usize] == 1) {
        return None;
    }

    for &(a, b) in new_frontier.as_slice() {
        for h in [a, b] {
            if h > 0 {
                count[h as usize - 1] += 1;
            }
            count[h as usize] += 1;
        }
    }

    let mut must_x = Vec::new();
    let mut must_not_x = Vec::new();

    if let Some(clues) = row_clues {
        for (x, clue) in clues.iter().enumerate() {
            let Some(k) = clue else { continue };
            let k = *k as i32;
            let known = count[x] as i32;
            if known == k {
                must_not_x.push(x as Column);
            } else if known == k - 1 {
                must_x.push(x as Column);
            } else {
                return None;
            }
        }
    }

    Some(Obligations { must_x, must_not_x })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::Frontier;

    #[test]
    fn blank_row_has_no_obligations() {
        let frontier = Frontier::from_pairs(vec![(1, 3)]);
        let got = propagate(&[(0, 1), (3, 4)], &frontier, 4, Some(&[None; 4]), &Obligations::default());
        assert_eq!(got, Some(Obligations::default()));
    }

    #[test]
    fn clue_exactly_met_forbids_bottom_edge() {
        // Cell 0, width 2, clue = 2: top edge present, left edge present
        // (column 0 is a frontier endpoint) -> known count already 2.
        let frontier = Frontier::from_pairs(vec![(0, 2)]);
        let got = propagate(&[(0, 1)], &frontier, 2, Some(&[Some(2), None]), &Obligations::default());
        assert_eq!(got.unwrap().must_not_x, vec![0]);
    }

    #[test]
    fn clue_one_short_forces_bottom_edge() {
        let frontier = Frontier::from_pairs(vec![]);
        let got = propagate(&[(0, 1)], &frontier, 1, Some(&[Some(2)]), &Obligations::default());
        assert_eq!(got.unwrap().must_x, vec![0]);
    }

    #[test]
    fn clue_overshoot_refuses() {
        let frontier = Frontier::from_pairs(vec![(0, 2)]);
        let got = propagate(&[(0, 1)], &frontier, 2, Some(&[Some(1), None]), &Obligations::default());
        assert!(got.is_none());
    }

    #[test]
    fn inherited_must_x_violated_refuses() {
        let obligations = Obligations { must_x: vec![0], must_not_x: vec![] };
        let frontier = Frontier::from_pairs(vec![]);
        let got = propagate(&[], &frontier, 1, None, &obligations);
        assert!(got.is_none());
    }

    #[test]
    fn inherited_must_not_x_violated_refuses() {
        let obligations = Obligations { must_x: vec![], must_not_x: vec![0] };
        let frontier = Frontier::from_pairs(vec![]);
        let got = propagate(&[(0, 1)], &frontier, 1, None, &obligations);
        assert!(got.is_none());
    }
}
