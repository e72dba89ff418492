//! # Frontier Algebra
//!
//! The frontier is the set of loop endpoints known to be connected through
//! edges already drawn above the row currently being swept. [`merge`] is the
//! single operation that advances it: given the frontier entering a row and
//! the horizontal pattern chosen for that row, it returns the frontier
//! leaving the row, plus how many sub-loops closed in the process.

use ahash::{AHashMap, AHashSet};

/// A dot-lattice column index.
pub type Column = u32;

/// Two columns known to be joined by already-placed edges.
pub type Pair = (Column, Column);

/// A canonical, sorted, non-crossing sequence of [`Pair`]s.
///
/// Canonical form is what makes the frontier usable as a memoization key:
/// two frontiers that describe the same connectivity always compare equal
/// and hash equal only if they are stored in the same sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Frontier(Vec<Pair>);

impl Frontier {
    /// The frontier before any row has been drawn.
    pub fn empty() -> Self {
        Frontier(Vec::new())
    }

    /// Build a canonical frontier from an unordered list of pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use slitherlink::frontier::Frontier;
    ///
    /// let f = Frontier::from_pairs(vec![(5, 8), (1, 2)]);
    /// assert_eq!(f.as_slice(), &[(1, 2), (5, 8)]);
    /// ```
    pub fn from_pairs(mut pairs: Vec<Pair>) -> Self {
        debug_assert!(pairs.iter().all(|&(a, b)| a < b), "pair endpoints must be ordered");
        pairs.sort_unstable();
        debug_assert!(is_non_crossing(&pairs), "frontier pairs must not cross");
        Frontier(pairs)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Pair] {
        &self.0
    }

    /// Every column currently holding an open endpoint, in frontier order
    /// (not globally sorted — callers that need a sorted vertical-entry set
    /// should sort the result themselves).
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.0.iter().flat_map(|&(a, b)| [a, b])
    }
}

fn is_non_crossing(pairs: &[Pair]) -> bool {
    for (i, &(a, b)) in pairs.iter().enumerate() {
        for &(c, d) in &pairs[i + 1..] {
            let disjoint = b < c || d < a;
            let nested = (a < c && d < b) || (c < a && b < d);
            if !disjoint && !nested {
                return false;
            }
        }
    }
    true
}

fn ordered(a: Column, b: Column) -> Pair {
    if a < b { (a, b) } else { (b, a) }
}

/// Follow an open walk starting at column `x`, alternating between frontier
/// verticals and row horizontals, until it reaches a column with no further
/// mate. Returns `None` if the walk instead closes back on a horizontal
/// segment already visited (a closed loop).
///
/// Lifted out of `merge` as a plain function taking its scratch state by
/// mutable reference, rather than a closure capturing it — there is no
/// per-call heap allocation this way.
fn follow(
    mut x: Column,
    frontier: &[Pair],
    vmate: &AHashMap<Column, usize>,
    hmate: &AHashMap<Column, Column>,
    used_vertical: &mut [bool],
    used_horizontal: &mut AHashSet<Pair>,
) -> Option<Column> {
    loop {
        let idx = match vmate.get(&x) {
            Some(&idx) => idx,
            None => return Some(x),
        };
        assert!(!used_vertical[idx], "frontier pair walked twice during merge");
        used_vertical[idx] = true;
        let (h1, h2) = frontier[idx];
        x = h1 + h2 - x;
        match hmate.get(&x) {
            None => return Some(x),
            Some(&nx) => {
                let h = ordered(x, nx);
                if !used_horizontal.insert(h) {
                    return None;
                }
                x = nx;
            }
        }
    }
}

/// Merge the frontier entering a row with the row's chosen horizontal
/// pattern, returning the frontier leaving the row and the number of
/// sub-loops that closed.
///
/// # Examples
///
/// ```
/// use slitherlink::frontier::{merge, Frontier};
///
/// let (new_frontier, closed) = merge(&Frontier::from_pairs(vec![(1, 4)]), &[(1, 4)]);
/// assert!(new_frontier.is_empty());
/// assert_eq!(closed, 1);
/// ```
pub fn merge(frontier: &Frontier, row: &[Pair]) -> (Frontier, u32) {
    let pairs = frontier.as_slice();

    let mut vmate = AHashMap::with_capacity(pairs.len() * 2);
    for (idx, &(a, b)) in pairs.iter().enumerate() {
        vmate.insert(a, idx);
        vmate.insert(b, idx);
    }

    let mut hmate = AHashMap::with_capacity(row.len() * 2);
    for &(a, b) in row {
        hmate.insert(a, b);
        hmate.insert(b, a);
    }

    let mut used_vertical = vec![false; pairs.len()];
    let mut used_horizontal: AHashSet<Pair> = AHashSet::with_capacity(row.len());
    let mut closed = 0u32;
    let mut result = Vec::new();

    for &(a, b) in row {
        let h = ordered(a, b);
        if used_horizontal.contains(&h) {
            continue;
        }
        used_horizontal.insert(h);
        match follow(a, pairs, &vmate, &hmate, &mut used_vertical, &mut used_horizontal) {
            Some(na) => {
                let nb = follow(b, pairs, &vmate, &hmate, &mut used_vertical, &mut used_horizontal)
                    .expect("an open walk from one endpoint implies the other is open too");
                result.push(ordered(na, nb));
            }
            None => closed += 1,
        }
    }

    for (idx, &pair) in pairs.iter().enumerate() {
        if !used_vertical[idx] {
            result.push(pair);
        }
    }

    (Frontier::from_pairs(result), closed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(pairs: &[Pair]) -> Frontier {
        Frontier::from_pairs(pairs.to_vec())
    }

    #[test]
    fn merge_simple() {
        let (new, closed) = merge(&f(&[(1, 13)]), &[(1, 2), (13, 15)]);
        assert_eq!(new.as_slice(), &[(2, 15)]);
        assert_eq!(closed, 0);
    }

    #[test]
    fn merge_multiple() {
        let (new, closed) = merge(
            &f(&[(1, 13), (3, 11), (6, 8)]),
            &[(1, 2), (3, 6), (9, 11), (13, 15)],
        );
        assert_eq!(new.as_slice(), &[(2, 15), (8, 9)]);
        assert_eq!(closed, 0);
    }

    #[test]
    fn merge_lone_pair_passes_through() {
        let (new, closed) = merge(&f(&[(5, 8)]), &[]);
        assert_eq!(new.as_slice(), &[(5, 8)]);
        assert_eq!(closed, 0);
    }

    #[test]
    fn merge_horizontals_become_pairs() {
        let (new, closed) = merge(&f(&[]), &[(3, 6), (7, 8), (15, 20)]);
        assert_eq!(new.as_slice(), &[(3, 6), (7, 8), (15, 20)]);
        assert_eq!(closed, 0);
    }

    #[test]
    fn merge_closes_single_loop() {
        let (new, closed) = merge(&f(&[(1, 4)]), &[(1, 4)]);
        assert!(new.is_empty());
        assert_eq!(closed, 1);
    }

    #[test]
    fn merge_closes_complex_loops() {
        let (new, closed) = merge(
            &f(&[(1, 16), (4, 9), (7, 8), (12, 14)]),
            &[(1, 4), (5, 7), (9, 12), (14, 16)],
        );
        assert_eq!(new.as_slice(), &[(5, 8)]);
        assert_eq!(closed, 1);
    }

    #[test]
    fn merge_empty_is_empty() {
        let (new, closed) = merge(&f(&[]), &[]);
        assert!(new.is_empty());
        assert_eq!(closed, 0);
    }
}
