//! # Search Driver
//!
//! The row-by-row depth-first sweep that ties the frontier algebra, the row
//! pattern generator, and the constraint propagator together, memoizing on
//! the full search state so repeated sub-problems are solved once.

use std::rc::Rc;

use ahash::AHashMap;

use crate::board::Board;
use crate::frontier::{merge, Column, Frontier};
use crate::pattern::{generate, RowPattern};
use crate::propagate::{propagate, satisfies, Obligations};

/// A callback invoked once per solution found, receiving that solution's
/// per-row horizontal patterns (row `y` holds the pattern drawn for dot-row
/// `y`, for `y` in `0..=height`).
pub type Sink<'a> = dyn FnMut(&[RowPattern]) + 'a;

#[derive(Clone, PartialEq, Eq, Hash)]
struct SearchKey {
    frontier: Frontier,
    row: usize,
    loop_done: bool,
    obligations: Obligations,
}

/// Counts (or enumerates) solutions for a single [`Board`].
///
/// A `Solver` owns its memoization table and its pattern-generation cache,
/// so parallel callers simply build one `Solver` per worker (see
/// [`count_parallel`]) rather than sharing state.
pub struct Solver<'b> {
    board: &'b Board,
    memo: AHashMap<SearchKey, u64>,
    pattern_cache: AHashMap<Vec<Column>, Rc<Vec<RowPattern>>>,
    merge_cache: AHashMap<(Frontier, RowPattern), (Frontier, u32)>,
    render_stack: Vec<RowPattern>,
}

impl<'b> Solver<'b> {
    pub fn new(board: &'b Board) -> Self {
        Solver {
            board,
            memo: AHashMap::new(),
            pattern_cache: AHashMap::new(),
            merge_cache: AHashMap::new(),
            render_stack: Vec::new(),
        }
    }

    /// Count all solutions. Memoized; does not retain the path to each one.
    pub fn count(&mut self) -> u64 {
        let _span = tracing::debug_span!(
            "count",
            width = self.board.width,
            height = self.board.height
        )
        .entered();
        let total = self.run(None);
        tracing::debug!(
            solutions = total,
            memo_entries = self.memo.len(),
            merge_cache_entries = self.merge_cache.len(),
            pattern_cache_entries = self.pattern_cache.len(),
            "search complete"
        );
        total
    }

    /// Enumerate every solution, calling `sink` once per solution with its
    /// row patterns. Bypasses memoization, since the path to each solution
    /// matters for enumeration, not just the count.
    pub fn enumerate(&mut self, sink: &mut Sink<'_>) -> u64 {
        self.run(Some(sink))
    }

    fn run(&mut self, sink: Option<&mut Sink<'_>>) -> u64 {
        self.render_stack.clear();
        self.search_rec(Frontier::empty(), 0, false, Obligations::default(), sink)
    }

    fn search_rec(
        &mut self,
        frontier: Frontier,
        row: usize,
        loop_done: bool,
        obligations: Obligations,
        mut sink: Option<&mut Sink<'_>>,
    ) -> u64 {
        if row > self.board.height {
            if loop_done && frontier.is_empty() {
                if let Some(sink) = sink.as_deref_mut() {
                    sink(&self.render_stack);
                }
                return 1;
            }
            return 0;
        }

        let memoizing = sink.is_none();
        let key = memoizing.then(|| SearchKey {
            frontier: frontier.clone(),
            row,
            loop_done,
            obligations: obligations.clone(),
        });
        if let Some(key) = &key {
            if let Some(&cached) = self.memo.get(key) {
                return cached;
            }
        }

        let patterns: Rc<Vec<RowPattern>> = if loop_done {
            Rc::new(vec![Vec::new()])
        } else {
            let mut verticals: Vec<Column> = frontier.columns().collect();
            verticals.sort_unstable();
            self.patterns_for(verticals)
        };

        let mut total = 0u64;
        for pattern in patterns.iter() {
            if !satisfies(pattern, &obligations) {
                continue;
            }

            let (new_frontier, closed) = self.merged(&frontier, pattern);
            // A row that closes a loop must close exactly one, and leave no
            // orphan verticals behind — anything else would mean more than
            // one loop exists, which this engine never counts.
            let valid_loop = closed == 0 || (closed == 1 && new_frontier.is_empty());
            if !valid_loop {
                continue;
            }

            let row_clues = (row < self.board.height).then(|| self.board.row_clues(row));
            let Some(next_obligations) =
                propagate(pattern, &new_frontier, self.board.width_column(), row_clues, &obligations)
            else {
                continue;
            };

            self.render_stack.push(pattern.clone());
            let next_loop_done = loop_done || closed > 0;
            total += self.search_rec(
                new_frontier,
                row + 1,
                next_loop_done,
                next_obligations,
                sink.as_deref_mut(),
            );
            self.render_stack.pop();
        }

        if let Some(key) = key {
            self.memo.insert(key, total);
        }
        total
    }

    fn patterns_for(&mut self, verticals: Vec<Column>) -> Rc<Vec<RowPattern>> {
        if let Some(cached) = self.pattern_cache.get(&verticals) {
            return Rc::clone(cached);
        }
        let patterns = Rc::new(generate(&verticals, self.board.width_column()));
        self.pattern_cache.insert(verticals, Rc::clone(&patterns));
        patterns
    }

    /// `merge` is a pure function of `(frontier, pattern)` alone, so — unlike
    /// the whole-subtree counts in `memo`, which must not be reused across
    /// an `enumerate` call's distinct solution paths — it is always safe to
    /// cache, whether counting or rendering.
    fn merged(&mut self, frontier: &Frontier, pattern: &RowPattern) -> (Frontier, u32) {
        let key = (frontier.clone(), pattern.clone());
        if let Some(cached) = self.merge_cache.get(&key) {
            return cached.clone();
        }
        let result = merge(frontier, pattern);
        self.merge_cache.insert(key, result.clone());
        result
    }
}

/// One way the recursion at row 1 can branch, used to shard work across
/// threads in [`count_parallel`].
struct FirstRowBranch {
    frontier: Frontier,
    loop_done: bool,
    obligations: Obligations,
}

fn first_row_branches(board: &Board) -> Vec<FirstRowBranch> {
    let width = board.width_column();
    let patterns = generate(&[], width);
    let row_clues = (board.height > 0).then(|| board.row_clues(0));

    patterns
        .into_iter()
        .filter_map(|pattern| {
            let (new_frontier, closed) = merge(&Frontier::empty(), &pattern);
            // Merging against an empty frontier can never close a loop.
            if closed != 0 {
                return None;
            }
            let obligations = propagate(&pattern, &new_frontier, width, row_clues, &Obligations::default())?;
            Some(FirstRowBranch {
                frontier: new_frontier,
                loop_done: closed > 0,
                obligations,
            })
        })
        .collect()
}

/// Shard the row-1 recursion across a thread pool, one private [`Solver`]
/// (and thus one private memoization table) per branch. Produces the same
/// count as [`Solver::count`]; it is strictly a throughput optimization and
/// is not wired up to rendering.
#[cfg(feature = "parallel")]
pub fn count_parallel(board: &Board) -> u64 {
    use rayon::prelude::*;

    first_row_branches(board)
        .into_par_iter()
        .map(|branch| {
            let mut solver = Solver::new(board);
            solver.search_rec(branch.frontier, 1, branch.loop_done, branch.obligations, None)
        })
        .sum()
}
