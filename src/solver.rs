//! This module defines the contract shared by all solving strategies as well
//! as the two backtracking solvers. The strategies are a closed set; they
//! are all implemented in this crate and compared through the same
//! [SolveReport] shape.
//!
//! * [BacktrackingSolver]: depth-first search over the empty cells in
//! row-major order, trying digits in ascending order.
//! * [MrvBacktrackingSolver]: the same search, but always branching on the
//! empty cell with the fewest remaining candidates
//! (Minimum-Remaining-Values).
//! * [NakedSinglesSolver](propagation::NakedSinglesSolver): pure constraint
//! propagation, which may stall on harder puzzles.
//! * [DancingLinksSolver](exact_cover::DancingLinksSolver): Knuth's
//! Algorithm X on the exact-cover formulation.

pub mod exact_cover;
pub mod propagation;

use crate::{GRID_SIZE, SudokuBoard};
use crate::candidates::{candidates, DigitSet};

use std::time::{Duration, Instant};

/// The result of applying a solving strategy to a board. An unsolvable
/// puzzle is a regular outcome, not an error; errors are reserved for
/// malformed input and contract violations (see [error](crate::error)).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {

    /// The strategy found a complete, valid solution, which is contained in
    /// this variant. For puzzles with more than one solution, the
    /// deterministic search order makes this the canonical one.
    Solved(SudokuBoard),

    /// The strategy made some progress but could not finish. The contained
    /// board holds the partial progress. Only produced by strategies that
    /// are incomplete by design, such as
    /// [NakedSinglesSolver](propagation::NakedSinglesSolver).
    Stalled(SudokuBoard),

    /// The strategy proved that the board has no solution.
    Unsolvable
}

impl Outcome {

    /// Gets the solved board, if this outcome is [Outcome::Solved], and
    /// `None` otherwise.
    pub fn solution(&self) -> Option<&SudokuBoard> {
        match self {
            Outcome::Solved(board) => Some(board),
            _ => None
        }
    }

    /// Indicates whether this outcome is [Outcome::Solved].
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// The amount of work a strategy performed, in counters that are meaningful
/// for that strategy. The variants are intentionally distinct instead of a
/// single generic number, so callers can only compare like with like;
/// wall-clock time (see [SolveReport::elapsed]) is the cross-strategy
/// measure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effort {

    /// Counters of a backtracking search ([BacktrackingSolver] and
    /// [MrvBacktrackingSolver]).
    Search {

        /// The number of digit placements attempted during the search.
        nodes: u64,

        /// The number of placements that were undone after the subtree below
        /// them was exhausted.
        backtracks: u64
    },

    /// Counters of a propagation strategy
    /// ([NakedSinglesSolver](propagation::NakedSinglesSolver)).
    Propagation {

        /// The number of cells that were filled by propagation.
        cells_resolved: u64
    },

    /// Counters of the exact-cover search
    /// ([DancingLinksSolver](exact_cover::DancingLinksSolver)).
    ExactCover {

        /// The number of times a constraint column was chosen for branching.
        column_choices: u64,

        /// The total number of cover operations performed, including the
        /// ones that were later undone.
        cover_pairs: u64
    }
}

/// The full result of a [Solver::solve] call: the outcome, the strategy's
/// effort counters, and the elapsed wall-clock time.
#[derive(Clone, Debug)]
pub struct SolveReport {

    /// The outcome of the solve.
    pub outcome: Outcome,

    /// The work the strategy performed.
    pub effort: Effort,

    /// The wall-clock time the solve took.
    pub elapsed: Duration
}

impl SolveReport {

    /// Gets the solved board, if the outcome is [Outcome::Solved], and
    /// `None` otherwise.
    pub fn solution(&self) -> Option<&SudokuBoard> {
        self.outcome.solution()
    }

    /// Indicates whether the outcome is [Outcome::Solved].
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// A trait for all Sudoku solving strategies. Implementations provide
/// [Solver::attempt]; the timed [Solver::solve] wrapper is shared, so every
/// strategy is measured the same way. Solvers never mutate the input board.
pub trait Solver {

    /// Gets a human-readable name of this strategy, used as the key in
    /// [MetricsCollector](crate::metrics::MetricsCollector) reports.
    fn name(&self) -> &'static str;

    /// Applies this strategy to the given board and returns the outcome
    /// together with the effort counters. The input board is not modified.
    fn attempt(&self, board: &SudokuBoard) -> (Outcome, Effort);

    /// Applies this strategy to the given board, measuring the wall-clock
    /// time of the attempt. The input board is not modified.
    fn solve(&self, board: &SudokuBoard) -> SolveReport {
        let start = Instant::now();
        let (outcome, effort) = self.attempt(board);
        let elapsed = start.elapsed();

        SolveReport {
            outcome,
            effort,
            elapsed
        }
    }
}

#[derive(Clone, Copy)]
struct SearchCounters {
    nodes: u64,
    backtracks: u64
}

impl SearchCounters {

    fn new() -> SearchCounters {
        SearchCounters {
            nodes: 0,
            backtracks: 0
        }
    }

    fn into_effort(self) -> Effort {
        Effort::Search {
            nodes: self.nodes,
            backtracks: self.backtracks
        }
    }
}

// Solvers accept complete boards as input; a valid one is its own solution
// and an invalid one has none. Checked up front so the searches below can
// assume at least one empty cell.
fn complete_board_outcome(board: &SudokuBoard) -> Outcome {
    if board.is_valid_complete() {
        Outcome::Solved(board.clone())
    }
    else {
        Outcome::Unsolvable
    }
}

/// A [Solver] which solves Sudoku by plain depth-first backtracking: the
/// empty cells are processed in row-major order, and for each, the candidate
/// digits are tried in ascending order. This solver is complete, i.e. it
/// solves every solvable board, but it can visit millions of search nodes on
/// hard puzzles.
pub struct BacktrackingSolver;

fn backtrack_first_empty(board: &mut SudokuBoard,
        empty_cells: &[(usize, usize)], depth: usize,
        counters: &mut SearchCounters) -> bool {
    if depth == empty_cells.len() {
        return true;
    }

    let (row, column) = empty_cells[depth];

    for digit in candidates(board, row, column).unwrap() {
        counters.nodes += 1;
        board.set_cell(row, column, digit).unwrap();

        if backtrack_first_empty(board, empty_cells, depth + 1, counters) {
            return true;
        }

        board.clear_cell(row, column).unwrap();
        counters.backtracks += 1;
    }

    false
}

impl Solver for BacktrackingSolver {

    fn name(&self) -> &'static str {
        "Backtracking"
    }

    fn attempt(&self, board: &SudokuBoard) -> (Outcome, Effort) {
        let mut counters = SearchCounters::new();

        if board.is_complete() {
            return (complete_board_outcome(board), counters.into_effort());
        }

        let empty_cells: Vec<(usize, usize)> = board.empty_cells().collect();
        let mut work = board.clone();

        let outcome =
            if backtrack_first_empty(&mut work, &empty_cells, 0,
                    &mut counters) {
                Outcome::Solved(work)
            }
            else {
                Outcome::Unsolvable
            };

        (outcome, counters.into_effort())
    }
}

/// A [Solver] which solves Sudoku by backtracking with the
/// Minimum-Remaining-Values heuristic: at every node, the search branches on
/// the empty cell with the fewest candidate digits, breaking ties in
/// row-major order. A cell with no candidates prunes the branch immediately,
/// without recursing. On uniquely solvable boards, this solver finds the
/// same solution as [BacktrackingSolver], usually in far fewer nodes.
pub struct MrvBacktrackingSolver;

fn find_mrv_cell(board: &SudokuBoard) -> Option<(usize, usize, DigitSet)> {
    let mut best: Option<(usize, usize, DigitSet)> = None;

    for row in 0..GRID_SIZE {
        for column in 0..GRID_SIZE {
            if board.get_cell(row, column).unwrap().is_some() {
                continue;
            }

            let cell_candidates = candidates(board, row, column).unwrap();
            let is_better = match &best {
                Some((_, _, best_candidates)) =>
                    cell_candidates.len() < best_candidates.len(),
                None => true
            };

            if is_better {
                if cell_candidates.is_empty() {
                    return Some((row, column, cell_candidates));
                }

                best = Some((row, column, cell_candidates));
            }
        }
    }

    best
}

fn backtrack_mrv(board: &mut SudokuBoard, counters: &mut SearchCounters)
        -> bool {
    let (row, column, cell_candidates) = match find_mrv_cell(board) {
        Some(mrv_cell) => mrv_cell,
        None => return true
    };

    for digit in cell_candidates {
        counters.nodes += 1;
        board.set_cell(row, column, digit).unwrap();

        if backtrack_mrv(board, counters) {
            return true;
        }

        board.clear_cell(row, column).unwrap();
        counters.backtracks += 1;
    }

    false
}

impl Solver for MrvBacktrackingSolver {

    fn name(&self) -> &'static str {
        "MRV Backtracking"
    }

    fn attempt(&self, board: &SudokuBoard) -> (Outcome, Effort) {
        let mut counters = SearchCounters::new();

        if board.is_complete() {
            return (complete_board_outcome(board), counters.into_effort());
        }

        let mut work = board.clone();

        let outcome =
            if backtrack_mrv(&mut work, &mut counters) {
                Outcome::Solved(work)
            }
            else {
                Outcome::Unsolvable
            };

        (outcome, counters.into_effort())
    }
}
