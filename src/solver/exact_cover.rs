//! This module contains the Dancing-Links solver, which translates a board
//! into an exact-cover problem and runs Knuth's Algorithm X on it.
//!
//! The exact-cover matrix has 324 constraint columns in four families of 81:
//! every cell holds some digit, every row contains every digit, every column
//! contains every digit, and every box contains every digit. Each possible
//! placement of a digit in a cell is a matrix row with exactly one entry in
//! each family. The matrix is stored as an arena of nodes addressed by
//! index; every node sits in two circular doubly-linked lists, one
//! horizontal through its row and one vertical through its column.

use crate::{box_of, CELL_COUNT, GRID_SIZE, SudokuBoard};
use crate::candidates::candidates;
use crate::solver::{Effort, Outcome, Solver};

/// The number of constraint columns of the exact-cover matrix.
pub(crate) const COLUMN_COUNT: usize = 4 * CELL_COUNT;

const ROOT: usize = 0;

fn header(column: usize) -> usize {
    column + 1
}

fn cell_column(row: usize, column: usize) -> usize {
    row * GRID_SIZE + column
}

fn row_digit_column(row: usize, digit: u8) -> usize {
    CELL_COUNT + row * GRID_SIZE + (digit as usize - 1)
}

fn column_digit_column(column: usize, digit: u8) -> usize {
    2 * CELL_COUNT + column * GRID_SIZE + (digit as usize - 1)
}

fn box_digit_column(box_index: usize, digit: u8) -> usize {
    3 * CELL_COUNT + box_index * GRID_SIZE + (digit as usize - 1)
}

fn placement_id(row: usize, column: usize, digit: u8) -> usize {
    (row * GRID_SIZE + column) * GRID_SIZE + (digit as usize - 1)
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    column: usize,
    placement: usize
}

/// The exact-cover matrix of a board. Nodes live in a single arena and link
/// to each other by index, so covering and uncovering are pure index
/// rewiring without any reference counting.
///
/// The arena holds the root at index 0 and the 324 column headers at indices
/// 1 to 324, followed by the entry nodes in insertion order. Column sizes
/// are tracked separately so the fewest-live-rows column can be chosen in
/// one sweep of the header list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CoverMatrix {
    nodes: Vec<Node>,
    sizes: Vec<usize>
}

impl CoverMatrix {

    fn empty() -> CoverMatrix {
        let mut nodes = Vec::with_capacity(1 + COLUMN_COUNT);

        nodes.push(Node {
            left: header(COLUMN_COUNT - 1),
            right: header(0),
            up: ROOT,
            down: ROOT,
            column: usize::MAX,
            placement: usize::MAX
        });

        for column in 0..COLUMN_COUNT {
            let head = header(column);
            let left =
                if column == 0 {
                    ROOT
                }
                else {
                    head - 1
                };
            let right =
                if column == COLUMN_COUNT - 1 {
                    ROOT
                }
                else {
                    head + 1
                };

            nodes.push(Node {
                left,
                right,
                up: head,
                down: head,
                column,
                placement: usize::MAX
            });
        }

        CoverMatrix {
            nodes,
            sizes: vec![0; COLUMN_COUNT]
        }
    }

    /// Builds the matrix for the given board: one row for every given digit
    /// and one for every surviving candidate of every empty cell. Candidates
    /// already excluded by the givens never enter the matrix, which keeps
    /// the search space small before the first cover.
    pub(crate) fn from_board(board: &SudokuBoard) -> CoverMatrix {
        let mut matrix = CoverMatrix::empty();

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                match board.get_cell(row, column).unwrap() {
                    Some(digit) => matrix.add_row(row, column, digit),
                    None => {
                        for digit in candidates(board, row, column).unwrap() {
                            matrix.add_row(row, column, digit);
                        }
                    }
                }
            }
        }

        matrix
    }

    fn add_row(&mut self, row: usize, column: usize, digit: u8) {
        let box_index = box_of(row, column);
        let columns = [
            cell_column(row, column),
            row_digit_column(row, digit),
            column_digit_column(column, digit),
            box_digit_column(box_index, digit)
        ];
        let placement = placement_id(row, column, digit);
        let first = self.nodes.len();

        for (i, &constraint) in columns.iter().enumerate() {
            let node = first + i;
            let head = header(constraint);
            let up = self.nodes[head].up;

            self.nodes.push(Node {
                left: first + (i + 3) % 4,
                right: first + (i + 1) % 4,
                up,
                down: head,
                column: constraint,
                placement
            });

            self.nodes[up].down = node;
            self.nodes[head].up = node;
            self.sizes[constraint] += 1;
        }
    }

    /// Gets the total number of nodes in the arena, including the root and
    /// the column headers.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gets the number of live rows of the given column.
    pub(crate) fn column_size(&self, column: usize) -> usize {
        self.sizes[column]
    }

    /// Covers the given column: the column header is unlinked from the
    /// header list, and every other entry of every row in the column is
    /// unlinked from its own column. The nodes keep their link values, so
    /// [CoverMatrix::uncover] can splice them back in.
    pub(crate) fn cover(&mut self, column: usize) {
        let head = header(column);
        let (left, right) = (self.nodes[head].left, self.nodes[head].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut i = self.nodes[head].down;

        while i != head {
            let mut j = self.nodes[i].right;

            while j != i {
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[self.nodes[j].column] -= 1;
                j = self.nodes[j].right;
            }

            i = self.nodes[i].down;
        }
    }

    /// Uncovers the given column, exactly reversing the most recent
    /// [CoverMatrix::cover] of it. Covers and uncovers must nest in LIFO
    /// order; under that discipline, the matrix is restored bit for bit.
    pub(crate) fn uncover(&mut self, column: usize) {
        let head = header(column);
        let mut i = self.nodes[head].up;

        while i != head {
            let mut j = self.nodes[i].left;

            while j != i {
                self.sizes[self.nodes[j].column] += 1;
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[up].down = j;
                self.nodes[down].up = j;
                j = self.nodes[j].left;
            }

            i = self.nodes[i].up;
        }

        let (left, right) = (self.nodes[head].left, self.nodes[head].right);
        self.nodes[left].right = head;
        self.nodes[right].left = head;
    }

    // Sweeps the live headers for the column with the fewest rows, ties
    // broken by first encounter. None means no columns remain, i.e. the
    // cover is complete.
    fn min_size_column(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut head = self.nodes[ROOT].right;

        while head != ROOT {
            let column = self.nodes[head].column;

            let is_better = match best {
                Some(best_column) =>
                    self.sizes[column] < self.sizes[best_column],
                None => true
            };

            if is_better {
                best = Some(column);
            }

            head = self.nodes[head].right;
        }

        best
    }
}

struct CoverCounters {
    column_choices: u64,
    cover_pairs: u64
}

fn search(matrix: &mut CoverMatrix, selection: &mut Vec<usize>,
        counters: &mut CoverCounters) -> bool {
    let column = match matrix.min_size_column() {
        Some(column) => column,
        None => return true
    };

    counters.column_choices += 1;

    if matrix.column_size(column) == 0 {
        return false;
    }

    matrix.cover(column);
    counters.cover_pairs += 1;

    let head = header(column);
    let mut row = matrix.nodes[head].down;

    while row != head {
        selection.push(matrix.nodes[row].placement);

        let mut j = matrix.nodes[row].right;

        while j != row {
            matrix.cover(matrix.nodes[j].column);
            counters.cover_pairs += 1;
            j = matrix.nodes[j].right;
        }

        if search(matrix, selection, counters) {
            return true;
        }

        let mut j = matrix.nodes[row].left;

        while j != row {
            matrix.uncover(matrix.nodes[j].column);
            j = matrix.nodes[j].left;
        }

        selection.pop();
        row = matrix.nodes[row].down;
    }

    matrix.uncover(column);
    false
}

fn board_from_selection(selection: &[usize]) -> SudokuBoard {
    let mut board = SudokuBoard::new();

    for &placement in selection {
        let cell = placement / GRID_SIZE;
        let digit = (placement % GRID_SIZE) as u8 + 1;
        board.set_cell(cell / GRID_SIZE, cell % GRID_SIZE, digit).unwrap();
    }

    board
}

/// A [Solver] which solves Sudoku as an exact-cover problem with the
/// Dancing-Links technique. Like [MrvBacktrackingSolver], it always branches
/// on the most constrained choice point, but the cover representation makes
/// candidate elimination and restoration constant-time per link. This solver
/// is complete and is typically the fastest strategy on hard puzzles.
///
/// [MrvBacktrackingSolver]: crate::solver::MrvBacktrackingSolver
pub struct DancingLinksSolver;

impl Solver for DancingLinksSolver {

    fn name(&self) -> &'static str {
        "Dancing Links"
    }

    fn attempt(&self, board: &SudokuBoard) -> (Outcome, Effort) {
        let mut counters = CoverCounters {
            column_choices: 0,
            cover_pairs: 0
        };

        if board.is_complete() {
            let outcome = super::complete_board_outcome(board);
            return (outcome, Effort::ExactCover {
                column_choices: counters.column_choices,
                cover_pairs: counters.cover_pairs
            });
        }

        let mut matrix = CoverMatrix::from_board(board);
        let mut selection = Vec::with_capacity(CELL_COUNT);

        let outcome =
            if search(&mut matrix, &mut selection, &mut counters) {
                Outcome::Solved(board_from_selection(&selection))
            }
            else {
                Outcome::Unsolvable
            };

        (outcome, Effort::ExactCover {
            column_choices: counters.column_choices,
            cover_pairs: counters.cover_pairs
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::puzzles::{self, Difficulty};

    #[test]
    fn matrix_of_empty_board_has_all_placement_rows() {
        let matrix = CoverMatrix::from_board(&SudokuBoard::new());

        // root, 324 headers, 729 rows of 4 entries each
        assert_eq!(1 + COLUMN_COUNT + 729 * 4, matrix.node_count());

        for column in 0..COLUMN_COUNT {
            assert_eq!(9, matrix.column_size(column));
        }
    }

    #[test]
    fn givens_reduce_the_matrix() {
        let mut board = SudokuBoard::new();
        board.set_cell(0, 0, 5).unwrap();

        let matrix = CoverMatrix::from_board(&board);

        // the given cell contributes one row instead of nine
        assert_eq!(1, matrix.column_size(cell_column(0, 0)));

        // 5 is no longer a candidate elsewhere in row 0, and in row 1 it
        // survives only outside the given's column and box
        assert_eq!(1, matrix.column_size(row_digit_column(0, 5)));
        assert_eq!(6, matrix.column_size(row_digit_column(1, 5)));
    }

    #[test]
    fn cover_then_uncover_restores_the_matrix() {
        let board = puzzles::exemplar(Difficulty::Easy);
        let mut matrix = CoverMatrix::from_board(&board);
        let pristine = matrix.clone();

        let columns = [0, 57, cell_column(4, 4), row_digit_column(8, 3),
            box_digit_column(2, 7), COLUMN_COUNT - 1];

        for &column in &columns {
            matrix.cover(column);
        }

        assert_ne!(pristine, matrix);

        for &column in columns.iter().rev() {
            matrix.uncover(column);
        }

        assert_eq!(pristine, matrix);
    }

    #[test]
    fn dancing_links_solve_easy_puzzle() {
        let board = puzzles::exemplar(Difficulty::Easy);
        let (outcome, _) = DancingLinksSolver.attempt(&board);

        let expected = SudokuBoard::parse(
            crate::solver::tests::EASY_SOLUTION).unwrap();
        assert_eq!(Outcome::Solved(expected), outcome);
    }

    #[test]
    fn dancing_links_solve_hard_puzzle() {
        let board = puzzles::exemplar(Difficulty::Hard);
        let (outcome, effort) = DancingLinksSolver.attempt(&board);

        let expected = SudokuBoard::parse("\
            162857493\
            534129678\
            789643521\
            475312986\
            913586742\
            628794135\
            356478219\
            241935867\
            897261354").unwrap();
        assert_eq!(Outcome::Solved(expected), outcome);

        match effort {
            Effort::ExactCover { column_choices, cover_pairs } => {
                assert!(column_choices > 0);
                assert!(cover_pairs >= column_choices);
            },
            _ => panic!("expected exact-cover effort, got {:?}", effort)
        }
    }

    #[test]
    fn dancing_links_solve_expert_puzzle() {
        let board = puzzles::exemplar(Difficulty::Expert);
        let (outcome, _) = DancingLinksSolver.attempt(&board);

        let expected = SudokuBoard::parse("\
            417369825\
            632158947\
            958724316\
            825437169\
            791586432\
            346912758\
            289643571\
            573291684\
            164875293").unwrap();
        assert_eq!(Outcome::Solved(expected), outcome);
    }

    #[test]
    fn dancing_links_detect_unsolvable_board() {
        let board = SudokuBoard::parse(
            crate::solver::tests::UNSOLVABLE).unwrap();
        let (outcome, _) = DancingLinksSolver.attempt(&board);

        assert_eq!(Outcome::Unsolvable, outcome);
    }

    #[test]
    fn dancing_links_short_circuit_on_complete_board() {
        let board = SudokuBoard::parse(
            crate::solver::tests::EASY_SOLUTION).unwrap();
        let (outcome, effort) = DancingLinksSolver.attempt(&board);

        assert_eq!(Outcome::Solved(board), outcome);
        assert_eq!(Effort::ExactCover {
            column_choices: 0,
            cover_pairs: 0
        }, effort);
    }

    #[test]
    fn dancing_links_do_not_modify_input() {
        let board = puzzles::exemplar(Difficulty::Expert);
        let copy = board.clone();
        DancingLinksSolver.attempt(&board);

        assert_eq!(copy, board);
    }
}
