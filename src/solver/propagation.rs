//! This module contains the Naked-Singles propagation solver, the only
//! strategy in this crate that is incomplete by design: it fills every cell
//! whose candidate set has shrunk to a single digit and repeats until
//! nothing changes, but it never guesses. Where a guess would be required,
//! it stalls and returns its partial progress.

use crate::{GRID_SIZE, SudokuBoard};
use crate::candidates::candidates;
use crate::solver::{Effort, Outcome, Solver};

/// A [Solver] which only applies the Naked-Singles rule: if an empty cell
/// has exactly one candidate digit, that digit is placed. The rule is
/// applied in row-major sweeps until a full sweep changes nothing.
///
/// The outcome is [Outcome::Solved] if propagation alone completes the
/// board, [Outcome::Stalled] with the partially filled board if some cells
/// retain two or more candidates, and [Outcome::Unsolvable] if an empty cell
/// ends up with no candidates at all. Running this solver on a stalled
/// result returns the same board again with zero cells resolved.
pub struct NakedSinglesSolver;

impl Solver for NakedSinglesSolver {

    fn name(&self) -> &'static str {
        "Naked Singles"
    }

    fn attempt(&self, board: &SudokuBoard) -> (Outcome, Effort) {
        let mut cells_resolved = 0u64;

        if board.is_complete() {
            let outcome = super::complete_board_outcome(board);
            return (outcome, Effort::Propagation { cells_resolved });
        }

        let mut work = board.clone();
        let mut changed = true;

        while changed {
            changed = false;

            for row in 0..GRID_SIZE {
                for column in 0..GRID_SIZE {
                    if work.get_cell(row, column).unwrap().is_some() {
                        continue;
                    }

                    let cell_candidates =
                        candidates(&work, row, column).unwrap();

                    if let Some(digit) = cell_candidates.sole_digit() {
                        work.set_cell(row, column, digit).unwrap();
                        cells_resolved += 1;
                        changed = true;
                    }
                }
            }
        }

        let effort = Effort::Propagation { cells_resolved };

        for (row, column) in work.empty_cells() {
            if candidates(&work, row, column).unwrap().is_empty() {
                return (Outcome::Unsolvable, effort);
            }
        }

        if work.is_complete() {
            (Outcome::Solved(work), effort)
        }
        else {
            (Outcome::Stalled(work), effort)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::puzzles::{self, Difficulty};

    fn cells_resolved(effort: Effort) -> u64 {
        match effort {
            Effort::Propagation { cells_resolved } => cells_resolved,
            _ => panic!("expected propagation effort, got {:?}", effort)
        }
    }

    #[test]
    fn naked_singles_complete_easy_puzzle() {
        let board = puzzles::exemplar(Difficulty::Easy);
        let (outcome, effort) = NakedSinglesSolver.attempt(&board);

        let expected = SudokuBoard::parse(
            crate::solver::tests::EASY_SOLUTION).unwrap();
        assert_eq!(Outcome::Solved(expected), outcome);
        assert_eq!(51, cells_resolved(effort));
    }

    #[test]
    fn naked_singles_stall_on_expert_puzzle() {
        let board = puzzles::exemplar(Difficulty::Expert);
        let (outcome, effort) = NakedSinglesSolver.attempt(&board);

        // no cell of this puzzle is ever reduced to a single candidate
        assert_eq!(Outcome::Stalled(board), outcome);
        assert_eq!(0, cells_resolved(effort));
    }

    #[test]
    fn naked_singles_are_idempotent_on_stalled_output() {
        let board = puzzles::exemplar(Difficulty::Medium);
        let (outcome, effort) = NakedSinglesSolver.attempt(&board);

        let stalled = match outcome {
            Outcome::Stalled(stalled) => stalled,
            _ => panic!("expected medium puzzle to stall")
        };
        assert!(cells_resolved(effort) > 0);

        let (second_outcome, second_effort) =
            NakedSinglesSolver.attempt(&stalled);

        assert_eq!(Outcome::Stalled(stalled), second_outcome);
        assert_eq!(0, cells_resolved(second_effort));
    }

    #[test]
    fn naked_singles_detect_contradiction() {
        let board = SudokuBoard::parse(
            crate::solver::tests::UNSOLVABLE).unwrap();
        let (outcome, _) = NakedSinglesSolver.attempt(&board);

        assert_eq!(Outcome::Unsolvable, outcome);
    }

    #[test]
    fn naked_singles_short_circuit_on_complete_board() {
        let board = SudokuBoard::parse(
            crate::solver::tests::EASY_SOLUTION).unwrap();
        let (outcome, effort) = NakedSinglesSolver.attempt(&board);

        assert_eq!(Outcome::Solved(board), outcome);
        assert_eq!(0, cells_resolved(effort));
    }

    #[test]
    fn naked_singles_do_not_modify_input() {
        let board = puzzles::exemplar(Difficulty::Medium);
        let copy = board.clone();
        NakedSinglesSolver.attempt(&board);

        assert_eq!(copy, board);
    }
}
