//! This module contains a small library of exemplar puzzles, one per
//! difficulty tier. The tiers reflect how much search the puzzles require:
//! the easy puzzle falls to pure propagation, while the expert puzzle was
//! constructed to punish naive depth-first search. The exemplars are used by
//! the cross-strategy tests and benchmarks, and are a convenient starting
//! point for callers exploring the crate.

use crate::SudokuBoard;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The difficulty tiers for which [exemplar] puzzles exist.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Difficulty {

    /// Solvable by Naked-Singles propagation alone.
    Easy,

    /// Requires some search; propagation alone stalls.
    Medium,

    /// Requires substantial search even with good heuristics.
    Hard,

    /// Adversarial for plain depth-first search, which visits millions of
    /// nodes here.
    Expert
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Expert => write!(f, "expert")
        }
    }
}

/// All difficulty tiers, in ascending order.
pub const ALL_DIFFICULTIES: [Difficulty; 4] = [
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Hard,
    Difficulty::Expert
];

const EASY: &str = "\
    530070000\
    600195000\
    098000060\
    800060003\
    400803001\
    700020006\
    060000280\
    000419005\
    000080079";

const MEDIUM: &str = "\
    003020600\
    900305001\
    001806400\
    008102900\
    700000008\
    006708200\
    002609500\
    800203006\
    005010300";

const HARD: &str = "\
    100007090\
    030020008\
    009600500\
    005300900\
    010080002\
    600004000\
    300000010\
    040000007\
    007000300";

const EXPERT: &str = "\
    400000805\
    030000000\
    000700000\
    020000060\
    000080400\
    000010000\
    000603070\
    500200000\
    104000000";

/// Gets the 81-character code of the exemplar puzzle of the given
/// difficulty. The code is always accepted by
/// [SudokuBoard::parse](crate::SudokuBoard::parse).
pub fn exemplar_code(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Medium => MEDIUM,
        Difficulty::Hard => HARD,
        Difficulty::Expert => EXPERT
    }
}

/// Gets the exemplar puzzle of the given difficulty as a parsed board.
pub fn exemplar(difficulty: Difficulty) -> SudokuBoard {
    SudokuBoard::parse(exemplar_code(difficulty)).unwrap()
}
