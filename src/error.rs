//! This module contains the error and result definitions used in this crate.
//!
//! The taxonomy is deliberately small: [SudokuParseError] covers malformed
//! puzzle input and is raised at parse time, while [SudokuError] covers
//! contract violations on cell access (out-of-bounds coordinates, out-of-range
//! digits). A puzzle for which a solver finds no solution is *not* an error;
//! solvers report that case through their ordinary return value (see
//! [Outcome](crate::solver::Outcome)).

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors that can occur when accessing cells of a
/// [SudokuBoard](crate::SudokuBoard). These indicate a bug in the caller, not
/// a property of the puzzle, which is why they are raised eagerly instead of
/// being absorbed into a "no solution" outcome.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the 9x9 grid, that is, at least one of them is greater than 8.
    OutOfBounds,

    /// Indicates that a digit is invalid for a cell. This is the case if it
    /// is 0 or greater than 9.
    InvalidDigit
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates out of bounds"),
            SudokuError::InvalidDigit =>
                write!(f, "digit outside the range [1, 9]")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuBoard](crate::SudokuBoard) from its 81-character code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code does not consist of exactly 81 characters.
    WrongLength,

    /// Indicates that the code contains a character which is neither a digit
    /// (`'0'` to `'9'`) nor the empty-cell placeholder `'.'`.
    InvalidCharacter
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongLength =>
                write!(f, "board code must be exactly 81 characters"),
            SudokuParseError::InvalidCharacter =>
                write!(f, "board code may only contain digits and '.'")
        }
    }
}

impl Error for SudokuParseError { }

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
