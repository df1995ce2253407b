//! This module contains the candidate engine shared by all solving
//! strategies: [DigitSet], a compact set of digits from 1 to 9, and
//! [candidates], which computes the digits that may legally be placed in an
//! empty cell.

use crate::{box_of, index, GRID_SIZE, SudokuBoard};
use crate::error::{SudokuError, SudokuResult};

/// A set of digits in the range `[1, 9]`, backed by a `u16` bit mask where
/// bit `d` represents the digit `d`. All operations run in constant time.
///
/// # Example
///
/// ```
/// use sudoku_solvers::candidates::DigitSet;
///
/// let mut set = DigitSet::empty();
/// set.insert(3).unwrap();
/// set.insert(7).unwrap();
///
/// assert!(set.contains(3));
/// assert!(!set.contains(4));
/// assert_eq!(2, set.len());
/// assert_eq!(vec![3, 7], set.iter().collect::<Vec<_>>());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    mask: u16
}

const ALL_DIGITS_MASK: u16 = 0b11_1111_1110;

impl DigitSet {

    /// Creates a new digit set that contains no digits.
    pub fn empty() -> DigitSet {
        DigitSet {
            mask: 0
        }
    }

    /// Creates a new digit set that contains all digits from 1 to 9.
    pub fn all() -> DigitSet {
        DigitSet {
            mask: ALL_DIGITS_MASK
        }
    }

    /// Indicates whether this set contains the given digit. Digits outside
    /// the range `[1, 9]` are never contained.
    pub fn contains(&self, digit: u8) -> bool {
        digit >= 1 && digit as usize <= GRID_SIZE &&
            self.mask & (1 << digit) != 0
    }

    /// Inserts the given digit into this set. Returns `true` if the set
    /// changed, i.e. the digit was not present before.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn insert(&mut self, digit: u8) -> SudokuResult<bool> {
        if digit == 0 || digit as usize > GRID_SIZE {
            return Err(SudokuError::InvalidDigit);
        }

        let bit = 1 << digit;
        let changed = self.mask & bit == 0;
        self.mask |= bit;
        Ok(changed)
    }

    /// Removes the given digit from this set. Returns `true` if the set
    /// changed, i.e. the digit was present before.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn remove(&mut self, digit: u8) -> SudokuResult<bool> {
        if digit == 0 || digit as usize > GRID_SIZE {
            return Err(SudokuError::InvalidDigit);
        }

        let bit = 1 << digit;
        let changed = self.mask & bit != 0;
        self.mask &= !bit;
        Ok(changed)
    }

    /// Gets the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Indicates whether this set is empty, i.e. contains no digits.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// If this set contains exactly one digit, returns that digit, otherwise
    /// `None`. Used by the Naked-Singles strategy to detect forced cells.
    pub fn sole_digit(&self) -> Option<u8> {
        if self.mask.count_ones() == 1 {
            Some(self.mask.trailing_zeros() as u8)
        }
        else {
            None
        }
    }

    /// Returns an iterator over the digits in this set, in ascending order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            mask: self.mask
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}

/// An iterator over the digits of a [DigitSet], in ascending order.
pub struct DigitSetIter {
    mask: u16
}

impl Iterator for DigitSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.mask == 0 {
            return None;
        }

        let digit = self.mask.trailing_zeros() as u8;
        self.mask &= self.mask - 1;
        Some(digit)
    }
}

/// Computes the set of candidate digits for the cell at the given position,
/// that is, the digits that do not yet occur in the cell's row, column, or
/// 3x3 box. For a filled cell, the result is the empty set.
///
/// # Arguments
///
/// * `board`: The board on which to compute candidates.
/// * `row`: The row (y-coordinate) of the cell. Must be in the range
/// `[0, 9[`.
/// * `column`: The column (x-coordinate) of the cell. Must be in the range
/// `[0, 9[`.
///
/// # Errors
///
/// If either `row` or `column` are not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn candidates(board: &SudokuBoard, row: usize, column: usize)
        -> SudokuResult<DigitSet> {
    if row >= GRID_SIZE || column >= GRID_SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    let cells = board.cells();

    if cells[index(row, column)] != 0 {
        return Ok(DigitSet::empty());
    }

    let mut seen = 0u16;

    for &(r, c) in &SudokuBoard::row_positions(row).unwrap() {
        seen |= 1 << cells[index(r, c)];
    }

    for &(r, c) in &SudokuBoard::column_positions(column).unwrap() {
        seen |= 1 << cells[index(r, c)];
    }

    let box_index = box_of(row, column);

    for &(r, c) in &SudokuBoard::box_positions(box_index).unwrap() {
        seen |= 1 << cells[index(r, c)];
    }

    Ok(DigitSet {
        mask: ALL_DIGITS_MASK & !seen
    })
}
