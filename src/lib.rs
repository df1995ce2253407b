// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements a 9x9 Sudoku solving engine with four
//! interchangeable solving strategies behind a common contract. It supports
//! the following key features:
//!
//! * Parsing and printing Sudoku boards
//! * Checking validity of partial and completed boards according to standard
//! rules
//! * Solving boards using plain backtracking, backtracking with the
//! Minimum-Remaining-Values (MRV) heuristic, Naked-Singles constraint
//! propagation, or Dancing-Links exact-cover search (Knuth's Algorithm X)
//! * Reporting comparable effort metrics for every strategy, so callers can
//! display which strategy solved a puzzle and how much work it took
//!
//! # Parsing and printing boards
//!
//! A board is encoded as a single 81-character code, rows concatenated
//! top-to-bottom and left-to-right, with `'1'` to `'9'` for filled cells and
//! `'0'` or `'.'` for empty ones. See [SudokuBoard::parse] for details.
//!
//! ```
//! use sudoku_solvers::SudokuBoard;
//!
//! let board = SudokuBoard::parse("\
//!     530070000\
//!     600195000\
//!     098000060\
//!     800060003\
//!     400803001\
//!     700020006\
//!     060000280\
//!     000419005\
//!     000080079").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Checking validity
//!
//! A *partial* board is valid if no row, column, or 3x3 box contains a
//! duplicate digit; a *completed* board is valid if every unit contains each
//! digit exactly once.
//!
//! ```
//! use sudoku_solvers::SudokuBoard;
//!
//! let mut board = SudokuBoard::new();
//! board.set_cell(0, 0, 5).unwrap();
//! board.set_cell(0, 7, 5).unwrap();
//! assert!(!board.is_valid_partial());
//! ```
//!
//! # Solving boards
//!
//! All solvers implement the [Solver](solver::Solver) trait. A solve returns
//! a [SolveReport](solver::SolveReport) carrying the outcome, the strategy's
//! effort counters and the elapsed wall-clock time. The input board is never
//! modified.
//!
//! ```
//! use sudoku_solvers::SudokuBoard;
//! use sudoku_solvers::solver::{BacktrackingSolver, Solver};
//!
//! let board = sudoku_solvers::puzzles::exemplar(
//!     sudoku_solvers::puzzles::Difficulty::Easy);
//! let report = BacktrackingSolver.solve(&board);
//!
//! assert!(report.is_solved());
//! assert!(report.solution().unwrap().is_valid_complete());
//! ```
//!
//! # Comparing strategies
//!
//! The [MetricsCollector](metrics::MetricsCollector) wraps any solver's
//! execution and accumulates the reports for later comparison, for example by
//! a visualization layer.
//!
//! ```
//! use sudoku_solvers::metrics::MetricsCollector;
//! use sudoku_solvers::puzzles::{self, Difficulty};
//! use sudoku_solvers::solver::{BacktrackingSolver, MrvBacktrackingSolver};
//!
//! let board = puzzles::exemplar(Difficulty::Easy);
//! let mut collector = MetricsCollector::new();
//! collector.run(&BacktrackingSolver, &board);
//! collector.run(&MrvBacktrackingSolver, &board);
//!
//! assert!(collector.fastest().is_some());
//! ```

pub mod candidates;
pub mod error;
pub mod metrics;
pub mod puzzles;
pub mod solver;


use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a board, as well as the number of
/// digits.
pub const GRID_SIZE: usize = 9;

/// The number of rows and columns of one 3x3 box.
pub const BOX_SIZE: usize = 3;

/// The total number of cells of a board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

pub(crate) fn index(row: usize, column: usize) -> usize {
    row * GRID_SIZE + column
}

pub(crate) fn box_of(row: usize, column: usize) -> usize {
    row / BOX_SIZE * BOX_SIZE + column / BOX_SIZE
}

fn to_char(cell: u8) -> char {
    if cell == 0 {
        ' '
    }
    else {
        (b'0' + cell) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..GRID_SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &SudokuBoard, row: usize) -> String {
    line('║', '║', '│', |column| to_char(board.cells[index(row, column)]),
        ' ', '║', true)
}

/// A Sudoku board is a fixed 9x9 grid of cells, each of which is either
/// empty or filled with a digit from 1 to 9. The grid is composed of 9 rows,
/// 9 columns, and 9 non-overlapping 3x3 boxes; a valid solution contains
/// each digit exactly once in every such unit.
///
/// Boards are exchanged as 81-character codes (see [SudokuBoard::parse]) and
/// can be pretty-printed via their `Display` implementation:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 5 │ 3 │   ║   │ 7 │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 6 │   │   ║ 1 │ 9 │ 5 ║   │   │   ║
/// ...
/// ```
///
/// Solvers never modify a caller's board; they clone it and return new
/// instances in their outcome.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuBoard {
    cells: [u8; CELL_COUNT]
}

impl Display for SudokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for row in 0..GRID_SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl Default for SudokuBoard {
    fn default() -> SudokuBoard {
        SudokuBoard::new()
    }
}

impl SudokuBoard {

    /// Creates a new, completely empty board.
    pub fn new() -> SudokuBoard {
        SudokuBoard {
            cells: [0; CELL_COUNT]
        }
    }

    /// Parses a code encoding a board. The code has to consist of exactly 81
    /// characters, listing the cells left-to-right, top-to-bottom, where each
    /// row is completed before the next one is started. The characters `'1'`
    /// to `'9'` denote a filled cell, while `'0'` and `'.'` both denote an
    /// empty one.
    ///
    /// Parsing is lossless with respect to
    /// [to_parseable_string](#method.to_parseable_string), which always emits
    /// `'0'` for empty cells.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::WrongLength` If the code does not contain exactly
    /// 81 characters.
    /// * `SudokuParseError::InvalidCharacter` If the code contains a
    /// character other than `'0'` to `'9'` and `'.'`.
    pub fn parse(code: &str) -> SudokuParseResult<SudokuBoard> {
        if code.chars().count() != CELL_COUNT {
            return Err(SudokuParseError::WrongLength);
        }

        let mut cells = [0u8; CELL_COUNT];

        for (i, c) in code.chars().enumerate() {
            cells[i] = match c {
                '.' => 0,
                '0'..='9' => c as u8 - b'0',
                _ => return Err(SudokuParseError::InvalidCharacter)
            };
        }

        Ok(SudokuBoard { cells })
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [SudokuBoard::parse](#method.parse). Empty cells are always rendered
    /// as `'0'`, making this the canonical form of a board code.
    ///
    /// ```
    /// use sudoku_solvers::SudokuBoard;
    ///
    /// let code = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..6..5.1.3..";
    /// let board = SudokuBoard::parse(code).unwrap();
    ///
    /// assert_eq!(code.replace('.', "0"), board.to_parseable_string());
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|&cell| (b'0' + cell) as char)
            .collect()
    }

    /// Gets the content of the cell at the specified position, that is,
    /// `Some(digit)` for a filled cell and `None` for an empty one.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, row: usize, column: usize)
            -> SudokuResult<Option<u8>> {
        if row >= GRID_SIZE || column >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            match self.cells[index(row, column)] {
                0 => Ok(None),
                digit => Ok(Some(digit))
            }
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`. To empty a cell, use [clear_cell](#method.clear_cell).
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<()> {
        if row >= GRID_SIZE || column >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit as usize > GRID_SIZE {
            return Err(SudokuError::InvalidDigit);
        }

        self.cells[index(row, column)] = digit;
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        if row >= GRID_SIZE || column >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(row, column)] = 0;
        Ok(())
    }

    /// Counts the number of clues given by this board, that is, the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Indicates whether this board is complete, i.e. every cell is filled
    /// with a digit. Note this says nothing about validity; use
    /// [is_valid_complete](#method.is_valid_complete) for that.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Returns a lazy iterator over the positions of all empty cells, as
    /// `(row, column)` pairs in row-major order (left-to-right,
    /// top-to-bottom). Calling this method again restarts the iteration.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 0)
            .map(|(i, _)| (i / GRID_SIZE, i % GRID_SIZE))
    }

    /// Gets the positions of the 9 cells of the given row, left-to-right.
    ///
    /// # Errors
    ///
    /// If `row` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row_positions(row: usize) -> SudokuResult<[(usize, usize); 9]> {
        if row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let mut positions = [(0, 0); GRID_SIZE];

        for (column, position) in positions.iter_mut().enumerate() {
            *position = (row, column);
        }

        Ok(positions)
    }

    /// Gets the positions of the 9 cells of the given column, top-to-bottom.
    ///
    /// # Errors
    ///
    /// If `column` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn column_positions(column: usize)
            -> SudokuResult<[(usize, usize); 9]> {
        if column >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let mut positions = [(0, 0); GRID_SIZE];

        for (row, position) in positions.iter_mut().enumerate() {
            *position = (row, column);
        }

        Ok(positions)
    }

    /// Gets the positions of the 9 cells of the given 3x3 box, in row-major
    /// order. Boxes are indexed 0 to 8, left-to-right, top-to-bottom.
    ///
    /// # Errors
    ///
    /// If `box_index` is not in the range `[0, 9[`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn box_positions(box_index: usize)
            -> SudokuResult<[(usize, usize); 9]> {
        if box_index >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let base_row = box_index / BOX_SIZE * BOX_SIZE;
        let base_column = box_index % BOX_SIZE * BOX_SIZE;
        let mut positions = [(0, 0); GRID_SIZE];

        for (i, position) in positions.iter_mut().enumerate() {
            *position = (base_row + i / BOX_SIZE, base_column + i % BOX_SIZE);
        }

        Ok(positions)
    }

    fn unit_has_duplicate(&self, positions: &[(usize, usize); 9]) -> bool {
        let mut seen = 0u16;

        for &(row, column) in positions {
            let cell = self.cells[index(row, column)];

            if cell == 0 {
                continue;
            }

            let mask = 1u16 << cell;

            if seen & mask != 0 {
                return true;
            }

            seen |= mask;
        }

        false
    }

    /// Indicates whether this board is a valid partial board, that is, no
    /// row, column, or box contains a duplicate digit. Empty cells are
    /// ignored. Every valid completed board is also a valid partial board.
    pub fn is_valid_partial(&self) -> bool {
        for unit in 0..GRID_SIZE {
            if self.unit_has_duplicate(&SudokuBoard::row_positions(unit).unwrap()) ||
                    self.unit_has_duplicate(&SudokuBoard::column_positions(unit).unwrap()) ||
                    self.unit_has_duplicate(&SudokuBoard::box_positions(unit).unwrap()) {
                return false;
            }
        }

        true
    }

    /// Indicates whether this board is a valid completed board, that is, it
    /// is complete and every row, column, and box contains each digit from 1
    /// to 9 exactly once.
    pub fn is_valid_complete(&self) -> bool {
        self.is_complete() && self.is_valid_partial()
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together; 0 denotes
    /// an empty cell.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }
}

impl From<SudokuBoard> for String {
    fn from(board: SudokuBoard) -> String {
        board.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuBoard {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuBoard> {
        SudokuBoard::parse(code.as_str())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const EXAMPLE: &str = "\
        530070000\
        600195000\
        098000060\
        800060003\
        400803001\
        700020006\
        060000280\
        000419005\
        000080079";

    #[test]
    fn parse_ok() {
        let board = SudokuBoard::parse(EXAMPLE).unwrap();

        assert_eq!(Some(5), board.get_cell(0, 0).unwrap());
        assert_eq!(Some(3), board.get_cell(0, 1).unwrap());
        assert_eq!(None, board.get_cell(0, 2).unwrap());
        assert_eq!(Some(7), board.get_cell(0, 4).unwrap());
        assert_eq!(Some(6), board.get_cell(1, 0).unwrap());
        assert_eq!(Some(7), board.get_cell(8, 7).unwrap());
        assert_eq!(Some(9), board.get_cell(8, 8).unwrap());
        assert_eq!(30, board.count_clues());
    }

    #[test]
    fn parse_accepts_dots_for_empty_cells() {
        let dotted = EXAMPLE.replace('0', ".");
        let board = SudokuBoard::parse(dotted.as_str()).unwrap();

        assert_eq!(SudokuBoard::parse(EXAMPLE).unwrap(), board);
        assert_eq!(EXAMPLE, board.to_parseable_string());
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(Err(SudokuParseError::WrongLength),
            SudokuBoard::parse(""));
        assert_eq!(Err(SudokuParseError::WrongLength),
            SudokuBoard::parse(&EXAMPLE[..80]));
        assert_eq!(Err(SudokuParseError::WrongLength),
            SudokuBoard::parse(format!("{}0", EXAMPLE).as_str()));
    }

    #[test]
    fn parse_invalid_character() {
        let mut code = String::from(&EXAMPLE[..80]);
        code.push('x');

        assert_eq!(Err(SudokuParseError::InvalidCharacter),
            SudokuBoard::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let board = SudokuBoard::parse(EXAMPLE).unwrap();
        let code = board.to_parseable_string();

        assert_eq!(EXAMPLE, code);
        assert_eq!(board, SudokuBoard::parse(code.as_str()).unwrap());
    }

    #[test]
    fn cell_access_out_of_bounds() {
        let mut board = SudokuBoard::new();

        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), board.set_cell(10, 3, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), board.clear_cell(3, 10));
    }

    #[test]
    fn set_cell_invalid_digit() {
        let mut board = SudokuBoard::new();

        assert_eq!(Err(SudokuError::InvalidDigit), board.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidDigit), board.set_cell(0, 0, 10));
    }

    #[test]
    fn set_and_clear_cell() {
        let mut board = SudokuBoard::new();

        board.set_cell(4, 7, 3).unwrap();
        assert_eq!(Some(3), board.get_cell(4, 7).unwrap());

        board.set_cell(4, 7, 8).unwrap();
        assert_eq!(Some(8), board.get_cell(4, 7).unwrap());

        board.clear_cell(4, 7).unwrap();
        assert_eq!(None, board.get_cell(4, 7).unwrap());
    }

    #[test]
    fn empty_board_has_81_empty_cells() {
        let board = SudokuBoard::new();
        let empty_cells: Vec<(usize, usize)> = board.empty_cells().collect();

        assert_eq!(0, board.count_clues());
        assert_eq!(81, empty_cells.len());
        assert_eq!((0, 0), empty_cells[0]);
        assert_eq!((0, 8), empty_cells[8]);
        assert_eq!((8, 8), empty_cells[80]);
    }

    #[test]
    fn empty_cells_skips_clues_in_row_major_order() {
        let board = SudokuBoard::parse(EXAMPLE).unwrap();
        let empty_cells: Vec<(usize, usize)> = board.empty_cells().collect();

        assert_eq!(51, empty_cells.len());
        assert_eq!((0, 2), empty_cells[0]);
        assert_eq!((0, 3), empty_cells[1]);
        assert_eq!((0, 5), empty_cells[2]);
    }

    #[test]
    fn duplicate_in_row_invalidates_partial_board() {
        let mut board = SudokuBoard::new();
        board.set_cell(2, 1, 5).unwrap();
        board.set_cell(2, 6, 5).unwrap();

        assert!(!board.is_valid_partial());
    }

    #[test]
    fn duplicate_in_column_invalidates_partial_board() {
        let mut board = SudokuBoard::new();
        board.set_cell(0, 4, 7).unwrap();
        board.set_cell(6, 4, 7).unwrap();

        assert!(!board.is_valid_partial());
    }

    #[test]
    fn duplicate_in_box_invalidates_partial_board() {
        let mut board = SudokuBoard::new();
        board.set_cell(3, 3, 2).unwrap();
        board.set_cell(5, 5, 2).unwrap();

        assert!(!board.is_valid_partial());
    }

    #[test]
    fn partial_board_without_duplicates_is_valid() {
        let board = SudokuBoard::parse(EXAMPLE).unwrap();

        assert!(board.is_valid_partial());
        assert!(!board.is_complete());
        assert!(!board.is_valid_complete());
    }

    #[test]
    fn completed_board_validity() {
        let solution = "\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            345286179";
        let board = SudokuBoard::parse(solution).unwrap();

        assert!(board.is_complete());
        assert!(board.is_valid_complete());

        let mut broken = board.clone();
        broken.set_cell(0, 0, 4).unwrap();

        assert!(broken.is_complete());
        assert!(!broken.is_valid_complete());
    }

    #[test]
    fn box_positions_cover_expected_cells() {
        let positions = SudokuBoard::box_positions(4).unwrap();

        assert_eq!((3, 3), positions[0]);
        assert_eq!((3, 5), positions[2]);
        assert_eq!((5, 5), positions[8]);

        assert_eq!(Err(SudokuError::OutOfBounds),
            SudokuBoard::box_positions(9));
    }

    #[test]
    fn serde_round_trip_uses_board_code() {
        let board = SudokuBoard::parse(EXAMPLE).unwrap();
        let json = serde_json::to_string(&board).unwrap();

        assert_eq!(format!("\"{}\"", EXAMPLE), json);

        let deserialized: SudokuBoard = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}
