use itertools::iproduct;
use std::fmt;
use std::num::NonZeroU8;

use crate::digit_set::DigitSet;
use crate::validator::is_placement_valid;

pub const WIDTH: usize = 9;
pub const HEIGHT: usize = 9;
pub const NUM_CELLS: usize = WIDTH * HEIGHT;

/// One of the 81 positions on a board.
///
/// `value` is the digit currently on the board (`None` = empty). `answer` is
/// the solution digit recorded when a puzzle was carved from a full solution
/// (`None` on hand-authored blank grids). `readonly` marks generator clues;
/// a readonly cell always holds its answer and is never mutated. `notes` are
/// player-authored candidate marks, only meaningful while `value` is `None`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub(crate) value: Option<NonZeroU8>,
    pub(crate) answer: Option<NonZeroU8>,
    pub(crate) readonly: bool,
    pub(crate) notes: DigitSet,
}

impl Cell {
    const EMPTY: Cell = Cell {
        value: None,
        answer: None,
        readonly: false,
        notes: DigitSet::new_empty(),
    };

    #[inline]
    pub fn value(&self) -> Option<NonZeroU8> {
        self.value
    }

    #[inline]
    pub fn answer(&self) -> Option<NonZeroU8> {
        self.answer
    }

    #[inline]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn notes(&self) -> &DigitSet {
        &self.notes
    }
}

/// A [Board] is a 9x9 sudoku board.
/// Cells are ordered by rows, first left-to-right, then top-to-bottom.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Board {
            cells: [Cell::EMPTY; NUM_CELLS],
        }
    }

    fn index(row: usize, col: usize) -> usize {
        assert!(row < HEIGHT && col < WIDTH);
        row * WIDTH + col
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[Self::index(row, col)]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[Self::index(row, col)]
    }

    /// Sets or clears a cell's value. This is the only write path the solver
    /// and generator use; the readonly invariant is enforced here.
    pub fn set_value(&mut self, row: usize, col: usize, value: Option<NonZeroU8>) {
        let cell = self.cell_mut(row, col);
        assert!(!cell.readonly, "cannot write to a readonly clue cell");
        cell.value = value;
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// board is completely filled.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        iproduct!(0..HEIGHT, 0..WIDTH).find(|&(row, col)| self.cell(row, col).is_empty())
    }

    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_filled(&self) -> bool {
        self.first_empty_cell().is_none()
    }

    /// Checks whether any filled cell violates a row, column or box
    /// constraint against another filled cell.
    pub fn has_conflicts(&self) -> bool {
        iproduct!(0..HEIGHT, 0..WIDTH).any(|(row, col)| match self.cell(row, col).value {
            Some(digit) => !is_placement_valid(self, row, col, digit),
            None => false,
        })
    }

    /// Places a digit as the player would: overwrites the value, drops the
    /// cell's own notes and removes the digit from the notes of all peers in
    /// the same row, column and box.
    pub fn insert(&mut self, row: usize, col: usize, digit: NonZeroU8) {
        self.set_value(row, col, Some(digit));
        self.cell_mut(row, col).notes.clear();
        self.clean_peer_notes(row, col, digit);
    }

    /// Clears a cell's value and notes.
    pub fn erase(&mut self, row: usize, col: usize) {
        let cell = self.cell_mut(row, col);
        assert!(!cell.readonly, "cannot erase a readonly clue cell");
        cell.value = None;
        cell.notes.clear();
    }

    /// Flips a candidate mark on an empty, editable cell. Returns whether the
    /// note is present afterwards.
    pub fn toggle_note(&mut self, row: usize, col: usize, digit: NonZeroU8) -> bool {
        let cell = self.cell_mut(row, col);
        assert!(!cell.readonly, "cannot add notes to a readonly clue cell");
        assert!(cell.value.is_none(), "notes are only valid on empty cells");
        cell.notes.toggle(digit)
    }

    /// Fills in the recorded answer for a cell. Returns the revealed digit,
    /// or `None` if the cell is a clue or no answer is recorded.
    pub fn hint(&mut self, row: usize, col: usize) -> Option<NonZeroU8> {
        let cell = self.cell_mut(row, col);
        if cell.readonly {
            return None;
        }
        let answer = cell.answer?;
        cell.value = Some(answer);
        cell.notes.clear();
        self.clean_peer_notes(row, col, answer);
        Some(answer)
    }

    fn clean_peer_notes(&mut self, row: usize, col: usize, digit: NonZeroU8) {
        for c in 0..WIDTH {
            self.cell_mut(row, c).notes.remove(digit);
        }
        for r in 0..HEIGHT {
            self.cell_mut(r, col).notes.remove(digit);
        }
        let box_row = row - row % 3;
        let box_col = col - col % 3;
        for (r, c) in iproduct!(box_row..box_row + 3, box_col..box_col + 3) {
            self.cell_mut(r, c).notes.remove(digit);
        }
    }

    /// Fraction in 0..=1 of cells whose value matches their recorded answer.
    pub fn progress(&self) -> f32 {
        let correct = self
            .cells
            .iter()
            .filter(|cell| cell.value.is_some() && cell.value == cell.answer)
            .count();
        correct as f32 / NUM_CELLS as f32
    }

    /// True once every cell holds its recorded answer.
    pub fn is_finished(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.value.is_some() && cell.value == cell.answer)
    }

    /// Parses a board from a string with one character per cell: `1`-`9` for
    /// filled cells, `_` for empty cells. Whitespace is ignored.
    /// Panics on malformed input; this is a fixture helper for tests, benches
    /// and demos, not a persistence format.
    pub fn from_str(board_str: &str) -> Self {
        let mut board = Self::new_empty();
        let mut chars = board_str.chars().filter(|c| !c.is_whitespace());
        for (row, col) in iproduct!(0..HEIGHT, 0..WIDTH) {
            let character = chars.next().expect("board string has fewer than 81 cells");
            let value = match character {
                '_' => None,
                '1'..='9' => Some(NonZeroU8::new(character as u8 - b'0').unwrap()),
                _ => panic!("invalid cell character '{character}'"),
            };
            board.cell_mut(row, col).value = value;
        }
        assert!(
            chars.next().is_none(),
            "board string has more than 81 cells"
        );
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            if row != 0 && row % 3 == 0 {
                writeln!(f)?;
            }
            for col in 0..WIDTH {
                if col != 0 && col % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.cell(row, col).value {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
