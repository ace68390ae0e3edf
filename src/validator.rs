use itertools::iproduct;
use std::num::NonZeroU8;

use crate::board::{Board, HEIGHT, WIDTH};

/// Checks whether `digit` may legally be placed at `(row, col)`: no other
/// cell in the same row, column or 3x3 box may already hold it. The cell at
/// `(row, col)` itself is excluded from all three scans, so a value already
/// on the board can be re-validated in place.
///
/// Pure and O(27) with early exit. This is the authoritative legality check
/// used wherever a single placement must be judged without a full solve,
/// including the create-mode solvability feedback, which deliberately stays
/// local instead of solving the whole board.
pub fn is_placement_valid(board: &Board, row: usize, col: usize, digit: NonZeroU8) -> bool {
    for c in 0..WIDTH {
        if c != col && board.cell(row, c).value() == Some(digit) {
            return false;
        }
    }

    for r in 0..HEIGHT {
        if r != row && board.cell(r, col).value() == Some(digit) {
            return false;
        }
    }

    let box_row = row - row % 3;
    let box_col = col - col % 3;
    for (r, c) in iproduct!(box_row..box_row + 3, box_col..box_col + 3) {
        if (r, c) != (row, col) && board.cell(r, c).value() == Some(digit) {
            return false;
        }
    }

    true
}
