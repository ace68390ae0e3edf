use rand::seq::SliceRandom;
use rand::Rng;
use std::num::NonZeroU8;

use crate::board::{Board, NUM_CELLS, WIDTH};
use crate::digit_set::MAX_DIGIT;
use crate::validator::is_placement_valid;

mod constraint_sets;
use constraint_sets::ConstraintSets;

/// Solves the board in place with set-accelerated backtracking.
///
/// Returns `true` iff a complete valid assignment was found, in which case
/// the board holds that solution. On `false` the board is exactly restored
/// to its pre-call contents: a board that already violates a constraint or
/// exhausts the search yields a clean failure, never partial progress.
///
/// Calling this on an already-solved board is a cheap no-op returning `true`.
pub fn solve(board: &mut Board) -> bool {
    if board.has_conflicts() {
        return false;
    }
    let mut sets = ConstraintSets::from_board(board);
    let solved = solve_from(board, 0, &mut sets);
    debug_assert!(!solved || (board.is_filled() && !board.has_conflicts()));
    solved
}

// Invariant: when `solve_from` returns false, `board` and `sets` are
// unchanged. Everything placed during the search has been undone.
fn solve_from(board: &mut Board, position: usize, sets: &mut ConstraintSets) -> bool {
    if position == NUM_CELLS {
        // Past the last cell, the sudoku is fully solved
        return true;
    }
    let row = position / WIDTH;
    let col = position % WIDTH;

    if !board.cell(row, col).is_empty() {
        return solve_from(board, position + 1, sets);
    }

    for digit in sets.candidates(row, col).iter() {
        board.set_value(row, col, Some(digit));
        sets.insert(row, col, digit);

        if solve_from(board, position + 1, sets) {
            return true;
        }

        board.set_value(row, col, None);
        sets.remove(row, col, digit);
    }

    false
}

/// Completes the board in place, trying candidate digits in a freshly
/// shuffled order for every cell and judging legality with the placement
/// validator. Semantically the same search as [solve], differing only in
/// candidate ordering and legality-check mechanism; repeated calls with
/// different rng states produce structurally different full grids, which is
/// what puzzle generation builds on.
pub fn fill_grid(board: &mut Board, rng: &mut impl Rng) -> bool {
    if board.has_conflicts() {
        return false;
    }
    fill_from_first_empty(board, rng)
}

fn fill_from_first_empty(board: &mut Board, rng: &mut impl Rng) -> bool {
    let Some((row, col)) = board.first_empty_cell() else {
        return true;
    };

    let mut digits: Vec<NonZeroU8> = (1u8..=MAX_DIGIT)
        .map(|digit| NonZeroU8::new(digit).unwrap())
        .collect();
    digits.shuffle(rng);

    for digit in digits {
        if is_placement_valid(board, row, col, digit) {
            board.set_value(row, col, Some(digit));
            if fill_from_first_empty(board, rng) {
                return true;
            }
            board.set_value(row, col, None);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_is_valid_solution(board: &Board) {
        assert!(board.is_filled());
        assert!(!board.has_conflicts());
    }

    #[test]
    fn solvable_difficult() {
        let mut board = Board::from_str(
            "
            __4 68_ _19
            __3 __9 2_5
            _6_ ___ __4

            6__ ___ 7_2
            ___ __7 ___
            ___ 9__ __1

            8__ _5_ __7
            _41 3_8 ___
            _2_ _91 ___
        ",
        );
        let expected_solution = Board::from_str(
            "
            274 685 319
            183 749 265
            965 123 874

            618 534 792
            492 817 653
            357 962 481

            839 256 147
            541 378 926
            726 491 538
        ",
        );
        assert!(solve(&mut board));
        assert_is_valid_solution(&board);
        assert_eq!(expected_solution, board);
    }

    #[test]
    fn not_solvable_restores_board() {
        let mut board = Board::from_str(
            "
            __4 68_ _19
            __3 __9 2_5
            _6_ ___ __4

            6__ ___ 7_2
            ___ _27 ___
            ___ 9__ __1

            8__ _5_ __7
            _41 3_8 ___
            _2_ _91 ___
        ",
        );
        let before = board;
        assert!(!solve(&mut board));
        assert_eq!(before, board);
    }

    #[test]
    fn conflicting_row_restores_board() {
        let mut board = Board::new_empty();
        board.set_value(0, 1, NonZeroU8::new(5));
        board.set_value(0, 6, NonZeroU8::new(5));
        let before = board;
        assert!(!solve(&mut board));
        assert_eq!(before, board);
    }

    #[test]
    fn empty_board_has_a_solution() {
        let mut board = Board::new_empty();
        assert!(solve(&mut board));
        assert_is_valid_solution(&board);
    }

    #[test]
    fn solve_is_idempotent_on_solved_board() {
        let mut board = Board::new_empty();
        assert!(solve(&mut board));
        let solution = board;
        assert!(solve(&mut board));
        assert_eq!(solution, board);
    }

    #[test]
    fn solve_respects_clues() {
        let mut board = Board::from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_

            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6

            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        );
        let clues = board;
        assert!(solve(&mut board));
        assert_is_valid_solution(&board);
        for row in 0..9 {
            for col in 0..9 {
                if let Some(clue) = clues.cell(row, col).value() {
                    assert_eq!(Some(clue), board.cell(row, col).value());
                }
            }
        }
    }

    #[test]
    fn fill_grid_produces_valid_solution() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::new_empty();
        assert!(fill_grid(&mut board, &mut rng));
        assert_is_valid_solution(&board);
    }

    #[test]
    fn fill_grid_respects_prefilled_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new_empty();
        board.set_value(0, 0, NonZeroU8::new(5));
        board.set_value(4, 4, NonZeroU8::new(1));
        assert!(fill_grid(&mut board, &mut rng));
        assert_is_valid_solution(&board);
        assert_eq!(NonZeroU8::new(5), board.cell(0, 0).value());
        assert_eq!(NonZeroU8::new(1), board.cell(4, 4).value());
    }

    #[test]
    fn fill_grid_rejects_conflicting_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new_empty();
        board.set_value(0, 0, NonZeroU8::new(9));
        board.set_value(8, 0, NonZeroU8::new(9));
        let before = board;
        assert!(!fill_grid(&mut board, &mut rng));
        assert_eq!(before, board);
    }

    #[test]
    fn fill_grid_is_seed_deterministic() {
        let mut board_a = Board::new_empty();
        let mut board_b = Board::new_empty();
        assert!(fill_grid(&mut board_a, &mut StdRng::seed_from_u64(123)));
        assert!(fill_grid(&mut board_b, &mut StdRng::seed_from_u64(123)));
        assert_eq!(board_a, board_b);
    }
}
