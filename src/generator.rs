use itertools::iproduct;
use rand::Rng;
use thiserror::Error;

use crate::board::{Board, HEIGHT, NUM_CELLS, WIDTH};
use crate::solver::fill_grid;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("difficulty is the number of clues to keep and must be at most 81, got {0}")]
    InvalidDifficulty(u8),
}

/// Generates a full valid solution from an empty grid via randomized
/// backtracking. Every cell's answer is stamped with its value, so puzzles
/// carved from the result can serve hints.
///
/// A correct backtracker cannot fail on an empty 9x9 grid, but we don't rely
/// on that and retry instead of asserting.
pub fn generate_full_solution(rng: &mut impl Rng) -> Board {
    loop {
        let mut board = Board::new_empty();
        if fill_grid(&mut board, rng) {
            for (row, col) in iproduct!(0..HEIGHT, 0..WIDTH) {
                let cell = board.cell_mut(row, col);
                cell.answer = cell.value;
            }
            return board;
        }
    }
}

/// Carves a puzzle out of a full solution by clearing uniformly random cells
/// until only `difficulty` clues remain. Surviving cells become readonly
/// clues; cleared cells become editable and empty. Every cell keeps the
/// solution digit as its answer.
///
/// No uniqueness check is performed, so the puzzle may admit multiple
/// solutions. `difficulty == 0` yields a fully blank editable grid,
/// `difficulty == 81` returns the solution as an all-clue grid, and anything
/// above 81 is rejected.
///
/// # Panics
///
/// Panics if `solution` is not a filled, conflict-free grid.
pub fn create_puzzle_from_solution(
    solution: &Board,
    difficulty: u8,
    rng: &mut impl Rng,
) -> Result<Board, GeneratorError> {
    if usize::from(difficulty) > NUM_CELLS {
        return Err(GeneratorError::InvalidDifficulty(difficulty));
    }
    assert!(
        solution.is_filled() && !solution.has_conflicts(),
        "puzzles can only be carved from a complete valid solution"
    );

    let mut puzzle = *solution;
    let mut cells_to_remove = NUM_CELLS - usize::from(difficulty);
    while cells_to_remove > 0 {
        let row = rng.gen_range(0..HEIGHT);
        let col = rng.gen_range(0..WIDTH);
        if !puzzle.cell(row, col).is_empty() {
            puzzle.set_value(row, col, None);
            cells_to_remove -= 1;
        }
    }

    for (row, col) in iproduct!(0..HEIGHT, 0..WIDTH) {
        let answer = solution.cell(row, col).value();
        let cell = puzzle.cell_mut(row, col);
        cell.answer = answer;
        cell.readonly = !cell.is_empty();
        cell.notes.clear();
    }

    Ok(puzzle)
}

/// Generates a fresh playable puzzle with `difficulty` clues, using the
/// thread-local rng. Composition of [generate_full_solution] and
/// [create_puzzle_from_solution] for callers that don't need seeding.
pub fn generate_puzzle(difficulty: u8) -> Result<Board, GeneratorError> {
    let mut rng = rand::thread_rng();
    let solution = generate_full_solution(&mut rng);
    create_puzzle_from_solution(&solution, difficulty, &mut rng)
}
