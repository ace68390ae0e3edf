mod board;
mod digit_set;
mod generator;
mod solver;
mod validator;

pub use board::{Board, Cell, HEIGHT, NUM_CELLS, WIDTH};
pub use digit_set::DigitSet;
pub use generator::{
    create_puzzle_from_solution, generate_full_solution, generate_puzzle, GeneratorError,
};
pub use solver::{fill_grid, solve};
pub use validator::is_placement_valid;
