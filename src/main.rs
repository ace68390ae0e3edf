use rayon::prelude::*;
use sudoku_engine::generate_puzzle;

fn main() {
    // Clue counts for the easy/medium/hard tiers the UI offers
    let difficulties = [40u8, 30, 22];
    let puzzles: Vec<_> = difficulties
        .par_iter()
        .map(|&difficulty| (difficulty, generate_puzzle(difficulty).unwrap()))
        .collect();

    for (difficulty, puzzle) in puzzles {
        println!("Puzzle with {difficulty} clues ({} gaps):", puzzle.num_empty());
        println!("{puzzle}");
    }
}
