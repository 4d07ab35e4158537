use crate::games::SessionRng;
use super::board::Board;
use super::minimax::best_move;
use super::types::{Difficulty, Position};

/// Chance that a Medium bot plays a random cell instead of the optimal one.
pub const MEDIUM_RANDOM_MOVE_CHANCE: f64 = 0.5;

pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_RANDOM_MOVE_CHANCE) {
                calculate_random_move(board, rng)
            } else {
                best_move(board)
            }
        }
        Difficulty::Hard => best_move(board),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    rng.choose(&board.available_moves())
}
