use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::check_win;

pub const AI_WIN: i32 = 1;
pub const PLAYER_WIN: i32 = -1;
pub const DRAW: i32 = 0;

/// Exhaustive minimax value of `board` from the Ai's point of view.
///
/// `is_maximizing` is true when the Ai is to move. Scores carry no depth
/// discount, so every forced win scores the same regardless of length.
pub fn evaluate(board: &Board, is_maximizing: bool) -> i32 {
    match check_win(board) {
        Some(Mark::Ai) => return AI_WIN,
        Some(Mark::Player) => return PLAYER_WIN,
        _ => {}
    }
    if board.is_full() {
        return DRAW;
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            let eval = evaluate(&board.with_move(pos, Mark::Ai), false);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            let eval = evaluate(&board.with_move(pos, Mark::Player), true);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

/// The Ai's optimal move. Among equally scored moves the first one in
/// row-major order wins. `None` when the board has no empty cell.
pub fn best_move(board: &Board) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in board.available_moves() {
        let score = evaluate(&board.with_move(pos, Mark::Ai), false);
        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}
