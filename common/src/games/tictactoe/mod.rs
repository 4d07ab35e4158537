mod board;
mod bot_controller;
mod controller;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{MEDIUM_RANDOM_MOVE_CHANCE, calculate_move};
pub use controller::{AiRequest, AiTurn, MoveResult, TicTacToeController, TurnReport};
pub use game_state::{MoveRejection, TicTacToeGameState};
pub use minimax::{AI_WIN, DRAW, PLAYER_WIN, best_move, evaluate};
pub use types::{BOARD_SIZE, Difficulty, GameStatus, Line, Mark, Position};
pub use win_detector::{LINES, check_tie, check_win, check_winner};
