use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::types::{Difficulty, GameStatus, Line, Mark, Position};
use super::win_detector::{check_tie, check_winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    GameOver,
    NotYourTurn,
    OutOfBounds,
    CellOccupied,
    StaleTurn,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "Game is already over"),
            MoveRejection::NotYourTurn => write!(f, "Not your turn"),
            MoveRejection::OutOfBounds => write!(f, "Position out of bounds"),
            MoveRejection::CellOccupied => write!(f, "Cell is already marked"),
            MoveRejection::StaleTurn => write!(f, "Move belongs to a game that was reset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub status: GameStatus,
    pub winning_line: Option<Line>,
    pub difficulty: Difficulty,
    pub current_mark: Mark,
    pub last_move: Option<Position>,
    pub generation: u64,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty, generation: u64) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            winning_line: None,
            difficulty,
            current_mark: Mark::Player,
            last_move: None,
            generation,
        }
    }

    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> Result<(), MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::GameOver);
        }

        if mark != self.current_mark {
            return Err(MoveRejection::NotYourTurn);
        }

        if !pos.is_on_board() {
            return Err(MoveRejection::OutOfBounds);
        }

        if !self.board.set(pos, mark) {
            return Err(MoveRejection::CellOccupied);
        }

        self.last_move = Some(pos);
        self.check_game_over();

        if !self.status.is_terminal()
            && let Some(next) = mark.opponent()
        {
            self.current_mark = next;
        }

        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some((mark, line)) = check_winner(&self.board)
            && let Some(status) = GameStatus::from_winner(mark)
        {
            self.status = status;
            self.winning_line = Some(line);
            return;
        }

        if check_tie(&self.board) {
            self.status = GameStatus::Tie;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty_and_in_progress() {
        let state = TicTacToeGameState::new(Difficulty::Hard, 3);
        assert_eq!(state.board, Board::new());
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.winning_line, None);
        assert_eq!(state.current_mark, Mark::Player);
        assert_eq!(state.generation, 3);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy, 0);
        assert_eq!(state.place_mark(Mark::Ai, Position::new(0, 0)), Err(MoveRejection::NotYourTurn));
        assert_eq!(state.place_mark(Mark::Player, Position::new(0, 0)), Ok(()));
        assert_eq!(state.current_mark, Mark::Ai);
        assert_eq!(state.place_mark(Mark::Player, Position::new(0, 1)), Err(MoveRejection::NotYourTurn));
        assert_eq!(state.place_mark(Mark::Ai, Position::new(0, 1)), Ok(()));
        assert_eq!(state.current_mark, Mark::Player);
        assert_eq!(state.last_move, Some(Position::new(0, 1)));
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy, 0);
        state.place_mark(Mark::Player, Position::new(1, 1)).unwrap();
        let before = state.clone();

        assert_eq!(state.place_mark(Mark::Ai, Position::new(1, 1)), Err(MoveRejection::CellOccupied));
        assert_eq!(state.place_mark(Mark::Ai, Position::new(1, 3)), Err(MoveRejection::OutOfBounds));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_records_line_and_freezes_state() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy, 0);
        let moves = [
            (Mark::Player, Position::new(0, 0)),
            (Mark::Ai, Position::new(1, 0)),
            (Mark::Player, Position::new(0, 1)),
            (Mark::Ai, Position::new(1, 1)),
            (Mark::Player, Position::new(0, 2)),
        ];
        for (mark, pos) in moves {
            state.place_mark(mark, pos).unwrap();
        }

        assert_eq!(state.status, GameStatus::PlayerWon);
        assert_eq!(
            state.winning_line,
            Some(Line([Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]))
        );

        let before = state.clone();
        assert_eq!(state.place_mark(Mark::Player, Position::new(2, 2)), Err(MoveRejection::GameOver));
        assert_eq!(state.place_mark(Mark::Ai, Position::new(2, 2)), Err(MoveRejection::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy, 0);
        // R B R / R B B / B R R
        let order = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        for (row, col) in order {
            let mark = state.current_mark;
            state.place_mark(mark, Position::new(row, col)).unwrap();
        }
        assert_eq!(state.status, GameStatus::Tie);
        assert_eq!(state.winning_line, None);
        assert_eq!(state.move_count(), 9);
    }
}
