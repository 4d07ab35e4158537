use crate::games::SessionRng;
use crate::log;
use super::bot_controller::calculate_move;
use super::board::Board;
use super::game_state::{MoveRejection, TicTacToeGameState};
use super::types::{Difficulty, GameStatus, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Applied(GameStatus),
    Rejected(MoveRejection),
}

impl MoveResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveResult::Applied(_))
    }
}

/// Everything the Ai needs to pick a move, detached from the live game so the
/// search can run elsewhere. The generation ties the answer to the game it was
/// asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiRequest {
    pub generation: u64,
    pub board: Board,
    pub difficulty: Difficulty,
}

impl AiRequest {
    pub fn resolve(&self, rng: &mut SessionRng) -> Option<AiTurn> {
        calculate_move(self.difficulty, &self.board, rng).map(|position| AiTurn {
            generation: self.generation,
            position,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTurn {
    pub generation: u64,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player: MoveResult,
    pub ai: Option<(Position, MoveResult)>,
}

#[derive(Debug)]
pub struct TicTacToeController {
    state: TicTacToeGameState,
}

impl TicTacToeController {
    pub fn new(difficulty: Difficulty) -> Self {
        log!("[game:0] New game, difficulty {}", difficulty);
        Self {
            state: TicTacToeGameState::new(difficulty, 0),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn snapshot(&self) -> TicTacToeGameState {
        self.state.clone()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    /// Difficulty can only change before the first move of a game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), String> {
        if self.state.status.is_terminal() || self.state.move_count() > 0 {
            return Err(format!(
                "Difficulty can only be changed before the first move (current: {})",
                self.state.difficulty
            ));
        }
        self.state.difficulty = difficulty;
        log!("[game:{}] Difficulty set to {}", self.state.generation, difficulty);
        Ok(())
    }

    pub fn play(&mut self, pos: Position, mark: Mark) -> MoveResult {
        let generation = self.state.generation;
        match self.state.place_mark(mark, pos) {
            Ok(()) => {
                let status = self.state.status;
                if status.is_terminal() {
                    log!("[game:{}] Game over after {:?} at {}: {}", generation, mark, pos, status);
                }
                MoveResult::Applied(status)
            }
            Err(e) => {
                log!("[game:{}] {:?} move at {} ignored: {}", generation, mark, pos, e);
                MoveResult::Rejected(e)
            }
        }
    }

    pub fn play_human(&mut self, pos: Position) -> MoveResult {
        self.play(pos, Mark::Player)
    }

    /// The pending Ai turn, if the game is waiting on one.
    pub fn ai_request(&self) -> Option<AiRequest> {
        if self.state.status.is_terminal() || self.state.current_mark != Mark::Ai {
            return None;
        }
        Some(AiRequest {
            generation: self.state.generation,
            board: self.state.board,
            difficulty: self.state.difficulty,
        })
    }

    /// Applies an Ai turn unless the game it was computed for has since been reset.
    pub fn apply_ai_turn(&mut self, turn: AiTurn) -> MoveResult {
        if turn.generation != self.state.generation {
            log!(
                "[game:{}] Discarding Ai move at {} computed for game {}",
                self.state.generation,
                turn.position,
                turn.generation
            );
            return MoveResult::Rejected(MoveRejection::StaleTurn);
        }
        self.play(turn.position, Mark::Ai)
    }

    /// Human move followed, if the game goes on, by the Ai's reply.
    pub fn play_turn(&mut self, pos: Position, rng: &mut SessionRng) -> TurnReport {
        let player = self.play_human(pos);
        if !player.is_applied() {
            return TurnReport { player, ai: None };
        }

        let ai = self
            .ai_request()
            .and_then(|request| request.resolve(rng))
            .map(|turn| (turn.position, self.apply_ai_turn(turn)));

        TurnReport { player, ai }
    }

    pub fn reset(&mut self) {
        let generation = self.state.generation + 1;
        self.state = TicTacToeGameState::new(self.state.difficulty, generation);
        log!("[game:{}] Game reset, difficulty {}", generation, self.state.difficulty);
    }
}
