use common::games::tictactoe::{BOARD_SIZE, GameStatus, Position, TicTacToeGameState};

/// Board with coordinates; cells of the winning line are starred.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let mut out = String::from("    0   1   2\n");
    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let pos = Position::new(row, col);
                let symbol = state.board.get(pos).map(|mark| mark.symbol()).unwrap_or(' ');
                let highlighted = state.winning_line.is_some_and(|line| line.contains(pos));
                if highlighted {
                    format!("*{}*", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&format!("{}  {}\n", row, cells.join("|")));
    }
    out
}

pub fn render_status(state: &TicTacToeGameState) -> String {
    match state.status {
        GameStatus::InProgress => format!("Your move (R) against the {} computer (B).", state.difficulty),
        GameStatus::PlayerWon => "You win!".to_string(),
        GameStatus::AiWon => "The computer wins.".to_string(),
        GameStatus::Tie => "It's a tie.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Difficulty, Mark};

    #[test]
    fn test_render_empty_board() {
        let state = TicTacToeGameState::new(Difficulty::Easy, 0);
        let text = render_board(&state);
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("0   . | . | . "));
        assert!(text.contains("2   . | . | . "));
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy, 0);
        for (mark, row, col) in [
            (Mark::Player, 0, 0),
            (Mark::Ai, 1, 0),
            (Mark::Player, 0, 1),
            (Mark::Ai, 1, 1),
            (Mark::Player, 0, 2),
        ] {
            state.place_mark(mark, Position::new(row, col)).unwrap();
        }
        let text = render_board(&state);
        assert!(text.contains("*R*|*R*|*R*"));
        assert!(text.contains(" B | B | . "));
        assert_eq!(render_status(&state), "You win!");
    }

    #[test]
    fn test_status_mentions_difficulty() {
        let state = TicTacToeGameState::new(Difficulty::Hard, 0);
        assert!(render_status(&state).contains("hard"));
    }
}
