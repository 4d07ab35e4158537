use std::sync::Arc;

use common::games::SessionRng;
use common::games::tictactoe::{
    AiRequest, AiTurn, MoveResult, Position, TicTacToeController,
};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};

use crate::command::{ClientCommand, HELP, parse_command};
use crate::render::{render_board, render_status};

type PendingAiTurn = JoinHandle<Option<AiTurn>>;

/// Plays games on stdin/stdout until `quit` or end of input. The Ai searches
/// on a blocking worker; input keeps being read meanwhile, so a `reset` typed
/// during the search wins and the late answer is discarded by the controller.
pub async fn run_game(mut controller: TicTacToeController, rng: SessionRng) -> Result<(), String> {
    let rng = Arc::new(Mutex::new(rng));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<PendingAiTurn> = None;

    println!("{}", HELP);
    print_state(&controller);

    loop {
        if pending.is_none()
            && let Some(request) = controller.ai_request()
        {
            pending = Some(spawn_ai_turn(request, rng.clone()));
        }

        tokio::select! {
            result = wait_for_ai(&mut pending), if pending.is_some() => {
                pending = None;
                let turn = result.map_err(|e| format!("Ai worker failed: {}", e))?;
                if let Some(turn) = turn {
                    apply_ai_turn(&mut controller, turn);
                }
            }
            line = lines.next_line() => {
                let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
                let Some(line) = line else {
                    log!("End of input, leaving");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(ClientCommand::Quit) => break,
                    Ok(command) => handle_command(&mut controller, command),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    Ok(())
}

fn spawn_ai_turn(request: AiRequest, rng: Arc<Mutex<SessionRng>>) -> PendingAiTurn {
    tokio::task::spawn_blocking(move || {
        let mut rng = rng.blocking_lock();
        request.resolve(&mut rng)
    })
}

async fn wait_for_ai(pending: &mut Option<PendingAiTurn>) -> Result<Option<AiTurn>, JoinError> {
    match pending.as_mut() {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

fn apply_ai_turn(controller: &mut TicTacToeController, turn: AiTurn) {
    match controller.apply_ai_turn(turn) {
        MoveResult::Applied(_) => {
            println!("Computer plays {}", turn.position);
            print_state(controller);
        }
        MoveResult::Rejected(e) => log!("Ai move at {} dropped: {}", turn.position, e),
    }
}

fn handle_command(controller: &mut TicTacToeController, command: ClientCommand) {
    match command {
        ClientCommand::PlaceMark { row, col } => {
            match controller.play_human(Position::new(row, col)) {
                MoveResult::Applied(_) => print_state(controller),
                MoveResult::Rejected(e) => println!("{}", e),
            }
        }
        ClientCommand::Reset => {
            controller.reset();
            println!("New game.");
            print_state(controller);
        }
        ClientCommand::SetDifficulty(difficulty) => match controller.set_difficulty(difficulty) {
            Ok(()) => println!("Difficulty: {}", difficulty),
            Err(e) => println!("{}", e),
        },
        ClientCommand::Show => print_state(controller),
        ClientCommand::Help => println!("{}", HELP),
        ClientCommand::Quit => {}
    }
}

fn print_state(controller: &TicTacToeController) {
    let state = controller.state();
    print!("{}", render_board(state));
    println!("{}", render_status(state));
}
