mod command;
mod config;
mod render;
mod runner;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, TicTacToeController};
use common::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy, medium or hard; overrides the config file
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random moves; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path, defaults to a file next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = config::get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        None
    };
    logger::init_logger(prefix);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", config_manager.file_path().display());
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}, difficulty {}", rng.seed(), config.difficulty);

    let controller = TicTacToeController::new(config.difficulty);
    runner::run_game(controller, rng).await?;

    Ok(())
}
