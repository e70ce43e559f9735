mod colors;
mod config;
mod offline;
mod state;

use std::path::PathBuf;

use clap::Parser;
use common::games::tictactoe::Difficulty;
use common::{log, logger};

use config::get_config_manager;
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play Tic-Tac-Toe against the computer")]
struct Args {
    /// Starting difficulty: easy, medium, hard or impossible
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Config file path (defaults to tictactoe_config.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Write log lines to stderr
    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let mut config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.tictactoe.difficulty = difficulty;
    }

    let settings = config.tictactoe.to_session_settings(args.seed);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let final_difficulty = run_tictactoe_game(stdin.lock(), &mut stdout, &settings, config.ui.use_colors)?;

    config.tictactoe.difficulty = final_difficulty;
    if let Err(e) = config_manager.set_config(&config) {
        log!("Failed to save config: {}", e);
    }

    Ok(())
}
