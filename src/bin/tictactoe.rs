//! Tic-tac-toe self-play trainer and console opponent

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tabular self-play learning for tic-tac-toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train two agents by self-play and save their policies
    Train(tictactoe_rl::cli::commands::train::TrainArgs),

    /// Play against a trained agent
    Play(tictactoe_rl::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => tictactoe_rl::cli::commands::train::execute(args),
        Commands::Play(args) => tictactoe_rl::cli::commands::play::execute(args),
    }
}
