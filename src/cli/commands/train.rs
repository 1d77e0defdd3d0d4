//! Train command - self-play between two value agents

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    agent::{SavedAgent, TrainingMetadata, ValueAgent, policy_file_name},
    cli::output::{policy_saved, training_report},
    config::AgentConfig,
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
    tictactoe::Player,
};

/// Default name of the agent trained as X
pub(crate) const DEFAULT_X_NAME: &str = "p1";
/// Default name of the agent trained as O
pub(crate) const DEFAULT_O_NAME: &str = "p2";

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!("Invalid value '{other}' for {flag} (expected 'x' or 'o')")),
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train two agents against each other")]
pub struct TrainArgs {
    /// Number of self-play episodes
    #[arg(long, short = 'e', default_value_t = 50_000)]
    pub episodes: usize,

    /// JSON file with agent hyperparameters (`epsilon`, `learning_rate`,
    /// `discount`, `default_value`); missing fields take defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log a `Rounds n` line every N episodes (0 turns it off)
    #[arg(long, default_value_t = 1000)]
    pub report_every: usize,

    /// Directory for the trained policy files
    #[arg(long, short = 'O', default_value = ".")]
    pub output_dir: PathBuf,

    /// Name of the agent playing X
    #[arg(long, default_value = DEFAULT_X_NAME)]
    pub p1_name: String,

    /// Name of the agent playing O
    #[arg(long, default_value = DEFAULT_O_NAME)]
    pub p2_name: String,

    /// Show progress bar
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

impl TrainArgs {
    fn agent_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.p1_name,
            Player::O => &self.p2_name,
        }
    }

    fn agent_config(&self) -> Result<AgentConfig> {
        let mut config = match &self.config {
            Some(path) => AgentConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AgentConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let agent_config = args.agent_config()?;
    let mut p1 = ValueAgent::new(args.p1_name.clone(), agent_config);
    let mut p2 = ValueAgent::new(args.p2_name.clone(), agent_config);

    let config = TrainingConfig {
        episodes: args.episodes,
        seed: args.seed,
        report_every: args.report_every,
        ..TrainingConfig::default()
    };

    let mut pipeline = TrainingPipeline::new(config);
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = pipeline.run(&mut p1, &mut p2)?;

    print!("{}", training_report(&result));

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    for (agent, player) in [(&p1, Player::X), (&p2, Player::O)] {
        let metadata = TrainingMetadata {
            episodes_trained: Some(result.total_episodes),
            seed: args.seed,
            player: Some(player),
        };
        let path = args
            .output_dir
            .join(policy_file_name(args.agent_name(player)));
        SavedAgent::from_agent(agent, metadata).save_to_file(&path)?;
        print!("{}", policy_saved(player, &path, agent.table().len()));
    }

    if let Some(summary) = &args.summary {
        result
            .save(summary)
            .with_context(|| format!("Failed to write summary {}", summary.display()))?;
        println!("Summary written to {}", summary.display());
    }

    Ok(())
}
