//! Play command - a trained agent against a human at the console

use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::ConsoleDisplay,
    agent::{SavedAgent, ValueAgent, policy_file_name},
    cli::{
        commands::train::{DEFAULT_O_NAME, DEFAULT_X_NAME, parse_player_token},
        output::session_score,
    },
    config::AgentConfig,
    pipeline::{HumanLearner, play_interactive},
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against a trained agent")]
pub struct PlayArgs {
    /// Path to a saved agent. Defaults to the policy `train` wrote for the
    /// agent's token: `policy_p1.msgpack` for x, `policy_p2.msgpack` for o
    #[arg(long, short = 'p')]
    pub policy: Option<PathBuf>,

    /// Directory searched for the default policy file
    #[arg(long, default_value = ".")]
    pub policy_dir: PathBuf,

    /// Which token the agent controls (`x` or `o`); X always opens
    #[arg(long, default_value = "x")]
    pub agent_player: String,

    /// Your name, used when you win
    #[arg(long, default_value = "human")]
    pub name: String,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,
}

impl PlayArgs {
    /// Policy file for an agent playing `seat`
    fn policy_path(&self, seat: Player) -> PathBuf {
        match &self.policy {
            Some(path) => path.clone(),
            None => {
                let name = match seat {
                    Player::X => DEFAULT_X_NAME,
                    Player::O => DEFAULT_O_NAME,
                };
                self.policy_dir.join(policy_file_name(name))
            }
        }
    }
}

/// Token a saved agent was trained as, when it differs from `seat`.
///
/// Tables only hold positions reached by their own token's moves, so an
/// agent in the other seat finds nothing it knows.
fn seat_mismatch(saved: &SavedAgent, seat: Player) -> Option<Player> {
    saved.metadata.player.filter(|&trained| trained != seat)
}

/// Load a saved agent for `seat`, or start from an empty table if the file is unusable
fn load_agent(path: &Path, seat: Player) -> ValueAgent {
    let loaded = SavedAgent::load_from_file(path).and_then(|saved| {
        if let Some(trained) = seat_mismatch(&saved, seat) {
            log::warn!(
                "policy {} was trained as {trained} but will play {seat}; its values will not apply",
                path.display()
            );
        }
        saved.to_agent()
    });

    match loaded {
        Ok(agent) => agent,
        Err(err) => {
            log::warn!(
                "could not load policy {}: {err:#}; playing with an untrained agent",
                path.display()
            );
            ValueAgent::new("computer", AgentConfig::default())
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let agent_player = parse_player_token(&args.agent_player, "--agent-player")?;
    let mut agent = load_agent(&args.policy_path(agent_player), agent_player);
    agent.set_epsilon(0.0);

    let stdin = io::stdin();
    let mut human = HumanLearner::new(args.name.clone(), stdin.lock(), io::stdout());
    let mut display = ConsoleDisplay::new(io::stdout());

    let (mut agent_wins, mut human_wins, mut draws) = (0, 0, 0);
    for _ in 0..args.games {
        match play_interactive(&mut agent, &mut human, agent_player, &mut display)? {
            GameOutcome::Win(player) if player == agent_player => agent_wins += 1,
            GameOutcome::Win(_) => human_wins += 1,
            _ => draws += 1,
        }
    }

    if args.games > 1 {
        println!("{}", session_score(agent_wins, human_wins, draws));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{
        agent::TrainingMetadata,
        pipeline::{TrainingConfig, TrainingPipeline},
        ports::Learner,
        tictactoe::Cell,
    };

    fn trained_pair(dir: &Path) {
        let config = AgentConfig::default();
        let mut p1 = ValueAgent::new(DEFAULT_X_NAME, config);
        let mut p2 = ValueAgent::new(DEFAULT_O_NAME, config);
        TrainingPipeline::new(TrainingConfig {
            episodes: 300,
            seed: Some(4),
            ..TrainingConfig::default()
        })
        .run(&mut p1, &mut p2)
        .unwrap();

        for (agent, player) in [(&p1, Player::X), (&p2, Player::O)] {
            let metadata = TrainingMetadata {
                player: Some(player),
                ..TrainingMetadata::default()
            };
            SavedAgent::from_agent(agent, metadata)
                .save_to_file(dir.join(policy_file_name(agent.name())))
                .unwrap();
        }
    }

    #[test]
    fn test_default_policy_follows_agent_seat() {
        let args = PlayArgs::parse_from(["play", "--policy-dir", "policies"]);

        assert_eq!(
            args.policy_path(Player::X),
            Path::new("policies").join("policy_p1.msgpack")
        );
        assert_eq!(
            args.policy_path(Player::O),
            Path::new("policies").join("policy_p2.msgpack")
        );
    }

    #[test]
    fn test_explicit_policy_wins() {
        let args = PlayArgs::parse_from(["play", "--policy", "mine.msgpack"]);
        assert_eq!(args.policy_path(Player::O), PathBuf::from("mine.msgpack"));
    }

    #[test]
    fn test_o_seat_loads_o_policy() {
        let dir = TempDir::new().unwrap();
        trained_pair(dir.path());
        let args = PlayArgs::parse_from([
            "play",
            "--agent-player",
            "o",
            "--policy-dir",
            dir.path().to_str().unwrap(),
        ]);

        let agent = load_agent(&args.policy_path(Player::O), Player::O);
        assert_eq!(agent.name(), DEFAULT_O_NAME);

        // O moves leave equal numbers of marks; X's table never holds such boards
        assert!(!agent.table().is_empty());
        for (fp, _) in agent.table().iter() {
            let cells = fp.cells();
            let x = cells.iter().filter(|&&c| c == Cell::X).count();
            let o = cells.iter().filter(|&&c| c == Cell::O).count();
            assert_eq!(x, o, "{fp}");
        }
    }

    #[test]
    fn test_seat_mismatch_detected() {
        let dir = TempDir::new().unwrap();
        trained_pair(dir.path());
        let x_policy = SavedAgent::load_from_file(dir.path().join("policy_p1.msgpack")).unwrap();

        assert_eq!(seat_mismatch(&x_policy, Player::O), Some(Player::X));
        assert_eq!(seat_mismatch(&x_policy, Player::X), None);

        let unlabelled = SavedAgent {
            metadata: TrainingMetadata::default(),
            ..x_policy
        };
        assert_eq!(seat_mismatch(&unlabelled, Player::O), None);
    }

    #[test]
    fn test_missing_policy_gives_untrained_agent() {
        let dir = TempDir::new().unwrap();
        let agent = load_agent(&dir.path().join("absent.msgpack"), Player::X);
        assert_eq!(agent.name(), "computer");
        assert!(agent.table().is_empty());
    }
}
