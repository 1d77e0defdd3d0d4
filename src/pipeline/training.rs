//! Self-play training pipeline

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    config::RewardScheme,
    pipeline::{episode::GameState, observers::OutcomeCounts},
    ports::{Learner, Observer},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of self-play episodes
    pub episodes: usize,

    /// Random seed; X gets `seed`, O gets `seed + 1`
    pub seed: Option<u64>,

    /// Episodes between `Rounds n` progress reports, starting with episode 0;
    /// 0 turns reporting off
    pub report_every: usize,

    /// Terminal rewards
    pub rewards: RewardScheme,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 50_000,
            seed: None,
            report_every: 1000,
            rewards: RewardScheme::default(),
        }
    }
}

/// Result of a training run, counted from X's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub total_episodes: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_episodes: usize, x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let rate = |count: usize| {
            if total_episodes > 0 {
                count as f64 / total_episodes as f64
            } else {
                0.0
            }
        };

        Self {
            total_episodes,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Runs episodes between two learners and reports to observers
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Whether `episode` gets a progress report
    pub fn reports_at(&self, episode: usize) -> bool {
        self.config.report_every > 0 && episode.is_multiple_of(self.config.report_every)
    }

    /// Run `episodes` games with `p1` as X and `p2` as O
    pub fn run(&mut self, p1: &mut dyn Learner, p2: &mut dyn Learner) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            p1.set_rng_seed(seed);
            p2.set_rng_seed(seed.wrapping_add(1));
        }

        log::info!(
            "training {} vs {} for {} episodes",
            p1.name(),
            p2.name(),
            self.config.episodes
        );

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut counts = OutcomeCounts::default();
        let mut game = GameState::new(p1, p2).with_rewards(self.config.rewards);

        for episode in 0..self.config.episodes {
            let outcome = game.run_episode()?;
            log::debug!("episode {episode}: {outcome:?}");
            counts.record(outcome);

            for observer in &mut self.observers {
                observer.on_episode_end(episode, outcome)?;
            }

            if self.reports_at(episode) {
                log::info!("Rounds {episode}");
                for observer in &mut self.observers {
                    observer.on_progress(episode)?;
                }
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(
            self.config.episodes,
            counts.x_wins,
            counts.o_wins,
            counts.draws,
        );
        log::info!(
            "training finished: X {:.3} / O {:.3} / draw {:.3}",
            result.x_win_rate,
            result.o_win_rate,
            result.draw_rate
        );
        Ok(result)
    }
}
