//! Configuration types for agents and reward distribution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::GameOutcome, tictactoe::Player};

/// Hyperparameters for a [`ValueAgent`](crate::agent::ValueAgent).
///
/// # Examples
///
/// ```
/// use tictactoe_rl::config::AgentConfig;
///
/// let config = AgentConfig::default()
///     .with_epsilon(0.1)
///     .with_learning_rate(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Probability of playing a uniformly random legal move
    pub epsilon: f64,
    /// Step size α of the backup
    pub learning_rate: f64,
    /// Factor γ applied to the backup target; 1.0 passes it through unchanged
    pub discount: f64,
    /// Value reported for fingerprints the table has never seen
    pub default_value: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.3,
            learning_rate: 0.2,
            discount: 1.0,
            default_value: 0.0,
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Set the exploration rate.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount applied to backup targets.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Set the value of unseen fingerprints.
    pub fn with_default_value(mut self, default_value: f64) -> Self {
        self.default_value = default_value;
        self
    }

    /// Set the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every rate lies in `[0, 1]` and the default value is finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("epsilon", self.epsilon),
            ("learning_rate", self.learning_rate),
            ("discount", self.discount),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }
        if !self.default_value.is_finite() {
            return Err(Error::InvalidConfiguration {
                message: format!("default_value must be finite, got {}", self.default_value),
            });
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {path:?}"),
            source,
        })?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }
}

/// Terminal rewards handed to each side at the end of an episode.
///
/// The default gives the opening player less for a draw than the second
/// player (0.1 against 0.5).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardScheme {
    pub win: f64,
    pub loss: f64,
    /// Draw reward for X, the opening player
    pub draw_first: f64,
    /// Draw reward for O
    pub draw_second: f64,
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            win: 1.0,
            loss: 0.0,
            draw_first: 0.1,
            draw_second: 0.5,
        }
    }
}

impl RewardScheme {
    /// Rewards for (X, O), or `None` while the game is still running
    pub fn rewards(&self, outcome: GameOutcome) -> Option<(f64, f64)> {
        match outcome {
            GameOutcome::InProgress => None,
            GameOutcome::Win(Player::X) => Some((self.win, self.loss)),
            GameOutcome::Win(Player::O) => Some((self.loss, self.win)),
            GameOutcome::Draw => Some((self.draw_first, self.draw_second)),
        }
    }
}
