//! Observer port - abstraction for training observation
//!
//! Observers watch a training run without influencing learning.

use crate::{Result, tictactoe::GameOutcome};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. `on_episode_end(episode, outcome)` - After every episode, once
///    rewards have been distributed
/// 3. `on_progress(episode)` - After `on_episode_end` on every reporting
///    episode (multiples of `report_every`)
/// 4. `on_training_end()` - Once at the end
pub trait Observer {
    /// Called when training starts.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the completed episode (0-based)
    /// * `outcome` - Terminal outcome of that episode
    fn on_episode_end(&mut self, _episode: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called on reporting episodes, after the pipeline has logged `Rounds {episode}`.
    fn on_progress(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
