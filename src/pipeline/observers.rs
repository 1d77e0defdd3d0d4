//! Observers for training runs

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameOutcome, Player},
};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    counts: OutcomeCounts,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            counts: OutcomeCounts::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "X:{} O:{} D:{}",
            self.counts.x_wins, self.counts.o_wins, self.counts.draws
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, outcome: GameOutcome) -> Result<()> {
        self.counts.record(outcome);

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Running tally of terminal outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Metrics observer - Tracks outcome rates, overall and over a recent window
pub struct MetricsObserver {
    counts: OutcomeCounts,
    window: usize,
    recent: std::collections::VecDeque<GameOutcome>,
}

impl MetricsObserver {
    /// Create a new metrics observer with a 100-episode window
    pub fn new() -> Self {
        Self::with_window(100)
    }

    pub fn with_window(window: usize) -> Self {
        Self {
            counts: OutcomeCounts::default(),
            window: window.max(1),
            recent: std::collections::VecDeque::new(),
        }
    }

    pub fn counts(&self) -> OutcomeCounts {
        self.counts
    }

    /// Share of all episodes that ended in a draw
    pub fn draw_rate(&self) -> f64 {
        let total = self.counts.total();
        if total == 0 {
            0.0
        } else {
            self.counts.draws as f64 / total as f64
        }
    }

    /// Share of the most recent episodes that ended in a draw
    pub fn recent_draw_rate(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        let draws = self
            .recent
            .iter()
            .filter(|&&outcome| outcome == GameOutcome::Draw)
            .count();
        draws as f64 / self.recent.len() as f64
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, outcome: GameOutcome) -> Result<()> {
        self.counts.record(outcome);
        self.recent.push_back(outcome);
        if self.recent.len() > self.window {
            self.recent.pop_front();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_window() {
        let mut metrics = MetricsObserver::with_window(2);
        metrics.on_episode_end(0, GameOutcome::Win(Player::X)).unwrap();
        metrics.on_episode_end(1, GameOutcome::Draw).unwrap();
        metrics.on_episode_end(2, GameOutcome::Draw).unwrap();

        assert_eq!(metrics.counts().total(), 3);
        assert_eq!(metrics.recent_draw_rate(), 1.0);
        assert!((metrics.draw_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_progress_observer_counts() {
        let mut observer = ProgressObserver::new();
        observer.on_episode_end(0, GameOutcome::Win(Player::O)).unwrap();
        assert_eq!(observer.message(), "X:0 O:1 D:0");
    }
}
