//! Plain-text reports printed by the subcommands

use std::path::Path;

use crate::{pipeline::TrainingResult, tictactoe::Player};

const LABEL_WIDTH: usize = 14;

fn row(label: &str, value: &str) -> String {
    format!("  {:<LABEL_WIDTH$} {value}\n", format!("{label}:"))
}

fn share(count: usize, rate: f64) -> String {
    format!("{count} ({:.1}%)", rate * 100.0)
}

/// Outcome table for a finished self-play run
pub fn training_report(result: &TrainingResult) -> String {
    let mut report = format!("Trained for {} episodes\n", result.total_episodes);
    report.push_str(&row("X wins", &share(result.x_wins, result.x_win_rate)));
    report.push_str(&row("O wins", &share(result.o_wins, result.o_win_rate)));
    report.push_str(&row("Draws", &share(result.draws, result.draw_rate)));
    report
}

/// Where a trained policy went and how many positions it knows
pub fn policy_saved(player: Player, path: &Path, states: usize) -> String {
    row(
        &format!("{player} policy"),
        &format!("{} ({states} states)", path.display()),
    )
}

/// Running score of a console session, from the human's point of view
pub fn session_score(agent_wins: usize, human_wins: usize, draws: usize) -> String {
    format!("agent {agent_wins} - you {human_wins} - draws {draws}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_report() {
        let report = training_report(&TrainingResult::new(4, 2, 1, 1));
        assert_eq!(
            report,
            "Trained for 4 episodes\n  \
             X wins:        2 (50.0%)\n  \
             O wins:        1 (25.0%)\n  \
             Draws:         1 (25.0%)\n"
        );
    }

    #[test]
    fn test_policy_saved() {
        let line = policy_saved(Player::O, Path::new("policy_p2.msgpack"), 12);
        assert_eq!(line, "  O policy:      policy_p2.msgpack (12 states)\n");
    }
}
