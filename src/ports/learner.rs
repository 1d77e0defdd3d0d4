//! Learner port - the capability every player exposes to the episode driver

use crate::{
    Result,
    tictactoe::{BoardState, Player},
    types::Fingerprint,
};

/// Learner trait - Unified interface for learned, random and human players
///
/// The episode driver only needs [`choose_action`](Learner::choose_action).
/// The remaining hooks carry the per-episode learning protocol:
///
/// 1. [`add_state`](Learner::add_state) after each of the player's own moves
/// 2. [`feed_reward`](Learner::feed_reward) once the game is over
/// 3. [`reset_trace`](Learner::reset_trace) after every episode
///
/// Non-adaptive players keep the default no-op implementations.
///
/// # Examples
///
/// ```no_run
/// use tictactoe_rl::{
///     Result,
///     ports::Learner,
///     tictactoe::{BoardState, Player},
/// };
///
/// struct FirstFree;
///
/// impl Learner for FirstFree {
///     fn choose_action(
///         &mut self,
///         legal_moves: &[usize],
///         _board: &BoardState,
///         _symbol: Player,
///     ) -> Result<usize> {
///         legal_moves
///             .first()
///             .copied()
///             .ok_or(tictactoe_rl::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait Learner {
    /// Pick one of `legal_moves` for `symbol` on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if `legal_moves` is empty or the player cannot
    /// produce a move (for example, closed input).
    fn choose_action(
        &mut self,
        legal_moves: &[usize],
        board: &BoardState,
        symbol: Player,
    ) -> Result<usize>;

    /// Record the fingerprint reached by this player's own move.
    fn add_state(&mut self, _fingerprint: Fingerprint) {}

    /// Learn from the terminal reward of the current episode.
    fn feed_reward(&mut self, _reward: f64) {}

    /// Forget the current episode trace.
    fn reset_trace(&mut self) {}

    /// Get the learner's name.
    ///
    /// Used in announcements and default policy file names.
    fn name(&self) -> &str;

    /// Reseed the learner's random stream.
    ///
    /// Training pipelines call this when supplied with a seed. Learners
    /// without randomness ignore it.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
