//! Episode driver
//!
//! [`GameState`] borrows two learners for the length of a session and plays
//! complete games between them: X is always the first learner and opens.

use crate::{
    Result,
    config::RewardScheme,
    ports::Learner,
    tictactoe::{BoardState, GameOutcome, Player},
};

/// Board, turn and terminal flag of a game between two borrowed learners
pub struct GameState<'a> {
    board: BoardState,
    p1: &'a mut dyn Learner,
    p2: &'a mut dyn Learner,
    is_end: bool,
    rewards: RewardScheme,
}

impl<'a> GameState<'a> {
    /// Start a game with `p1` playing X and `p2` playing O
    pub fn new(p1: &'a mut dyn Learner, p2: &'a mut dyn Learner) -> Self {
        Self {
            board: BoardState::new(),
            p1,
            p2,
            is_end: false,
            rewards: RewardScheme::default(),
        }
    }

    /// Use a different reward table at termination
    pub fn with_rewards(mut self, rewards: RewardScheme) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Symbol whose turn it is
    pub fn active_symbol(&self) -> Player {
        self.board.to_move
    }

    /// Learner playing `symbol`
    pub fn learner(&self, symbol: Player) -> &dyn Learner {
        match symbol {
            Player::X => &*self.p1,
            Player::O => &*self.p2,
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.board.available_moves()
    }

    /// Let the active learner move once and record the resulting fingerprint
    /// in its trace.
    ///
    /// Returns the chosen position and the outcome after the move.
    ///
    /// # Panics
    ///
    /// Panics if the learner returns a position that is not empty.
    pub fn play_turn(&mut self) -> Result<(usize, GameOutcome)> {
        let symbol = self.board.to_move;
        let legal_moves = self.board.available_moves();
        let learner = match symbol {
            Player::X => &mut *self.p1,
            Player::O => &mut *self.p2,
        };

        let position = learner.choose_action(&legal_moves, &self.board, symbol)?;
        self.board.apply_move(position, symbol);
        learner.add_state(self.board.fingerprint());

        let outcome = self.board.evaluate_outcome();
        self.is_end = outcome.is_terminal();
        Ok((position, outcome))
    }

    /// Hand each learner its terminal reward. Does nothing while in progress.
    pub fn distribute_reward(&mut self, outcome: GameOutcome) {
        if let Some((x_reward, o_reward)) = self.rewards.rewards(outcome) {
            self.p1.feed_reward(x_reward);
            self.p2.feed_reward(o_reward);
        }
    }

    /// Clear both traces
    pub fn reset_traces(&mut self) {
        self.p1.reset_trace();
        self.p2.reset_trace();
    }

    /// Empty the board with X to move
    pub fn reset(&mut self) {
        self.board = BoardState::new();
        self.is_end = false;
    }

    /// Play one game to the end, distribute rewards, clear traces and reset
    /// the board. At most nine turns are played.
    ///
    /// If a learner fails to move, traces and board are reset without
    /// learning and the error is returned.
    pub fn run_episode(&mut self) -> Result<GameOutcome> {
        loop {
            let (_, outcome) = match self.play_turn() {
                Ok(turn) => turn,
                Err(err) => {
                    self.reset_traces();
                    self.reset();
                    return Err(err);
                }
            };

            if outcome.is_terminal() {
                self.distribute_reward(outcome);
                self.reset_traces();
                self.reset();
                return Ok(outcome);
            }
        }
    }
}
