//! Shared helpers for the integration tests.

use tictactoe_rl::{
    Result,
    ports::Learner,
    tictactoe::{BoardState, Player},
    types::Fingerprint,
};

/// Forwards to an inner learner and counts every call
#[allow(dead_code)]
pub struct Counting<L> {
    pub inner: L,
    pub moves: usize,
    pub rewards: Vec<f64>,
    pub longest_trace: usize,
    trace_len: usize,
}

impl<L> Counting<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            moves: 0,
            rewards: Vec::new(),
            longest_trace: 0,
            trace_len: 0,
        }
    }
}

impl<L: Learner> Learner for Counting<L> {
    fn choose_action(
        &mut self,
        legal_moves: &[usize],
        board: &BoardState,
        symbol: Player,
    ) -> Result<usize> {
        self.moves += 1;
        self.inner.choose_action(legal_moves, board, symbol)
    }

    fn add_state(&mut self, fingerprint: Fingerprint) {
        self.trace_len += 1;
        self.longest_trace = self.longest_trace.max(self.trace_len);
        self.inner.add_state(fingerprint);
    }

    fn feed_reward(&mut self, reward: f64) {
        self.rewards.push(reward);
        self.inner.feed_reward(reward);
    }

    fn reset_trace(&mut self) {
        self.trace_len = 0;
        self.inner.reset_trace();
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.inner.set_rng_seed(seed);
    }
}
