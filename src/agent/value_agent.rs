//! ε-greedy state-value agent
//!
//! The agent scores each legal move by the learned value of the board it
//! would produce, and after every episode backs the terminal reward up
//! through the boards its own moves produced.

use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Error, Result,
    agent::value_table::ValueTable,
    config::AgentConfig,
    ports::Learner,
    tictactoe::{BoardState, Player, board::CELL_COUNT},
    types::Fingerprint,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular agent with an ε-greedy policy over its own value table
#[derive(Debug, Clone)]
pub struct ValueAgent {
    name: String,
    table: ValueTable,
    trace: Vec<Fingerprint>,
    config: AgentConfig,
    rng: StdRng,
}

impl ValueAgent {
    /// Create an agent with an empty table
    pub fn new(name: impl Into<String>, config: AgentConfig) -> Self {
        Self {
            name: name.into(),
            table: ValueTable::new(config.default_value),
            trace: Vec::new(),
            rng: build_rng(config.seed),
            config,
        }
    }

    /// Create an agent from a previously learned table
    pub fn with_table(name: impl Into<String>, config: AgentConfig, table: ValueTable) -> Self {
        Self {
            table,
            ..Self::new(name, config)
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    /// Fingerprints recorded so far in the current episode, in play order
    pub fn trace(&self) -> &[Fingerprint] {
        &self.trace
    }

    /// Change the exploration rate, e.g. to 0.0 for greedy play against a human
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.config.epsilon = epsilon;
    }

    /// Value of every legal move: the learned value of the board it leads to
    fn move_values(
        &self,
        legal_moves: &[usize],
        board: &BoardState,
        symbol: Player,
    ) -> Vec<(usize, f64)> {
        legal_moves
            .iter()
            .map(|&pos| {
                let mut next = *board;
                next.cells[pos] = symbol.to_cell();
                (pos, self.table.get_or_default(next.fingerprint()))
            })
            .collect()
    }

    /// Highest-valued legal move; ties go to the earliest move in `legal_moves`
    fn greedy_action(&self, legal_moves: &[usize], board: &BoardState, symbol: Player) -> usize {
        let mut best = legal_moves[0];
        let mut best_value = f64::NEG_INFINITY;
        for (pos, value) in self.move_values(legal_moves, board, symbol) {
            if value > best_value {
                best = pos;
                best_value = value;
            }
        }
        best
    }

    /// Copy of the learned values
    pub fn export_table(&self) -> HashMap<Fingerprint, f64> {
        self.table.export()
    }

    /// Replace the learned values
    pub fn import_table(&mut self, entries: HashMap<Fingerprint, f64>) {
        self.table.import(entries);
    }
}

impl Learner for ValueAgent {
    fn choose_action(
        &mut self,
        legal_moves: &[usize],
        board: &BoardState,
        symbol: Player,
    ) -> Result<usize> {
        if legal_moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        for &position in legal_moves {
            if position >= CELL_COUNT {
                return Err(Error::InvalidPosition { position });
            }
            if !board.is_empty(position) {
                return Err(Error::InvalidMove { position });
            }
        }

        if self.rng.random::<f64>() < self.config.epsilon {
            let index = self.rng.random_range(0..legal_moves.len());
            Ok(legal_moves[index])
        } else {
            Ok(self.greedy_action(legal_moves, board, symbol))
        }
    }

    fn add_state(&mut self, fingerprint: Fingerprint) {
        self.trace.push(fingerprint);
    }

    fn feed_reward(&mut self, reward: f64) {
        log::debug!(
            "{}: backing up reward {reward} over {} states",
            self.name,
            self.trace.len()
        );
        self.table.backup(
            &self.trace,
            reward,
            self.config.learning_rate,
            self.config.discount,
        );
    }

    fn reset_trace(&mut self) {
        self.trace.clear();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
    }
}
