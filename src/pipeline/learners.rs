//! Non-learning players: uniform random and human console input

use std::io::{BufRead, Write};

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Learner,
    tictactoe::{BoardState, Player, position_from_coords},
};

/// Random policy learner (uniform over legal moves)
pub struct RandomLearner {
    name: String,
    rng: StdRng,
}

impl RandomLearner {
    /// Create a new random learner
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random learner with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Learner for RandomLearner {
    fn choose_action(
        &mut self,
        legal_moves: &[usize],
        _board: &BoardState,
        _symbol: Player,
    ) -> Result<usize> {
        if legal_moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..legal_moves.len());
        Ok(legal_moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Human player reading `row col` (0-based) from an input stream.
///
/// Malformed, off-board or occupied choices are reported and asked for again.
pub struct HumanLearner<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanLearner<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn parse_coords(line: &str) -> Option<(usize, usize)> {
        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some((row, col))
    }
}

impl<R: BufRead, W: Write> Learner for HumanLearner<R, W> {
    fn choose_action(
        &mut self,
        legal_moves: &[usize],
        _board: &BoardState,
        symbol: Player,
    ) -> Result<usize> {
        if legal_moves.is_empty() {
            return Err(Error::NoValidMoves);
        }

        loop {
            write!(
                self.output,
                "{} ({symbol}) - input your action as 'row col': ",
                self.name
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            let Some((row, col)) = Self::parse_coords(&line) else {
                writeln!(
                    self.output,
                    "Could not read '{}'. Expected two numbers, e.g. '1 2'.",
                    line.trim()
                )?;
                continue;
            };

            match position_from_coords(row, col) {
                Ok(position) if legal_moves.contains(&position) => return Ok(position),
                Ok(_) => writeln!(self.output, "Cell ({row}, {col}) is already taken.")?,
                Err(_) => writeln!(self.output, "Cell ({row}, {col}) is off the board.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
