//! Serialization support for value agents.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{
    agent::{ValueAgent, ValueTable},
    config::AgentConfig,
    ports::Learner,
    tictactoe::Player,
};

/// Metadata about the training process
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetadata {
    /// Number of self-play episodes trained
    pub episodes_trained: Option<usize>,
    /// Random seed used (if any)
    pub seed: Option<u64>,
    /// Which token the agent played during training
    pub player: Option<Player>,
}

/// Serializable representation of a trained agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAgent {
    /// Version of the save format
    pub version: u32,
    pub name: String,
    pub config: AgentConfig,
    pub table: ValueTable,
    pub metadata: TrainingMetadata,
}

impl SavedAgent {
    /// Current save format version
    pub const VERSION: u32 = 1;

    pub fn from_agent(agent: &ValueAgent, metadata: TrainingMetadata) -> Self {
        Self {
            version: Self::VERSION,
            name: agent.name().to_string(),
            config: *agent.config(),
            table: agent.table().clone(),
            metadata,
        }
    }

    pub fn to_agent(&self) -> Result<ValueAgent> {
        if self.version != Self::VERSION {
            return Err(anyhow!(
                "Unsupported agent save format version: {}. Expected {}",
                self.version,
                Self::VERSION
            ));
        }

        self.config
            .validate()
            .with_context(|| format!("Saved agent '{}' has unusable settings", self.name))?;

        Ok(ValueAgent::with_table(
            self.name.clone(),
            self.config,
            self.table.clone(),
        ))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, self).context("Failed to serialize agent")?;

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        rmp_serde::decode::from_read(reader).context("Failed to deserialize agent")
    }
}

/// Default policy file name for an agent: `policy_<name>.msgpack`
pub fn policy_file_name(agent_name: &str) -> String {
    format!("policy_{agent_name}.msgpack")
}
