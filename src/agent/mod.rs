//! Tabular state-value learning
//!
//! A [`ValueAgent`] keeps a [`ValueTable`] from board fingerprints to value
//! estimates and plays ε-greedily against it. After each episode the
//! terminal reward is backed up through the agent's own trace, most recent
//! state first, each updated value becoming the next target.
//!
//! ## Usage Example
//!
//! ```no_run
//! use tictactoe_rl::{agent::ValueAgent, config::AgentConfig};
//!
//! let agent = ValueAgent::new(
//!     "p1",
//!     AgentConfig::default()
//!         .with_epsilon(0.3)
//!         .with_learning_rate(0.2),
//! );
//! ```

pub mod serialization;
pub mod value_agent;
pub mod value_table;

pub use serialization::{SavedAgent, TrainingMetadata, policy_file_name};
pub use value_agent::ValueAgent;
pub use value_table::ValueTable;
