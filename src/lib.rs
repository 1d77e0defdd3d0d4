//! Tabular reinforcement learning for tic-tac-toe
//!
//! This crate provides:
//! - A 3x3 board with fingerprints and outcome detection
//! - ε-greedy state-value agents trained by backward TD backups
//! - An episode driver and self-play training pipeline
//! - Console play against a trained agent and policy persistence

pub mod adapters;
pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;
pub mod types;

pub use agent::{SavedAgent, ValueAgent, ValueTable};
pub use config::{AgentConfig, RewardScheme};
pub use error::{Error, Result};
pub use types::Fingerprint;
