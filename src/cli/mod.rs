//! CLI infrastructure for training and playing

pub mod commands;
pub mod output;
