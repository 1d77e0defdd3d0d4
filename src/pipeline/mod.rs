//! Episode driver, self-play training and interactive play

pub mod episode;
pub mod interactive;
pub mod learners;
pub mod observers;
pub mod training;

pub use episode::GameState;
pub use interactive::play_interactive;
pub use learners::{HumanLearner, RandomLearner};
pub use observers::{MetricsObserver, OutcomeCounts, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Learner, Observer};
