//! Ports (trait boundaries) between the learning core and its collaborators.

pub mod display;
pub mod learner;
pub mod observer;
pub mod repository;

pub use display::BoardDisplay;
pub use learner::Learner;
pub use observer::Observer;
pub use repository::ValueTableRepository;
