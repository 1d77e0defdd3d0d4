//! Adapters implementing the ports.

pub mod console_display;
pub mod msgpack_repository;

pub use console_display::ConsoleDisplay;
pub use msgpack_repository::MsgPackRepository;
