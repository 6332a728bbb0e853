//! Core engine types: card IDs, RNG, configuration.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::CardId;
pub use rng::GameRng;
pub use config::{ConfigError, EngineConfig};
