//! Engine configuration.
//!
//! Hosts configure the engine at startup with an `EngineConfig`. The
//! defaults reproduce the classic rules: one-second ticks, a one-second
//! mismatch window, a half-second pause before game over, three-second
//! peeks with a five-second penalty after the first free one.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero tick interval would make the timer fire forever at one instant.
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    /// A scheduled delay was configured as zero.
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for deck shuffling.
    /// `None` seeds from OS entropy; a fixed seed makes every deck reproducible.
    pub seed: Option<u64>,

    /// Period between timer ticks. Each tick adds one elapsed second.
    pub tick_interval: Duration,

    /// How long a mismatched pair stays face up before it is hidden again.
    pub mismatch_delay: Duration,

    /// Pause between the final match and the game-over event.
    pub game_over_delay: Duration,

    /// How long a peek keeps the board face up.
    pub peek_duration: Duration,

    /// Seconds added to the clock for every charged peek.
    pub peek_penalty_seconds: u64,

    /// Peeks per session that cost nothing.
    pub free_peeks: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_interval: Duration::from_secs(1),
            mismatch_delay: Duration::from_secs(1),
            game_over_delay: Duration::from_millis(500),
            peek_duration: Duration::from_secs(3),
            peek_penalty_seconds: 5,
            free_peeks: 1,
        }
    }
}

impl EngineConfig {
    /// Use a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom tick interval.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Use a custom mismatch reveal window.
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Use a custom pause before game over.
    pub fn with_game_over_delay(mut self, delay: Duration) -> Self {
        self.game_over_delay = delay;
        self
    }

    /// Use a custom peek duration.
    pub fn with_peek_duration(mut self, duration: Duration) -> Self {
        self.peek_duration = duration;
        self
    }

    /// Use a custom peek penalty.
    pub fn with_peek_penalty(mut self, seconds: u64) -> Self {
        self.peek_penalty_seconds = seconds;
        self
    }

    /// Use a custom number of free peeks per session.
    pub fn with_free_peeks(mut self, count: u32) -> Self {
        self.free_peeks = count;
        self
    }

    /// Check that every scheduled interval is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.mismatch_delay.is_zero() {
            return Err(ConfigError::ZeroDelay("mismatch delay"));
        }
        if self.game_over_delay.is_zero() {
            return Err(ConfigError::ZeroDelay("game over delay"));
        }
        if self.peek_duration.is_zero() {
            return Err(ConfigError::ZeroDelay("peek duration"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.mismatch_delay, Duration::from_secs(1));
        assert_eq!(config.game_over_delay, Duration::from_millis(500));
        assert_eq!(config.peek_duration, Duration::from_secs(3));
        assert_eq!(config.peek_penalty_seconds, 5);
        assert_eq!(config.free_peeks, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_mismatch_delay(Duration::from_millis(250))
            .with_peek_penalty(10)
            .with_free_peeks(3);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.mismatch_delay, Duration::from_millis(250));
        assert_eq!(config.peek_penalty_seconds, 10);
        assert_eq!(config.free_peeks, 3);
    }

    #[test]
    fn test_rejects_zero_tick_interval() {
        let config = EngineConfig::default().with_tick_interval(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_rejects_zero_delays() {
        let config = EngineConfig::default().with_peek_duration(Duration::ZERO);
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::ZeroDelay("peek duration"));
        assert_eq!(err.to_string(), "peek duration must be greater than zero");

        let config = EngineConfig::default().with_game_over_delay(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDelay("game over delay")));
    }

    #[test]
    fn test_zero_penalty_is_allowed() {
        let config = EngineConfig::default().with_peek_penalty(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 5, "free_peeks": 2}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.free_peeks, 2);
        assert_eq!(config.peek_penalty_seconds, 5);
    }
}
