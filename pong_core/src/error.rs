use thiserror::Error;

/// Reasons a [`Config`](crate::Config) cannot host a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("playfield height {height} cannot fit a {needed}-unit {what}")]
    TooShort {
        height: f32,
        needed: f32,
        what: &'static str,
    },

    #[error("paddles at x={left} and x={right} leave no room for the ball in a {width}-unit playfield")]
    PaddlesOverlap { left: f32, right: f32, width: f32 },
}
