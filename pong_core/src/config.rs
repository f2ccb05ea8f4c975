use crate::{ConfigError, Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub deflection: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::PLAYFIELD_WIDTH,
            height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y: Params::SERVE_SPEED_Y,
            deflection: Params::DEFLECTION,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a playfield of the given surface size
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Y that vertically centers a paddle in the playfield
    pub fn paddle_start_y(&self) -> f32 {
        (self.height - self.paddle_height) / 2.0
    }

    /// Clamp paddle Y to `[0, height - paddle_height]`
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.height - self.paddle_height).max(0.0)
    }

    /// Per-frame distance the AI paddle moves
    pub fn ai_speed(&self) -> f32 {
        self.paddle_speed * self.ai_speed_factor
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("serve_speed_x", self.serve_speed_x),
            ("serve_speed_y", self.serve_speed_y),
            ("deflection", self.deflection),
            ("ai_speed_factor", self.ai_speed_factor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("paddle_margin", self.paddle_margin),
            ("ai_dead_zone", self.ai_dead_zone),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.height < self.paddle_height {
            return Err(ConfigError::TooShort {
                height: self.height,
                needed: self.paddle_height,
                what: "paddle",
            });
        }
        if self.height < self.ball_size {
            return Err(ConfigError::TooShort {
                height: self.height,
                needed: self.ball_size,
                what: "ball",
            });
        }

        let left = self.paddle_x(Side::Player) + self.paddle_width;
        let right = self.paddle_x(Side::Ai);
        if right - left < self.ball_size {
            return Err(ConfigError::PaddlesOverlap {
                left,
                right,
                width: self.width,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 20.0, "Player paddle X position");
        assert_eq!(config.paddle_x(Side::Ai), 770.0, "AI paddle X position");
    }

    #[test]
    fn test_config_for_playfield_keeps_tuning() {
        let config = Config::for_playfield(640.0, 480.0);
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 480.0);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
        assert_eq!(config.paddle_x(Side::Ai), 640.0 - 20.0 - 10.0);
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(120.0), 120.0);
    }

    #[test]
    fn test_config_paddle_start_y_is_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_start_y(), 200.0);
    }

    #[test]
    fn test_config_ai_speed() {
        let config = Config::new();
        assert!((config.ai_speed() - 4.2).abs() < 1e-6);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_short_playfield() {
        let config = Config::for_playfield(800.0, 60.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooShort { what: "paddle", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_size() {
        let config = Config::for_playfield(0.0, 500.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "width",
                value: 0.0
            })
        );

        let config = Config {
            ball_size: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "ball_size",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_narrow_playfield() {
        let config = Config::for_playfield(70.0, 500.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddlesOverlap { .. })
        ));
    }
}
