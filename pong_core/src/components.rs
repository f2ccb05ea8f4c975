use glam::Vec2;

use crate::{Aabb, Config, GameRng};

/// Which end of the playfield a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player, // left, pointer controlled
    Ai,     // right, computer controlled
}

/// Paddle - a vertically movable rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed for the paddle's lifetime
    pub y: f32, // Top edge (clamped to playfield)
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    /// Paddle for `side`, vertically centered
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self::new(side, config.paddle_x(side), config.paddle_start_y())
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Ball - position is the top-left of its bounding box, velocity in units per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball placed at the center with a random serve
    pub fn served(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to center with a random diagonal direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = Self::center(config);
        self.vel = Vec2::new(
            config.serve_speed_x * rng.sign(),
            config.serve_speed_y * rng.sign(),
        );
    }

    /// Top-left position that centers the ball in the playfield
    pub fn center(config: &Config) -> Vec2 {
        Vec2::new(
            config.width / 2.0 - config.ball_size / 2.0,
            config.height / 2.0 - config.ball_size / 2.0,
        )
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(config.ball_size))
    }
}
