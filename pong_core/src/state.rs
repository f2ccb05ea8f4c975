use crate::{Ball, Config, GameRng, Paddle, Score, Side};

/// All mutable game state: two paddles, one ball, two scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Paddles centered, ball served from the center, scores zero
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        Self {
            player: Paddle::spawn(Side::Player, config),
            ai: Paddle::spawn(Side::Ai, config),
            ball: Ball::served(config, rng),
            score: Score::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }
}
