use crate::{Ball, Config, Events, GameState, Paddle, Side};

/// Check ball collisions with walls, then the player paddle, then the AI paddle
pub fn check_collisions(state: &mut GameState, config: &Config, events: &mut Events) {
    resolve_walls(&mut state.ball, config, events);
    resolve_paddle(&mut state.ball, &state.player, config, events);
    resolve_paddle(&mut state.ball, &state.ai, config, events);
}

/// Bounce off the top or bottom wall, at most one per frame
pub fn resolve_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    } else if ball.pos.y + config.ball_size > config.height {
        ball.pos.y = config.height - config.ball_size;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Bounce off a paddle, replacing vertical speed by the deflection from the strike point
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config, events: &mut Events) {
    if !ball.bounds(config).intersects(&paddle.bounds(config)) {
        return;
    }

    // Push ball out of paddle so it cannot re-trigger next frame
    ball.pos.x = match paddle.side {
        Side::Player => paddle.x + config.paddle_width,
        Side::Ai => paddle.x - config.ball_size,
    };
    ball.vel.x = -ball.vel.x;

    // Not clamped: edge hits return steeply
    let offset = ball.center_y(config) - paddle.center_y(config);
    ball.vel.y = offset * config.deflection;

    events.ball_hit_paddle = Some(paddle.side);
    log::debug!(
        "ball hit {:?} paddle at offset {:.1}, new velocity {:?}",
        paddle.side,
        offset,
        ball.vel
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use glam::Vec2;

    fn setup() -> (Config, GameState, Events) {
        let config = Config::new();
        let mut rng = GameRng::new(12345);
        let state = GameState::new(&config, &mut rng);
        (config, state, Events::new())
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (config, _, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(400.0, -3.0), Vec2::new(5.0, -4.0));

        resolve_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.pos.y, 0.0, "Ball should be clamped to the top wall");
        assert_eq!(ball.vel.y, 4.0, "Y velocity should be reversed");
        assert_eq!(ball.vel.x, 5.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (config, _, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(400.0, config.height - 10.0), Vec2::new(5.0, 4.0));

        resolve_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.pos.y, config.height - config.ball_size);
        assert_eq!(ball.vel.y, -4.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_resting_on_wall_does_not_bounce() {
        let (config, _, mut events) = setup();
        let mut top = Ball::new(Vec2::new(400.0, 0.0), Vec2::new(5.0, -4.0));
        let mut bottom = Ball::new(
            Vec2::new(400.0, config.height - config.ball_size),
            Vec2::new(5.0, 4.0),
        );

        resolve_walls(&mut top, &config, &mut events);
        resolve_walls(&mut bottom, &config, &mut events);

        assert_eq!(top.vel.y, -4.0);
        assert_eq!(bottom.vel.y, 4.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (config, state, mut events) = setup();
        let paddle = state.player;
        // Ball centered on the paddle, overlapping its right edge
        let mut ball = Ball::new(
            Vec2::new(paddle.x + 5.0, paddle.center_y(&config) - config.ball_size / 2.0),
            Vec2::new(-5.0, 4.0),
        );

        resolve_paddle(&mut ball, &paddle, &config, &mut events);

        assert_eq!(ball.pos.x, paddle.x + config.paddle_width);
        assert_eq!(ball.vel.x, 5.0, "Ball should bounce right");
        assert_eq!(ball.vel.y, 0.0, "Center hit returns flat");
        assert_eq!(events.ball_hit_paddle, Some(Side::Player));
    }

    #[test]
    fn test_ball_collides_with_ai_paddle() {
        let (config, state, mut events) = setup();
        let paddle = state.ai;
        let mut ball = Ball::new(
            Vec2::new(paddle.x - 10.0, paddle.y + 20.0),
            Vec2::new(5.0, -4.0),
        );

        resolve_paddle(&mut ball, &paddle, &config, &mut events);

        assert_eq!(ball.pos.x, paddle.x - config.ball_size);
        assert_eq!(ball.vel.x, -5.0, "Ball should bounce left");
        assert_eq!(events.ball_hit_paddle, Some(Side::Ai));
    }

    #[test]
    fn test_deflection_is_proportional_to_strike_offset() {
        let (config, state, mut events) = setup();
        let paddle = state.player;
        for d in [-40.0_f32, -12.0, 0.0, 8.0, 30.0] {
            let mut ball = Ball::new(
                Vec2::new(
                    paddle.x + 2.0,
                    paddle.center_y(&config) + d - config.ball_size / 2.0,
                ),
                Vec2::new(-5.0, 3.0),
            );
            resolve_paddle(&mut ball, &paddle, &config, &mut events);
            assert_eq!(ball.vel.y, 0.25 * d, "Deflection for offset {d}");
        }
    }

    #[test]
    fn test_edge_hit_deflection_is_not_clamped() {
        let (config, state, mut events) = setup();
        let paddle = state.ai;
        // Ball barely overlapping the paddle's bottom edge
        let mut ball = Ball::new(
            Vec2::new(paddle.x - 4.0, paddle.y + config.paddle_height - 1.0),
            Vec2::new(5.0, 4.0),
        );

        resolve_paddle(&mut ball, &paddle, &config, &mut events);

        let expected = (ball.center_y(&config) - paddle.center_y(&config)) * 0.25;
        assert_eq!(ball.vel.y, expected);
        assert!(ball.vel.y > 14.0, "Edge hits return steeply");
    }

    #[test]
    fn test_ball_touching_paddle_does_not_bounce() {
        let (config, state, mut events) = setup();
        let paddle = state.player;
        let mut ball = Ball::new(
            Vec2::new(paddle.x + config.paddle_width, paddle.y + 10.0),
            Vec2::new(-5.0, 0.0),
        );

        resolve_paddle(&mut ball, &paddle, &config, &mut events);

        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_ball_above_paddle_does_not_bounce() {
        let (config, state, mut events) = setup();
        let paddle = state.player;
        let mut ball = Ball::new(
            Vec2::new(paddle.x + 2.0, paddle.y - config.ball_size - 1.0),
            Vec2::new(-5.0, 0.0),
        );

        resolve_paddle(&mut ball, &paddle, &config, &mut events);

        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_check_collisions_runs_walls_before_paddles() {
        let (config, mut state, mut events) = setup();
        state.player.y = 0.0;
        // Ball above the top wall and inside the player paddle's x-range
        state.ball = Ball::new(Vec2::new(25.0, -2.0), Vec2::new(-5.0, -4.0));

        check_collisions(&mut state, &config, &mut events);

        assert!(events.ball_hit_wall);
        assert_eq!(events.ball_hit_paddle, Some(Side::Player));
        assert_eq!(state.ball.pos, Vec2::new(30.0, 0.0));
        // Deflection measured after the wall clamp: (0 + 8) - 50
        assert_eq!(state.ball.vel.y, -42.0 * 0.25);
    }
}
