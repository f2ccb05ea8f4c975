use crate::{Ball, Config, Paddle};

/// Nudge the AI paddle toward the ball's vertical center
///
/// Holds still inside the dead-zone and moves at `ai_speed_factor` of paddle speed.
pub fn move_ai(paddle: &mut Paddle, ball: &Ball, config: &Config) {
    let paddle_center = paddle.center_y(config);
    let ball_center = ball.center_y(config);

    if paddle_center < ball_center - config.ai_dead_zone {
        paddle.y += config.ai_speed();
    } else if paddle_center > ball_center + config.ai_dead_zone {
        paddle.y -= config.ai_speed();
    }

    paddle.y = config.clamp_paddle_y(paddle.y);
}
