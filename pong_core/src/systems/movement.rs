use crate::Ball;

/// Move ball by one frame of velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}
