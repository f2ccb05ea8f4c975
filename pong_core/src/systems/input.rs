use crate::{Config, Paddle};

/// Center the paddle on a pointer offset measured from the playfield's top edge
///
/// Out-of-range pointers are clamped; non-finite ones leave the paddle where it is.
pub fn apply_pointer(paddle: &mut Paddle, pointer_y: f32, config: &Config) {
    if !pointer_y.is_finite() {
        return;
    }
    paddle.y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
}
