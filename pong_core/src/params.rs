/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (used when the surface size is not known)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0; // units per frame
    pub const PADDLE_MARGIN: f32 = 20.0; // distance from the side wall

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y: f32 = 4.0;
    pub const DEFLECTION: f32 = 0.25; // vertical speed per unit of strike offset

    // AI
    pub const AI_SPEED_FACTOR: f32 = 0.7;
    pub const AI_DEAD_ZONE: f32 = 10.0;
}
