//! Read-only draw list for a frame and the surface it is drawn on
//!
//! Each frame builds a [`Snapshot`] from the game state and replays it onto a
//! [`Surface`]. Nothing here mutates the game.

use glam::Vec2;

use crate::{Aabb, Config, GameState, Side};

// Net: dashed line down the vertical center
const NET_START: f32 = 10.0;
const NET_STEP: f32 = 30.0;
const NET_DASH_LENGTH: f32 = 20.0;
const NET_WIDTH: f32 = 2.0;

// Scores
const SCORE_BASELINE: f32 = 50.0;
const SCORE_FONT_SIZE: f32 = 32.0;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const NET: Color = Color::rgb(0x44, 0x44, 0x44);
    pub const PLAYER: Color = Color::rgb(0x1e, 0x90, 0xff);
    pub const AI: Color = Color::rgb(0xff, 0x41, 0x36);
    pub const BALL: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#1e90ff`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Player => Self::PLAYER,
            Side::Ai => Self::AI,
        }
    }
}

/// 2D drawing target, origin top-left, y down
pub trait Surface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreLabel {
    pub value: u32,
    pub anchor: Vec2, // left end of the text baseline
    pub size: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub playfield: Vec2,
    pub net: Vec<Aabb>,
    pub player: Aabb,
    pub ai: Aabb,
    pub ball: Circle,
    pub player_score: ScoreLabel,
    pub ai_score: ScoreLabel,
}

impl Snapshot {
    pub fn capture(state: &GameState, config: &Config) -> Self {
        let half_ball = config.ball_size / 2.0;
        let score_label = |side: Side, x: f32| ScoreLabel {
            value: state.score.get(side),
            anchor: Vec2::new(x, SCORE_BASELINE),
            size: SCORE_FONT_SIZE,
        };

        Self {
            playfield: Vec2::new(config.width, config.height),
            net: net_dashes(config),
            player: state.player.bounds(config),
            ai: state.ai.bounds(config),
            ball: Circle {
                center: state.ball.pos + Vec2::splat(half_ball),
                radius: half_ball,
            },
            player_score: score_label(Side::Player, config.width / 4.0),
            ai_score: score_label(Side::Ai, 3.0 * config.width / 4.0),
        }
    }
}

/// Dashes of the center net, derived only from the playfield size
pub fn net_dashes(config: &Config) -> Vec<Aabb> {
    let x = config.width / 2.0 - NET_WIDTH / 2.0;
    let mut dashes = Vec::new();
    let mut y = NET_START;
    while y < config.height {
        dashes.push(Aabb::from_pos_size(
            Vec2::new(x, y),
            Vec2::new(NET_WIDTH, NET_DASH_LENGTH),
        ));
        y += NET_STEP;
    }
    dashes
}

/// Clear the playfield and draw the snapshot
pub fn render<S: Surface + ?Sized>(surface: &mut S, snapshot: &Snapshot) {
    surface.clear(0.0, 0.0, snapshot.playfield.x, snapshot.playfield.y);

    for dash in &snapshot.net {
        fill_aabb(surface, dash, Color::NET);
    }

    fill_aabb(surface, &snapshot.player, Color::PLAYER);
    fill_aabb(surface, &snapshot.ai, Color::AI);

    surface.fill_circle(snapshot.ball.center, snapshot.ball.radius, Color::BALL);

    for (label, side) in [
        (&snapshot.player_score, Side::Player),
        (&snapshot.ai_score, Side::Ai),
    ] {
        surface.fill_text(
            &label.value.to_string(),
            label.anchor.x,
            label.anchor.y,
            label.size,
            Color::for_side(side),
        );
    }
}

fn fill_aabb<S: Surface + ?Sized>(surface: &mut S, aabb: &Aabb, color: Color) {
    let size = aabb.size();
    surface.fill_rect(aabb.min.x, aabb.min.y, size.x, size.y, color);
}
