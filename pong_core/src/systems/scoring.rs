use crate::{Config, Events, GameRng, GameState, Side};

/// Check if ball left the playfield (scoring)
pub fn check_scoring(state: &mut GameState, config: &Config, events: &mut Events, rng: &mut GameRng) {
    let ball = &mut state.ball;

    let scorer = if ball.pos.x < 0.0 {
        // Player missed
        Side::Ai
    } else if ball.pos.x + config.ball_size > config.width {
        // AI missed
        Side::Player
    } else {
        return;
    };

    state.score.increment(scorer);
    events.scored = Some(scorer);
    ball.reset(config, rng);

    log::info!(
        "{:?} scored, player {} - ai {}",
        scorer,
        state.score.player,
        state.score.ai
    );
}
