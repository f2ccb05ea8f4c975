pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use geometry::*;
pub use params::*;
pub use render::{render, Circle, Color, ScoreLabel, Snapshot, Surface};
pub use resources::*;
pub use state::*;

use systems::*;

/// Run one frame of the Pong simulation
pub fn step(state: &mut GameState, config: &Config, rng: &mut GameRng, events: &mut Events) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(&mut state.ball);

    // 2. Check collisions (walls, player paddle, AI paddle)
    check_collisions(state, config, events);

    // 3. Check scoring (ball exited playfield)
    check_scoring(state, config, events, rng);

    // 4. AI reacts to where the ball ended up
    move_ai(&mut state.ai, &state.ball, config);
}

/// One frame as a value transform: the next state and what happened on the way
pub fn advance(state: GameState, config: &Config, rng: &mut GameRng) -> (GameState, Events) {
    let mut next = state;
    let mut events = Events::new();
    step(&mut next, config, rng, &mut events);
    (next, events)
}
