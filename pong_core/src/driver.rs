use crate::systems::apply_pointer;
use crate::{render, step, Config, ConfigError, Events, GameRng, GameState, Snapshot, Surface};

/// Owns the game and decides whether the host should keep scheduling frames
pub struct Game {
    state: GameState,
    config: Config,
    rng: GameRng,
    events: Events,
    running: bool,
    frames: u64,
}

impl Game {
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config, &mut rng);
        Ok(Self {
            state,
            config,
            rng,
            events: Events::new(),
            running: false,
            frames: 0,
        })
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::info!("game loop started at frame {}", self.frames);
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("game loop stopped at frame {}", self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pointer offset from the playfield's top edge
    pub fn pointer_moved(&mut self, y: f32) {
        apply_pointer(&mut self.state.player, y, &self.config);
    }

    /// Advance one frame without drawing, regardless of run state
    pub fn tick(&mut self) -> &Events {
        step(&mut self.state, &self.config, &mut self.rng, &mut self.events);
        self.frames += 1;
        &self.events
    }

    /// Advance and draw one frame if running
    ///
    /// Returns whether another frame should be scheduled.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.running {
            return false;
        }
        self.tick();
        render(surface, &self.snapshot());
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events from the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
