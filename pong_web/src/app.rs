use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use pong_core::{Config, Game, GameRng};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::animation::AnimationLoop;
use crate::canvas::CanvasSurface;
use crate::input::attach_pointer;
use crate::{logger, ClientError};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);
}

/// Pong against the computer, bound to a `<canvas>` element
#[wasm_bindgen]
pub struct PongApp {
    game: Rc<RefCell<Game>>,
    animation: AnimationLoop,
    canvas: HtmlCanvasElement,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
}

#[wasm_bindgen]
impl PongApp {
    /// Attach to the canvas with id `canvas_id`, serving with a random seed
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PongApp, JsValue> {
        Ok(Self::create(canvas_id, GameRng::from_entropy())?)
    }

    /// Attach with a fixed seed, for reproducible serves
    pub fn with_seed(canvas_id: &str, seed: u64) -> Result<PongApp, JsValue> {
        Ok(Self::create(canvas_id, GameRng::new(seed))?)
    }

    /// Start (or resume) the frame loop
    pub fn start(&self) -> Result<(), JsValue> {
        self.game.borrow_mut().start();
        self.animation.start()?;
        Ok(())
    }

    /// Stop the frame loop; the game keeps its state
    pub fn stop(&self) {
        self.game.borrow_mut().stop();
        self.animation.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.game.borrow().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn player_score(&self) -> u32 {
        self.game.borrow().state().score.player
    }

    #[wasm_bindgen(getter)]
    pub fn ai_score(&self) -> u32 {
        self.game.borrow().state().score.ai
    }
}

impl PongApp {
    fn create(canvas_id: &str, rng: GameRng) -> Result<PongApp, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let document = window.document().ok_or(ClientError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| ClientError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ClientError::NotACanvas(canvas_id.to_string()))?;

        let mut surface = CanvasSurface::new(&canvas)?;
        let config = Config::for_playfield(canvas.width() as f32, canvas.height() as f32);
        log::info!(
            "playfield {}x{} on canvas `{}`",
            config.width,
            config.height,
            canvas_id
        );
        let game = Rc::new(RefCell::new(Game::new(config, rng)?));

        let on_mouse_move = attach_pointer(&canvas, game.clone())?;

        let frame_game = game.clone();
        let animation = AnimationLoop::new(window, move || {
            frame_game.borrow_mut().frame(&mut surface)
        });

        Ok(Self {
            game,
            animation,
            canvas,
            on_mouse_move,
        })
    }
}

impl Drop for PongApp {
    fn drop(&mut self) {
        self.animation.stop();
        if let Err(e) = self.canvas.remove_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to remove mousemove listener: {:?}", e);
        }
    }
}
