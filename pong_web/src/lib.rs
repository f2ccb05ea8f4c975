//! Browser client for Pong vs AI
//!
//! Draws the game on a Canvas 2D context, moves the player paddle with the
//! mouse, and drives frames with `requestAnimationFrame`. The browser-only
//! modules compile only for `wasm32`.

pub mod error;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod animation;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod logger;

pub use error::ClientError;

#[cfg(target_arch = "wasm32")]
pub use app::PongApp;
