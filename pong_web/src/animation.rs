//! `requestAnimationFrame` loop with explicit start/stop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::ClientError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Calls `on_frame` once per display refresh while started
///
/// The loop also ends by itself as soon as `on_frame` returns `false`.
pub struct AnimationLoop {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub fn new<F>(window: Window, mut on_frame: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        // Weak self-reference so the closure does not keep itself alive
        let this_callback = Rc::downgrade(&callback);
        let this_handle = handle.clone();
        let this_window = window.clone();

        *callback.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            this_handle.set(None);
            if !on_frame() {
                return;
            }
            let Some(callback) = this_callback.upgrade() else {
                return;
            };
            let callback = callback.borrow();
            if let Some(callback) = callback.as_ref() {
                match request_frame(&this_window, callback) {
                    Ok(id) => this_handle.set(Some(id)),
                    Err(e) => log::error!("animation loop ended: {}", e),
                }
            }
        }));

        Self {
            window,
            handle,
            callback,
        }
    }

    /// Schedule the next frame; a loop that is already scheduled is left alone
    pub fn start(&self) -> Result<(), ClientError> {
        if self.handle.get().is_some() {
            return Ok(());
        }
        let callback = self.callback.borrow();
        if let Some(callback) = callback.as_ref() {
            let id = request_frame(&self.window, callback)?;
            self.handle.set(Some(id));
        }
        Ok(())
    }

    /// Cancel the pending frame, if any
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame failed: {:?}", e);
            }
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, ClientError> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| ClientError::js("request_animation_frame", e))
}
