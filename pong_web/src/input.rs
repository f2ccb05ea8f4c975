//! Mouse input handling

/// Pointer offset from the canvas's top edge, in playfield units
///
/// `client_y` and `rect_top` are both viewport coordinates (`MouseEvent.clientY`
/// and `getBoundingClientRect().top`). `scale` maps CSS pixels to canvas pixels
/// when the canvas is displayed at a different size than its backing store.
pub fn pointer_offset(client_y: f64, rect_top: f64, scale: f64) -> f32 {
    ((client_y - rect_top) * scale) as f32
}

/// Ratio between the canvas's backing height and its displayed height
pub fn display_scale(canvas_height: u32, rect_height: f64) -> f64 {
    if rect_height > 0.0 {
        canvas_height as f64 / rect_height
    } else {
        1.0
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::attach_pointer;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pong_core::Game;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use super::{display_scale, pointer_offset};
    use crate::ClientError;

    /// Route `mousemove` over the canvas to the player paddle
    ///
    /// The returned closure must be kept alive for as long as the listener is needed.
    pub fn attach_pointer(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<Closure<dyn FnMut(MouseEvent)>, ClientError> {
        let target = canvas.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let scale = display_scale(target.height(), rect.height());
            let y = pointer_offset(event.client_y() as f64, rect.top(), scale);
            game.borrow_mut().pointer_moved(y);
        });

        canvas
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .map_err(|e| ClientError::js("add mousemove listener", e))?;

        Ok(on_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_offset_is_relative_to_canvas_top() {
        assert_eq!(pointer_offset(260.0, 60.0, 1.0), 200.0);
    }

    #[test]
    fn test_pointer_above_canvas_is_negative() {
        assert_eq!(pointer_offset(10.0, 60.0, 1.0), -50.0);
    }

    #[test]
    fn test_pointer_offset_scales_to_backing_store() {
        let scale = display_scale(500, 250.0);
        assert_eq!(scale, 2.0);
        assert_eq!(pointer_offset(160.0, 60.0, scale), 200.0);
    }

    #[test]
    fn test_display_scale_defaults_for_hidden_canvas() {
        assert_eq!(display_scale(500, 0.0), 1.0);
    }
}
