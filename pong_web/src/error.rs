use pong_core::ConfigError;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Failures while wiring the game to the page
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`")]
    CanvasNotFound(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },

    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn js(context: &'static str, value: JsValue) -> Self {
        Self::Js {
            context,
            message: format!("{:?}", value),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
