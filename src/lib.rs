pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod overlay;
pub mod state;

pub use app::App;
pub use config::{GalleryConfig, LightboxConfig, PageConfig, StreamTile};
pub use error::LightboxError;
pub use overlay::Overlay;
pub use state::{ClickOutcome, ClickTarget, DisplayMode, Lightbox};

use std::sync::Once;
use wasm_bindgen::prelude::*;

static LOGGER: Once = Once::new();

/// Routes `log` records to the browser console. Only the first call does
/// anything; if the host already set a logger, that logger gets a warning.
pub fn init_logging() {
    LOGGER.call_once(|| {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            log::warn!("console logger not installed: {}", e);
        }
    });
}

/// Opens the lightbox on `src`, for thumbnails wired up from plain HTML.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(src: &str) -> Result<(), JsValue> {
    Overlay::active().show(src).map_err(Into::into)
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() -> Result<(), JsValue> {
    Overlay::active().hide().map_err(Into::into)
}

/// Registers the backdrop click listener. `config` may override element
/// ids; returns `false` if a listener was already registered.
#[wasm_bindgen(js_name = installLightbox)]
pub fn install_lightbox(config: JsValue) -> Result<bool, JsValue> {
    console_error_panic_hook::set_once();
    init_logging();
    let config = LightboxConfig::from_js(config)?;
    Ok(Overlay::new(config).install()?)
}
