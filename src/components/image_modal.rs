use leptos::prelude::*;
use crate::config::LightboxConfig;

/// Overlay markup driven by [`crate::overlay::Overlay`]. Rendered hidden
/// with an empty source; the controller writes `display` and `src` directly.
#[component]
pub fn ImageModal(config: LightboxConfig) -> impl IntoView {
    view! {
        <div
            id=config.container_id
            style="display: none; position: fixed; inset: 0; background: rgba(0,0,0,0.9); \
                   align-items: center; justify-content: center; \
                   z-index: 1000; cursor: pointer;"
        >
            <img
                id=config.content_id
                src=""
                style="max-width: 90vw; max-height: 90vh; object-fit: contain; cursor: default; \
                       border: 1px solid #44dd66; box-shadow: 0 0 30px rgba(68, 221, 102, 0.3);"
            />
        </div>
    }
}
