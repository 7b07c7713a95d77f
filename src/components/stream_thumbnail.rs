use leptos::prelude::*;
use crate::config::StreamTile;
use crate::overlay::Overlay;

#[component]
pub fn StreamThumbnail(tile: StreamTile) -> impl IntoView {
    let overlay = use_context::<Overlay>().unwrap_or_else(Overlay::active);
    let src = tile.src.clone();
    let label = tile.label.clone();

    view! {
        <figure style="margin: 0; display: flex; flex-direction: column; gap: 6px;">
            <img
                src=tile.src
                alt=tile.label
                style="width: 100%; aspect-ratio: 16 / 9; object-fit: cover; \
                       border: 1px solid #33aa55; cursor: zoom-in; background: #040804;"
                on:click=move |_| {
                    if let Err(e) = overlay.show(&src) {
                        log::error!("lightbox: {}", e);
                    }
                }
            />
            <figcaption style="color: #66cc88; font-size: 12px;">{label}</figcaption>
        </figure>
    }
}
