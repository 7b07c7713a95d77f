use crate::components::{ImageModal, StreamThumbnail};
use crate::config::PageConfig;
use crate::overlay::Overlay;
use leptos::prelude::*;

const FONT: &str = "JetBrains Mono, Fira Code, Consolas, monospace";

#[component]
pub fn App() -> impl IntoView {
    let PageConfig { lightbox, gallery } = PageConfig::load();
    let overlay = Overlay::new(lightbox.clone());
    provide_context(overlay.clone());

    // Register the backdrop listener once the markup is mounted
    Effect::new(move || match overlay.install() {
        Ok(true) => log::info!("lightbox ready"),
        Ok(false) => {}
        Err(e) => log::error!("lightbox: {}", e),
    });

    let tiles = gallery
        .streams
        .into_iter()
        .map(|tile| view! { <StreamThumbnail tile=tile /> })
        .collect_view();

    view! {
        <main style=format!(
            "min-height: 100vh; margin: 0; padding: 24px; box-sizing: border-box; \
             background: #020202; color: #ccffdd; font-family: {};",
            FONT
        )>
            <h1 style="font-size: 18px; font-weight: normal; margin: 0 0 16px;">{gallery.title}</h1>
            <section style="display: grid; gap: 16px; \
                            grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));">
                {tiles}
            </section>
            <ImageModal config=lightbox />
        </main>
    }
}
