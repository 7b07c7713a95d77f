use stream_lightbox_ui::{init_logging, App};

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    leptos::mount::mount_to_body(App);
}
