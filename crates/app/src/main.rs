use dioxus::prelude::*;

mod browser;
mod lead_capture;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load config once the launcher's logger is in place so fallbacks are visible.
    use_hook(|| {
        intake::config::load_config();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
