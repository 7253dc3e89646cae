use dioxus::prelude::*;

mod api;
mod cache;
mod certificate;
mod format_helpers;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One process-wide session slot. Guarded routes hydrate it from the
    // persisted token on mount; logout clears it.
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
