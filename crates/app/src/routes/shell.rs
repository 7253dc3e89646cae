use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::{use_session, Session};

/// Sidebar-plus-content frame shared by every dashboard screen.
///
/// The caller supplies the sidebar nav (tab buttons or links); the shell
/// owns the logo block and the logout action. Logging out ends the
/// persisted session, drops the in-memory one, and returns to the auth
/// screen — the caches die with the unmounted dashboard.
#[component]
pub fn DashboardShell(title: String, nav: Element, children: Element) -> Element {
    let mut state = use_session();

    let handle_logout = move |_| {
        Session::end();
        state.clear();
        navigator().push(Route::Auth {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }
        div { class: "dashboard-container",
            aside { class: "dashboard-sidebar",
                h2 { class: "sidebar-logo", "{title}" }
                nav { class: "sidebar-nav", {nav} }
                button { class: "logout-btn", onclick: handle_logout, "Log out" }
            }
            main { class: "dashboard-content",
                {children}
            }
        }
    }
}

/// A sidebar nav entry. Highlighted when `active`.
#[component]
pub fn NavButton(
    active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: if active { "nav-item active" } else { "nav-item" },
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
