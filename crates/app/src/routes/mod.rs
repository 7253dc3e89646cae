pub mod add_lesson;
pub mod auth;
pub mod create_course;
pub mod dashboard;
pub mod my_courses;
pub mod not_found;
pub mod shell;

use dioxus::prelude::*;
use shared_types::Role;

use crate::session::{use_session, Session};

use auth::Auth;
use create_course::CreateCoursePage;
use dashboard::{AdminDashboard, CreatorDashboard, StudentDashboard};
use my_courses::MyCourses;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Auth {},
    #[layout(SessionGuard)]
    #[route("/dashboard/student")]
    StudentDashboard {},
    #[route("/dashboard/creator")]
    CreatorDashboard {},
    #[route("/dashboard/admin")]
    AdminDashboard {},
    #[route("/my-courses")]
    MyCourses {},
    #[route("/creator/create-course")]
    CreateCoursePage {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Landing dashboard for a role. Total: every role maps somewhere, and the
/// degraded default (`Student`) gets the least privileged screen.
pub fn dashboard_route_for(role: Role) -> Route {
    match role {
        Role::Student => Route::StudentDashboard {},
        Role::Creator => Route::CreatorDashboard {},
        Role::Admin => Route::AdminDashboard {},
    }
}

/// Session guard layout — the single authorization gate.
///
/// Reads the persisted token once per mount. Anything but a valid,
/// unexpired token redirects to the auth screen before the guarded screen
/// renders or fetches; `Session::load` has already scrubbed the bad token
/// from storage by then.
#[component]
fn SessionGuard() -> Element {
    let mut state = use_session();
    let loaded = use_hook(Session::load);

    match loaded {
        Some(session) => {
            if !state.is_authenticated() {
                state.set(session);
            }
            rsx! { Outlet::<Route> {} }
        }
        None => {
            state.clear();
            navigator().push(Route::Auth {});
            rsx! {
                div { class: "guard-redirect",
                    p { "Redirecting to sign in..." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_routes_to_its_dashboard() {
        assert_eq!(
            dashboard_route_for(Role::Student),
            Route::StudentDashboard {}
        );
        assert_eq!(
            dashboard_route_for(Role::Creator),
            Route::CreatorDashboard {}
        );
        assert_eq!(dashboard_route_for(Role::Admin), Route::AdminDashboard {});
    }

    #[test]
    fn creator_dashboard_path_matches_contract() {
        assert_eq!(
            Route::CreatorDashboard {}.to_string(),
            "/dashboard/creator"
        );
        assert_eq!(Route::StudentDashboard {}.to_string(), "/dashboard/student");
        assert_eq!(Route::Auth {}.to_string(), "/");
    }
}
