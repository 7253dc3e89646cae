use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::routes::add_lesson::AddLessonForm;
use crate::routes::create_course::CreateCourseForm;
use crate::routes::shell::{DashboardShell, NavButton};
use crate::routes::Route;
use crate::session::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CreatorTab {
    Home,
    MyCourses,
    Create,
    AddLesson,
    Earnings,
    Settings,
}

impl CreatorTab {
    const ALL: [CreatorTab; 6] = [
        CreatorTab::Home,
        CreatorTab::MyCourses,
        CreatorTab::Create,
        CreatorTab::AddLesson,
        CreatorTab::Earnings,
        CreatorTab::Settings,
    ];

    fn label(&self) -> &'static str {
        match self {
            CreatorTab::Home => "Dashboard",
            CreatorTab::MyCourses => "My Courses",
            CreatorTab::Create => "Create Course",
            CreatorTab::AddLesson => "Add Lesson",
            CreatorTab::Earnings => "Earnings",
            CreatorTab::Settings => "Settings",
        }
    }
}

/// Creator dashboard: course authoring entry points plus placeholder
/// earnings/settings panels. The course list itself lives on the
/// `/my-courses` page.
#[component]
pub fn CreatorDashboard() -> Element {
    let state = use_session();
    let mut active_tab = use_signal(|| CreatorTab::Home);

    let (display_name, role) = {
        let guard = state.current.read();
        match guard.as_ref() {
            Some(session) => (session.display_name(), session.role),
            None => (String::new(), Role::Creator),
        }
    };

    rsx! {
        DashboardShell {
            title: "Creator Panel",
            nav: rsx! {
                for tab in CreatorTab::ALL {
                    NavButton {
                        active: active_tab() == tab,
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
                }
            },

            match active_tab() {
                CreatorTab::Home => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Welcome, {display_name}!" }
                            CardDescription { "Role: {role.label()}" }
                        }
                        CardContent {
                            p {
                                "Your courses shape the learning experience for your students. "
                                "Build micro-courses, attach lessons, and submit them for review."
                            }
                        }
                    }
                },

                CreatorTab::MyCourses => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "My Courses" }
                            CardDescription {
                                "View and manage all your published and pending courses."
                            }
                        }
                        CardContent {
                            Button {
                                onclick: move |_| {
                                    navigator().push(Route::MyCourses {});
                                },
                                "View My Courses"
                            }
                        }
                    }
                },

                CreatorTab::Create => rsx! { CreateCourseForm {} },

                CreatorTab::AddLesson => rsx! { AddLessonForm {} },

                CreatorTab::Earnings => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Earnings Overview" }
                            CardDescription {
                                "Check your total revenue, pending payouts, and monthly analytics."
                            }
                        }
                    }
                },

                CreatorTab::Settings => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Settings" }
                            CardDescription {
                                "Update your profile, change your password, and manage notifications."
                            }
                        }
                    }
                },
            }
        }
    }
}
