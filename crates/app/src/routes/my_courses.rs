use dioxus::prelude::*;
use shared_types::Lesson;
use shared_ui::{Badge, Card, CardContent, PageHeader, PageTitle};

use crate::api::use_api;
use crate::cache::{ExpansionState, KeyedCache};
use crate::format_helpers::status_badge_variant;
use crate::routes::shell::{DashboardShell, NavButton};
use crate::routes::Route;
use crate::session::use_session;

/// The creator's course list with disclosure down to lesson content.
///
/// One course panel is open at a time; opening a course fetches its lesson
/// list into the per-course cache slot. Within the open panel one lesson's
/// content is shown at a time.
#[component]
pub fn MyCourses() -> Element {
    let state = use_session();
    let api = use_api();

    let courses = {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.my_courses().await }
        })
    };

    let mut lessons = use_signal(KeyedCache::<i64, Vec<Lesson>>::new);
    let mut open_course = use_signal(ExpansionState::<i64>::new);
    let mut open_lesson = use_signal(ExpansionState::<i64>::new);

    let display_name = state
        .current
        .read()
        .as_ref()
        .map(|s| s.display_name())
        .unwrap_or_default();

    rsx! {
        DashboardShell {
            title: "Creator Panel",
            nav: rsx! {
                NavButton {
                    active: false,
                    onclick: move |_| {
                        navigator().push(Route::CreatorDashboard {});
                    },
                    "Dashboard"
                }
                NavButton { active: true, onclick: move |_| {}, "My Courses" }
            },

            PageHeader { PageTitle { "Welcome, {display_name}!" } }
            p { class: "empty-note", "Here are all your created courses — expand one to view its lessons." }

            match &*courses.read() {
                None => rsx! { p { class: "empty-note", "Loading courses..." } },
                Some(Err(err)) => rsx! {
                    p { class: "empty-note", "Could not load your courses: {err.message}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "empty-note", "No courses found. Create one to get started!" }
                },
                Some(Ok(list)) => rsx! {
                    for course in list.clone() {
                        {
                            let api = api.clone();
                            let course_id = course.id;
                            let status = course.status();
                            rsx! {
                                Card { class: "course-card",
                                    div {
                                        class: "course-row",
                                        onclick: move |_| {
                                            // Collapse needs no request; expand pulls this
                                            // course's lessons into its slot.
                                            if !open_course.write().toggle(course_id) {
                                                return;
                                            }
                                            let api = api.clone();
                                            spawn(async move {
                                                match api.lessons_for_course(course_id).await {
                                                    Ok(list) => lessons.write().store(course_id, list),
                                                    Err(err) => tracing::error!(
                                                        "failed to load lessons for course {course_id}: {err}"
                                                    ),
                                                }
                                            });
                                        },
                                        div { class: "course-row-text",
                                            h3 { "{course.title}" }
                                            p { "{course.description}" }
                                        }
                                        Badge { variant: status_badge_variant(status), "{status.label()}" }
                                    }

                                    if open_course.read().is_open(&course_id) {
                                        CardContent {
                                            h4 { class: "lesson-heading", "Lessons" }
                                            match lessons.read().get(&course_id) {
                                                None => rsx! {
                                                    p { class: "empty-note", "Loading lessons..." }
                                                },
                                                Some(list) if list.is_empty() => rsx! {
                                                    p { class: "empty-note", "No lessons found for this course." }
                                                },
                                                Some(list) => rsx! {
                                                    ul { class: "lesson-list",
                                                        for (index, lesson) in list.clone().into_iter().enumerate() {
                                                            {
                                                                let lesson_id = lesson.id;
                                                                let number = index + 1;
                                                                rsx! {
                                                                    li { class: "lesson-item",
                                                                        div {
                                                                            class: "lesson-title",
                                                                            onclick: move |evt: MouseEvent| {
                                                                                // Keep the course row's own toggle out of it.
                                                                                evt.stop_propagation();
                                                                                open_lesson.write().toggle(lesson_id);
                                                                            },
                                                                            "Lesson {number}: {lesson.title}"
                                                                        }
                                                                        if open_lesson.read().is_open(&lesson_id) {
                                                                            div { class: "lesson-content",
                                                                                if lesson.content.is_empty() {
                                                                                    p { "No content available." }
                                                                                } else {
                                                                                    p { "{lesson.content}" }
                                                                                }
                                                                            }
                                                                        }
                                                                    }
                                                                }
                                                            }
                                                        }
                                                    }
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
