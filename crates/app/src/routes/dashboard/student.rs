use dioxus::prelude::*;
use shared_types::{Course, CourseProgress, Lesson};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, PageTitle, ToastOptions,
};

use crate::api::use_api;
use crate::cache::{ExpansionState, FetchGate, KeyedCache};
use crate::certificate;
use crate::format_helpers::certificate_filename;
use crate::routes::shell::{DashboardShell, NavButton};
use crate::session::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum StudentTab {
    Home,
    Available,
    MyCourses,
    Progress,
    Settings,
}

impl StudentTab {
    const ALL: [StudentTab; 5] = [
        StudentTab::Home,
        StudentTab::Available,
        StudentTab::MyCourses,
        StudentTab::Progress,
        StudentTab::Settings,
    ];

    fn label(&self) -> &'static str {
        match self {
            StudentTab::Home => "Dashboard",
            StudentTab::Available => "Available Courses",
            StudentTab::MyCourses => "My Enrolled Courses",
            StudentTab::Progress => "Progress",
            StudentTab::Settings => "Settings",
        }
    }
}

/// Optimistic append after a confirmed enrollment. Skipped when the
/// enrolled list was never fetched this mount — the next fetch will include
/// the new course anyway.
fn append_enrolled_course(slot: &mut Option<Vec<Course>>, course: Course) {
    if let Some(list) = slot.as_mut() {
        list.push(course);
    }
}

/// Student dashboard: browse approved courses, work through enrolled ones,
/// track progress, download certificates.
#[component]
pub fn StudentDashboard() -> Element {
    let state = use_session();
    let api = use_api();
    let toast = use_toast();

    let mut active_tab = use_signal(|| StudentTab::Home);
    let mut gate = use_signal(FetchGate::<StudentTab>::new);

    // Unkeyed list slots (None = never fetched this mount).
    let mut approved = use_signal(|| Option::<Vec<Course>>::None);
    let mut enrolled = use_signal(|| Option::<Vec<Course>>::None);
    // Keyed by course id.
    let mut lessons = use_signal(KeyedCache::<i64, Vec<Lesson>>::new);
    let mut progress_data = use_signal(KeyedCache::<i64, CourseProgress>::new);
    // One course's lesson panel open at a time, one lesson's content within it.
    let mut open_course = use_signal(ExpansionState::<i64>::new);
    let mut open_lesson = use_signal(ExpansionState::<i64>::new);

    let display_name = state
        .current
        .read()
        .as_ref()
        .map(|s| s.display_name())
        .unwrap_or_default();

    // First activation of a tab triggers its fetch; revisits render from
    // the cache. Late responses land in their slot regardless of which tab
    // is showing by then.
    {
        let api = api.clone();
        use_effect(move || {
            let tab = active_tab();
            if !gate.write().first_visit(tab) {
                return;
            }
            match tab {
                StudentTab::Available => {
                    let api = api.clone();
                    spawn(async move {
                        match api.approved_courses().await {
                            Ok(list) => approved.set(Some(list)),
                            Err(err) => tracing::error!("failed to load approved courses: {err}"),
                        }
                    });
                }
                StudentTab::MyCourses => {
                    let api = api.clone();
                    spawn(async move {
                        match api.enrollments().await {
                            Ok(list) => enrolled.set(Some(list)),
                            Err(err) => tracing::error!("failed to load enrollments: {err}"),
                        }
                    });
                }
                _ => {}
            }
        });
    }

    rsx! {
        DashboardShell {
            title: "Student Panel",
            nav: rsx! {
                for tab in StudentTab::ALL {
                    NavButton {
                        active: active_tab() == tab,
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
                }
            },

            match active_tab() {
                StudentTab::Home => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Welcome, {display_name}!" }
                            CardDescription {
                                "Keep learning — complete your lessons to unlock your certificate."
                            }
                        }
                    }
                },

                StudentTab::Available => rsx! {
                    PageHeader { PageTitle { "Available Courses" } }
                    match approved.read().as_ref() {
                        None => rsx! { p { class: "empty-note", "Loading courses..." } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No approved courses yet." }
                        },
                        Some(list) => rsx! {
                            for course in list.clone() {
                                {
                                    let api = api.clone();
                                    let title = course.title.clone();
                                    let description = course.description.clone();
                                    rsx! {
                                        Card { class: "course-card",
                                            CardHeader {
                                                CardTitle { "{title}" }
                                                CardDescription { "{description}" }
                                            }
                                            CardContent {
                                                Button {
                                                    onclick: move |_| {
                                                        let api = api.clone();
                                                        let course = course.clone();
                                                        spawn(async move {
                                                            match api.enroll(course.id).await {
                                                                Ok(_) => {
                                                                    toast.success(
                                                                        format!("Enrolled in \"{}\"", course.title),
                                                                        ToastOptions::new(),
                                                                    );
                                                                    append_enrolled_course(
                                                                        &mut enrolled.write(),
                                                                        course,
                                                                    );
                                                                }
                                                                Err(err) => {
                                                                    toast.error(err.message, ToastOptions::new());
                                                                }
                                                            }
                                                        });
                                                    },
                                                    "Enroll"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                },

                StudentTab::MyCourses => rsx! {
                    PageHeader { PageTitle { "My Enrolled Courses" } }
                    match enrolled.read().as_ref() {
                        None => rsx! { p { class: "empty-note", "Loading your courses..." } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No enrolled courses." }
                        },
                        Some(list) => rsx! {
                            for course in list.clone() {
                                {
                                    let api = api.clone();
                                    let course_id = course.id;
                                    rsx! {
                                        Card { class: "course-card",
                                            CardHeader {
                                                CardTitle { "{course.title}" }
                                            }
                                            CardContent {
                                                Button {
                                                    variant: ButtonVariant::Secondary,
                                                    onclick: move |_| {
                                                        // Collapsing needs no fetch; expanding loads the
                                                        // lesson list and progress snapshot together.
                                                        if !open_course.write().toggle(course_id) {
                                                            return;
                                                        }
                                                        let lessons_api = api.clone();
                                                        spawn(async move {
                                                            match lessons_api.lessons_for_course(course_id).await {
                                                                Ok(list) => lessons.write().store(course_id, list),
                                                                Err(err) => tracing::error!(
                                                                    "failed to load lessons for course {course_id}: {err}"
                                                                ),
                                                            }
                                                        });
                                                        let progress_api = api.clone();
                                                        spawn(async move {
                                                            match progress_api.progress(course_id).await {
                                                                Ok(snapshot) => {
                                                                    progress_data.write().store(course_id, snapshot)
                                                                }
                                                                Err(err) => tracing::error!(
                                                                    "failed to load progress for course {course_id}: {err}"
                                                                ),
                                                            }
                                                        });
                                                    },
                                                    if open_course.read().is_open(&course_id) {
                                                        "Hide Lessons"
                                                    } else {
                                                        "View Lessons"
                                                    }
                                                }

                                                if open_course.read().is_open(&course_id) {
                                                    LessonList {
                                                        course_id,
                                                        lessons,
                                                        progress_data,
                                                        open_lesson,
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                },

                StudentTab::Progress => rsx! {
                    PageHeader { PageTitle { "Course Progress" } }
                    if progress_data.read().is_empty() {
                        p { class: "empty-note",
                            "No progress data yet. Open a course under \"My Enrolled Courses\" to load it."
                        }
                    } else {
                        {
                            let mut snapshots: Vec<CourseProgress> =
                                progress_data.read().values().cloned().collect();
                            snapshots.sort_by_key(|p| p.course_id);
                            rsx! {
                                for snapshot in snapshots {
                                    {
                                        let api = api.clone();
                                        let percent = snapshot.completion_percent();
                                        let course_id = snapshot.course_id;
                                        rsx! {
                                            Card { class: "course-card",
                                                CardHeader {
                                                    CardTitle { "Course #{course_id}" }
                                                }
                                                CardContent {
                                                    div { class: "progress-track",
                                                        div {
                                                            class: "progress-fill",
                                                            style: "width: {percent}%",
                                                        }
                                                    }
                                                    span { class: "progress-caption", "{percent}% completed" }

                                                    if snapshot.is_complete() {
                                                        Button {
                                                            variant: ButtonVariant::Success,
                                                            onclick: move |_| {
                                                                let api = api.clone();
                                                                spawn(async move {
                                                                    match api.certificate(course_id).await {
                                                                        Ok(bytes) => certificate::trigger_download(
                                                                            &certificate_filename(course_id),
                                                                            &bytes,
                                                                        ),
                                                                        Err(err) => {
                                                                            tracing::error!(
                                                                                "certificate download failed: {err}"
                                                                            );
                                                                            toast.error(
                                                                                "Could not generate certificate.".to_string(),
                                                                                ToastOptions::new(),
                                                                            );
                                                                        }
                                                                    }
                                                                });
                                                            },
                                                            "Download Certificate"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },

                StudentTab::Settings => rsx! {
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

/// Expanded lesson panel for one enrolled course: lesson rows with
/// one-at-a-time content disclosure and a mark-complete action that
/// refetches the course's progress snapshot.
#[component]
fn LessonList(
    course_id: i64,
    lessons: Signal<KeyedCache<i64, Vec<Lesson>>>,
    progress_data: Signal<KeyedCache<i64, CourseProgress>>,
    open_lesson: Signal<ExpansionState<i64>>,
) -> Element {
    let api = use_api();
    let toast = use_toast();

    let completed: Vec<i64> = progress_data
        .read()
        .get(&course_id)
        .map(|p| p.completed_lessons.clone())
        .unwrap_or_default();

    rsx! {
        match lessons.read().get(&course_id) {
            None => rsx! { p { class: "empty-note", "Loading lessons..." } },
            Some(list) if list.is_empty() => rsx! {
                p { class: "empty-note", "No lessons found for this course." }
            },
            Some(list) => rsx! {
                ul { class: "lesson-list",
                    for lesson in list.clone() {
                        {
                            let api = api.clone();
                            let lesson_id = lesson.id;
                            let done = completed.contains(&lesson_id);
                            rsx! {
                                li { class: "lesson-item",
                                    div {
                                        class: "lesson-title",
                                        onclick: move |_| {
                                            open_lesson.write().toggle(lesson_id);
                                        },
                                        "{lesson.title}"
                                        if done {
                                            span { class: "lesson-done-mark", " ✓" }
                                        }
                                    }
                                    if open_lesson.read().is_open(&lesson_id) {
                                        div { class: "lesson-content",
                                            p { "{lesson.content}" }
                                            Button {
                                                variant: ButtonVariant::Success,
                                                disabled: done,
                                                onclick: move |_| {
                                                    let api = api.clone();
                                                    spawn(async move {
                                                        match api.complete_lesson(lesson_id).await {
                                                            Ok(ack) => {
                                                                let msg = if ack.message.is_empty() {
                                                                    "Lesson marked complete".to_string()
                                                                } else {
                                                                    ack.message
                                                                };
                                                                toast.success(msg, ToastOptions::new());
                                                                // The slot is refreshed from the server
                                                                // rather than edited locally.
                                                                match api.progress(course_id).await {
                                                                    Ok(snapshot) => progress_data
                                                                        .write()
                                                                        .store(course_id, snapshot),
                                                                    Err(err) => tracing::error!(
                                                                        "progress refetch failed: {err}"
                                                                    ),
                                                                }
                                                            }
                                                            Err(err) => {
                                                                toast.error(err.message, ToastOptions::new());
                                                            }
                                                        }
                                                    });
                                                },
                                                if done { "Completed" } else { "Mark Complete" }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64) -> Course {
        Course {
            id,
            title: format!("Course {id}"),
            description: String::new(),
            category: None,
            status: None,
            is_approved: None,
        }
    }

    #[test]
    fn confirmed_enrollment_appends_to_a_fetched_slot() {
        let mut slot = Some(vec![course(1)]);
        append_enrolled_course(&mut slot, course(2));
        let ids: Vec<i64> = slot.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn append_skips_an_unfetched_slot() {
        let mut slot: Option<Vec<Course>> = None;
        append_enrolled_course(&mut slot, course(2));
        assert!(slot.is_none());
    }
}
