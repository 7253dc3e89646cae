use dioxus::prelude::*;
use shared_types::NewCourse;
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, Textarea,
    ToastOptions,
};

use crate::api::use_api;
use crate::routes::shell::{DashboardShell, NavButton};
use crate::routes::Route;

/// Standalone `/creator/create-course` page. The same form is embedded as a
/// tab of the creator dashboard.
#[component]
pub fn CreateCoursePage() -> Element {
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
                NavButton { active: true, onclick: move |_| {}, "Create Course" }
            },
            CreateCourseForm {}
        }
    }
}

/// Course submission form. A new course always enters review as pending;
/// the form resets once the server has accepted it.
#[component]
pub fn CreateCourseForm() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);

            let course = NewCourse {
                title: title(),
                description: description(),
                category: category(),
            };
            match api.create_course(&course).await {
                Ok(_) => {
                    toast.success(
                        "Course submitted for admin approval!".to_string(),
                        ToastOptions::new(),
                    );
                    title.set(String::new());
                    description.set(String::new());
                    category.set(String::new());
                }
                Err(err) => toast.error(err.message, ToastOptions::new()),
            }
            loading.set(false);
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Create a New Course" }
                CardDescription {
                    "Fill out the details below. The admin will review and approve your course before it goes live."
                }
            }
            CardContent {
                form { onsubmit: handle_submit,
                    div { class: "form-field",
                        Label { html_for: "course-title", "Title" }
                        Input {
                            id: "course-title",
                            placeholder: "Course title",
                            required: true,
                            value: title(),
                            on_input: move |e: FormEvent| title.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "course-description", "Description" }
                        Textarea {
                            id: "course-description",
                            placeholder: "What will students learn?",
                            required: true,
                            value: description(),
                            on_input: move |e: FormEvent| description.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "course-category", "Category" }
                        Input {
                            id: "course-category",
                            placeholder: "e.g. Programming",
                            required: true,
                            value: category(),
                            on_input: move |e: FormEvent| category.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button form-submit",
                        disabled: loading(),
                        if loading() { "Submitting..." } else { "Submit for Review" }
                    }
                }
            }
        }
    }
}
