use dioxus::prelude::*;
use shared_types::NewLesson;
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect, Input,
    Label, Textarea, ToastOptions,
};

use crate::api::use_api;

/// Lesson authoring form, embedded as a creator dashboard tab.
///
/// The creator's own courses are loaded once for the target select; the
/// title/content fields reset after a successful submit so several lessons
/// can be added back to back.
#[component]
pub fn AddLessonForm() -> Element {
    let api = use_api();
    let toast = use_toast();

    let courses = {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { api.my_courses().await }
        })
    };

    let mut course_id = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();

            let Ok(target) = course_id().parse::<i64>() else {
                toast.error("Select a course first.".to_string(), ToastOptions::new());
                return;
            };

            loading.set(true);
            let lesson = NewLesson {
                course_id: target,
                title: title(),
                content: content(),
            };
            match api.add_lesson(&lesson).await {
                Ok(_) => {
                    toast.success("Lesson added successfully!".to_string(), ToastOptions::new());
                    course_id.set(String::new());
                    title.set(String::new());
                    content.set(String::new());
                }
                Err(err) => toast.error(err.message, ToastOptions::new()),
            }
            loading.set(false);
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Add a Lesson" }
                CardDescription {
                    "Attach a new lesson to one of your existing courses."
                }
            }
            CardContent {
                form { onsubmit: handle_submit,
                    div { class: "form-field",
                        match &*courses.read() {
                            None => rsx! { p { class: "empty-note", "Loading your courses..." } },
                            Some(Err(err)) => rsx! {
                                p { class: "empty-note", "Could not load courses: {err.message}" }
                            },
                            Some(Ok(list)) => rsx! {
                                FormSelect {
                                    label: "Course",
                                    required: true,
                                    value: course_id(),
                                    onchange: move |e: Event<FormData>| course_id.set(e.value()),
                                    option { value: "", "Select a course" }
                                    for course in list.clone() {
                                        option { value: "{course.id}", "{course.title}" }
                                    }
                                }
                            },
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "lesson-title", "Lesson Title" }
                        Input {
                            id: "lesson-title",
                            placeholder: "Lesson title",
                            required: true,
                            value: title(),
                            on_input: move |e: FormEvent| title.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "lesson-content", "Lesson Content" }
                        Textarea {
                            id: "lesson-content",
                            rows: 5u32,
                            placeholder: "Write the lesson material here",
                            required: true,
                            value: content(),
                            on_input: move |e: FormEvent| content.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button form-submit",
                        disabled: loading(),
                        if loading() { "Saving..." } else { "Add Lesson" }
                    }
                }
            }
        }
    }
}
