use dioxus::prelude::*;
use shared_types::RegisterRequest;
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect,
    Input, Label, ToastOptions,
};

use crate::api::use_api;
use crate::routes::dashboard_route_for;
use crate::session::{use_session, Session};

/// Combined sign-in / registration screen at `/`.
///
/// Login stores the issued token, derives the session from it, and lands on
/// the dashboard matching the token's role. Registration never logs in by
/// itself — it flips back to the sign-in form on success.
#[component]
pub fn Auth() -> Element {
    let mut state = use_session();
    let toast = use_toast();

    let mut is_registering = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "student".to_string());
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // A still-valid persisted session skips the form entirely.
    if let Some(session) = use_hook(Session::load) {
        let route = dashboard_route_for(session.role);
        state.set(session);
        navigator().push(route);
    }

    let api = use_api();
    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            if is_registering() {
                let request = RegisterRequest {
                    name: name(),
                    email: email(),
                    password: password(),
                    role: role(),
                };
                match api.register(&request).await {
                    Ok(_) => {
                        toast.success(
                            "Registration successful! Please sign in.".to_string(),
                            ToastOptions::new(),
                        );
                        is_registering.set(false);
                        password.set(String::new());
                    }
                    Err(err) => error_msg.set(Some(err.message)),
                }
            } else {
                match api.login(&email(), &password()).await {
                    Ok(resp) => match Session::start(resp.access_token) {
                        Ok(session) => {
                            let route = dashboard_route_for(session.role);
                            toast.success(
                                format!("Welcome back, {}!", session.display_name()),
                                ToastOptions::new(),
                            );
                            state.set(session);
                            navigator().push(route);
                        }
                        Err(err) => {
                            tracing::error!("login returned an unusable token: {err}");
                            error_msg
                                .set(Some("Received an invalid session token.".to_string()));
                        }
                    },
                    Err(err) => error_msg.set(Some(err.message)),
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    if is_registering() {
                        CardTitle { "Create Your Account" }
                        CardDescription {
                            "Join MicroCourses as a student or creator and start your journey"
                        }
                    } else {
                        CardTitle { "Welcome Back" }
                        CardDescription {
                            "Sign in to continue learning or creating courses"
                        }
                    }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_submit,
                        if is_registering() {
                            div { class: "auth-field",
                                Label { html_for: "name", "Full Name" }
                                Input {
                                    id: "name",
                                    placeholder: "Your full name",
                                    required: true,
                                    value: name(),
                                    on_input: move |e: FormEvent| name.set(e.value()),
                                }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        if is_registering() {
                            div { class: "auth-field",
                                FormSelect {
                                    label: "I want to join as",
                                    value: role(),
                                    onchange: move |e: Event<FormData>| role.set(e.value()),
                                    option { value: "student", "Student" }
                                    option { value: "creator", "Creator" }
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() {
                                "Please wait..."
                            } else if is_registering() {
                                "Register"
                            } else {
                                "Sign In"
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        if is_registering() {
                            "Already have an account? "
                        } else {
                            "Don't have an account? "
                        }
                        span {
                            class: "auth-toggle",
                            onclick: move |_| {
                                error_msg.set(None);
                                is_registering.set(!is_registering());
                            },
                            if is_registering() { "Sign in here" } else { "Register here" }
                        }
                    }
                }
            }
        }
    }
}
