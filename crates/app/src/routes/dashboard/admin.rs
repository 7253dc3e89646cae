use dioxus::prelude::*;
use shared_types::{AdminStats, Course, UserAccount};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, FormSelect,
    PageHeader, PageTitle, Skeleton, StatCard, ToastOptions,
};

use crate::api::use_api;
use crate::routes::shell::{DashboardShell, NavButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum AdminTab {
    Overview,
    Courses,
    Users,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Overview, AdminTab::Courses, AdminTab::Users];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Courses => "Manage Courses",
            AdminTab::Users => "Manage Users",
        }
    }
}

/// Drop an approved course from the cached pending list. A local edit, not
/// a refetch — applied only after the server acknowledged the approval.
fn remove_pending_course(slot: &mut Option<Vec<Course>>, course_id: i64) {
    if let Some(list) = slot.as_mut() {
        list.retain(|c| c.id != course_id);
    }
}

/// Admin dashboard: platform counters, pending-course review, and user role
/// management. All three data sets load together on mount; their responses
/// resolve in any order into independent slots.
#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut active_tab = use_signal(|| AdminTab::Overview);
    let mut stats = use_signal(|| Option::<AdminStats>::None);
    let mut pending = use_signal(|| Option::<Vec<Course>>::None);
    let mut users = use_signal(|| Option::<Vec<UserAccount>>::None);

    {
        let api = api.clone();
        use_effect(move || {
            let stats_api = api.clone();
            spawn(async move {
                match stats_api.admin_stats().await {
                    Ok(data) => stats.set(Some(data)),
                    Err(err) => tracing::error!("failed to load platform stats: {err}"),
                }
            });
            let pending_api = api.clone();
            spawn(async move {
                match pending_api.pending_courses().await {
                    Ok(list) => pending.set(Some(list)),
                    Err(err) => tracing::error!("failed to load pending courses: {err}"),
                }
            });
            let users_api = api.clone();
            spawn(async move {
                match users_api.users().await {
                    Ok(list) => users.set(Some(list)),
                    Err(err) => tracing::error!("failed to load users: {err}"),
                }
            });
        });
    }

    rsx! {
        DashboardShell {
            title: "Admin Panel",
            nav: rsx! {
                for tab in AdminTab::ALL {
                    NavButton {
                        active: active_tab() == tab,
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
                }
            },

            match active_tab() {
                AdminTab::Overview => rsx! {
                    PageHeader { PageTitle { "Platform Overview" } }
                    p { class: "empty-note",
                        "Insights about courses, users, and enrollments."
                    }
                    match stats.read().as_ref() {
                        Some(s) => rsx! {
                            div { class: "stats-grid",
                                StatCard { value: "{s.total_users}", label: "Total Users" }
                                StatCard { value: "{s.total_courses}", label: "Total Courses" }
                                StatCard { value: "{s.approved_courses}", label: "Approved Courses" }
                                StatCard { value: "{s.total_enrollments}", label: "Enrollments" }
                            }
                        },
                        None => rsx! {
                            div { class: "stats-grid",
                                for _ in 0..4 {
                                    Skeleton { style: "width: 100%; height: 92px;" }
                                }
                            }
                        },
                    }
                },

                AdminTab::Courses => rsx! {
                    PageHeader { PageTitle { "Pending Courses for Approval" } }
                    match pending.read().as_ref() {
                        None => rsx! { p { class: "empty-note", "Loading..." } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No pending courses to review." }
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
                                                CardDescription { "{course.description}" }
                                            }
                                            CardContent {
                                                Button {
                                                    onclick: move |_| {
                                                        let api = api.clone();
                                                        spawn(async move {
                                                            match api.approve_course(course_id).await {
                                                                Ok(ack) => {
                                                                    let msg = if ack.message.is_empty() {
                                                                        "Course approved successfully!".to_string()
                                                                    } else {
                                                                        ack.message
                                                                    };
                                                                    toast.success(msg, ToastOptions::new());
                                                                    // The counters do refetch; the list does not.
                                                                    remove_pending_course(
                                                                        &mut pending.write(),
                                                                        course_id,
                                                                    );
                                                                    match api.admin_stats().await {
                                                                        Ok(data) => stats.set(Some(data)),
                                                                        Err(err) => tracing::error!(
                                                                            "stats refetch failed: {err}"
                                                                        ),
                                                                    }
                                                                }
                                                                Err(err) => {
                                                                    toast.error(err.message, ToastOptions::new());
                                                                }
                                                            }
                                                        });
                                                    },
                                                    "Approve"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                },

                AdminTab::Users => rsx! {
                    PageHeader { PageTitle { "Manage Users" } }
                    match users.read().as_ref() {
                        None => rsx! { p { class: "empty-note", "Loading users..." } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "empty-note", "No users found." }
                        },
                        Some(list) => rsx! {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { "ID" }
                                    DataTableColumn { "Email" }
                                    DataTableColumn { "Role" }
                                    DataTableColumn { "Change Role" }
                                }
                                DataTableBody {
                                    for user in list.clone() {
                                        {
                                            let api = api.clone();
                                            let user_id = user.id;
                                            rsx! {
                                                DataTableRow {
                                                    DataTableCell { "{user.id}" }
                                                    DataTableCell { "{user.email}" }
                                                    DataTableCell { "{user.role}" }
                                                    DataTableCell {
                                                        FormSelect {
                                                            value: user.role.clone(),
                                                            onchange: move |e: Event<FormData>| {
                                                                let api = api.clone();
                                                                let new_role = e.value();
                                                                spawn(async move {
                                                                    match api.update_user_role(user_id, &new_role).await {
                                                                        Ok(_) => {
                                                                            toast.success(
                                                                                format!("Updated role to {new_role}"),
                                                                                ToastOptions::new(),
                                                                            );
                                                                            match api.users().await {
                                                                                Ok(list) => users.set(Some(list)),
                                                                                Err(err) => tracing::error!(
                                                                                    "user refetch failed: {err}"
                                                                                ),
                                                                            }
                                                                        }
                                                                        Err(err) => {
                                                                            toast.error(err.message, ToastOptions::new());
                                                                        }
                                                                    }
                                                                });
                                                            },
                                                            option { value: "student", "Student" }
                                                            option { value: "creator", "Creator" }
                                                            option { value: "admin", "Admin" }
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
                },
            }
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
    fn approval_removes_only_the_acknowledged_course() {
        let mut slot = Some(vec![course(5), course(7), course(9)]);
        remove_pending_course(&mut slot, 7);
        let ids: Vec<i64> = slot.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn removal_is_a_noop_on_an_unfetched_slot() {
        let mut slot: Option<Vec<Course>> = None;
        remove_pending_course(&mut slot, 7);
        assert!(slot.is_none());
    }
}
