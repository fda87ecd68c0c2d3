use dioxus::prelude::*;
use shared_types::{
    apply_status_update, Appointment, AppointmentStatus, Role,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    Notification, NotificationKind, PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::{format_date_human, format_time_human};
use crate::routes::AppNavbar;
use crate::session::use_session;

/// Counselor dashboard: pending requests with accept/reject actions and
/// the confirmed schedule. A status decision updates the one affected
/// appointment in place; everything else stays as rendered.
#[component]
pub fn CounselorDashboard() -> Element {
    let session = use_session();
    let Some(identity) = session.identity() else {
        return rsx! { AppNavbar {} };
    };
    let counselor_id = identity.id;

    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut loading = use_signal(|| true);
    let mut notification = use_signal(|| Option::<(NotificationKind, String)>::None);

    use_future(move || async move {
        match service::api::list_appointments(counselor_id, Role::Counselor).await {
            Ok(list) => appointments.set(list),
            Err(e) => {
                tracing::warn!(error = %e, "counselor dashboard fetch failed");
                notification.set(Some((
                    NotificationKind::Error,
                    "Failed to load appointments. Please try again.".to_string(),
                )));
            }
        }
        loading.set(false);
    });

    let mut handle_decision = move |id: i64, status: AppointmentStatus| {
        spawn(async move {
            match service::api::set_appointment_status(id, status).await {
                Ok(update) => {
                    let updated =
                        apply_status_update(&appointments.read(), update.id, update.status);
                    appointments.set(updated);
                    notification.set(Some((
                        NotificationKind::Success,
                        format!("Appointment {} successfully!", status.as_str()),
                    )));
                }
                Err(e) => {
                    tracing::warn!(error = %e, id, "status update failed");
                    notification.set(Some((
                        NotificationKind::Error,
                        "Failed to update appointment. Please try again.".to_string(),
                    )));
                }
            }
        });
    };

    let pending: Vec<Appointment> = appointments
        .read()
        .iter()
        .filter(|a| a.status == AppointmentStatus::Pending)
        .cloned()
        .collect();
    let confirmed: Vec<Appointment> = appointments
        .read()
        .iter()
        .filter(|a| a.status == AppointmentStatus::Confirmed)
        .cloned()
        .collect();

    let pending_count = pending.len();
    let confirmed_count = confirmed.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        AppNavbar {}

        div { class: "page",
            if let Some((kind, message)) = notification() {
                Notification {
                    kind: kind,
                    message: message,
                    on_close: move |_| notification.set(None),
                }
            }

            PageHeader {
                PageTitle { "Counselor Dashboard" }
            }

            div { class: "dashboard-grid",
                Card {
                    CardHeader {
                        CardTitle { "Pending Appointments ({pending_count})" }
                    }
                    CardContent {
                        if loading() {
                            Skeleton { style: "height: 120px; width: 100%;" }
                        } else if pending.is_empty() {
                            p { class: "empty-state", "No pending appointments" }
                        } else {
                            div { class: "appointment-list",
                                for apt in pending.iter() {
                                    {
                                        let id = apt.id;
                                        let display_date = format_date_human(&apt.date);
                                        let display_time = format_time_human(&apt.time);

                                        rsx! {
                                            div { class: "appointment-item pending",
                                                div { class: "appointment-item-main",
                                                    span { class: "appointment-item-title", "{apt.student_name}" }
                                                    span { class: "appointment-item-meta", "{apt.appointment_type}" }
                                                    span { class: "appointment-item-meta",
                                                        "{display_date} at {display_time}"
                                                    }
                                                }
                                                div { class: "appointment-item-actions",
                                                    Button {
                                                        onclick: move |_| handle_decision(id, AppointmentStatus::Confirmed),
                                                        "Accept"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Destructive,
                                                        onclick: move |_| handle_decision(id, AppointmentStatus::Rejected),
                                                        "Reject"
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

                Card {
                    CardHeader {
                        CardTitle { "Confirmed Appointments ({confirmed_count})" }
                    }
                    CardContent {
                        if loading() {
                            Skeleton { style: "height: 120px; width: 100%;" }
                        } else if confirmed.is_empty() {
                            p { class: "empty-state", "No confirmed appointments" }
                        } else {
                            div { class: "appointment-list",
                                for apt in confirmed.iter() {
                                    {
                                        let display_date = format_date_human(&apt.date);
                                        let display_time = format_time_human(&apt.time);

                                        rsx! {
                                            div { class: "appointment-item confirmed",
                                                div { class: "appointment-item-main",
                                                    span { class: "appointment-item-title", "{apt.student_name}" }
                                                    span { class: "appointment-item-meta", "{apt.appointment_type}" }
                                                    span { class: "appointment-item-meta",
                                                        "{display_date} at {display_time}"
                                                    }
                                                }
                                                Badge { variant: BadgeVariant::Primary, "Confirmed" }
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
    }
}
