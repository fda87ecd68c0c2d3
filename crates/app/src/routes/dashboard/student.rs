use chrono::NaiveDateTime;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{
    Appointment, AppointmentRequest, Counselor, Role, ServiceError,
};
use shared_ui::{
    Badge, Button, Card, CardContent, CardHeader, CardTitle, Input, Label, Notification,
    NotificationKind, PageActions, PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::{format_date_human, format_time_human};
use crate::routes::dashboard::status_badge_variant;
use crate::routes::AppNavbar;
use crate::session::use_session;

const APPOINTMENT_TYPES: &[&str] = &[
    "Academic Counseling",
    "Career Guidance",
    "Personal Development",
];

/// Appointments that have not started yet, soonest first. Entries whose
/// date or time no longer parse are dropped from the upcoming view.
fn upcoming_appointments(appointments: &[Appointment], now: NaiveDateTime) -> Vec<Appointment> {
    let mut upcoming: Vec<Appointment> = appointments
        .iter()
        .filter(|apt| apt.starts_at().map(|at| at > now).unwrap_or(false))
        .cloned()
        .collect();
    upcoming.sort_by_key(|apt| apt.starts_at());
    upcoming
}

/// Student dashboard: upcoming appointments, available counselors, and the
/// booking flow. A booked appointment is appended optimistically with
/// pending status.
#[component]
pub fn StudentDashboard() -> Element {
    let session = use_session();
    let Some(identity) = session.identity() else {
        return rsx! { AppNavbar {} };
    };
    let student_id = identity.id;
    let student_name = identity.display_name.clone();

    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut counselors = use_signal(Vec::<Counselor>::new);
    let mut loading = use_signal(|| true);
    let mut notification = use_signal(|| Option::<(NotificationKind, String)>::None);
    let mut booking_open = use_signal(|| false);

    use_future(move || async move {
        let fetched = async {
            let apts = service::api::list_appointments(student_id, Role::Student).await?;
            let cons = service::api::list_counselors().await?;
            Ok::<_, ServiceError>((apts, cons))
        }
        .await;

        match fetched {
            Ok((apts, cons)) => {
                appointments.set(apts);
                counselors.set(cons);
            }
            Err(e) => {
                tracing::warn!(error = %e, "student dashboard fetch failed");
                notification.set(Some((
                    NotificationKind::Error,
                    "Failed to load data. Please try again.".to_string(),
                )));
            }
        }
        loading.set(false);
    });

    let upcoming = upcoming_appointments(&appointments.read(), chrono::Local::now().naive_local());
    let available: Vec<Counselor> = counselors
        .read()
        .iter()
        .filter(|c| c.available)
        .cloned()
        .collect();

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
                PageTitle { "Student Dashboard" }
                PageActions {
                    Button {
                        onclick: move |_| booking_open.set(!booking_open()),
                        Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                        "Book Appointment"
                    }
                }
            }

            if booking_open() {
                BookingForm {
                    student_id: student_id,
                    student_name: student_name.clone(),
                    counselors: available.clone(),
                    on_booked: move |apt: Appointment| {
                        appointments.with_mut(|list| list.push(apt));
                        booking_open.set(false);
                        notification.set(Some((
                            NotificationKind::Success,
                            "Appointment booked successfully!".to_string(),
                        )));
                    },
                    on_error: move |_| {
                        notification.set(Some((
                            NotificationKind::Error,
                            "Failed to book appointment. Please try again.".to_string(),
                        )));
                    },
                }
            }

            div { class: "dashboard-grid",
                Card {
                    CardHeader {
                        CardTitle { "Upcoming Appointments" }
                    }
                    CardContent {
                        if loading() {
                            Skeleton { style: "height: 120px; width: 100%;" }
                        } else if upcoming.is_empty() {
                            p { class: "empty-state", "No upcoming appointments" }
                        } else {
                            div { class: "appointment-list",
                                for apt in upcoming.iter() {
                                    {
                                        let display_date = format_date_human(&apt.date);
                                        let display_time = format_time_human(&apt.time);
                                        let status_label = apt.status.as_str();
                                        let variant = status_badge_variant(apt.status);

                                        rsx! {
                                            div { class: "appointment-item",
                                                div { class: "appointment-item-main",
                                                    span { class: "appointment-item-title", "{apt.appointment_type}" }
                                                    span { class: "appointment-item-meta",
                                                        "with {apt.counselor_name}"
                                                    }
                                                    span { class: "appointment-item-meta",
                                                        "{display_date} at {display_time}"
                                                    }
                                                }
                                                Badge { variant: variant, "{status_label}" }
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
                        CardTitle { "Available Counselors" }
                    }
                    CardContent {
                        if loading() {
                            Skeleton { style: "height: 120px; width: 100%;" }
                        } else if available.is_empty() {
                            p { class: "empty-state", "No counselors available" }
                        } else {
                            div { class: "counselor-list",
                                for counselor in available.iter() {
                                    div { class: "counselor-item",
                                        div { class: "counselor-item-main",
                                            span { class: "counselor-item-name", "{counselor.name}" }
                                            span { class: "counselor-item-meta", "{counselor.specialization}" }
                                        }
                                        span { class: "counselor-available",
                                            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
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

/// Inline booking form. Submits through the service and reports the
/// created appointment (or failure) to the parent.
#[component]
fn BookingForm(
    student_id: i64,
    student_name: String,
    counselors: Vec<Counselor>,
    on_booked: EventHandler<Appointment>,
    on_error: EventHandler<ServiceError>,
) -> Element {
    let default_counselor = counselors.first().map(|c| c.id).unwrap_or(2);
    let mut counselor_id = use_signal(move || default_counselor.to_string());
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut appointment_type = use_signal(|| APPOINTMENT_TYPES[0].to_string());
    let mut submitting = use_signal(|| false);

    let student_name_for_submit = student_name.clone();
    let handle_submit = move |evt: FormEvent| {
        let student_name = student_name_for_submit.clone();
        async move {
            evt.prevent_default();
            submitting.set(true);

            let request = AppointmentRequest {
                student_id,
                student_name,
                counselor_id: counselor_id().parse().unwrap_or(default_counselor),
                date: date(),
                time: time(),
                appointment_type: appointment_type(),
            };

            match service::api::create_appointment(request).await {
                Ok(appointment) => on_booked.call(appointment),
                Err(e) => on_error.call(e),
            }
            submitting.set(false);
        }
    };

    rsx! {
        Card {
            class: "booking-card",
            CardHeader {
                CardTitle { "Book an Appointment" }
            }
            CardContent {
                form { class: "booking-form", onsubmit: handle_submit,
                    div { class: "booking-field",
                        Label { html_for: "counselor", "Counselor" }
                        select {
                            id: "counselor",
                            class: "booking-select",
                            value: counselor_id(),
                            onchange: move |e: FormEvent| counselor_id.set(e.value()),
                            for counselor in counselors.iter() {
                                option { value: "{counselor.id}", "{counselor.name}" }
                            }
                        }
                    }
                    div { class: "booking-field",
                        Label { html_for: "date", "Date" }
                        Input {
                            input_type: "date",
                            id: "date",
                            value: date(),
                            on_input: move |e: FormEvent| date.set(e.value()),
                        }
                    }
                    div { class: "booking-field",
                        Label { html_for: "time", "Time" }
                        Input {
                            input_type: "time",
                            id: "time",
                            value: time(),
                            on_input: move |e: FormEvent| time.set(e.value()),
                        }
                    }
                    div { class: "booking-field",
                        Label { html_for: "type", "Type" }
                        select {
                            id: "type",
                            class: "booking-select",
                            value: appointment_type(),
                            onchange: move |e: FormEvent| appointment_type.set(e.value()),
                            for label in APPOINTMENT_TYPES.iter() {
                                option { value: "{label}", "{label}" }
                            }
                        }
                    }
                    Button {
                        disabled: submitting(),
                        if submitting() { "Booking..." } else { "Book" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::AppointmentStatus;

    fn appointment(id: i64, date: &str, time: &str) -> Appointment {
        Appointment {
            id,
            student_name: "John Doe".into(),
            counselor_name: "Dr. Smith".into(),
            date: date.into(),
            time: time.into(),
            status: AppointmentStatus::Pending,
            appointment_type: "Academic Counseling".into(),
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_time(time.parse().unwrap())
    }

    #[test]
    fn upcoming_filters_out_past_appointments() {
        let list = vec![
            appointment(1, "2025-09-25", "10:00"),
            appointment(2, "2025-09-26", "14:00"),
        ];
        let now = at("2025-09-25", "12:00:00");
        let upcoming = upcoming_appointments(&list, now);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, 2);
    }

    #[test]
    fn upcoming_sorts_soonest_first() {
        let list = vec![
            appointment(1, "2025-10-02", "09:00"),
            appointment(2, "2025-09-26", "14:00"),
            appointment(3, "2025-09-26", "08:00"),
        ];
        let now = at("2025-09-01", "00:00:00");
        let upcoming = upcoming_appointments(&list, now);
        let ids: Vec<i64> = upcoming.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn upcoming_drops_unparseable_entries() {
        let list = vec![appointment(1, "someday", "10:00")];
        let now = at("2025-01-01", "00:00:00");
        assert!(upcoming_appointments(&list, now).is_empty());
    }
}
