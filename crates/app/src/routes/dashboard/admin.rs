use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::Analytics;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, Notification, NotificationKind, PageHeader,
    PageTitle, Skeleton,
};

use crate::routes::AppNavbar;

/// Admin dashboard: office-wide booking metrics and per-counselor
/// workload.
#[component]
pub fn AdminDashboard() -> Element {
    let mut analytics = use_signal(|| Option::<Analytics>::None);
    let mut loading = use_signal(|| true);
    let mut notification = use_signal(|| Option::<(NotificationKind, String)>::None);

    use_future(move || async move {
        match service::api::get_analytics().await {
            Ok(data) => analytics.set(Some(data)),
            Err(e) => {
                tracing::warn!(error = %e, "analytics fetch failed");
                notification.set(Some((
                    NotificationKind::Error,
                    "Failed to load analytics. Please try again.".to_string(),
                )));
            }
        }
        loading.set(false);
    });

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
                PageTitle { "Admin Dashboard" }
            }

            if loading() {
                div { class: "stat-grid",
                    Card { CardContent { Skeleton { style: "height: 72px; width: 100%;" } } }
                    Card { CardContent { Skeleton { style: "height: 72px; width: 100%;" } } }
                }
            } else if let Some(data) = analytics() {
                div { class: "stat-grid",
                    Card {
                        CardContent {
                            div { class: "stat-tile",
                                span { class: "stat-icon",
                                    Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 }
                                }
                                div { class: "stat-body",
                                    span { class: "stat-label", "Total Bookings" }
                                    span { class: "stat-value", "{data.total_bookings}" }
                                }
                            }
                        }
                    }
                    Card {
                        CardContent {
                            div { class: "stat-tile",
                                span { class: "stat-icon",
                                    Icon::<LdClock> { icon: LdClock, width: 22, height: 22 }
                                }
                                div { class: "stat-body",
                                    span { class: "stat-label", "Pending Appointments" }
                                    span { class: "stat-value", "{data.pending_count}" }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Counselor Workload" }
                    }
                    CardContent {
                        if data.counselor_workload.is_empty() {
                            p { class: "empty-state", "No workload data" }
                        } else {
                            div { class: "workload-list",
                                for entry in data.counselor_workload.iter() {
                                    div { class: "workload-item",
                                        span { class: "workload-icon",
                                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                        }
                                        span { class: "workload-name", "{entry.name}" }
                                        span { class: "workload-count", "{entry.appointments} appointments" }
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
