use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an appointment.
///
/// The only transitions this system produces are pending→confirmed and
/// pending→rejected, both issued from the counselor dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Rejected,
}

impl AppointmentStatus {
    /// Lowercase string form for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Rejected => "rejected",
        }
    }

    /// Parse a status string, defaulting to pending for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "confirmed" => AppointmentStatus::Confirmed,
            "rejected" => AppointmentStatus::Rejected,
            _ => AppointmentStatus::Pending,
        }
    }
}

/// A counseling appointment as returned by the appointment service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub student_name: String,
    pub counselor_name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Wall-clock time, `HH:MM`.
    pub time: String,
    pub status: AppointmentStatus,
    /// Free-form type label, e.g. "Academic Counseling".
    pub appointment_type: String,
}

impl Appointment {
    /// Combined date+time instant, or None when either field fails to parse.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M").ok()?;
        Some(date.and_time(time))
    }
}

/// Request payload for booking a new appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentRequest {
    pub student_id: i64,
    pub student_name: String,
    pub counselor_id: i64,
    pub date: String,
    pub time: String,
    pub appointment_type: String,
}

/// Acknowledgement returned by a status mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdate {
    pub id: i64,
    pub status: AppointmentStatus,
}

/// A counselor available for booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Counselor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub available: bool,
}

/// Office-wide booking metrics for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analytics {
    pub total_bookings: i64,
    pub pending_count: i64,
    pub counselor_workload: Vec<CounselorWorkload>,
}

/// Appointment count attributed to a single counselor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CounselorWorkload {
    pub name: String,
    pub appointments: i64,
}

/// Apply a status acknowledgement to an appointment list, returning the
/// updated list. Only the matching id changes; every other entry is
/// carried through untouched.
pub fn apply_status_update(
    appointments: &[Appointment],
    id: i64,
    status: AppointmentStatus,
) -> Vec<Appointment> {
    appointments
        .iter()
        .map(|apt| {
            if apt.id == id {
                Appointment {
                    status,
                    ..apt.clone()
                }
            } else {
                apt.clone()
            }
        })
        .collect()
}
