pub mod admin;
pub mod counselor;
pub mod student;

pub use admin::AdminDashboard;
pub use counselor::CounselorDashboard;
pub use student::StudentDashboard;

use shared_types::AppointmentStatus;
use shared_ui::BadgeVariant;

/// Map an appointment status to a badge variant for color-coding.
pub(crate) fn status_badge_variant(status: AppointmentStatus) -> BadgeVariant {
    match status {
        AppointmentStatus::Pending => BadgeVariant::Outline,
        AppointmentStatus::Confirmed => BadgeVariant::Primary,
        AppointmentStatus::Rejected => BadgeVariant::Destructive,
    }
}
