//! Canned payloads served by the mock endpoints.

use shared_types::{
    Analytics, Appointment, AppointmentStatus, Counselor, CounselorWorkload, Identity, Role,
};

/// Password accepted for every mock credential user.
pub const MOCK_PASSWORD: &str = "password";

/// Resolve a mock credential user by username.
pub fn credential_user(username: &str) -> Option<Identity> {
    let (id, display_name, role) = match username {
        "student1" => (1, "John Doe", Role::Student),
        "counselor1" => (2, "Dr. Smith", Role::Counselor),
        "admin1" => (3, "Admin User", Role::Admin),
        _ => return None,
    };
    Some(Identity {
        id,
        display_name: display_name.to_string(),
        roles: vec![role],
        token: None,
    })
}

/// Identity asserted after a (mocked) external-provider login completes.
pub fn provider_identity() -> Identity {
    Identity {
        id: 220_701_230,
        display_name: "AAD Admin User".to_string(),
        roles: vec![Role::Admin],
        token: None,
    }
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            student_name: "John Doe".to_string(),
            counselor_name: "Dr. Smith".to_string(),
            date: "2025-09-25".to_string(),
            time: "10:00".to_string(),
            status: AppointmentStatus::Confirmed,
            appointment_type: "Academic Counseling".to_string(),
        },
        Appointment {
            id: 2,
            student_name: "Jane Smith".to_string(),
            counselor_name: "Dr. Johnson".to_string(),
            date: "2025-09-26".to_string(),
            time: "14:00".to_string(),
            status: AppointmentStatus::Pending,
            appointment_type: "Career Guidance".to_string(),
        },
    ]
}

pub fn counselors() -> Vec<Counselor> {
    vec![
        Counselor {
            id: 2,
            name: "Dr. Smith".to_string(),
            specialization: "Academic & Career".to_string(),
            available: true,
        },
        Counselor {
            id: 3,
            name: "Dr. Johnson".to_string(),
            specialization: "Personal Development".to_string(),
            available: true,
        },
    ]
}

pub fn analytics() -> Analytics {
    Analytics {
        total_bookings: 156,
        pending_count: 23,
        counselor_workload: vec![
            CounselorWorkload {
                name: "Dr. Smith".to_string(),
                appointments: 45,
            },
            CounselorWorkload {
                name: "Dr. Johnson".to_string(),
                appointments: 38,
            },
        ],
    }
}

/// Resolve a counselor's display name for a freshly booked appointment.
pub fn counselor_name(counselor_id: i64) -> &'static str {
    if counselor_id == 2 {
        "Dr. Smith"
    } else {
        "Dr. Johnson"
    }
}
