use pretty_assertions::assert_eq;
use shared_types::{apply_status_update, AppointmentRequest, AppointmentStatus, Role};

fn booking_request() -> AppointmentRequest {
    AppointmentRequest {
        student_id: 1,
        student_name: "John Doe".to_string(),
        counselor_id: 2,
        date: "2025-10-03".to_string(),
        time: "09:30".to_string(),
        appointment_type: "Career Guidance".to_string(),
    }
}

#[tokio::test]
async fn listing_returns_the_canned_schedule_in_order() {
    let appointments = service::api::list_appointments(1, Role::Student).await.unwrap();

    let ids: Vec<i64> = appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(appointments[0].status, AppointmentStatus::Confirmed);
    assert_eq!(appointments[1].status, AppointmentStatus::Pending);
    assert_eq!(appointments[1].student_name, "Jane Smith");
}

#[tokio::test]
async fn created_appointments_start_pending() {
    let created = service::api::create_appointment(booking_request()).await.unwrap();

    assert_eq!(created.status, AppointmentStatus::Pending);
    assert_eq!(created.student_name, "John Doe");
    assert_eq!(created.counselor_name, "Dr. Smith");
    assert_eq!(created.date, "2025-10-03");
    assert_eq!(created.time, "09:30");
}

#[tokio::test]
async fn created_appointments_get_distinct_ids() {
    let first = service::api::create_appointment(booking_request()).await.unwrap();
    let second = service::api::create_appointment(booking_request()).await.unwrap();
    assert!(second.id != first.id);
}

#[tokio::test]
async fn unknown_counselor_falls_back_to_dr_johnson() {
    let mut request = booking_request();
    request.counselor_id = 99;
    let created = service::api::create_appointment(request).await.unwrap();
    assert_eq!(created.counselor_name, "Dr. Johnson");
}

#[tokio::test]
async fn status_update_echoes_the_decision() {
    let update = service::api::set_appointment_status(2, AppointmentStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(update.id, 2);
    assert_eq!(update.status, AppointmentStatus::Confirmed);
}

#[tokio::test]
async fn confirming_moves_one_appointment_between_partitions() {
    let appointments = service::api::list_appointments(2, Role::Counselor).await.unwrap();
    let pending_before: Vec<i64> = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Pending)
        .map(|a| a.id)
        .collect();
    assert_eq!(pending_before, vec![2]);

    let update = service::api::set_appointment_status(2, AppointmentStatus::Confirmed)
        .await
        .unwrap();
    let updated = apply_status_update(&appointments, update.id, update.status);

    let pending_after: Vec<i64> = updated
        .iter()
        .filter(|a| a.status == AppointmentStatus::Pending)
        .map(|a| a.id)
        .collect();
    let confirmed_after: Vec<i64> = updated
        .iter()
        .filter(|a| a.status == AppointmentStatus::Confirmed)
        .map(|a| a.id)
        .collect();

    assert_eq!(pending_after, Vec::<i64>::new());
    assert_eq!(confirmed_after, vec![1, 2]);

    // Every other field of every appointment is untouched.
    for (before, after) in appointments.iter().zip(updated.iter()) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.student_name, after.student_name);
        assert_eq!(before.counselor_name, after.counselor_name);
        assert_eq!(before.date, after.date);
        assert_eq!(before.time, after.time);
        assert_eq!(before.appointment_type, after.appointment_type);
    }
}

#[tokio::test]
async fn rejecting_a_pending_appointment() {
    let appointments = service::api::list_appointments(2, Role::Counselor).await.unwrap();
    let update = service::api::set_appointment_status(2, AppointmentStatus::Rejected)
        .await
        .unwrap();
    let updated = apply_status_update(&appointments, update.id, update.status);

    assert_eq!(updated[1].status, AppointmentStatus::Rejected);
    assert_eq!(updated[0].status, AppointmentStatus::Confirmed);
}

#[tokio::test]
async fn counselor_listing_matches_booking_targets() {
    let counselors = service::api::list_counselors().await.unwrap();

    let names: Vec<&str> = counselors.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Dr. Smith", "Dr. Johnson"]);
    assert!(counselors.iter().all(|c| c.available));
}
