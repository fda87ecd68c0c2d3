use pretty_assertions::assert_eq;

#[tokio::test]
async fn analytics_reports_office_totals() {
    let analytics = service::api::get_analytics().await.unwrap();

    assert_eq!(analytics.total_bookings, 156);
    assert_eq!(analytics.pending_count, 23);
}

#[tokio::test]
async fn analytics_breaks_down_workload_per_counselor() {
    let analytics = service::api::get_analytics().await.unwrap();

    assert_eq!(analytics.counselor_workload.len(), 2);
    assert_eq!(analytics.counselor_workload[0].name, "Dr. Smith");
    assert_eq!(analytics.counselor_workload[0].appointments, 45);
    assert_eq!(analytics.counselor_workload[1].name, "Dr. Johnson");
    assert_eq!(analytics.counselor_workload[1].appointments, 38);
}

#[tokio::test]
async fn analytics_survives_json_roundtrip() {
    let analytics = service::api::get_analytics().await.unwrap();
    let json = serde_json::to_string(&analytics).unwrap();
    let parsed: shared_types::Analytics = serde_json::from_str(&json).unwrap();
    assert_eq!(analytics, parsed);
}
