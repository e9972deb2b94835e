use aarogya_agents::{
    CollectingNotifier, FieldDesk, ImmediateScheduler, WATER_TEST_SUBMITTED_TOAST,
};
use aarogya_core::{
    AlertBoard, Channel, HealthReport, Language, ManualWaterTest, SensorId, SYMPTOM_OPTIONS,
};
use aarogya_observability::AppMetrics;

#[tokio::test]
async fn hindi_health_report_from_capture_to_submit() {
    let notifier = CollectingNotifier::shared();
    let desk = FieldDesk::new(ImmediateScheduler, notifier.clone(), AppMetrics::shared());

    let mut report = HealthReport {
        reporter_name: "Sunita Devi".to_string(),
        reporter_role: "ASHA worker".to_string(),
        patient_age: Some(6),
        language: Language::Hi,
        ..HealthReport::default()
    };
    for symptom in ["Diarrhea", "Vomiting", "Dehydration", "Vomiting"] {
        assert!(SYMPTOM_OPTIONS.contains(&symptom));
        report.toggle_symptom(symptom);
    }
    desk.capture_location(&mut report).await;
    desk.record_voice_note(&mut report).await;

    let submitted = desk.submit_report(&mut report);

    assert_eq!(submitted.symptoms, vec!["Diarrhea", "Dehydration"]);
    assert_eq!(submitted.language, Language::Hi);
    assert!(submitted.location.starts_with("Village: Rampur"));
    assert!(submitted.additional_notes.contains("waterborne illness"));
    assert!(report.symptoms.is_empty());

    let authorities = notifier
        .snapshot()
        .into_iter()
        .filter(|n| n.channel == Channel::Sms)
        .collect::<Vec<_>>();
    assert_eq!(authorities.len(), 1);
    assert!(authorities[0].body.contains("Rampur"));

    let snapshot = desk.metrics().snapshot();
    assert_eq!(snapshot.reports_total, 1);
    assert_eq!(snapshot.notifications_total, 7);
}

#[tokio::test]
async fn kit_photo_then_manual_submit() {
    let notifier = CollectingNotifier::shared();
    let desk = FieldDesk::new(ImmediateScheduler, notifier.clone(), AppMetrics::shared());
    let mut test = ManualWaterTest {
        location: "Gaya District, Bihar".to_string(),
        turbidity: Some(3.4),
        ..ManualWaterTest::default()
    };

    desk.analyze_test_kit(&mut test).await;
    assert_eq!(test.ph, Some(7.1));

    let submitted = desk.submit_water_test(&mut test);
    assert_eq!(submitted.chlorine, Some(0.9));
    assert_eq!(submitted.turbidity, Some(3.4));
    assert_eq!(test, ManualWaterTest::default());
    assert_eq!(
        notifier.bodies().last().map(String::as_str),
        Some(WATER_TEST_SUBMITTED_TOAST)
    );
    assert_eq!(desk.metrics().snapshot().water_tests_total, 1);
}

#[tokio::test]
async fn sensor_refresh_reports_every_parameter() {
    let notifier = CollectingNotifier::shared();
    let desk = FieldDesk::new(ImmediateScheduler, notifier.clone(), AppMetrics::shared());
    let sensor = SensorId("WQ-GAYA-07".to_string());

    let readings = desk.refresh_sensors(&sensor).await;

    assert_eq!(readings.len(), 6);
    assert!(readings.iter().all(|reading| reading.sensor_id == sensor));
    let bacteria = readings.iter().find(|r| r.parameter == "bacteria").unwrap();
    assert_eq!((bacteria.value, bacteria.unit), (12.0, "CFU/100ml"));
    assert_eq!(notifier.bodies(), vec!["Sensor data refreshed successfully!"]);
}

#[test]
fn working_through_the_alert_feed() {
    let alerts = serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "title": "High Risk Water Contamination Detected",
            "message": "Bacterial contamination levels exceed safe limits.",
            "severity": "high",
            "kind": "water-quality",
            "location": "Rampur Village, Bihar",
            "status": "active",
            "channels": ["sms", "whatsapp"],
            "acknowledged": false
        },
        {
            "id": 3,
            "title": "Water Quality Improvement",
            "message": "Water quality has improved after treatment.",
            "severity": "low",
            "kind": "update",
            "location": "Kalahandi, Odisha",
            "status": "resolved",
            "channels": ["sms"],
            "acknowledged": false
        }
    ]))
    .expect("fixtures match the alert schema");
    let mut board = AlertBoard::new(alerts);
    let notifier = CollectingNotifier::shared();
    let desk = FieldDesk::new(ImmediateScheduler, notifier.clone(), AppMetrics::shared());

    desk.acknowledge_alert(&mut board, 1).unwrap();
    desk.dismiss_alert(&mut board, 3).unwrap();
    assert!(desk.dismiss_alert(&mut board, 3).is_err());

    assert_eq!(board.unacknowledged(), 0);
    assert_eq!(board.filter("bihar", None).len(), 1);
    assert_eq!(desk.metrics().snapshot().alert_actions_total, 2);
    assert_eq!(
        notifier.bodies(),
        vec!["Alert acknowledged successfully!", "Alert dismissed!"]
    );
}
