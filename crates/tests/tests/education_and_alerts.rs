use std::collections::HashMap;

use aarogya_agents::{dispatch_test_alert, CollectingNotifier, TEST_ALERT_TOAST};
use aarogya_core::{
    builtin_quiz, filter_alerts, score_quiz, Alert, AlertKind, AlertPreferences, AlertStatus,
    Channel, Severity, UserProgress,
};

fn alert_fixtures() -> Vec<Alert> {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "title": "High Risk Water Contamination Detected",
            "message": "Bacterial contamination levels exceed safe limits in Rampur village water supply.",
            "severity": "high",
            "kind": "water-quality",
            "location": "Rampur Village, Bihar",
            "status": "active",
            "channels": ["sms", "whatsapp", "email", "voice"],
            "acknowledged": false
        },
        {
            "id": 2,
            "title": "Disease Outbreak Alert",
            "message": "Increased reports of diarrheal illness in Jharia area.",
            "severity": "medium",
            "kind": "health",
            "location": "Jharia, Jharkhand",
            "status": "investigating",
            "channels": ["sms", "whatsapp", "email"],
            "acknowledged": true
        },
        {
            "id": 4,
            "title": "Preventive Chlorination Schedule",
            "message": "Scheduled water chlorination will begin tomorrow at 6 AM.",
            "severity": "low",
            "kind": "maintenance",
            "location": "Gaya District, Bihar",
            "status": "scheduled",
            "channels": ["sms", "whatsapp", "email"],
            "acknowledged": true
        },
        {
            "id": 5,
            "title": "Emergency Water Distribution",
            "message": "Emergency water tankers deployed to affected areas.",
            "severity": "high",
            "kind": "emergency",
            "location": "Multiple Villages, Bihar",
            "status": "active",
            "channels": ["sms", "whatsapp", "email", "voice"],
            "acknowledged": false
        }
    ]))
    .expect("fixtures match the alert schema")
}

#[test]
fn fixtures_deserialize_with_kebab_kinds() {
    let alerts = alert_fixtures();
    assert_eq!(alerts[0].kind, AlertKind::WaterQuality);
    assert_eq!(alerts[2].status, AlertStatus::Scheduled);
}

#[test]
fn bihar_high_severity_alerts() {
    let alerts = alert_fixtures();
    let ids = filter_alerts(&alerts, "Bihar", Some(Severity::High))
        .into_iter()
        .map(|alert| alert.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn passing_quiz_updates_progress() {
    let questions = builtin_quiz();
    let answers: HashMap<u32, usize> = [(1, 1), (2, 2), (3, 1)].into_iter().collect();

    let outcome = score_quiz(&questions, &answers);
    let mut progress = UserProgress::default();
    progress.apply_quiz(&outcome);

    assert!(outcome.passed);
    assert_eq!(progress.total_points, 1300);
    assert!(progress.badges.iter().any(|badge| badge == "quiz-master"));
}

#[test]
fn failing_quiz_leaves_progress_alone() {
    let questions = builtin_quiz();
    let answers: HashMap<u32, usize> = [(1, 0)].into_iter().collect();

    let outcome = score_quiz(&questions, &answers);
    let mut progress = UserProgress::default();

    assert_eq!(outcome.score_percent, 33);
    assert!(!progress.apply_quiz(&outcome));
    assert_eq!(progress.total_points, 1250);
}

#[test]
fn test_alert_is_collected_not_delivered() {
    let collector = CollectingNotifier::default();
    let channels = dispatch_test_alert(&AlertPreferences::default(), &collector);

    assert!(!channels.contains(&Channel::Voice));
    let recorded = collector.snapshot();
    assert_eq!(recorded.len(), channels.len() + 1);
    assert_eq!(recorded.last().map(|n| n.body.as_str()), Some(TEST_ALERT_TOAST));
}
