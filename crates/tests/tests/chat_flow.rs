use std::sync::Arc;
use std::time::{Duration, Instant};

use aarogya_agents::{
    ChatAgent, ChatSession, CollectingNotifier, DelayPolicy, ImmediateScheduler, ReplyScheduler,
    SessionError, SessionState, TokioScheduler,
};
use aarogya_core::{
    classify, IntentCategory, Language, ResponseBank, Sender, CONFIDENCE_RANGE, VOICE_TRANSCRIPT,
};
use aarogya_observability::AppMetrics;
use tokio::sync::Notify;

const SYMPTOM_REPORT: &str = "मेरे पेट में दर्द हो रहा है और दस्त भी लग रहे हैं";

/// Holds every wait until the test opens the gate.
struct GatedScheduler {
    gate: Arc<Notify>,
}

impl ReplyScheduler for GatedScheduler {
    async fn wait(&self, _delay: Duration) {
        self.gate.notified().await;
    }
}

fn session(seed: u64) -> ChatSession {
    ChatSession::new(Arc::new(ResponseBank::builtin()))
        .expect("builtin bank is valid")
        .with_seed(seed)
}

#[tokio::test]
async fn hindi_symptom_report_gets_hindi_symptom_reply() {
    let bank = ResponseBank::builtin();
    let classification = classify(SYMPTOM_REPORT);
    assert_eq!(classification.language, Language::Hi);
    assert_eq!(classification.intent, IntentCategory::HealthSymptoms);

    for seed in 0..25 {
        let agent = ChatAgent::new(
            session(seed).with_delay(DelayPolicy::none()),
            ImmediateScheduler,
            CollectingNotifier::shared(),
            AppMetrics::shared(),
        );

        let reply = agent.send(SYMPTOM_REPORT).await.unwrap();
        assert_eq!(reply.language(), Language::Hi);
        let bucket = bank
            .candidates(Language::Hi, IntentCategory::HealthSymptoms)
            .unwrap();
        assert!(bucket.iter().any(|candidate| candidate == reply.text()));
        assert!(CONFIDENCE_RANGE.contains(&reply.confidence().unwrap()));
    }
}

#[tokio::test]
async fn overlapping_submission_is_dropped_while_reply_pending() {
    let gate = Arc::new(Notify::new());
    let metrics = AppMetrics::shared();
    let agent = ChatAgent::new(
        session(9),
        GatedScheduler { gate: gate.clone() },
        CollectingNotifier::shared(),
        metrics.clone(),
    );

    let first = agent.send("पानी में संदूषण है");
    let second = async {
        let result = agent.send("hello again").await;
        gate.notify_one();
        result
    };
    let (first, second) = tokio::join!(first, second);

    let reply = first.unwrap();
    assert_eq!(reply.language(), Language::Hi);
    assert!(matches!(second, Err(SessionError::ReplyPending)));

    let log = agent.messages();
    assert_eq!(log.len(), 4);
    assert_eq!(log[2].text(), "पानी में संदूषण है");
    assert_eq!(log[3].sender(), Sender::System);
    assert_eq!(agent.state(), SessionState::Idle);

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.messages_total, 1);
    assert_eq!(snapshot.rejected_total, 1);
}

#[tokio::test]
async fn tokio_scheduler_waits_for_the_typing_delay() {
    let agent = ChatAgent::new(
        session(1).with_delay(DelayPolicy {
            base: Duration::from_millis(30),
            jitter: Duration::from_millis(10),
        }),
        TokioScheduler,
        CollectingNotifier::shared(),
        AppMetrics::shared(),
    );

    let started = Instant::now();
    agent.send("how to prevent cholera").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(30));
    assert!(agent.metrics().snapshot().avg_delay_millis >= 30.0);
}

#[tokio::test]
async fn voice_transcript_flows_into_the_conversation() {
    let notifier = CollectingNotifier::shared();
    let agent = ChatAgent::new(
        session(4).without_welcome().with_delay(DelayPolicy::none()),
        ImmediateScheduler,
        notifier.clone(),
        AppMetrics::shared(),
    );

    let transcript = agent.simulate_voice_input().await;
    assert_eq!(transcript, VOICE_TRANSCRIPT);
    let reply = agent.send(&transcript).await.unwrap();
    agent.simulate_speech(&reply).await;

    assert_eq!(agent.messages().len(), 2);
    assert_eq!(
        notifier.bodies(),
        vec![
            "Voice input activated! Speak now...",
            "Voice input captured!",
            "Playing audio response...",
        ]
    );
    assert_eq!(agent.metrics().snapshot().notifications_total, 3);
}

#[tokio::test]
async fn emergency_wins_in_either_language() {
    let agent = ChatAgent::new(
        session(2).without_welcome().with_delay(DelayPolicy::none()),
        ImmediateScheduler,
        CollectingNotifier::shared(),
        AppMetrics::shared(),
    );
    let bank = ResponseBank::builtin();

    let english = agent
        .send("URGENT the water supply smells of sewage")
        .await
        .unwrap();
    assert!(bank
        .candidates(Language::En, IntentCategory::Emergency)
        .unwrap()
        .iter()
        .any(|candidate| candidate == english.text()));

    let hindi = agent.send("आपातकाल! पानी में संदूषण है").await.unwrap();
    assert!(bank
        .candidates(Language::Hi, IntentCategory::Emergency)
        .unwrap()
        .iter()
        .any(|candidate| candidate == hindi.text()));

    assert_eq!(agent.metrics().snapshot().emergency_total, 2);
}
