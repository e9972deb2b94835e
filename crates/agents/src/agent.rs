use std::sync::Arc;
use std::time::Duration;

use aarogya_core::{
    input_placeholder, quick_actions, IntentCategory, Language, Message, QuickAction,
    VOICE_TRANSCRIPT,
};
use aarogya_observability::AppMetrics;
use parking_lot::Mutex;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::SessionError;
use crate::notify::{Notification, Notifier};
use crate::scheduler::ReplyScheduler;
use crate::session::{ChatSession, SessionState};

const VOICE_CAPTURE_DELAY: Duration = Duration::from_secs(3);
const SPEECH_PLAYBACK_DELAY: Duration = Duration::from_secs(3);

/// Drives a `ChatSession` through its submit / wait / complete cycle.
pub struct ChatAgent<S, N>
where
    S: ReplyScheduler,
    N: Notifier,
{
    session: Arc<Mutex<ChatSession>>,
    scheduler: S,
    notifier: N,
    metrics: Arc<AppMetrics>,
}

impl<S, N> ChatAgent<S, N>
where
    S: ReplyScheduler,
    N: Notifier,
{
    pub fn new(session: ChatSession, scheduler: S, notifier: N, metrics: Arc<AppMetrics>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            scheduler,
            notifier,
            metrics,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session.lock().id()
    }

    pub fn state(&self) -> SessionState {
        self.session.lock().state()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.session.lock().messages().to_vec()
    }

    pub fn ui_language(&self) -> Language {
        self.session.lock().ui_language()
    }

    pub fn quick_actions(&self) -> [QuickAction; 4] {
        quick_actions(self.ui_language())
    }

    pub fn placeholder(&self) -> &'static str {
        input_placeholder(self.ui_language())
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.metrics
    }

    /// Submits `text`, waits out the typing delay, and returns the appended
    /// reply. A call made while another reply is pending fails with
    /// `ReplyPending` and leaves the log untouched.
    #[instrument(skip(self, text))]
    pub async fn send(&self, text: &str) -> Result<Message, SessionError> {
        let submitted = self.session.lock().submit(text);
        let pending = match submitted {
            Ok(pending) => pending,
            Err(SessionError::ReplyPending) => {
                self.metrics.inc_rejected();
                warn!(session_id = %self.session_id(), "submission dropped, reply pending");
                return Err(SessionError::ReplyPending);
            }
            Err(err) => return Err(err),
        };

        self.metrics.inc_message();
        self.metrics.observe_classification(
            pending.classification.language.as_code(),
            pending.classification.intent.as_str(),
        );
        if pending.classification.intent == IntentCategory::Emergency {
            self.metrics.inc_emergency();
        }

        let delay = pending.delay;
        let classification = pending.classification;
        self.scheduler.wait(delay).await;

        let message = self.session.lock().complete(pending)?;
        self.metrics.inc_reply();
        self.metrics.observe_delay(delay);

        info!(
            session_id = %self.session_id(),
            language = %classification.language.as_code(),
            intent = %classification.intent.as_str(),
            delay_ms = delay.as_millis() as u64,
            "reply appended"
        );

        Ok(message)
    }

    pub fn toggle_ui_language(&self) -> Language {
        let language = self.session.lock().toggle_ui_language();
        self.emit(Notification::toast(format!(
            "Language switched to {}",
            language.display_name()
        )));
        language
    }

    /// Stands in for speech recognition: always "hears" the same Hindi
    /// symptom report.
    pub async fn simulate_voice_input(&self) -> String {
        self.emit(Notification::toast("Voice input activated! Speak now..."));
        self.scheduler.wait(VOICE_CAPTURE_DELAY).await;
        self.emit(Notification::toast("Voice input captured!"));
        VOICE_TRANSCRIPT.to_string()
    }

    /// Stands in for speech synthesis of `message`.
    pub async fn simulate_speech(&self, message: &Message) {
        self.emit(Notification::toast("Playing audio response..."));
        self.scheduler.wait(SPEECH_PLAYBACK_DELAY).await;
        info!(message_id = %message.id(), "speech playback finished");
    }

    fn emit(&self, notification: Notification) {
        self.metrics.inc_notification();
        self.notifier.notify(notification);
    }
}
