use std::sync::Arc;
use std::time::Duration;

use aarogya_core::{
    classify, normalize_text, welcome_messages, Classification, Language, Message, ResponseBank,
};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Responding,
}

/// Artificial "typing" delay before a reply shows up: `base` plus a uniform
/// jitter in `[0, jitter)`. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    pub base: Duration,
    pub jitter: Duration,
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(1500),
            jitter: Duration::from_millis(1000),
        }
    }
}

impl DelayPolicy {
    pub fn none() -> Self {
        Self {
            base: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter_millis = self.jitter.as_millis() as u64;
        if jitter_millis == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rng.gen_range(0..jitter_millis))
    }
}

/// Handle for the reply a session owes after `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    ticket: Uuid,
    pub classification: Classification,
    pub delay: Duration,
}

impl PendingReply {
    pub fn ticket(&self) -> Uuid {
        self.ticket
    }
}

/// Conversation owned by its caller. At most one reply is in flight: a
/// submission while `Responding` is rejected with `ReplyPending`.
pub struct ChatSession {
    id: Uuid,
    ui_language: Language,
    messages: Vec<Message>,
    state: SessionState,
    in_flight: Option<Uuid>,
    bank: Arc<ResponseBank>,
    rng: Box<dyn RngCore + Send>,
    delay: DelayPolicy,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("ui_language", &self.ui_language)
            .field("messages", &self.messages)
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .field("bank", &self.bank)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl ChatSession {
    pub fn new(bank: Arc<ResponseBank>) -> Result<Self, SessionError> {
        bank.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            ui_language: Language::En,
            messages: welcome_messages(),
            state: SessionState::Idle,
            in_flight: None,
            bank,
            rng: Box::new(StdRng::from_entropy()),
            delay: DelayPolicy::default(),
        })
    }

    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_delay(mut self, delay: DelayPolicy) -> Self {
        self.delay = delay;
        self
    }

    pub fn without_welcome(mut self) -> Self {
        self.messages.clear();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_responding(&self) -> bool {
        self.state == SessionState::Responding
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn ui_language(&self) -> Language {
        self.ui_language
    }

    pub fn toggle_ui_language(&mut self) -> Language {
        self.ui_language = self.ui_language.toggled();
        self.ui_language
    }

    /// Appends the user message and moves to `Responding`. The caller waits
    /// out `PendingReply::delay` and then calls `complete`.
    pub fn submit(&mut self, text: &str) -> Result<PendingReply, SessionError> {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        if self.is_responding() {
            return Err(SessionError::ReplyPending);
        }

        let classification = classify(&normalized);
        self.messages
            .push(Message::user(normalized, classification.language));

        let ticket = Uuid::new_v4();
        self.in_flight = Some(ticket);
        self.state = SessionState::Responding;

        Ok(PendingReply {
            ticket,
            classification,
            delay: self.delay.sample(&mut *self.rng),
        })
    }

    pub fn complete(&mut self, pending: PendingReply) -> Result<Message, SessionError> {
        if self.in_flight != Some(pending.ticket) {
            return Err(SessionError::UnknownTicket(pending.ticket));
        }

        self.in_flight = None;
        self.state = SessionState::Idle;

        let Classification { language, intent } = pending.classification;
        let reply = self.bank.respond(language, intent, &mut *self.rng)?;
        let message = Message::system(reply.text, reply.language, Some(reply.confidence));
        self.messages.push(message.clone());

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use aarogya_core::{CoreError, IntentCategory, Sender, CONFIDENCE_RANGE};

    use super::*;

    fn session() -> ChatSession {
        ChatSession::new(Arc::new(ResponseBank::builtin()))
            .unwrap()
            .with_seed(11)
            .with_delay(DelayPolicy::none())
    }

    #[test]
    fn english_only_bank_is_rejected_at_startup() {
        let mut bank = ResponseBank::builtin();
        for intent in IntentCategory::ALL {
            bank.remove(Language::Hi, intent);
        }

        let err = ChatSession::new(Arc::new(bank)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Core(CoreError::MissingDefaultBucket(Language::Hi))
        ));
    }

    #[test]
    fn starts_idle_with_welcome_messages() {
        let session = session();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.messages().len(), 2);
        assert!(session.without_welcome().messages().is_empty());
    }

    #[test]
    fn submit_then_complete_round_trip() {
        let mut session = session().without_welcome();

        let pending = session.submit("  Hello  ").unwrap();
        assert_eq!(session.state(), SessionState::Responding);
        assert_eq!(pending.classification.intent, IntentCategory::Greeting);
        assert_eq!(session.messages()[0].text(), "Hello");

        let reply = session.complete(pending).unwrap();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(reply.sender(), Sender::System);
        assert_eq!(reply.language(), Language::En);
        assert!(CONFIDENCE_RANGE.contains(&reply.confidence().unwrap()));
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn rejects_blank_input() {
        let mut session = session();
        assert!(matches!(session.submit(" \n\t"), Err(SessionError::EmptyMessage)));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn second_submission_while_responding_is_rejected() {
        let mut session = session().without_welcome();
        let pending = session.submit("water smells bad").unwrap();

        assert!(matches!(
            session.submit("urgent help"),
            Err(SessionError::ReplyPending)
        ));
        assert_eq!(session.messages().len(), 1);

        session.complete(pending).unwrap();
        assert!(session.submit("urgent help").is_ok());
    }

    #[test]
    fn stale_ticket_is_rejected() {
        let mut session = session();
        let first = session.submit("hello").unwrap();
        session.complete(first.clone()).unwrap();

        assert!(matches!(
            session.complete(first),
            Err(SessionError::UnknownTicket(_))
        ));
    }

    #[test]
    fn delay_stays_within_base_plus_jitter() {
        let policy = DelayPolicy::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let delay = policy.sample(&mut rng);
            assert!(delay >= Duration::from_millis(1500));
            assert!(delay < Duration::from_millis(2500));
        }
        assert_eq!(DelayPolicy::none().sample(&mut rng), Duration::ZERO);
    }

    #[test]
    fn toggles_ui_language() {
        let mut session = session();
        assert_eq!(session.toggle_ui_language(), Language::Hi);
        assert_eq!(session.toggle_ui_language(), Language::En);
    }
}
