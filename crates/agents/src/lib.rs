mod agent;
mod error;
mod field;
mod notify;
mod scheduler;
mod session;

pub use agent::ChatAgent;
pub use error::SessionError;
pub use field::{FieldDesk, REPORT_SUBMITTED_TOAST, WATER_TEST_SUBMITTED_TOAST};
pub use notify::{
    dispatch_test_alert, CollectingNotifier, Notification, Notifier, TracingNotifier,
    TEST_ALERT_TOAST,
};
pub use scheduler::{ImmediateScheduler, ReplyScheduler, TokioScheduler};
pub use session::{ChatSession, DelayPolicy, PendingReply, SessionState};
