use std::sync::Arc;

use aarogya_core::{AlertPreferences, Channel, Severity};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;

pub const TEST_ALERT_TOAST: &str = "Test alert sent successfully to all configured channels!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub channel: Channel,
    pub title: String,
    pub body: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(channel: Channel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            channel,
            title: title.into(),
            body: body.into(),
            at: Utc::now(),
        }
    }

    pub fn toast(body: impl Into<String>) -> Self {
        Self::new(Channel::Toast, "", body)
    }
}

/// Sink for every outward effect of the assistant. Implementations record
/// or log; none of them delivers anything.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        info!(
            channel = ?notification.channel,
            title = %notification.title,
            body = %notification.body,
            "notification recorded"
        );
    }
}

#[derive(Debug, Default)]
pub struct CollectingNotifier {
    items: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.lock().clone()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.items.lock())
    }

    pub fn bodies(&self) -> Vec<String> {
        self.items
            .lock()
            .iter()
            .map(|notification| notification.body.clone())
            .collect()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notification: Notification) {
        self.items.lock().push(notification);
    }
}

/// Sends a high-severity test alert to every channel enabled in `prefs`,
/// then confirms with a toast. Returns the channels used.
pub fn dispatch_test_alert<N: Notifier + ?Sized>(
    prefs: &AlertPreferences,
    notifier: &N,
) -> Vec<Channel> {
    let channels = prefs.channels_for(Severity::High);
    for channel in &channels {
        notifier.notify(Notification::new(
            *channel,
            "Test Alert",
            "This is a test alert from AarogyaJal.",
        ));
    }
    notifier.notify(Notification::toast(TEST_ALERT_TOAST));
    channels
}
