use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    messages_total: AtomicU64,
    replies_total: AtomicU64,
    rejected_total: AtomicU64,
    emergency_total: AtomicU64,
    notifications_total: AtomicU64,
    total_delay_millis: AtomicU64,
    reports_total: AtomicU64,
    water_tests_total: AtomicU64,
    alert_actions_total: AtomicU64,
    /// Classified messages keyed by `(language, intent)` codes.
    classified: Mutex<BTreeMap<(&'static str, &'static str), u64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub messages_total: u64,
    pub replies_total: u64,
    pub rejected_total: u64,
    pub emergency_total: u64,
    pub notifications_total: u64,
    pub avg_delay_millis: f64,
    pub reports_total: u64,
    pub water_tests_total: u64,
    pub alert_actions_total: u64,
    pub by_intent: BTreeMap<String, u64>,
    pub by_language: BTreeMap<String, u64>,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_message(&self) {
        self.messages_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_reply(&self) {
        self.replies_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_rejected(&self) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_emergency(&self) {
        self.emergency_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_notification(&self) {
        self.notifications_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_report(&self) {
        self.reports_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_water_test(&self) {
        self.water_tests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_alert_action(&self) {
        self.alert_actions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_classification(&self, language: &'static str, intent: &'static str) {
        *self.classified.lock().entry((language, intent)).or_insert(0) += 1;
    }

    /// Records the artificial typing delay a reply waited for.
    pub fn observe_delay(&self, delay: Duration) {
        self.total_delay_millis
            .fetch_add(delay.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let replies = self.replies_total.load(Ordering::Relaxed);
        let delay = self.total_delay_millis.load(Ordering::Relaxed);

        let mut by_intent = BTreeMap::new();
        let mut by_language = BTreeMap::new();
        for ((language, intent), count) in self.classified.lock().iter() {
            *by_intent.entry(intent.to_string()).or_insert(0) += count;
            *by_language.entry(language.to_string()).or_insert(0) += count;
        }

        MetricsSnapshot {
            messages_total: self.messages_total.load(Ordering::Relaxed),
            replies_total: replies,
            rejected_total: self.rejected_total.load(Ordering::Relaxed),
            emergency_total: self.emergency_total.load(Ordering::Relaxed),
            notifications_total: self.notifications_total.load(Ordering::Relaxed),
            avg_delay_millis: if replies == 0 {
                0.0
            } else {
                delay as f64 / replies as f64
            },
            reports_total: self.reports_total.load(Ordering::Relaxed),
            water_tests_total: self.water_tests_total.load(Ordering::Relaxed),
            alert_actions_total: self.alert_actions_total.load(Ordering::Relaxed),
            by_intent,
            by_language,
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,aarogya_agents=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
