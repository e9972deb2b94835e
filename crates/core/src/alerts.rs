use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Delivery surface for a notification. Nothing in this workspace reaches a
/// real carrier; every channel ends at a `Notifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Toast,
    Sms,
    Whatsapp,
    Email,
    Voice,
    WebPush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    WaterQuality,
    Health,
    Update,
    Maintenance,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Investigating,
    Resolved,
    Scheduled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub kind: AlertKind,
    pub location: String,
    pub status: AlertStatus,
    pub channels: Vec<Channel>,
    pub acknowledged: bool,
}

/// The alert feed a user works through: acknowledging marks an alert as
/// seen, dismissing removes it from the feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
}

impl AlertBoard {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn unacknowledged(&self) -> usize {
        self.alerts.iter().filter(|alert| !alert.acknowledged).count()
    }

    pub fn acknowledge(&mut self, id: u32) -> Result<&Alert, CoreError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or(CoreError::UnknownAlert(id))?;
        alert.acknowledged = true;
        Ok(alert)
    }

    pub fn dismiss(&mut self, id: u32) -> Result<Alert, CoreError> {
        let index = self
            .alerts
            .iter()
            .position(|alert| alert.id == id)
            .ok_or(CoreError::UnknownAlert(id))?;
        Ok(self.alerts.remove(index))
    }

    pub fn filter(&self, search: &str, severity: Option<Severity>) -> Vec<&Alert> {
        filter_alerts(&self.alerts, search, severity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPreferences {
    pub sms: bool,
    pub whatsapp: bool,
    pub email: bool,
    pub voice: bool,
    pub web_push: bool,
    pub min_severity: Severity,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            sms: true,
            whatsapp: true,
            email: true,
            voice: false,
            web_push: true,
            min_severity: Severity::Medium,
        }
    }
}

impl AlertPreferences {
    pub fn enabled_channels(&self) -> Vec<Channel> {
        [
            (self.sms, Channel::Sms),
            (self.whatsapp, Channel::Whatsapp),
            (self.email, Channel::Email),
            (self.voice, Channel::Voice),
            (self.web_push, Channel::WebPush),
        ]
        .into_iter()
        .filter_map(|(enabled, channel)| enabled.then_some(channel))
        .collect()
    }

    /// Channels an alert of `severity` goes to; empty below the threshold.
    pub fn channels_for(&self, severity: Severity) -> Vec<Channel> {
        if severity < self.min_severity {
            return Vec::new();
        }
        self.enabled_channels()
    }
}

/// Case-insensitive search over title and location, optionally narrowed to
/// one severity.
pub fn filter_alerts<'a>(
    alerts: &'a [Alert],
    search: &str,
    severity: Option<Severity>,
) -> Vec<&'a Alert> {
    let needle = search.trim().to_lowercase();

    alerts
        .iter()
        .filter(|alert| {
            alert.title.to_lowercase().contains(&needle)
                || alert.location.to_lowercase().contains(&needle)
        })
        .filter(|alert| severity.map_or(true, |wanted| alert.severity == wanted))
        .collect()
}
