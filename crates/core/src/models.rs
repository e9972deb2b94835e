use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::En, Self::Hi];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "en-in" | "en-us" | "english" => Some(Self::En),
            "hi" | "hi-in" | "hindi" | "हिंदी" => Some(Self::Hi),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }
}

/// Topic of a user message, listed in classifier priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Emergency,
    WaterQuality,
    HealthSymptoms,
    Prevention,
    Greeting,
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 5] = [
        Self::Emergency,
        Self::WaterQuality,
        Self::HealthSymptoms,
        Self::Prevention,
        Self::Greeting,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        let key = value.trim().to_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "emergency" => Some(Self::Emergency),
            "water_quality" | "waterquality" | "water" => Some(Self::WaterQuality),
            "health_symptoms" | "healthsymptoms" | "symptoms" => Some(Self::HealthSymptoms),
            "prevention" => Some(Self::Prevention),
            "greeting" => Some(Self::Greeting),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::WaterQuality => "water_quality",
            Self::HealthSymptoms => "health_symptoms",
            Self::Prevention => "prevention",
            Self::Greeting => "greeting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    System,
}

/// One entry of a conversation log. Fields are private so a message cannot
/// change after it has been appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: Uuid,
    sender: Sender,
    text: String,
    created_at: DateTime<Utc>,
    language: Language,
    confidence: Option<f32>,
}

impl Message {
    pub fn user(text: impl Into<String>, language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            text: text.into(),
            created_at: Utc::now(),
            language,
            confidence: None,
        }
    }

    pub fn system(text: impl Into<String>, language: Language, confidence: Option<f32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::System,
            text: text.into(),
            created_at: Utc::now(),
            language,
            confidence: confidence.map(|value| value.clamp(0.0, 1.0)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn confidence(&self) -> Option<f32> {
        self.confidence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub language: Language,
    pub intent: IntentCategory,
}

/// A canned reply picked from the response bank.
///
/// `intent` is the bucket the text was served from: `Greeting` when the
/// requested pair had no replies and the greeting fallback answered.
/// `confidence` is cosmetic: it is drawn at random from `[0.7, 1.0)` for
/// display and is not a calibrated probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub language: Language,
    pub intent: IntentCategory,
    pub confidence: f32,
}
