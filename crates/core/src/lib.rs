pub mod alerts;
pub mod error;
pub mod intent;
pub mod models;
pub mod prompts;
pub mod quiz;
pub mod reports;
pub mod responses;

pub use alerts::{filter_alerts, Alert, AlertBoard, AlertKind, AlertPreferences, AlertStatus, Channel, Severity};
pub use error::CoreError;
pub use intent::{classify, classify_intent, detect_language, normalize_text};
pub use models::*;
pub use prompts::{input_placeholder, quick_actions, welcome_messages, QuickAction, VOICE_TRANSCRIPT};
pub use quiz::{builtin_quiz, score_quiz, QuizOutcome, QuizQuestion, UserProgress};
pub use reports::{
    simulated_location, simulated_sensor_readings, GeoLocation, HealthReport, ManualWaterTest,
    SensorId, SensorReading, SYMPTOM_OPTIONS,
};
pub use responses::{ResponseBank, CONFIDENCE_RANGE};
