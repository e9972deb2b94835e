use serde::Serialize;

use crate::models::{IntentCategory, Language, Message};

/// Transcript returned by the simulated voice input.
pub const VOICE_TRANSCRIPT: &str = "मेरे पेट में दर्द हो रहा है और दस्त भी लग रहे हैं";

const WELCOME_HI: &str = "नमस्ते! मैं आरोग्यजल AI सहायक हूं। मैं आपकी स्वास्थ्य और पानी की सुरक्षा संबंधी समस्याओं में मदद कर सकता हूं। आप मुझसे हिंदी या अंग्रेजी में बात कर सकते हैं।";
const WELCOME_EN: &str = "Hello! I'm AarogyaJal AI Assistant. I can help you with health and water safety questions. You can chat with me in Hindi or English.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub intent: IntentCategory,
}

/// Opening messages of every new conversation, Hindi first.
pub fn welcome_messages() -> Vec<Message> {
    vec![
        Message::system(WELCOME_HI, Language::Hi, None),
        Message::system(WELCOME_EN, Language::En, None),
    ]
}

pub fn quick_actions(ui_language: Language) -> [QuickAction; 4] {
    let labels = match ui_language {
        Language::En => ["Water Quality", "Health Symptoms", "Emergency", "Prevention"],
        Language::Hi => ["पानी की गुणवत्ता", "स्वास्थ्य लक्षण", "आपातकाल", "रोकथाम"],
    };

    [
        QuickAction {
            label: labels[0],
            intent: IntentCategory::WaterQuality,
        },
        QuickAction {
            label: labels[1],
            intent: IntentCategory::HealthSymptoms,
        },
        QuickAction {
            label: labels[2],
            intent: IntentCategory::Emergency,
        },
        QuickAction {
            label: labels[3],
            intent: IntentCategory::Prevention,
        },
    ]
}

pub fn input_placeholder(ui_language: Language) -> &'static str {
    match ui_language {
        Language::En => "Ask about health or water safety...",
        Language::Hi => "स्वास्थ्य या पानी की सुरक्षा के बारे में पूछें...",
    }
}
