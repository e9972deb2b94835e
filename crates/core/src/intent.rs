use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Classification, IntentCategory, Language};

static DEVANAGARI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{0900}-\u{097F}]").expect("valid devanagari regex"));

const EMERGENCY_KEYWORDS: &[&str] = &["emergency", "urgent", "आपातकाल", "तुरंत"];
const WATER_QUALITY_KEYWORDS: &[&str] = &["water", "contamination", "पानी", "संदूषण"];
const HEALTH_SYMPTOM_KEYWORDS: &[&str] = &[
    "symptom",
    "sick",
    "diarrhea",
    "fever",
    "लक्षण",
    "बीमार",
    "दस्त",
    "बुखार",
];
const PREVENTION_KEYWORDS: &[&str] = &["prevent", "avoid", "रोकथाम", "बचाव"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "नमस्ते", "हैलो"];

/// Keyword sets in priority order. Emergency sits first so that a message
/// mixing topics ("urgent: water smells") is treated as an emergency.
const RULES: &[(IntentCategory, &[&str])] = &[
    (IntentCategory::Emergency, EMERGENCY_KEYWORDS),
    (IntentCategory::WaterQuality, WATER_QUALITY_KEYWORDS),
    (IntentCategory::HealthSymptoms, HEALTH_SYMPTOM_KEYWORDS),
    (IntentCategory::Prevention, PREVENTION_KEYWORDS),
    (IntentCategory::Greeting, GREETING_KEYWORDS),
];

pub fn normalize_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn detect_language(text: &str) -> Language {
    if DEVANAGARI.is_match(text) {
        Language::Hi
    } else {
        Language::En
    }
}

pub fn classify_intent(text: &str) -> IntentCategory {
    let lower = text.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(IntentCategory::Greeting)
}

pub fn classify(text: &str) -> Classification {
    Classification {
        language: detect_language(text),
        intent: classify_intent(text),
    }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
