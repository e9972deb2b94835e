use serde::{Deserialize, Serialize};

use crate::models::Language;

pub const SYMPTOM_OPTIONS: [&str; 10] = [
    "Diarrhea",
    "Vomiting",
    "Fever",
    "Abdominal Pain",
    "Dehydration",
    "Nausea",
    "Headache",
    "Fatigue",
    "Loss of Appetite",
    "Skin Rash",
];

const VOICE_NOTE: &str =
    " [Voice input: Patient showing symptoms of waterborne illness, needs immediate attention]";
const KIT_ANALYSIS_NOTE: &str = " [AI Analysis: Test strip shows pH 7.1, Chlorine 0.9 mg/L]";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fixed position handed out by the simulated GPS capture.
pub fn simulated_location() -> (String, GeoLocation) {
    (
        "Village: Rampur, District: Gaya, State: Bihar (GPS: 24.7136, 84.9994)".to_string(),
        GeoLocation {
            latitude: 24.7136,
            longitude: 84.9994,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub reporter_name: String,
    pub reporter_role: String,
    pub location: String,
    pub coordinates: Option<GeoLocation>,
    pub patient_age: Option<u8>,
    pub patient_gender: String,
    pub symptoms: Vec<String>,
    pub severity: String,
    pub duration: String,
    pub water_source: String,
    pub additional_notes: String,
    pub language: Language,
}

impl Default for HealthReport {
    fn default() -> Self {
        Self {
            reporter_name: String::new(),
            reporter_role: String::new(),
            location: String::new(),
            coordinates: None,
            patient_age: None,
            patient_gender: String::new(),
            symptoms: Vec::new(),
            severity: String::new(),
            duration: String::new(),
            water_source: String::new(),
            additional_notes: String::new(),
            language: Language::En,
        }
    }
}

impl HealthReport {
    /// Adds the symptom if absent, removes it otherwise. Returns whether it
    /// is selected afterwards.
    pub fn toggle_symptom(&mut self, symptom: &str) -> bool {
        if let Some(index) = self.symptoms.iter().position(|s| s == symptom) {
            self.symptoms.remove(index);
            false
        } else {
            self.symptoms.push(symptom.to_string());
            true
        }
    }

    pub fn set_location(&mut self, label: String, coordinates: GeoLocation) {
        self.location = label;
        self.coordinates = Some(coordinates);
    }

    pub fn append_voice_note(&mut self) {
        self.additional_notes.push_str(VOICE_NOTE);
    }
}

/// Identifier of a (simulated) field sensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorId(pub String);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub sensor_id: SensorId,
    pub parameter: &'static str,
    pub value: f32,
    pub unit: &'static str,
    pub target: &'static str,
}

/// The canned snapshot every sensor "reports". No device is contacted.
pub fn simulated_sensor_readings(sensor_id: &SensorId) -> Vec<SensorReading> {
    [
        ("ph", 7.2, "pH", "6.5-8.5"),
        ("turbidity", 2.1, "NTU", "<5"),
        ("chlorine", 0.8, "mg/L", "0.2-1.0"),
        ("bacteria", 12.0, "CFU/100ml", "<10"),
        ("tds", 180.0, "mg/L", "<500"),
        ("temperature", 24.5, "°C", "20-25"),
    ]
    .into_iter()
    .map(|(parameter, value, unit, target)| SensorReading {
        sensor_id: sensor_id.clone(),
        parameter,
        value,
        unit,
        target,
    })
    .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualWaterTest {
    pub location: String,
    pub test_date: String,
    pub ph: Option<f32>,
    pub turbidity: Option<f32>,
    pub chlorine: Option<f32>,
    pub bacteria: Option<f32>,
    pub tds: Option<f32>,
    pub temperature: Option<f32>,
    pub notes: String,
}

impl ManualWaterTest {
    /// Fills in the values the simulated test-kit image analysis "reads".
    pub fn apply_kit_analysis(&mut self) {
        self.ph = Some(7.1);
        self.chlorine = Some(0.9);
        self.notes.push_str(KIT_ANALYSIS_NOTE);
    }
}
