use std::collections::HashMap;
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::CoreError;
use crate::models::{IntentCategory, Language, Reply};

/// Range the cosmetic confidence value is drawn from.
pub const CONFIDENCE_RANGE: Range<f32> = 0.7..1.0;

/// Canned replies keyed by (language, intent). Read-only once built.
#[derive(Debug, Clone)]
pub struct ResponseBank {
    buckets: HashMap<(Language, IntentCategory), Vec<String>>,
}

impl ResponseBank {
    /// Builds a bank from explicit entries, rejecting empty buckets and
    /// languages without a greeting bucket to fall back on.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (Language, IntentCategory, Vec<S>)>,
        S: Into<String>,
    {
        let mut buckets: HashMap<(Language, IntentCategory), Vec<String>> = HashMap::new();
        for (language, intent, replies) in entries {
            let replies = replies.into_iter().map(Into::into).collect::<Vec<_>>();
            if replies.is_empty() {
                return Err(CoreError::EmptyBucket(language, intent));
            }
            buckets.entry((language, intent)).or_default().extend(replies);
        }

        let bank = Self { buckets };
        bank.validate()?;
        Ok(bank)
    }

    pub fn builtin() -> Self {
        let mut buckets = HashMap::new();
        for (language, intent, replies) in BUILTIN {
            buckets.insert(
                (*language, *intent),
                replies.iter().map(|reply| reply.to_string()).collect(),
            );
        }
        Self { buckets }
    }

    /// Every supported language must have a non-empty greeting bucket, since
    /// that is where any unanswered pair falls back to.
    pub fn validate(&self) -> Result<(), CoreError> {
        for language in Language::ALL {
            if self.non_empty(language, IntentCategory::Greeting).is_none() {
                return Err(CoreError::MissingDefaultBucket(language));
            }
        }
        Ok(())
    }

    /// Drops a bucket, returning its replies. The bank may be left without
    /// a required greeting bucket; `validate` catches that.
    pub fn remove(&mut self, language: Language, intent: IntentCategory) -> Option<Vec<String>> {
        self.buckets.remove(&(language, intent))
    }

    /// Candidates for the pair, or the language's greeting bucket when the
    /// pair has none.
    pub fn candidates(&self, language: Language, intent: IntentCategory) -> Option<&[String]> {
        self.non_empty(language, intent)
            .or_else(|| self.non_empty(language, IntentCategory::Greeting))
    }

    pub fn respond<R>(
        &self,
        language: Language,
        intent: IntentCategory,
        rng: &mut R,
    ) -> Result<Reply, CoreError>
    where
        R: Rng + ?Sized,
    {
        let (served, candidates) = match self.non_empty(language, intent) {
            Some(replies) => (intent, replies),
            None => (
                IntentCategory::Greeting,
                self.non_empty(language, IntentCategory::Greeting)
                    .ok_or(CoreError::MissingDefaultBucket(language))?,
            ),
        };
        let text = candidates
            .choose(&mut *rng)
            .ok_or(CoreError::EmptyBucket(language, served))?
            .clone();

        Ok(Reply {
            text,
            language,
            intent: served,
            confidence: rng.gen_range(CONFIDENCE_RANGE),
        })
    }

    fn non_empty(&self, language: Language, intent: IntentCategory) -> Option<&[String]> {
        self.buckets
            .get(&(language, intent))
            .map(Vec::as_slice)
            .filter(|replies| !replies.is_empty())
    }
}

impl Default for ResponseBank {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN: &[(Language, IntentCategory, &[&str])] = &[
    (
        Language::En,
        IntentCategory::Greeting,
        &[
            "Hello! How can I help you with your health and water safety concerns today?",
            "Hi there! I'm here to assist you with any questions about water quality or health issues.",
            "Welcome! Feel free to ask me anything about water safety, disease prevention, or health symptoms.",
        ],
    ),
    (
        Language::En,
        IntentCategory::WaterQuality,
        &[
            "For water quality concerns, I recommend testing your water source immediately. Boil water for at least 1 minute before drinking if you suspect contamination.",
            "Common signs of water contamination include unusual taste, odor, or color. If you notice any of these, avoid drinking the water and report it to local authorities.",
            "To ensure safe drinking water: 1) Boil for 1 minute, 2) Use water purification tablets, 3) Store in clean containers, 4) Test regularly.",
        ],
    ),
    (
        Language::En,
        IntentCategory::HealthSymptoms,
        &[
            "If you're experiencing diarrhea, vomiting, or stomach pain, it could be water-borne illness. Stay hydrated with clean water and seek medical attention if symptoms persist.",
            "Common water-borne disease symptoms include fever, nausea, and digestive issues. Please consult a healthcare provider for proper diagnosis and treatment.",
            "For immediate relief: drink clean fluids, rest, and avoid solid foods. If symptoms worsen or persist for more than 24 hours, seek medical help.",
        ],
    ),
    (
        Language::En,
        IntentCategory::Prevention,
        &[
            "Prevention tips: 1) Always drink boiled or purified water, 2) Wash hands frequently, 3) Eat freshly cooked food, 4) Avoid street food, 5) Keep surroundings clean.",
            "To prevent water-borne diseases: use proper sanitation, maintain clean water storage, practice good hygiene, and get regular health check-ups.",
            "Community prevention: ensure proper waste disposal, maintain clean water sources, educate others about hygiene, and report contamination immediately.",
        ],
    ),
    (
        Language::En,
        IntentCategory::Emergency,
        &[
            "This seems like an emergency situation. Please contact your local health authorities immediately or call emergency services. In the meantime, avoid the suspected water source.",
            "For urgent health concerns, please seek immediate medical attention. I can provide general guidance, but professional medical care is essential for serious symptoms.",
            "Emergency contacts: Local Health Department, Emergency Services (108), or visit the nearest healthcare facility immediately.",
        ],
    ),
    (
        Language::Hi,
        IntentCategory::Greeting,
        &[
            "नमस्ते! आज मैं आपकी स्वास्थ्य और पानी की सुरक्षा संबंधी समस्याओं में कैसे मदद कर सकता हूं?",
            "आपका स्वागत है! मैं पानी की गुणवत्ता या स्वास्थ्य संबंधी किसी भी प्रश्न में आपकी सहायता के लिए यहां हूं।",
            "नमस्कार! पानी की सुरक्षा, बीमारी की रोकथाम, या स्वास्थ्य के लक्षणों के बारे में कुछ भी पूछने में संकोच न करें।",
        ],
    ),
    (
        Language::Hi,
        IntentCategory::WaterQuality,
        &[
            "पानी की गुणवत्ता की समस्या के लिए, मैं तुरंत आपके पानी के स्रोत की जांच कराने की सलाह देता हूं। यदि संदूषण का संदेह है तो पीने से पहले पानी को कम से कम 1 मिनट तक उबालें।",
            "पानी के संदूषण के सामान्य संकेतों में असामान्य स्वाद, गंध या रंग शामिल हैं। यदि आप इनमें से कोई भी चीज़ देखते हैं, तो पानी पीने से बचें और स्थानीय अधिकारियों को रिपोर्ट करें।",
            "सुरक्षित पेयजल सुनिश्चित करने के लिए: 1) 1 मिनट तक उबालें, 2) पानी शुद्धीकरण गोलियों का उपयोग करें, 3) साफ कंटेनरों में स्टोर करें, 4) नियमित रूप से परीक्षण करें।",
        ],
    ),
    (
        Language::Hi,
        IntentCategory::HealthSymptoms,
        &[
            "यदि आप दस्त, उल्टी या पेट दर्द का अनुभव कर रहे हैं, तो यह पानी से होने वाली बीमारी हो सकती है। साफ पानी से हाइड्रेटेड रहें और यदि लक्षण बने रहते हैं तो चिकित्सा सहायता लें।",
            "पानी से होने वाली बीमारी के सामान्य लक्षणों में बुखार, मतली और पाचन संबंधी समस्याएं शामिल हैं। कृपया उचित निदान और उपचार के लिए किसी स्वास्थ्य सेवा प्रदाता से सलाह लें।",
            "तत्काल राहत के लिए: साफ तरल पदार्थ पिएं, आराम करें, और ठोस भोजन से बचें। यदि लक्षण बिगड़ते हैं या 24 घंटे से अधिक समय तक बने रहते हैं, तो चिकित्सा सहायता लें।",
        ],
    ),
    (
        Language::Hi,
        IntentCategory::Prevention,
        &[
            "रोकथाम के उपाय: 1) हमेशा उबला या शुद्ध पानी पिएं, 2) बार-बार हाथ धोएं, 3) ताज़ा पका हुआ भोजन खाएं, 4) स्ट्रीट फूड से बचें, 5) आसपास की सफाई रखें।",
            "पानी से होने वाली बीमारियों को रोकने के लिए: उचित स्वच्छता का उपयोग करें, साफ पानी का भंडारण बनाए रखें, अच्छी स्वच्छता का अभ्यास करें, और नियमित स्वास्थ्य जांच कराएं।",
            "सामुदायिक रोकथाम: उचित अपशिष्ट निपटान सुनिश्चित करें, साफ पानी के स्रोतों को बनाए रखें, दूसरों को स्वच्छता के बारे में शिक्षित करें, और तुरंत संदूषण की रिपोर्ट करें।",
        ],
    ),
    (
        Language::Hi,
        IntentCategory::Emergency,
        &[
            "यह एक आपातकालीन स्थिति लगती है। कृपया तुरंत अपने स्थानीय स्वास्थ्य अधिकारियों से संपर्क करें या आपातकालीन सेवाओं को कॉल करें। इस बीच, संदिग्ध पानी के स्रोत से बचें।",
            "तत्काल स्वास्थ्य चिंताओं के लिए, कृपया तुरंत चिकित्सा सहायता लें। मैं सामान्य मार्गदर्शन प्रदान कर सकता हूं, लेकिन गंभीर लक्षणों के लिए पेशेवर चिकित्सा देखभाल आवश्यक है।",
            "आपातकालीन संपर्क: स्थानीय स्वास्थ्य विभाग, आपातकालीन सेवाएं (108), या तुरंत निकटतम स्वास्थ्य सुविधा पर जाएं।",
        ],
    ),
];
